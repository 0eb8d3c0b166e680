use serde::{Deserialize, Serialize};
use std::fmt;

/// Room categories with their fixed nightly rates. Rows holding any
/// other type string load as `Other` at rate 0.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Single,
    Double,
    Suite,
    Other,
}

impl RoomKind {
    pub fn price(self) -> f64 {
        match self {
            RoomKind::Single => 1000.0,
            RoomKind::Double => 1700.0,
            RoomKind::Suite => 3000.0,
            RoomKind::Other => 0.0,
        }
    }
}

impl From<&str> for RoomKind {
    fn from(kind: &str) -> Self {
        match kind {
            "Single" => RoomKind::Single,
            "Double" => RoomKind::Double,
            "Suite" => RoomKind::Suite,
            _ => RoomKind::Other,
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomKind::Single => "Single",
            RoomKind::Double => "Double",
            RoomKind::Suite => "Suite",
            RoomKind::Other => "Other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Room {
    pub number: i64,
    pub kind: RoomKind,
    pub available: bool,
    pub price: f64,
}

impl Room {
    pub fn new(number: i64, kind: RoomKind, available: bool) -> Self {
        Self {
            number,
            kind,
            available,
            price: kind.price(),
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}) - {}",
            self.number,
            self.kind,
            if self.available { "Available" } else { "Booked" }
        )
    }
}
