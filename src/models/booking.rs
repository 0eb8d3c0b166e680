use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::customer::Customer;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    pub customer: Customer,
    pub rooms: Vec<i64>,
}

impl Booking {
    pub fn new(customer: Customer, rooms: Vec<i64>) -> Self {
        Self { customer, rooms }
    }

    /// Column value for `bookings.rooms`: comma-joined room numbers with
    /// a trailing comma. Existing rows use this exact format.
    pub fn room_list(&self) -> String {
        let mut list = String::new();
        for number in &self.rooms {
            list.push_str(&number.to_string());
            list.push(',');
        }
        list
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer: {}\nRooms: ", self.customer)?;
        for number in &self.rooms {
            write!(f, "{} ", number)?;
        }
        Ok(())
    }
}
