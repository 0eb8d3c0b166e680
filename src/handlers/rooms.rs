use std::io::Write;

use crate::errors::DeskResult;
use crate::inventory::Inventory;

pub fn view_available<W: Write>(inventory: &Inventory, out: &mut W) -> DeskResult<()> {
    writeln!(out, "Available rooms:")?;
    for room in inventory.available() {
        writeln!(out, "{}", room)?;
    }
    Ok(())
}

pub fn list_all<W: Write>(inventory: &Inventory, out: &mut W) -> DeskResult<()> {
    writeln!(out, "All rooms:")?;
    for room in inventory.all() {
        writeln!(out, "{}", room)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{memory_pool, HotelStore};

    async fn seeded_inventory(rooms: &[(i64, &str, bool)]) -> Inventory {
        let pool = memory_pool(rooms).await;
        Inventory::load(HotelStore::from_pool(pool)).await
    }

    #[tokio::test]
    async fn test_view_available_skips_booked_rooms() {
        let inventory = seeded_inventory(&[
            (101, "Single", false),
            (102, "Double", true),
            (201, "Suite", true),
        ])
        .await;
        let mut out = Vec::new();

        view_available(&inventory, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Available rooms:\nRoom 102 (Double) - Available\nRoom 201 (Suite) - Available\n"
        );
    }

    #[tokio::test]
    async fn test_view_available_with_no_rooms_prints_header_only() {
        let inventory = seeded_inventory(&[(101, "Single", false)]).await;
        let mut out = Vec::new();

        view_available(&inventory, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Available rooms:\n");
    }

    #[tokio::test]
    async fn test_list_all_shows_both_states() {
        let inventory = seeded_inventory(&[(101, "Single", false), (102, "Double", true)]).await;
        let mut out = Vec::new();

        list_all(&inventory, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "All rooms:\nRoom 101 (Single) - Booked\nRoom 102 (Double) - Available\n"
        );
    }
}
