use crate::db::HotelStore;
use crate::models::booking::Booking;
use crate::models::room::Room;

/// Owns the authoritative in-memory room collection together with the
/// gateway that mirrors it. The in-memory flag changes first; the row
/// update behind it is best-effort (see `HotelStore`).
pub struct Inventory {
    rooms: Vec<Room>,
    store: HotelStore,
}

impl Inventory {
    pub async fn load(store: HotelStore) -> Self {
        let rooms = store.load_rooms().await;
        Self { rooms, store }
    }

    pub fn all(&self) -> &[Room] {
        &self.rooms
    }

    pub fn available(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.available)
    }

    /// Books the room if it exists and is still available, returning its
    /// price. Unknown or already-booked numbers change nothing.
    pub async fn book(&mut self, number: i64) -> Option<f64> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.number == number && room.available)?;
        room.available = false;
        let price = room.price;

        self.store.set_room_availability(number, false).await;
        Some(price)
    }

    pub async fn save_booking(&self, booking: &Booking) {
        self.store.save_booking(booking).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use crate::models::customer::Customer;

    async fn seeded_inventory(rooms: &[(i64, &str, bool)]) -> (Inventory, sqlx::SqlitePool) {
        let pool = memory_pool(rooms).await;
        let inventory = Inventory::load(HotelStore::from_pool(pool.clone())).await;
        (inventory, pool)
    }

    #[tokio::test]
    async fn test_book_flips_flag_and_persists() {
        let (mut inventory, pool) = seeded_inventory(&[(101, "Single", true)]).await;

        let price = inventory.book(101).await;

        assert_eq!(price, Some(1000.0));
        assert!(inventory.available().next().is_none());

        let available: bool =
            sqlx::query_scalar("SELECT available FROM rooms WHERE room_number = 101")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert!(!available);
    }

    #[tokio::test]
    async fn test_book_rejects_unknown_room() {
        let (mut inventory, _pool) = seeded_inventory(&[(101, "Single", true)]).await;

        assert_eq!(inventory.book(999).await, None);
        assert_eq!(inventory.available().count(), 1);
    }

    #[tokio::test]
    async fn test_book_rejects_already_booked_room() {
        let (mut inventory, _pool) = seeded_inventory(&[(101, "Single", true)]).await;

        assert_eq!(inventory.book(101).await, Some(1000.0));
        assert_eq!(inventory.book(101).await, None);
    }

    #[tokio::test]
    async fn test_available_preserves_load_order() {
        let (inventory, _pool) = seeded_inventory(&[
            (101, "Single", true),
            (102, "Double", true),
            (201, "Suite", false),
        ])
        .await;

        let numbers: Vec<i64> = inventory.available().map(|room| room.number).collect();
        assert_eq!(numbers, vec![101, 102]);
    }

    #[tokio::test]
    async fn test_save_booking_delegates_to_store() {
        let (inventory, pool) = seeded_inventory(&[]).await;
        let customer = Customer::new(
            "Ana".into(),
            "555".into(),
            "Main St".into(),
            "ana@mail".into(),
        );

        inventory.save_booking(&Booking::new(customer, vec![7])).await;

        let rooms: String = sqlx::query_scalar("SELECT rooms FROM bookings")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rooms, "7,");
    }
}
