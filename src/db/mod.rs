use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::models::booking::Booking;
use crate::models::room::{Room, RoomKind};

#[derive(sqlx::FromRow)]
struct RoomRow {
    room_number: i64,
    kind: String,
    available: bool,
}

/// Persistence gateway for the `rooms` and `bookings` tables.
///
/// Every operation fails soft: errors are logged and the session keeps
/// running on the in-memory state. Statements commit independently;
/// availability updates and the booking insert are not atomic with each
/// other.
pub struct HotelStore {
    pool: Option<SqlitePool>,
}

impl HotelStore {
    /// Opens the database and applies pending migrations. A connection
    /// failure yields a disconnected store whose operations are no-ops.
    pub async fn connect(database_url: &str) -> Self {
        // One session, one connection, acquired per statement.
        let pool = match SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
        {
            Ok(pool) => pool,
            Err(err) => {
                log::error!("Database connection failed: {}", err);
                return Self { pool: None };
            }
        };

        log::info!("Running migrations...");
        if let Err(err) = sqlx::migrate!("./migrations").run(&pool).await {
            log::error!("Failed to run migrations: {}", err);
        }

        Self { pool: Some(pool) }
    }

    #[cfg(test)]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool: Some(pool) }
    }

    #[cfg(test)]
    pub fn disconnected() -> Self {
        Self { pool: None }
    }

    pub async fn load_rooms(&self) -> Vec<Room> {
        let pool = match &self.pool {
            Some(pool) => pool,
            None => return Vec::new(),
        };

        let rows = sqlx::query_as::<_, RoomRow>(
            "SELECT room_number, type AS kind, available FROM rooms",
        )
        .fetch_all(pool)
        .await;

        match rows {
            Ok(rows) => rows
                .into_iter()
                .map(|row| {
                    Room::new(
                        row.room_number,
                        RoomKind::from(row.kind.as_str()),
                        row.available,
                    )
                })
                .collect(),
            Err(err) => {
                log::error!("Error loading rooms: {}", err);
                Vec::new()
            }
        }
    }

    pub async fn set_room_availability(&self, room_number: i64, available: bool) {
        let pool = match &self.pool {
            Some(pool) => pool,
            None => return,
        };

        let updated = sqlx::query("UPDATE rooms SET available = ? WHERE room_number = ?")
            .bind(available)
            .bind(room_number)
            .execute(pool)
            .await;

        if let Err(err) = updated {
            log::error!("Error updating room availability: {}", err);
        }
    }

    pub async fn save_booking(&self, booking: &Booking) {
        let pool = match &self.pool {
            Some(pool) => pool,
            None => return,
        };

        let inserted = sqlx::query(
            "INSERT INTO bookings (customer_name, contact, address, email, rooms, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&booking.customer.name)
        .bind(&booking.customer.contact)
        .bind(&booking.customer.address)
        .bind(&booking.customer.email)
        .bind(booking.room_list())
        .bind(chrono::Utc::now().naive_utc())
        .execute(pool)
        .await;

        if let Err(err) = inserted {
            log::error!("Error saving booking: {}", err);
        }
    }
}

#[cfg(test)]
pub async fn memory_pool(rooms: &[(i64, &str, bool)]) -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    for (number, kind, available) in rooms {
        sqlx::query("INSERT INTO rooms (room_number, type, available) VALUES (?, ?, ?)")
            .bind(*number)
            .bind(*kind)
            .bind(*available)
            .execute(&pool)
            .await
            .expect("seed room");
    }

    pool
}
