use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Ledger entry for one confirmed reservation. Written only by the
/// reservation protocol, in the same transaction as the seat transition,
/// and never updated afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub seat_id: Uuid,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub async fn for_seat(pool: &sqlx::PgPool, seat_id: Uuid) -> sqlx::Result<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT id, user_id, event_id, seat_id, status, created_at
             FROM bookings WHERE seat_id = $1",
        )
        .bind(seat_id)
        .fetch_all(pool)
        .await
    }
}

/// Transient input to a booking attempt, never persisted as-is.
// user_id arrives in the request body for now; it should come from an
// authenticated session once an identity boundary exists.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub event_id: Uuid,
    pub seat_id: Uuid,
    pub user_id: Uuid,
}
