use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Seat lifecycle state, stored as text. There is no path back to
/// `Available` — no cancellation or hold-expiry flow exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SeatStatus {
    Available,
    Booked,
}

/// One unit of inventory. A seat is BOOKED exactly when `user_id` is set,
/// and `version` counts successful transitions; the migration enforces both
/// as CHECK constraints.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Seat {
    pub id: Uuid,
    pub event_id: Uuid,
    pub section: String,
    pub row_number: String,
    pub seat_number: String,
    pub status: SeatStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub version: i32,
}

impl Seat {
    /// Seat list for the display path. No consistency obligation beyond
    /// ordinary read isolation — callers only render it.
    pub async fn list_for_event(pool: &sqlx::PgPool, event_id: Uuid) -> sqlx::Result<Vec<Seat>> {
        sqlx::query_as::<_, Seat>(
            r#"
            SELECT id, event_id, section, row_number, seat_number, status, user_id, version
            FROM seats
            WHERE event_id = $1
            ORDER BY section, row_number, seat_number
            "#,
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }

    pub async fn find(pool: &sqlx::PgPool, seat_id: Uuid) -> sqlx::Result<Option<Seat>> {
        sqlx::query_as::<_, Seat>(
            "SELECT id, event_id, section, row_number, seat_number, status, user_id, version
             FROM seats WHERE id = $1",
        )
        .bind(seat_id)
        .fetch_optional(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_stored_text() {
        assert_eq!(serde_json::to_string(&SeatStatus::Available).unwrap(), "\"AVAILABLE\"");
        assert_eq!(serde_json::to_string(&SeatStatus::Booked).unwrap(), "\"BOOKED\"");
    }
}
