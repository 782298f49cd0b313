use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub total_seats: i32,
    pub date: NaiveDateTime,
}

impl Event {
    pub async fn find(pool: &sqlx::PgPool, event_id: Uuid) -> sqlx::Result<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT id, name, total_seats, date FROM events WHERE id = $1")
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }
}
