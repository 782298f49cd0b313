use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub created_at: NaiveDateTime,
}

impl User {
    pub async fn insert(&self, pool: &sqlx::PgPool) -> sqlx::Result<()> {
        sqlx::query(
            "INSERT INTO users (id, email, password_hash, full_name, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(self.id)
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(&self.full_name)
        .bind(self.created_at)
        .execute(pool)
        .await?;
        Ok(())
    }
}
