use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::models::User;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/users", post(create_user))
}

#[derive(Debug, Deserialize, Validate)]
struct RegisterRequest {
    #[validate(email)]
    email: String,
    #[validate(length(min = 8))]
    password: String,
    #[validate(length(min = 1))]
    name: String,
}

// POST /api/users
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    req.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Registration failed".to_string())
    })?;

    let user = User {
        id: Uuid::new_v4(),
        email: req.email,
        password_hash,
        full_name: req.name,
        created_at: Utc::now().naive_utc(),
    };

    user.insert(&state.db.pool).await.map_err(|e| {
        if let sqlx::Error::Database(db) = &e {
            // unique_violation on users.email
            if db.code().as_deref() == Some("23505") {
                return (StatusCode::CONFLICT, "Email already registered".to_string());
            }
        }
        tracing::error!("create_user sql error: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Registration failed".to_string())
    })?;

    Ok((StatusCode::CREATED, Json(user)))
}
