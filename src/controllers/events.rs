use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{Event, Seat};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events/{event_id}", get(get_event))
        .route("/events/{event_id}/seats", get(get_seats))
}

// GET /api/events/{event_id}
async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let event = Event::find(&state.db.pool, event_id).await.map_err(|e| {
        tracing::error!("get_event sql error: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load event".to_string())
    })?;

    match event {
        Some(event) => Ok((StatusCode::OK, Json(event))),
        None => Err((StatusCode::NOT_FOUND, "Event not found".to_string())),
    }
}

// GET /api/events/{event_id}/seats
async fn get_seats(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let seats = Seat::list_for_event(&state.db.pool, event_id)
        .await
        .map_err(|e| {
            tracing::error!("get_seats sql error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load seats".to_string())
        })?;

    Ok((StatusCode::OK, Json(seats)))
}
