use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::models::booking::BookingRequest;
use crate::reservation::ReservationError;
use crate::services::booking;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/book", post(book_seat))
}

// POST /api/book
async fn book_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> impl IntoResponse {
    match booking::attempt_booking(&state.db.pool, &req).await {
        Ok(confirmation) => (
            StatusCode::OK,
            Json(json!({
                "status": "booked",
                "booking_id": confirmation.booking_id,
                "seat_id": confirmation.seat_id,
            })),
        ),
        Err(e) => error_response(e),
    }
}

/// Outcome kind → HTTP status. A Conflict gets its own status so clients
/// can tell "pick another seat" apart from "something broke".
fn error_response(err: ReservationError) -> (StatusCode, Json<serde_json::Value>) {
    let (status, message) = match &err {
        ReservationError::Validation(msg) => (StatusCode::BAD_REQUEST, *msg),
        ReservationError::Conflict => (StatusCode::CONFLICT, "Too slow! Seat taken."),
        ReservationError::Transient(e) => {
            tracing::error!("booking failed on storage error: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Booking could not be completed, please retry",
            )
        }
        ReservationError::Fatal(detail) => {
            tracing::error!("reservation invariant violated: {}", detail);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    };
    (status, Json(json!({ "error": message })))
}
