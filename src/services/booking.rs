//! Booking coordinator: the single entry point for a booking attempt.
//!
//! Validates the request shape, invokes the reservation protocol exactly
//! once, and lets the typed outcome cross the boundary unchanged. A
//! Conflict is a final answer here — whether to retry with another seat is
//! the client's decision.

use sqlx::PgPool;

use crate::models::booking::BookingRequest;
use crate::reservation::{self, BookingConfirmation, ReservationError};

pub async fn attempt_booking(
    pool: &PgPool,
    req: &BookingRequest,
) -> Result<BookingConfirmation, ReservationError> {
    validate(req)?;
    reservation::reserve_seat(pool, req.seat_id, req.user_id).await
}

/// Identifier well-formedness only. Whether the seat/event actually exist
/// is settled by the conditional write itself.
fn validate(req: &BookingRequest) -> Result<(), ReservationError> {
    if req.event_id.is_nil() {
        return Err(ReservationError::Validation("event_id is required"));
    }
    if req.seat_id.is_nil() {
        return Err(ReservationError::Validation("seat_id is required"));
    }
    if req.user_id.is_nil() {
        return Err(ReservationError::Validation("user_id is required"));
    }
    Ok(())
}
