//! reservation.rs
//!
//! The seat reservation protocol: atomically transition one seat from
//! AVAILABLE to BOOKED and record the booking, as a single transaction.
//!
//! Concurrent claims on the same seat are resolved entirely by the
//! conditional UPDATE — the status predicate is evaluated together with the
//! write inside Postgres, so exactly one claimant sees a row affected and
//! everyone else gets a clean Conflict. No in-process locking, which also
//! means multiple instances of this service can run against the same
//! database without extra coordination.

use sqlx::PgPool;
use uuid::Uuid;

/// Attempts restarted on a retryable storage error before giving up.
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    /// Malformed booking request, rejected before any storage access.
    #[error("invalid booking request: {0}")]
    Validation(&'static str),

    /// The seat was not AVAILABLE at the moment of the guarded write.
    /// Expected under contention; final, never retried.
    #[error("seat is already booked or unavailable")]
    Conflict,

    /// Storage unreachable or failed mid-transaction. Nothing is guaranteed
    /// committed; the caller should re-query seat state before assuming
    /// anything.
    #[error("booking could not be completed")]
    Transient(#[source] sqlx::Error),

    /// The store broke the reservation contract (e.g. a BOOKED seat with no
    /// assigned user). Unreachable with a healthy database.
    #[error("reservation invariant violated: {0}")]
    Fatal(String),
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub seat_id: Uuid,
}

/// Claims `seat_id` for `user_id`, or fails with no partial effect.
///
/// Retries the whole transaction a bounded number of times when Postgres
/// reports a serialization failure or deadlock; each attempt re-evaluates
/// the status predicate from scratch. A Conflict is returned as-is.
pub async fn reserve_seat(
    pool: &PgPool,
    seat_id: Uuid,
    user_id: Uuid,
) -> Result<BookingConfirmation, ReservationError> {
    let mut attempt = 1;
    loop {
        match try_reserve(pool, seat_id, user_id).await {
            Err(ReservationError::Transient(e)) if attempt < MAX_ATTEMPTS && is_retryable(&e) => {
                tracing::warn!(
                    %seat_id,
                    attempt,
                    error = ?e,
                    "retrying reservation after retryable storage error"
                );
                attempt += 1;
            }
            outcome => return outcome,
        }
    }
}

/// One reservation attempt: one transaction, two writes.
async fn try_reserve(
    pool: &PgPool,
    seat_id: Uuid,
    user_id: Uuid,
) -> Result<BookingConfirmation, ReservationError> {
    let mut tx = pool.begin().await.map_err(ReservationError::Transient)?;

    // Conditional state transition. The WHERE clause carries the whole
    // safety argument: only a seat that is still AVAILABLE can be claimed,
    // and Postgres applies the check and the mutation indivisibly.
    let claimed = sqlx::query_as::<_, (Uuid, Option<Uuid>, i32)>(
        r#"
        UPDATE seats
        SET status = 'BOOKED', user_id = $1, version = version + 1
        WHERE id = $2 AND status = 'AVAILABLE'
        RETURNING event_id, user_id, version
        "#,
    )
    .bind(user_id)
    .bind(seat_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(ReservationError::Transient)?;

    // No row matched: the seat is gone (already BOOKED, possibly by a
    // concurrent winner) or the id does not resolve. Either way, nothing
    // was written.
    let Some((event_id, assigned, _version)) = claimed else {
        let _ = tx.rollback().await;
        return Err(ReservationError::Conflict);
    };

    if assigned != Some(user_id) {
        tracing::error!(
            %seat_id,
            ?assigned,
            "conditional write committed a BOOKED seat without the claiming user"
        );
        let _ = tx.rollback().await;
        return Err(ReservationError::Fatal(format!(
            "seat {seat_id} transitioned to BOOKED with assignee {assigned:?}"
        )));
    }

    // Ledger entry, same transaction: either both the seat transition and
    // the booking row become visible, or neither does.
    let booking_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO bookings (id, user_id, event_id, seat_id, status)
        VALUES ($1, $2, $3, $4, 'CONFIRMED')
        "#,
    )
    .bind(booking_id)
    .bind(user_id)
    .bind(event_id)
    .bind(seat_id)
    .execute(&mut *tx)
    .await
    .map_err(ReservationError::Transient)?;

    tx.commit().await.map_err(ReservationError::Transient)?;

    tracing::info!(%seat_id, %user_id, %booking_id, "seat booked");
    Ok(BookingConfirmation { booking_id, seat_id })
}

/// Serialization failure (40001) and deadlock (40P01) are safe to retry
/// because the aborted transaction had no visible effect.
fn is_retryable(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.code().as_deref(), Some("40001") | Some("40P01"))
        }
        _ => false,
    }
}
