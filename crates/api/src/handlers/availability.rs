//! # Availability Handler
//!
//! Answers the question "can this provider be booked at this instant?" by
//! resolving the three schedule exception layers in their fixed precedence
//! order:
//!
//! 1. A day off makes the whole date unavailable, whatever else is stored.
//! 2. Otherwise, if the date carries override slots, only those count; the
//!    weekly template is not consulted at all for that date.
//! 3. Otherwise the recurring weekly template for that weekday applies.
//!
//! A provider with no schedule rows resolves to unavailable everywhere —
//! absence of a schedule means closed, not open. Slots are discrete
//! whole-minute instants the requested time must match exactly; range or
//! duration semantics are deliberately unsupported.
//!
//! The answer is advisory for bookers: between this check and the insert,
//! another client can take the slot. The uniqueness constraint on
//! appointments settles such races.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};
use slotbook_core::{errors::BookingError, models::schedule::AvailabilityResponse};

/// Query parameters for the availability check endpoint
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Provider whose schedule is consulted
    pub provider_id: Uuid,

    /// Instant to check, RFC 3339
    pub at: DateTime<Utc>,
}

/// Resolves availability for one provider-instant
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?provider_id=<uuid>&at=2025-06-09T10:00:00Z
/// ```
#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let available = slotbook_db::repositories::availability::is_available(
        &state.db_pool,
        query.provider_id,
        query.at,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(AvailabilityResponse { available }))
}
