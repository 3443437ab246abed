//! # Appointment Handlers
//!
//! The booking transaction lives here. Creating an appointment is an
//! optimistic check followed by an authoritative insert:
//!
//! 1. Validate the candidate — an invalid request never reaches storage.
//! 2. Ask the availability resolver whether the provider is open at the
//!    requested instant.
//! 3. Insert. Two clients can both pass step 2 for the same instant; the
//!    unique constraint on (provider_id, scheduled_at) decides the race and
//!    the loser receives a conflict, never a silent overwrite. No lock spans
//!    steps 2 and 3 — that gap is an accepted part of the consistency model.
//! 4. Announce the booking on the bus. The announcement is best-effort and
//!    detached; the caller's result is already decided when it fires.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthenticatedClient, error_handling::AppError},
    ApiState,
};
use slotbook_core::{
    errors::BookingError,
    models::appointment::{
        Appointment, AppointmentStatus, CreateAppointmentRequest, CreateAppointmentResponse,
        NewAppointment,
    },
};
use slotbook_notify::events::AppointmentEvent;

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    client: AuthenticatedClient,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<CreateAppointmentResponse>), AppError> {
    let candidate = NewAppointment {
        client_id: client.0,
        provider_id: payload.provider_id,
        scheduled_at: payload.scheduled_at,
    };
    candidate.validate(Utc::now())?;

    // Advisory check; the unique constraint at insert time is the final
    // arbiter when two bookings race for the same instant.
    let available = slotbook_db::repositories::availability::is_available(
        &state.db_pool,
        candidate.provider_id,
        candidate.scheduled_at,
    )
    .await
    .map_err(BookingError::Database)?;

    if !available {
        return Err(AppError(BookingError::ProviderUnavailable));
    }

    let db_appointment = slotbook_db::repositories::appointment::create_appointment(
        &state.db_pool,
        candidate.client_id,
        candidate.provider_id,
        candidate.scheduled_at,
        AppointmentStatus::Pending,
    )
    .await?;

    let appointment = db_appointment.into_model()?;

    info!(
        "appointment created: id={}, provider={}, scheduled_at={}",
        appointment.id, appointment.provider_id, appointment.scheduled_at
    );

    state
        .notifier
        .appointment_created(AppointmentEvent::from_appointment(&appointment, Utc::now()));

    Ok((
        StatusCode::CREATED,
        Json(CreateAppointmentResponse { id: appointment.id }),
    ))
}

/// Lists the authenticated client's appointments, soonest first.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    client: AuthenticatedClient,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let rows = slotbook_db::repositories::appointment::get_appointments_by_client_id(
        &state.db_pool,
        client.0,
    )
    .await
    .map_err(BookingError::Database)?;

    let appointments = rows
        .into_iter()
        .map(|row| row.into_model())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(appointments))
}

/// Cancels an appointment owned by the authenticated client.
///
/// Only the booking client may cancel; a mismatch is an authorization
/// failure and deletes nothing.
#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    client: AuthenticatedClient,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let db_appointment =
        slotbook_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {id} not found")))?;

    if db_appointment.client_id != client.0 {
        return Err(AppError(BookingError::Authorization(
            "appointments can only be canceled by the client who booked them".to_string(),
        )));
    }

    let deleted =
        slotbook_db::repositories::appointment::delete_appointment(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?;

    if !deleted {
        // Lost a race with another cancellation of the same appointment.
        return Err(AppError(BookingError::NotFound(format!(
            "Appointment with ID {id} not found"
        ))));
    }

    let appointment = db_appointment.into_model()?;

    info!("appointment canceled: id={}, client={}", id, client.0);

    state
        .notifier
        .appointment_canceled(AppointmentEvent::from_appointment(&appointment, Utc::now()));

    Ok(StatusCode::NO_CONTENT)
}
