use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use crate::{
    middleware::{auth::AuthenticatedClient, error_handling::AppError},
    ApiState,
};
use slotbook_core::{
    errors::BookingError,
    models::schedule::{
        format_slot, parse_slots, DayOfWeek, DayScheduleResponse, ReplaceDateSlotsRequest,
        ReplaceWeeklySlotsRequest, SetDayOffRequest,
    },
};

#[axum::debug_handler]
pub async fn set_day_off(
    State(state): State<Arc<ApiState>>,
    provider: AuthenticatedClient,
    Json(payload): Json<SetDayOffRequest>,
) -> Result<StatusCode, AppError> {
    slotbook_db::repositories::schedule::set_day_off(
        &state.db_pool,
        provider.0,
        payload.date,
        payload.is_day_off,
    )
    .await
    .map_err(BookingError::Database)?;

    info!(
        "day off updated: provider={}, date={}, is_day_off={}",
        provider.0, payload.date, payload.is_day_off
    );

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn replace_weekly_slots(
    State(state): State<Arc<ApiState>>,
    provider: AuthenticatedClient,
    Json(payload): Json<ReplaceWeeklySlotsRequest>,
) -> Result<StatusCode, AppError> {
    // Validate before the transaction opens
    let day_of_week: DayOfWeek = payload.day_of_week.parse()?;
    let slots = parse_slots(&payload.slots)?;

    slotbook_db::repositories::schedule::replace_weekly_slots(
        &state.db_pool,
        provider.0,
        day_of_week,
        &slots,
    )
    .await
    .map_err(BookingError::Database)?;

    info!(
        "weekly slots replaced: provider={}, day={}, count={}",
        provider.0,
        day_of_week,
        slots.len()
    );

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn replace_date_slots(
    State(state): State<Arc<ApiState>>,
    provider: AuthenticatedClient,
    Json(payload): Json<ReplaceDateSlotsRequest>,
) -> Result<StatusCode, AppError> {
    let slots = parse_slots(&payload.slots)?;

    slotbook_db::repositories::schedule::replace_date_slots(
        &state.db_pool,
        provider.0,
        payload.date,
        &slots,
    )
    .await
    .map_err(BookingError::Database)?;

    info!(
        "date slots replaced: provider={}, date={}, count={}",
        provider.0,
        payload.date,
        slots.len()
    );

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn clear_date_slots(
    State(state): State<Arc<ApiState>>,
    provider: AuthenticatedClient,
    Path(date): Path<NaiveDate>,
) -> Result<StatusCode, AppError> {
    let removed =
        slotbook_db::repositories::schedule::clear_date_slots(&state.db_pool, provider.0, date)
            .await
            .map_err(BookingError::Database)?;

    if removed == 0 {
        return Err(AppError(BookingError::NotFound(format!(
            "no date slots for {date}"
        ))));
    }

    info!(
        "date slots cleared: provider={}, date={}, removed={}",
        provider.0, date, removed
    );

    Ok(StatusCode::NO_CONTENT)
}

/// A provider's view of one date: upcoming days off, the slots that survive
/// the precedence rules for that date, and the times already booked.
#[axum::debug_handler]
pub async fn get_day_schedule(
    State(state): State<Arc<ApiState>>,
    provider: AuthenticatedClient,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DayScheduleResponse>, AppError> {
    let days_off = slotbook_db::repositories::schedule::days_off(&state.db_pool, provider.0)
        .await
        .map_err(BookingError::Database)?;

    let schedule =
        slotbook_db::repositories::availability::day_schedule(&state.db_pool, provider.0, date)
            .await
            .map_err(BookingError::Database)?;

    let appointments = slotbook_db::repositories::appointment::get_appointments_by_provider_and_date(
        &state.db_pool,
        provider.0,
        date,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = DayScheduleResponse {
        date,
        days_off,
        slots: schedule
            .bookable_slots()
            .iter()
            .copied()
            .map(format_slot)
            .collect(),
        appointments: appointments
            .iter()
            .map(|a| format_slot(a.scheduled_at.time()))
            .collect(),
    };

    Ok(Json(response))
}
