use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbAppointment;
use slotbook_core::errors::{BookingError, BookingResult};
use slotbook_core::models::appointment::AppointmentStatus;

/// Inserts a new appointment row.
///
/// A uniqueness violation on (provider_id, scheduled_at) means another
/// booking won the race for this instant and is reported as
/// [`BookingError::Conflict`]; every other database failure is opaque.
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    client_id: Uuid,
    provider_id: Uuid,
    scheduled_at: DateTime<Utc>,
    status: AppointmentStatus,
) -> BookingResult<DbAppointment> {
    let id = Uuid::new_v4();

    let result = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (id, client_id, provider_id, scheduled_at, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, client_id, provider_id, scheduled_at, status, created_at
        "#,
    )
    .bind(id)
    .bind(client_id)
    .bind(provider_id)
    .bind(scheduled_at)
    .bind(status.as_str())
    .fetch_one(pool)
    .await;

    match result {
        Ok(appointment) => Ok(appointment),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(BookingError::Conflict)
        }
        Err(err) => Err(BookingError::Database(err.into())),
    }
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, provider_id, scheduled_at, status, created_at
        FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Deletes an appointment row. Returns false when no row had that id.
pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_appointments_by_client_id(
    pool: &Pool<Postgres>,
    client_id: Uuid,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, provider_id, scheduled_at, status, created_at
        FROM appointments
        WHERE client_id = $1
        ORDER BY scheduled_at ASC
        "#,
    )
    .bind(client_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn get_appointments_by_provider_id(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, provider_id, scheduled_at, status, created_at
        FROM appointments
        WHERE provider_id = $1
        ORDER BY scheduled_at ASC
        "#,
    )
    .bind(provider_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// A provider's appointments falling on one UTC calendar date.
pub async fn get_appointments_by_provider_and_date(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let day_start = date.and_time(NaiveTime::MIN).and_utc();
    let day_end = day_start + chrono::Duration::days(1);

    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, client_id, provider_id, scheduled_at, status, created_at
        FROM appointments
        WHERE provider_id = $1 AND scheduled_at >= $2 AND scheduled_at < $3
        ORDER BY scheduled_at ASC
        "#,
    )
    .bind(provider_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}
