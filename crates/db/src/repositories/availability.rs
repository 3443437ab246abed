use chrono::{DateTime, Datelike, NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{DbDateSlot, DbWeeklySlot};
use slotbook_core::availability::DaySchedule;
use slotbook_core::models::schedule::DayOfWeek;

/// Loads the full schedule snapshot for one provider-date: the day-off
/// marker, the date overrides, and the weekly template for that weekday.
/// Precedence between the layers is applied by [`DaySchedule`], not here.
pub async fn day_schedule(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    date: NaiveDate,
) -> Result<DaySchedule> {
    let day_off = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM days_off
            WHERE provider_id = $1 AND date = $2
        )
        "#,
    )
    .bind(provider_id)
    .bind(date)
    .fetch_one(pool)
    .await?;

    let date_slots = sqlx::query_as::<_, DbDateSlot>(
        r#"
        SELECT provider_id, date, slot, created_at
        FROM date_slots
        WHERE provider_id = $1 AND date = $2
        ORDER BY slot ASC
        "#,
    )
    .bind(provider_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    let day_of_week = DayOfWeek::from(date.weekday());
    let weekly_slots = sqlx::query_as::<_, DbWeeklySlot>(
        r#"
        SELECT provider_id, day_of_week, slot, created_at
        FROM weekly_slots
        WHERE provider_id = $1 AND day_of_week = $2
        ORDER BY slot ASC
        "#,
    )
    .bind(provider_id)
    .bind(day_of_week.as_str())
    .fetch_all(pool)
    .await?;

    Ok(DaySchedule {
        day_off,
        date_slots: date_slots.into_iter().map(|row| row.slot).collect(),
        weekly_slots: weekly_slots.into_iter().map(|row| row.slot).collect(),
    })
}

/// Whether the provider can be booked at `at`. The calendar date and time of
/// day are taken from the instant's UTC representation.
///
/// This read is advisory: a booking that passes it can still lose the race at
/// insert time, where the uniqueness constraint decides.
pub async fn is_available(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    at: DateTime<Utc>,
) -> Result<bool> {
    let schedule = day_schedule(pool, provider_id, at.date_naive()).await?;
    Ok(schedule.allows(at.time()))
}
