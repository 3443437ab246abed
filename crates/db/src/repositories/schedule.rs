use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbDayOff;
use slotbook_core::models::schedule::DayOfWeek;

/// Marks or unmarks a full date as a day off. Both directions are idempotent.
pub async fn set_day_off(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    date: NaiveDate,
    is_day_off: bool,
) -> Result<()> {
    if is_day_off {
        sqlx::query(
            r#"
            INSERT INTO days_off (provider_id, date)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(provider_id)
        .bind(date)
        .execute(pool)
        .await?;
    } else {
        sqlx::query(
            r#"
            DELETE FROM days_off
            WHERE provider_id = $1 AND date = $2
            "#,
        )
        .bind(provider_id)
        .bind(date)
        .execute(pool)
        .await?;
    }

    Ok(())
}

/// Replaces the whole weekly template for one weekday.
///
/// Delete and insert run in one transaction so a failure mid-insert rolls
/// back to the pre-call template instead of leaving a partial one.
pub async fn replace_weekly_slots(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    day_of_week: DayOfWeek,
    slots: &[NaiveTime],
) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM weekly_slots
        WHERE provider_id = $1 AND day_of_week = $2
        "#,
    )
    .bind(provider_id)
    .bind(day_of_week.as_str())
    .execute(&mut *tx)
    .await?;

    for slot in slots {
        sqlx::query(
            r#"
            INSERT INTO weekly_slots (provider_id, day_of_week, slot)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(provider_id)
        .bind(day_of_week.as_str())
        .bind(slot)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Replaces the date-specific override slots for one calendar date, without
/// touching the weekly template. Same transactional replace semantics as
/// [`replace_weekly_slots`].
pub async fn replace_date_slots(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    date: NaiveDate,
    slots: &[NaiveTime],
) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM date_slots
        WHERE provider_id = $1 AND date = $2
        "#,
    )
    .bind(provider_id)
    .bind(date)
    .execute(&mut *tx)
    .await?;

    for slot in slots {
        sqlx::query(
            r#"
            INSERT INTO date_slots (provider_id, date, slot)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(provider_id)
        .bind(date)
        .bind(slot)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Removes the override for one date, restoring the weekly template there.
/// Returns the number of slots removed so callers can report a missing
/// override.
pub async fn clear_date_slots(
    pool: &Pool<Postgres>,
    provider_id: Uuid,
    date: NaiveDate,
) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM date_slots
        WHERE provider_id = $1 AND date = $2
        "#,
    )
    .bind(provider_id)
    .bind(date)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Upcoming days off for a provider, soonest first.
pub async fn days_off(pool: &Pool<Postgres>, provider_id: Uuid) -> Result<Vec<NaiveDate>> {
    let rows = sqlx::query_as::<_, DbDayOff>(
        r#"
        SELECT provider_id, date, created_at
        FROM days_off
        WHERE provider_id = $1 AND date >= CURRENT_DATE
        ORDER BY date ASC
        "#,
    )
    .bind(provider_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|row| row.date).collect())
}
