use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create weekly_slots table: the recurring weekly template, one row per
    // bookable instant. Replaced wholesale per (provider, weekday).
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_slots (
            provider_id UUID NOT NULL,
            day_of_week VARCHAR(9) NOT NULL,
            slot TIME NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (provider_id, day_of_week, slot)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create date_slots table: date-specific overrides of the weekly template
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS date_slots (
            provider_id UUID NOT NULL,
            date DATE NOT NULL,
            slot TIME NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (provider_id, date, slot)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create days_off table: full-day unavailability markers
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS days_off (
            provider_id UUID NOT NULL,
            date DATE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (provider_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table. The unique constraint on
    // (provider_id, scheduled_at) is the final arbiter for racing bookings.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            client_id UUID NOT NULL,
            provider_id UUID NOT NULL,
            scheduled_at TIMESTAMP WITH TIME ZONE NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT uq_appointments_provider_instant UNIQUE (provider_id, scheduled_at),
            CONSTRAINT ck_appointments_distinct_parties CHECK (client_id <> provider_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes. One statement per query: Postgres rejects
    // multi-statement strings in prepared statements.
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_weekly_slots_provider_day ON weekly_slots(provider_id, day_of_week)",
        "CREATE INDEX IF NOT EXISTS idx_date_slots_provider_date ON date_slots(provider_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_days_off_provider_date ON days_off(provider_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_client_id ON appointments(client_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_provider_id ON appointments(provider_id)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_scheduled_at ON appointments(scheduled_at)",
    ];
    for statement in indexes {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
