//! Persistent storage for the SlotBook booking engine.
//!
//! All durable state — schedules, schedule exceptions, and appointments —
//! lives in PostgreSQL behind this crate. Repositories are plain async
//! functions over the shared pool; cross-request coordination relies on the
//! store's transactional guarantees and constraints rather than in-process
//! locking.

pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Default pool size; override with DATABASE_MAX_CONNECTIONS.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}
