use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_db::{create_pool, schema::initialize_database};
use slotbook_notify::{config::NotifyConfig, Notifier, RedisBus};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    let notify_config = NotifyConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Connect the event notifier to the message bus
    let bus = RedisBus::connect(&notify_config.bus_url).await?;
    let notifier = Notifier::new(Arc::new(bus), notify_config);

    // Start API server
    slotbook_api::start_server(config, db_pool, notifier).await?;

    Ok(())
}
