use eyre::{eyre, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Configuration for the event notifier.
///
/// All values come from environment variables and have working defaults, so
/// a development setup only needs a local Redis.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Message bus connection URL
    pub bus_url: String,
    /// Delivery attempts per event before giving up
    pub publish_attempts: u32,
    /// Base delay between attempts; the actual pause grows linearly with the
    /// attempt number
    pub retry_delay_ms: u64,
    /// Overall deadline for delivering one event, retries included
    pub publish_timeout_secs: u64,
}

impl NotifyConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bus_url =
            env::var("BUS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let publish_attempts = match env::var("BUS_PUBLISH_ATTEMPTS") {
            Ok(value) => value
                .parse::<u32>()
                .map_err(|_| eyre!("BUS_PUBLISH_ATTEMPTS must be a valid u32"))?,
            Err(_) => 3,
        };

        let retry_delay_ms = match env::var("BUS_RETRY_DELAY_MS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| eyre!("BUS_RETRY_DELAY_MS must be a valid u64"))?,
            Err(_) => 500,
        };

        let publish_timeout_secs = match env::var("BUS_PUBLISH_TIMEOUT_SECONDS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| eyre!("BUS_PUBLISH_TIMEOUT_SECONDS must be a valid u64"))?,
            Err(_) => 10,
        };

        Ok(Self {
            bus_url,
            publish_attempts,
            retry_delay_ms,
            publish_timeout_secs,
        })
    }

    /// Base delay between delivery attempts
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Deadline for one event's delivery, the notifier's own cancellation scope
    pub fn publish_timeout(&self) -> Duration {
        Duration::from_secs(self.publish_timeout_secs)
    }
}
