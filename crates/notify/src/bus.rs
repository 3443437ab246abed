use async_trait::async_trait;
use eyre::{eyre, Result};
use redis::aio::ConnectionManager;
use tracing::info;

/// A minimal at-most-once message bus: push bytes at a topic, await nothing
/// beyond the broker accepting the command.
#[async_trait]
pub trait MessageBus: Send + Sync {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<()>;
}

/// Redis-backed bus using PUBLISH over a managed connection.
///
/// `ConnectionManager` reconnects on its own, so a broker restart degrades
/// into failed publish attempts rather than a poisoned handle.
#[derive(Clone)]
pub struct RedisBus {
    manager: ConnectionManager,
}

impl RedisBus {
    pub async fn connect(bus_url: &str) -> Result<Self> {
        info!("Connecting to message bus at {}", bus_url);

        let client =
            redis::Client::open(bus_url).map_err(|e| eyre!("invalid bus URL: {e}"))?;
        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| eyre!("failed to connect to message bus: {e}"))?;

        info!("Message bus connection established");
        Ok(Self { manager })
    }
}

#[async_trait]
impl MessageBus for RedisBus {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<()> {
        let mut conn = self.manager.clone();

        // Subscriber count is irrelevant to a fire-and-forget publisher.
        let _receivers: i64 = redis::cmd("PUBLISH")
            .arg(topic)
            .arg(payload)
            .query_async(&mut conn)
            .await
            .map_err(|e| eyre!("failed to publish to {topic}: {e}"))?;

        Ok(())
    }
}
