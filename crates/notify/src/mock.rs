use async_trait::async_trait;
use mockall::mock;

use crate::bus::MessageBus;

// Mock bus for testing
mock! {
    pub Bus {}

    #[async_trait]
    impl MessageBus for Bus {
        async fn publish(&self, topic: &str, payload: &[u8]) -> eyre::Result<()>;
    }
}
