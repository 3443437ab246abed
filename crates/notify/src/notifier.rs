use eyre::{eyre, Result};
use std::sync::Arc;
use tokio::time::{sleep, timeout};
use tracing::{error, warn};

use crate::bus::MessageBus;
use crate::config::NotifyConfig;
use crate::events::{AppointmentEvent, TOPIC_APPOINTMENT_CANCELED, TOPIC_APPOINTMENT_CREATED};

/// Best-effort publisher for booking lifecycle events.
///
/// Events are announced after the transaction already committed, on a task
/// detached from the request. The retry loop has its own deadline — the
/// caller's deadline never reaches it, and nothing here can fail a booking.
#[derive(Clone)]
pub struct Notifier {
    bus: Arc<dyn MessageBus>,
    config: NotifyConfig,
}

impl Notifier {
    pub fn new(bus: Arc<dyn MessageBus>, config: NotifyConfig) -> Self {
        Self { bus, config }
    }

    pub fn appointment_created(&self, event: AppointmentEvent) {
        self.dispatch(TOPIC_APPOINTMENT_CREATED, event);
    }

    pub fn appointment_canceled(&self, event: AppointmentEvent) {
        self.dispatch(TOPIC_APPOINTMENT_CANCELED, event);
    }

    /// Spawns the delivery task and returns immediately.
    fn dispatch(&self, topic: &'static str, event: AppointmentEvent) {
        let payload = match serde_json::to_vec(&event) {
            Ok(payload) => payload,
            Err(err) => {
                error!("failed to serialize {topic} event: {err}");
                return;
            }
        };

        let notifier = self.clone();
        tokio::spawn(async move {
            let deadline = notifier.config.publish_timeout();
            match timeout(deadline, notifier.publish_with_retry(topic, &payload)).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => error!("giving up on {topic} event: {err}"),
                Err(_) => error!("publishing {topic} event timed out after {deadline:?}"),
            }
        });
    }

    /// Attempts delivery up to the configured budget, sleeping
    /// `retry_delay × attempt` between tries.
    pub async fn publish_with_retry(&self, topic: &str, payload: &[u8]) -> Result<()> {
        let attempts = self.config.publish_attempts.max(1);

        for attempt in 1..=attempts {
            match self.bus.publish(topic, payload).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    warn!("publish attempt {attempt}/{attempts} to {topic} failed: {err}");
                }
            }

            if attempt < attempts {
                sleep(self.config.retry_delay() * attempt).await;
            }
        }

        Err(eyre!("all {attempts} publish attempts to {topic} failed"))
    }
}
