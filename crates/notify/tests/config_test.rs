use std::time::Duration;

use slotbook_notify::config::NotifyConfig;

#[test]
fn test_retry_delay_conversion() {
    let config = NotifyConfig {
        bus_url: "redis://localhost".to_string(),
        publish_attempts: 3,
        retry_delay_ms: 250,
        publish_timeout_secs: 10,
    };

    assert_eq!(config.retry_delay(), Duration::from_millis(250));
    assert_eq!(config.publish_timeout(), Duration::from_secs(10));
}

#[test]
fn test_linear_backoff_grows_with_attempt_number() {
    let config = NotifyConfig {
        bus_url: "redis://localhost".to_string(),
        publish_attempts: 3,
        retry_delay_ms: 100,
        publish_timeout_secs: 10,
    };

    // delay × attempt, as used between retries
    assert_eq!(config.retry_delay() * 1, Duration::from_millis(100));
    assert_eq!(config.retry_delay() * 2, Duration::from_millis(200));
    assert_eq!(config.retry_delay() * 3, Duration::from_millis(300));
}
