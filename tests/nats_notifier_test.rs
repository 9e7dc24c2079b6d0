// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS transport round trip
//!
//! Requires a NATS server; set `NATS_URL` to point elsewhere than localhost.
//! Run with: cargo test --test nats_notifier_test -- --ignored

mod fixtures;

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use pretty_assertions::assert_eq;

use cim_notification::transport::{NatsNotifier, NotificationEnvelope};
use cim_notification::{
    AutoscalingEventFormatter, NotificationConfig, ScalingAdjustment, Severity,
    StackEventFormatter,
};
use fixtures::*;

fn test_config() -> NotificationConfig {
    let mut config = NotificationConfig::from_env().expect("valid environment");
    config.topic = format!("test_notifications_{}", uuid::Uuid::now_v7().simple());
    config
}

#[tokio::test]
#[ignore = "requires a running NATS server"]
async fn test_stack_notification_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let config = test_config();
    let notifier = NatsNotifier::connect(&config).await?;
    let mut subscriber = notifier.inner().subscribe(format!("{}.>", config.topic)).await?;

    StackEventFormatter::new(Arc::new(notifier.clone()))
        .send(&fred_stack())
        .await?;

    let message = tokio::time::timeout(Duration::from_secs(5), subscriber.next())
        .await?
        .expect("subscription closed");
    let envelope = NotificationEnvelope::from_json(&message.payload)?;

    assert_eq!(message.subject.to_string(), format!("{}.error", config.topic));
    assert_eq!(envelope.event_type, "orchestration.stack.f.error");
    assert_eq!(envelope.priority, Severity::Error);
    assert_eq!(envelope.context_tenant_id, TEST_TENANT);
    assert_eq!(envelope.payload.get_str("stack_identity"), Some(TEST_ARN));
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running NATS server"]
async fn test_autoscaling_notification_routes_by_severity(
) -> Result<(), Box<dyn std::error::Error>> {
    let config = test_config();
    let notifier = NatsNotifier::connect(&config).await?;
    let mut info = notifier.inner().subscribe(format!("{}.info", config.topic)).await?;

    AutoscalingEventFormatter::new(Arc::new(notifier))
        .send(
            &fred_stack(),
            &ScalingAdjustment::new("1", "change_in_capacity", "2", "asg"),
            "end",
            None,
        )
        .await?;

    let message = tokio::time::timeout(Duration::from_secs(5), info.next())
        .await?
        .expect("subscription closed");
    let envelope = NotificationEnvelope::from_json(&message.payload)?;

    assert_eq!(envelope.event_type, "orchestration.autoscaling.end");
    assert_eq!(envelope.priority, Severity::Info);
    assert_eq!(envelope.payload.get_str("message"), Some("end"));
    Ok(())
}
