// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notification Tail
//!
//! Subscribes to every notification published under the configured topic and
//! logs each decoded envelope. Useful for watching what an orchestrator emits.
//!
//! Run with: cargo run --bin notification-tail
//!
//! Honours the same environment as the publishing side (`NATS_URL`,
//! `NOTIFICATION_TOPIC`, ...), see `NotificationConfig::from_env`.

use anyhow::{Context, Result};
use cim_notification::subjects::SubjectBuilder;
use cim_notification::transport::NotificationEnvelope;
use cim_notification::{NotificationConfig, Severity};
use futures::StreamExt;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = NotificationConfig::from_env().context("Invalid notification configuration")?;
    let subject = SubjectBuilder::new(config.topic.as_str()).build_wildcard();

    info!("Connecting to NATS at {:?}", config.servers);
    let client = async_nats::connect(config.servers.join(","))
        .await
        .context("Failed to connect to NATS")?;

    let mut subscriber = client
        .subscribe(subject.clone())
        .await
        .context("Failed to subscribe")?;
    info!("Tailing {}", subject);

    while let Some(message) = subscriber.next().await {
        match NotificationEnvelope::from_json(&message.payload) {
            Ok(envelope) => {
                let payload = serde_json::to_string(&envelope.payload)?;
                match envelope.priority {
                    Severity::Info => info!(
                        subject = %message.subject,
                        event_type = %envelope.event_type,
                        tenant_id = %envelope.context_tenant_id,
                        payload = %payload,
                        "notification"
                    ),
                    Severity::Error => error!(
                        subject = %message.subject,
                        event_type = %envelope.event_type,
                        tenant_id = %envelope.context_tenant_id,
                        payload = %payload,
                        "notification"
                    ),
                }
            }
            Err(e) => warn!(subject = %message.subject, "Undecodable notification: {}", e),
        }
    }

    info!("Subscription closed");
    Ok(())
}
