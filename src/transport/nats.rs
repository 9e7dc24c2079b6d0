// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS notification transport

use async_nats::{Client, ConnectOptions};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::NotificationConfig;
use crate::domain::RequestContext;
use crate::errors::{NotificationError, NotificationResult};
use crate::notifier::Notifier;
use crate::payload::EventPayload;
use crate::severity::Severity;
use crate::subjects::{EventType, SubjectBuilder};

use super::NotificationEnvelope;

/// Publishes notifications as JSON envelopes on `{topic}.{severity}`
#[derive(Clone)]
pub struct NatsNotifier {
    client: Client,
    topic: String,
    event_prefix: String,
    publisher_id: String,
}

impl NatsNotifier {
    /// Connect to the configured NATS servers
    pub async fn connect(config: &NotificationConfig) -> NotificationResult<Self> {
        config.validate()?;

        let connect_options = ConnectOptions::new()
            .name(&config.client_name)
            .connection_timeout(config.connect_timeout);

        let client = async_nats::connect_with_options(config.servers.join(","), connect_options)
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        info!("Connected to NATS at {:?}", config.servers);

        Ok(Self::with_client(client, config))
    }

    /// Wrap an existing client
    pub fn with_client(client: Client, config: &NotificationConfig) -> Self {
        Self {
            client,
            topic: config.topic.clone(),
            event_prefix: config.event_prefix.clone(),
            publisher_id: config.publisher_id.clone(),
        }
    }

    /// Subject a notification of this severity is published on
    pub fn subject_for(&self, severity: Severity) -> String {
        SubjectBuilder::new(self.topic.as_str())
            .severity(severity)
            .build()
    }

    /// Build the envelope that would be published
    pub fn envelope(
        &self,
        context: &RequestContext,
        event_type: &EventType,
        severity: Severity,
        payload: &EventPayload,
    ) -> NotificationEnvelope {
        NotificationEnvelope::new(
            self.publisher_id.as_str(),
            event_type.prefixed(&self.event_prefix),
            severity,
            payload.clone(),
            context,
        )
    }

    /// Get the underlying NATS client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Notifier for NatsNotifier {
    async fn notify(
        &self,
        context: &RequestContext,
        event_type: &EventType,
        severity: Severity,
        payload: &EventPayload,
    ) -> NotificationResult<()> {
        let subject = self.subject_for(severity);
        let envelope = self.envelope(context, event_type, severity, payload);
        let bytes = envelope.to_json()?;

        self.client
            .publish(subject.clone(), bytes.into())
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        // Publishing only buffers; flush so failures surface to the caller
        self.client
            .flush()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        debug!(
            subject = %subject,
            event_type = %envelope.event_type,
            message_id = %envelope.message_id,
            "Published notification"
        );
        Ok(())
    }
}
