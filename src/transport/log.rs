// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tracing-backed notification transport

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::RequestContext;
use crate::errors::NotificationResult;
use crate::notifier::Notifier;
use crate::payload::EventPayload;
use crate::severity::Severity;
use crate::subjects::EventType;

/// Writes each notification as a structured log event
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    event_prefix: String,
}

impl LogNotifier {
    pub fn new(event_prefix: impl Into<String>) -> Self {
        Self {
            event_prefix: event_prefix.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(
        &self,
        context: &RequestContext,
        event_type: &EventType,
        severity: Severity,
        payload: &EventPayload,
    ) -> NotificationResult<()> {
        let event_type = event_type.prefixed(&self.event_prefix);
        let payload = serde_json::to_string(payload)?;

        match severity {
            Severity::Info => info!(
                event_type = %event_type,
                tenant_id = %context.tenant_id,
                user_id = %context.user_id,
                payload = %payload,
                "notification"
            ),
            Severity::Error => error!(
                event_type = %event_type,
                tenant_id = %context.tenant_id,
                user_id = %context.user_id,
                payload = %payload,
                "notification"
            ),
        }
        Ok(())
    }
}

/// Drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(
        &self,
        _context: &RequestContext,
        _event_type: &EventType,
        _severity: Severity,
        _payload: &EventPayload,
    ) -> NotificationResult<()> {
        Ok(())
    }
}
