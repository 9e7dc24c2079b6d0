// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire envelope for published notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::RequestContext;
use crate::payload::EventPayload;
use crate::severity::Severity;

/// A notification as it travels on the bus
///
/// Context fields are flattened with a `_context_` prefix so consumers can
/// filter on tenant without decoding the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    pub message_id: Uuid,
    pub publisher_id: String,
    /// Event type with the publisher namespace applied
    pub event_type: String,
    pub priority: Severity,
    pub payload: EventPayload,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "_context_user_id")]
    pub context_user_id: String,
    #[serde(rename = "_context_tenant_id")]
    pub context_tenant_id: String,
    #[serde(rename = "_context_request_id", default)]
    pub context_request_id: Option<String>,
}

impl NotificationEnvelope {
    pub fn new(
        publisher_id: impl Into<String>,
        event_type: impl Into<String>,
        priority: Severity,
        payload: EventPayload,
        context: &RequestContext,
    ) -> Self {
        Self {
            message_id: Uuid::now_v7(),
            publisher_id: publisher_id.into(),
            event_type: event_type.into(),
            priority,
            payload,
            timestamp: Utc::now(),
            context_user_id: context.user_id.clone(),
            context_tenant_id: context.tenant_id.clone(),
            context_request_id: context.request_id.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
