// Copyright (c) 2025 - Cowboy AI, Inc.
//! The notification sink seam
//!
//! Formatters hand finished events to a [`Notifier`]. Delivery guarantees
//! (retry, queuing, persistence) belong to the implementation, never to the
//! formatters.

use async_trait::async_trait;

use crate::domain::RequestContext;
use crate::errors::NotificationResult;
use crate::payload::EventPayload;
use crate::severity::Severity;
use crate::subjects::EventType;

/// Delivers a finished notification
///
/// Implementations must complete (or fail) before the returned future
/// resolves; formatters await it and return its error unchanged.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        context: &RequestContext,
        event_type: &EventType,
        severity: Severity,
        payload: &EventPayload,
    ) -> NotificationResult<()>;
}
