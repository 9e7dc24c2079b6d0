// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stack lifecycle notifications
//!
//! This channel reports failures: every event is `stack.{action}.error` at
//! `ERROR` severity, whatever the stack's status.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ResourceHandle;
use crate::errors::NotificationResult;
use crate::notifier::Notifier;
use crate::payload::build_base;
use crate::severity::Severity;
use crate::subjects::EventType;

pub struct StackEventFormatter {
    notifier: Arc<dyn Notifier>,
}

impl StackEventFormatter {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Emit one notification describing the stack's current state
    pub async fn send(&self, stack: &dyn ResourceHandle) -> NotificationResult<()> {
        let payload = build_base(stack);
        let event_type = EventType::stack_error(&stack.state().action);
        let severity = Severity::Error;

        debug!(
            event_type = %event_type,
            severity = %severity,
            stack_name = stack.name(),
            "Sending stack notification"
        );

        self.notifier
            .notify(stack.context(), &event_type, severity, &payload)
            .await
    }
}
