// Copyright (c) 2025 - Cowboy AI, Inc.
//! Autoscaling adjustment notifications
//!
//! The caller picks the suffix (`start`, `end`, `error`, ...). It becomes the
//! last segment of `autoscaling.{suffix}` and also decides severity: only the
//! literal suffix `error` is an `ERROR`, everything else is `INFO`.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::state::validate_segment;
use crate::domain::ResourceHandle;
use crate::errors::NotificationResult;
use crate::notifier::Notifier;
use crate::payload::{
    build_base, EventPayload, ADJUSTMENT, ADJUSTMENT_TYPE, CAPACITY, GROUPNAME, MESSAGE,
};
use crate::severity::Severity;
use crate::subjects::{EventType, ERROR_SUFFIX};

/// Scaling-specific fields, passed through into the payload untouched
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingAdjustment {
    pub adjustment: Value,
    pub adjustment_type: Value,
    pub capacity: Value,
    pub groupname: Value,
}

impl ScalingAdjustment {
    pub fn new(
        adjustment: impl Into<Value>,
        adjustment_type: impl Into<Value>,
        capacity: impl Into<Value>,
        groupname: impl Into<Value>,
    ) -> Self {
        Self {
            adjustment: adjustment.into(),
            adjustment_type: adjustment_type.into(),
            capacity: capacity.into(),
            groupname: groupname.into(),
        }
    }
}

/// `ERROR` for the suffix `error`, `INFO` for anything else
pub fn severity_for_suffix(suffix: &str) -> Severity {
    if suffix == ERROR_SUFFIX {
        Severity::Error
    } else {
        Severity::Info
    }
}

/// The payload `message`: the caller's message, or the suffix when there is none
pub fn resolve_message<'a>(message: Option<&'a str>, suffix: &'a str) -> &'a str {
    message.unwrap_or(suffix)
}

pub struct AutoscalingEventFormatter {
    notifier: Arc<dyn Notifier>,
}

impl AutoscalingEventFormatter {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Build the payload for a scaling event without sending it
    pub fn payload(
        group: &dyn ResourceHandle,
        adjustment: &ScalingAdjustment,
        suffix: &str,
        message: Option<&str>,
    ) -> EventPayload {
        build_base(group).extend([
            (ADJUSTMENT, adjustment.adjustment.clone()),
            (ADJUSTMENT_TYPE, adjustment.adjustment_type.clone()),
            (CAPACITY, adjustment.capacity.clone()),
            (GROUPNAME, adjustment.groupname.clone()),
            (MESSAGE, Value::from(resolve_message(message, suffix))),
        ])
    }

    /// Emit one notification describing a scaling adjustment
    ///
    /// `message` defaults to `suffix` when `None`. The suffix follows the same
    /// rules as a state component: non-empty, no dots, no whitespace.
    pub async fn send(
        &self,
        group: &dyn ResourceHandle,
        adjustment: &ScalingAdjustment,
        suffix: &str,
        message: Option<&str>,
    ) -> NotificationResult<()> {
        validate_segment("suffix", suffix)?;

        let payload = Self::payload(group, adjustment, suffix, message);
        let event_type = EventType::autoscaling(suffix);
        let severity = severity_for_suffix(suffix);

        debug!(
            event_type = %event_type,
            severity = %severity,
            stack_name = group.name(),
            "Sending autoscaling notification"
        );

        self.notifier
            .notify(group.context(), &event_type, severity, &payload)
            .await
    }
}
