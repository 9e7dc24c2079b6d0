// Copyright (c) 2025 - Cowboy AI, Inc.

//! Event types and transport subjects
//!
//! Event types are dot-delimited routing keys identifying the kind of
//! notification. Two families exist:
//!
//! ```text
//! stack.{action}.error
//! autoscaling.{suffix}
//! ```
//!
//! Transports that route on subjects publish to `{topic}.{severity}`, with the
//! severity lowercased, which allows:
//! - Error-only subscriptions (`notifications.error`)
//! - Global subscriptions (`notifications.>`)
//!
//! # Examples
//!
//! ```rust
//! use cim_notification::subjects::{EventFamily, EventType, SubjectBuilder};
//! use cim_notification::Severity;
//!
//! let event_type = EventType::new(EventFamily::Autoscaling, ["the-end"]);
//! assert_eq!(event_type.as_str(), "autoscaling.the-end");
//!
//! let subject = SubjectBuilder::new("notifications").severity(Severity::Error).build();
//! assert_eq!(subject, "notifications.error");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ResourceAction;
use crate::severity::Severity;

/// Default topic notifications are published under
pub const NOTIFICATIONS_TOPIC: &str = "notifications";

/// Suffix marking an event as a failure report
pub const ERROR_SUFFIX: &str = "error";

/// Event families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFamily {
    /// Stack lifecycle state changes
    Stack,
    /// Scaling group adjustments
    Autoscaling,
}

impl fmt::Display for EventFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventFamily::Stack => write!(f, "stack"),
            EventFamily::Autoscaling => write!(f, "autoscaling"),
        }
    }
}

/// Dot-delimited routing key for a notification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(String);

impl EventType {
    /// Join the family and each segment with `.`
    pub fn new<I, S>(family: EventFamily, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut event_type = family.to_string();
        for segment in segments {
            event_type.push('.');
            event_type.push_str(segment.as_ref());
        }
        Self(event_type)
    }

    /// `stack.{action}.error`
    pub fn stack_error(action: &ResourceAction) -> Self {
        Self::new(EventFamily::Stack, [action.as_str(), ERROR_SUFFIX])
    }

    /// `autoscaling.{suffix}`
    pub fn autoscaling(suffix: &str) -> Self {
        Self::new(EventFamily::Autoscaling, [suffix])
    }

    /// Prefix with a publisher namespace, e.g. `orchestration.stack.f.error`
    pub fn prefixed(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.0.clone()
        } else {
            format!("{}.{}", prefix, self.0)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EventType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builder for transport subjects
#[derive(Debug, Clone)]
pub struct SubjectBuilder {
    topic: String,
    severity: Option<Severity>,
}

impl SubjectBuilder {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            severity: None,
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// `{topic}.{severity}`, or just `{topic}` when no severity is set
    pub fn build(self) -> String {
        match self.severity {
            Some(severity) => format!("{}.{}", self.topic, severity.as_str().to_lowercase()),
            None => self.topic,
        }
    }

    /// `{topic}.>`
    pub fn build_wildcard(self) -> String {
        format!("{}.>", self.topic)
    }
}

impl Default for SubjectBuilder {
    fn default() -> Self {
        Self::new(NOTIFICATIONS_TOPIC)
    }
}
