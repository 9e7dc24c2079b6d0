// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Handle
//!
//! The read-only view of an orchestrated resource that formatters consume.
//! The orchestration engine owns and mutates the underlying resource; the
//! notification core only reads the fields exposed here.

use chrono::{DateTime, Utc};

use super::{Identifier, RequestContext, ResourceState, StackIdentifier, ValueError};

/// Narrow view of a resource exposing exactly what notifications need
pub trait ResourceHandle: Send + Sync {
    fn state(&self) -> &ResourceState;

    fn name(&self) -> &str;

    /// Free-text explanation of the current state, may be empty
    fn status_reason(&self) -> &str;

    fn created_time(&self) -> DateTime<Utc>;

    fn context(&self) -> &RequestContext;

    fn identifier(&self) -> &dyn Identifier;
}

/// Owned point-in-time copy of a stack, for callers without their own handle type
///
/// # Examples
///
/// ```rust
/// use cim_notification::domain::{
///     RequestContext, ResourceHandle, ResourceState, StackIdentifier, StackSnapshot,
/// };
///
/// let stack = StackSnapshot::builder(
///     "web",
///     ResourceState::parse("CREATE", "FAILED").unwrap(),
///     StackIdentifier::new("acme", "web", "42"),
///     RequestContext::new("alice", "acme"),
/// )
/// .status_reason("quota exceeded")
/// .build()
/// .unwrap();
///
/// assert_eq!(stack.name(), "web");
/// assert_eq!(stack.status_reason(), "quota exceeded");
/// ```
#[derive(Debug, Clone)]
pub struct StackSnapshot {
    state: ResourceState,
    name: String,
    status_reason: String,
    created_time: DateTime<Utc>,
    context: RequestContext,
    identifier: StackIdentifier,
}

impl StackSnapshot {
    pub fn builder(
        name: impl Into<String>,
        state: ResourceState,
        identifier: StackIdentifier,
        context: RequestContext,
    ) -> StackSnapshotBuilder {
        StackSnapshotBuilder {
            name: name.into(),
            state,
            identifier,
            context,
            status_reason: String::new(),
            created_time: None,
        }
    }
}

impl ResourceHandle for StackSnapshot {
    fn state(&self) -> &ResourceState {
        &self.state
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn status_reason(&self) -> &str {
        &self.status_reason
    }

    fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    fn context(&self) -> &RequestContext {
        &self.context
    }

    fn identifier(&self) -> &dyn Identifier {
        &self.identifier
    }
}

/// Builder for [`StackSnapshot`]
pub struct StackSnapshotBuilder {
    name: String,
    state: ResourceState,
    identifier: StackIdentifier,
    context: RequestContext,
    status_reason: String,
    created_time: Option<DateTime<Utc>>,
}

impl StackSnapshotBuilder {
    pub fn status_reason(mut self, reason: impl Into<String>) -> Self {
        self.status_reason = reason.into();
        self
    }

    /// Defaults to the time `build` is called
    pub fn created_time(mut self, created_time: DateTime<Utc>) -> Self {
        self.created_time = Some(created_time);
        self
    }

    pub fn build(self) -> Result<StackSnapshot, ValueError> {
        if self.name.is_empty() {
            return Err(ValueError::Empty("stack name"));
        }

        Ok(StackSnapshot {
            state: self.state,
            name: self.name,
            status_reason: self.status_reason,
            created_time: self.created_time.unwrap_or_else(Utc::now),
            context: self.context,
            identifier: self.identifier,
        })
    }
}
