// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-notification
//!
//! Deterministic handles and substitute notifiers. The handle mirrors what an
//! orchestrator would hand over: `state = ("x", "f")`, name `fred`, a fixed
//! ARN and a fixed creation time.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use cim_notification::domain::{Identifier, RequestContext, ResourceHandle, ResourceState};
use cim_notification::{
    EventPayload, EventType, NotificationError, NotificationResult, Notifier, Severity,
};

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub const TEST_USER: &str = "test_username";
pub const TEST_TENANT: &str = "test_tenant_id";
pub const TEST_ARN: &str = "hay-are-en";

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn dummy_context() -> RequestContext {
    RequestContext::new(TEST_USER, TEST_TENANT)
}

/// Identity with a preset ARN
#[derive(Debug, Clone)]
pub struct FixedArn(pub &'static str);

impl Identifier for FixedArn {
    fn arn(&self) -> String {
        self.0.to_string()
    }
}

/// Hand-built resource handle
#[derive(Debug, Clone)]
pub struct TestStack {
    pub state: ResourceState,
    pub name: String,
    pub status_reason: String,
    pub created_time: DateTime<Utc>,
    pub context: RequestContext,
    pub identity: FixedArn,
}

impl ResourceHandle for TestStack {
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
        &self.identity
    }
}

/// Stack in state `("x", "f")` named `fred`
pub fn fred_stack() -> TestStack {
    stack_in_state("x", "f")
}

pub fn stack_in_state(status: &str, action: &str) -> TestStack {
    TestStack {
        state: ResourceState::parse(status, action).expect("Invalid state in test fixture"),
        name: "fred".to_string(),
        status_reason: "this is why".to_string(),
        created_time: fixed_timestamp(),
        context: dummy_context(),
        identity: FixedArn(TEST_ARN),
    }
}

/// One captured `notify` call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub context: RequestContext,
    pub event_type: String,
    pub severity: Severity,
    pub payload: EventPayload,
}

/// Notifier that records every call
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("poisoned").clone()
    }

    /// The single recorded call, panicking if there is not exactly one
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one notify call");
        calls.into_iter().next().expect("one call")
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(
        &self,
        context: &RequestContext,
        event_type: &EventType,
        severity: Severity,
        payload: &EventPayload,
    ) -> NotificationResult<()> {
        self.calls.lock().expect("poisoned").push(RecordedCall {
            context: context.clone(),
            event_type: event_type.to_string(),
            severity,
            payload: payload.clone(),
        });
        Ok(())
    }
}

/// Notifier whose transport is always down
#[derive(Debug, Default)]
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(
        &self,
        _context: &RequestContext,
        _event_type: &EventType,
        _severity: Severity,
        _payload: &EventPayload,
    ) -> NotificationResult<()> {
        Err(NotificationError::Transport("transport unavailable".to_string()))
    }
}
