// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notification Payloads
//!
//! Every notification carries a flat JSON object. The field names below are a
//! wire contract with downstream consumers (alerting, audit, billing) and
//! must not change.
//!
//! # Base fields
//!
//! Present on every event family:
//!
//! ```text
//! state           "{status}_{action}"
//! state_reason    status reason, verbatim
//! stack_name      resource name, verbatim
//! stack_identity  identifier ARN
//! create_at       creation time, ISO-8601 UTC
//! user_id         from the caller context
//! tenant_id       from the caller context
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ResourceHandle;

pub const STATE: &str = "state";
pub const STATE_REASON: &str = "state_reason";
pub const STACK_NAME: &str = "stack_name";
pub const STACK_IDENTITY: &str = "stack_identity";
pub const CREATE_AT: &str = "create_at";
pub const USER_ID: &str = "user_id";
pub const TENANT_ID: &str = "tenant_id";

pub const ADJUSTMENT: &str = "adjustment";
pub const ADJUSTMENT_TYPE: &str = "adjustment_type";
pub const CAPACITY: &str = "capacity";
pub const GROUPNAME: &str = "groupname";
pub const MESSAGE: &str = "message";

/// Keys every payload carries
pub const BASE_FIELDS: [&str; 7] = [
    STATE,
    STATE_REASON,
    STACK_NAME,
    STACK_IDENTITY,
    CREATE_AT,
    USER_ID,
    TENANT_ID,
];

/// Keys autoscaling payloads add on top of [`BASE_FIELDS`]
pub const AUTOSCALING_FIELDS: [&str; 5] =
    [ADJUSTMENT, ADJUSTMENT_TYPE, CAPACITY, GROUPNAME, MESSAGE];

/// `%Y-%m-%dT%H:%M:%SZ`, second precision
pub fn isotime(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Immutable notification body
///
/// Keys are kept sorted, so two payloads built from the same inputs
/// serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventPayload(Map<String, Value>);

impl EventPayload {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of a field, `None` if absent or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume this payload and add `fields`, producing a new one
    pub(crate) fn extend<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Value)>,
    {
        for (key, value) in fields {
            self.0.insert(key.to_string(), value);
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.0)
    }
}

impl From<EventPayload> for Value {
    fn from(payload: EventPayload) -> Self {
        Value::Object(payload.0)
    }
}

/// Build the fields common to every event family from a resource handle
pub fn build_base(handle: &dyn ResourceHandle) -> EventPayload {
    let context = handle.context();

    let mut fields = Map::new();
    fields.insert(STATE.into(), Value::String(handle.state().to_string()));
    fields.insert(STATE_REASON.into(), handle.status_reason().into());
    fields.insert(STACK_NAME.into(), handle.name().into());
    fields.insert(STACK_IDENTITY.into(), handle.identifier().arn().into());
    fields.insert(CREATE_AT.into(), isotime(handle.created_time()).into());
    fields.insert(USER_ID.into(), context.user_id.clone().into());
    fields.insert(TENANT_ID.into(), context.tenant_id.clone().into());

    EventPayload(fields)
}
