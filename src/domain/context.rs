// Copyright (c) 2025 - Cowboy AI, Inc.
//! Caller Security Context

use serde::{Deserialize, Serialize};

/// Security and tenant context of the caller that triggered a lifecycle change
///
/// The notification core only reads `user_id` and `tenant_id` from it and
/// hands the whole context to the transport unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestContext {
    pub user_id: String,
    pub tenant_id: String,
    /// Request correlation id, forwarded in transport envelopes when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl RequestContext {
    pub fn new(user_id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            tenant_id: tenant_id.into(),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
