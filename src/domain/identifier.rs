// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stack Identity

use serde::{Deserialize, Serialize};
use std::fmt;
use urlencoding::encode;

/// Anything that can render a stable ARN for a resource
pub trait Identifier: fmt::Debug + Send + Sync {
    fn arn(&self) -> String;
}

/// Identity of a stack (or a resource path within one)
///
/// # Examples
///
/// ```rust
/// use cim_notification::domain::{Identifier, StackIdentifier};
///
/// let id = StackIdentifier::new("acme", "web tier", "42");
/// assert_eq!(id.arn(), "arn:openstack:heat::acme:stacks/web%20tier/42");
///
/// let nested = id.with_path("/resources/server");
/// assert_eq!(nested.arn(), "arn:openstack:heat::acme:stacks/web%20tier/42/resources/server");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackIdentifier {
    pub tenant: String,
    pub stack_name: String,
    pub stack_id: String,
    /// Either empty or starting with `/`
    #[serde(default)]
    pub path: String,
}

impl StackIdentifier {
    pub const ARN_PREFIX: &'static str = "arn:openstack:heat::";

    pub fn new(
        tenant: impl Into<String>,
        stack_name: impl Into<String>,
        stack_id: impl Into<String>,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            stack_name: stack_name.into(),
            stack_id: stack_id.into(),
            path: String::new(),
        }
    }

    /// Point at a sub-path of the stack, prefixing `/` if missing
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.path = if path.is_empty() || path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        self
    }

    fn tenant_path(&self) -> String {
        let path: Vec<_> = self.path.split('/').map(encode).collect();
        format!(
            "stacks/{}/{}{}",
            encode(&self.stack_name),
            encode(&self.stack_id),
            path.join("/")
        )
    }
}

impl Identifier for StackIdentifier {
    fn arn(&self) -> String {
        format!(
            "{}{}:{}",
            Self::ARN_PREFIX,
            encode(&self.tenant),
            self.tenant_path()
        )
    }
}

impl fmt::Display for StackIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arn())
    }
}
