// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource State Value Objects
//!
//! A resource's state is an ordered `(status, action)` pair. Both halves are
//! open string sets: the well-known values below cover what the orchestration
//! engine produces today, but any value that passes validation is accepted.
//!
//! Both halves are spliced into dot-delimited event types, so they must be
//! non-empty and free of dots and whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValueError;

/// Reject values that cannot be a segment of a dot-delimited event type
pub(crate) fn validate_segment(kind: &'static str, value: &str) -> Result<(), ValueError> {
    if value.is_empty() {
        return Err(ValueError::Empty(kind));
    }

    if let Some(ch) = value.chars().find(|c| *c == '.' || c.is_whitespace()) {
        return Err(ValueError::InvalidCharacter {
            kind,
            value: value.to_string(),
            ch,
        });
    }

    Ok(())
}

/// The phase a resource is in (`CREATE`, `UPDATE`, `DELETE`, ...)
///
/// # Examples
///
/// ```rust
/// use cim_notification::domain::ResourceStatus;
///
/// let status = ResourceStatus::new("CREATE").unwrap();
/// assert_eq!(status, ResourceStatus::create());
/// assert!(ResourceStatus::new("").is_err());
/// assert!(ResourceStatus::new("stack.create").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceStatus(String);

impl ResourceStatus {
    pub const INIT: &'static str = "INIT";
    pub const CREATE: &'static str = "CREATE";
    pub const DELETE: &'static str = "DELETE";
    pub const UPDATE: &'static str = "UPDATE";
    pub const ROLLBACK: &'static str = "ROLLBACK";
    pub const SUSPEND: &'static str = "SUSPEND";
    pub const RESUME: &'static str = "RESUME";
    pub const ADOPT: &'static str = "ADOPT";
    pub const SNAPSHOT: &'static str = "SNAPSHOT";
    pub const CHECK: &'static str = "CHECK";

    /// Create a status, rejecting empty values and values containing dots or whitespace
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = value.into();
        validate_segment("status", &value)?;
        Ok(Self(value))
    }

    pub fn create() -> Self {
        Self(Self::CREATE.to_string())
    }

    pub fn update() -> Self {
        Self(Self::UPDATE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The outcome of the current phase (`IN_PROGRESS`, `COMPLETE`, `FAILED`, ...)
///
/// # Examples
///
/// ```rust
/// use cim_notification::domain::ResourceAction;
///
/// let action = ResourceAction::new("FAILED").unwrap();
/// assert_eq!(action, ResourceAction::failed());
/// assert!(ResourceAction::new("IN PROGRESS").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceAction(String);

impl ResourceAction {
    pub const IN_PROGRESS: &'static str = "IN_PROGRESS";
    pub const COMPLETE: &'static str = "COMPLETE";
    pub const FAILED: &'static str = "FAILED";

    /// Create an action, rejecting empty values and values containing dots or whitespace
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = value.into();
        validate_segment("action", &value)?;
        Ok(Self(value))
    }

    pub fn in_progress() -> Self {
        Self(Self::IN_PROGRESS.to_string())
    }

    pub fn complete() -> Self {
        Self(Self::COMPLETE.to_string())
    }

    pub fn failed() -> Self {
        Self(Self::FAILED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_value_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValueError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = ValueError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

string_value_impls!(ResourceStatus);
string_value_impls!(ResourceAction);

/// Ordered `(status, action)` pair describing where a resource is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceState {
    pub status: ResourceStatus,
    pub action: ResourceAction,
}

impl ResourceState {
    pub fn new(status: ResourceStatus, action: ResourceAction) -> Self {
        Self { status, action }
    }

    /// Build a state from raw strings, validating both halves
    pub fn parse(status: &str, action: &str) -> Result<Self, ValueError> {
        Ok(Self {
            status: ResourceStatus::new(status)?,
            action: ResourceAction::new(action)?,
        })
    }
}

/// Renders as `{status}_{action}`, the form carried in notification payloads
impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.status, self.action)
    }
}

impl From<(ResourceStatus, ResourceAction)> for ResourceState {
    fn from((status, action): (ResourceStatus, ResourceAction)) -> Self {
        Self { status, action }
    }
}
