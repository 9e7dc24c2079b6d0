// Copyright (c) 2025 - Cowboy AI, Inc.
//! Orchestration Domain Models
//!
//! The read-only view of an orchestrated resource that notifications are
//! built from, plus the value objects it is made of.
//!
//! # Value Objects
//!
//! - [`ResourceStatus`] / [`ResourceAction`] - the two halves of a [`ResourceState`]
//! - [`RequestContext`] - caller security/tenant context
//! - [`StackIdentifier`] - stack identity rendering a stable ARN
//!
//! # Handles
//!
//! - [`ResourceHandle`] - narrow trait the formatters read
//! - [`StackSnapshot`] - owned implementation for callers without their own

pub mod context;
pub mod handle;
pub mod identifier;
pub mod state;

use thiserror::Error;

pub use context::RequestContext;
pub use handle::{ResourceHandle, StackSnapshot, StackSnapshotBuilder};
pub use identifier::{Identifier, StackIdentifier};
pub use state::{ResourceAction, ResourceState, ResourceStatus};

/// Value object validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("{0} is empty")]
    Empty(&'static str),

    #[error("Invalid character {ch:?} in {kind}: {value}")]
    InvalidCharacter {
        kind: &'static str,
        value: String,
        ch: char,
    },
}
