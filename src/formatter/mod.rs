// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event formatters
//!
//! Each formatter turns a [`ResourceHandle`](crate::domain::ResourceHandle)
//! into exactly one notifier call:
//!
//! ```text
//! handle → build_base → (+ extension fields) → (event_type, severity) → Notifier::notify
//! ```
//!
//! Formatters hold no state besides the notifier and never catch, retry or
//! log sink failures; those are returned to the caller as-is.

pub mod autoscaling;
pub mod stack;

pub use autoscaling::{AutoscalingEventFormatter, ScalingAdjustment};
pub use stack::StackEventFormatter;
