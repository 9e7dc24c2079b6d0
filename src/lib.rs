//! Lifecycle notifications for the Composable Information Machine orchestrator
//!
//! Formats stack state changes and autoscaling adjustments into canonical
//! payloads, classifies their severity, derives their event type and hands
//! the result to a [`Notifier`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cim_notification::prelude::*;
//!
//! # async fn run(stack: StackSnapshot) -> NotificationResult<()> {
//! let notifier = notifier_from_config(&NotificationConfig::from_env()?).await?;
//!
//! StackEventFormatter::new(Arc::clone(&notifier)).send(&stack).await?;
//!
//! AutoscalingEventFormatter::new(notifier)
//!     .send(&stack, &ScalingAdjustment::new("1", "change_in_capacity", "3", "web"), "end", None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatter;
pub mod notifier;
pub mod payload;
pub mod severity;
pub mod subjects;
pub mod transport;

// Re-export commonly used types
pub use config::{Driver, NotificationConfig};
pub use errors::{NotificationError, NotificationResult};
pub use formatter::{AutoscalingEventFormatter, ScalingAdjustment, StackEventFormatter};
pub use notifier::Notifier;
pub use payload::{build_base, EventPayload};
pub use severity::Severity;
pub use subjects::EventType;

/// Prelude module with commonly used imports
pub mod prelude {
    pub use crate::config::{Driver, NotificationConfig};
    pub use crate::domain::{
        Identifier, RequestContext, ResourceAction, ResourceHandle, ResourceState,
        ResourceStatus, StackIdentifier, StackSnapshot,
    };
    pub use crate::errors::{NotificationError, NotificationResult};
    pub use crate::formatter::{AutoscalingEventFormatter, ScalingAdjustment, StackEventFormatter};
    pub use crate::notifier::Notifier;
    pub use crate::payload::{build_base, EventPayload};
    pub use crate::severity::Severity;
    pub use crate::subjects::EventType;
    pub use crate::transport::{notifier_from_config, LogNotifier, NatsNotifier, NoopNotifier};
}
