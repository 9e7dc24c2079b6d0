// Copyright (c) 2025 - Cowboy AI, Inc.

//! Notifier implementations
//!
//! - [`NatsNotifier`] - publishes [`NotificationEnvelope`]s to NATS
//! - [`LogNotifier`] - structured tracing output
//! - [`NoopNotifier`] - notifications disabled

pub mod envelope;
pub mod log;
pub mod nats;

use std::sync::Arc;

use tracing::info;

pub use envelope::NotificationEnvelope;
pub use self::log::{LogNotifier, NoopNotifier};
pub use self::nats::NatsNotifier;

use crate::config::{Driver, NotificationConfig};
use crate::errors::NotificationResult;
use crate::notifier::Notifier;

/// Build the notifier selected by `config.driver`
pub async fn notifier_from_config(
    config: &NotificationConfig,
) -> NotificationResult<Arc<dyn Notifier>> {
    info!(driver = %config.driver, "Initialising notification transport");

    let notifier: Arc<dyn Notifier> = match config.driver {
        Driver::Nats => Arc::new(NatsNotifier::connect(config).await?),
        Driver::Log => Arc::new(LogNotifier::new(config.event_prefix.as_str())),
        Driver::Noop => Arc::new(NoopNotifier),
    };
    Ok(notifier)
}
