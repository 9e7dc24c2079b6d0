//! Error types for notification operations

use thiserror::Error;

/// Errors that can occur while formatting or dispatching a notification
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The transport failed to deliver the notification
    #[error("Notification transport error: {0}")]
    Transport(String),

    /// Payload or envelope could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller supplied arguments that cannot form an event
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// A value object rejected its input
    #[error(transparent)]
    InvalidValue(#[from] crate::domain::ValueError),
}

/// Result type for notification operations
pub type NotificationResult<T> = Result<T, NotificationError>;

impl From<async_nats::Error> for NotificationError {
    fn from(err: async_nats::Error) -> Self {
        NotificationError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for NotificationError {
    fn from(err: serde_json::Error) -> Self {
        NotificationError::Serialization(err.to_string())
    }
}
