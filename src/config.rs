// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notification transport configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{NotificationError, NotificationResult};
use crate::subjects::NOTIFICATIONS_TOPIC;

/// Which transport receives notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// Publish envelopes to NATS
    Nats,
    /// Write notifications to the tracing log
    #[default]
    Log,
    /// Drop notifications
    Noop,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Driver::Nats => write!(f, "nats"),
            Driver::Log => write!(f, "log"),
            Driver::Noop => write!(f, "noop"),
        }
    }
}

impl FromStr for Driver {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nats" => Ok(Driver::Nats),
            "log" => Ok(Driver::Log),
            "noop" | "none" => Ok(Driver::Noop),
            other => Err(NotificationError::Configuration(format!(
                "unknown notification driver: {}",
                other
            ))),
        }
    }
}

/// Configuration for the notification transport
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub driver: Driver,
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Client name reported to NATS
    pub client_name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Subject root notifications are published under
    pub topic: String,
    /// Namespace prepended to event types inside envelopes
    pub event_prefix: String,
    /// Identifies the emitting service in envelopes
    pub publisher_id: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            driver: Driver::default(),
            servers: vec!["nats://localhost:4222".to_string()],
            client_name: "cim-notification".to_string(),
            connect_timeout: Duration::from_secs(10),
            topic: NOTIFICATIONS_TOPIC.to_string(),
            event_prefix: "orchestration".to_string(),
            publisher_id: "orchestration".to_string(),
        }
    }
}

impl NotificationConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// - `NOTIFICATION_DRIVER` (`nats`, `log`, `noop`)
    /// - `NATS_URL` (comma separated)
    /// - `NOTIFICATION_CLIENT_NAME`
    /// - `NOTIFICATION_CONNECT_TIMEOUT_SECS`
    /// - `NOTIFICATION_TOPIC`
    /// - `NOTIFICATION_EVENT_PREFIX`
    /// - `NOTIFICATION_PUBLISHER_ID`
    pub fn from_env() -> NotificationResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> NotificationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(driver) = lookup("NOTIFICATION_DRIVER") {
            config.driver = driver.parse()?;
        }

        if let Some(urls) = lookup("NATS_URL") {
            let servers: Vec<String> = urls
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if servers.is_empty() {
                return Err(NotificationError::Configuration(
                    "NATS_URL contains no servers".to_string(),
                ));
            }
            config.servers = servers;
        }

        if let Some(name) = lookup("NOTIFICATION_CLIENT_NAME") {
            config.client_name = name;
        }

        if let Some(secs) = lookup("NOTIFICATION_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                NotificationError::Configuration(format!(
                    "NOTIFICATION_CONNECT_TIMEOUT_SECS is not a number: {}",
                    secs
                ))
            })?;
            config.connect_timeout = Duration::from_secs(secs);
        }

        if let Some(topic) = lookup("NOTIFICATION_TOPIC") {
            config.topic = topic;
        }

        if let Some(prefix) = lookup("NOTIFICATION_EVENT_PREFIX") {
            config.event_prefix = prefix;
        }

        if let Some(publisher_id) = lookup("NOTIFICATION_PUBLISHER_ID") {
            config.publisher_id = publisher_id;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NotificationResult<()> {
        if self.topic.is_empty() || self.topic.contains(char::is_whitespace) {
            return Err(NotificationError::Configuration(format!(
                "invalid topic: {:?}",
                self.topic
            )));
        }

        if self.topic.contains(['*', '>']) {
            return Err(NotificationError::Configuration(format!(
                "topic must not contain wildcards: {}",
                self.topic
            )));
        }

        Ok(())
    }
}
