//! Site configuration shipped alongside the page.
//!
//! # Design
//! - The document is JSON with every field optional; missing fields take the
//!   defaults below.
//! - Validation runs once at load and reports the first offending field.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, SubscriptionError};
use crate::subscription::{SubscriptionFeed, effective_origin, subscription_url};

/// Default lifetime of a notification.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3_500;
/// Default delay between closing the rules dialog and opening the feed list.
pub const DEFAULT_MODAL_TRANSITION_MS: u32 = 300;

/// Stand-in page origin for checking feed paths when no public URL is set.
const CHECK_ORIGIN: &str = "https://localhost";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Runtime settings for the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Public origin to build subscription URLs from; page origin when unset.
    pub public_url: Option<String>,
    /// How long notifications stay visible.
    pub toast_duration_ms: u32,
    /// Delay before the feed list opens after the rules are accepted.
    pub modal_transition_ms: u32,
    /// Whether access goes through the rules dialog first.
    pub require_rules: bool,
    /// Minimum log level (`trace` … `error`).
    pub log_level: String,
    /// Subscription feeds offered in the access dialog.
    pub feeds: Vec<SubscriptionFeed>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_url: None,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            modal_transition_ms: DEFAULT_MODAL_TRANSITION_MS,
            require_rules: true,
            log_level: "info".to_string(),
            feeds: vec![
                SubscriptionFeed::new("all", "/sub_all.txt", "MIX"),
                SubscriptionFeed::new("bs", "/sub_bs.txt", "БС"),
                SubscriptionFeed::new("chs", "/sub_chs.txt", "ЧС"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for invalid JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Malformed { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges and feed definitions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(500..=60_000).contains(&self.toast_duration_ms) {
            return Err(invalid("toast_duration_ms", "must be between 500 and 60000"));
        }
        if self.modal_transition_ms > 5_000 {
            return Err(invalid("modal_transition_ms", "must not exceed 5000"));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(invalid(
                "log_level",
                "must be one of trace, debug, info, warn, error",
            ));
        }
        if self.feeds.is_empty() {
            return Err(invalid("feeds", "at least one feed is required"));
        }

        let origin = effective_origin(self.public_url(), CHECK_ORIGIN);
        let mut seen = HashSet::new();
        for (index, feed) in self.feeds.iter().enumerate() {
            let field = |name: &str| format!("feeds[{index}].{name}");
            if feed.id.trim().is_empty() {
                return Err(invalid(&field("id"), "must not be empty"));
            }
            if !seen.insert(feed.id.as_str()) {
                return Err(invalid(&field("id"), "duplicates an earlier feed"));
            }
            if !feed.path.starts_with('/') {
                return Err(invalid(&field("path"), "must be a site-relative path"));
            }
            match subscription_url(origin, &feed.path) {
                Ok(_) => {}
                Err(SubscriptionError::InvalidOrigin { .. }) => {
                    return Err(invalid("public_url", "must be an http(s) origin with a host"));
                }
                Err(SubscriptionError::InvalidPath { .. }) => {
                    return Err(invalid(&field("path"), "must be a site-relative path"));
                }
            }
            if feed.label.trim().is_empty() {
                return Err(invalid(&field("label"), "must not be empty"));
            }
        }
        Ok(())
    }

    /// Configured public origin, if any.
    #[must_use]
    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    /// Feed with the given identifier.
    #[must_use]
    pub fn feed(&self, id: &str) -> Option<&SubscriptionFeed> {
        self.feeds.iter().find(|feed| feed.id == id)
    }

    /// Notification lifetime.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.toast_duration_ms))
    }

    /// Rules-to-feeds dialog delay.
    #[must_use]
    pub fn modal_transition(&self) -> Duration {
        Duration::from_millis(u64::from(self.modal_transition_ms))
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidField {
        field: field.to_string(),
        message: message.to_string(),
    }
}
