//! Error types for catalog loading, selection, subscriptions, and config.

use thiserror::Error;

use crate::catalog::AppId;
use crate::catalog::guide::GuideMarkupError;
use crate::platform::Platform;

/// Failures raised while loading and validating the app catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be parsed.
    #[error("catalog document is malformed: {source}")]
    Malformed {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Two apps share the same identifier.
    #[error("app '{id}' is defined more than once")]
    DuplicateApp {
        /// Repeated identifier.
        id: AppId,
    },
    /// An app field failed validation.
    #[error("app '{id}' has an invalid {field}: {reason}")]
    InvalidApp {
        /// App carrying the bad field.
        id: AppId,
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// An app has no guide in the catalog default language.
    #[error("app '{id}' has no guide for default language '{language}'")]
    MissingGuide {
        /// App lacking the guide.
        id: AppId,
        /// Catalog default language.
        language: String,
    },
    /// A guide step failed to parse.
    #[error("app '{id}' guide '{language}' step {step}: {source}")]
    GuideMarkup {
        /// App owning the guide.
        id: AppId,
        /// Guide language.
        language: String,
        /// Zero-based step index.
        step: usize,
        /// Markup parse failure.
        source: GuideMarkupError,
    },
    /// A platform has no entry in the platform map.
    #[error("platform '{platform}' is missing from the platform map")]
    MissingPlatform {
        /// Platform without an entry.
        platform: Platform,
    },
    /// A platform appears twice in the platform map.
    #[error("platform '{platform}' is listed more than once")]
    DuplicatePlatform {
        /// Repeated platform.
        platform: Platform,
    },
    /// A platform lists no apps.
    #[error("platform '{platform}' lists no apps")]
    EmptyPlatform {
        /// Platform with an empty list.
        platform: Platform,
    },
    /// A platform references an app that is not in the catalog.
    #[error("platform '{platform}' references unknown app '{id}'")]
    UnknownApp {
        /// Platform holding the reference.
        platform: Platform,
        /// Unresolved identifier.
        id: AppId,
    },
    /// A platform lists the same app twice.
    #[error("platform '{platform}' lists app '{id}' more than once")]
    DuplicateListing {
        /// Platform holding the duplicate.
        platform: Platform,
        /// Repeated identifier.
        id: AppId,
    },
}

/// Rejected selection changes. State is left untouched when these are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Platform identifier is not one of the supported platforms.
    #[error("unknown platform '{id}'")]
    UnknownPlatform {
        /// Identifier supplied by the caller.
        id: String,
    },
    /// App identifier is not in the catalog.
    #[error("unknown app '{id}'")]
    UnknownApp {
        /// Identifier supplied by the caller.
        id: AppId,
    },
    /// App exists but is not offered on the current platform.
    #[error("app '{id}' is not offered on '{platform}'")]
    NotOnPlatform {
        /// Identifier supplied by the caller.
        id: AppId,
        /// Platform that was current at the time.
        platform: Platform,
    },
}

/// Failures building an absolute subscription URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    /// The page origin is opaque or not http(s).
    #[error("origin '{origin}' cannot host subscriptions")]
    InvalidOrigin {
        /// Origin that was rejected.
        origin: String,
    },
    /// The subscription path is empty or already absolute.
    #[error("subscription path '{path}' is invalid")]
    InvalidPath {
        /// Path that was rejected.
        path: String,
    },
}

/// Structured errors emitted while loading site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("site configuration is malformed: {source}")]
    Malformed {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        /// Field that failed validation.
        field: String,
        /// Human-readable error description.
        message: String,
    },
}
