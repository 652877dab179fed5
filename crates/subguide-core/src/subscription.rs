//! Subscription feeds and the absolute URLs copied to the clipboard.

use serde::{Deserialize, Serialize};

use crate::error::SubscriptionError;

/// Subscription list published next to the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubscriptionFeed {
    /// Stable identifier used for DOM ids.
    pub id: String,
    /// Site-relative path, starting with `/`.
    pub path: String,
    /// Display label shown on the copy button and in notifications.
    pub label: String,
}

impl SubscriptionFeed {
    /// Build a feed definition.
    #[must_use]
    pub fn new(id: impl Into<String>, path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Everything the clipboard step needs: the URL and a label for feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyRequest {
    /// Absolute subscription URL.
    pub url: String,
    /// Label echoed back in the notification.
    pub label: String,
}

impl CopyRequest {
    /// Build a copy request for a path under `origin`.
    ///
    /// # Errors
    ///
    /// Propagates [`subscription_url`] failures.
    pub fn new(
        origin: &str,
        path: &str,
        label: impl Into<String>,
    ) -> Result<Self, SubscriptionError> {
        Ok(Self {
            url: subscription_url(origin, path)?,
            label: label.into(),
        })
    }

    /// Build a copy request for a configured feed.
    ///
    /// # Errors
    ///
    /// Propagates [`subscription_url`] failures.
    pub fn for_feed(origin: &str, feed: &SubscriptionFeed) -> Result<Self, SubscriptionError> {
        Self::new(origin, &feed.path, feed.label.clone())
    }
}

/// Join the page origin and a site-relative path.
///
/// Exactly one `/` separates the two. Opaque origins (`null`, as reported for
/// `file://` pages) and non-http(s) origins are rejected.
///
/// # Errors
///
/// Returns [`SubscriptionError::InvalidOrigin`] or
/// [`SubscriptionError::InvalidPath`].
pub fn subscription_url(origin: &str, path: &str) -> Result<String, SubscriptionError> {
    let base = origin.trim().trim_end_matches('/');
    let host = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"));
    if host.is_none_or(str::is_empty) {
        return Err(SubscriptionError::InvalidOrigin {
            origin: origin.to_string(),
        });
    }

    let tail = path.trim().trim_start_matches('/');
    if tail.is_empty() || tail.contains("://") {
        return Err(SubscriptionError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{base}/{tail}"))
}

/// Origin used for subscription URLs: the configured public URL when set,
/// otherwise the page origin.
#[must_use]
pub fn effective_origin<'a>(public_url: Option<&'a str>, page_origin: &'a str) -> &'a str {
    public_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(page_origin)
}
