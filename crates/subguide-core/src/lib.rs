#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! DOM-free domain model for the subscription landing page.
//!
//! # Design
//! - The app catalog and platform map are loaded once from embedded JSON and
//!   validated up front; everything downstream works with typed indices.
//! - Selection state lives in an explicit [`SelectionController`] instance so
//!   several pages (or tests) can run side by side.
//! - Nothing here touches the browser; the Yew front-end feeds environment
//!   signals in and renders the resulting state.

pub mod catalog;
pub mod config;
pub mod detect;
pub mod error;
pub mod platform;
pub mod selection;
pub mod subscription;

pub use catalog::guide::{GuideStep, Inline};
pub use catalog::{AppEntry, AppId, AppIndex, Catalog, PlatformEntry};
pub use config::SiteConfig;
pub use detect::{Environment, detect_platform};
pub use error::{CatalogError, ConfigError, SelectionError, SubscriptionError};
pub use platform::Platform;
pub use selection::{SelectionController, UiState};
pub use subscription::{CopyRequest, SubscriptionFeed, subscription_url};
