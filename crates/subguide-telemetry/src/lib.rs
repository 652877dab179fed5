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
//! Logging setup for the landing page.
//!
//! # Design
//! - One entry point, [`init_logging`], installs a `tracing` subscriber.
//! - In the browser, formatted events go to the devtools console with the
//!   matching severity; natively they go to stderr.

#[cfg(target_arch = "wasm32")]
pub mod console;
pub mod init;

pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
