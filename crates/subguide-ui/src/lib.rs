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
//! Subguide landing page front-end.
//! This crate holds the Yew entrypoint, the embedded site configuration and locale bundles.

pub mod core;
pub mod i18n;

use subguide_core::{ConfigError, SiteConfig};

/// Site configuration embedded at build time.
pub const EMBEDDED_CONFIG: &str = include_str!("../config/site.json");

/// Parse the embedded site configuration.
///
/// # Errors
///
/// Returns [`ConfigError`] when the bundled `site.json` is invalid.
pub fn embedded_config() -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_json(EMBEDDED_CONFIG)
}

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::view::{InstructionPanel, page_view};
    use crate::i18n::{LocaleCode, TranslationBundle};
    use std::sync::Arc;
    use subguide_core::{Catalog, Environment, SelectionController};

    #[test]
    fn embedded_config_is_valid() -> Result<(), subguide_core::ConfigError> {
        let config = super::embedded_config()?;
        assert_eq!(config.feeds.len(), 3);
        assert!(config.require_rules);
        Ok(())
    }

    #[test]
    fn detected_page_renders_a_guide() -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Arc::new(Catalog::embedded()?);
        let env = Environment::new("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", 390);
        let ctl = SelectionController::detect(catalog, &env)?;
        let view = page_view(ctl.catalog(), ctl.state(), LocaleCode::En.code());
        assert!(matches!(view.panel, InstructionPanel::App(_)));
        Ok(())
    }

    #[test]
    fn platform_labels_exist_in_every_locale() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for platform in subguide_core::Platform::ALL {
                let key = format!("platforms.{}", platform.id());
                assert_ne!(bundle.text(&key, ""), "", "{key}");
            }
        }
    }
}
