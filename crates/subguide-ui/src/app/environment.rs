//! Browser signals read once at startup.

use gloo::utils::{document, window};
use subguide_core::Environment;

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// User agent and viewport width for platform detection.
pub(crate) fn read_environment() -> Environment {
    let window = window();
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .map_or(0, viewport_px);
    Environment::new(user_agent, width)
}

/// Origin of the current page, e.g. `https://example.com`.
pub(crate) fn page_origin() -> String {
    window().location().origin().unwrap_or_default()
}

/// Locale matching the browser language, or the default.
pub(crate) fn browser_locale() -> LocaleCode {
    window()
        .navigator()
        .language()
        .as_deref()
        .and_then(LocaleCode::from_lang_tag)
        .unwrap_or(DEFAULT_LOCALE)
}

/// Mirror the active locale on `<html lang>`.
pub(crate) fn apply_lang(locale: LocaleCode) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("lang", locale.code());
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn viewport_px(width: f64) -> u32 {
    width.clamp(0.0, f64::from(u32::MAX)) as u32
}
