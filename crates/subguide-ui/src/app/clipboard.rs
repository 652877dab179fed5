//! Async clipboard writes.

use js_sys::Reflect;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Clipboard;

/// Why a clipboard write did not happen.
#[derive(Debug, Error)]
pub(crate) enum ClipboardError {
    /// No `window` global.
    #[error("window is unavailable")]
    NoWindow,
    /// `navigator.clipboard` is missing, e.g. on insecure origins.
    #[error("clipboard API is unavailable")]
    Unsupported,
    /// The browser rejected the write.
    #[error("clipboard write rejected: {reason}")]
    Rejected {
        /// Stringified JS error.
        reason: String,
    },
}

/// Write text to the system clipboard.
pub(crate) async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(ClipboardError::Unsupported)?
        .unchecked_into::<Clipboard>();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|err| ClipboardError::Rejected {
            reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        })?;
    Ok(())
}
