//! Notification queue.
//!
//! Messages are stored as typed variants and rendered with the active
//! translation bundle, so a locale switch re-labels visible toasts.

use crate::i18n::TranslationBundle;

/// Toasts visible at once; a new toast replaces the oldest beyond this.
pub const VISIBLE_TOASTS: usize = 1;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// What a toast says.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastMessage {
    /// A subscription link was copied.
    Copied {
        /// Feed label.
        label: String,
    },
    /// The clipboard rejected the write.
    CopyFailed {
        /// Feed label.
        label: String,
    },
    /// No valid link could be built for the page origin.
    LinkUnavailable {
        /// Feed label.
        label: String,
    },
}

impl ToastMessage {
    /// Severity for the message.
    #[must_use]
    pub const fn kind(&self) -> ToastKind {
        match self {
            Self::Copied { .. } => ToastKind::Success,
            Self::CopyFailed { .. } | Self::LinkUnavailable { .. } => ToastKind::Error,
        }
    }

    /// Localised text.
    #[must_use]
    pub fn render(&self, bundle: &TranslationBundle) -> String {
        let (key, default, label) = match self {
            Self::Copied { label } => ("toast.copied", "[{name}]", label),
            Self::CopyFailed { label } => ("toast.copy_failed", "[{name}]", label),
            Self::LinkUnavailable { label } => ("toast.link_unavailable", "[{name}]", label),
        };
        bundle.format(key, default, &[("name", label)])
    }
}

/// A queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Message payload.
    pub message: ToastMessage,
}

/// Bounded toast list with monotonic ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast, dropping the oldest ones past [`VISIBLE_TOASTS`].
    pub fn push(&mut self, message: ToastMessage) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message });
        if self.toasts.len() > VISIBLE_TOASTS {
            let drain = self.toasts.len() - VISIBLE_TOASTS;
            self.toasts.drain(0..drain);
        }
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
