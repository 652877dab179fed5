//! Access dialog flow: rules first, then the subscription links.

/// Which access dialog is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No dialog.
    #[default]
    Closed,
    /// Rules dialog awaiting acceptance.
    Rules,
    /// Rules accepted; links dialog opens after the transition delay.
    Accepted,
    /// Subscription links dialog.
    Configs,
}

impl ModalState {
    /// Open the access flow, skipping the rules when they are not required.
    #[must_use]
    pub const fn open_access(self, require_rules: bool) -> Self {
        match self {
            Self::Closed if require_rules => Self::Rules,
            Self::Closed => Self::Configs,
            other => other,
        }
    }

    /// Accept the rules; only meaningful while they are shown.
    #[must_use]
    pub const fn accept_rules(self) -> Self {
        match self {
            Self::Rules => Self::Accepted,
            other => other,
        }
    }

    /// Show the links once the transition delay has elapsed.
    ///
    /// A dialog closed during the delay stays closed.
    #[must_use]
    pub const fn reveal_configs(self) -> Self {
        match self {
            Self::Accepted => Self::Configs,
            other => other,
        }
    }

    /// Close whatever is open.
    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    /// Whether the rules dialog is visible.
    #[must_use]
    pub const fn rules_open(self) -> bool {
        matches!(self, Self::Rules)
    }

    /// Whether the links dialog is visible.
    #[must_use]
    pub const fn configs_open(self) -> bool {
        matches!(self, Self::Configs)
    }
}
