//! Page store driven by Yew's `use_reducer`.
//!
//! # Design
//! - One store per mounted page; the selection controller is owned here, not global.
//! - Rejected actions leave the state untouched and are logged.
//! - Timers and clipboard calls live in components; they only dispatch actions.

use std::rc::Rc;

use subguide_core::{AppId, CopyRequest, Platform, SelectionController};
use tracing::{debug, warn};
use yew::functional::Reducible;

use crate::core::modal::ModalState;
use crate::core::sections::SectionTracker;
use crate::core::toast::{ToastMessage, ToastQueue};
use crate::i18n::LocaleCode;

/// Page-wide state slices.
#[derive(Clone, Debug, PartialEq)]
pub struct PageStore {
    /// Platform and app selection.
    pub selection: SelectionController,
    /// Access dialog flow.
    pub modal: ModalState,
    /// Pending notifications.
    pub toasts: ToastQueue,
    /// Scroll-spy state.
    pub sections: SectionTracker,
    /// Link shown for manual copying after a clipboard failure.
    pub manual_copy: Option<CopyRequest>,
    /// Active UI language.
    pub locale: LocaleCode,
    require_rules: bool,
}

impl PageStore {
    /// Fresh store around a selection controller.
    #[must_use]
    pub fn new(selection: SelectionController, locale: LocaleCode, require_rules: bool) -> Self {
        Self {
            selection,
            modal: ModalState::Closed,
            toasts: ToastQueue::default(),
            sections: SectionTracker::default(),
            manual_copy: None,
            locale,
            require_rules,
        }
    }

    fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::SelectPlatform(platform) => {
                if let Err(err) = self.selection.select_platform(platform) {
                    warn!(%err, "platform selection rejected");
                    return false;
                }
            }
            PageAction::SelectApp(id) => {
                if let Err(err) = self.selection.select_app(&id) {
                    warn!(%err, "app selection rejected");
                    return false;
                }
            }
            PageAction::OpenAccess => {
                self.manual_copy = None;
                self.modal = self.modal.open_access(self.require_rules);
            }
            PageAction::AcceptRules => self.modal = self.modal.accept_rules(),
            PageAction::RevealConfigs => self.modal = self.modal.reveal_configs(),
            PageAction::CloseModal => {
                self.manual_copy = None;
                self.modal = self.modal.close();
            }
            PageAction::CopySucceeded(request) => {
                debug!(label = %request.label, "subscription copied");
                self.manual_copy = None;
                self.modal = self.modal.close();
                self.toasts.push(ToastMessage::Copied {
                    label: request.label,
                });
            }
            PageAction::CopyFailed(request) => {
                self.toasts.push(ToastMessage::CopyFailed {
                    label: request.label.clone(),
                });
                self.manual_copy = Some(request);
            }
            PageAction::LinkUnavailable { label } => {
                self.toasts.push(ToastMessage::LinkUnavailable { label });
            }
            PageAction::DismissToast(id) => self.toasts.dismiss(id),
            PageAction::SectionVisible { id, intersecting } => {
                return self.sections.observe(&id, intersecting);
            }
            PageAction::SetLocale(locale) => {
                if locale == self.locale {
                    return false;
                }
                self.locale = locale;
            }
        }
        true
    }
}

/// Actions understood by [`PageStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Switch platform; selects its first app.
    SelectPlatform(Platform),
    /// Select an app on the current platform.
    SelectApp(AppId),
    /// "Get access" pressed.
    OpenAccess,
    /// Rules accepted.
    AcceptRules,
    /// Transition delay elapsed.
    RevealConfigs,
    /// Close button or backdrop.
    CloseModal,
    /// Clipboard write succeeded.
    CopySucceeded(CopyRequest),
    /// Clipboard write failed; the link is offered for manual copy.
    CopyFailed(CopyRequest),
    /// No link could be built for a feed.
    LinkUnavailable {
        /// Feed label.
        label: String,
    },
    /// Toast timer fired or dismiss pressed.
    DismissToast(u64),
    /// Scroll-spy intersection change.
    SectionVisible {
        /// Section element id.
        id: String,
        /// Whether it entered the viewport band.
        intersecting: bool,
    },
    /// Language switch.
    SetLocale(LocaleCode),
}

impl Reducible for PageStore {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) { Rc::new(next) } else { self }
    }
}
