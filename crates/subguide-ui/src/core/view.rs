//! Render model for the client picker.
//!
//! # Design
//! - Derived from the catalog and selection state on every render; never stored.
//! - Exactly one app card is marked selected whenever the state is consistent.

use subguide_core::{AppId, Catalog, GuideStep, Platform, UiState};

/// Everything the picker section needs to draw itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    /// Platform tabs in display order.
    pub tabs: Vec<PlatformTab>,
    /// App cards for the active platform.
    pub cards: Vec<AppCard>,
    /// Guide panel for the selected app.
    pub panel: InstructionPanel,
}

/// One platform tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformTab {
    /// Platform behind the tab.
    pub platform: Platform,
    /// Icon reference.
    pub icon: String,
    /// Whether this is the current platform.
    pub active: bool,
}

/// One app card in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppCard {
    /// App identifier.
    pub id: AppId,
    /// Display name.
    pub name: String,
    /// Icon reference.
    pub icon: String,
    /// Whether this card is the selected app.
    pub selected: bool,
}

/// Content of the instructions panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstructionPanel {
    /// Guide for the selected app.
    App(AppPanel),
    /// Fallback card when no app can be shown.
    Unavailable {
        /// Platform the card refers to.
        platform: Platform,
    },
}

/// Selected app details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppPanel {
    /// Display name.
    pub name: String,
    /// Icon reference.
    pub icon: String,
    /// Download link.
    pub download_url: String,
    /// Guide steps in the requested language.
    pub steps: Vec<GuideStep>,
}

/// Build the picker view for a selection state.
#[must_use]
pub fn page_view(catalog: &Catalog, state: UiState, language: &str) -> PageView {
    let tabs = catalog
        .platforms()
        .iter()
        .map(|entry| PlatformTab {
            platform: entry.platform,
            icon: entry.icon.clone(),
            active: entry.platform == state.platform,
        })
        .collect();

    let listed = catalog
        .platform(state.platform)
        .filter(|entry| entry.contains(state.app));
    let cards = catalog
        .platform(state.platform)
        .map(|entry| entry.apps())
        .unwrap_or_default()
        .iter()
        .filter_map(|&index| {
            catalog.app(index).map(|app| AppCard {
                id: app.id.clone(),
                name: app.name.clone(),
                icon: app.icon.clone(),
                selected: listed.is_some() && index == state.app,
            })
        })
        .collect();

    let panel = listed.and_then(|_| catalog.app(state.app)).map_or(
        InstructionPanel::Unavailable {
            platform: state.platform,
        },
        |app| {
            InstructionPanel::App(AppPanel {
                name: app.name.clone(),
                icon: app.icon.clone(),
                download_url: app.download_url.clone(),
                steps: catalog.guide(app, language).to_vec(),
            })
        },
    );

    PageView { tabs, cards, panel }
}
