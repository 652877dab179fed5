//! Platform and app selection.
//!
//! # Design
//! - [`UiState`] is a plain value; [`SelectionController`] is the only thing
//!   that mutates it and validates every transition against the catalog.
//! - Rejected transitions return [`SelectionError`] and leave state as it was.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{AppEntry, AppId, AppIndex, Catalog, PlatformEntry};
use crate::detect::{Environment, detect_platform};
use crate::error::SelectionError;
use crate::platform::Platform;

/// Current platform and the app selected on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UiState {
    /// Platform whose apps are listed.
    pub platform: Platform,
    /// Selected app; always listed by `platform` when produced by a controller.
    pub app: AppIndex,
}

/// Owns selection state for one page instance.
#[derive(Clone, Debug)]
pub struct SelectionController {
    catalog: Arc<Catalog>,
    state: UiState,
}

impl PartialEq for SelectionController {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog) && self.state == other.state
    }
}

impl SelectionController {
    /// Start on `platform` with its first app selected.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownPlatform`] if the catalog has no apps
    /// for the platform, which a validated catalog never does.
    pub fn new(catalog: Arc<Catalog>, platform: Platform) -> Result<Self, SelectionError> {
        let app = first_app(&catalog, platform)?;
        Ok(Self {
            catalog,
            state: UiState { platform, app },
        })
    }

    /// Start on the platform detected from the environment.
    ///
    /// # Errors
    ///
    /// See [`SelectionController::new`].
    pub fn detect(catalog: Arc<Catalog>, env: &Environment) -> Result<Self, SelectionError> {
        let platform = detect_platform(env);
        debug!(%platform, width = env.viewport_width, "initial platform detected");
        Self::new(catalog, platform)
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> UiState {
        self.state
    }

    /// Catalog backing the controller.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog.
    #[must_use]
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Entry for the current platform.
    #[must_use]
    pub fn current_platform(&self) -> Option<&PlatformEntry> {
        self.catalog.platform(self.state.platform)
    }

    /// Entry for the current app.
    #[must_use]
    pub fn current_app(&self) -> Option<&AppEntry> {
        self.catalog.app(self.state.app)
    }

    /// Switch platform and reset the app to the platform's first entry.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownPlatform`] if the platform has no apps.
    pub fn select_platform(&mut self, platform: Platform) -> Result<(), SelectionError> {
        let app = first_app(&self.catalog, platform)?;
        self.state = UiState { platform, app };
        debug!(%platform, "platform selected");
        Ok(())
    }

    /// Switch platform by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownPlatform`] for identifiers outside the
    /// supported set.
    pub fn select_platform_id(&mut self, id: &str) -> Result<(), SelectionError> {
        let platform = id.parse::<Platform>().inspect_err(|err| {
            warn!(error = %err, "platform selection rejected");
        })?;
        self.select_platform(platform)
    }

    /// Select an app on the current platform.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownApp`] when the id is not in the catalog
    /// and [`SelectionError::NotOnPlatform`] when it is not offered on the
    /// current platform.
    pub fn select_app(&mut self, id: &AppId) -> Result<(), SelectionError> {
        let platform = self.state.platform;
        let Some(index) = self.catalog.resolve(id) else {
            warn!(app = %id, "unknown app selection rejected");
            return Err(SelectionError::UnknownApp { id: id.clone() });
        };
        let listed = self
            .catalog
            .platform(platform)
            .is_some_and(|entry| entry.contains(index));
        if !listed {
            warn!(app = %id, %platform, "app not offered on platform");
            return Err(SelectionError::NotOnPlatform {
                id: id.clone(),
                platform,
            });
        }
        self.state.app = index;
        debug!(app = %id, %platform, "app selected");
        Ok(())
    }
}

fn first_app(catalog: &Catalog, platform: Platform) -> Result<AppIndex, SelectionError> {
    catalog
        .platform(platform)
        .and_then(PlatformEntry::first)
        .ok_or_else(|| SelectionError::UnknownPlatform {
            id: platform.id().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn controller(platform: Platform) -> Result<SelectionController, Box<dyn std::error::Error>> {
        let catalog = Arc::new(Catalog::embedded()?);
        Ok(SelectionController::new(catalog, platform)?)
    }

    fn current_id(controller: &SelectionController) -> Option<&str> {
        controller.current_app().map(|app| app.id.as_str())
    }

    #[test]
    fn new_starts_on_first_app() -> Result<(), Box<dyn std::error::Error>> {
        let ctl = controller(Platform::Ios)?;
        assert_eq!(current_id(&ctl), Some("v2box"));
        Ok(())
    }

    #[test]
    fn detect_uses_environment() -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Arc::new(Catalog::embedded()?);
        let ctl = SelectionController::detect(catalog, &Environment::new("Android", 1200))?;
        assert_eq!(ctl.state().platform, Platform::AndroidTv);
        assert_eq!(current_id(&ctl), Some("v2rayng"));
        Ok(())
    }

    #[test]
    fn platform_switch_resets_app() -> Result<(), Box<dyn std::error::Error>> {
        let mut ctl = controller(Platform::Windows)?;
        ctl.select_app(&AppId::from("karing"))?;
        ctl.select_platform(Platform::Mac)?;
        assert_eq!(current_id(&ctl), Some("hiddify"));
        Ok(())
    }

    #[test]
    fn rejected_selection_leaves_state() -> Result<(), Box<dyn std::error::Error>> {
        let mut ctl = controller(Platform::Windows)?;
        let before = ctl.state();

        let unknown = ctl.select_app(&AppId::from("outline"));
        assert!(matches!(unknown, Err(SelectionError::UnknownApp { .. })));

        let foreign = ctl.select_app(&AppId::from("v2box"));
        assert_eq!(
            foreign,
            Err(SelectionError::NotOnPlatform {
                id: AppId::from("v2box"),
                platform: Platform::Windows
            })
        );

        let bad_platform = ctl.select_platform_id("beos");
        assert!(matches!(
            bad_platform,
            Err(SelectionError::UnknownPlatform { .. })
        ));
        assert_eq!(ctl.state(), before);
        Ok(())
    }

    #[test]
    fn platform_id_parsing_switches() -> Result<(), Box<dyn std::error::Error>> {
        let mut ctl = controller(Platform::Windows)?;
        ctl.select_platform_id("linux")?;
        assert_eq!(ctl.state().platform, Platform::Linux);
        assert_eq!(current_id(&ctl), Some("throne"));
        Ok(())
    }

    #[test]
    fn controllers_are_independent() -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Arc::new(Catalog::embedded()?);
        let mut left = SelectionController::new(Arc::clone(&catalog), Platform::Windows)?;
        let right = SelectionController::new(catalog, Platform::Windows)?;
        left.select_app(&AppId::from("v2rayn"))?;
        assert_ne!(left, right);
        assert_eq!(current_id(&right), Some("throne"));
        Ok(())
    }

    #[test]
    fn catalog_errors_surface_before_selection() {
        let err = Catalog::from_json("{}");
        assert!(matches!(err, Err(CatalogError::Malformed { .. })));
    }
}
