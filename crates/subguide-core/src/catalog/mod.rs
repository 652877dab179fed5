//! App catalog and platform map.
//!
//! # Design
//! - Apps live in a flat arena; platforms refer to them by [`AppIndex`].
//! - Every identifier is resolved and checked once, at load, so lookups after
//!   that are index based and cannot dangle.
//! - Guides are stored per language and fall back to the catalog default.

pub mod guide;

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::platform::Platform;
use guide::{GuideStep, parse_step};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Stable application identifier (for example `v2rayng`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AppId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Position of an app inside its [`Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppIndex(usize);

/// Display metadata for one client application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppEntry {
    /// Unique identifier.
    pub id: AppId,
    /// Display name.
    pub name: String,
    /// Icon class reference (Font Awesome class list).
    pub icon: String,
    /// Download or store page.
    pub download_url: String,
    guides: BTreeMap<String, Vec<GuideStep>>,
}

/// Ordered app list offered for one platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformEntry {
    /// Platform this list belongs to.
    pub platform: Platform,
    /// Icon class reference for the platform tab.
    pub icon: String,
    apps: Vec<AppIndex>,
}

impl PlatformEntry {
    /// Apps in display order. Never empty.
    #[must_use]
    pub fn apps(&self) -> &[AppIndex] {
        &self.apps
    }

    /// First app in display order, used whenever the platform becomes current.
    #[must_use]
    pub fn first(&self) -> Option<AppIndex> {
        self.apps.first().copied()
    }

    /// Whether the platform offers the app.
    #[must_use]
    pub fn contains(&self, index: AppIndex) -> bool {
        self.apps.contains(&index)
    }
}

/// Validated, immutable catalog of apps and platforms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    default_language: String,
    apps: Vec<AppEntry>,
    by_id: HashMap<AppId, AppIndex>,
    platforms: Vec<PlatformEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    default_language: String,
    apps: Vec<RawApp>,
    platforms: Vec<RawPlatform>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawApp {
    id: AppId,
    name: String,
    icon: String,
    download_url: String,
    guide: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPlatform {
    id: Platform,
    icon: String,
    apps: Vec<AppId>,
}

impl Catalog {
    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled data fails validation.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the JSON is malformed, an identifier is
    /// duplicated or unresolved, a platform is missing or empty, or a guide
    /// step fails to parse.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            serde_json::from_str(raw).map_err(|source| CatalogError::Malformed { source })?;

        let mut apps = Vec::with_capacity(raw.apps.len());
        let mut by_id = HashMap::with_capacity(raw.apps.len());
        for app in raw.apps {
            let entry = build_app(app, &raw.default_language)?;
            if by_id.contains_key(&entry.id) {
                return Err(CatalogError::DuplicateApp { id: entry.id });
            }
            by_id.insert(entry.id.clone(), AppIndex(apps.len()));
            apps.push(entry);
        }

        let mut slots: Vec<Option<PlatformEntry>> = Platform::ALL.iter().map(|_| None).collect();
        for platform in raw.platforms {
            let entry = build_platform(platform, &by_id)?;
            let slot = &mut slots[entry.platform.ordinal()];
            if slot.is_some() {
                return Err(CatalogError::DuplicatePlatform {
                    platform: entry.platform,
                });
            }
            *slot = Some(entry);
        }
        let platforms = Platform::ALL
            .iter()
            .zip(slots)
            .map(|(platform, slot)| {
                slot.ok_or(CatalogError::MissingPlatform {
                    platform: *platform,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            apps = apps.len(),
            platforms = platforms.len(),
            "catalog loaded"
        );
        Ok(Self {
            default_language: raw.default_language,
            apps,
            by_id,
            platforms,
        })
    }

    /// Language used when a guide is not available in the requested one.
    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// All apps in catalog order.
    #[must_use]
    pub fn apps(&self) -> &[AppEntry] {
        &self.apps
    }

    /// Platform entries in tab display order.
    #[must_use]
    pub fn platforms(&self) -> &[PlatformEntry] {
        &self.platforms
    }

    /// Entry for a platform. Every platform is present after validation.
    #[must_use]
    pub fn platform(&self, platform: Platform) -> Option<&PlatformEntry> {
        self.platforms.get(platform.ordinal())
    }

    /// Resolve an identifier to its index.
    #[must_use]
    pub fn resolve(&self, id: &AppId) -> Option<AppIndex> {
        self.by_id.get(id).copied()
    }

    /// App stored at the index, if it belongs to this catalog.
    #[must_use]
    pub fn app(&self, index: AppIndex) -> Option<&AppEntry> {
        self.apps.get(index.0)
    }

    /// Guide for an app in the requested language, falling back to the default.
    #[must_use]
    pub fn guide<'a>(&self, app: &'a AppEntry, language: &str) -> &'a [GuideStep] {
        app.guides
            .get(language)
            .or_else(|| app.guides.get(&self.default_language))
            .map_or(&[], Vec::as_slice)
    }
}

fn build_app(raw: RawApp, default_language: &str) -> Result<AppEntry, CatalogError> {
    let id = raw.id;
    if id.as_str().trim().is_empty() {
        return Err(CatalogError::InvalidApp {
            id,
            field: "id",
            reason: "empty",
        });
    }
    if raw.name.trim().is_empty() {
        return Err(CatalogError::InvalidApp {
            id,
            field: "name",
            reason: "empty",
        });
    }
    if !raw.download_url.starts_with("https://") {
        return Err(CatalogError::InvalidApp {
            id,
            field: "download_url",
            reason: "must be an https URL",
        });
    }
    if !raw.guide.contains_key(default_language) {
        return Err(CatalogError::MissingGuide {
            id,
            language: default_language.to_string(),
        });
    }

    let mut guides = BTreeMap::new();
    for (language, steps) in raw.guide {
        if steps.is_empty() {
            return Err(CatalogError::InvalidApp {
                id,
                field: "guide",
                reason: "has no steps",
            });
        }
        let mut parsed = Vec::with_capacity(steps.len());
        for (step, source) in steps.iter().enumerate() {
            let guide_step = parse_step(source).map_err(|source| CatalogError::GuideMarkup {
                id: id.clone(),
                language: language.clone(),
                step,
                source,
            })?;
            parsed.push(guide_step);
        }
        guides.insert(language, parsed);
    }

    Ok(AppEntry {
        id,
        name: raw.name,
        icon: raw.icon,
        download_url: raw.download_url,
        guides,
    })
}

fn build_platform(
    raw: RawPlatform,
    by_id: &HashMap<AppId, AppIndex>,
) -> Result<PlatformEntry, CatalogError> {
    let platform = raw.id;
    if raw.apps.is_empty() {
        return Err(CatalogError::EmptyPlatform { platform });
    }
    let mut apps = Vec::with_capacity(raw.apps.len());
    for id in raw.apps {
        let index = by_id
            .get(&id)
            .copied()
            .ok_or_else(|| CatalogError::UnknownApp {
                platform,
                id: id.clone(),
            })?;
        if apps.contains(&index) {
            return Err(CatalogError::DuplicateListing { platform, id });
        }
        apps.push(index);
    }
    Ok(PlatformEntry {
        platform,
        icon: raw.icon,
        apps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "default_language": "ru",
            "apps": [
                {
                    "id": "alpha",
                    "name": "Alpha",
                    "icon": "fa-solid fa-a",
                    "download_url": "https://example.com/alpha",
                    "guide": { "ru": ["Шаг **один**."], "en": ["Step **one**."] }
                },
                {
                    "id": "beta",
                    "name": "Beta",
                    "icon": "fa-solid fa-b",
                    "download_url": "https://example.com/beta",
                    "guide": { "ru": ["Шаг два."] }
                }
            ],
            "platforms": [
                { "id": "windows", "icon": "fa-brands fa-windows", "apps": ["alpha", "beta"] },
                { "id": "android", "icon": "fa-brands fa-android", "apps": ["beta"] },
                { "id": "androidtv", "icon": "fa-solid fa-tv", "apps": ["beta"] },
                { "id": "ios", "icon": "fa-brands fa-apple", "apps": ["alpha"] },
                { "id": "mac", "icon": "fa-brands fa-apple", "apps": ["alpha"] },
                { "id": "linux", "icon": "fa-brands fa-linux", "apps": ["beta", "alpha"] }
            ]
        })
    }

    fn load(value: &serde_json::Value) -> Result<Catalog, CatalogError> {
        Catalog::from_json(&value.to_string())
    }

    #[test]
    fn embedded_catalog_is_valid() -> Result<(), CatalogError> {
        let catalog = Catalog::embedded()?;
        assert_eq!(catalog.platforms().len(), Platform::ALL.len());
        assert_eq!(catalog.default_language(), "ru");
        for entry in catalog.platforms() {
            assert!(entry.first().is_some(), "{} is empty", entry.platform);
        }
        Ok(())
    }

    #[test]
    fn platform_lists_keep_authored_order() -> Result<(), CatalogError> {
        let catalog = load(&sample())?;
        let linux = catalog.platform(Platform::Linux).map(PlatformEntry::apps);
        let names: Vec<&str> = linux
            .unwrap_or_default()
            .iter()
            .filter_map(|index| catalog.app(*index))
            .map(|app| app.name.as_str())
            .collect();
        assert_eq!(names, ["Beta", "Alpha"]);
        Ok(())
    }

    #[test]
    fn guide_falls_back_to_default_language() -> Result<(), CatalogError> {
        let catalog = load(&sample())?;
        let beta = catalog
            .resolve(&AppId::from("beta"))
            .and_then(|index| catalog.app(index));
        let Some(beta) = beta else {
            panic!("beta missing");
        };
        let steps = catalog.guide(beta, "en");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].plain_text(), "Шаг два.");
        Ok(())
    }

    #[test]
    fn unknown_listing_is_rejected() {
        let mut doc = sample();
        doc["platforms"][1]["apps"] = json!(["gamma"]);
        assert!(matches!(
            load(&doc),
            Err(CatalogError::UnknownApp {
                platform: Platform::Android,
                ref id
            }) if id.as_str() == "gamma"
        ));
    }

    #[test]
    fn duplicate_listing_is_rejected() {
        let mut doc = sample();
        doc["platforms"][0]["apps"] = json!(["alpha", "alpha"]);
        assert!(matches!(
            load(&doc),
            Err(CatalogError::DuplicateListing { platform: Platform::Windows, .. })
        ));
    }

    #[test]
    fn missing_and_empty_platforms_are_rejected() {
        let mut doc = sample();
        if let Some(list) = doc["platforms"].as_array_mut() {
            list.pop();
        }
        assert!(matches!(
            load(&doc),
            Err(CatalogError::MissingPlatform { platform: Platform::Linux })
        ));

        let mut doc = sample();
        doc["platforms"][2]["apps"] = json!([]);
        assert!(matches!(
            load(&doc),
            Err(CatalogError::EmptyPlatform { platform: Platform::AndroidTv })
        ));
    }

    #[test]
    fn duplicate_app_and_platform_are_rejected() {
        let mut doc = sample();
        doc["apps"][1]["id"] = json!("alpha");
        assert!(matches!(load(&doc), Err(CatalogError::DuplicateApp { .. })));

        let mut doc = sample();
        doc["platforms"][1]["id"] = json!("windows");
        assert!(matches!(
            load(&doc),
            Err(CatalogError::DuplicatePlatform { platform: Platform::Windows })
        ));
    }

    #[test]
    fn app_fields_are_validated() {
        let mut doc = sample();
        doc["apps"][0]["download_url"] = json!("ftp://example.com");
        assert!(matches!(
            load(&doc),
            Err(CatalogError::InvalidApp { field: "download_url", .. })
        ));

        let mut doc = sample();
        doc["apps"][1]["guide"] = json!({ "en": ["Step."] });
        assert!(matches!(load(&doc), Err(CatalogError::MissingGuide { .. })));

        let mut doc = sample();
        doc["apps"][1]["guide"]["ru"] = json!(["ok", "broken **markup"]);
        assert!(matches!(
            load(&doc),
            Err(CatalogError::GuideMarkup { step: 1, .. })
        ));
    }

    #[test]
    fn unknown_platform_id_is_malformed() {
        let mut doc = sample();
        doc["platforms"][0]["id"] = json!("symbian");
        assert!(matches!(load(&doc), Err(CatalogError::Malformed { .. })));
    }
}
