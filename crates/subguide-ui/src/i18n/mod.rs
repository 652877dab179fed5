//! Lightweight JSON-backed translations with per-locale bundles.

use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// Russian.
    #[default]
    Ru,
    /// English.
    En,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Ru, Self::En]
    }

    /// Two-letter language code, also used to pick catalog guides.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Short label for the language switch.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Ru => "RU",
            Self::En => "EN",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Ru;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys resolve against the Russian bundle before the caller default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with default-locale fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve a path and substitute `{name}` placeholders from `args`.
    ///
    /// Placeholders without a matching argument are left untouched.
    #[must_use]
    pub fn format(&self, path: &str, default: &str, args: &[(&str, &str)]) -> String {
        let template = self.text(path, default);
        args.iter().fold(template, |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
    }
}

static FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(DEFAULT_LOCALE));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Ru => include_str!("../../i18n/ru.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn lang_tags_map_to_base_language() {
        assert_eq!(LocaleCode::from_lang_tag("ru-RU"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("EN_us"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("de-DE"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }

    #[test]
    fn copied_toast_substitutes_label() {
        let ru = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(
            ru.format("toast.copied", "", &[("name", "MIX")]),
            "Подписка [MIX] скопирована!"
        );
        let en = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            en.format("toast.copied", "", &[("name", "MyApp")]),
            "Subscription [MyApp] copied!"
        );
    }

    #[test]
    fn unavailable_hint_names_the_platform() {
        for locale in LocaleCode::all() {
            let text = TranslationBundle::new(locale).format(
                "clients.unavailable.description",
                "",
                &[("platform", "Android TV")],
            );
            assert!(text.contains("Android TV"), "{text}");
            assert!(!text.contains("{platform}"), "{text}");
        }
    }

    #[test]
    fn unmatched_placeholder_is_kept() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            bundle.format("missing", "{a} and {b}", &[("a", "x")]),
            "x and {b}"
        );
    }

    #[test]
    fn locales_share_the_same_keys() {
        fn keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
            if let Some(map) = value.as_object() {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    keys(&path, child, out);
                }
            } else {
                out.push(prefix.to_string());
            }
        }
        let mut expected = Vec::new();
        keys("", &TranslationBundle::new(LocaleCode::Ru).tree, &mut expected);
        assert!(!expected.is_empty());
        for locale in LocaleCode::all() {
            let mut found = Vec::new();
            keys("", &TranslationBundle::new(locale).tree, &mut found);
            assert_eq!(found, expected, "{}", locale.code());
        }
    }
}
