//! Canonical data types for localization resources.
//!
//! Resources are stored key-major: one [`LocalizationRecord`] per translation
//! key, holding a value for every supported locale. Locale-major data (one
//! map per locale, as found in `en.json` / `intl_vi.arb` files) only exists
//! at the parse/export boundary.

use std::collections::BTreeMap;
use std::fmt;

/// Short identifier for a target language/region (e.g., "en", "vi").
pub type LocaleCode = String;

/// Dot-segmented identifier for one translatable string (e.g., "home.title").
pub type TranslationKey = String;

/// Locale-major data: locale → key → value.
///
/// This is the shape of a set of parsed locale files, and the shape exporters
/// produce when writing files back out.
pub type LocaleMajor = BTreeMap<LocaleCode, BTreeMap<TranslationKey, String>>;

/// One translation key with its value in every supported locale.
///
/// The key is a distinguished field; locale values live in a map rather than
/// dynamic per-locale fields, so adding a locale column is an ordinary map
/// insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationRecord {
    /// The translation key (e.g., "home.title").
    pub key: TranslationKey,
    /// Value per locale. Missing translations are stored as `""`.
    pub values: BTreeMap<LocaleCode, String>,
}

impl LocalizationRecord {
    /// Create a record with an empty string for every given locale.
    pub fn empty(key: impl Into<TranslationKey>, locales: &[LocaleCode]) -> Self {
        Self {
            key: key.into(),
            values: locales
                .iter()
                .map(|locale| (locale.clone(), String::new()))
                .collect(),
        }
    }

    /// Get the value for a locale, or `""` if the locale is absent.
    pub fn value(&self, locale: &str) -> &str {
        self.values.get(locale).map(String::as_str).unwrap_or("")
    }

    /// Locales whose value is empty (untranslated cells).
    pub fn untranslated_locales(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(locale, _)| locale.as_str())
            .collect()
    }

    /// True if every locale has a non-empty value.
    pub fn is_complete(&self) -> bool {
        self.values.values().all(|value| !value.is_empty())
    }

    /// Re-synchronize the value map to exactly the given locale set.
    ///
    /// Unknown locales are dropped, missing locales are back-filled with `""`.
    pub fn normalize(&mut self, locales: &[LocaleCode]) {
        self.values.retain(|locale, _| locales.contains(locale));
        for locale in locales {
            self.values.entry(locale.clone()).or_default();
        }
    }

    /// First dot-segment of the key, used for namespace grouping.
    pub fn namespace(&self) -> &str {
        self.key.split('.').next().unwrap_or(&self.key)
    }
}

impl fmt::Display for LocalizationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} locales)", self.key, self.values.len())
    }
}

/// The canonical table: key → record, ordered by key for stable display.
pub type ResourceTable = BTreeMap<TranslationKey, LocalizationRecord>;
