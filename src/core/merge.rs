//! Conversion between locale-major and key-major data.
//!
//! `merge` inverts parsed locale files into the canonical key-major table;
//! `split` is its inverse, used by every exporter and by the remote push
//! path. Both directions are deterministic: the full key set is collected
//! before any record is filled, so output never depends on input iteration
//! order.

use std::collections::BTreeSet;

use super::record::{LocaleCode, LocaleMajor, LocalizationRecord, ResourceTable, TranslationKey};

/// Invert locale-major data into the canonical key-major table.
///
/// Every key observed in any locale produces one record with a value for
/// every locale in `supported` (`""` where the locale lacks the key).
/// Locales present in `locale_major` but not listed in `supported` are
/// ignored.
pub fn merge(locale_major: &LocaleMajor, supported: &[LocaleCode]) -> ResourceTable {
    let keys: BTreeSet<&TranslationKey> = supported
        .iter()
        .filter_map(|locale| locale_major.get(locale))
        .flat_map(|entries| entries.keys())
        .collect();

    keys.into_iter()
        .map(|key| {
            let mut record = LocalizationRecord::empty(key.clone(), supported);
            for locale in supported {
                if let Some(value) = locale_major.get(locale).and_then(|entries| entries.get(key)) {
                    record.values.insert(locale.clone(), value.clone());
                }
            }
            (key.clone(), record)
        })
        .collect()
}

/// Invert the canonical table back into locale-major data.
///
/// Emits the full matrix: every supported locale gets every key, empty
/// strings included. This matches what the push path writes remotely, and
/// keeps `split(merge(x))` lossless modulo explicit empty entries.
pub fn split(table: &ResourceTable, supported: &[LocaleCode]) -> LocaleMajor {
    supported
        .iter()
        .map(|locale| {
            let entries = table
                .values()
                .map(|record| (record.key.clone(), record.value(locale).to_string()))
                .collect();
            (locale.clone(), entries)
        })
        .collect()
}
