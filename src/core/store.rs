//! The resource store: owned, mutable editing state.
//!
//! The store holds the canonical table plus the supported-locale list and is
//! the single writer for both. All operations are synchronous single state
//! transitions; each mutation notifies registered subscribers so callers
//! (the CLI reporter, a future UI) can observe changes without polling.
//!
//! Records are normalized on write: after any mutation, every record's
//! locale set equals `supported_locales` exactly. A cell write targeting an
//! unknown locale registers that locale and back-fills every record.

use super::record::{LocaleCode, LocalizationRecord, ResourceTable, TranslationKey};

/// A change applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Whole-state replacement (file, Excel, ZIP, or remote import).
    Replaced,
    /// One cell changed value.
    CellSet { key: TranslationKey, locale: LocaleCode },
    KeyAdded(TranslationKey),
    KeyDeleted(TranslationKey),
    LocaleAdded(LocaleCode),
    Reset,
}

type Subscriber = Box<dyn Fn(&StoreEvent)>;

/// Owned editing state for one localization project.
#[derive(Default)]
pub struct ResourceStore {
    supported_locales: Vec<LocaleCode>,
    table: ResourceTable,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("supported_locales", &self.supported_locales)
            .field("keys", &self.table.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered locale columns.
    pub fn supported_locales(&self) -> &[LocaleCode] {
        &self.supported_locales
    }

    /// Read-only view of the canonical table.
    pub fn table(&self) -> &ResourceTable {
        &self.table
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Register a change subscriber, called synchronously on every mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self, event: StoreEvent) {
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
    }

    /// Replace the entire state. Deduplicates the locale list (set
    /// semantics, first occurrence wins the position) and normalizes every
    /// incoming record to it.
    pub fn import_all(&mut self, locales: Vec<LocaleCode>, table: ResourceTable) {
        let mut deduped: Vec<LocaleCode> = Vec::with_capacity(locales.len());
        for locale in locales {
            if !deduped.contains(&locale) {
                deduped.push(locale);
            }
        }

        self.supported_locales = deduped;
        self.table = table;
        for record in self.table.values_mut() {
            record.normalize(&self.supported_locales);
        }
        self.notify(StoreEvent::Replaced);
    }

    /// Set one cell. Creates the record (back-filled with empty strings) if
    /// the key is new, and registers the locale (back-filling all records)
    /// if it is unknown.
    pub fn set_cell(&mut self, key: &str, locale: &str, value: impl Into<String>) {
        if !self.supported_locales.iter().any(|code| code == locale) {
            self.add_locale(locale);
        }
        let record = self
            .table
            .entry(key.to_string())
            .or_insert_with(|| LocalizationRecord::empty(key, &self.supported_locales));
        record.values.insert(locale.to_string(), value.into());
        self.notify(StoreEvent::CellSet {
            key: key.to_string(),
            locale: locale.to_string(),
        });
    }

    /// Insert a new key with empty strings for every supported locale.
    ///
    /// Returns false without touching the table if the key already exists.
    pub fn add_key(&mut self, key: &str) -> bool {
        if self.table.contains_key(key) {
            return false;
        }
        self.table.insert(
            key.to_string(),
            LocalizationRecord::empty(key, &self.supported_locales),
        );
        self.notify(StoreEvent::KeyAdded(key.to_string()));
        true
    }

    /// Remove a key. Returns false if it was not present.
    pub fn delete_key(&mut self, key: &str) -> bool {
        if self.table.remove(key).is_none() {
            return false;
        }
        self.notify(StoreEvent::KeyDeleted(key.to_string()));
        true
    }

    /// Append a locale column and back-fill `""` into every record.
    ///
    /// Returns false if the locale is already supported.
    pub fn add_locale(&mut self, locale: &str) -> bool {
        if self.supported_locales.iter().any(|code| code == locale) {
            return false;
        }
        self.supported_locales.push(locale.to_string());
        for record in self.table.values_mut() {
            record.values.entry(locale.to_string()).or_default();
        }
        self.notify(StoreEvent::LocaleAdded(locale.to_string()));
        true
    }

    /// Clear to the initial empty state.
    pub fn reset(&mut self) {
        self.supported_locales.clear();
        self.table.clear();
        self.notify(StoreEvent::Reset);
    }

    /// Records with at least one empty cell, in display order.
    pub fn untranslated(&self) -> Vec<&LocalizationRecord> {
        self.table
            .values()
            .filter(|record| !record.is_complete())
            .collect()
    }

    /// Distinct key namespaces (first dot-segment), in display order.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in self.table.values() {
            let namespace = record.namespace();
            if !seen.contains(&namespace) {
                seen.push(namespace);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::merge::merge;
    use crate::core::parse::parse_locale_files;

    fn seeded_store() -> ResourceStore {
        let outcome = parse_locale_files(&[
            ("en.json".to_string(), r#"{"a.b": "hello"}"#.to_string()),
            ("vi.json".to_string(), r#"{"a.b": "xin chao"}"#.to_string()),
        ]);
        let table = merge(&outcome.locale_major, &outcome.locales);
        let mut store = ResourceStore::new();
        store.import_all(outcome.locales, table);
        store
    }

    #[test]
    fn test_import_from_locale_files() {
        let store = seeded_store();
        assert_eq!(store.supported_locales(), ["en", "vi"]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.table()["a.b"].value("en"), "hello");
        assert_eq!(store.table()["a.b"].value("vi"), "xin chao");
    }

    #[test]
    fn test_import_all_dedupes_locales() {
        let mut store = ResourceStore::new();
        store.import_all(
            vec!["en".to_string(), "vi".to_string(), "en".to_string()],
            ResourceTable::new(),
        );
        assert_eq!(store.supported_locales(), ["en", "vi"]);
    }

    #[test]
    fn test_add_key_is_idempotent() {
        let mut store = seeded_store();

        assert!(store.add_key("c.d"));
        assert_eq!(store.table()["c.d"].value("en"), "");
        assert_eq!(store.table()["c.d"].value("vi"), "");

        // Second call leaves exactly one unchanged record.
        store.set_cell("c.d", "en", "filled");
        assert!(!store.add_key("c.d"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.table()["c.d"].value("en"), "filled");
    }

    #[test]
    fn test_delete_key_noop_when_absent() {
        let mut store = seeded_store();
        assert!(store.delete_key("a.b"));
        assert!(!store.delete_key("a.b"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_locale_backfills_every_record() {
        let mut store = seeded_store();
        store.add_key("c.d");

        assert!(store.add_locale("fr"));
        assert_eq!(store.supported_locales(), ["en", "vi", "fr"]);
        for record in store.table().values() {
            assert_eq!(record.value("fr"), "");
            assert_eq!(record.values.len(), 3);
        }

        assert!(!store.add_locale("fr"));
    }

    #[test]
    fn test_set_cell_creates_record_and_registers_locale() {
        let mut store = seeded_store();

        store.set_cell("new.key", "en", "value");
        assert_eq!(store.table()["new.key"].value("en"), "value");
        assert_eq!(store.table()["new.key"].value("vi"), "");

        // Unknown locale is registered and back-filled instead of drifting.
        store.set_cell("a.b", "de", "hallo");
        assert_eq!(store.supported_locales(), ["en", "vi", "de"]);
        assert_eq!(store.table()["new.key"].value("de"), "");
    }

    #[test]
    fn test_import_all_normalizes_records() {
        let mut table = ResourceTable::new();
        let mut record = LocalizationRecord::empty("k", &[]);
        record.values.insert("de".to_string(), "drift".to_string());
        table.insert("k".to_string(), record);

        let mut store = ResourceStore::new();
        store.import_all(vec!["en".to_string()], table);

        assert_eq!(store.table()["k"].value("en"), "");
        assert!(!store.table()["k"].values.contains_key("de"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = seeded_store();
        store.reset();
        assert!(store.is_empty());
        assert!(store.supported_locales().is_empty());
    }

    #[test]
    fn test_subscribers_observe_mutations() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut store = seeded_store();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.add_key("c.d");
        store.set_cell("c.d", "en", "x");
        store.delete_key("c.d");
        store.reset();

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::KeyAdded("c.d".to_string()),
                StoreEvent::CellSet {
                    key: "c.d".to_string(),
                    locale: "en".to_string()
                },
                StoreEvent::KeyDeleted("c.d".to_string()),
                StoreEvent::Reset,
            ]
        );
    }

    #[test]
    fn test_untranslated_and_namespaces() {
        let mut store = seeded_store();
        store.add_key("auth.login");
        store.set_cell("auth.login", "en", "Log in");

        let untranslated: Vec<&str> = store
            .untranslated()
            .iter()
            .map(|record| record.key.as_str())
            .collect();
        assert_eq!(untranslated, vec!["auth.login"]);
        assert_eq!(store.namespaces(), vec!["a", "auth"]);
    }
}
