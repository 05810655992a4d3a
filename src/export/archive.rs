//! ZIP archive export and import.
//!
//! The archive holds one `<locale>.json` entry per supported locale, each a
//! pretty-printed flat JSON object with the same bodies the locale file
//! tree uses, bundled for download.

use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::core::record::{LocaleCode, ResourceTable};
use crate::core::split;
use crate::error::{AppError, Result};
use crate::export::tree::render_locale_json;

/// Default download filename.
pub const DEFAULT_ARCHIVE_NAME: &str = "localizations.zip";

/// Serialize the table into ZIP archive bytes.
///
/// An empty table is a Validation error rather than an empty archive.
pub fn to_archive_bytes(table: &ResourceTable, supported: &[LocaleCode]) -> Result<Vec<u8>> {
    if table.is_empty() {
        return Err(AppError::validation(
            "nothing to export: the localization table is empty",
        ));
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (locale, entries) in split(table, supported) {
        writer.start_file(format!("{}.json", locale), options)?;
        writer.write_all(render_locale_json(&entries).as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Read archive bytes back into `(entry name, content)` pairs.
///
/// Entries that are not UTF-8 text are skipped; locale extraction and JSON
/// validation happen downstream in the locale file parser, which records
/// its own per-file warnings.
pub fn read_archive_entries(bytes: &[u8], source: &str) -> Result<Vec<(String, String)>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|err| AppError::file(source, format!("not a readable archive: {}", err)))?;

    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        let mut content = String::new();
        if entry.read_to_string(&mut content).is_ok() {
            entries.push((name, content));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::merge;
    use crate::core::parse::parse_locale_files;

    fn sample() -> (Vec<LocaleCode>, ResourceTable) {
        let outcome = parse_locale_files(&[
            ("en.json".to_string(), r#"{"a.b": "hello"}"#.to_string()),
            ("vi.json".to_string(), r#"{"a.b": "xin chao"}"#.to_string()),
        ]);
        let table = merge(&outcome.locale_major, &outcome.locales);
        (outcome.locales, table)
    }

    #[test]
    fn test_empty_table_export_is_a_validation_error() {
        let err = to_archive_bytes(&ResourceTable::new(), &["en".to_string()]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_archive_round_trip() {
        let (locales, table) = sample();
        let bytes = to_archive_bytes(&table, &locales).unwrap();

        let entries = read_archive_entries(&bytes, "test.zip").unwrap();
        let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["en.json", "vi.json"]);

        let outcome = parse_locale_files(&entries);
        assert_eq!(outcome.locales, locales);
        assert_eq!(merge(&outcome.locale_major, &outcome.locales), table);
    }

    #[test]
    fn test_garbage_bytes_are_a_file_error() {
        let err = read_archive_entries(b"not an archive", "junk.zip").unwrap_err();
        assert!(matches!(err, AppError::FileProcessing { .. }));
    }
}
