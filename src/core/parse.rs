//! Locale file parsing: named file contents → locale-major data.
//!
//! Each input file is a flat JSON object of `key → string` (plain `en.json`
//! or Flutter `intl_en.arb`). The locale code is taken from the filename.
//! Individual files that fail to parse are skipped with a recorded warning
//! so a multi-file import can partially succeed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use walkdir::WalkDir;

use super::record::{LocaleCode, LocaleMajor};

/// Filename patterns a locale code can be extracted from:
/// a trailing `_xx.json` / `_xx.arb` segment, or a bare `xx.json` / `xx.arb`
/// basename. Two or three ASCII letters (e.g., "en", "fil").
static LOCALE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([A-Za-z]{2,3})\.(?:json|arb)$").unwrap());
static LOCALE_BASENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]{2,3})\.(?:json|arb)$").unwrap());

/// A warning from parsing locale files.
///
/// Warnings are non-fatal: the file (or entry) they describe is skipped and
/// the rest of the import proceeds.
#[derive(Debug, Clone)]
pub struct ParseWarning {
    pub file: String,
    pub message: String,
}

impl ParseWarning {
    fn new(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
        }
    }
}

/// Result of parsing a set of locale files.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Locales in order of first appearance (files are processed in sorted
    /// filename order, so this is deterministic).
    pub locales: Vec<LocaleCode>,
    /// Parsed data, locale-major.
    pub locale_major: LocaleMajor,
    /// Per-file and per-entry problems encountered along the way.
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    /// True if nothing was parsed at all.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Extract the locale code from a locale filename or path.
///
/// Returns `None` for filenames that match neither pattern.
///
/// # Examples
///
/// ```
/// use lokal::core::parse::locale_from_filename;
///
/// assert_eq!(locale_from_filename("intl_en.arb").as_deref(), Some("en"));
/// assert_eq!(locale_from_filename("/src/i18n/vi.json").as_deref(), Some("vi"));
/// assert_eq!(locale_from_filename("strings.json"), None);
/// ```
pub fn locale_from_filename(name: &str) -> Option<LocaleCode> {
    let basename = name.rsplit(['/', '\\']).next().unwrap_or(name);
    LOCALE_SUFFIX
        .captures(basename)
        .or_else(|| LOCALE_BASENAME.captures(basename))
        .map(|caps| caps[1].to_string())
}

/// Parse a set of named locale file contents into locale-major data.
///
/// Files are processed in lexicographically sorted filename order. When two
/// files map to the same locale, their keys are unioned and the later file
/// wins on overlap. Files with unrecognized names or invalid JSON are
/// skipped with a warning; entries whose value is not a string are skipped
/// with a warning.
pub fn parse_locale_files(files: &[(String, String)]) -> ParseOutcome {
    let mut sorted: Vec<&(String, String)> = files.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut outcome = ParseOutcome::default();
    for (name, content) in sorted {
        let Some(locale) = locale_from_filename(name) else {
            outcome.warnings.push(ParseWarning::new(
                name,
                "filename does not encode a locale (expected e.g. en.json or intl_en.arb)",
            ));
            continue;
        };

        let entries = match parse_flat_object(content) {
            Ok((entries, entry_warnings)) => {
                for message in entry_warnings {
                    outcome.warnings.push(ParseWarning::new(name, message));
                }
                entries
            }
            Err(message) => {
                outcome.warnings.push(ParseWarning::new(name, message));
                continue;
            }
        };

        if !outcome.locales.contains(&locale) {
            outcome.locales.push(locale.clone());
        }
        outcome.locale_major.entry(locale).or_default().extend(entries);
    }
    outcome
}

/// Read every `.json` / `.arb` file under a directory and parse it.
///
/// A missing directory yields an empty outcome (callers decide whether an
/// empty store is acceptable). Unreadable files are downgraded to warnings,
/// matching the per-file skip policy of [`parse_locale_files`].
pub fn scan_locale_dir(root: &Path) -> Result<ParseOutcome> {
    if !root.exists() {
        return Ok(ParseOutcome::default());
    }

    let mut files = Vec::new();
    let mut unreadable = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_locale_file = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "json" || ext == "arb");
        if !is_locale_file {
            continue;
        }
        match fs::read_to_string(path) {
            Ok(content) => files.push((path.to_string_lossy().to_string(), content)),
            Err(err) => unreadable.push(ParseWarning::new(
                path.to_string_lossy(),
                format!("unreadable file: {}", err),
            )),
        }
    }

    let mut outcome = parse_locale_files(&files);
    outcome.warnings.extend(unreadable);
    Ok(outcome)
}

/// Parse one locale file body: a flat JSON object of `key → string`.
///
/// Returns the string entries plus a warning message for each entry whose
/// value is not a string (ARB metadata objects, arrays, numbers). Errors if
/// the content is not valid JSON or the root is not an object.
fn parse_flat_object(content: &str) -> std::result::Result<(BTreeMap<String, String>, Vec<String>), String> {
    let value: Value =
        serde_json::from_str(content).map_err(|err| format!("invalid JSON: {}", err))?;

    let Value::Object(map) = value else {
        return Err("root of a locale file must be a JSON object".to_string());
    };

    let mut entries = BTreeMap::new();
    let mut warnings = Vec::new();
    for (key, value) in map {
        match value {
            Value::String(text) => {
                entries.insert(key, text);
            }
            other => warnings.push(format!(
                "skipped key \"{}\": value is {} rather than a string",
                key,
                type_name(&other)
            )),
        }
    }
    Ok((entries, warnings))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
