//! Rendering and persisting the per-locale file tree.
//!
//! One file per supported locale, named by project type (`en.json` for
//! react projects, `intl_en.arb` for flutter projects), each a pretty-
//! printed flat JSON object with 2-space indentation and a trailing
//! newline.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::ProjectType;
use crate::core::record::{LocaleCode, ResourceTable};
use crate::core::split;
use crate::error::{AppError, Result};

/// Render one locale's entries as the on-disk JSON body.
pub fn render_locale_json(entries: &BTreeMap<String, String>) -> String {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();
    // serde_json cannot fail on a map of strings.
    let body = serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_default();
    format!("{}\n", body)
}

/// Split the table and render `(file name, content)` per supported locale.
pub fn render_locale_files(
    table: &ResourceTable,
    supported: &[LocaleCode],
    project_type: ProjectType,
) -> Vec<(String, String)> {
    split(table, supported)
        .iter()
        .map(|(locale, entries)| (project_type.file_name(locale), render_locale_json(entries)))
        .collect()
}

/// Write the locale file tree under `root`, creating it if needed.
///
/// Returns the written paths. Writing an empty table is allowed here (this
/// is persistence, not a download); exporters guard against empty tables
/// themselves.
pub fn write_locale_tree(
    root: &Path,
    table: &ResourceTable,
    supported: &[LocaleCode],
    project_type: ProjectType,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(root)
        .map_err(|err| AppError::file(root.to_string_lossy(), err.to_string()))?;

    let mut written = Vec::new();
    for (name, content) in render_locale_files(table, supported, project_type) {
        let path = root.join(&name);
        fs::write(&path, content)
            .map_err(|err| AppError::file(path.to_string_lossy(), err.to_string()))?;
        written.push(path);
    }
    Ok(written)
}
