//! Import: locale files, an Excel workbook, or a ZIP archive → the store →
//! the messages root.
//!
//! Per-file problems are warnings and the import partially succeeds; an
//! import where nothing parsed at all is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::{CommandResult, context::EditorContext};
use crate::cli::args::ImportCommand;
use crate::core::{merge, parse_locale_files};
use crate::error::AppError;
use crate::export::{archive::read_archive_entries, excel::from_workbook_bytes};
use crate::reporter;

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let mut context = EditorContext::prepare(&cmd.common)?;

    let issues = if let Some(workbook) = &cmd.excel {
        import_excel(&mut context, workbook)?
    } else if let Some(archive) = &cmd.archive {
        import_archive(&mut context, archive)?
    } else {
        import_files(&mut context, &cmd.files)?
    };

    let written = context.persist()?;
    reporter::success(&format!(
        "Imported {} key(s) across {} locale(s)",
        context.store.len(),
        context.store.supported_locales().len()
    ));
    reporter::note(&format!(
        "wrote {} file(s) under {}",
        written.len(),
        context.messages_root.display()
    ));
    Ok(CommandResult::with_issues(issues))
}

fn import_excel(context: &mut EditorContext, workbook: &Path) -> Result<usize> {
    let bytes = fs::read(workbook)
        .with_context(|| format!("Failed to read workbook: {}", workbook.display()))?;
    let (locales, table) = from_workbook_bytes(&bytes, &workbook.to_string_lossy())?;
    if table.is_empty() {
        return Err(AppError::file(workbook.to_string_lossy(), "workbook has no data rows").into());
    }
    info!(keys = table.len(), locales = locales.len(), "imported workbook");
    context.store.import_all(locales, table);
    Ok(0)
}

fn import_archive(context: &mut EditorContext, archive: &Path) -> Result<usize> {
    let bytes = fs::read(archive)
        .with_context(|| format!("Failed to read archive: {}", archive.display()))?;
    let entries = read_archive_entries(&bytes, &archive.to_string_lossy())?;
    load_parsed(context, &entries, &archive.to_string_lossy())
}

fn import_files(context: &mut EditorContext, files: &[PathBuf]) -> Result<usize> {
    if files.is_empty() {
        anyhow::bail!("Nothing to import: pass locale files, --excel, or --archive");
    }

    let mut named = Vec::new();
    let mut unreadable = 0usize;
    for path in files {
        match fs::read_to_string(path) {
            Ok(content) => named.push((path.to_string_lossy().to_string(), content)),
            Err(err) => {
                reporter::warning(&format!("{}: unreadable file: {}", path.display(), err));
                unreadable += 1;
            }
        }
    }

    let issues = load_parsed(context, &named, "import")?;
    Ok(issues + unreadable)
}

fn load_parsed(
    context: &mut EditorContext,
    files: &[(String, String)],
    source: &str,
) -> Result<usize> {
    let outcome = parse_locale_files(files);
    reporter::print_parse_warnings(&outcome.warnings);

    if outcome.is_empty() {
        return Err(AppError::file(source, "no locale files could be parsed").into());
    }

    let table = merge(&outcome.locale_major, &outcome.locales);
    context.store.import_all(outcome.locales, table);
    Ok(outcome.warnings.len())
}
