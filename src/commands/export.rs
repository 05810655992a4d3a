//! Export: the store → an Excel workbook or ZIP archive download.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{CommandResult, context::EditorContext};
use crate::cli::args::{ExportCommand, ExportFormat};
use crate::export::{
    DEFAULT_ARCHIVE_NAME, DEFAULT_WORKBOOK_NAME, to_archive_bytes, to_workbook_bytes,
};
use crate::reporter;

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let context = EditorContext::load(&cmd.common)?;
    context.require_loaded()?;

    // The exporters reject an empty table with a Validation error before
    // any file is produced.
    let (bytes, default_name) = match cmd.format {
        ExportFormat::Xlsx => (
            to_workbook_bytes(context.store.table(), context.store.supported_locales())?,
            DEFAULT_WORKBOOK_NAME,
        ),
        ExportFormat::Zip => (
            to_archive_bytes(context.store.table(), context.store.supported_locales())?,
            DEFAULT_ARCHIVE_NAME,
        ),
    };

    let out = cmd.out.unwrap_or_else(|| PathBuf::from(default_name));
    fs::write(&out, &bytes).with_context(|| format!("Failed to write {}", out.display()))?;

    reporter::success(&format!(
        "Exported {} key(s) in {} locale(s) to {}",
        context.store.len(),
        context.store.supported_locales().len(),
        out.display()
    ));
    Ok(CommandResult::clean())
}
