//! Excel workbook export and import.
//!
//! The workbook has a single sheet named `data` with a header row of
//! `key, <locale1>, <locale2>, …` and one data row per translation key.
//! Import is the inverse: the header row defines the supported locales and
//! the `key` column is distinguished.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::core::record::{LocaleCode, LocalizationRecord, ResourceTable};
use crate::error::{AppError, Result};

/// Sheet name used for both export and import.
const SHEET_NAME: &str = "data";

/// Default download filename.
pub const DEFAULT_WORKBOOK_NAME: &str = "localizations.xlsx";

/// Serialize the table into workbook bytes.
///
/// Column order is `key` followed by the supported locales in order; rows
/// are in display (key) order. An empty table is a Validation error rather
/// than an empty download.
pub fn to_workbook_bytes(table: &ResourceTable, supported: &[LocaleCode]) -> Result<Vec<u8>> {
    if table.is_empty() {
        return Err(AppError::validation(
            "nothing to export: the localization table is empty",
        ));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|err| AppError::Unknown(err.to_string()))?;

    worksheet
        .write_string(0, 0, "key")
        .map_err(|err| AppError::Unknown(err.to_string()))?;
    for (col, locale) in supported.iter().enumerate() {
        worksheet
            .write_string(0, col as u16 + 1, locale)
            .map_err(|err| AppError::Unknown(err.to_string()))?;
    }

    for (row, record) in table.values().enumerate() {
        let row = row as u32 + 1;
        worksheet
            .write_string(row, 0, &record.key)
            .map_err(|err| AppError::Unknown(err.to_string()))?;
        for (col, locale) in supported.iter().enumerate() {
            worksheet
                .write_string(row, col as u16 + 1, record.value(locale))
                .map_err(|err| AppError::Unknown(err.to_string()))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|err| AppError::Unknown(format!("failed to serialize workbook: {}", err)))
}

/// Parse workbook bytes back into `(supported locales, table)`.
///
/// Reads the first sheet. The header row must contain a `key` column; every
/// other header cell names a locale. Rows with an empty key cell are
/// skipped.
pub fn from_workbook_bytes(bytes: &[u8], source: &str) -> Result<(Vec<LocaleCode>, ResourceTable)> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|err| AppError::file(source, format!("not a readable workbook: {}", err)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::file(source, "workbook has no sheets"))?
        .map_err(|err| AppError::file(source, format!("unreadable sheet: {}", err)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| AppError::file(source, "workbook sheet is empty"))?;

    let headers: Vec<String> = header.iter().map(cell_text).collect();
    let key_column = headers
        .iter()
        .position(|name| name == "key")
        .ok_or_else(|| AppError::file(source, "header row has no \"key\" column"))?;

    let locales: Vec<(usize, LocaleCode)> = headers
        .iter()
        .enumerate()
        .filter(|(index, name)| *index != key_column && !name.is_empty())
        .map(|(index, name)| (index, name.clone()))
        .collect();
    let supported: Vec<LocaleCode> = locales.iter().map(|(_, locale)| locale.clone()).collect();

    let mut table = ResourceTable::new();
    for row in rows {
        let key = row.get(key_column).map(cell_text).unwrap_or_default();
        if key.is_empty() {
            continue;
        }
        let mut record = LocalizationRecord::empty(key.clone(), &supported);
        for (index, locale) in &locales {
            if let Some(cell) = row.get(*index) {
                record.values.insert(locale.clone(), cell_text(cell));
            }
        }
        table.insert(key, record);
    }

    Ok((supported, table))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
