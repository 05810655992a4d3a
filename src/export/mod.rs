//! Exporters: the canonical table → downloadable/persistable formats.
//!
//! - [`tree`]: per-locale JSON/ARB file tree (persistence format)
//! - [`excel`]: single-sheet workbook, one row per key
//! - [`archive`]: ZIP of per-locale JSON files
//!
//! Exporters read the store through borrowed views and never alias its
//! internals; downloads (Excel, ZIP) reject an empty table with a
//! Validation error.

pub mod archive;
pub mod excel;
pub mod tree;

pub use archive::{DEFAULT_ARCHIVE_NAME, read_archive_entries, to_archive_bytes};
pub use excel::{DEFAULT_WORKBOOK_NAME, from_workbook_bytes, to_workbook_bytes};
pub use tree::{render_locale_files, render_locale_json, write_locale_tree};
