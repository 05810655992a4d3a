//! Lokal - localization resource editor for app projects
//!
//! Lokal is a CLI tool and library for editing software localization (i18n)
//! resources: importing translation files (JSON/ARB/Excel/ZIP), editing
//! per-locale strings, requesting AI-assisted translations, exporting to
//! Excel/ZIP, and round-tripping locale files to an Azure DevOps git
//! repository.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `config`: Configuration file loading and parsing
//! - `core`: Canonical resource model (parser, merger, store)
//! - `export`: Excel / ZIP / locale-file-tree exporters
//! - `remote`: Azure DevOps git sync adapter
//! - `ai`: AI translation suggestions
//! - `error`: The shared error taxonomy
//! - `reporter`: Terminal output formatting

pub mod ai;
pub mod cli;
pub(crate) mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod remote;
pub mod reporter;
