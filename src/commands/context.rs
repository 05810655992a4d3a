//! Shared command setup: configuration resolution and store loading.
//!
//! Configuration priority (highest to lowest):
//! 1. CLI arguments (e.g. `--project-type flutter`)
//! 2. `.lokalrc.json` config file
//! 3. Built-in defaults

use std::env;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::parse::scan_locale_dir;
use crate::core::{ParseWarning, ResourceStore, merge};
use crate::export::tree::write_locale_tree;

/// Everything a command needs: resolved config plus the loaded store.
pub struct EditorContext {
    pub config: Config,
    pub messages_root: PathBuf,
    pub store: ResourceStore,
    /// Warnings from loading the messages root (skipped files etc.).
    pub warnings: Vec<ParseWarning>,
}

impl EditorContext {
    /// Resolve config and load the store from the messages root.
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let mut context = Self::prepare(common)?;

        let outcome = scan_locale_dir(&context.messages_root).with_context(|| {
            format!(
                "Failed to load locale files from {}",
                context.messages_root.display()
            )
        })?;
        let table = merge(&outcome.locale_major, &outcome.locales);
        context.store.import_all(outcome.locales, table);
        context.warnings = outcome.warnings;
        Ok(context)
    }

    /// Resolve config with an empty store (import replaces it wholesale).
    pub fn prepare(common: &CommonArgs) -> Result<Self> {
        let current_dir = env::current_dir().context("Failed to resolve current directory")?;
        let mut config = load_config(&current_dir)?.config;

        if let Some(project_type) = &common.project_type {
            config.project_type = project_type.parse()?;
        }
        if let Some(messages_root) = &common.messages_root {
            config.messages_root = Some(messages_root.to_string_lossy().to_string());
        }

        let messages_root = config.messages_root();
        let mut store = ResourceStore::new();
        store.subscribe(|event| debug!(?event, "store change"));

        Ok(Self {
            config,
            messages_root,
            store,
            warnings: Vec::new(),
        })
    }

    /// Write the store back to the messages root as the per-locale tree.
    pub fn persist(&self) -> Result<Vec<PathBuf>> {
        let written = write_locale_tree(
            &self.messages_root,
            self.store.table(),
            self.store.supported_locales(),
            self.config.project_type,
        )?;
        debug!(files = written.len(), root = %self.messages_root.display(), "persisted locale tree");
        Ok(written)
    }

    /// Error out unless the messages root held at least one locale file.
    pub fn require_loaded(&self) -> Result<()> {
        if self.store.supported_locales().is_empty() {
            anyhow::bail!(
                "No locale files found under {} (run `lokal import` first, or pass --messages-root)",
                self.messages_root.display()
            );
        }
        Ok(())
    }
}
