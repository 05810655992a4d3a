//! Key mutations: add an empty-filled record, or delete one.
//!
//! Both directions are idempotent: re-adding an existing key and deleting
//! an absent key are no-ops that get reported but do not fail the command.

use anyhow::Result;

use super::{CommandResult, context::EditorContext};
use crate::cli::args::{KeyAction, KeyCommand};
use crate::error::AppError;
use crate::reporter;

pub fn key(cmd: KeyCommand) -> Result<CommandResult> {
    let mut context = EditorContext::load(&cmd.common)?;
    context.require_loaded()?;

    match &cmd.action {
        KeyAction::Add { key } => {
            if key.trim().is_empty() {
                return Err(AppError::validation("key must not be empty").into());
            }
            if context.store.add_key(key) {
                context.persist()?;
                reporter::success(&format!("Added key \"{}\"", key));
            } else {
                reporter::warning(&format!("key \"{}\" already exists, nothing changed", key));
            }
        }
        KeyAction::Delete { key } => {
            if context.store.delete_key(key) {
                context.persist()?;
                reporter::success(&format!("Deleted key \"{}\"", key));
            } else {
                reporter::warning(&format!("key \"{}\" does not exist, nothing changed", key));
            }
        }
    }

    Ok(CommandResult::clean())
}
