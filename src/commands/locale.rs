//! Locale-list mutations: append a column and back-fill every record.

use anyhow::Result;

use super::{CommandResult, context::EditorContext};
use crate::cli::args::{LocaleAction, LocaleCommand};
use crate::error::AppError;
use crate::reporter;

pub fn locale(cmd: LocaleCommand) -> Result<CommandResult> {
    let mut context = EditorContext::load(&cmd.common)?;
    context.require_loaded()?;

    match &cmd.action {
        LocaleAction::Add { code } => {
            if code.trim().is_empty() {
                return Err(AppError::validation("locale code must not be empty").into());
            }
            if context.store.add_locale(code) {
                context.persist()?;
                reporter::success(&format!(
                    "Added locale \"{}\" ({} record(s) back-filled)",
                    code,
                    context.store.len()
                ));
            } else {
                reporter::warning(&format!(
                    "locale \"{}\" is already supported, nothing changed",
                    code
                ));
            }
        }
    }

    Ok(CommandResult::clean())
}
