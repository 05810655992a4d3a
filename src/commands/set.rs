//! Single-cell edit: `lokal set <key> <locale> <value>`.

use anyhow::Result;

use super::{CommandResult, context::EditorContext};
use crate::cli::args::SetCommand;
use crate::error::AppError;
use crate::reporter;

pub fn set(cmd: SetCommand) -> Result<CommandResult> {
    let mut context = EditorContext::load(&cmd.common)?;
    context.require_loaded()?;

    if cmd.key.trim().is_empty() {
        return Err(AppError::validation("key must not be empty").into());
    }

    let new_key = !context.store.table().contains_key(&cmd.key);
    let new_locale = !context
        .store
        .supported_locales()
        .contains(&cmd.locale);

    context.store.set_cell(&cmd.key, &cmd.locale, &cmd.value);
    context.persist()?;

    reporter::success(&format!("Set {} [{}]", cmd.key, cmd.locale));
    if new_key {
        reporter::note("created a new key (other locales back-filled empty)");
    }
    if new_locale {
        reporter::note(&format!(
            "registered new locale \"{}\" (all records back-filled empty)",
            cmd.locale
        ));
    }
    Ok(CommandResult::clean())
}
