//! AI batch translation of untranslated cells.
//!
//! Records are processed strictly sequentially (the translator enforces an
//! inter-call delay); per-record failures keep the original values and the
//! command completes with exit status 1.

use anyhow::Result;

use super::{CommandResult, context::EditorContext};
use crate::ai::Translator;
use crate::cli::args::TranslateCommand;
use crate::core::record::LocalizationRecord;
use crate::error::AppError;
use crate::reporter;

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let mut context = EditorContext::load(&cmd.common)?;
    let translator = Translator::new(&context.config.ai, cmd.api_key.clone())?;

    if cmd.check_config {
        return Ok(check_config(&context, &translator));
    }

    context.require_loaded()?;

    let pending: Vec<LocalizationRecord> = match &cmd.key {
        Some(key) => {
            let record = context.store.table().get(key).ok_or_else(|| {
                AppError::validation(format!("key \"{}\" does not exist", key))
            })?;
            vec![record.clone()]
        }
        None => context
            .store
            .untranslated()
            .into_iter()
            .cloned()
            .collect(),
    };

    if pending.iter().all(|record| record.is_complete()) {
        reporter::success("Nothing to translate: no untranslated cells");
        return Ok(CommandResult::clean());
    }

    reporter::note(&format!(
        "requesting translations for {} record(s), one at a time",
        pending.len()
    ));

    let outcome = translator.batch(&pending);
    for (key, err) in &outcome.failures {
        reporter::warning(&format!("{}: {}", key, err.user_message()));
    }

    // Apply only cells that were empty before; existing translations are
    // never overwritten by a suggestion.
    let mut filled = 0usize;
    for (before, after) in pending.iter().zip(&outcome.records) {
        for locale in before.untranslated_locales() {
            let suggestion = after.value(locale);
            if !suggestion.is_empty() {
                context.store.set_cell(&before.key, locale, suggestion);
                filled += 1;
            }
        }
    }
    context.persist()?;

    reporter::success(&format!(
        "Filled {} cell(s); {} record(s) failed",
        filled,
        outcome.failures.len()
    ));
    Ok(CommandResult::with_issues(outcome.failures.len()))
}

fn check_config(context: &EditorContext, translator: &Translator) -> CommandResult {
    if translator.validate() {
        reporter::success(&format!(
            "AI endpoint {} answered with model {}",
            context.config.ai.base_url, context.config.ai.model
        ));
        CommandResult::clean()
    } else {
        reporter::failure("AI endpoint did not answer; check baseUrl, model, and the API key");
        CommandResult::with_issues(1)
    }
}
