//! Table summary: locales, key counts, untranslated cells, namespaces.

use anyhow::Result;
use colored::Colorize;

use super::{CommandResult, context::EditorContext};
use crate::cli::args::StatusCommand;
use crate::core::record::LocalizationRecord;
use crate::reporter;

pub fn status(cmd: StatusCommand) -> Result<CommandResult> {
    let context = EditorContext::load(&cmd.common)?;
    context.require_loaded()?;
    reporter::print_parse_warnings(&context.warnings);

    let records: Vec<&LocalizationRecord> = context
        .store
        .table()
        .values()
        .filter(|record| match &cmd.filter {
            Some(prefix) => record.key.starts_with(prefix.as_str()),
            None => true,
        })
        .collect();

    reporter::detail("project", &context.config.project_type.to_string());
    reporter::detail("messages", &context.messages_root.display().to_string());
    reporter::detail(
        "locales",
        &context.store.supported_locales().join(", "),
    );
    match &cmd.filter {
        Some(prefix) => reporter::detail(
            "keys",
            &format!("{} (filtered by \"{}\")", records.len(), prefix),
        ),
        None => reporter::detail("keys", &records.len().to_string()),
    }
    reporter::detail("namespaces", &context.store.namespaces().join(", "));

    // Untranslated cells per locale, over the (possibly filtered) records.
    let mut incomplete = 0usize;
    for locale in context.store.supported_locales() {
        let missing = records
            .iter()
            .filter(|record| record.value(locale).is_empty())
            .count();
        if missing > 0 {
            incomplete += missing;
            println!(
                "  {:<12} {} untranslated",
                format!("{}:", locale).yellow(),
                missing
            );
        }
    }

    if incomplete == 0 {
        reporter::success("All keys are translated in every locale");
    } else {
        reporter::note(&format!(
            "{} untranslated cell(s) total; run `lokal translate` to fill them",
            incomplete
        ));
    }

    Ok(CommandResult::with_issues(context.warnings.len()))
}
