//! Push: the messages root → one atomic commit on the configured Azure
//! DevOps repository.
//!
//! The latest commit id is re-read immediately before committing; if the
//! branch moved in between, the server rejects the push and the rejection
//! is surfaced as-is. The local tree and store are never modified.

use anyhow::Result;

use super::{CommandResult, context::EditorContext, pull::require_remote};
use crate::cli::args::PushCommand;
use crate::remote::{DevopsClient, RemoteSync};
use crate::reporter;

pub fn push(cmd: PushCommand) -> Result<CommandResult> {
    let context = EditorContext::load(&cmd.common)?;
    context.require_loaded()?;
    reporter::print_parse_warnings(&context.warnings);

    let remote = require_remote(&context.config.remote, true, true)?;
    let client = DevopsClient::new(&remote.url, cmd.pat.clone())?;
    let sync = RemoteSync::new(
        client,
        remote.project.clone(),
        remote.repository.clone(),
        remote.branch.clone(),
        context.config.project_type,
        context.config.locale_glob(),
    );

    let outcome = sync.push(context.store.table(), context.store.supported_locales())?;
    reporter::success(&format!(
        "Pushed {} locale file(s) in one commit (was at {})",
        outcome.files, outcome.old_object_id
    ));
    reporter::note("if pipelines are set up, a new version will build from this commit");
    Ok(CommandResult::with_issues(context.warnings.len()))
}
