//! Pull: the configured Azure DevOps repository → the store → the messages
//! root. Also hosts the remote discovery helpers (`--list-projects`,
//! `--list-repos`).

use anyhow::Result;

use super::{CommandResult, context::EditorContext};
use crate::cli::args::PullCommand;
use crate::config::RemoteConfig;
use crate::error::AppError;
use crate::remote::{DevopsClient, RemoteSync};
use crate::reporter;

pub fn pull(cmd: PullCommand) -> Result<CommandResult> {
    let mut context = EditorContext::prepare(&cmd.common)?;
    let needs_project = !cmd.list_projects;
    let needs_repository = !cmd.list_projects && !cmd.list_repos;
    let remote = require_remote(&context.config.remote, needs_project, needs_repository)?;
    let client = DevopsClient::new(&remote.url, cmd.pat.clone())?;

    if cmd.list_projects {
        for project in client.projects()? {
            println!("{}  {}", project.id, project.name);
        }
        return Ok(CommandResult::clean());
    }

    if cmd.list_repos {
        for repo in client.repositories(&remote.project)? {
            println!("{}  {}", repo.id, repo.name);
        }
        return Ok(CommandResult::clean());
    }

    let sync = RemoteSync::new(
        client,
        remote.project.clone(),
        remote.repository.clone(),
        remote.branch.clone(),
        context.config.project_type,
        context.config.locale_glob(),
    );

    let result = sync.pull()?;
    reporter::print_parse_warnings(&result.warnings);
    let issues = result.warnings.len();

    context.store.import_all(result.locales, result.table);
    let written = context.persist()?;

    reporter::success(&format!(
        "Pulled {} remote file(s): {} key(s) across {} locale(s)",
        result.file_count,
        context.store.len(),
        context.store.supported_locales().len()
    ));
    reporter::note(&format!(
        "wrote {} file(s) under {}",
        written.len(),
        context.messages_root.display()
    ));
    Ok(CommandResult::with_issues(issues))
}

/// The collection URL is always required; project/repository only once we
/// go past the corresponding discovery step.
pub(crate) fn require_remote(
    remote: &RemoteConfig,
    needs_project: bool,
    needs_repository: bool,
) -> Result<&RemoteConfig> {
    if remote.url.is_empty() {
        return Err(AppError::validation(
            "remote.url is not configured (edit .lokalrc.json)",
        )
        .into());
    }
    if needs_project && remote.project.is_empty() {
        return Err(AppError::validation(
            "remote.project is not configured (try `lokal pull --list-projects`)",
        )
        .into());
    }
    if needs_repository && remote.repository.is_empty() {
        return Err(AppError::validation(
            "remote.repository is not configured (try `lokal pull --list-repos`)",
        )
        .into());
    }
    Ok(remote)
}
