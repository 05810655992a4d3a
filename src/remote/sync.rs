//! Mapping between the canonical table and a remote locale-file tree.
//!
//! Pull reads the repository file tree, picks out the locale files for the
//! project type, fetches each blob sequentially, and reuses the parser +
//! merger. Push renders one file per supported locale and submits a single
//! atomic commit conditional on the latest commit id, re-read immediately
//! beforehand. No remote state is cached between the two.

use glob::Pattern;
use tracing::{debug, info, warn};

use crate::config::ProjectType;
use crate::core::record::{LocaleCode, ResourceTable};
use crate::core::{ParseWarning, merge, parse_locale_files, split};
use crate::error::{AppError, Result};
use crate::export::tree::render_locale_json;
use crate::remote::client::DevopsClient;
use crate::remote::models::GitItem;

/// Commit message used for every push.
const PUSH_COMMENT: &str = "Update locales for project using tool";

/// One configured remote project binding.
pub struct RemoteSync {
    client: DevopsClient,
    project: String,
    repository: String,
    branch: String,
    project_type: ProjectType,
    locale_glob: String,
}

/// Result of a pull: everything needed to load the store, plus the
/// non-fatal problems encountered on the way.
#[derive(Debug)]
pub struct PullResult {
    pub locales: Vec<LocaleCode>,
    pub table: ResourceTable,
    pub warnings: Vec<ParseWarning>,
    /// Number of remote files that matched the locale-file filter.
    pub file_count: usize,
}

/// Result of a successful push.
#[derive(Debug)]
pub struct PushOutcome {
    /// Files contained in the commit (one per supported locale).
    pub files: usize,
    /// The commit id the push was conditioned on.
    pub old_object_id: String,
}

impl RemoteSync {
    pub fn new(
        client: DevopsClient,
        project: impl Into<String>,
        repository: impl Into<String>,
        branch: impl Into<String>,
        project_type: ProjectType,
        locale_glob: impl Into<String>,
    ) -> Self {
        Self {
            client,
            project: project.into(),
            repository: repository.into(),
            branch: branch.into(),
            project_type,
            locale_glob: locale_glob.into(),
        }
    }

    /// Fetch and parse the remote locale files.
    pub fn pull(&self) -> Result<PullResult> {
        let items = self.client.items(&self.project, &self.repository)?;
        let locale_items = filter_locale_items(&items, self.project_type, &self.locale_glob);
        info!(
            total = items.len(),
            matched = locale_items.len(),
            "scanned remote file tree"
        );

        if locale_items.is_empty() {
            return Err(AppError::validation(format!(
                "no locale files under {} in the remote repository",
                self.project_type.remote_path_prefix()
            )));
        }

        // Blobs are fetched one at a time; a failed fetch skips that file
        // with a warning, like an unreadable file in a local import.
        let mut files = Vec::new();
        let mut warnings = Vec::new();
        for item in &locale_items {
            debug!(path = %item.path, "fetching blob");
            match self
                .client
                .read_blob(&self.project, &self.repository, &item.object_id)
            {
                Ok(content) => files.push((item.path.clone(), content)),
                Err(err) => {
                    warn!(path = %item.path, %err, "skipping unreadable remote file");
                    warnings.push(ParseWarning {
                        file: item.path.clone(),
                        message: format!("unreadable remote file: {}", err),
                    });
                }
            }
        }

        let mut outcome = parse_locale_files(&files);
        outcome.warnings.extend(warnings);
        let table = merge(&outcome.locale_major, &outcome.locales);
        Ok(PullResult {
            locales: outcome.locales,
            table,
            warnings: outcome.warnings,
            file_count: locale_items.len(),
        })
    }

    /// Render the table and submit it as one commit.
    ///
    /// The latest commit id is re-read immediately before the push; if the
    /// branch moves between the read and the write, the server rejects the
    /// push and the rejection is surfaced unchanged.
    pub fn push(&self, table: &ResourceTable, supported: &[LocaleCode]) -> Result<PushOutcome> {
        if table.is_empty() {
            return Err(AppError::validation(
                "nothing to push: the localization table is empty",
            ));
        }

        let files: Vec<(String, String)> = split(table, supported)
            .iter()
            .map(|(locale, entries)| {
                (
                    self.project_type.remote_file_path(locale),
                    render_locale_json(entries),
                )
            })
            .collect();

        let old_object_id = self.client.latest_commit_id(&self.repository)?;
        self.client.push_update(
            &self.repository,
            &self.branch,
            &old_object_id,
            &files,
            PUSH_COMMENT,
        )?;

        info!(files = files.len(), commit = %old_object_id, "pushed locale files");
        Ok(PushOutcome {
            files: files.len(),
            old_object_id,
        })
    }
}

/// Pick the blobs that look like locale files for the project type: under
/// the project-type path prefix, matching the locale-file glob, with a
/// locale extractable from the filename.
fn filter_locale_items(
    items: &[GitItem],
    project_type: ProjectType,
    locale_glob: &str,
) -> Vec<GitItem> {
    let prefix = project_type.remote_path_prefix();
    let pattern = Pattern::new(locale_glob).ok();

    items
        .iter()
        .filter(|item| item.is_blob() && item.path.starts_with(prefix))
        .filter(|item| {
            let relative = &item.path[prefix.len()..];
            pattern
                .as_ref()
                .map(|glob| glob.matches(relative))
                .unwrap_or(true)
        })
        .filter(|item| crate::core::locale_from_filename(&item.path).is_some())
        .cloned()
        .collect()
}
