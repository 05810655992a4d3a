//! HTTP client for the Azure DevOps git REST API.
//!
//! Every request carries the pinned `api-version` query parameter and, when
//! configured, a personal access token as HTTP Basic with an empty
//! username. Timeouts are the client default (30 s); there is no retry
//! layer.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::remote::models::{AzureProject, AzureRepo, GitItem, ListResponse, PushRequest};

/// Pinned REST API version, sent on every request.
const API_VERSION: &str = "6.0-preview";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one Azure DevOps collection (e.g.
/// `https://devops.example.com/DefaultCollection`).
pub struct DevopsClient {
    client: Client,
    base_url: String,
    pat: Option<String>,
}

impl DevopsClient {
    /// Create a client for a collection URL, with an optional personal
    /// access token.
    pub fn new(base_url: impl Into<String>, pat: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| AppError::Network(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            pat,
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.decorate(self.client.get(format!("{}{}", self.base_url, path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.decorate(self.client.post(format!("{}{}", self.base_url, path)))
    }

    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.query(&[("api-version", API_VERSION)]);
        match &self.pat {
            // PATs use Basic auth with an empty username.
            Some(pat) => builder.basic_auth("", Some(pat)),
            None => builder,
        }
    }

    /// List the collection's projects.
    pub fn projects(&self) -> Result<Vec<AzureProject>> {
        let response = self.get("/_apis/projects").send()?;
        Ok(decode::<ListResponse<AzureProject>>(response)?.value)
    }

    /// List a project's git repositories.
    pub fn repositories(&self, project: &str) -> Result<Vec<AzureRepo>> {
        let response = self
            .get(&format!("/{}/_apis/git/repositories", project))
            .send()?;
        Ok(decode::<ListResponse<AzureRepo>>(response)?.value)
    }

    /// Full recursive file tree of a repository.
    pub fn items(&self, project: &str, repository: &str) -> Result<Vec<GitItem>> {
        let response = self
            .get(&format!(
                "/{}/_apis/git/repositories/{}/items",
                project, repository
            ))
            .query(&[("recursionLevel", "Full")])
            .send()?;
        Ok(decode::<ListResponse<GitItem>>(response)?.value)
    }

    /// Raw content of one blob.
    pub fn read_blob(&self, project: &str, repository: &str, object_id: &str) -> Result<String> {
        let response = self
            .get(&format!(
                "/{}/_apis/git/repositories/{}/blobs/{}",
                project, repository, object_id
            ))
            .send()?;
        let response = check_status(response)?;
        response.text().map_err(AppError::from)
    }

    /// The commit id at the tip of the repository, read from the root item.
    ///
    /// Queried immediately before every push to keep the optimistic-
    /// concurrency window as small as possible.
    pub fn latest_commit_id(&self, repository: &str) -> Result<String> {
        let response = self
            .get(&format!("/_apis/git/repositories/{}/items", repository))
            .send()?;
        let items = decode::<ListResponse<GitItem>>(response)?.value;
        items
            .first()
            .map(|item| item.commit_id.clone())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::api(None, "repository has no reachable commit"))
    }

    /// Submit one atomic push. A stale `old_object_id` is rejected by the
    /// server and surfaced as an Api error; there is no retry or rebase.
    pub fn push_update(
        &self,
        repository: &str,
        branch: &str,
        old_object_id: &str,
        files: &[(String, String)],
        comment: &str,
    ) -> Result<()> {
        let request = PushRequest::update_files(branch, old_object_id, files, comment);
        debug!(
            repository,
            branch,
            files = files.len(),
            "submitting push to Azure DevOps"
        );

        let response = self
            .post(&format!("/_apis/git/repositories/{}/pushes", repository))
            .json(&request)
            .send()?;
        check_status(response)?;
        Ok(())
    }
}

impl std::fmt::Debug for DevopsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevopsClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.pat.is_some())
            .finish()
    }
}

/// Map a non-success response to the error taxonomy.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = summarize_body(&body, status);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Authentication(message)),
        StatusCode::CONFLICT => Err(AppError::api(
            Some(status.as_u16()),
            format!("push rejected (stale commit id?): {}", message),
        )),
        _ => Err(AppError::api(Some(status.as_u16()), message)),
    }
}

/// Azure DevOps error bodies carry a `message` field; fall back to the
/// status line for anything else.
fn summarize_body(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("server answered {}", status))
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response)?;
    let body = response.text()?;
    serde_json::from_str(&body)
        .map_err(|err| AppError::api(None, format!("malformed response: {}", err)))
}
