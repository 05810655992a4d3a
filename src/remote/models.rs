//! Wire types for the Azure DevOps git REST API.
//!
//! Response bodies are list envelopes (`{"count": n, "value": [...]}`);
//! the push request mirrors the `pushes` endpoint's JSON shape, including
//! its numeric change/content type codes.

use serde::{Deserialize, Serialize};

/// Standard Azure DevOps list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub value: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub visibility: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureRepo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub remote_url: String,
}

/// One node of a repository file tree (blob or tree).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitItem {
    #[serde(default)]
    pub object_id: String,
    #[serde(default)]
    pub commit_id: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default)]
    pub git_object_type: String,
}

impl GitItem {
    pub fn is_blob(&self) -> bool {
        !self.is_folder && self.git_object_type != "tree"
    }
}

/// Edit of an existing file (`changeType` 2 in the REST contract).
const CHANGE_TYPE_EDIT: u8 = 2;
/// Raw text content (`contentType` 0 in the REST contract).
const CONTENT_TYPE_RAW: u8 = 0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushRequest {
    pub commits: Vec<CommitRequest>,
    pub ref_updates: Vec<RefUpdate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest {
    pub changes: Vec<Change>,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub change_type: u8,
    pub item: ChangeItem,
    pub new_content: NewContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeItem {
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub content: String,
    pub content_type: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefUpdate {
    pub name: String,
    pub old_object_id: String,
}

impl PushRequest {
    /// Build one atomic commit updating the given `(path, content)` pairs
    /// on `branch`, conditional on `old_object_id` still being the branch
    /// head (optimistic concurrency).
    pub fn update_files(
        branch: &str,
        old_object_id: &str,
        files: &[(String, String)],
        comment: &str,
    ) -> Self {
        let changes = files
            .iter()
            .map(|(path, content)| Change {
                change_type: CHANGE_TYPE_EDIT,
                item: ChangeItem { path: path.clone() },
                new_content: NewContent {
                    content: content.clone(),
                    content_type: CONTENT_TYPE_RAW,
                },
            })
            .collect();

        Self {
            commits: vec![CommitRequest {
                changes,
                comment: comment.to_string(),
            }],
            ref_updates: vec![RefUpdate {
                name: format!("refs/heads/{}", branch),
                old_object_id: old_object_id.to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_push_request_wire_shape() {
        let request = PushRequest::update_files(
            "main",
            "abc123",
            &[("/src/i18n/en.json".to_string(), "{}\n".to_string())],
            "Update locales for project using tool",
        );

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "commits": [{
                    "changes": [{
                        "changeType": 2,
                        "item": {"path": "/src/i18n/en.json"},
                        "newContent": {"content": "{}\n", "contentType": 0}
                    }],
                    "comment": "Update locales for project using tool"
                }],
                "refUpdates": [{
                    "name": "refs/heads/main",
                    "oldObjectId": "abc123"
                }]
            })
        );
    }

    #[test]
    fn test_list_envelope_decodes() {
        let body = json!({
            "count": 1,
            "value": [{"id": "p1", "name": "App", "state": "wellFormed"}]
        });
        let decoded: ListResponse<AzureProject> = serde_json::from_value(body).unwrap();
        assert_eq!(decoded.value.len(), 1);
        assert_eq!(decoded.value[0].name, "App");
    }

    #[test]
    fn test_git_item_blob_detection() {
        let blob: GitItem = serde_json::from_value(json!({
            "objectId": "o1",
            "path": "/src/i18n/en.json",
            "gitObjectType": "blob"
        }))
        .unwrap();
        assert!(blob.is_blob());

        let tree: GitItem = serde_json::from_value(json!({
            "path": "/src/i18n",
            "isFolder": true,
            "gitObjectType": "tree"
        }))
        .unwrap();
        assert!(!tree.is_blob());
    }
}
