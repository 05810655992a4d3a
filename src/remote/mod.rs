//! Remote sync against an Azure DevOps git repository.
//!
//! - [`models`]: REST wire types (list envelopes, push payload)
//! - [`client`]: blocking HTTP client, api-version pinned
//! - [`sync`]: pull/push mapping between the table and the file tree

pub mod client;
pub mod models;
pub mod sync;

pub use client::DevopsClient;
pub use models::{AzureProject, AzureRepo, GitItem, PushRequest};
pub use sync::{PullResult, PushOutcome, RemoteSync};
