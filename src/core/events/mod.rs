mod normalize;
mod validate;

pub use normalize::normalize;
pub use validate::validate;

use serde::{Deserialize, Serialize};

/// Second-precision UTC rendering shared by records and response bodies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub fn utc_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A normalized activity record, ready for storage. The discriminator is
/// serialized as `event_type` alongside the variant's own fields, so the
/// persisted document is a single flat mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum StoredEvent {
    Push(PushRecord),
    PullRequest(PullRequestRecord),
    Merge(MergeRecord),
    WorkflowRun(WorkflowRunRecord),
}

impl StoredEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            StoredEvent::Push(_) => "push",
            StoredEvent::PullRequest(_) => "pull_request",
            StoredEvent::Merge(_) => "merge",
            StoredEvent::WorkflowRun(_) => "workflow_run",
        }
    }

    /// Workflow status, denormalized into the store for equality filtering.
    pub fn status(&self) -> Option<&str> {
        match self {
            StoredEvent::WorkflowRun(record) => record.status.as_deref(),
            _ => None,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            StoredEvent::Push(record) => &record.timestamp,
            StoredEvent::PullRequest(record) => &record.timestamp,
            StoredEvent::Merge(record) => &record.timestamp,
            StoredEvent::WorkflowRun(record) => &record.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushRecord {
    pub timestamp: String,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub after: Option<String>,
    pub repository: Option<String>,
    pub pusher: Option<String>,
    pub sender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestRecord {
    pub timestamp: String,
    pub action: Option<String>,
    pub pull_request_id: Option<i64>,
    pub title: Option<String>,
    pub from_branch: Option<String>,
    pub to_branch: Option<String>,
    pub author: Option<String>,
    pub repository: Option<String>,
    pub merged: bool,
}

/// Derived from a pull_request record when the pull request was closed merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRecord {
    pub timestamp: String,
    pub pull_request_id: Option<i64>,
    pub from_branch: Option<String>,
    pub to_branch: Option<String>,
    pub author: Option<String>,
    pub repository: Option<String>,
    pub merge_commit_sha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRunRecord {
    pub timestamp: String,
    pub workflow_id: Option<i64>,
    pub workflow_name: Option<String>,
    pub status: Option<String>,
    pub conclusion: String,
    pub actor: Option<String>,
    pub repository: Option<String>,
    pub head_branch: Option<String>,
    pub head_sha: Option<String>,
    pub run_attempt: i64,
    pub run_number: Option<i64>,
    pub run_started_at: Option<String>,
    pub run_updated_at: Option<String>,
}
