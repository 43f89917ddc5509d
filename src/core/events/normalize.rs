use serde_json::Value;

use super::{
    MergeRecord, PullRequestRecord, PushRecord, StoredEvent, WorkflowRunRecord, utc_timestamp,
};

/// Map a raw payload to the records to persist. The list is empty for event
/// types the pipeline does not store (ping included), holds one record for
/// push/workflow_run, and two for a pull request that was closed merged:
/// the pull_request record first, its derived merge record second.
///
/// Lookups never fail: a missing nested key becomes null in the record. The
/// timestamp is taken at normalization time, not from the payload; only the
/// workflow run start/update stamps come from the payload itself.
pub fn normalize(payload: &Value, event_type: &str) -> Vec<StoredEvent> {
    match event_type {
        "push" => vec![StoredEvent::Push(PushRecord {
            timestamp: utc_timestamp(),
            git_ref: str_at(payload, "/ref"),
            after: str_at(payload, "/after"),
            repository: str_at(payload, "/repository/full_name"),
            pusher: str_at(payload, "/pusher/name"),
            sender: str_at(payload, "/sender/login"),
        })],
        "pull_request" => {
            let mut records = vec![StoredEvent::PullRequest(PullRequestRecord {
                timestamp: utc_timestamp(),
                action: str_at(payload, "/action"),
                pull_request_id: int_at(payload, "/pull_request/id"),
                title: str_at(payload, "/pull_request/title"),
                from_branch: str_at(payload, "/pull_request/head/ref"),
                to_branch: str_at(payload, "/pull_request/base/ref"),
                author: str_at(payload, "/sender/login"),
                repository: str_at(payload, "/repository/full_name"),
                merged: bool_at(payload, "/pull_request/merged"),
            })];
            if str_at(payload, "/action").as_deref() == Some("closed")
                && bool_at(payload, "/pull_request/merged")
            {
                records.push(StoredEvent::Merge(MergeRecord {
                    timestamp: utc_timestamp(),
                    pull_request_id: int_at(payload, "/pull_request/id"),
                    from_branch: str_at(payload, "/pull_request/head/ref"),
                    to_branch: str_at(payload, "/pull_request/base/ref"),
                    author: str_at(payload, "/sender/login"),
                    repository: str_at(payload, "/repository/full_name"),
                    merge_commit_sha: str_at(payload, "/pull_request/merge_commit_sha"),
                }));
            }
            records
        }
        "workflow_run" => vec![StoredEvent::WorkflowRun(WorkflowRunRecord {
            timestamp: utc_timestamp(),
            workflow_id: int_at(payload, "/workflow_run/id"),
            workflow_name: str_at(payload, "/workflow_run/name"),
            status: str_at(payload, "/workflow_run/status"),
            conclusion: str_at(payload, "/workflow_run/conclusion")
                .unwrap_or_else(|| "unknown".to_string()),
            actor: str_at(payload, "/workflow_run/actor/login"),
            repository: str_at(payload, "/repository/full_name"),
            head_branch: str_at(payload, "/workflow_run/head_branch"),
            head_sha: str_at(payload, "/workflow_run/head_sha"),
            run_attempt: int_at(payload, "/workflow_run/run_attempt").unwrap_or(1),
            run_number: int_at(payload, "/workflow_run/run_number"),
            run_started_at: str_at(payload, "/workflow_run/created_at"),
            run_updated_at: str_at(payload, "/workflow_run/updated_at"),
        })],
        _ => Vec::new(),
    }
}

fn str_at(payload: &Value, pointer: &str) -> Option<String> {
    payload
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn int_at(payload: &Value, pointer: &str) -> Option<i64> {
    payload.pointer(pointer).and_then(Value::as_i64)
}

fn bool_at(payload: &Value, pointer: &str) -> bool {
    payload
        .pointer(pointer)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
