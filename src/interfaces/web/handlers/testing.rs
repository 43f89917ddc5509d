use anyhow::{Context, Result};
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::error;

use super::super::AppState;
use crate::core::events;

/// Smoke-test endpoint: build a synthetic push payload and run it through the
/// normal normalize-then-insert pipeline.
pub async fn test_push_endpoint(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    let payload = json!({
        "ref": "refs/heads/main",
        "after": format!("test-commit-{stamp}"),
        "repository": {"full_name": "hooksink/smoke-test"},
        "pusher": {"name": "test-user"},
        "sender": {"login": "test-user"},
    });

    match store_synthetic(&state, &payload, "push").await {
        Ok(doc) => (
            StatusCode::OK,
            Json(json!({
                "message": "Test push event created successfully",
                "event_data": doc,
            })),
        ),
        Err(e) => synthetic_failure(e),
    }
}

pub async fn test_pull_request_endpoint(
    State(state): State<AppState>,
) -> (StatusCode, Json<Value>) {
    let payload = json!({
        "action": "opened",
        "pull_request": {
            "id": chrono::Utc::now().timestamp(),
            "title": "Smoke test pull request",
            "head": {"ref": "feature"},
            "base": {"ref": "main"},
            "merged": false,
        },
        "repository": {"full_name": "hooksink/smoke-test"},
        "sender": {"login": "test-user"},
    });

    match store_synthetic(&state, &payload, "pull_request").await {
        Ok(doc) => (
            StatusCode::OK,
            Json(json!({
                "message": "Test pull request event created successfully",
                "event_data": doc,
            })),
        ),
        Err(e) => synthetic_failure(e),
    }
}

async fn store_synthetic(state: &AppState, payload: &Value, event_type: &str) -> Result<Value> {
    let records = events::normalize(payload, event_type);
    let record = records
        .first()
        .context("synthetic payload produced no record")?;
    state.store.insert_event(record).await
}

fn synthetic_failure(e: anyhow::Error) -> (StatusCode, Json<Value>) {
    error!("Error creating test event: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
}
