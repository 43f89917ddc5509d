use anyhow::Result;
use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use serde_json::{Value, json};
use tracing::{error, info};

use super::super::AppState;
use super::error_response;
use crate::core::events::{self, utc_timestamp};

/// Ingest one webhook delivery: parse, resolve the event type, answer pings,
/// validate, normalize, persist.
pub async fn receiver_endpoint(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    match handle_delivery(&state, &headers, &body).await {
        Ok(response) => response,
        Err(e) => {
            error!("Unexpected error in webhook receiver: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
        }
    }
}

async fn handle_delivery(
    state: &AppState,
    headers: &HeaderMap,
    body: &str,
) -> Result<(StatusCode, Json<Value>)> {
    info!("Received webhook request");

    let payload: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Ok(error_response("No payload received")),
    };
    if payload.as_object().is_none_or(|map| map.is_empty()) {
        return Ok(error_response("No payload received"));
    }

    let event_type = headers
        .get("x-github-event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if event_type.is_empty() {
        return Ok(error_response("No event type specified in headers"));
    }

    info!("Processing {event_type} event from GitHub");

    // Pings are answered before validation ever runs.
    if event_type == "ping" {
        return Ok((
            StatusCode::OK,
            Json(json!({
                "message": "Webhook configured successfully",
                "zen": payload.get("zen").cloned().unwrap_or(Value::Null),
                "hook_id": payload.get("hook_id").cloned().unwrap_or(Value::Null),
            })),
        ));
    }

    let validation_errors = events::validate(&payload, event_type);
    if !validation_errors.is_empty() {
        return Ok(error_response(&format!(
            "Validation errors: {}",
            validation_errors.join(", ")
        )));
    }

    // Records are inserted one by one in the order produced; the derived merge
    // record shares no transaction with its pull_request record, so a failure
    // here can leave the earlier insert in place.
    for record in events::normalize(&payload, event_type) {
        if let Err(e) = state.store.insert_event(&record).await {
            error!("Error processing webhook data: {e}");
            return Ok(error_response(&format!("Error processing webhook: {e}")));
        }
        info!("Stored {} event", record.event_type());
    }

    Ok((
        StatusCode::OK,
        Json(json!({
            "message": format!("Successfully processed {event_type} event"),
            "status": "success",
            "timestamp": utc_timestamp(),
        })),
    ))
}
