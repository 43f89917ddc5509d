use anyhow::Result;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::error;

use super::super::AppState;
use crate::core::events::utc_timestamp;
use crate::core::store::EventFilter;

const DEFAULT_QUERY_LIMIT: usize = 10;

pub async fn health_endpoint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "timestamp": utc_timestamp(),
        })),
    )
}

#[derive(Deserialize)]
pub(crate) struct EventsQuery {
    #[serde(rename = "type")]
    event_type: Option<String>,
    status: Option<String>,
    limit: Option<String>,
}

pub async fn get_events_endpoint(
    State(state): State<AppState>,
    Query(params): Query<EventsQuery>,
) -> (StatusCode, Json<Value>) {
    match fetch_events(&state, &params).await {
        Ok(events) => (
            StatusCode::OK,
            Json(json!({
                "count": events.len(),
                "events": events,
            })),
        ),
        Err(e) => {
            error!("Error retrieving events: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to retrieve events" })),
            )
        }
    }
}

async fn fetch_events(state: &AppState, params: &EventsQuery) -> Result<Vec<Value>> {
    let limit = match &params.limit {
        Some(raw) => raw.parse()?,
        None => DEFAULT_QUERY_LIMIT,
    };

    let mut filter = EventFilter {
        event_type: params.event_type.clone(),
        status: None,
    };
    // The status filter is only meaningful on workflow_run queries.
    if params.event_type.as_deref() == Some("workflow_run") {
        filter.status = params.status.clone();
    }

    state.store.query_events(&filter, limit).await
}
