pub(crate) mod events;
pub(crate) mod receiver;
pub(crate) mod testing;

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::error;

/// Client-input failures all take this shape: logged, then answered as a
/// structured 400 body.
pub(crate) fn error_response(message: &str) -> (StatusCode, Json<Value>) {
    error!("Error processing webhook: {message}");
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}
