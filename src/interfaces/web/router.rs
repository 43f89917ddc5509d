use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, header},
    middleware,
    middleware::Next,
    routing::{get, post},
};

use super::AppState;
use super::handlers::{events, receiver, testing};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", get(events::health_endpoint))
        .route("/webhook/", get(events::health_endpoint))
        .route("/webhook/receiver", post(receiver::receiver_endpoint))
        .route("/webhook/events", get(events::get_events_endpoint))
        .route("/webhook/test/push", get(testing::test_push_endpoint))
        .route(
            "/webhook/test/pull-request",
            get(testing::test_pull_request_endpoint),
        )
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

async fn security_headers(req: Request<Body>, next: Next) -> axum::response::Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    response
}
