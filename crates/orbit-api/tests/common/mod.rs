//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use orbit_notifications::domain::dispatch::Dispatcher;
use orbit_test_support::RecordingDeliveryClient;
use tower::ServiceExt;

use orbit_api::routes;
use orbit_api::state::AppState;

/// Build the full app router with a recording delivery client. Uses the
/// same route structure as `main.rs`. Returns the router along with the
/// client so tests can assert on observed calls.
pub fn build_test_app() -> (Router, Arc<RecordingDeliveryClient>) {
    let delivery = Arc::new(RecordingDeliveryClient::new());
    let dispatcher = Arc::new(Dispatcher::with_default_kinds());
    let app_state = AppState::new(delivery.clone(), dispatcher);

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/notifications", routes::notifications::router())
        .nest("/api/v1/accounts", routes::accounts::router())
        .with_state(app_state);

    (app, delivery)
}

/// Build the full app router around an arbitrary delivery client.
pub fn build_test_app_with_client(
    delivery: Arc<dyn orbit_core::delivery::DeliveryClient>,
) -> Router {
    let dispatcher = Arc::new(Dispatcher::with_default_kinds());
    let app_state = AppState::new(delivery, dispatcher);

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/notifications", routes::notifications::router())
        .nest("/api/v1/accounts", routes::accounts::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a raw (possibly malformed) body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
