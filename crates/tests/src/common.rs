use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use httpmock::MockServer;
use serde_json::Value;
use server::state::AppState;
use server::upstream::ParcelServiceClient;
use shared_types::{ContactDetails, CreateParcelRequest};
use tower::ServiceExt;

/// An address nothing listens on, for unreachable-service cases.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// Client pointed at the mock parcel service.
pub fn upstream_client(upstream: &MockServer) -> ParcelServiceClient {
    ParcelServiceClient::new(&upstream.base_url(), None).unwrap()
}

/// Build the app's HTTP router against a mock parcel service.
/// The returned `MockServer` must outlive the router.
pub async fn test_app() -> (Router, MockServer) {
    let upstream = MockServer::start_async().await;
    let router = server::openapi::api_router(AppState::new(upstream_client(&upstream)));
    (router, upstream)
}

/// Build the app's HTTP router against a parcel service at `base_url`.
pub fn test_app_at(base_url: &str) -> Router {
    server::openapi::api_router(AppState::new(ParcelServiceClient::new(base_url, None).unwrap()))
}

/// A complete, valid create request.
pub fn sample_request() -> CreateParcelRequest {
    CreateParcelRequest {
        sender: ContactDetails {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            address: "1 Analytical Way".into(),
        },
        recipient: ContactDetails {
            name: "Charles Babbage".into(),
            email: "charles@example.com".into(),
            phone: "555-0199".into(),
            address: "2 Difference St".into(),
        },
        weight: 2.5,
        description: "Punched cards".into(),
    }
}

/// The JSON the parcel service should receive for `sample_request()`.
pub fn sample_request_json() -> Value {
    serde_json::json!({
        "sender": {
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "address": "1 Analytical Way"
        },
        "recipient": {
            "name": "Charles Babbage",
            "email": "charles@example.com",
            "phone": "555-0199",
            "address": "2 Difference St"
        },
        "weight": 2.5,
        "description": "Punched cards"
    })
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request and parse the response body as JSON (Null when empty or not JSON).
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
