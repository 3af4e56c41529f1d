//! HTTP surface tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use todoist_api::{
    config::Settings,
    server::{create_router, AppState},
};
use tower::ServiceExt;

fn settings_with_database(url: &str) -> Settings {
    let url = url.to_string();
    Settings::from_lookup(move |key| (key == "DATABASE_URL").then(|| url.clone()))
}

fn router_for(settings: Settings) -> Router {
    let state = AppState::new(Arc::new(settings)).unwrap();
    create_router(state)
}

fn memory_router() -> Router {
    router_for(settings_with_database("sqlite::memory:"))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_root_reports_project_name() {
    let response = memory_router().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Todoist API");
    assert_eq!(body["message"], "Welcome to Todoist API");
}

#[tokio::test]
async fn test_health_and_liveness() {
    let router = memory_router();

    let response = router.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["project_name"], "Todoist API");

    let response = router.oneshot(get("/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["alive"], true);
}

#[tokio::test]
async fn test_ready_with_reachable_database() {
    let response = memory_router().oneshot(get("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"]["database"], true);
}

#[tokio::test]
async fn test_ready_with_unusable_database_url() {
    // Accepted at load time, only rejected once the pool is used
    let router = router_for(settings_with_database("nosuchdb://localhost/db"));
    let response = router.oneshot(get("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["type"], "error");
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = memory_router().oneshot(get("/todos/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["type"], "not_found_error");
    assert!(body["error"]["message"].as_str().unwrap().contains("/todos/42"));
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = memory_router().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_rejects_other_origin() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = memory_router().oneshot(request).await.unwrap();

    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_cors_preflight_mirrors_request() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();
    let response = memory_router().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "DELETE"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "authorization"
    );
}

#[tokio::test]
async fn test_trace_id_is_echoed() {
    let request = Request::builder()
        .uri("/liveness")
        .header("x-trace-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = memory_router().oneshot(request).await.unwrap();

    assert_eq!(response.headers().get("x-trace-id").unwrap(), "abc-123");
    assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
}
