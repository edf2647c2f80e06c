//! Integration tests for the HTTP surface, driven in-process through the
//! router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use randwell_core::source::RandomSource;
use randwell_server::app_state::AppState;
use randwell_server::config::ServerConfig;
use randwell_server::router::build_router;

/// Deterministic source: hands out a fixed sequence, then repeats the last
/// value.
struct SequenceSource {
    values: Vec<i64>,
    next: AtomicUsize,
}

impl SequenceSource {
    fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceSource {
    fn next63(&self) -> i64 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        match self.values.get(i) {
            Some(v) => *v,
            None => *self.values.last().expect("sequence must not be empty"),
        }
    }
}

fn test_app() -> Router {
    build_router(AppState::new(ServerConfig::default()))
}

fn app_with_source(values: Vec<i64>) -> Router {
    build_router(AppState::with_source(
        ServerConfig::default(),
        Arc::new(SequenceSource::new(values)),
    ))
}

/// Send one request through a clone of the router; state is shared across
/// calls, so counters accumulate.
async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, "GET", uri).await;
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn draws_stay_in_narrowed_range_and_count() {
    let app = test_app();

    for _ in 0..100 {
        let (status, json) = get_json(&app, "/random?start=10&end=20").await;
        assert_eq!(status, StatusCode::OK);
        let n = json["Number"].as_i64().unwrap();
        assert!((10..=18).contains(&n), "draw out of range: {n}");
    }

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["requests"], 100);
}

#[tokio::test]
async fn deterministic_draw_maps_exact_value() {
    let app = app_with_source(vec![123_456]);
    let (status, json) = get_json(&app, "/random?start=10&end=20").await;
    assert_eq!(status, StatusCode::OK);
    // 123456 % (20 - 10 - 1) + 10
    assert_eq!(json["Number"], 13);
}

#[tokio::test]
async fn large_values_survive_json_round_trip() {
    let end = i64::MAX;
    let span = end - 2;
    let app = app_with_source(vec![span - 1]);
    let (status, json) = get_json(&app, &format!("/random?start=1&end={end}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["Number"].as_i64().unwrap(), end - 2);
}

#[tokio::test]
async fn success_response_is_json() {
    let app = app_with_source(vec![7]);
    let request = Request::builder()
        .method("GET")
        .uri("/random?start=10&end=20")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn adjacent_bounds_are_rejected_not_crashed() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/random?start=4&end=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn equal_bounds_are_rejected() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/random?start=5&end=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn missing_params_are_rejected() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/random").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn zero_negative_and_inverted_bounds_are_rejected() {
    let app = test_app();
    for uri in [
        "/random?start=0&end=10",
        "/random?start=10&end=0",
        "/random?start=-3&end=10",
        "/random?start=1&end=-10",
        "/random?start=20&end=10",
    ] {
        let (status, body) = send(&app, "GET", uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert!(body.is_empty(), "uri {uri}");
    }
}

#[tokio::test]
async fn malformed_query_values_are_rejected() {
    let app = test_app();
    for uri in [
        "/random?start=abc&end=10",
        "/random?start=1.5&end=10",
        "/random?start=1&end=9&count=2",
    ] {
        let (status, body) = send(&app, "GET", uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert!(body.is_empty(), "uri {uri}");
    }
}

#[tokio::test]
async fn failed_draws_do_not_count() {
    let app = app_with_source(vec![42]);

    let (status, _) = send(&app, "GET", "/random?start=5&end=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, json) = get_json(&app, "/health").await;
    assert_eq!(json["requests"], 0);

    let (status, _) = send(&app, "GET", "/random?start=10&end=20").await;
    assert_eq!(status, StatusCode::OK);
    let (_, json) = get_json(&app, "/health").await;
    assert_eq!(json["requests"], 1);
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let app = test_app();
    for (method, uri) in [
        ("POST", "/random?start=10&end=20"),
        ("PUT", "/random?start=10&end=20"),
        ("DELETE", "/random"),
        ("POST", "/health"),
        ("DELETE", "/health"),
    ] {
        let (status, body) = send(&app, method, uri).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert!(body.is_empty(), "{method} {uri}");
    }
}

#[tokio::test]
async fn unknown_paths_return_empty_404() {
    let app = test_app();
    for uri in ["/", "/randomize", "/health/live", "/metrics"] {
        let (status, body) = send(&app, "GET", uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {uri}");
        assert!(body.is_empty(), "uri {uri}");
    }
}
