use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use clap::Parser;
use menuscan_api::application::http::server::http_server::{router, state};
use menuscan_api::args::Args;
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};

struct ScanApi {
    server: TestServer,
}

impl ScanApi {
    fn with_base_url(base_url: &str) -> Self {
        let args = Args::parse_from([
            "menuscan-api",
            "--api-key",
            "test-key",
            "--llm-base-url",
            base_url,
            "--scan-timeout-secs",
            "5",
        ]);
        let state = state(Arc::new(args)).expect("state");
        let router = router(state).expect("router");
        Self {
            server: TestServer::new(router).expect("test server"),
        }
    }
}

impl AsyncTestContext for ScanApi {
    async fn setup() -> Self {
        // Unroutable upstream: any scan that reaches the model falls
        // back to sample data.
        Self::with_base_url("http://127.0.0.1:9")
    }
}

#[test_context(ScanApi)]
#[tokio::test]
async fn missing_image_data_returns_400(ctx: &mut ScanApi) {
    let res = ctx
        .server
        .post("/api/scan-menu")
        .json(&json!({ "imageType": "image/png" }))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert_eq!(body["error"], json!("Image data is required"));
}

#[test_context(ScanApi)]
#[tokio::test]
async fn empty_image_data_returns_400(ctx: &mut ScanApi) {
    let res = ctx
        .server
        .post("/api/scan-menu")
        .json(&json!({ "imageData": "" }))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[test_context(ScanApi)]
#[tokio::test]
async fn invalid_base64_returns_400(ctx: &mut ScanApi) {
    let res = ctx
        .server
        .post("/api/scan-menu")
        .json(&json!({ "imageData": "!!!not-base64!!!" }))
        .await;

    res.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ScanApi)]
#[tokio::test]
async fn non_post_method_returns_405(ctx: &mut ScanApi) {
    let res = ctx.server.get("/api/scan-menu").await;
    res.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[test_context(ScanApi)]
#[tokio::test]
async fn options_preflight_returns_200_with_cors_headers(ctx: &mut ScanApi) {
    let res = ctx
        .server
        .method(Method::OPTIONS, "/api/scan-menu")
        .add_header("origin", "http://localhost:5173")
        .add_header("access-control-request-method", "POST")
        .await;

    res.assert_status(StatusCode::OK);
    let headers = res.headers();
    assert!(headers.contains_key("access-control-allow-origin"));
    assert!(headers.contains_key("access-control-allow-methods"));
    assert!(headers.contains_key("access-control-allow-headers"));
}

#[test_context(ScanApi)]
#[tokio::test]
async fn upstream_failure_serves_sample_fallback(ctx: &mut ScanApi) {
    let res = ctx
        .server
        .post("/api/scan-menu")
        .json(&json!({ "imageData": "aGVsbG8gbWVudQ==", "imageType": "image/jpeg" }))
        .await;

    res.assert_status(StatusCode::OK);
    let body: Value = res.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["source"], json!("sample_fallback"));
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(!body["data"]["dishes"].as_array().unwrap().is_empty());
}

#[test_context(ScanApi)]
#[tokio::test]
async fn health_route_is_up(ctx: &mut ScanApi) {
    let res = ctx.server.get("/api/health").await;
    res.assert_status(StatusCode::OK);
    let body: Value = res.json();
    assert_eq!(body["status"], json!("ok"));
}
