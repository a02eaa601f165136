use crate::e2e::helpers;

use helpers::{assertions::assert_rfc3339, TestContext};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_the_api_at_root(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["message"], "Welcome to Digital Khanqah Al Murshid API");
    assert_eq!(body["docs"], "/docs");
    assert_eq!(body["health"], "/api/murshid/health");
    assert!(body["version"].as_str().is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_healthy_status(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["app"], "Digital Khanqah Al Murshid API");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_murshid_health_with_timestamp(ctx: &TestContext) {
    let response = ctx.client.get("/api/murshid/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "AI Murshid");
    assert_rfc3339(&body["timestamp"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_touch_providers_for_health_checks(ctx: &TestContext) {
    ctx.client.get("/health").await.unwrap();
    ctx.client.get("/api/murshid/health").await.unwrap();

    let received = ctx.providers.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_request_id(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_header_exists("x-request-id");
    let id = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok(), "'{}' is not a uuid", id);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_caller_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_header("/health", "x-request-id", "trace-abc-123")
        .await
        .unwrap();

    response.assert_header("x-request-id", "trace-abc-123");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_allow_cross_origin_requests(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_header("/health", "origin", "https://app.example.org")
        .await
        .unwrap();

    response.assert_header_exists("access-control-allow-origin");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_routes(ctx: &TestContext) {
    let response = ctx.client.get("/api/unknown").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}
