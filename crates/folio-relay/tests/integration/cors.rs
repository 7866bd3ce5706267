//! Cross-origin access from the configured client.

use crate::common::{MockMailer, TestHarness, test_config};
use axum::body::Body;
use http::{Request, header};

#[tokio::test]
async fn test_preflight_from_client_origin() {
    let harness = TestHarness::new();
    let request = Request::options("/api/contact")
        .header(header::ORIGIN, "https://folio.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = harness.call(request).await;
    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://folio.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(harness.mailer.calls(), 0);
}

#[tokio::test]
async fn test_foreign_origin_is_not_echoed() {
    let harness = TestHarness::new();
    let request = Request::get("/api/health")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = harness.call(request).await;
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://folio.example"
    );
}

#[tokio::test]
async fn test_no_cors_without_client_uri() {
    let mut config = test_config("https://mail.example/send");
    config.client_uri = None;
    let harness = TestHarness::with(config, MockMailer::accepting());
    let request = Request::get("/api/health")
        .header(header::ORIGIN, "https://folio.example")
        .body(Body::empty())
        .unwrap();
    let response = harness.call(request).await;
    assert!(response.status().is_success());
    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
