//! `POST /api/contact` and `GET /api/health`.

use crate::common::{MockMailer, TestHarness, read_json, test_config};
use axum::body::Body;
use http::Request;
use serde_json::json;

fn valid() -> String {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Hello",
        "body": "<p>Hi <em>there</em></p>"
    })
    .to_string()
}

#[tokio::test]
async fn test_valid_submission_is_relayed_once() {
    let harness = TestHarness::new();
    let (status, body) = harness.post_contact(valid()).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"success": true}));

    let sent = harness.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let message = &sent[0];
    assert_eq!(message.to.email, "owner@example.com");
    assert_eq!(message.from.email, "relay@example.com");
    assert_eq!(message.from.name.as_deref(), Some("Ada"));
    assert_eq!(message.reply_to.email, "ada@example.com");
    assert_eq!(message.subject, "Hello");
    assert!(message.html.contains("<div><p>Hi <em>there</em></p></div>"));
}

#[tokio::test]
async fn test_missing_field_is_rejected_without_sending() {
    let harness = TestHarness::new();
    let body = json!({"name": "Ada", "email": "ada@example.com", "subject": "Hello"});
    let (status, body) = harness.post_contact(body.to_string()).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "All fields are required."}));
    assert_eq!(harness.mailer.calls(), 0);
}

#[tokio::test]
async fn test_empty_field_is_rejected() {
    let harness = TestHarness::new();
    let body = json!({"name": "", "email": "ada@example.com", "subject": "Hello", "body": "x"});
    let (status, _) = harness.post_contact(body.to_string()).await;
    assert_eq!(status, 400);
    assert_eq!(harness.mailer.calls(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let harness = TestHarness::new();
    let (status, body) = harness.post_contact("{not json").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "All fields are required.");
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let harness = TestHarness::new();
    let request = Request::post("/api/contact").body(Body::from(valid())).unwrap();
    let (status, _) = read_json(harness.call(request).await).await;
    assert_eq!(status, 400);
    assert_eq!(harness.mailer.calls(), 0);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let harness = TestHarness::new();
    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Hello",
        "body": "x".repeat(8192)
    });
    let (status, body) = harness.post_contact(body.to_string()).await;
    assert_eq!(status, 413);
    assert_eq!(body, json!({"error": "Request body too large."}));
    assert_eq!(harness.mailer.calls(), 0);
}

#[tokio::test]
async fn test_delivery_failure_is_server_error() {
    let harness = TestHarness::with(test_config("https://mail.example/send"), MockMailer::failing());
    let (status, body) = harness.post_contact(valid()).await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Failed to send email."}));
    assert_eq!(harness.mailer.calls(), 1);
}

#[tokio::test]
async fn test_recipient_defaults_to_sending_account() {
    let mut config = test_config("https://mail.example/send");
    config.mail_to = None;
    let harness = TestHarness::with(config, MockMailer::accepting());
    let (status, _) = harness.post_contact(valid()).await;
    assert_eq!(status, 200);
    assert_eq!(harness.mailer.sent.lock().unwrap()[0].to.email, "relay@example.com");
}

#[tokio::test]
async fn test_health() {
    let harness = TestHarness::new();
    let request = Request::get("/api/health").body(Body::empty()).unwrap();
    let (status, body) = read_json(harness.call(request).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let harness = TestHarness::new();
    let request = Request::get("/api/other").body(Body::empty()).unwrap();
    let response = harness.call(request).await;
    assert_eq!(response.status().as_u16(), 404);
}
