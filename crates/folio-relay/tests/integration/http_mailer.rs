//! [`HttpMailer`] against a mock provider.

use crate::common::test_config;
use folio_core::contact::ContactSubmission;
use folio_relay::{Error, HttpMailer, MailMessage, Mailer};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn message() -> MailMessage {
    let submission = ContactSubmission::new("Ada", "ada@example.com", "Hello", "<p>Hi</p>");
    MailMessage::compose(&submission, "relay@example.com", "owner@example.com")
}

#[tokio::test]
async fn test_send_posts_json_with_basic_auth() {
    let server = MockServer::start().await;
    // base64("relay@example.com:app-secret")
    Mock::given(method("POST"))
        .and(path("/send"))
        .and(header(
            "authorization",
            "Basic cmVsYXlAZXhhbXBsZS5jb206YXBwLXNlY3JldA==",
        ))
        .and(body_partial_json(serde_json::json!({
            "from": {"name": "Ada", "email": "relay@example.com"},
            "reply_to": {"name": "Ada", "email": "ada@example.com"},
            "to": {"email": "owner@example.com"},
            "subject": "Hello"
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let mailer = HttpMailer::new(&test_config(&format!("{}/send", server.uri()))).unwrap();
    mailer.send(&message()).await.unwrap();
}

#[tokio::test]
async fn test_provider_error_is_delivery_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&server)
        .await;

    let mailer = HttpMailer::new(&test_config(&format!("{}/send", server.uri()))).unwrap();
    let err = mailer.send(&message()).await.unwrap_err();
    assert!(matches!(
        &err,
        Error::Delivery { status: Some(500), message } if message.contains("quota exceeded")
    ));
}

#[tokio::test]
async fn test_unreachable_provider_is_delivery_failure() {
    let mailer = HttpMailer::new(&test_config("http://127.0.0.1:1/send")).unwrap();
    let err = mailer.send(&message()).await.unwrap_err();
    assert!(matches!(err, Error::Delivery { status: None, .. }));
}
