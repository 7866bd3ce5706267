//! Common test utilities and harness for folio-relay integration tests.

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use folio_relay::{Error, MailMessage, Mailer, RelayConfig, Result, Server};
use http::{Request, Response, header};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Mailer that records messages and optionally fails.
#[derive(Default)]
pub struct MockMailer {
    fail: bool,
    /// Messages handed over, in order
    pub sent: Mutex<Vec<MailMessage>>,
}

impl MockMailer {
    /// A mailer that accepts everything.
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A mailer whose provider is down.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    /// Number of delivery attempts.
    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            Err(Error::delivery("provider unavailable", Some(503)))
        } else {
            Ok(())
        }
    }
}

/// A valid configuration pointing at `mail_api_url`.
pub fn test_config(mail_api_url: &str) -> RelayConfig {
    RelayConfig {
        port: 0,
        host: "127.0.0.1".parse().unwrap(),
        client_uri: Some("https://folio.example".into()),
        mail_id: "relay@example.com".into(),
        app_password: "app-secret".into(),
        mail_api_url: mail_api_url.into(),
        mail_to: Some("owner@example.com".into()),
        body_limit: 4096,
    }
}

/// Router wired to a mock mailer.
pub struct TestHarness {
    /// The mailer behind the router
    pub mailer: Arc<MockMailer>,
    /// The assembled router
    pub router: Router,
}

impl TestHarness {
    /// Harness whose mailer accepts every message.
    pub fn new() -> Self {
        Self::with(test_config("https://mail.example/send"), MockMailer::accepting())
    }

    /// Harness with a custom configuration and mailer.
    pub fn with(config: RelayConfig, mailer: Arc<MockMailer>) -> Self {
        let router = Server::new(config, mailer.clone()).router().unwrap();
        Self { mailer, router }
    }

    /// Send `request` through a fresh clone of the router.
    pub async fn call(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// POST `body` as JSON to the contact endpoint.
    pub async fn post_contact(&self, body: impl Into<String>) -> (u16, Value) {
        let request = Request::post("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        read_json(self.call(request).await).await
    }
}

/// Status code and JSON body of a response.
pub async fn read_json(response: Response<Body>) -> (u16, Value) {
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
