//! Contact relay client.

use crate::config::ClientConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use folio_core::contact::{CONTACT_PATH, ContactSubmission, ContactTransport, ErrorBody};

/// Posts contact submissions to the relay.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// Create a client for the relay at `config.api_url`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{CONTACT_PATH}", config.api_url.trim_end_matches('/')),
        })
    }

    /// Full URL of the contact endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one `POST` with `submission` as JSON. Never retries.
    pub async fn post(&self, submission: &ContactSubmission) -> Result<()> {
        log::debug!("POST {}", self.endpoint);
        let response = self.http.post(&self.endpoint).json(submission).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };
        log::warn!("Contact relay answered {status}: {message}");
        Err(Error::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContactTransport for ContactClient {
    async fn send(&self, submission: &ContactSubmission) -> folio_core::Result<()> {
        self.post(submission).await.map_err(Into::into)
    }
}
