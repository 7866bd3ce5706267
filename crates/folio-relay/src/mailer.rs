//! Outbound mail.
//!
//! [`MailMessage::compose`] turns a submission into the message the site
//! owner receives; a [`Mailer`] delivers it. [`HttpMailer`] talks to a
//! transactional mail API over HTTPS, authenticating with the account and
//! its app password.

use crate::config::RelayConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use folio_core::contact::ContactSubmission;
use serde::Serialize;
use std::time::Duration;

/// A display name and address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mailbox {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address.
    pub email: String,
}

impl Mailbox {
    /// A bare address.
    pub fn address(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
        }
    }

    /// An address with a display name.
    pub fn named(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
        }
    }
}

/// The mail delivered to the site owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    /// Sending account, shown under the submitter's name.
    pub from: Mailbox,
    /// The submitter, so a reply goes straight back to them.
    pub reply_to: Mailbox,
    /// Site owner.
    pub to: Mailbox,
    /// The submitter's subject, verbatim.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

impl MailMessage {
    /// Compose the mail for `submission`, sent from `sender` to `recipient`.
    ///
    /// The header block escapes the submitter's name, email and subject. The
    /// body is the editor's HTML and is passed through unchanged.
    pub fn compose(submission: &ContactSubmission, sender: &str, recipient: &str) -> Self {
        let html = format!(
            "<div>\n\
             <p><strong>From:</strong> {name} ({email})</p>\n\
             <p><strong>Subject:</strong> {subject}</p>\n\
             <hr/>\n\
             <div>{body}</div>\n\
             </div>",
            name = escape_html(&submission.name),
            email = escape_html(&submission.email),
            subject = escape_html(&submission.subject),
            body = submission.body,
        );
        Self {
            from: Mailbox::named(&submission.name, sender),
            reply_to: Mailbox::named(&submission.name, &submission.email),
            to: Mailbox::address(recipient),
            subject: submission.subject.clone(),
            html,
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Delivers composed mail.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver `message`. One attempt; failures are reported, not retried.
    async fn send(&self, message: &MailMessage) -> Result<()>;
}

/// Mailer backed by an HTTP mail API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    http: reqwest::Client,
    endpoint: String,
    account: String,
    password: String,
}

impl HttpMailer {
    /// Provider request timeout.
    pub const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a mailer for the configured provider and account.
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoint: config.mail_api_url.clone(),
            account: config.mail_id.clone(),
            password: config.app_password.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.account, Some(&self.password))
            .json(message)
            .send()
            .await
            .map_err(|e| Error::delivery(e.to_string(), None))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::delivery(
                format!("provider answered {status}: {detail}"),
                Some(status.as_u16()),
            ));
        }
        tracing::debug!(to = %message.to.email, "Mail accepted by provider");
        Ok(())
    }
}
