//! Contact form submission: validation and the transport seam.
//!
//! Two checks exist and they deliberately differ:
//!
//! - [`ContactSubmission::validate`] is the client-side gate: every field
//!   present and the email well formed.
//! - [`ContactPayload::into_submission`] is the relay's check: presence only.

use crate::{Error, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Path of the relay endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

/// Error body returned when a field is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";

/// Error body returned when the mail provider fails.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email.";

/// Email shape accepted by the form.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(EMAIL_PATTERN).expect("email pattern compiles")
});

static EMPTY_MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)<\s*/?\s*(p|br|div|span)\s*/?\s*>|&nbsp;").expect("markup pattern compiles")
});

/// Whether `email` matches [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether a rich-text body carries no text at all (e.g. `<p><br></p>`).
pub fn is_blank_html(html: &str) -> bool {
    EMPTY_MARKUP_RE.replace_all(html, "").trim().is_empty()
}

/// Form field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email.
    Email,
    /// Message subject.
    Subject,
    /// Rich-text message body.
    Body,
}

impl Field {
    /// All fields in form order.
    pub fn all() -> [Field; 4] {
        [Field::Name, Field::Email, Field::Subject, Field::Body]
    }

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Body => "body",
        }
    }
}

/// A message from the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Body, serialised as HTML by the editor.
    pub body: String,
}

impl ContactSubmission {
    /// Create a submission.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Body => &self.body,
        }
    }

    /// Mutable value of one field.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Body => &mut self.body,
        }
    }

    /// Client-side gate. Reports the first failing field in form order.
    pub fn validate(&self) -> Result<()> {
        for field in Field::all() {
            let value = self.get(field);
            let blank = match field {
                Field::Body => is_blank_html(value),
                _ => value.trim().is_empty(),
            };
            if blank {
                return Err(Error::validation_field(field.as_str(), "This field is required"));
            }
            if field == Field::Email && !is_valid_email(value) {
                return Err(Error::validation_field(field.as_str(), "Invalid email address"));
            }
        }
        Ok(())
    }
}

/// Relay request body; every field may be missing on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Sender name.
    #[serde(default)]
    pub name: Option<String>,
    /// Sender email.
    #[serde(default)]
    pub email: Option<String>,
    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// HTML body.
    #[serde(default)]
    pub body: Option<String>,
}

impl ContactPayload {
    /// Presence check. Absent and empty fields are both missing.
    pub fn into_submission(self) -> Result<ContactSubmission> {
        fn present(value: Option<String>) -> Result<String> {
            value.filter(|v| !v.is_empty()).ok_or(Error::MissingFields)
        }
        Ok(ContactSubmission {
            name: present(self.name)?,
            email: present(self.email)?,
            subject: present(self.subject)?,
            body: present(self.body)?,
        })
    }
}

impl From<ContactSubmission> for ContactPayload {
    fn from(s: ContactSubmission) -> Self {
        Self {
            name: Some(s.name),
            email: Some(s.email),
            subject: Some(s.subject),
            body: Some(s.body),
        }
    }
}

/// `200` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAccepted {
    /// Always `true`.
    pub success: bool,
}

impl Default for ContactAccepted {
    fn default() -> Self {
        Self { success: true }
    }
}

/// `4xx`/`5xx` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// User-facing message.
    pub error: String,
}

impl ErrorBody {
    /// Create an error body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Delivers a submission to the relay.
///
/// Implementations issue exactly one outbound request per call and never
/// retry; the caller decides whether to resubmit.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Send `submission`.
    async fn send(&self, submission: &ContactSubmission) -> Result<()>;
}
