//! Contact form controller.
//!
//! The form keeps the four fields, gates submission on local validation and
//! tracks the in-flight request. Exactly one outbound request is made per
//! successful [`ContactForm::begin_submit`]; nothing is retried.

use crate::{Error, Result};
use folio_core::contact::{ContactSubmission, ContactTransport, Field, is_valid_email};

/// Shown in the modal after a successful send.
pub const SUCCESS_MESSAGE: &str = "Your Message got Delivered successfully!";

/// Shown inline when the relay rejects or cannot be reached.
pub const FAILURE_MESSAGE: &str = "Failed to send message.";

/// Shown inline when an editor image upload fails.
pub const UPLOAD_FAILED_MESSAGE: &str = "Image upload failed";

/// Hint under a malformed email field.
pub const INVALID_EMAIL_HINT: &str = "Invalid email address";

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Send Message";

/// Submit button label while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Lifecycle of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// A request is in flight.
    Sending,
    /// The last request succeeded.
    Delivered,
    /// The last request failed; the fields are kept for another attempt.
    Failed,
}

/// State of the contact page form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    status: SubmitStatus,
    modal_open: bool,
    upload_error: bool,
}

impl ContactForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of `field`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    /// Current field values.
    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    /// Hint under the email input: present when non-empty and malformed.
    pub fn email_hint(&self) -> Option<&'static str> {
        let email = &self.fields.email;
        (!email.is_empty() && !is_valid_email(email)).then_some(INVALID_EMAIL_HINT)
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Sending && self.fields.validate().is_ok()
    }

    /// Submit button label.
    pub fn submit_label(&self) -> &'static str {
        if self.status == SubmitStatus::Sending {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Current submission status.
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Inline error under the form, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        if self.status == SubmitStatus::Failed {
            Some(FAILURE_MESSAGE)
        } else if self.upload_error {
            Some(UPLOAD_FAILED_MESSAGE)
        } else {
            None
        }
    }

    /// Message of the success modal while it is open.
    pub fn modal_message(&self) -> Option<&'static str> {
        self.modal_open.then_some(SUCCESS_MESSAGE)
    }

    /// Close the success modal.
    pub fn dismiss_modal(&mut self) {
        self.modal_open = false;
    }

    /// Validate and enter [`SubmitStatus::Sending`].
    ///
    /// Returns the submission to send. Fails without any state change when
    /// a request is already in flight or a field is invalid.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission> {
        if self.status == SubmitStatus::Sending {
            return Err(Error::validation("a message is already being sent"));
        }
        self.fields.validate()?;
        self.status = SubmitStatus::Sending;
        self.upload_error = false;
        Ok(self.fields.clone())
    }

    /// Record the outcome of the request started by [`Self::begin_submit`].
    ///
    /// Success clears the fields and opens the modal; failure keeps the
    /// fields and shows [`FAILURE_MESSAGE`].
    pub fn finish_submit(&mut self, result: &Result<()>) {
        match result {
            Ok(()) => {
                log::info!("Contact message delivered");
                self.fields = ContactSubmission::default();
                self.status = SubmitStatus::Delivered;
                self.modal_open = true;
            }
            Err(e) => {
                log::warn!("Contact message failed: {e}");
                self.status = SubmitStatus::Failed;
            }
        }
    }

    /// Validate, send through `transport` and record the outcome.
    pub async fn submit(&mut self, transport: &dyn ContactTransport) -> Result<()> {
        let submission = self.begin_submit()?;
        let result = transport.send(&submission).await;
        self.finish_submit(&result);
        result
    }

    /// Append an uploaded image to the message body.
    pub fn insert_image(&mut self, url: &str) {
        self.upload_error = false;
        self.fields
            .body
            .push_str(&format!("<p><img src=\"{}\"></p>", escape_attribute(url)));
    }

    /// An editor image upload failed.
    pub fn report_upload_error(&mut self, error: &Error) {
        log::warn!("Image upload failed: {error}");
        self.upload_error = true;
    }
}

/// Escape `value` for a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
