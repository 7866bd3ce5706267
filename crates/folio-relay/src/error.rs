//! Error types for folio-relay

use axum::Json;
use axum::response::{IntoResponse, Response};
use folio_core::contact::{DELIVERY_FAILED_MESSAGE, ErrorBody, MISSING_FIELDS_MESSAGE};
use http::StatusCode;
use thiserror::Error;

/// Result type alias for folio-relay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-relay
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// The request body was not a JSON object of strings
    #[error("Malformed request: {0}")]
    BadRequest(String),

    /// The request body exceeded the configured limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// The mail provider failed or rejected the message
    #[error("Delivery failed: {message}")]
    Delivery {
        /// What the provider reported
        message: String,
        /// Provider HTTP status, when it answered
        status: Option<u16>,
    },

    /// Invalid relay configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (binding the listener, serving)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a delivery error.
    pub fn delivery<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        Error::Delivery {
            message: message.into(),
            status,
        }
    }

    /// HTTP status and user-facing message of this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Core(folio_core::Error::MissingFields)
            | Error::Core(folio_core::Error::Validation { .. })
            | Error::BadRequest(_) => (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE),
            Error::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large."),
            Error::Delivery { .. } | Error::Core(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, DELIVERY_FAILED_MESSAGE)
            }
            Error::Config(_) | Error::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, "Contact request failed");
        } else {
            tracing::warn!(error = %self, "Contact request rejected");
        }
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
