//! Error types for folio-client

use thiserror::Error;

/// Result type alias for folio-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error text from the response body, or the status reason
        message: String,
    },

    /// Media uploads need a cloud name and an upload preset
    #[error("Media uploads are not configured")]
    UploadsDisabled,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<Error> for folio_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(e) => e,
            Error::Http(e) => match e.status() {
                Some(status) => folio_core::Error::transport_status(status.as_u16(), e.to_string()),
                None => folio_core::Error::transport(e.to_string()),
            },
            Error::Status { status, message } => {
                folio_core::Error::transport_status(status, message)
            }
            Error::UploadsDisabled => folio_core::Error::config("media uploads are not configured"),
            Error::Config(message) => folio_core::Error::config(message),
        }
    }
}
