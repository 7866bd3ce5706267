//! Error types for folio-core.

/// Errors that can occur across the Folio domain layer.
///
/// All variants are marked `#[non_exhaustive]` at the enum level so new
/// failure kinds can be added without breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A field failed local validation (contact form, catalogue entry).
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, if one applies
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// One or more required contact fields were absent or empty.
    #[error("{}", crate::contact::MISSING_FIELDS_MESSAGE)]
    MissingFields,

    /// An outbound request could not be delivered or was rejected.
    #[error("Transport error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
        /// HTTP status, when the peer answered at all
        status: Option<u16>,
    },

    /// The content catalogue could not be parsed.
    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),

    /// Persisted client state could not be read or written.
    #[error("Storage error: {message}")]
    Storage {
        /// What went wrong
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether the user can recover by editing input and resubmitting.
    ///
    /// Every failure the portfolio surfaces is recoverable except broken
    /// configuration or a corrupt content catalogue.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Validation { .. } => true,
            Error::MissingFields => true,
            Error::Transport { .. } => true,
            Error::Storage { .. } => true,
            Error::Io(_) => true,
            Error::Content(_) => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a transport error without a status (network failure).
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Error::Transport {
            message: message.into(),
            status: None,
        }
    }

    /// Creates a transport error for a non-success HTTP status.
    pub fn transport_status<S: Into<String>>(status: u16, message: S) -> Self {
        Error::Transport {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Creates a new storage error.
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Error::Storage {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
