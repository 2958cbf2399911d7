//! Error types for the content-pulse dashboard core

use std::{error::Error as StdError, fmt};

/// Main error type for the dashboard core
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Requested field is not part of the view's vocabulary
    InvalidField {
        /// The field that was requested
        field: String,
        /// Name of the view whose vocabulary was consulted
        view: String,
    },

    /// A record holds a value whose kind differs from the field's kind
    HeterogeneousTypeMismatch {
        /// Field being compared
        field: String,
        /// Identifier of the offending record
        record: String,
        /// Kind declared by the vocabulary
        expected: String,
        /// Kind actually found in the record
        found: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error
    #[must_use]
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid field error
    #[must_use]
    pub fn invalid_field<F: Into<String>, V: Into<String>>(field: F, view: V) -> Self {
        Self::InvalidField {
            field: field.into(),
            view: view.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::InvalidField { field, view } => {
                write!(f, "Invalid field '{field}' for view '{view}'")
            }
            Self::HeterogeneousTypeMismatch {
                field,
                record,
                expected,
                found,
            } => write!(
                f,
                "Type mismatch on field '{field}' in record {record}: expected {expected}, found {found}"
            ),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}
