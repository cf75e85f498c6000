//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when operating on the contact book.
#[derive(Error, Debug)]
pub enum ContactBookError {
    /// A name, phone number or email failed its pattern check
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced contact does not exist
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A contact with this name already exists
    #[error("Contact already exists: {0}")]
    Duplicate(String),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a valid contact map
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory store could not be serialized
    #[error("Failed to serialize contacts: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ContactBookError {
    /// Build an `Io` error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is an expected outcome to report to the user
    /// (validation, not found, duplicate) rather than a storage failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound(_) | Self::Duplicate(_)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
