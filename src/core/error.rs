//! Error types and handling for the staticguard server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for staticguard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the staticguard server.
#[derive(Debug, Error)]
pub enum Error {
    /// A path fragment failed containment validation.
    #[error("Containment error: {0}")]
    Containment(#[from] crate::core::security::ContainmentError),

    /// Error originating from the files domain.
    #[error("File access error: {0}")]
    FileAccess(#[from] crate::domains::files::FileAccessError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::security::ContainmentError;
    use crate::domains::files::FileAccessError;

    #[test]
    fn test_domain_errors_convert_into_unified_error() {
        let err: Error = ContainmentError::OutsideBase.into();
        assert!(matches!(err, Error::Containment(_)));

        let err: Error = FileAccessError::NotFound.into();
        assert!(matches!(err, Error::FileAccess(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("GUARD_BASE_DIR missing");
        assert_eq!(
            err.to_string(),
            "Configuration error: GUARD_BASE_DIR missing"
        );
    }
}
