//! File-access outcome taxonomy.

use thiserror::Error;

use crate::core::security::ContainmentError;

/// Outcomes of a validated file read that did not produce bytes.
///
/// All variants are expected, recoverable results of handling untrusted
/// input. None of them carry the rejected fragment in their display output;
/// echoing it back would disclose internal layout to the requester.
#[derive(Debug, Error)]
pub enum FileAccessError {
    /// The fragment failed containment validation.
    #[error("access denied")]
    Denied(#[source] ContainmentError),

    /// The fragment resolved inside the base directory but no regular file
    /// exists there.
    #[error("file not found")]
    NotFound,

    /// An I/O error other than not-found occurred while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FileAccessError {
    /// Whether this outcome is an expected client-level condition rather
    /// than a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Denied(_) | Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_display_does_not_echo_details() {
        let err = FileAccessError::Denied(ContainmentError::OutsideBase);
        assert_eq!(err.to_string(), "access denied");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(FileAccessError::NotFound.is_client_error());
        assert!(FileAccessError::Denied(ContainmentError::OutsideBase).is_client_error());
        assert!(
            !FileAccessError::Io(std::io::Error::other("disk on fire")).is_client_error()
        );
    }
}
