//! Error type for API operations.
//!
//! The service reports failure on two channels: a response body with
//! `success: false` and a human-readable message (the request reached the
//! server and was rejected), and a transport-level error (the request never
//! completed, or the server answered with an error status). Both are folded
//! into one [`ApiError`] so callers get a single `Result`, while the variant
//! keeps the two channels distinguishable.

use thiserror::Error;

use crate::session::SessionStoreError;

/// Errors that can occur when calling the admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server processed the request and rejected it (`success: false`).
    /// Recoverable; the message is meant to be shown to the operator.
    #[error("Request rejected: {message}")]
    Rejected {
        /// Human-readable message from the response body.
        message: String,
    },

    /// HTTP request failed at the transport layer (network error, timeout,
    /// or a non-success status code).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded as an API envelope.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope reported success but carried no data payload.
    #[error("Response reported success but carried no data")]
    MissingData,

    /// Persisting or clearing the session failed.
    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

impl ApiError {
    /// Whether this is a body-level rejection rather than a transport or
    /// decoding failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The server's rejection message, if this is a body-level rejection.
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = ApiError::Rejected {
            message: "Invalid credentials".to_owned(),
        };
        assert_eq!(err.to_string(), "Request rejected: Invalid credentials");
    }

    #[test]
    fn test_rejection_accessors() {
        let rejected = ApiError::Rejected {
            message: "nope".to_owned(),
        };
        assert!(rejected.is_rejection());
        assert_eq!(rejected.rejection_message(), Some("nope"));

        let missing = ApiError::MissingData;
        assert!(!missing.is_rejection());
        assert_eq!(missing.rejection_message(), None);
    }
}
