//! Transport error types.
//!
//! A [`TransportError`] is whatever the transport could not do: connect,
//! send, or read the response body. HTTP status codes are not errors at this
//! layer; the response is handed back as-is and the dispatcher decides what
//! its body means.
//!
//! # Example
//!
//! ```rust
//! use graphql_dispatch::TransportError;
//!
//! let error = TransportError::other("connection reset");
//! assert_eq!(error.to_string(), "Transport error: connection reset");
//! ```

use thiserror::Error;

/// Error returned when a transport fails to complete a request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error from `reqwest`.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {message}")]
    Other {
        /// Description of the failure.
        message: String,
    },
}

impl TransportError {
    /// Creates a [`TransportError::Other`] with the given message.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
