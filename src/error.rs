//! Configuration error types for the dispatcher.
//!
//! # Error Handling
//!
//! [`DispatcherConfigBuilder::build`](crate::DispatcherConfigBuilder::build)
//! returns `Result<DispatcherConfig, ConfigError>` so that a dispatcher can
//! never exist without a transport and a non-empty target URL. Errors at this stage are
//! programming mistakes and are not meant to be recovered from.
//!
//! # Example
//!
//! ```rust
//! use graphql_dispatch::{ConfigError, DispatcherConfig};
//!
//! let result = DispatcherConfig::builder().url("http://localhost/graphql").build();
//! assert!(matches!(
//!     result,
//!     Err(ConfigError::MissingRequiredField { field: "transport" })
//! ));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`DispatcherConfig`](crate::DispatcherConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the dispatcher.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_transport_error_message() {
        let error = ConfigError::MissingRequiredField { field: "transport" };
        let message = error.to_string();
        assert!(message.contains("transport"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_missing_url_error_message() {
        let error = ConfigError::MissingRequiredField { field: "url" };
        assert!(error.to_string().contains("'url'"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "url" };
        let _: &dyn std::error::Error = &error;
    }
}
