//! GraphQL-specific error types.
//!
//! # Error Handling
//!
//! A dispatched call fails in one of these ways:
//!
//! - [`GraphqlError::Upstream`]: the response body carried an `errors` field.
//!   The raw value is kept verbatim in [`UpstreamError`].
//! - [`GraphqlError::Transport`]: the transport produced no response.
//! - [`GraphqlError::Decode`]: the response body was not JSON.
//! - [`GraphqlError::Encode`]: the request variables could not be serialized.
//! - [`GraphqlError::Token`]: the token provider failed.
//!
//! # Example
//!
//! ```rust,ignore
//! use graphql_dispatch::GraphqlError;
//!
//! match dispatcher.query("query { shop { name } }", None).await {
//!     Ok(data) => println!("Data: {data}"),
//!     Err(GraphqlError::Upstream(e)) => println!("GraphQL errors: {}", e.errors()),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::auth::TokenError;
use crate::clients::TransportError;

/// The `errors` value of a GraphQL response.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("GraphQL response contained errors: {errors}")]
pub struct UpstreamError {
    errors: Value,
}

impl UpstreamError {
    /// Wraps a raw `errors` value.
    #[must_use]
    pub const fn new(errors: Value) -> Self {
        Self { errors }
    }

    /// Returns the raw `errors` value.
    #[must_use]
    pub const fn errors(&self) -> &Value {
        &self.errors
    }

    /// Consumes the error, returning the raw `errors` value.
    #[must_use]
    pub fn into_errors(self) -> Value {
        self.errors
    }
}

/// Error type for dispatched GraphQL operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The response contained an `errors` field.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The transport failed to produce a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not valid JSON.
    #[error("Failed to decode GraphQL response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Failed to encode GraphQL request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The bearer token could not be resolved.
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl GraphqlError {
    /// Returns the raw `errors` value if this is an upstream error.
    #[must_use]
    pub const fn upstream_errors(&self) -> Option<&Value> {
        match self {
            Self::Upstream(e) => Some(e.errors()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_error_keeps_raw_value() {
        let errors = json!([{"code": "mocked-error"}]);
        let error = UpstreamError::new(errors.clone());

        assert_eq!(error.errors(), &errors);
        assert_eq!(error.into_errors(), errors);
    }

    #[test]
    fn test_upstream_error_message_includes_payload() {
        let error = GraphqlError::from(UpstreamError::new(json!(["error-code"])));
        let message = error.to_string();

        assert!(message.contains("contained errors"));
        assert!(message.contains("error-code"));
    }

    #[test]
    fn test_upstream_errors_accessor() {
        let error = GraphqlError::from(UpstreamError::new(json!(["x"])));
        assert_eq!(error.upstream_errors(), Some(&json!(["x"])));

        let error = GraphqlError::from(TransportError::other("down"));
        assert_eq!(error.upstream_errors(), None);
    }

    #[test]
    fn test_from_transport_error_conversion() {
        let error: GraphqlError = TransportError::other("connection refused").into();
        assert!(matches!(error, GraphqlError::Transport(_)));
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_from_token_error_conversion() {
        let error: GraphqlError = TokenError::new("expired").into();
        assert!(matches!(error, GraphqlError::Token(_)));
    }

    #[test]
    fn test_decode_error_message() {
        let source = serde_json::from_str::<Value>("<html>").unwrap_err();
        let error = GraphqlError::Decode(source);
        assert!(error.to_string().starts_with("Failed to decode GraphQL response"));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let error: &dyn std::error::Error = &GraphqlError::from(UpstreamError::new(json!(null)));
        let _ = error;
    }
}
