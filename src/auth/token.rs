//! Bearer token types for request authentication.
//!
//! This module provides the [`Token`] enum, which holds either a fixed bearer
//! token or a provider that produces one on demand.
//!
//! # Resolution
//!
//! Every token, static or not, is resolved through a single awaited future
//! ([`Token::resolve`]). Static values and synchronous providers are lifted
//! into an already-completed future, so the dispatcher never branches on
//! whether the value is awaitable.
//!
//! # Security
//!
//! The [`Token`] type implements a custom [`Debug`] that masks static token
//! values, preventing accidental exposure in logs.
//!
//! # Example
//!
//! ```rust
//! use graphql_dispatch::{Token, TokenError};
//!
//! // Fixed token
//! let token = Token::new("abc");
//!
//! // Token fetched asynchronously on every call
//! let token = Token::from_async_fn(|| async { Ok::<_, TokenError>("abc".to_string()) });
//!
//! // Debug output masks the token value
//! let debug_output = format!("{:?}", Token::new("secret"));
//! assert!(!debug_output.contains("secret"));
//! ```

use std::fmt;
use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// Boxed future returned by a token provider.
pub type TokenFuture = Pin<Box<dyn Future<Output = Result<String, TokenError>> + Send>>;

type TokenProvider = dyn Fn() -> TokenFuture + Send + Sync;

/// Error returned when a token provider fails to produce a token.
///
/// # Example
///
/// ```rust
/// use graphql_dispatch::TokenError;
///
/// let error = TokenError::new("refresh token expired");
/// assert_eq!(error.to_string(), "Failed to resolve bearer token: refresh token expired");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to resolve bearer token: {message}")]
pub struct TokenError {
    /// Description of the provider failure.
    pub message: String,
}

impl TokenError {
    /// Creates a new token error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A bearer token used for the `authorization` header.
///
/// - [`Static`](Self::Static): the same value on every request
/// - [`Provider`](Self::Provider): a closure invoked once per dispatched
///   request (cache hits never invoke it)
#[derive(Clone)]
pub enum Token {
    /// A fixed token value.
    Static(String),

    /// A provider producing a token future on each call.
    Provider(Arc<TokenProvider>),
}

impl Token {
    /// Creates a fixed token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::Static(token.into())
    }

    /// Creates a token from a synchronous provider.
    ///
    /// The provider's result is lifted into a completed future at resolution
    /// time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_dispatch::Token;
    ///
    /// let token = Token::from_fn(|| std::env::var("API_TOKEN").unwrap_or_default());
    /// ```
    #[must_use]
    pub fn from_fn<F>(provider: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Provider(Arc::new(move || {
            Box::pin(future::ready(Ok(provider()))) as TokenFuture
        }))
    }

    /// Creates a token from an asynchronous provider.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_dispatch::{Token, TokenError};
    ///
    /// let token = Token::from_async_fn(|| async {
    ///     // e.g. read from a credential store
    ///     Ok::<_, TokenError>("abc".to_string())
    /// });
    /// ```
    #[must_use]
    pub fn from_async_fn<F, Fut>(provider: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, TokenError>> + Send + 'static,
    {
        Self::Provider(Arc::new(move || Box::pin(provider()) as TokenFuture))
    }

    /// Resolves the token to its current value.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] if the provider fails.
    pub async fn resolve(&self) -> Result<String, TokenError> {
        let pending: TokenFuture = match self {
            Self::Static(token) => Box::pin(future::ready(Ok(token.clone()))),
            Self::Provider(provider) => provider(),
        };
        pending.await
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self::Static(token)
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self::Static(token.to_string())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => f.write_str("Token::Static(*****)"),
            Self::Provider(_) => f.write_str("Token::Provider(..)"),
        }
    }
}
