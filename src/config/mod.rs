//! Configuration types for the dispatcher.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DispatcherConfig`]: everything a [`Dispatcher`](crate::Dispatcher) is built from
//! - [`DispatcherConfigBuilder`]: a builder for [`DispatcherConfig`]
//! - [`EndpointUrl`]: the endpoint address, kept exactly as given
//!
//! # Example
//!
//! ```rust
//! use graphql_dispatch::clients::{HttpRequest, HttpResponse, TransportError};
//! use graphql_dispatch::{DispatcherConfig, MemoryCache, Token};
//!
//! let config = DispatcherConfig::builder()
//!     .transport(|_url: String, _request: HttpRequest| async {
//!         Ok::<_, TransportError>(HttpResponse::new(200, "{}"))
//!     })
//!     .url("http://localhost/graphql")
//!     .cache(MemoryCache::new())
//!     .token(Token::new("abc"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.url().as_ref(), "http://localhost/graphql");
//! ```

mod newtypes;

pub use newtypes::EndpointUrl;

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tracing::Level;

use crate::auth::{Token, TokenError};
use crate::cache::Cache;
use crate::clients::graphql::{ErrorSink, TraceLogger};
use crate::clients::Transport;
use crate::error::ConfigError;

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
///
/// # Thread Safety
///
/// `DispatcherConfig` is `Clone`, `Send`, and `Sync`. Clones share the same
/// transport and cache.
#[derive(Clone)]
pub struct DispatcherConfig {
    transport: Arc<dyn Transport>,
    url: EndpointUrl,
    cache: Option<Arc<dyn Cache>>,
    error_sink: ErrorSink,
    token: Option<Token>,
    headers: HashMap<String, String>,
}

impl DispatcherConfig {
    /// Creates a new builder for constructing a `DispatcherConfig`.
    #[must_use]
    pub fn builder() -> DispatcherConfigBuilder {
        DispatcherConfigBuilder::new()
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &EndpointUrl {
        &self.url
    }

    /// Returns the cache, if configured.
    #[must_use]
    pub const fn cache(&self) -> Option<&Arc<dyn Cache>> {
        self.cache.as_ref()
    }

    /// Returns the error sink.
    #[must_use]
    pub const fn error_sink(&self) -> &ErrorSink {
        &self.error_sink
    }

    /// Returns the token, if configured.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Returns the initial base headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl fmt::Debug for DispatcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatcherConfig")
            .field("url", &self.url)
            .field("cache", &self.cache.is_some())
            .field("error_sink", &self.error_sink)
            .field("token", &self.token)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

// Verify DispatcherConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DispatcherConfig>();
};

/// Builder for constructing [`DispatcherConfig`] instances.
///
/// Required fields are `transport` and `url`. There is no fallback transport:
/// pass [`ReqwestTransport`](crate::ReqwestTransport) or your own.
///
/// # Defaults
///
/// - `cache`: `None` (every call reaches the network)
/// - `error_sink`: [`ErrorSink::Default`]
/// - `token`: `None` (no `authorization` header)
/// - `headers`: empty
#[derive(Default)]
pub struct DispatcherConfigBuilder {
    transport: Option<Arc<dyn Transport>>,
    url: Option<String>,
    cache: Option<Arc<dyn Cache>>,
    error_sink: ErrorSink,
    token: Option<Token>,
    headers: HashMap<String, String>,
}

impl DispatcherConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transport (required).
    #[must_use]
    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.transport_arc(Arc::new(transport))
    }

    /// Sets a shared transport (required).
    #[must_use]
    pub fn transport_arc(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the endpoint URL (required).
    ///
    /// The value reaches the transport unchanged, so relative paths and
    /// transport-specific addresses are fine.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the response cache.
    #[must_use]
    pub fn cache(self, cache: impl Cache + 'static) -> Self {
        self.cache_arc(Arc::new(cache))
    }

    /// Sets a shared response cache.
    #[must_use]
    pub fn cache_arc(mut self, cache: Arc<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Reports upstream errors to a [`TraceLogger`].
    #[must_use]
    pub fn trace_logger(self, logger: impl TraceLogger + 'static) -> Self {
        self.error_sink(ErrorSink::trace_logger(logger))
    }

    /// Reports upstream errors to a `(level, payload)` closure.
    #[must_use]
    pub fn logger_fn<F>(self, log: F) -> Self
    where
        F: Fn(Level, &Value) + Send + Sync + 'static,
    {
        self.error_sink(ErrorSink::callable(log))
    }

    /// Sets the error sink directly.
    #[must_use]
    pub fn error_sink(mut self, sink: ErrorSink) -> Self {
        self.error_sink = sink;
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn token(mut self, token: impl Into<Token>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets a synchronous bearer token provider.
    #[must_use]
    pub fn token_fn<F>(self, provider: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.token(Token::from_fn(provider))
    }

    /// Sets an asynchronous bearer token provider.
    #[must_use]
    pub fn token_async_fn<F, Fut>(self, provider: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, TokenError>> + Send + 'static,
    {
        self.token(Token::from_async_fn(provider))
    }

    /// Sets the initial base headers, replacing any set so far.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds one initial base header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Builds the [`DispatcherConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `transport` or `url`
    /// is not set (checked in that order). An empty `url` counts as not set.
    pub fn build(self) -> Result<DispatcherConfig, ConfigError> {
        let transport = self.transport.ok_or(ConfigError::MissingRequiredField {
            field: "transport",
        })?;
        let url = self
            .url
            .ok_or(ConfigError::MissingRequiredField { field: "url" })
            .and_then(EndpointUrl::new)?;

        Ok(DispatcherConfig {
            transport,
            url,
            cache: self.cache,
            error_sink: self.error_sink,
            token: self.token,
            headers: self.headers,
        })
    }
}
