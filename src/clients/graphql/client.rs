//! The GraphQL dispatcher.
//!
//! This module provides the [`Dispatcher`] type, which turns a query and its
//! variables into a network call and a decoded `data` payload.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

use crate::auth::Token;
use crate::cache::Cache;
use crate::clients::graphql::headers::{request_headers, HeaderUpdate};
use crate::clients::graphql::logger::ErrorSink;
use crate::clients::graphql::request::{CallOptions, GraphqlRequest};
use crate::clients::graphql::{GraphqlError, UpstreamError};
use crate::clients::{HttpMethod, HttpRequest, Transport};
use crate::config::{DispatcherConfig, DispatcherConfigBuilder, EndpointUrl};

/// Sends GraphQL operations to a single endpoint.
///
/// Each [`invoke`](Self::invoke) call runs the same lifecycle: serialize the
/// request, serve it from the cache if possible, otherwise resolve the token,
/// POST the body, decode the response, and either report the `errors` or
/// store and return the `data`.
///
/// # Thread Safety
///
/// `Dispatcher` is `Send + Sync`. Calls through `&self` may run concurrently;
/// they do not coordinate, so two simultaneous calls for the same uncached
/// request both reach the network.
///
/// # Example
///
/// ```rust,ignore
/// use graphql_dispatch::{Dispatcher, MemoryCache, ReqwestTransport, Token};
/// use serde_json::json;
///
/// let dispatcher = Dispatcher::builder()
///     .transport(ReqwestTransport::new()?)
///     .url("https://api.example.com/graphql")
///     .cache(MemoryCache::new())
///     .token(Token::new("abc"))
///     .build()
///     .map(Dispatcher::new)?;
///
/// let data = dispatcher
///     .query(
///         "query GetUser($id: String!) { user(id: $id) { id name } }",
///         Some(json!({ "id": "3" })),
///     )
///     .await?;
/// println!("User: {}", data["user"]["name"]);
/// ```
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    url: EndpointUrl,
    cache: Option<Arc<dyn Cache>>,
    error_sink: ErrorSink,
    token: Option<Token>,
    headers: RwLock<Arc<HashMap<String, String>>>,
}

// Verify Dispatcher is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dispatcher>();
};

impl Dispatcher {
    /// Creates a dispatcher from a validated configuration.
    #[must_use]
    pub fn new(config: DispatcherConfig) -> Self {
        tracing::debug!(
            url = %config.url(),
            cache = config.cache().is_some(),
            token = config.token().is_some(),
            "Created GraphQL dispatcher"
        );

        Self {
            transport: Arc::clone(config.transport()),
            url: config.url().clone(),
            cache: config.cache().cloned(),
            error_sink: config.error_sink().clone(),
            token: config.token().cloned(),
            headers: RwLock::new(Arc::new(config.headers().clone())),
        }
    }

    /// Creates a new builder for the dispatcher configuration.
    #[must_use]
    pub fn builder() -> DispatcherConfigBuilder {
        DispatcherConfig::builder()
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &EndpointUrl {
        &self.url
    }

    /// Returns a snapshot of the current base headers.
    #[must_use]
    pub fn headers(&self) -> Arc<HashMap<String, String>> {
        let guard = self.headers.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the base headers used by all subsequent calls.
    ///
    /// Calls that have already computed their headers are unaffected. A
    /// transform runs on a snapshot with no lock held, so it may call back
    /// into this dispatcher. Concurrent updates do not compose: the last one
    /// to finish replaces the map.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::collections::HashMap;
    /// use graphql_dispatch::HeaderUpdate;
    ///
    /// dispatcher.set_headers(HashMap::from([("x-tenant".to_string(), "acme".to_string())]));
    /// dispatcher.set_headers(HeaderUpdate::transform(|current| {
    ///     let mut next = current.clone();
    ///     next.insert("x-trace".to_string(), "1".to_string());
    ///     next
    /// }));
    /// ```
    pub fn set_headers(&self, update: impl Into<HeaderUpdate>) {
        let next = Arc::new(update.into().apply(&self.headers()));
        *self.headers.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Executes an operation with default [`CallOptions`].
    ///
    /// # Errors
    ///
    /// See [`invoke`](Self::invoke).
    pub async fn query(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Arc<Value>, GraphqlError> {
        self.invoke(query, variables, CallOptions::default()).await
    }

    /// Executes a GraphQL operation and returns its `data` payload.
    ///
    /// Unless `options.no_cache` is set or the operation is a mutation, a
    /// configured cache is checked first; a hit returns the stored value
    /// without resolving the token or touching the network. Successful
    /// responses for cacheable calls are stored under the serialized request.
    /// A missing or `null` `data` is returned as [`Value::Null`] and never
    /// cached.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Upstream`] if the response has an `errors` field. The
    ///   payload is reported to the configured error sink first.
    /// - [`GraphqlError::Transport`] if the transport fails.
    /// - [`GraphqlError::Decode`] if the response body is not JSON.
    /// - [`GraphqlError::Token`] if the token provider fails.
    /// - [`GraphqlError::Encode`] if the variables cannot be serialized.
    pub async fn invoke(
        &self,
        query: &str,
        variables: Option<Value>,
        options: CallOptions,
    ) -> Result<Arc<Value>, GraphqlError> {
        let request = GraphqlRequest::new(query, variables.as_ref());
        let body = request.to_body().map_err(GraphqlError::Encode)?;

        let cache = if options.no_cache || request.is_mutation() {
            None
        } else {
            self.cache.as_deref()
        };

        if let Some(data) = cache.and_then(|cache| cache.get(&body)) {
            tracing::trace!(url = %self.url, "Serving GraphQL response from cache");
            return Ok(data);
        }

        let token = match &self.token {
            Some(token) => Some(token.resolve().await?),
            None => None,
        };
        let headers = request_headers(&self.headers(), token.as_deref());

        let response = self
            .transport
            .send(
                self.url.as_ref(),
                HttpRequest::new(HttpMethod::Post, headers, body.clone()),
            )
            .await?;
        let mut payload = response.json().map_err(GraphqlError::Decode)?;

        let errors = payload.get_mut("errors").map_or(Value::Null, Value::take);
        if !errors.is_null() {
            self.error_sink.report(&errors);
            return Err(UpstreamError::new(errors).into());
        }

        let data = Arc::new(payload.get_mut("data").map_or(Value::Null, Value::take));
        if let Some(cache) = cache.filter(|_| !data.is_null()) {
            tracing::trace!(url = %self.url, "Caching GraphQL response");
            cache.set(body, Arc::clone(&data));
        }

        Ok(data)
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("url", &self.url)
            .field("cache", &self.cache.is_some())
            .field("error_sink", &self.error_sink)
            .field("token", &self.token)
            .field("headers", &self.headers())
            .finish_non_exhaustive()
    }
}
