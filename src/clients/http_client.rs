//! Transport abstraction and the `reqwest`-backed default.
//!
//! This module provides the [`Transport`] trait the dispatcher sends requests
//! through, and [`ReqwestTransport`], an implementation on top of
//! `reqwest::Client`.
//!
//! Any `Fn(String, HttpRequest) -> impl Future<Output = Result<HttpResponse,
//! TransportError>>` closure is also a [`Transport`], which keeps test doubles
//! and adapters short.

use std::future::Future;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Performs the network call for a prepared request.
///
/// Implementations return the response regardless of its status code and
/// only fail when no response could be obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` to `url` and returns the raw response.
    async fn send(&self, url: &str, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<F, Fut> Transport for F
where
    F: Fn(String, HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HttpResponse, TransportError>> + Send + 'static,
{
    async fn send(&self, url: &str, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self(url.to_string(), request).await
    }
}

/// HTTP transport built on `reqwest`.
///
/// # Thread Safety
///
/// `ReqwestTransport` is `Send + Sync` and cheap to clone; clones share the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use graphql_dispatch::{Dispatcher, ReqwestTransport};
///
/// let dispatcher = Dispatcher::builder()
///     .transport(ReqwestTransport::new()?)
///     .url("https://api.example.com/graphql")
///     .build()
///     .map(Dispatcher::new)?;
/// ```
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a rustls-backed client and a default
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying client cannot be
    /// created (e.g., TLS initialization failure).
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(format!("graphql-dispatch v{SDK_VERSION}"))
            .build()?;
        Ok(Self { client })
    }

    /// Creates a transport around an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!(method = %request.method, url, "Sending GraphQL request");

        let mut req_builder = match request.method {
            HttpMethod::Post => self.client.post(url),
        };
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(request.body).send().await?;

        let code = res.status().as_u16();
        let body = res.text().await?;

        tracing::debug!(code, url, "Received GraphQL response");

        Ok(HttpResponse::new(code, body))
    }
}
