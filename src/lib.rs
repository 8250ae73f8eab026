//! # graphql-dispatch
//!
//! A small GraphQL-over-HTTP client: one [`Dispatcher`] builds the request
//! body, serves repeated queries from an optional cache, attaches a bearer
//! token, sends the request through an injected [`Transport`], and hands back
//! the decoded `data` payload or the raw `errors` value.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`DispatcherConfig`] and [`DispatcherConfigBuilder`]
//! - A pluggable [`Transport`], with [`ReqwestTransport`] as a ready-made one
//! - A pluggable [`Cache`], with [`MemoryCache`] as a ready-made one
//! - Static or provider-backed bearer tokens via [`Token`]
//! - Error reporting through a [`TraceLogger`], a closure, or `tracing`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use graphql_dispatch::{Dispatcher, MemoryCache, ReqwestTransport, TokenError};
//! use serde_json::json;
//!
//! let dispatcher = Dispatcher::builder()
//!     .transport(ReqwestTransport::new()?)
//!     .url("https://api.example.com/graphql")
//!     .cache(MemoryCache::new())
//!     .token_async_fn(|| async { Ok::<_, TokenError>("abc".to_string()) })
//!     .build()
//!     .map(Dispatcher::new)?;
//!
//! let data = dispatcher
//!     .query(
//!         "query GetUser($id: String!) { user(id: $id) { id name } }",
//!         Some(json!({ "id": "3" })),
//!     )
//!     .await?;
//! ```
//!
//! ## Caching
//!
//! Results are cached under the serialized `{query, variables}` body. A
//! repeated call returns the stored `Arc` without touching the network.
//! Mutations (queries whose trimmed text starts with `mutation`) and calls
//! made with [`CallOptions::uncached`] bypass the cache entirely.
//!
//! ```rust,ignore
//! use graphql_dispatch::CallOptions;
//!
//! let fresh = dispatcher
//!     .invoke("query { viewer { id } }", None, CallOptions::uncached())
//!     .await?;
//! ```
//!
//! ## Headers
//!
//! Every request carries `content-type: application/json` plus the
//! dispatcher's base headers, which can be swapped at any time:
//!
//! ```rust,ignore
//! use graphql_dispatch::HeaderUpdate;
//!
//! dispatcher.set_headers(HeaderUpdate::transform(|current| {
//!     let mut next = current.clone();
//!     next.insert("x-tenant".to_string(), "acme".to_string());
//!     next
//! }));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the transport is always passed explicitly
//! - **Fail-fast validation**: missing transport or URL fails at build time
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No retries**: failures are returned to the caller unchanged

pub mod auth;
pub mod cache;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{Token, TokenError};
pub use cache::{Cache, MemoryCache};
pub use config::{DispatcherConfig, DispatcherConfigBuilder, EndpointUrl};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};

// Re-export dispatcher types
pub use clients::graphql::{
    CallOptions, Dispatcher, ErrorSink, GraphqlError, GraphqlRequest, HeaderUpdate, TraceLogger,
    UpstreamError,
};
