//! GraphQL dispatcher and its supporting types.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Dispatcher`]: sends operations and returns their `data` payload
//! - [`GraphqlRequest`]: the `{query, variables}` body, also used as cache key
//! - [`CallOptions`]: per-call options (`no_cache`)
//! - [`HeaderUpdate`]: replacement or transform for the base headers
//! - [`ErrorSink`] / [`TraceLogger`]: where upstream `errors` are reported
//! - [`GraphqlError`] / [`UpstreamError`]: failure types
//!
//! # Response Structure
//!
//! The endpoint is expected to answer with a JSON object holding either
//! `data` (success) or `errors` (failure). The `errors` value is opaque to
//! this crate and is handed back unchanged.
//!
//! # Caching
//!
//! With a cache configured, successful query results are stored under the
//! serialized request body. Mutations, failed calls and calls made with
//! [`CallOptions::uncached`] never write to the cache.

mod client;
mod errors;
mod headers;
mod logger;
mod request;

pub use client::Dispatcher;
pub use errors::{GraphqlError, UpstreamError};
pub use headers::{HeaderUpdate, JSON_CONTENT_TYPE};
pub use logger::{ErrorSink, TraceLogger};
pub use request::{CallOptions, GraphqlRequest};
