//! Transport and dispatcher types.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: the network boundary the dispatcher sends through
//! - [`ReqwestTransport`]: a [`Transport`] built on `reqwest`
//! - [`HttpRequest`] / [`HttpResponse`]: what crosses that boundary
//! - [`HttpMethod`]: the HTTP method of a request
//! - [`TransportError`]: failures reported by a transport
//! - [`graphql::Dispatcher`]: the GraphQL dispatcher
//! - [`graphql::GraphqlError`]: errors returned by the dispatcher
//!
//! # Example
//!
//! ```rust
//! use graphql_dispatch::clients::{HttpRequest, HttpResponse, TransportError};
//!
//! // Any async closure with this shape is a transport
//! let transport = |_url: String, _request: HttpRequest| async {
//!     Ok::<_, TransportError>(HttpResponse::new(200, r#"{"data":{}}"#))
//! };
//! # let _ = transport;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. A transport error is returned to the caller as-is.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::TransportError;
pub use http_client::{ReqwestTransport, Transport, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;

// Re-export GraphQL types at the clients module level
pub use graphql::{Dispatcher, GraphqlError};
