//! HTTP request types handed to a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;
use std::fmt;

/// HTTP methods issued by the dispatcher.
///
/// GraphQL operations are always sent as POST.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HttpMethod {
    /// HTTP POST method.
    Post,
}

impl HttpMethod {
    /// Returns the upper-case method name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully prepared HTTP request.
///
/// The target URL is passed to the transport separately.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use graphql_dispatch::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::new(
///     HttpMethod::Post,
///     HashMap::from([("content-type".to_string(), "application/json".to_string())]),
///     r#"{"query":"{ ping }"}"#,
/// );
/// assert_eq!(request.header("Content-Type"), Some("application/json"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Request headers, keyed by lower-case name.
    pub headers: HashMap<String, String>,
    /// The serialized request body.
    pub body: String,
}

impl HttpRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(method: HttpMethod, headers: HashMap<String, String>, body: impl Into<String>) -> Self {
        Self {
            method,
            headers,
            body: body.into(),
        }
    }

    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
