//! GraphQL request body and per-call options.

use serde::Serialize;
use serde_json::Value;

/// The `{query, variables}` pair sent to the endpoint.
///
/// The serialized form produced by [`GraphqlRequest::to_body`] is both the
/// wire body and the cache key. Fields are emitted as `query` then
/// `variables`, and `serde_json` writes object keys in sorted order, so equal
/// requests always produce byte-identical bodies.
///
/// # Example
///
/// ```rust
/// use graphql_dispatch::GraphqlRequest;
/// use serde_json::json;
///
/// let variables = json!({"id": "3"});
/// let request = GraphqlRequest::new("query GetUser($id: String!) { user(id: $id) { id } }", Some(&variables));
/// assert_eq!(
///     request.to_body().unwrap(),
///     r#"{"query":"query GetUser($id: String!) { user(id: $id) { id } }","variables":{"id":"3"}}"#
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

impl<'a> GraphqlRequest<'a> {
    /// Creates a request from a query string and optional variables.
    #[must_use]
    pub const fn new(query: &'a str, variables: Option<&'a Value>) -> Self {
        Self { query, variables }
    }

    /// Returns the query text.
    #[must_use]
    pub const fn query(&self) -> &'a str {
        self.query
    }

    /// Returns the variables, if any.
    #[must_use]
    pub const fn variables(&self) -> Option<&'a Value> {
        self.variables
    }

    /// Serializes the request to its compact JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the variables cannot be serialized.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Returns `true` if the trimmed query text starts with `mutation`.
    ///
    /// This is a textual check, not a parse: a comment or any other token
    /// before the keyword makes the operation look like a query.
    ///
    /// ```rust
    /// use graphql_dispatch::GraphqlRequest;
    ///
    /// assert!(GraphqlRequest::new("\n  mutation AddUser { addUser { id } }", None).is_mutation());
    /// assert!(!GraphqlRequest::new("query { user { id } }", None).is_mutation());
    /// ```
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        self.query.trim().starts_with("mutation")
    }
}

/// Options for a single [`Dispatcher::invoke`](crate::Dispatcher::invoke) call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Skip the cache lookup and the cache store for this call.
    pub no_cache: bool,
}

impl CallOptions {
    /// Options that bypass the cache.
    #[must_use]
    pub const fn uncached() -> Self {
        Self { no_cache: true }
    }
}
