//! HTTP response types returned by a [`Transport`](crate::clients::Transport).

/// A raw HTTP response.
///
/// The body is kept as text; [`HttpResponse::json`] decodes it on demand.
/// The status code is informational: a GraphQL endpoint may answer `errors`
/// with any status, so the dispatcher only looks at the body.
///
/// # Example
///
/// ```rust
/// use graphql_dispatch::HttpResponse;
///
/// let response = HttpResponse::new(200, r#"{"data":{"ok":true}}"#);
/// assert_eq!(response.json().unwrap()["data"]["ok"], true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Creates a `200 OK` response carrying the given JSON value.
    #[must_use]
    pub fn from_json(body: &serde_json::Value) -> Self {
        Self::new(200, body.to_string())
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_parses_body() {
        let response = HttpResponse::from_json(&json!({"data": {"id": 1}}));
        assert_eq!(response.code, 200);
        assert_eq!(response.json().unwrap(), json!({"data": {"id": 1}}));
    }

    #[test]
    fn test_json_ignores_status_code() {
        let response = HttpResponse::new(400, r#"{"errors":["bad"]}"#);
        assert_eq!(response.json().unwrap(), json!({"errors": ["bad"]}));
    }

    #[test]
    fn test_json_rejects_non_json_body() {
        let response = HttpResponse::new(502, "<html>Bad Gateway</html>");
        assert!(response.json().is_err());
    }
}
