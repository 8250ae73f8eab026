//! Base header updates and per-call header merging.

use std::collections::HashMap;
use std::fmt;

/// Content type sent with every request unless the base headers override it.
pub const JSON_CONTENT_TYPE: &str = "application/json";

type HeaderTransform =
    dyn FnOnce(&HashMap<String, String>) -> HashMap<String, String> + Send;

/// A change to a dispatcher's base headers.
///
/// Passed to [`Dispatcher::set_headers`](crate::Dispatcher::set_headers).
/// Either way, the result replaces the previous map as a whole.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use graphql_dispatch::HeaderUpdate;
///
/// // Replace the whole map
/// let update: HeaderUpdate = HashMap::from([("x-tenant".to_string(), "acme".to_string())]).into();
///
/// // Derive the new map from the current one
/// let update = HeaderUpdate::transform(|current| {
///     let mut next = current.clone();
///     next.remove("x-tenant");
///     next
/// });
/// ```
pub enum HeaderUpdate {
    /// Use this map as the new base headers.
    Replace(HashMap<String, String>),

    /// Compute the new base headers from the current ones.
    Transform(Box<HeaderTransform>),
}

impl HeaderUpdate {
    /// Creates a transform update.
    #[must_use]
    pub fn transform<F>(transform: F) -> Self
    where
        F: FnOnce(&HashMap<String, String>) -> HashMap<String, String> + Send + 'static,
    {
        Self::Transform(Box::new(transform))
    }

    /// Produces the new base headers from `current`.
    #[must_use]
    pub fn apply(self, current: &HashMap<String, String>) -> HashMap<String, String> {
        match self {
            Self::Replace(headers) => headers,
            Self::Transform(transform) => transform(current),
        }
    }
}

impl From<HashMap<String, String>> for HeaderUpdate {
    fn from(headers: HashMap<String, String>) -> Self {
        Self::Replace(headers)
    }
}

impl fmt::Debug for HeaderUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace(headers) => f.debug_tuple("HeaderUpdate::Replace").field(headers).finish(),
            Self::Transform(_) => f.write_str("HeaderUpdate::Transform(..)"),
        }
    }
}

/// Builds the headers for one request.
///
/// Starts from `content-type: application/json`, overlays `base` (names are
/// lower-cased, so a base `Content-Type` replaces the default), then sets
/// `authorization: Bearer <token>` when a non-empty token is given.
///
/// When several base names differ only in case, a name already written in
/// lower case wins; otherwise the smallest name in byte order wins
/// (`CONTENT-TYPE` over `Content-Type`).
pub(crate) fn request_headers(
    base: &HashMap<String, String>,
    token: Option<&str>,
) -> HashMap<String, String> {
    let mut ordered: Vec<_> = base.iter().collect();
    // Later inserts win: lower-case names last, then descending by name.
    ordered.sort_by(|(a, _), (b, _)| {
        is_lower(a)
            .cmp(&is_lower(b))
            .then_with(|| b.cmp(a))
    });

    let mut headers = HashMap::with_capacity(base.len() + 2);
    headers.insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
    for (name, value) in ordered {
        headers.insert(name.to_ascii_lowercase(), value.clone());
    }
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.insert("authorization".to_string(), format!("Bearer {token}"));
    }
    headers
}

fn is_lower(name: &str) -> bool {
    !name.bytes().any(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_replace_ignores_current() {
        let current = map(&[("a", "1")]);
        let next = HeaderUpdate::from(map(&[("b", "2")])).apply(&current);
        assert_eq!(next, map(&[("b", "2")]));
    }

    #[test]
    fn test_transform_sees_current() {
        let current = map(&[("a", "1")]);
        let next = HeaderUpdate::transform(|current| {
            let mut next = current.clone();
            next.insert("b".to_string(), "2".to_string());
            next
        })
        .apply(&current);
        assert_eq!(next, map(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_request_headers_default_content_type() {
        let headers = request_headers(&HashMap::new(), None);
        assert_eq!(headers, map(&[("content-type", "application/json")]));
    }

    #[test]
    fn test_request_headers_base_overrides_content_type() {
        let base = map(&[("Content-Type", "application/graphql+json"), ("X-Tenant", "acme")]);
        let headers = request_headers(&base, None);

        assert_eq!(
            headers,
            map(&[
                ("content-type", "application/graphql+json"),
                ("x-tenant", "acme"),
            ])
        );
    }

    #[test]
    fn test_request_headers_lower_case_name_wins_collision() {
        let base = map(&[
            ("Content-Type", "application/graphql+json"),
            ("content-type", "text/plain"),
            ("CONTENT-TYPE", "application/xml"),
        ]);

        // HashMap order varies between instances; the result must not
        for _ in 0..16 {
            let headers = request_headers(&base.clone().into_iter().collect(), None);
            assert_eq!(headers, map(&[("content-type", "text/plain")]));
        }
    }

    #[test]
    fn test_request_headers_mixed_case_collision_is_deterministic() {
        let base = map(&[("X-Tenant", "a"), ("X-TENANT", "b"), ("x-Tenant", "c")]);

        for _ in 0..16 {
            let headers = request_headers(&base.clone().into_iter().collect(), None);
            assert_eq!(headers.get("x-tenant").map(String::as_str), Some("b"));
        }
    }

    #[test]
    fn test_request_headers_token_overrides_base_authorization() {
        let base = map(&[("authorization", "Basic xyz")]);
        let headers = request_headers(&base, Some("abc"));
        assert_eq!(headers.get("authorization").unwrap(), "Bearer abc");
    }

    #[test]
    fn test_request_headers_skips_empty_token() {
        let headers = request_headers(&HashMap::new(), Some(""));
        assert!(!headers.contains_key("authorization"));
    }
}
