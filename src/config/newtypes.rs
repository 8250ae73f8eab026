//! Newtype wrappers for configuration values.

use crate::error::ConfigError;
use std::fmt;

/// The address a dispatcher sends its requests to.
///
/// The value is handed to the [`Transport`](crate::Transport) exactly as
/// given: no trimming, no normalization, no shape check. A relative path such
/// as `/graphql`, or an address only a custom transport understands, is
/// accepted. Only the empty string is rejected.
///
/// # Example
///
/// ```rust
/// use graphql_dispatch::{ConfigError, EndpointUrl};
///
/// let url = EndpointUrl::new("/graphql").unwrap();
/// assert_eq!(url.as_ref(), "/graphql");
///
/// assert!(matches!(
///     EndpointUrl::new(""),
///     Err(ConfigError::MissingRequiredField { field: "url" })
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(String);

impl EndpointUrl {
    /// Creates a new endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the URL is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "url" });
        }
        Ok(Self(url))
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
