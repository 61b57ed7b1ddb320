//! API base URL type.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated API server base URL.
///
/// All endpoint paths live under the fixed `/api` prefix on this base.
/// Must be HTTPS, or HTTP for localhost.
///
/// # Example
///
/// ```
/// use gramlist_core::ApiUrl;
///
/// let base = ApiUrl::new("https://app.gramlist.io").unwrap();
/// assert_eq!(
///     base.endpoint_url("/auth/login"),
///     "https://app.gramlist.io/api/auth/login"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute http(s), or uses plain
    /// HTTP against a non-localhost host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for an endpoint path under the `/api` prefix.
    ///
    /// `path` is the endpoint as the backend names it, starting with `/`.
    pub fn endpoint_url(&self, path: &str) -> String {
        // The url crate keeps a trailing slash on root paths.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/api{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = ApiUrl::new("https://app.gramlist.io").unwrap();
        assert_eq!(
            base.endpoint_url("/analytics/dashboard"),
            "https://app.gramlist.io/api/analytics/dashboard"
        );
    }

    #[test]
    fn valid_localhost_http() {
        let base = ApiUrl::new("http://localhost:5000").unwrap();
        assert_eq!(
            base.endpoint_url("/auth/user"),
            "http://localhost:5000/api/auth/user"
        );
    }

    #[test]
    fn normalizes_trailing_slash() {
        let base = ApiUrl::new("https://app.gramlist.io/").unwrap();
        assert_eq!(
            base.endpoint_url("/auth/login"),
            "https://app.gramlist.io/api/auth/login"
        );
    }

    #[test]
    fn rejects_http_on_non_localhost() {
        assert!(ApiUrl::new("http://app.gramlist.io").is_err());
    }

    #[test]
    fn rejects_relative_url() {
        assert!(ApiUrl::new("/api/auth/login").is_err());
    }
}
