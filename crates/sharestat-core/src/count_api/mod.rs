//! Remote counting endpoint model.
//!
//! Builds the request URL for the share-count service and decodes its JSON
//! response into a typed structure.

mod parse;

pub use parse::{decode_count_body, CountResponse};

/// Base URL of the public counting service used when no other endpoint is
/// configured.
pub const DEFAULT_BASE: &str = "http://urls.api.twitter.com/1";

/// A counting endpoint reachable at `<base>/urls/count.json?url=<url>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEndpoint {
    base: String,
}

impl Default for CountEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}

impl CountEndpoint {
    /// Creates an endpoint from a base URL. Trailing slashes are trimmed so
    /// both `http://host/1` and `http://host/1/` produce the same requests.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        CountEndpoint { base }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds the count request URL for `url`.
    ///
    /// The value is embedded by plain concatenation, with no percent
    /// escaping: callers must pre-encode URLs containing reserved
    /// characters.
    ///
    /// # Examples
    ///
    /// - `CountEndpoint::default().count_url("reddit.com")` →
    ///   `"http://urls.api.twitter.com/1/urls/count.json?url=reddit.com"`
    pub fn count_url(&self, url: &str) -> String {
        format!("{}/urls/count.json?url={}", self.base, url)
    }
}
