//! Decode the counting endpoint's JSON response body.

use serde::{Deserialize, Serialize};

/// Response of the counting endpoint for one URL.
///
/// `url` is the canonical form of the queried URL as the remote service
/// reports it, which may differ from the caller's input (e.g. input
/// `some-url.com`, response `http://some-url.com/`). Unknown fields in the
/// body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// Canonical URL as returned by the remote service.
    pub url: String,
    /// Number of times the URL has been shared.
    pub count: u64,
}

/// Decodes a response body into a [`CountResponse`].
///
/// Any body that is not a JSON document with a non-negative integer `count`
/// and a string `url` is a decode error.
pub fn decode_count_body(body: &str) -> Result<CountResponse, serde_json::Error> {
    serde_json::from_str(body)
}
