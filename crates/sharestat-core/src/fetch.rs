//! Transport seam for the count lookup.
//!
//! The classifier only depends on the [`Fetch`] trait; the production
//! implementation performs the GET with the curl crate (libcurl).

use curl::easy::Easy;
use thiserror::Error;

/// Error produced by a count lookup: the transport failed, or the body was
/// not the expected count document. There is no third path; the HTTP status
/// line is not consulted.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, socket). The underlying
    /// curl error is surfaced unchanged; no retry is attempted.
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Response body could not be decoded into the count structure.
    #[error("malformed count response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Capability to perform one blocking HTTP GET and return the response body.
///
/// Implemented by [`CurlFetcher`] for production; any other implementation
/// can be injected through `PopularityClient::with_fetcher`.
pub trait Fetch: Send + Sync {
    /// Performs a GET against `url` and returns the raw body.
    ///
    /// Runs in the current thread; call from `spawn_blocking` if used from
    /// async code.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetcher backed by the curl crate.
///
/// Follows redirects. Sets no explicit timeouts (libcurl defaults apply) and
/// returns the body of any completed exchange regardless of status code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher;

impl Fetch for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        // Non-UTF-8 bytes survive into the body and fail at the decode step.
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
