//! Count lookup client: fetch, decode, classify.

use std::sync::Arc;

use crate::count_api::{decode_count_body, CountEndpoint, CountResponse};
use crate::fetch::{CurlFetcher, Fetch, FetchError};
use crate::report::PopularityReport;

/// Client for the counting endpoint: looks up share counts and classifies
/// them into popularity reports.
///
/// Cheap to clone; clones share the underlying fetcher. Each lookup is one
/// independent GET with no shared state, so concurrent calls do not
/// interfere.
#[derive(Clone)]
pub struct PopularityClient {
    endpoint: CountEndpoint,
    fetcher: Arc<dyn Fetch>,
}

impl PopularityClient {
    /// Creates a client backed by the curl fetcher.
    pub fn new(endpoint: CountEndpoint) -> Self {
        Self::with_fetcher(endpoint, Arc::new(CurlFetcher))
    }

    /// Creates a client with an injected fetch capability.
    pub fn with_fetcher(endpoint: CountEndpoint, fetcher: Arc<dyn Fetch>) -> Self {
        PopularityClient { endpoint, fetcher }
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &CountEndpoint {
        &self.endpoint
    }

    /// Looks up the share count for `url`.
    ///
    /// Runs in the current thread; use [`count`](Self::count) from async
    /// code.
    pub fn count_blocking(&self, url: &str) -> Result<CountResponse, FetchError> {
        lookup(self.fetcher.as_ref(), &self.endpoint.count_url(url))
    }

    /// Classifies `url` by its share count.
    ///
    /// The report carries the canonical URL from the response, not the
    /// caller's `url`. Runs in the current thread; use
    /// [`classify`](Self::classify) from async code.
    pub fn classify_blocking(&self, url: &str) -> Result<PopularityReport, FetchError> {
        Ok(PopularityReport::from_response(self.count_blocking(url)?))
    }

    /// Looks up the share count for `url`, running the transport on the
    /// blocking pool.
    pub async fn count(&self, url: &str) -> Result<CountResponse, FetchError> {
        let fetcher = Arc::clone(&self.fetcher);
        let request_url = self.endpoint.count_url(url);
        match tokio::task::spawn_blocking(move || lookup(fetcher.as_ref(), &request_url)).await {
            Ok(result) => result,
            // spawn_blocking tasks are never aborted; a join failure is a
            // panic inside the fetcher.
            Err(join) => std::panic::resume_unwind(join.into_panic()),
        }
    }

    /// Classifies `url` by its share count.
    ///
    /// One outbound GET per call, no retry, no caching. Transport failures
    /// surface unchanged; a malformed body fails only this call.
    pub async fn classify(&self, url: &str) -> Result<PopularityReport, FetchError> {
        Ok(PopularityReport::from_response(self.count(url).await?))
    }
}

/// One GET plus decode against an already-built request URL.
fn lookup(fetcher: &dyn Fetch, request_url: &str) -> Result<CountResponse, FetchError> {
    tracing::debug!("count lookup: GET {}", request_url);
    let body = fetcher.fetch(request_url)?;
    Ok(decode_count_body(&body)?)
}
