//! Popularity report returned to callers.

use serde::Serialize;

use crate::count_api::CountResponse;
use crate::popularity::{classify_count, Popularity};

/// Result of one classification: the canonical URL and its popularity label.
///
/// The `url` is the one the remote service reported, not the caller's input;
/// the remote's canonical form is authoritative. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularityReport {
    pub url: String,
    pub popularity: Popularity,
}

impl PopularityReport {
    /// Derives a report from a count response.
    pub fn from_response(response: CountResponse) -> Self {
        PopularityReport {
            popularity: classify_count(response.count),
            url: response.url,
        }
    }
}
