//! Randomized count-response fixtures.
//!
//! Tests pin only the fields they assert on and let the rest vary, so a
//! test that cares about the count never depends on a particular URL and
//! vice versa.

use rand::Rng;
use sharestat_core::count_api::CountResponse;

/// A response with a random canonical URL and a count that may land in any
/// popularity band.
pub fn count_response() -> CountResponse {
    let mut rng = rand::thread_rng();
    let site: u32 = rng.gen_range(1..=9999);
    CountResponse {
        url: format!("http://site-{}.example/", site),
        count: rng.gen_range(0..=200),
    }
}

/// Like [`count_response`] but with the caller's overrides applied.
pub fn count_response_with(apply: impl FnOnce(&mut CountResponse)) -> CountResponse {
    let mut response = count_response();
    apply(&mut response);
    response
}

/// The JSON body the counting endpoint would serve for `response`.
pub fn count_body(response: &CountResponse) -> String {
    serde_json::to_string(response).expect("count response serializes")
}
