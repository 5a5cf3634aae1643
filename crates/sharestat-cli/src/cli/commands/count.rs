//! `sharestat count <URL>` – look up the raw share count.

use anyhow::Result;
use sharestat_core::client::PopularityClient;
use sharestat_core::count_api::CountEndpoint;

pub async fn run_count(endpoint: CountEndpoint, url: &str, json: bool) -> Result<()> {
    let client = PopularityClient::new(endpoint);
    let response = client.count(url).await?;
    if json {
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{:<8} {}", response.count, response.url);
    }
    Ok(())
}
