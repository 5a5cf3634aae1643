//! `sharestat classify <URL>...` – classify URLs by share count.

use anyhow::{Context, Result};
use sharestat_core::client::PopularityClient;
use sharestat_core::count_api::CountEndpoint;

pub async fn run_classify(endpoint: CountEndpoint, urls: &[String], json: bool) -> Result<()> {
    let client = PopularityClient::new(endpoint);

    // Lookups are independent, so run one task per URL and report in input
    // order.
    let mut tasks = Vec::with_capacity(urls.len());
    for url in urls {
        let client = client.clone();
        let url = url.clone();
        tasks.push(tokio::spawn(async move {
            let result = client.classify(&url).await;
            (url, result)
        }));
    }

    let mut failures = 0usize;
    for task in tasks {
        let (url, result) = task.await.context("classify task join")?;
        match result {
            Ok(report) => {
                if json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!("{:<8} {}", report.popularity.to_string(), report.url);
                }
            }
            Err(err) => {
                failures += 1;
                eprintln!("{}: {}", url, err);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} lookups failed", failures, urls.len());
    }
    Ok(())
}
