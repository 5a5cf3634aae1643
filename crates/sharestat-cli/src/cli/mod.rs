//! CLI for the sharestat popularity lookup.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sharestat_core::config;
use sharestat_core::count_api::CountEndpoint;

use commands::{run_classify, run_completions, run_count};

/// Top-level CLI for the sharestat popularity lookup.
#[derive(Debug, Parser)]
#[command(name = "sharestat")]
#[command(about = "sharestat: URL share-count lookup and popularity classification", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify one or more URLs by share count.
    Classify {
        /// URLs to classify. Values are forwarded to the counting endpoint
        /// as-is; pre-encode reserved characters.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print each report as a JSON object, one per line.
        #[arg(long)]
        json: bool,
        /// Counting endpoint base URL (overrides the configured one).
        #[arg(long, value_name = "BASE")]
        endpoint: Option<String>,
    },

    /// Look up the raw share count for a URL.
    Count {
        /// URL to look up. Pre-encode reserved characters.
        url: String,
        /// Print the count response as JSON.
        #[arg(long)]
        json: bool,
        /// Counting endpoint base URL (overrides the configured one).
        #[arg(long, value_name = "BASE")]
        endpoint: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Classify {
                urls,
                json,
                endpoint,
            } => {
                let endpoint = resolve_endpoint(endpoint.as_deref())?;
                run_classify(endpoint, &urls, json).await?;
            }
            CliCommand::Count {
                url,
                json,
                endpoint,
            } => {
                let endpoint = resolve_endpoint(endpoint.as_deref())?;
                run_count(endpoint, &url, json).await?;
            }
            // Completions never touch the config file.
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

/// The `--endpoint` flag wins over the configured base; the config file is
/// only read (or created) when the flag is absent.
fn resolve_endpoint(flag: Option<&str>) -> Result<CountEndpoint> {
    if let Some(base) = flag {
        return Ok(CountEndpoint::new(base));
    }
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(CountEndpoint::new(cfg.endpoint_base))
}
