//! # Topic News
//!
//! Search a news API for articles about a topic and print readable summaries
//! in the terminal.
//!
//! ## Usage
//!
//! ```sh
//! # Interactive shell
//! NEWS_API_KEY=... topic_news
//!
//! # Single search
//! topic_news --api-key ... --topic "electric vehicles" -n 3
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: flags, environment and optional YAML merged into a
//!    [`config::NewsApiConfig`]
//! 2. **Fetching**: [`api::NewsApiClient`] issues one bounded GET per search
//!    and parses the JSON into typed [`models::SearchResult`]s
//! 3. **Presentation**: [`shell::Shell`] drives the prompt loop and
//!    [`outputs::summary`] renders results
//!
//! Results go to stdout; tracing logs go to stderr.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod shell;
mod utils;

use api::{NewsApiClient, NewsSource, fetch_news};
use cli::Cli;
use config::NewsApiConfig;
use models::SearchQuery;
use outputs::summary::display_results;
use shell::Shell;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Fatal error");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

#[instrument(skip_all)]
async fn run(args: Cli) -> error::Result<ExitCode> {
    let start_time = std::time::Instant::now();

    let base = match &args.config {
        Some(path) => NewsApiConfig::from_yaml_file(path)?,
        None => NewsApiConfig::default(),
    };
    let config = base.merge(args.overrides());
    info!(?config, "Resolved configuration");

    let client = NewsApiClient::new(&config)?;

    let code = match args.topic {
        Some(topic) => {
            let query = SearchQuery::new(topic, args.count);
            let found = one_shot(&client, &query, &mut io::stdout().lock()).await?;
            if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&client, stdin.lock(), stdout.lock()).run().await?;
            ExitCode::SUCCESS
        }
    };

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(code)
}

/// Single search without prompting. Returns whether any articles were shown.
async fn one_shot<S, W>(source: &S, query: &SearchQuery, out: &mut W) -> error::Result<bool>
where
    S: NewsSource,
    W: Write,
{
    let result = fetch_news(source, query, out).await?;

    let found = match result {
        Some(result) if !result.is_empty() => {
            display_results(out, &result)?;
            true
        }
        _ => {
            writeln!(out, "❌ No articles found or error occurred.")?;
            false
        }
    };
    out.flush()?;
    Ok(found)
}
