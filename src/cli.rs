//! Command-line interface definitions for Topic News.
//!
//! All connection settings can be given as flags or environment variables.
//! Without `--topic` the program starts the interactive shell.

use crate::config::ConfigOverrides;
use clap::Parser;

/// Command-line arguments for the Topic News application.
///
/// # Examples
///
/// ```sh
/// # Interactive shell, key from the environment
/// NEWS_API_KEY=... topic_news
///
/// # One search, then exit
/// topic_news --api-key ... --topic "electric vehicles" -n 3
///
/// # Settings from a YAML file
/// topic_news -c ~/.config/topic_news.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// NewsAPI key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the news API (default https://newsapi.org/v2)
    #[arg(long, env = "NEWS_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default 30)
    #[arg(long, env = "NEWS_API_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Article language filter (default en)
    #[arg(long)]
    pub language: Option<String>,

    /// Sort order: publishedAt, relevancy or popularity (default publishedAt)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Search once for this topic and exit instead of starting the shell
    #[arg(short, long, value_parser = parse_topic)]
    pub topic: Option<String>,

    /// Number of articles for --topic (1-10)
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub count: u8,
}

/// Trimmed topic; blank input is rejected like in the shell.
fn parse_topic(s: &str) -> Result<String, String> {
    let topic = s.trim();
    if topic.is_empty() {
        return Err("topic must not be empty".to_string());
    }
    Ok(topic.to_string())
}

impl Cli {
    /// Connection settings given on the command line or in the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            language: self.language.clone(),
            sort_by: self.sort_by.clone(),
        }
    }
}
