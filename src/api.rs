//! News search API client.
//!
//! This module issues the single HTTP request behind each search and turns the
//! response into a [`SearchResult`].
//!
//! # Architecture
//!
//! - [`NewsSource`]: Core trait defining an async article search
//! - [`NewsApiClient`]: NewsAPI `/everything` implementation backed by `reqwest`
//! - [`fetch_news`]: Wraps any [`NewsSource`] with console progress output and
//!   converts failures into an absent result
//!
//! # Failure Policy
//!
//! One attempt per search, bounded by the configured timeout. A non-200
//! status, a transport fault or an unparseable body all end the call at once;
//! there is no retry.

use crate::config::NewsApiConfig;
use crate::error::{FetchError, Result};
use crate::models::{ApiErrorBody, SearchQuery, SearchResult};
use crate::utils::truncate_for_log;
use reqwest::{Client, StatusCode};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Trait for searching a news backend.
///
/// Implementors take a query and return the parsed result page. The
/// interactive shell only talks to this trait, which lets tests substitute a
/// canned source for the network.
pub trait NewsSource {
    /// Run one search.
    ///
    /// # Errors
    ///
    /// Any [`FetchError`]: bad status, timeout, network fault or malformed body.
    async fn search(&self, query: &SearchQuery) -> std::result::Result<SearchResult, FetchError>;
}

/// Client for the NewsAPI `/everything` endpoint.
pub struct NewsApiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    language: String,
    sort_by: String,
    timeout: Duration,
}

impl std::fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl NewsApiClient {
    /// Build a client from a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client cannot be
    /// constructed (e.g. TLS backend initialization fails).
    pub fn new(config: &NewsApiConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = Url::parse(&format!(
            "{}/everything",
            config.base_url.trim_end_matches('/')
        ))?;
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            sort_by: config.sort_by.clone(),
            timeout: config.timeout(),
        })
    }

    /// Full request URL for a query, API key included.
    pub fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &query.topic)
            .append_pair("pageSize", &query.max_results.to_string())
            .append_pair("apiKey", &self.api_key)
            .append_pair("language", &self.language)
            .append_pair("sortBy", &self.sort_by);
        url
    }
}

impl NewsSource for NewsApiClient {
    #[instrument(level = "info", skip_all, fields(topic = %query.topic, page_size = query.max_results))]
    async fn search(&self, query: &SearchQuery) -> std::result::Result<SearchResult, FetchError> {
        let t0 = Instant::now();
        let response = self
            .http
            .get(self.request_url(query))
            .send()
            .await
            .map_err(|e| FetchError::from_transport(e, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_transport(e, self.timeout))?;
        let dt = t0.elapsed();

        if status != StatusCode::OK {
            warn!(
                status = status.as_u16(),
                elapsed_ms = dt.as_millis() as u64,
                body_preview = %truncate_for_log(&body, 300),
                "News API returned an error status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result = SearchResult::from_json(&body, query.max_results).inspect_err(|e| {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 300),
                "News API response did not match the expected shape"
            )
        })?;
        info!(
            elapsed_ms = dt.as_millis() as u64,
            total_results = result.total_results,
            fetched = result.articles.len(),
            "Search succeeded"
        );
        Ok(result)
    }
}

/// Run one search with progress messages on `out`.
///
/// Every [`FetchError`] is printed as a diagnostic and reported as `None`, so
/// callers only see "results" or "no results".
///
/// # Errors
///
/// Only failures writing to `out` are returned.
#[instrument(level = "debug", skip_all, fields(topic = %query.topic))]
pub async fn fetch_news<S, W>(
    source: &S,
    query: &SearchQuery,
    out: &mut W,
) -> io::Result<Option<SearchResult>>
where
    S: NewsSource,
    W: Write,
{
    writeln!(out, "\n🔍 Searching for news about: '{}'", query.topic)?;
    writeln!(out, "📊 Requesting up to {} articles...", query.max_results)?;
    writeln!(out, "📡 Connecting to NewsAPI...")?;
    out.flush()?;

    match source.search(query).await {
        Ok(result) => {
            writeln!(out, "✅ Successfully fetched news!\n")?;
            Ok(Some(result))
        }
        Err(e) => {
            debug!(error = %e, "Search failed");
            report_failure(out, &e)?;
            Ok(None)
        }
    }
}

fn report_failure<W: Write>(out: &mut W, e: &FetchError) -> io::Result<()> {
    match e {
        FetchError::Status { status, body } => {
            writeln!(out, "❌ Error: API returned status code {status}")?;
            match ApiErrorBody::parse(body) {
                Some(ApiErrorBody {
                    code: Some(code),
                    message: Some(message),
                    ..
                }) => writeln!(out, "Error message: {message} ({code})"),
                Some(ApiErrorBody {
                    message: Some(message),
                    ..
                }) => writeln!(out, "Error message: {message}"),
                _ => writeln!(out, "Error message: {body}"),
            }
        }
        FetchError::Timeout(after) => {
            writeln!(out, "❌ Network error occurred: no response within {after:?}")
        }
        FetchError::Network(inner) => writeln!(out, "❌ Network error occurred: {inner}"),
        FetchError::Malformed(inner) => {
            writeln!(out, "❌ Unexpected response from NewsAPI: {inner}")
        }
    }
}
