//! Error types for startup and for individual news fetches.
//!
//! Two families are kept apart:
//! - [`Error`]: failures that stop the program before the shell starts
//!   (configuration, client construction, console I/O).
//! - [`FetchError`]: failures of one search request. The fetch layer turns
//!   these into an absent result plus a printed diagnostic, so they never end
//!   the session.

use std::time::Duration;
use thiserror::Error;

/// Startup and console errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single search request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The API answered with something other than `200 OK`.
    #[error("API returned status code {status}")]
    Status { status: u16, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// DNS, connection or TLS fault.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Body did not match the expected response shape.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Classify a transport error, splitting out elapsed timeouts.
    pub fn from_transport(e: reqwest::Error, timeout: Duration) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(timeout)
        } else {
            FetchError::Network(e)
        }
    }
}
