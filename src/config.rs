//! NewsAPI connection settings.
//!
//! [`NewsApiConfig`] is built once at startup and handed to the client, so
//! nothing reads credentials from global state. Values come from, in order of
//! precedence: command-line flags / environment variables (see [`crate::cli`]),
//! an optional YAML file, then built-in defaults.
//!
//! ```yaml
//! api_key: "0123456789abcdef"
//! base_url: "https://newsapi.org/v2"
//! timeout_secs: 30
//! language: "en"
//! sort_by: "publishedAt"
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SORT_BY: &str = "publishedAt";

#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewsApiConfig {
    pub api_key: String,
    pub base_url: String,
    /// Upper bound on a single request, connect through body.
    pub timeout_secs: u64,
    pub language: String,
    pub sort_by: String,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: DEFAULT_LANGUAGE.to_string(),
            sort_by: DEFAULT_SORT_BY.to_string(),
        }
    }
}

impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .finish()
    }
}

/// Values supplied on the command line or through the environment.
///
/// `None` leaves the file/default value untouched.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub language: Option<String>,
    pub sort_by: Option<String>,
}

impl NewsApiConfig {
    /// Read a YAML config file. Missing keys take their defaults.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: NewsApiConfig = serde_yaml::from_str(&text)?;
        debug!(?config, "Loaded config file");
        Ok(config)
    }

    /// Apply overrides on top of this config.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(v) = overrides.api_key {
            self.api_key = v;
        }
        if let Some(v) = overrides.base_url {
            self.base_url = v;
        }
        if let Some(v) = overrides.timeout_secs {
            self.timeout_secs = v;
        }
        if let Some(v) = overrides.language {
            self.language = v;
        }
        if let Some(v) = overrides.sort_by {
            self.sort_by = v;
        }
        self
    }

    /// Check that the config can be used to build a client.
    ///
    /// # Errors
    ///
    /// - the API key is empty
    /// - the timeout is zero
    /// - the base URL does not parse
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config(
                "missing API key (set --api-key, NEWS_API_KEY or api_key in the config file)"
                    .to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than 0".to_string()));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid() -> NewsApiConfig {
        NewsApiConfig {
            api_key: "secret".to_string(),
            ..NewsApiConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = NewsApiConfig::default();
        assert_eq!(config.base_url, "https://newsapi.org/v2");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.language, "en");
        assert_eq!(config.sort_by, "publishedAt");
    }

    #[test]
    fn test_from_yaml_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: abc123\ntimeout_secs: 5").unwrap();

        let config = NewsApiConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let err = NewsApiConfig::from_yaml_file("/nonexistent/topic_news.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_yaml_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: [not, a, number]").unwrap();
        let err = NewsApiConfig::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigFile(_)));
    }

    #[test]
    fn test_merge_overrides_win() {
        let base = NewsApiConfig {
            api_key: "from-file".to_string(),
            timeout_secs: 10,
            ..NewsApiConfig::default()
        };
        let merged = base.merge(ConfigOverrides {
            api_key: Some("from-cli".to_string()),
            base_url: Some("http://localhost:8080".to_string()),
            ..ConfigOverrides::default()
        });
        assert_eq!(merged.api_key, "from-cli");
        assert_eq!(merged.base_url, "http://localhost:8080");
        assert_eq!(merged.timeout_secs, 10);
    }

    #[test]
    fn test_validate() {
        assert!(valid().validate().is_ok());

        let missing_key = NewsApiConfig::default();
        assert!(matches!(missing_key.validate(), Err(Error::Config(_))));

        let zero_timeout = NewsApiConfig {
            timeout_secs: 0,
            ..valid()
        };
        assert!(matches!(zero_timeout.validate(), Err(Error::Config(_))));

        let bad_url = NewsApiConfig {
            base_url: "not a url".to_string(),
            ..valid()
        };
        assert!(matches!(bad_url.validate(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", valid());
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
