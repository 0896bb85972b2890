//! Configuration types
//!
//! `AppConfig` enumerates every recognized option. It can be loaded from a
//! YAML file; anything left out falls back to its default.
//!
//! ```yaml
//! api:
//!   base_url: https://api.openbrewerydb.org/v1/breweries
//!   timeout_secs: 10
//!   backoff: linear
//! display:
//!   page_size: 10
//!   search_label: Breweries matching
//! ```

use crate::error::{Error, Result};
use crate::fetch::{MAX_PER_PAGE, MAX_RANDOM_SIZE};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Public Open Brewery DB endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openbrewerydb.org/v1/breweries";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote API settings
    pub api: ApiConfig,

    /// Display and paging settings
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {e}",
                    path.display()
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is within its accepted range
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.display.validate()
    }
}

// ============================================================================
// API Config
// ============================================================================

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the breweries collection
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Retries for transient failures
    pub max_retries: u32,

    /// Client-side request rate cap, 0 disables limiting
    pub requests_per_second: u32,

    /// How retry delays grow between attempts
    pub backoff: BackoffType,

    /// Delay before the first retry, in milliseconds
    pub initial_backoff_ms: u64,

    /// Upper bound on any retry delay, in milliseconds
    pub max_backoff_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: 3,
            requests_per_second: 10,
            backoff: BackoffType::Exponential,
            initial_backoff_ms: 100,
            max_backoff_ms: 10_000,
        }
    }
}

impl ApiConfig {
    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::invalid_value("api.base_url", "must not be empty"));
        }
        url::Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("api.timeout_secs", "must be at least 1"));
        }
        if self.max_backoff_ms < self.initial_backoff_ms {
            return Err(Error::invalid_value(
                "api.max_backoff_ms",
                "must not be below api.initial_backoff_ms",
            ));
        }
        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let rate_limit = (self.requests_per_second > 0)
            .then(|| RateLimiterConfig::per_second(self.requests_per_second));

        HttpClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            )
            .rate_limit(rate_limit)
            .header("Accept", "application/json")
            .build()
    }
}

// ============================================================================
// Display Config
// ============================================================================

/// Display and paging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Records per page
    pub page_size: usize,

    /// `per_page` sent with search requests
    pub search_fetch_size: u32,

    /// Size of a random sample
    pub random_sample_size: u32,

    /// Label prefix for search results, followed by the search term
    pub search_label: String,

    /// Label for a random sample
    pub random_label: String,

    /// Shown in place of an empty result list
    pub empty_message: String,

    /// Placeholder for absent fields
    pub missing_value: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_fetch_size: MAX_PER_PAGE,
            random_sample_size: MAX_RANDOM_SIZE,
            search_label: "Search results for".to_string(),
            random_label: "Random breweries".to_string(),
            empty_message: "No breweries found.".to_string(),
            missing_value: "N/A".to_string(),
        }
    }
}

impl DisplayConfig {
    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("display.page_size", "must be at least 1"));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.search_fetch_size) {
            return Err(Error::invalid_value(
                "display.search_fetch_size",
                format!("must be between 1 and {MAX_PER_PAGE}"),
            ));
        }
        if !(1..=MAX_RANDOM_SIZE).contains(&self.random_sample_size) {
            return Err(Error::invalid_value(
                "display.random_sample_size",
                format!("must be between 1 and {MAX_RANDOM_SIZE}"),
            ));
        }
        Ok(())
    }

    /// Label shown above search results
    pub fn search_label_for(&self, term: &str) -> String {
        format!("{} {term}", self.search_label)
    }
}
