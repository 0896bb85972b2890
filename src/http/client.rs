//! HTTP client with retry and rate limiting
//!
//! Every request is a GET against the configured base URL. Each attempt is
//! classified as a success, a transient failure (retried with backoff) or a
//! fatal failure.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use crate::types::BackoffType;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL that relative paths are joined to
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Upper bound for any retry delay
    pub max_backoff: Duration,
    pub backoff_type: BackoffType,
    pub rate_limit: Option<RateLimiterConfig>,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(10),
            backoff_type: BackoffType::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: HashMap::new(),
            user_agent: format!("brewery-browser/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the backoff strategy and its delay bounds
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Limit requests with a token bucket; `None` disables limiting
    pub fn rate_limit(mut self, config: Option<RateLimiterConfig>) -> Self {
        self.config.rate_limit = config;
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Query parameters for a single request, sent in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Result of one attempt at a request
enum Attempt {
    Success(Response),
    /// Worth retrying; `wait` overrides the computed backoff
    Transient { error: Error, wait: Option<Duration> },
    Fatal(Error),
}

/// HTTP client with retry and rate limiting
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// GET `path` and parse the body as JSON
    ///
    /// A body that does not match `T` is reported as [`Error::Decode`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &RequestConfig,
    ) -> Result<T> {
        let response = self.send(path, request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
    }

    /// Send a GET, retrying transient failures until `max_retries` is spent
    async fn send(&self, path: &str, request: &RequestConfig) -> Result<Response> {
        let url = self.build_url(path);
        let max_retries = self.config.max_retries;
        let mut attempt = 0;

        loop {
            if let Some(limiter) = &self.rate_limiter {
                limiter.wait().await;
            }

            match self.attempt(&url, request).await {
                Attempt::Success(response) => {
                    debug!(url = %url, attempt, "Request succeeded");
                    return Ok(response);
                }
                Attempt::Transient { error, wait } if attempt < max_retries => {
                    let delay = wait.unwrap_or_else(|| self.calculate_backoff(attempt));
                    warn!(
                        error = %error,
                        attempt = attempt + 1,
                        attempts = max_retries + 1,
                        ?delay,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Attempt::Transient { error, .. } | Attempt::Fatal(error) => return Err(error),
            }
        }
    }

    async fn attempt(&self, url: &str, request: &RequestConfig) -> Attempt {
        let mut req = self.client.get(url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        match req.send().await {
            Ok(response) => classify(response).await,
            Err(e) if e.is_timeout() => Attempt::Transient {
                error: Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                },
                wait: None,
            },
            Err(e) if e.is_connect() => Attempt::Transient {
                error: Error::Http(e),
                wait: None,
            },
            Err(e) => Attempt::Fatal(Error::Http(e)),
        }
    }

    /// URL of `segment` as one percent-encoded path segment under the base URL
    pub fn segment_url(&self, segment: &str) -> Result<String> {
        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config("HTTP client has no base URL"))?;
        let mut url = Url::parse(base)?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("Base URL '{base}' cannot take a path")))?
            .pop_if_empty()
            .push(segment);
        Ok(url.into())
    }

    /// Join a relative path to the base URL; absolute URLs pass through
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                if path.is_empty() {
                    base.to_string()
                } else {
                    format!("{base}/{path}")
                }
            }
            None => path.to_string(),
        }
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let initial = self.config.initial_backoff;
        let delay = match self.config.backoff_type {
            BackoffType::Constant => initial,
            BackoffType::Linear => initial.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => initial.saturating_mul(2u32.saturating_pow(attempt)),
        };

        delay.min(self.config.max_backoff)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Sort a response into success, retryable or fatal by its status
async fn classify(response: Response) -> Attempt {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = extract_retry_after(&response);
        return Attempt::Transient {
            error: Error::RateLimited {
                retry_after_seconds: retry_after,
            },
            wait: Some(Duration::from_secs(retry_after)),
        };
    }

    if !status.is_client_error() && !status.is_server_error() {
        return Attempt::Success(response);
    }

    let body = response.text().await.unwrap_or_default();
    let error = Error::http_status(status.as_u16(), body);
    if error.is_retryable() {
        Attempt::Transient { error, wait: None }
    } else {
        Attempt::Fatal(error)
    }
}

/// Seconds from a `Retry-After` header, 60 when absent or unparseable
fn extract_retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(60)
}
