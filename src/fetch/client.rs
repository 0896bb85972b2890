//! Open Brewery DB client

use super::types::{normalize_query, BreweryFetcher, MAX_PER_PAGE, MAX_RANDOM_SIZE};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{Brewery, ResultSet};
use async_trait::async_trait;
use tracing::{debug, info};

/// Sibling endpoints of the breweries collection and dot segments; none of
/// them can name a brewery
const RESERVED_PATHS: &[&str] = &[".", "..", "search", "random", "autocomplete", "meta"];

/// Fetcher backed by the Open Brewery DB REST API
///
/// Paths are resolved against the configured base URL, which points at the
/// breweries collection (`.../v1/breweries`).
#[derive(Debug)]
pub struct OpenBreweryClient {
    http: HttpClient,
}

impl OpenBreweryClient {
    /// Build a client from API settings
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_http(HttpClient::with_config(config.http_config())?))
    }

    /// Wrap an already configured HTTP client
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    async fn fetch_list(
        &self,
        operation: &str,
        path: &str,
        request: RequestConfig,
    ) -> Result<ResultSet> {
        debug!(operation, path, query = ?request.query, "Fetching breweries");
        let records: ResultSet = self
            .http
            .get_json(path, &request)
            .await
            .map_err(|e| Error::fetch(operation, e))?;
        info!(operation, count = records.len(), "Fetched breweries");
        Ok(records)
    }
}

#[async_trait]
impl BreweryFetcher for OpenBreweryClient {
    async fn search(&self, query: &str, per_page: u32) -> Result<ResultSet> {
        let query = normalize_query(query)
            .ok_or_else(|| Error::config("Search query must not be empty"))?;
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let request = RequestConfig::new()
            .query("query", query)
            .query("per_page", per_page.to_string());
        self.fetch_list("search", "search", request).await
    }

    async fn random(&self, size: u32) -> Result<ResultSet> {
        let size = size.clamp(1, MAX_RANDOM_SIZE);
        let request = RequestConfig::new().query("size", size.to_string());
        self.fetch_list("random", "random", request).await
    }

    async fn get(&self, id: &str) -> Result<Brewery> {
        let id = id.trim();
        if id.is_empty() || RESERVED_PATHS.contains(&id) {
            return Err(Error::not_found(id));
        }

        let url = self.http.segment_url(id)?;
        debug!(id, url = %url, "Fetching brewery");
        self.http
            .get_json(&url, &RequestConfig::new())
            .await
            .map_err(|e| match e {
                Error::HttpStatus { status: 404, .. } => Error::not_found(id),
                other => Error::fetch("lookup", other),
            })
    }
}
