//! Fetcher trait and request helpers

use crate::error::Result;
use crate::types::{Brewery, ResultSet};
use async_trait::async_trait;

/// Largest `per_page` the search endpoint honours
pub const MAX_PER_PAGE: u32 = 200;

/// Largest `size` the random endpoint honours
pub const MAX_RANDOM_SIZE: u32 = 50;

/// Source of brewery records
#[async_trait]
pub trait BreweryFetcher: Send + Sync {
    /// Search by free-text query, returning at most `per_page` records
    async fn search(&self, query: &str, per_page: u32) -> Result<ResultSet>;

    /// A random sample of `size` records
    async fn random(&self, size: u32) -> Result<ResultSet>;

    /// A single brewery by id
    async fn get(&self, id: &str) -> Result<Brewery>;
}

/// Trim a search term and replace inner spaces with underscores
///
/// Returns `None` for a blank term.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.replace(' ', "_"))
    }
}
