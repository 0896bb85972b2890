//! Directory fetch module
//!
//! One remote call per search or browse action.
//!
//! # Overview
//!
//! The fetch module provides:
//! - `BreweryFetcher` - the async seam the session talks to
//! - `OpenBreweryClient` - the Open Brewery DB implementation
//!
//! Every failure (transport, HTTP status, undecodable body) is surfaced as
//! [`Error::Fetch`](crate::Error::Fetch), except an unknown id which becomes
//! [`Error::BreweryNotFound`](crate::Error::BreweryNotFound).

mod client;
mod types;

pub use client::OpenBreweryClient;
pub use types::{normalize_query, BreweryFetcher, MAX_PER_PAGE, MAX_RANDOM_SIZE};
