// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Brewery Browser
//!
//! Search and page through the Open Brewery DB directory from the terminal.
//!
//! ## Features
//!
//! - **Search and random sampling** against the public Open Brewery DB API
//! - **Client-side pagination** over each fetched result set
//! - **Detail view** with normalized North American phone numbers
//! - **Pretty or JSON output** through a pluggable renderer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brewery_browser::config::AppConfig;
//! use brewery_browser::fetch::OpenBreweryClient;
//! use brewery_browser::render::TextRenderer;
//! use brewery_browser::{Command, Result, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::default();
//!     let fetcher = OpenBreweryClient::new(&config.api)?;
//!     let mut session = Session::new(fetcher, config.display.clone());
//!     let mut renderer = TextRenderer::new(std::io::stdout(), config.display);
//!
//!     session.dispatch(Command::Search("dog".into()), &mut renderer).await?;
//!     session.dispatch(Command::Advance, &mut renderer).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                   CLI (search/random/show/browse)     │
//! └───────────────────────────┬───────────────────────────┘
//!                             │ Command
//! ┌───────────────────────────┴───────────────────────────┐
//! │  Session: result set, page cursor, detail, pending    │
//! └──────┬──────────────────────┬──────────────────┬──────┘
//!        │                      │                  │
//! ┌──────┴──────┐      ┌────────┴────────┐  ┌──────┴──────┐
//! │   Fetch     │      │   Pagination    │  │   Render    │
//! │ search      │      │ advance/retreat │  │ text / json │
//! │ random, get │      │ window, labels  │  │ phone fmt   │
//! └──────┬──────┘      └─────────────────┘  └─────────────┘
//!        │
//! ┌──────┴──────┐
//! │ HTTP: retry │
//! │ rate limit  │
//! └─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Brewery record and common type aliases
pub mod types;

/// Phone and address formatting
pub mod format;

/// Application configuration
pub mod config;

/// HTTP client with retry and rate limiting
pub mod http;

/// Open Brewery DB data fetcher
pub mod fetch;

/// Client-side pagination over a result set
pub mod pagination;

/// Result, detail and status rendering
pub mod render;

/// Browsing session state and command dispatch
pub mod session;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::AppConfig;
pub use pagination::PaginationController;
pub use session::{Command, Flow, Session};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
