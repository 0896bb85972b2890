//! CLI module
//!
//! Command-line interface for browsing the directory.
//!
//! # Commands
//!
//! - `search` - Print one page of search results
//! - `random` - Print one page of a random sample
//! - `show` - Print the detail view of one brewery
//! - `browse` - Interactive session (search, page, open details)

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
