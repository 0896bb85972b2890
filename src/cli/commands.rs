//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Search and page through the Open Brewery DB directory
#[derive(Parser, Debug)]
#[command(name = "brewery-browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Records per page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search breweries and print one page of results
    Search {
        /// Search term (several words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Page to print (1-based)
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Print one page of a random sample
    Random {
        /// Sample size (1-50, defaults to the configured size)
        #[arg(long)]
        size: Option<u32>,

        /// Page to print (1-based)
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Show the detail view of one brewery
    Show {
        /// Brewery id
        id: String,
    },

    /// Interactive session reading commands from stdin
    Browse {
        /// Run this search before the first prompt
        #[arg(long, conflicts_with = "random")]
        query: Option<String>,

        /// Start with a random sample
        #[arg(long)]
        random: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_globals() {
        let cli = Cli::try_parse_from([
            "brewery-browser",
            "search",
            "dog",
            "fish",
            "--page",
            "2",
            "--page-size",
            "10",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.page_size, Some(10));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Search { query, page } => {
                assert_eq!(query, vec!["dog".to_string(), "fish".to_string()]);
                assert_eq!(page, 2);
            }
            other => panic!("Expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["brewery-browser", "search"]).is_err());
    }

    #[test]
    fn test_browse_query_conflicts_with_random() {
        let result = Cli::try_parse_from([
            "brewery-browser",
            "browse",
            "--query",
            "ale",
            "--random",
        ]);
        assert!(result.is_err());
    }
}
