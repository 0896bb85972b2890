//! Session commands and the interactive command grammar

use crate::error::{Error, Result};

/// Help text for the interactive prompt
pub const HELP: &str = "\
Commands:
  search <term>   search breweries by name, city or state
  random [n]      show a random sample of n breweries
  next | n        next page
  prev | p        previous page
  show <id|#>     open the detail view by id or list position
  close           close the detail view
  help            show this help
  quit | q        leave";

/// A user action dispatched to a [`Session`](super::Session)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch breweries matching a term and show page 1
    Search(String),
    /// Fetch a random sample (configured size when `None`) and show page 1
    Random(Option<u32>),
    /// Next page
    Advance,
    /// Previous page
    Retreat,
    /// Open the detail view for an id or a 1-based list position
    SelectItem(String),
    /// Dismiss the detail view
    CloseDetail,
    Help,
    Quit,
}

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Command {
    /// Parse one line of interactive input
    ///
    /// Blank input yields `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "search" | "s" | "find" => {
                if rest.is_empty() {
                    return Err(Error::config("usage: search <term>"));
                }
                Self::Search(rest.to_string())
            }
            "random" | "r" => {
                if rest.is_empty() {
                    Self::Random(None)
                } else {
                    let size = rest.parse::<u32>().map_err(|_| {
                        Error::invalid_value("size", format!("'{rest}' is not a number"))
                    })?;
                    Self::Random(Some(size))
                }
            }
            "next" | "n" => Self::Advance,
            "prev" | "previous" | "p" => Self::Retreat,
            "show" | "open" | "detail" => {
                let target = rest.trim_start_matches('#');
                if target.is_empty() {
                    return Err(Error::config("usage: show <id|#position>"));
                }
                Self::SelectItem(target.to_string())
            }
            "close" | "c" => Self::CloseDetail,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(Error::unknown_command(line)),
        };

        Ok(Some(command))
    }
}
