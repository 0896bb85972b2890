//! Renderer trait and output messages

use crate::error::{Error, Result};
use crate::format::{format_address, format_phone};
use crate::pagination::{Controls, DisplayMetadata, Page};
use crate::types::Brewery;
use serde::Serialize;

/// Output side of a browsing session
pub trait Renderer {
    /// Show or hide the loading indicator
    fn loading(&mut self, active: bool) -> Result<()>;

    /// Draw a page of results with its label and navigation controls
    fn results(&mut self, label: &str, page: Page<'_, Brewery>) -> Result<()>;

    /// Open the detail view for one brewery
    fn detail(&mut self, brewery: &Brewery) -> Result<()>;

    /// Dismiss the detail view
    fn close_detail(&mut self) -> Result<()>;

    /// Show a user-visible error
    fn error(&mut self, error: &Error) -> Result<()>;

    /// Show an informational line (help text, notices)
    fn message(&mut self, text: &str) -> Result<()>;
}

/// A single rendered event, as emitted by [`JsonRenderer`](super::JsonRenderer)
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderMessage<'a> {
    Loading {
        active: bool,
    },
    Results {
        label: &'a str,
        metadata: DisplayMetadata,
        controls: Controls,
        breweries: &'a [Brewery],
    },
    Detail {
        brewery: &'a Brewery,
        /// Formatted phone number, when the record has one
        phone_display: Option<String>,
        /// Single-line address, when any part is known
        address: Option<String>,
    },
    CloseDetail,
    Error {
        message: String,
        fetch_failure: bool,
    },
    Message {
        text: &'a str,
    },
}

impl<'a> RenderMessage<'a> {
    /// Results message for a page
    pub fn results(label: &'a str, page: Page<'a, Brewery>) -> Self {
        Self::Results {
            label,
            metadata: page.metadata,
            controls: page.controls,
            breweries: page.records,
        }
    }

    /// Detail message with display-ready phone and address
    pub fn detail(brewery: &'a Brewery) -> Self {
        Self::Detail {
            brewery,
            phone_display: brewery.phone.as_deref().and_then(format_phone),
            address: format_address(brewery),
        }
    }

    /// Error message
    pub fn error(error: &Error) -> Self {
        Self::Error {
            message: error.to_string(),
            fetch_failure: error.is_fetch_failure(),
        }
    }
}
