//! Render module
//!
//! Turns controller output into something a person (or a script) can read.
//!
//! # Overview
//!
//! - `Renderer` - the trait the session draws through
//! - `TextRenderer` - human-readable list, page label and detail view
//! - `JsonRenderer` - one JSON message per line

mod json;
mod text;
mod types;

pub use json::JsonRenderer;
pub use text::TextRenderer;
pub use types::{RenderMessage, Renderer};

#[cfg(test)]
mod tests;
