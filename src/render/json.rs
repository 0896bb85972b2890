//! JSON-lines renderer

use super::types::{RenderMessage, Renderer};
use crate::error::{Error, Result};
use crate::pagination::Page;
use crate::types::Brewery;
use std::io::Write;

/// Writes one [`RenderMessage`] per line
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, message: &RenderMessage<'_>) -> Result<()> {
        let mut line = serde_json::to_vec(message)
            .map_err(|e| Error::render(format!("Failed to encode message: {e}")))?;
        line.push(b'\n');
        self.out
            .write_all(&line)
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::render(format!("Failed to write output: {e}")))
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn loading(&mut self, active: bool) -> Result<()> {
        self.emit(&RenderMessage::Loading { active })
    }

    fn results(&mut self, label: &str, page: Page<'_, Brewery>) -> Result<()> {
        self.emit(&RenderMessage::results(label, page))
    }

    fn detail(&mut self, brewery: &Brewery) -> Result<()> {
        self.emit(&RenderMessage::detail(brewery))
    }

    fn close_detail(&mut self) -> Result<()> {
        self.emit(&RenderMessage::CloseDetail)
    }

    fn error(&mut self, error: &Error) -> Result<()> {
        self.emit(&RenderMessage::error(error))
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.emit(&RenderMessage::Message { text })
    }
}
