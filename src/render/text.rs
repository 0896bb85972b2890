//! Human-readable renderer

use super::types::Renderer;
use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::format::{format_address, format_phone};
use crate::pagination::{Controls, Page};
use crate::types::Brewery;
use std::io::Write;

/// Plain-text renderer writing to any `Write` sink
///
/// ```text
/// Search results for dog
///   1. Dogfish Head - Milton, Delaware
///   2. Dog Haus Biergarten - Pasadena, California
/// Page 1 of 1 · showing 1–2 of 2
/// [prev: disabled] [next: disabled]
/// ```
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    display: DisplayConfig,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        Self { out, display }
    }

    /// Consume the renderer, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a block of lines and flush; failures become [`Error::Render`]
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let mut block = lines.join("\n");
        block.push('\n');
        self.out
            .write_all(block.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::render(format!("Failed to write output: {e}")))
    }

    fn field(&self, value: Option<&str>) -> String {
        value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(&self.display.missing_value)
            .to_string()
    }
}

fn control_state(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

fn controls_line(controls: Controls) -> String {
    format!(
        "[prev: {}] [next: {}]",
        control_state(controls.previous_enabled),
        control_state(controls.next_enabled)
    )
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn loading(&mut self, active: bool) -> Result<()> {
        if active {
            self.write_lines(&["Loading...".to_string()])?;
        }
        Ok(())
    }

    fn results(&mut self, label: &str, page: Page<'_, Brewery>) -> Result<()> {
        let mut lines = vec![label.to_string()];
        if page.metadata.is_empty() {
            lines.push(format!("  {}", self.display.empty_message));
        }
        lines.extend(page.numbered().map(|(position, brewery)| {
            format!(
                "  {position}. {}",
                brewery.list_label(&self.display.missing_value)
            )
        }));
        lines.push(page.metadata.label());
        lines.push(controls_line(page.controls));
        self.write_lines(&lines)
    }

    fn detail(&mut self, brewery: &Brewery) -> Result<()> {
        let phone = brewery.phone.as_deref().and_then(format_phone);
        let address = format_address(brewery);

        let lines = [
            format!("== {} ==", brewery.name),
            format!("Type:     {}", self.field(brewery.brewery_type.as_deref())),
            format!("Address:  {}", self.field(address.as_deref())),
            format!("Phone:    {}", self.field(phone.as_deref())),
            format!("Website:  {}", self.field(brewery.website_url.as_deref())),
            format!("Id:       {}", brewery.id),
        ];
        self.write_lines(&lines)
    }

    fn close_detail(&mut self) -> Result<()> {
        self.write_lines(&["(detail closed)".to_string()])
    }

    fn error(&mut self, error: &Error) -> Result<()> {
        self.write_lines(&[format!("Error: {error}")])
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.write_lines(&[text.to_string()])
    }
}
