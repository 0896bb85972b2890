//! Tests for the render module

use super::*;
use crate::config::DisplayConfig;
use crate::error::Error;
use crate::pagination::PaginationController;
use crate::types::Brewery;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn breweries(n: usize) -> Vec<Brewery> {
    (1..=n)
        .map(|i| Brewery::new(format!("id-{i}"), format!("Brewery {i}")).located("Bend", "Oregon"))
        .collect()
}

fn text_output(f: impl FnOnce(&mut TextRenderer<Vec<u8>>)) -> String {
    let mut renderer = TextRenderer::new(Vec::new(), DisplayConfig::default());
    f(&mut renderer);
    String::from_utf8(renderer.into_inner()).unwrap()
}

fn json_lines(f: impl FnOnce(&mut JsonRenderer<Vec<u8>>)) -> Vec<Value> {
    let mut renderer = JsonRenderer::new(Vec::new());
    f(&mut renderer);
    String::from_utf8(renderer.into_inner())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// ============================================================================
// Text Renderer
// ============================================================================

#[test]
fn test_text_results_second_page() {
    let mut controller = PaginationController::new(2);
    controller.reset(breweries(3));
    controller.advance();

    let output = text_output(|r| r.results("Search results for bend", controller.page()).unwrap());

    assert_eq!(
        output,
        "Search results for bend\n  3. Brewery 3 - Bend, Oregon\nPage 2 of 2 · showing 3–3 of 3\n[prev: enabled] [next: disabled]\n"
    );
}

#[test]
fn test_text_results_empty() {
    let controller: PaginationController = PaginationController::new(25);

    let output = text_output(|r| r.results("Search results for zzz", controller.page()).unwrap());

    assert_eq!(
        output,
        "Search results for zzz\n  No breweries found.\nPage 1 of 1\n[prev: disabled] [next: disabled]\n"
    );
}

#[test]
fn test_text_results_with_controls_disabled() {
    let mut controller = PaginationController::new(1);
    controller.reset(breweries(2));

    let output = text_output(|r| {
        r.results("Random breweries", controller.page().with_controls_disabled())
            .unwrap();
    });

    assert!(output.ends_with("[prev: disabled] [next: disabled]\n"));
}

#[test]
fn test_text_detail() {
    let mut brewery = Brewery::new("5128df48", "(405) Brewing Co")
        .located("Norman", "Oklahoma")
        .with_phone("4058160490");
    brewery.brewery_type = Some("micro".to_string());
    brewery.address_1 = Some("1716 Topeka St".to_string());
    brewery.postal_code = Some("73069-8224".to_string());

    let output = text_output(|r| r.detail(&brewery).unwrap());

    assert_eq!(
        output,
        "== (405) Brewing Co ==\n\
         Type:     micro\n\
         Address:  1716 Topeka St, Norman, Oklahoma 73069-8224\n\
         Phone:    (405) 816-0490\n\
         Website:  N/A\n\
         Id:       5128df48\n"
    );
}

#[test]
fn test_text_loading_error_and_message() {
    let output = text_output(|r| {
        r.loading(true).unwrap();
        r.loading(false).unwrap();
        r.error(&Error::fetch("search", "connection refused")).unwrap();
        r.message("bye").unwrap();
        r.close_detail().unwrap();
    });

    assert_eq!(
        output,
        "Loading...\nError: Fetch failed during search: connection refused\nbye\n(detail closed)\n"
    );
}

#[test]
fn test_text_missing_value_placeholder() {
    let display = DisplayConfig {
        missing_value: "-".to_string(),
        ..DisplayConfig::default()
    };
    let mut renderer = TextRenderer::new(Vec::new(), display);
    renderer.detail(&Brewery::new("x", "Bare")).unwrap();
    let output = String::from_utf8(renderer.into_inner()).unwrap();

    assert!(output.contains("Phone:    -\n"));
    assert!(output.contains("Address:  -\n"));
}

// ============================================================================
// JSON Renderer
// ============================================================================

#[test]
fn test_json_results_message() {
    let mut controller = PaginationController::new(2);
    controller.reset(breweries(5));

    let lines = json_lines(|r| r.results("Random breweries", controller.page()).unwrap());

    assert_eq!(lines.len(), 1);
    let msg = &lines[0];
    assert_eq!(msg["type"], "results");
    assert_eq!(msg["label"], "Random breweries");
    assert_eq!(msg["metadata"]["current_page"], 1);
    assert_eq!(msg["metadata"]["page_count"], 3);
    assert_eq!(msg["metadata"]["high_index"], 2);
    assert_eq!(msg["controls"]["previous_enabled"], false);
    assert_eq!(msg["controls"]["next_enabled"], true);
    assert_eq!(msg["breweries"].as_array().unwrap().len(), 2);
    assert_eq!(msg["breweries"][0]["name"], "Brewery 1");
}

#[test]
fn test_json_detail_message() {
    let brewery = Brewery::new("x", "Dial Tone").with_phone("1 (555) 010-9999");

    let lines = json_lines(|r| r.detail(&brewery).unwrap());

    assert_eq!(lines[0]["type"], "detail");
    assert_eq!(lines[0]["brewery"]["id"], "x");
    assert_eq!(lines[0]["phone_display"], "+1 (555) 010-9999");
    assert_eq!(lines[0]["address"], Value::Null);
}

#[test]
fn test_json_state_messages() {
    let lines = json_lines(|r| {
        r.loading(true).unwrap();
        r.error(&Error::not_found("abc")).unwrap();
        r.close_detail().unwrap();
        r.message("hello").unwrap();
    });

    assert_eq!(lines[0], serde_json::json!({"type": "loading", "active": true}));
    assert_eq!(
        lines[1],
        serde_json::json!({
            "type": "error",
            "message": "Brewery 'abc' not found",
            "fetch_failure": true
        })
    );
    assert_eq!(lines[2], serde_json::json!({"type": "close_detail"}));
    assert_eq!(lines[3], serde_json::json!({"type": "message", "text": "hello"}));
}

// ============================================================================
// Broken Output
// ============================================================================

/// Sink whose every write fails, like a closed pipe
struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_text_write_failure_is_render_error() {
    let mut renderer = TextRenderer::new(ClosedPipe, DisplayConfig::default());
    let err = renderer.message("hello").unwrap_err();
    assert!(matches!(err, Error::Render { ref message } if message.starts_with("Failed to write output")));
}

#[test]
fn test_json_write_failure_is_render_error() {
    let mut renderer = JsonRenderer::new(ClosedPipe);
    let err = renderer.loading(true).unwrap_err();
    assert!(matches!(err, Error::Render { .. }));
}
