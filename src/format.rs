//! Display formatting for brewery fields
//!
//! Phone numbers are normalized to digits and then formatted for
//! North American numbers:
//! - 10 digits: `(AAA) BBB-CCCC`
//! - 11 digits with a leading `1`: `+1 (AAA) BBB-CCCC`
//! - any other length: the bare digit string
//! - no digits at all: `None`

use crate::types::Brewery;
use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());

static TEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})(\d{3})(\d{4})$").unwrap());

/// Strip every non-digit character
pub fn digits_only(input: &str) -> String {
    NON_DIGIT.replace_all(input, "").into_owned()
}

/// Format a phone number for display
pub fn format_phone(input: &str) -> Option<String> {
    let digits = digits_only(input);
    if digits.is_empty() {
        return None;
    }

    if let Some(formatted) = format_ten(&digits) {
        return Some(formatted);
    }

    if digits.len() == 11 {
        if let Some(rest) = digits.strip_prefix('1') {
            if let Some(formatted) = format_ten(rest) {
                return Some(format!("+1 {formatted}"));
            }
        }
    }

    Some(digits)
}

fn format_ten(digits: &str) -> Option<String> {
    TEN_DIGITS
        .captures(digits)
        .map(|caps| format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]))
}

/// Single-line postal address, skipping absent parts
///
/// `1716 Topeka St, Norman, Oklahoma 73069-8224`
pub fn format_address(brewery: &Brewery) -> Option<String> {
    let region = match (
        brewery.state_province.as_deref(),
        brewery.postal_code.as_deref(),
    ) {
        (Some(state), Some(zip)) => Some(format!("{state} {zip}")),
        (Some(state), None) => Some(state.to_string()),
        (None, Some(zip)) => Some(zip.to_string()),
        (None, None) => None,
    };

    let parts: Vec<String> = [
        brewery.street_line().map(str::to_string),
        brewery.city.clone(),
        region,
    ]
    .into_iter()
    .flatten()
    .filter(|p| !p.trim().is_empty())
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
