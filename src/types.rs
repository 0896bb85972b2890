//! Common types used throughout the brewery browser
//!
//! This module contains the directory record type and small shared
//! enums used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// An ordered, fetched sequence of breweries
pub type ResultSet = Vec<Brewery>;

// ============================================================================
// Brewery Record
// ============================================================================

/// A single brewery as returned by the Open Brewery DB API
///
/// Only `id` and `name` are guaranteed; every other field may be absent
/// or `null` in the upstream data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brewery {
    /// Unique identifier (UUID string)
    pub id: String,

    /// Display name
    pub name: String,

    /// Brewery category (micro, brewpub, regional, ...)
    #[serde(default)]
    pub brewery_type: Option<String>,

    /// First address line
    #[serde(default)]
    pub address_1: Option<String>,

    /// Street (legacy alias of `address_1`)
    #[serde(default)]
    pub street: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    /// State or province
    #[serde(default)]
    pub state_province: Option<String>,

    #[serde(default)]
    pub postal_code: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    /// Phone number as stored upstream (digits, possibly with punctuation)
    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub website_url: Option<String>,
}

impl Brewery {
    /// Create a brewery with only the required fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brewery_type: None,
            address_1: None,
            street: None,
            city: None,
            state_province: None,
            postal_code: None,
            country: None,
            phone: None,
            website_url: None,
        }
    }

    /// Set city and state/province
    #[must_use]
    pub fn located(mut self, city: impl Into<String>, state_province: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.state_province = Some(state_province.into());
        self
    }

    /// Set the phone number
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Street line, preferring `address_1` over the legacy `street` field
    pub fn street_line(&self) -> Option<&str> {
        [self.address_1.as_deref(), self.street.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }

    /// Label used in result lists: `name - city, state_province`
    pub fn list_label(&self, missing: &str) -> String {
        format!(
            "{} - {}, {}",
            self.name,
            self.city.as_deref().unwrap_or(missing),
            self.state_province.as_deref().unwrap_or(missing)
        )
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Backoff strategy for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_brewery_deserialize_full() {
        let value = json!({
            "id": "5128df48-79fc-4f0f-8b52-d06be54d0cec",
            "name": "(405) Brewing Co",
            "brewery_type": "micro",
            "address_1": "1716 Topeka St",
            "address_2": null,
            "city": "Norman",
            "state_province": "Oklahoma",
            "postal_code": "73069-8224",
            "country": "United States",
            "longitude": -97.46818222,
            "latitude": 35.25738891,
            "phone": "4058160490",
            "website_url": "http://www.405brewing.com",
            "state": "Oklahoma",
            "street": "1716 Topeka St"
        });

        let brewery: Brewery = serde_json::from_value(value).unwrap();
        assert_eq!(brewery.name, "(405) Brewing Co");
        assert_eq!(brewery.city.as_deref(), Some("Norman"));
        assert_eq!(brewery.phone.as_deref(), Some("4058160490"));
        assert_eq!(brewery.street_line(), Some("1716 Topeka St"));
    }

    #[test]
    fn test_brewery_deserialize_nulls() {
        let value = json!({
            "id": "x",
            "name": "Nowhere Ales",
            "city": null,
            "phone": null
        });

        let brewery: Brewery = serde_json::from_value(value).unwrap();
        assert!(brewery.city.is_none());
        assert!(brewery.phone.is_none());
        assert!(brewery.street_line().is_none());
    }

    #[test]
    fn test_brewery_missing_name_is_rejected() {
        let value = json!({"id": "x"});
        assert!(serde_json::from_value::<Brewery>(value).is_err());
    }

    #[test]
    fn test_street_line_falls_back_to_street() {
        let mut brewery = Brewery::new("1", "A");
        brewery.street = Some("1 Main St".to_string());
        assert_eq!(brewery.street_line(), Some("1 Main St"));

        brewery.address_1 = Some("  ".to_string());
        assert_eq!(brewery.street_line(), Some("1 Main St"));

        brewery.street = None;
        assert_eq!(brewery.street_line(), None);
    }

    #[test]
    fn test_list_label() {
        let brewery = Brewery::new("1", "Hop House").located("Austin", "Texas");
        assert_eq!(brewery.list_label("N/A"), "Hop House - Austin, Texas");

        let brewery = Brewery::new("2", "Ghost Brew");
        assert_eq!(brewery.list_label("?"), "Ghost Brew - ?, ?");
    }
}
