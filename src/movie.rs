//! # Movie Model Module
//!
//! Normalized movie records built from raw catalog entries. Every field the
//! catalog may omit or send malformed is replaced by a fixed placeholder here,
//! so rendering never has to deal with missing data.

use serde_json::Value;

/// Placeholder title for entries without a name
pub const TITLE_PLACEHOLDER: &str = "Без названия";
/// Placeholder year for entries without a release year
pub const YEAR_UNKNOWN: &str = "N/A";
/// Placeholder rating for entries without a Kinopoisk rating
pub const RATING_DEFAULT: &str = "0.0";
/// Placeholder description for entries without one
pub const DESCRIPTION_PLACEHOLDER: &str = "Описание отсутствует";

/// A movie ready for presentation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub rating: String,
    pub poster_url: Option<String>,
    pub description: String,
}

impl MovieRecord {
    /// Build a record from one element of the catalog's `docs` array.
    ///
    /// Field access is lenient: a missing key, a `null`, or a value of the
    /// wrong type all fall back to the placeholder for that field.
    pub fn from_catalog_entry(entry: &Value) -> Self {
        let title = entry
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());

        let year = entry
            .get("year")
            .and_then(scalar_to_string)
            .unwrap_or_else(|| YEAR_UNKNOWN.to_string());

        let rating = entry
            .get("rating")
            .and_then(|rating| rating.get("kp"))
            .and_then(scalar_to_string)
            .unwrap_or_else(|| RATING_DEFAULT.to_string());

        // An empty URL is treated like no poster at all
        let poster_url = entry
            .get("poster")
            .and_then(|poster| poster.get("url"))
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string);

        let description = entry
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());

        Self {
            title,
            year,
            rating,
            poster_url,
            description,
        }
    }
}

/// Render a JSON scalar as text, `None` for null, objects and arrays
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
