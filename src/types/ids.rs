use super::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type DatabaseId = Id<DatabaseMarker>;
pub type UserId = Id<UserMarker>;

impl<T> Id<T> {
    /// Parses a dashed UUID, a bare 32-character hex ID, or a Notion URL
    /// into the canonical lowercase, dash-free form.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let cleaned = input.trim().trim_end_matches('/');

        if let Ok(uuid) = Uuid::parse_str(cleaned) {
            return Ok(Self::from_normalized(uuid.as_simple().to_string()));
        }

        if cleaned.len() == 32 && cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Self::from_normalized(cleaned.to_lowercase()));
        }

        if cleaned.contains("notion") {
            return extract_from_url(cleaned).map(Self::from_normalized);
        }

        Err(ValidationError::InvalidId(format!(
            "Could not parse Notion ID from: {}",
            input
        )))
    }

    /// Wraps an identifier reported by the API.
    ///
    /// Well-formed IDs are normalized; anything else is kept verbatim so a
    /// response is never rejected because of an unexpected ID shape.
    pub fn from_api(value: impl Into<String>) -> Self {
        let value = value.into();
        match Self::parse(&value) {
            Ok(id) => id,
            Err(_) => Self::from_normalized(value),
        }
    }

    fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the hyphenated UUID format used in API paths.
    pub fn to_hyphenated(&self) -> String {
        if self.value.len() == 32 && self.value.chars().all(|c| c.is_ascii_hexdigit()) {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }
}

/// Extracts the trailing ID from URLs like
/// `https://www.notion.so/workspace/Chicken-550e8400e29b41d4a716446655440000?v=...`.
fn extract_from_url(url: &str) -> Result<String, ValidationError> {
    lazy_static::lazy_static! {
        static ref ID_REGEX: Regex = Regex::new(
            r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)"
        ).expect("Failed to compile Notion ID regex - this is a bug in the code");
    }

    ID_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id_match| id_match.as_str().replace('-', "").to_lowercase())
        .ok_or_else(|| ValidationError::InvalidId(format!("No valid ID found in URL: {}", url)))
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> std::str::FromStr for Id<T> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_api(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("https://www.notion.so/Chicken-550e8400e29b41d4a716446655440000")
            .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = DatabaseId::parse(
            "https://www.notion.so/team/550E8400E29B41D4A716446655440000?v=0123456789abcdef",
        )
        .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(PageId::parse("too-short").is_err());
        assert!(PageId::parse("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(PageId::parse("").is_err());
        assert!(PageId::parse("https://www.notion.so/no-id-here").is_err());
    }

    #[test]
    fn test_to_hyphenated() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.to_hyphenated(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn api_ids_are_kept_when_not_uuid_shaped() {
        let id: PageId = serde_json::from_str("\"page_id_1\"").unwrap();
        assert_eq!(id.as_str(), "page_id_1");
        assert_eq!(id.to_hyphenated(), "page_id_1");

        let id: PageId = serde_json::from_str("\"550e8400-e29b-41d4-a716-446655440000\"").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }
    #[test]
    fn non_hex_api_ids_of_uuid_length_are_not_hyphenated() {
        let raw = "é".repeat(16);
        assert_eq!(raw.len(), 32);
        let id = PageId::from_api(raw.clone());
        assert_eq!(id.to_hyphenated(), raw);

        let id = PageId::from_api("page_id_000000000000000000000001");
        assert_eq!(id.to_hyphenated(), "page_id_000000000000000000000001");
    }
}
