// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Notion integration token.
///
/// Display and Debug are redacted so the token can flow through logs and
/// error messages without leaking.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let key = key.trim();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "token cannot be empty".to_string(),
            });
        }

        if key.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidApiKey {
                reason: "token cannot contain whitespace".to_string(),
            });
        }

        if !key.starts_with("secret_") && !key.starts_with("ntn_") {
            log::warn!("NOTION_TOKEN does not start with 'secret_' or 'ntn_'; Notion may reject it");
        }

        Ok(Self(key.to_string()))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn redacted(&self) -> String {
        let visible: String = self.0.chars().take(4).collect();
        format!("{}...", visible)
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}

/// Validated URL type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl Serialize for ValidatedUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidatedUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Joins an API path onto this URL, treating it as a directory.
    pub fn join_path(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty_and_whitespace() {
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("   ").is_err());
        assert!(ApiKey::new("secret_abc def").is_err());
    }

    #[test]
    fn api_key_is_trimmed_and_redacted() {
        let key = ApiKey::new("  ntn_1234567890abcdef \n").unwrap();
        assert_eq!(key.as_str(), "ntn_1234567890abcdef");
        assert_eq!(key.to_string(), "ntn_...");
        assert!(!format!("{:?}", key).contains("1234567890"));
    }

    #[test]
    fn url_join_handles_slashes() {
        let base = ValidatedUrl::parse("https://api.notion.com/v1/").unwrap();
        assert_eq!(base.join_path("/pages"), "https://api.notion.com/v1/pages");
        let base = ValidatedUrl::parse("http://localhost:8080/v1").unwrap();
        assert_eq!(base.join_path("pages/abc"), "http://localhost:8080/v1/pages/abc");
    }

    #[test]
    fn url_rejects_other_schemes() {
        assert!(ValidatedUrl::parse("ftp://api.notion.com").is_err());
        assert!(ValidatedUrl::parse("not a url").is_err());
    }
}
