use super::properties::{self, PropertyMap};
use crate::constants::PROP_NAME;
use crate::types::{DatabaseId, PageId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user reference as it appears in `created_by` / `last_edited_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialUser {
    pub object: String,
    pub id: UserId,
}

/// Where a page lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    DatabaseId { database_id: DatabaseId },
    PageId { page_id: PageId },
    BlockId { block_id: String },
    Workspace,
    #[serde(other)]
    Unknown,
}

/// A Notion page: one row of a database.
///
/// Properties are kept as raw JSON objects keyed by property name; the
/// record types in this module decide which of them matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub object: String,
    pub id: PageId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: PartialUser,
    pub last_edited_by: PartialUser,
    #[serde(default)]
    pub cover: Option<serde_json::Value>,
    #[serde(default)]
    pub icon: Option<serde_json::Value>,
    pub parent: Parent,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub in_trash: bool,
    #[serde(default)]
    pub properties: PropertyMap,
    pub url: String,
    #[serde(default)]
    pub public_url: Option<String>,
}

impl Page {
    /// The page title, read from the `Name` property.
    pub fn title(&self) -> Option<String> {
        properties::read_title(&self.properties, PROP_NAME)
    }

    /// Title for log lines: the `Name` property, or the page ID when unreadable.
    pub fn display_name(&self) -> String {
        self.title()
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| self.id.to_string())
    }

    /// The database this page belongs to, if any.
    pub fn database_id(&self) -> Option<&DatabaseId> {
        match &self.parent {
            Parent::DatabaseId { database_id } => Some(database_id),
            _ => None,
        }
    }
}
