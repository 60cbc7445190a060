// src/api/types.rs
//! Request and response shapes for the Notion endpoints this crate uses.

use crate::constants::NOTION_API_PAGE_SIZE;
use crate::model::PropertyMap;
use crate::types::DatabaseId;
use serde::{Deserialize, Serialize};

/// Raw HTTP result with the metadata needed to report failures.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Generic paginated response from Notion API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    pub has_more: bool,
    #[serde(rename = "type", default)]
    pub result_type: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Error body returned by Notion on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionApiErrorResponse {
    #[serde(default)]
    pub status: Option<u16>,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Body of `POST databases/{id}/query`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl QueryRequest {
    /// Page size is clamped to `1..=NOTION_API_PAGE_SIZE`.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.clamp(1, NOTION_API_PAGE_SIZE),
            start_cursor: None,
        }
    }

    pub fn with_cursor(self, start_cursor: Option<String>) -> Self {
        Self {
            start_cursor,
            ..self
        }
    }
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self::new(NOTION_API_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseParent {
    pub database_id: String,
}

/// Body of `POST pages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePageRequest {
    pub parent: DatabaseParent,
    pub properties: PropertyMap,
}

impl CreatePageRequest {
    pub fn in_database(database: &DatabaseId, properties: PropertyMap) -> Self {
        Self {
            parent: DatabaseParent {
                database_id: database.to_hyphenated(),
            },
            properties,
        }
    }
}

/// Body of `PATCH pages/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl UpdatePageRequest {
    pub fn properties(properties: PropertyMap) -> Self {
        Self {
            properties: Some(properties),
            archived: None,
        }
    }

    pub fn archive() -> Self {
        Self {
            properties: None,
            archived: Some(true),
        }
    }
}
