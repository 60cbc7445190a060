// src/lib.rs
//! recipe_buddy library: manage recipes and ingredients kept in Notion databases.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `RecordError`, `ValidationError`
//! - **Configuration**: `AppConfig`, `CommandLineInput`
//! - **Domain model**: `Ingredient`, `Recipe`, `Page`, `NotionRecord`
//! - **Domain types**: `ApiKey`, `PageId`, `DatabaseId`, `ValidatedUrl`
//! - **API client**: `NotionHttpClient`, `NotionRepository`, parsers
//! - **Store**: `IngredientCatalog`, `RecipeBook`, `NotionDatabase`

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod output;
pub mod store;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, RecordError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::cli::CommandLineInput;
pub use crate::config::{load_dotenv, AppConfig};

// --- Domain Model ---
pub use crate::model::{
    Ingredient, IngredientType, NotionRecord, Page, Parent, PartialUser, PropertyMap, Recipe,
    UnitOfMeasurement,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, DatabaseId, Id, PageId, UserId, ValidatedUrl};

// --- API Client ---
pub use crate::api::{
    client::extract_response_text,
    parser::{parse_api_response, parse_page_response, parse_pages_pagination},
    types::{ApiResponse, CreatePageRequest, PaginatedResponse, QueryRequest, UpdatePageRequest},
    NotionHttpClient, NotionRepository,
};

// --- Store ---
pub use crate::store::{
    parse_record, parse_records, IngredientCatalog, NotionDatabase, RecipeBook, RecordStore,
};
