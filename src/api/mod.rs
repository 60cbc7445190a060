// src/api/mod.rs
//! Notion API interaction: authenticated requests against database and
//! page endpoints, with I/O, parsing and pagination kept apart.

pub mod client;
pub mod pagination;
pub mod parser;
pub mod types;

use crate::error::AppError;
use crate::model::Page;
use crate::types::{DatabaseId, PageId};
use types::{CreatePageRequest, PaginatedResponse, QueryRequest, UpdatePageRequest};

/// The page operations the recipe store needs from Notion.
///
/// The store depends on this trait, never on HTTP details, so it can run
/// against an in-memory implementation in tests.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// One page of results from `POST databases/{id}/query`.
    async fn query_database(
        &self,
        database: &DatabaseId,
        request: &QueryRequest,
    ) -> Result<PaginatedResponse<Page>, AppError>;

    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError>;

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError>;

    async fn update_page(&self, id: &PageId, request: &UpdatePageRequest)
        -> Result<Page, AppError>;

    /// Notion has no hard delete for pages; archiving moves them to trash.
    async fn archive_page(&self, id: &PageId) -> Result<Page, AppError> {
        self.update_page(id, &UpdatePageRequest::archive()).await
    }
}

pub use client::NotionHttpClient;
pub use pagination::{fetch_all_pages, PaginationResult};
