use crate::api::types::{CreatePageRequest, PaginatedResponse, QueryRequest};
use crate::api::{fetch_all_pages, NotionRepository};
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;
use crate::model::{Page, PropertyMap};
use crate::types::DatabaseId;
use std::sync::Arc;

/// A handle on one Notion database.
#[derive(Clone)]
pub struct NotionDatabase {
    repository: Arc<dyn NotionRepository>,
    database_id: DatabaseId,
    page_size: u32,
}

impl NotionDatabase {
    pub fn new(repository: Arc<dyn NotionRepository>, database_id: DatabaseId) -> Self {
        Self {
            repository,
            database_id,
            page_size: NOTION_API_PAGE_SIZE,
        }
    }

    /// Overrides the query page size; clamped to the API's `1..=100`.
    pub fn with_page_size(self, page_size: u32) -> Self {
        Self {
            page_size: page_size.clamp(1, NOTION_API_PAGE_SIZE),
            ..self
        }
    }

    pub fn id(&self) -> &DatabaseId {
        &self.database_id
    }

    pub fn repository(&self) -> &Arc<dyn NotionRepository> {
        &self.repository
    }

    /// Fetches one page of query results starting at `start_cursor`.
    pub async fn query_page(
        &self,
        start_cursor: Option<String>,
    ) -> Result<PaginatedResponse<Page>, AppError> {
        let request = QueryRequest::new(self.page_size).with_cursor(start_cursor);
        self.repository
            .query_database(&self.database_id, &request)
            .await
    }

    /// Fetches every page in the database, following cursors to the end.
    pub async fn all_pages(&self) -> Result<Vec<Page>, AppError> {
        let result = fetch_all_pages(|cursor| self.query_page(cursor), None).await?;
        log::debug!(
            "Database {} returned {} pages over {} requests",
            self.database_id,
            result.items.len(),
            result.pages_fetched
        );
        Ok(result.items)
    }

    pub async fn create_page(&self, properties: PropertyMap) -> Result<Page, AppError> {
        let request = CreatePageRequest::in_database(&self.database_id, properties);
        self.repository.create_page(&request).await
    }
}
