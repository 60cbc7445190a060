use super::database::NotionDatabase;
use crate::api::types::UpdatePageRequest;
use crate::api::NotionRepository;
use crate::error::AppError;
use crate::model::{Ingredient, NotionRecord, Page, Recipe};
use crate::types::{DatabaseId, PageId};
use std::marker::PhantomData;
use std::sync::Arc;

/// CRUD over the pages of one database, each page read as a `T`.
#[derive(Clone)]
pub struct RecordStore<T> {
    database: NotionDatabase,
    _record: PhantomData<fn() -> T>,
}

/// Ingredients database.
pub type IngredientCatalog = RecordStore<Ingredient>;

/// Recipes database.
pub type RecipeBook = RecordStore<Recipe>;

impl<T: NotionRecord> RecordStore<T> {
    pub fn new(repository: Arc<dyn NotionRepository>, database_id: DatabaseId) -> Self {
        Self::from_database(NotionDatabase::new(repository, database_id))
    }

    pub fn from_database(database: NotionDatabase) -> Self {
        Self {
            database,
            _record: PhantomData,
        }
    }

    pub fn database(&self) -> &NotionDatabase {
        &self.database
    }

    /// Every valid record in the database. Pages that do not parse are
    /// logged and skipped.
    pub async fn list(&self) -> Result<Vec<T>, AppError> {
        let pages = self.database.all_pages().await?;
        Ok(parse_records(&pages))
    }

    pub async fn get(&self, id: &PageId) -> Result<T, AppError> {
        let page = self.database.repository().retrieve_page(id).await?;
        if let Some(parent) = page.database_id() {
            if parent != self.database.id() {
                log::warn!(
                    "Page {} belongs to database {}, not the {} database {}",
                    id,
                    parent,
                    T::KIND,
                    self.database.id()
                );
            }
        }
        parse_record(&page)
    }

    /// Creates a page for `record` and returns it with its new ID.
    pub async fn create(&self, record: &T) -> Result<T, AppError> {
        let page = self.database.create_page(record.to_properties()).await?;
        log::info!("Created {} '{}' ({})", T::KIND, record.name(), page.id);
        parse_record(&page)
    }

    /// Overwrites every property of the page with `record`.
    pub async fn update(&self, id: &PageId, record: &T) -> Result<T, AppError> {
        let request = UpdatePageRequest::properties(record.to_properties());
        let page = self.database.repository().update_page(id, &request).await?;
        log::info!("Updated {} '{}' ({})", T::KIND, record.name(), id);
        parse_record(&page)
    }

    /// Moves the page to Notion's trash.
    pub async fn archive(&self, id: &PageId) -> Result<(), AppError> {
        let page = self.database.repository().archive_page(id).await?;
        log::info!("Archived {} {} ('{}')", T::KIND, id, page.display_name());
        Ok(())
    }
}

impl RecordStore<Recipe> {
    /// Resolves the recipe's ingredient references in relation order.
    ///
    /// References whose pages are missing or unreadable are logged and
    /// skipped; transport failures abort.
    pub async fn ingredients_of(
        &self,
        recipe: &Recipe,
        catalog: &IngredientCatalog,
    ) -> Result<Vec<Ingredient>, AppError> {
        let mut ingredients = Vec::with_capacity(recipe.ingredients.len());
        for id in recipe.unique_ingredients() {
            match catalog.get(&id).await {
                Ok(ingredient) => ingredients.push(ingredient),
                Err(AppError::InvalidRecord { page_id, source }) => {
                    log::info!(
                        "Skipping ingredient {} of recipe '{}': {}",
                        page_id,
                        recipe.name,
                        source
                    );
                }
                Err(err) if err.notion_code().is_some_and(|code| code.is_not_found()) => {
                    log::info!(
                        "Skipping ingredient {} of recipe '{}': not found",
                        id,
                        recipe.name
                    );
                }
                Err(err) => return Err(err),
            }
        }
        Ok(ingredients)
    }
}

/// Reads one page as a record, attaching the page ID.
pub fn parse_record<T: NotionRecord>(page: &Page) -> Result<T, AppError> {
    T::from_properties(&page.properties)
        .map(|record| record.with_id(page.id.clone()))
        .map_err(|source| AppError::InvalidRecord {
            page_id: page.id.to_string(),
            source,
        })
}

/// Reads every page that parses; the rest are logged and skipped.
pub fn parse_records<T: NotionRecord>(pages: &[Page]) -> Vec<T> {
    pages
        .iter()
        .filter_map(|page| match T::from_properties(&page.properties) {
            Ok(record) => Some(record.with_id(page.id.clone())),
            Err(err) => {
                log::info!(
                    "Skipping {} {} due to missing attributes: {}",
                    T::KIND,
                    page.display_name(),
                    err
                );
                None
            }
        })
        .collect()
}
