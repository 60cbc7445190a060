//! Notion-backed recipe store: recipe and ingredient CRUD expressed as
//! Notion page operations.

mod database;
mod records;

pub use database::NotionDatabase;
pub use records::{parse_record, parse_records, IngredientCatalog, RecipeBook, RecordStore};
