//! Domain model: the Notion page envelope and the records stored in it.

mod ingredient;
mod page;
pub mod properties;
mod recipe;

pub use ingredient::{Ingredient, IngredientType, UnitOfMeasurement};
pub use page::{Page, Parent, PartialUser};
pub use properties::PropertyMap;
pub use recipe::Recipe;

use crate::error::RecordError;
use crate::types::PageId;

/// A record that lives as one page in a Notion database.
pub trait NotionRecord: Sized + Clone + Send + Sync {
    /// Singular noun used in log lines, e.g. "ingredient".
    const KIND: &'static str;

    /// Reads the record from a page's properties.
    fn from_properties(properties: &PropertyMap) -> Result<Self, RecordError>;

    /// Writes every field of the record as Notion property values.
    fn to_properties(&self) -> PropertyMap;

    fn id(&self) -> Option<&PageId>;

    fn with_id(self, id: PageId) -> Self;

    fn name(&self) -> &str;
}

fn require_title(properties: &PropertyMap, name: &'static str) -> Result<String, RecordError> {
    properties::read_title(properties, name)
        .filter(|title| !title.trim().is_empty())
        .ok_or(RecordError::MissingProperty(name))
}

fn require_number(properties: &PropertyMap, name: &'static str) -> Result<f64, RecordError> {
    let number = properties::read_number(properties, name).ok_or(RecordError::MissingProperty(name))?;
    if !number.is_finite() {
        return Err(RecordError::InvalidValue {
            property: name,
            value: number.to_string(),
            reason: "expected a finite number",
        });
    }
    Ok(number)
}

/// Reads an optional whole, non-negative count such as a shelf life in days.
fn optional_count(properties: &PropertyMap, name: &'static str) -> Result<Option<u32>, RecordError> {
    let Some(number) = properties::read_number(properties, name) else {
        return Ok(None);
    };
    if number < 0.0 || number.fract() != 0.0 || number > f64::from(u32::MAX) {
        return Err(RecordError::InvalidValue {
            property: name,
            value: number.to_string(),
            reason: "expected a whole number of at least zero",
        });
    }
    Ok(Some(number as u32))
}
