use super::properties::{self, number_value, relation_value, rich_text_value, title_value, PropertyMap};
use super::{optional_count, require_title, NotionRecord};
use crate::constants::*;
use crate::error::RecordError;
use crate::types::PageId;
use serde::{Deserialize, Serialize};

/// A recipe: a name, the ingredient pages it uses, and free-text instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PageId>,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<PageId>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub servings: Option<u32>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
            servings: None,
        }
    }

    /// Ingredient references with duplicates removed, first occurrence kept.
    pub fn unique_ingredients(&self) -> Vec<PageId> {
        let mut seen = std::collections::HashSet::new();
        self.ingredients
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect()
    }
}

impl NotionRecord for Recipe {
    const KIND: &'static str = "recipe";

    fn from_properties(props: &PropertyMap) -> Result<Self, RecordError> {
        // A partial relation written back would drop the missing references.
        if properties::relation_has_more(props, PROP_INGREDIENTS) {
            return Err(RecordError::IncompleteRelation(PROP_INGREDIENTS));
        }
        Ok(Self {
            id: None,
            name: require_title(props, PROP_NAME)?,
            ingredients: properties::read_relation(props, PROP_INGREDIENTS).unwrap_or_default(),
            instructions: properties::read_rich_text(props, PROP_INSTRUCTIONS).unwrap_or_default(),
            servings: optional_count(props, PROP_SERVINGS)?,
        })
    }

    fn to_properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new();
        props.insert(PROP_NAME.to_string(), title_value(&self.name));
        props.insert(
            PROP_INGREDIENTS.to_string(),
            relation_value(&self.unique_ingredients()),
        );
        props.insert(
            PROP_INSTRUCTIONS.to_string(),
            rich_text_value(&self.instructions),
        );
        props.insert(
            PROP_SERVINGS.to_string(),
            number_value(self.servings.map(f64::from)),
        );
        props
    }

    fn id(&self) -> Option<&PageId> {
        self.id.as_ref()
    }

    fn with_id(self, id: PageId) -> Self {
        Self { id: Some(id), ..self }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
