// src/constants.rs
//! Domain constants: how the client talks to Notion and how recipe records
//! are laid out as Notion database properties.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL of the hosted Notion API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// API version pinned in the `Notion-Version` header.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// How many objects the Notion API returns per page of results.
///
/// 100 is the API maximum; larger requests are clamped to it.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Maximum characters Notion accepts in a single rich text segment.
pub const RICH_TEXT_SEGMENT_MAX_CHARS: usize = 2000;

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

pub const ENV_NOTION_TOKEN: &str = "NOTION_TOKEN";
pub const ENV_INGREDIENTS_DATABASE_ID: &str = "NOTION_INGREDIENTS_DATABASE_ID";
pub const ENV_RECIPES_DATABASE_ID: &str = "NOTION_RECIPES_DATABASE_ID";
pub const ENV_NOTION_API_BASE_URL: &str = "NOTION_API_BASE_URL";

// ---------------------------------------------------------------------------
// Database schema: property names as they appear in Notion
// ---------------------------------------------------------------------------

/// Title property shared by the ingredient and recipe databases.
pub const PROP_NAME: &str = "Name";

pub const PROP_TYPE: &str = "Type";
pub const PROP_UNITS: &str = "Units of Measurement";
pub const PROP_CALORIES: &str = "Calories per 100g";
pub const PROP_PROTEIN: &str = "Protein per 100g";
pub const PROP_FAT: &str = "Fat per 100g";
pub const PROP_CARBS: &str = "Carbohydrate per 100g";
pub const PROP_SHELF_LIFE_ROOM: &str = "Shelf life room";
pub const PROP_SHELF_LIFE_FRIDGE: &str = "Shelf life fridge";
pub const PROP_SHELF_LIFE_FREEZER: &str = "Shelf life freezer";

pub const PROP_INGREDIENTS: &str = "Ingredients";
pub const PROP_INSTRUCTIONS: &str = "Instructions";
pub const PROP_SERVINGS: &str = "Servings";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_schema_uses_the_property_names() {
        let readme = include_str!("../README.md");
        for name in [
            PROP_NAME,
            PROP_TYPE,
            PROP_UNITS,
            PROP_CALORIES,
            PROP_PROTEIN,
            PROP_FAT,
            PROP_CARBS,
            PROP_SHELF_LIFE_ROOM,
            PROP_SHELF_LIFE_FRIDGE,
            PROP_SHELF_LIFE_FREEZER,
            PROP_INGREDIENTS,
            PROP_INSTRUCTIONS,
            PROP_SERVINGS,
        ] {
            assert!(readme.contains(&format!("`{}`", name)), "README is missing `{}`", name);
        }
    }
}
