//! Text and JSON rendering of records for the CLI.

use crate::error::AppError;
use crate::model::{Ingredient, Recipe};
use serde::Serialize;
use std::fmt::Write;

/// Pretty JSON for any record or list of records.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn days(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |d| format!("{}d", d))
}

/// One line per ingredient: name, type, and nutrition per 100g.
pub fn ingredient_line(ingredient: &Ingredient) -> String {
    format!(
        "{:<24} {:<18} {:>6.1} kcal  P {:>5.1}  F {:>5.1}  C {:>5.1}  shelf {}/{}/{}{}",
        ingredient.name,
        ingredient.ingredient_type,
        ingredient.calories_per_100g,
        ingredient.protein_per_100g,
        ingredient.fat_per_100g,
        ingredient.carbs_per_100g,
        days(ingredient.shelf_life_room),
        days(ingredient.shelf_life_fridge),
        days(ingredient.shelf_life_freezer),
        ingredient
            .id
            .as_ref()
            .map(|id| format!("  [{}]", id))
            .unwrap_or_default(),
    )
}

pub fn render_ingredients(ingredients: &[Ingredient]) -> String {
    let mut out = String::new();
    for ingredient in ingredients {
        out.push_str(&ingredient_line(ingredient));
        out.push('\n');
    }
    let _ = write!(out, "{} ingredient(s)", ingredients.len());
    out
}

pub fn recipe_line(recipe: &Recipe) -> String {
    let servings = recipe
        .servings
        .map(|s| format!(", serves {}", s))
        .unwrap_or_default();
    let id = recipe
        .id
        .as_ref()
        .map(|id| format!("  [{}]", id))
        .unwrap_or_default();
    format!(
        "{} ({} ingredient(s){}){}",
        recipe.name,
        recipe.unique_ingredients().len(),
        servings,
        id
    )
}

pub fn render_recipes(recipes: &[Recipe]) -> String {
    let mut out = String::new();
    for recipe in recipes {
        out.push_str(&recipe_line(recipe));
        out.push('\n');
    }
    let _ = write!(out, "{} recipe(s)", recipes.len());
    out
}

/// Full recipe view with its resolved ingredients and instructions.
pub fn render_recipe_detail(recipe: &Recipe, ingredients: &[Ingredient]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe_line(recipe));
    if !ingredients.is_empty() {
        let _ = writeln!(out, "\nIngredients:");
        for ingredient in ingredients {
            let _ = writeln!(
                out,
                "  - {} ({}, {} kcal/100g)",
                ingredient.name, ingredient.ingredient_type, ingredient.calories_per_100g
            );
        }
    }
    let missing = recipe.unique_ingredients().len().saturating_sub(ingredients.len());
    if missing > 0 {
        let _ = writeln!(out, "  ({} referenced ingredient(s) could not be read)", missing);
    }
    if !recipe.instructions.is_empty() {
        let _ = writeln!(out, "\nInstructions:\n{}", recipe.instructions);
    }
    out.trim_end().to_string()
}

/// JSON shape of `recipes show`: the recipe plus its resolved ingredients.
#[derive(Serialize)]
pub struct RecipeDetail<'a> {
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    pub resolved_ingredients: &'a [Ingredient],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientType, UnitOfMeasurement};

    fn rice() -> Ingredient {
        Ingredient {
            id: None,
            name: "Rice".to_string(),
            ingredient_type: IngredientType::Grain,
            units_of_measurement: UnitOfMeasurement::Grams,
            calories_per_100g: 130.0,
            protein_per_100g: 2.7,
            fat_per_100g: 0.3,
            carbs_per_100g: 28.0,
            shelf_life_room: Some(365),
            shelf_life_fridge: None,
            shelf_life_freezer: None,
        }
    }

    #[test]
    fn ingredient_line_shows_nutrition_and_shelf_life() {
        let line = ingredient_line(&rice());
        assert!(line.starts_with("Rice"));
        assert!(line.contains("Grain"));
        assert!(line.contains("130.0 kcal"));
        assert!(line.contains("shelf 365d/-/-"));
    }

    #[test]
    fn recipe_detail_reports_unresolved_references() {
        let mut recipe = Recipe::new("Rice bowl");
        recipe.ingredients = vec![
            crate::types::PageId::parse("550e8400e29b41d4a716446655440000").unwrap(),
            crate::types::PageId::parse("550e8400e29b41d4a716446655440001").unwrap(),
        ];
        recipe.instructions = "Boil.".to_string();
        let text = render_recipe_detail(&recipe, &[rice()]);
        assert!(text.contains("  - Rice (Grain, 130 kcal/100g)"));
        assert!(text.contains("1 referenced ingredient(s) could not be read"));
        assert!(text.ends_with("Boil."));
    }

    #[test]
    fn detail_json_flattens_recipe() {
        let recipe = Recipe::new("Rice bowl");
        let ingredients = [rice()];
        let json = to_json(&RecipeDetail {
            recipe: &recipe,
            resolved_ingredients: &ingredients,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Rice bowl");
        assert_eq!(value["resolved_ingredients"][0]["name"], "Rice");
    }
}
