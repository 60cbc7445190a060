// src/cli.rs
//! Command-line surface: global flags, subcommands, and the field overlays
//! that turn flags into records.

use crate::model::{Ingredient, IngredientType, Recipe, UnitOfMeasurement};
use crate::types::{PageId, ValidationError};
use clap::{Args, Parser, Subcommand};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(name = "recipe-buddy", author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Print records as JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Ingredients database ID or URL (overrides NOTION_INGREDIENTS_DATABASE_ID)
    #[arg(long, global = true)]
    pub ingredients_db: Option<String>,

    /// Recipes database ID or URL (overrides NOTION_RECIPES_DATABASE_ID)
    #[arg(long, global = true)]
    pub recipes_db: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Manage the ingredients database
    #[command(subcommand)]
    Ingredients(IngredientCommand),

    /// Manage the recipes database
    #[command(subcommand)]
    Recipes(RecipeCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum IngredientCommand {
    /// List every valid ingredient
    List,
    /// Show one ingredient by page ID or URL
    Show { id: PageId },
    /// Create an ingredient
    Add(IngredientFields),
    /// Change fields of an existing ingredient
    Update {
        id: PageId,
        #[command(flatten)]
        fields: IngredientFields,
    },
    /// Archive (delete) an ingredient
    Archive { id: PageId },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum RecipeCommand {
    /// List every valid recipe
    List,
    /// Show one recipe and its resolved ingredients
    Show { id: PageId },
    /// Create a recipe
    Add(RecipeFields),
    /// Change fields of an existing recipe
    Update {
        id: PageId,
        #[command(flatten)]
        fields: RecipeFields,
    },
    /// Archive (delete) a recipe
    Archive { id: PageId },
}

/// Ingredient fields given on the command line. All optional so the same
/// flags serve `add` (where most are required) and `update`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct IngredientFields {
    #[arg(long)]
    pub name: Option<String>,

    /// Food group, e.g. "Protein" or "Herb/Spice"
    #[arg(long = "type")]
    pub ingredient_type: Option<IngredientType>,

    /// Unit of measurement (defaults to grams on add)
    #[arg(long)]
    pub unit: Option<UnitOfMeasurement>,

    /// Calories per 100g
    #[arg(long)]
    pub calories: Option<f64>,

    /// Protein per 100g
    #[arg(long)]
    pub protein: Option<f64>,

    /// Fat per 100g
    #[arg(long)]
    pub fat: Option<f64>,

    /// Carbohydrate per 100g
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Shelf life at room temperature, in days
    #[arg(long)]
    pub shelf_room: Option<u32>,

    /// Shelf life in the fridge, in days
    #[arg(long)]
    pub shelf_fridge: Option<u32>,

    /// Shelf life in the freezer, in days
    #[arg(long)]
    pub shelf_freezer: Option<u32>,

    /// Remove the room-temperature shelf life
    #[arg(long, default_value_t = false, conflicts_with = "shelf_room")]
    pub clear_shelf_room: bool,

    /// Remove the fridge shelf life
    #[arg(long, default_value_t = false, conflicts_with = "shelf_fridge")]
    pub clear_shelf_fridge: bool,

    /// Remove the freezer shelf life
    #[arg(long, default_value_t = false, conflicts_with = "shelf_freezer")]
    pub clear_shelf_freezer: bool,
}

impl IngredientFields {
    /// Builds a new ingredient; every nutrition field and the name are required.
    pub fn build(&self) -> Result<Ingredient, ValidationError> {
        self.check_nutrition()?;
        Ok(Ingredient {
            id: None,
            name: non_empty_name(self.name.as_deref())?,
            ingredient_type: self.ingredient_type.ok_or(ValidationError::EmptyField("--type"))?,
            units_of_measurement: self.unit.unwrap_or(UnitOfMeasurement::Grams),
            calories_per_100g: self.calories.ok_or(ValidationError::EmptyField("--calories"))?,
            protein_per_100g: self.protein.ok_or(ValidationError::EmptyField("--protein"))?,
            fat_per_100g: self.fat.ok_or(ValidationError::EmptyField("--fat"))?,
            carbs_per_100g: self.carbs.ok_or(ValidationError::EmptyField("--carbs"))?,
            shelf_life_room: self.shelf_room,
            shelf_life_fridge: self.shelf_fridge,
            shelf_life_freezer: self.shelf_freezer,
        })
    }

    /// Overlays the given flags on an existing ingredient.
    pub fn apply(&self, ingredient: Ingredient) -> Result<Ingredient, ValidationError> {
        if *self == Self::default() {
            return Err(ValidationError::InvalidValue {
                field: "update",
                reason: "no fields to change were given".to_string(),
            });
        }
        self.check_nutrition()?;
        let name = match self.name.as_deref() {
            Some(name) => non_empty_name(Some(name))?,
            None => ingredient.name,
        };
        Ok(Ingredient {
            id: ingredient.id,
            name,
            ingredient_type: self.ingredient_type.unwrap_or(ingredient.ingredient_type),
            units_of_measurement: self.unit.unwrap_or(ingredient.units_of_measurement),
            calories_per_100g: self.calories.unwrap_or(ingredient.calories_per_100g),
            protein_per_100g: self.protein.unwrap_or(ingredient.protein_per_100g),
            fat_per_100g: self.fat.unwrap_or(ingredient.fat_per_100g),
            carbs_per_100g: self.carbs.unwrap_or(ingredient.carbs_per_100g),
            shelf_life_room: overlay(
                self.shelf_room,
                self.clear_shelf_room,
                ingredient.shelf_life_room,
            ),
            shelf_life_fridge: overlay(
                self.shelf_fridge,
                self.clear_shelf_fridge,
                ingredient.shelf_life_fridge,
            ),
            shelf_life_freezer: overlay(
                self.shelf_freezer,
                self.clear_shelf_freezer,
                ingredient.shelf_life_freezer,
            ),
        })
    }

    /// Notion stores non-finite numbers as `null`, so they never leave the CLI.
    fn check_nutrition(&self) -> Result<(), ValidationError> {
        let given = [
            ("--calories", self.calories),
            ("--protein", self.protein),
            ("--fat", self.fat),
            ("--carbs", self.carbs),
        ];
        for (field, value) in given {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ValidationError::InvalidValue {
                        field,
                        reason: format!("expected a finite number of at least zero, got {}", value),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Recipe fields given on the command line.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RecipeFields {
    #[arg(long)]
    pub name: Option<String>,

    /// Ingredient page ID or URL; repeat for several
    #[arg(long = "ingredient")]
    pub ingredients: Vec<PageId>,

    /// Remove all ingredient references before adding any given ones
    #[arg(long, default_value_t = false)]
    pub clear_ingredients: bool,

    #[arg(long)]
    pub instructions: Option<String>,

    /// Remove the instructions
    #[arg(long, default_value_t = false, conflicts_with = "instructions")]
    pub clear_instructions: bool,

    #[arg(long)]
    pub servings: Option<u32>,

    /// Remove the servings count
    #[arg(long, default_value_t = false, conflicts_with = "servings")]
    pub clear_servings: bool,
}

impl RecipeFields {
    pub fn build(&self) -> Result<Recipe, ValidationError> {
        Ok(Recipe {
            id: None,
            name: non_empty_name(self.name.as_deref())?,
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone().unwrap_or_default(),
            servings: self.servings,
        })
    }

    /// Overlays the given flags on an existing recipe. New ingredient
    /// references are appended unless `--clear-ingredients` is set.
    pub fn apply(&self, recipe: Recipe) -> Result<Recipe, ValidationError> {
        if *self == Self::default() {
            return Err(ValidationError::InvalidValue {
                field: "update",
                reason: "no fields to change were given".to_string(),
            });
        }
        let name = match self.name.as_deref() {
            Some(name) => non_empty_name(Some(name))?,
            None => recipe.name,
        };
        let mut ingredients = if self.clear_ingredients {
            Vec::new()
        } else {
            recipe.ingredients
        };
        ingredients.extend(self.ingredients.iter().cloned());
        Ok(Recipe {
            id: recipe.id,
            name,
            ingredients,
            instructions: overlay(
                self.instructions.clone(),
                self.clear_instructions,
                Some(recipe.instructions),
            )
            .unwrap_or_default(),
            servings: overlay(self.servings, self.clear_servings, recipe.servings),
        })
    }
}

/// A given value wins, then a clear flag, then the existing value.
fn overlay<T>(given: Option<T>, clear: bool, existing: Option<T>) -> Option<T> {
    match (given, clear) {
        (Some(value), _) => Some(value),
        (None, true) => None,
        (None, false) => existing,
    }
}

fn non_empty_name(name: Option<&str>) -> Result<String, ValidationError> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::EmptyField("--name"))
}
