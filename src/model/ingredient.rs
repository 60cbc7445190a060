use super::properties::{self, number_value, select_value, title_value, PropertyMap};
use super::{optional_count, require_number, require_title, NotionRecord};
use crate::constants::*;
use crate::error::RecordError;
use crate::types::{PageId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Food group of an ingredient, matching the `Type` select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientType {
    Protein,
    Dairy,
    Fruit,
    Vegetable,
    Grain,
    #[serde(rename = "Legume/Pulse")]
    LegumePulse,
    #[serde(rename = "Baking Ingredient")]
    BakingIngredient,
    #[serde(rename = "Condiment/Sauce")]
    CondimentSauce,
    #[serde(rename = "Nuts/Seeds")]
    NutSeed,
    #[serde(rename = "Herb/Spice")]
    HerbSpice,
    #[serde(rename = "Oil/Fat")]
    OilFat,
    Other,
}

impl IngredientType {
    pub const ALL: [IngredientType; 12] = [
        Self::Protein,
        Self::Dairy,
        Self::Fruit,
        Self::Vegetable,
        Self::Grain,
        Self::LegumePulse,
        Self::BakingIngredient,
        Self::CondimentSauce,
        Self::NutSeed,
        Self::HerbSpice,
        Self::OilFat,
        Self::Other,
    ];

    /// The select option label used in Notion.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::Dairy => "Dairy",
            Self::Fruit => "Fruit",
            Self::Vegetable => "Vegetable",
            Self::Grain => "Grain",
            Self::LegumePulse => "Legume/Pulse",
            Self::BakingIngredient => "Baking Ingredient",
            Self::CondimentSauce => "Condiment/Sauce",
            Self::NutSeed => "Nuts/Seeds",
            Self::HerbSpice => "Herb/Spice",
            Self::OilFat => "Oil/Fat",
            Self::Other => "Other",
        }
    }

    /// Exact, case-sensitive match against a Notion select label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Case-insensitive parse for user input, e.g. `--type "herb/spice"`.
impl FromStr for IngredientType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "type",
                reason: format!(
                    "'{}' is not one of: {}",
                    s,
                    Self::ALL.map(|kind| kind.label()).join(", ")
                ),
            })
    }
}

/// Unit an ingredient is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasurement {
    Grams,
}

impl UnitOfMeasurement {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Grams => "grams",
        }
    }
}

impl fmt::Display for UnitOfMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Matches after lower-casing, so Notion options `Grams` and `grams` agree.
impl FromStr for UnitOfMeasurement {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grams" => Ok(Self::Grams),
            _ => Err(ValidationError::InvalidValue {
                field: "unit",
                reason: format!("'{}' is not a supported unit (grams)", s),
            }),
        }
    }
}

/// An ingredient with nutrition per 100g and optional shelf lives in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PageId>,
    pub name: String,
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
    pub units_of_measurement: UnitOfMeasurement,
    pub calories_per_100g: f64,
    pub protein_per_100g: f64,
    pub fat_per_100g: f64,
    pub carbs_per_100g: f64,
    #[serde(default)]
    pub shelf_life_room: Option<u32>,
    #[serde(default)]
    pub shelf_life_fridge: Option<u32>,
    #[serde(default)]
    pub shelf_life_freezer: Option<u32>,
}

impl NotionRecord for Ingredient {
    const KIND: &'static str = "ingredient";

    fn from_properties(props: &PropertyMap) -> Result<Self, RecordError> {
        let name = require_title(props, PROP_NAME)?;

        let type_label =
            properties::read_select(props, PROP_TYPE).ok_or(RecordError::MissingProperty(PROP_TYPE))?;
        let ingredient_type =
            IngredientType::from_label(&type_label).ok_or(RecordError::UnknownOption {
                property: PROP_TYPE,
                value: type_label,
            })?;

        let unit_label = properties::read_select(props, PROP_UNITS)
            .ok_or(RecordError::MissingProperty(PROP_UNITS))?;
        let units_of_measurement =
            unit_label
                .parse::<UnitOfMeasurement>()
                .map_err(|_| RecordError::UnknownOption {
                    property: PROP_UNITS,
                    value: unit_label,
                })?;

        Ok(Self {
            id: None,
            name,
            ingredient_type,
            units_of_measurement,
            calories_per_100g: require_number(props, PROP_CALORIES)?,
            protein_per_100g: require_number(props, PROP_PROTEIN)?,
            fat_per_100g: require_number(props, PROP_FAT)?,
            carbs_per_100g: require_number(props, PROP_CARBS)?,
            shelf_life_room: optional_count(props, PROP_SHELF_LIFE_ROOM)?,
            shelf_life_fridge: optional_count(props, PROP_SHELF_LIFE_FRIDGE)?,
            shelf_life_freezer: optional_count(props, PROP_SHELF_LIFE_FREEZER)?,
        })
    }

    fn to_properties(&self) -> PropertyMap {
        let days = |value: Option<u32>| number_value(value.map(f64::from));

        let mut props = PropertyMap::new();
        props.insert(PROP_NAME.to_string(), title_value(&self.name));
        props.insert(PROP_TYPE.to_string(), select_value(self.ingredient_type.label()));
        props.insert(
            PROP_UNITS.to_string(),
            select_value(self.units_of_measurement.label()),
        );
        props.insert(PROP_CALORIES.to_string(), number_value(Some(self.calories_per_100g)));
        props.insert(PROP_PROTEIN.to_string(), number_value(Some(self.protein_per_100g)));
        props.insert(PROP_FAT.to_string(), number_value(Some(self.fat_per_100g)));
        props.insert(PROP_CARBS.to_string(), number_value(Some(self.carbs_per_100g)));
        props.insert(PROP_SHELF_LIFE_ROOM.to_string(), days(self.shelf_life_room));
        props.insert(PROP_SHELF_LIFE_FRIDGE.to_string(), days(self.shelf_life_fridge));
        props.insert(PROP_SHELF_LIFE_FREEZER.to_string(), days(self.shelf_life_freezer));
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
