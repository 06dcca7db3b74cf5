use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed tag vocabulary offered to the model. Incoming values are not
/// validated against this list; it only constrains the prompt and the
/// response schema.
pub const TAG_VOCABULARY: &[&str] = &[
    "spicy",
    "vegetarian",
    "vegan",
    "seafood",
    "meat",
    "poultry",
    "soup",
    "noodle",
    "rice",
    "dessert",
    "drink",
    "cold",
    "fried",
    "grilled",
    "steamed",
    "classic",
    "signature",
];

/// Closed allergen vocabulary. `allergens` is a comma-joined subset of
/// this list, or "None".
pub const ALLERGEN_VOCABULARY: &[&str] = &[
    "Gluten", "Dairy", "Egg", "Peanut", "Tree Nut", "Soy", "Fish", "Shellfish", "Sesame",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuScanResult {
    /// Source language name of the scanned menu, e.g. "Chinese".
    pub original: String,
    pub dishes: Vec<Dish>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Dish {
    pub original: String,
    pub english: String,
    pub chinese: String,
    pub japanese: String,
    /// Description in the menu's source language. Empty is permitted,
    /// placeholder filler text is scrubbed after parsing.
    pub description: String,
    pub description_english: String,
    pub description_chinese: String,
    pub description_japanese: String,
    pub tags: Vec<String>,
    pub nutrition: NutritionEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionEstimate {
    pub calories: Option<i64>,
    pub protein: Option<i64>,
    pub carbs: Option<i64>,
    pub fat: Option<i64>,
    pub sodium: Option<i64>,
    pub allergens: String,
}

impl Default for NutritionEstimate {
    fn default() -> Self {
        Self {
            calories: None,
            protein: None,
            carbs: None,
            fat: None,
            sodium: None,
            allergens: "None".to_string(),
        }
    }
}
