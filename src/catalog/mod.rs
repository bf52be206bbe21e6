mod data;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{NutriError, Result};
use crate::models::{Food, FoodCategory, MeasureUnit};

pub use data::builtin_foods;

/// Read-only food table keyed by lowercase id.
///
/// The planner never mutates a catalog; custom foods are merged in up front
/// (last occurrence wins, matching how duplicate entries are deduplicated
/// everywhere else in the app).
pub struct FoodCatalog {
    foods: HashMap<String, Food>,
}

impl FoodCatalog {
    /// Catalog containing only the builtin food table.
    pub fn builtin() -> Self {
        Self::from_foods(builtin_foods())
    }

    /// Build a catalog from an explicit food list, deduplicating by id.
    pub fn from_foods(foods: Vec<Food>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        FoodCatalog { foods: map }
    }

    /// Builtin table plus user-defined foods layered on top.
    pub fn with_custom(custom: &[Food]) -> Self {
        let mut catalog = Self::builtin();
        for food in custom {
            catalog.foods.insert(food.key(), food.clone());
        }
        catalog
    }

    /// Look up a food by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&Food> {
        self.foods.get(&id.to_lowercase())
    }

    /// All foods in a category, sorted by id so downstream choices are
    /// deterministic.
    pub fn foods_in_category(&self, category: FoodCategory) -> Vec<&Food> {
        let mut foods: Vec<&Food> = self
            .foods
            .values()
            .filter(|f| f.category == category)
            .collect();
        foods.sort_by(|a, b| a.id.cmp(&b.id));
        foods
    }

    /// All foods, sorted by id.
    pub fn all(&self) -> Vec<&Food> {
        let mut foods: Vec<&Food> = self.foods.values().collect();
        foods.sort_by(|a, b| a.id.cmp(&b.id));
        foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// CSV row shape for custom-food import.
#[derive(Debug, Deserialize)]
struct FoodRecord {
    id: String,
    name: String,
    category: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    unit: String,
    common_serving: f64,
}

/// Import user-defined foods from a CSV file.
///
/// Expected header: id,name,category,calories,protein,carbs,fat,fiber,
/// unit,common_serving. Rows must conform to the Food shape; the first bad
/// row aborts the import so a typo cannot half-apply.
pub fn import_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();

    for row in reader.deserialize() {
        let record: FoodRecord = row?;

        let category = FoodCategory::from_label(&record.category).ok_or_else(|| {
            NutriError::InvalidFood(format!(
                "{}: unknown category '{}'",
                record.id, record.category
            ))
        })?;

        let unit = match record.unit.trim().to_lowercase().as_str() {
            "g" => MeasureUnit::Grams,
            "ml" => MeasureUnit::Milliliters,
            "unit" => MeasureUnit::Unit,
            other => {
                return Err(NutriError::InvalidFood(format!(
                    "{}: unknown unit '{other}' (expected g, ml, or unit)",
                    record.id
                )));
            }
        };

        let food = Food {
            id: record.id,
            name: record.name,
            category,
            calories: record.calories,
            protein: record.protein,
            carbs: record.carbs,
            fat: record.fat,
            fiber: record.fiber,
            unit,
            common_serving: record.common_serving,
        };

        if !food.is_valid() {
            return Err(NutriError::InvalidFood(format!(
                "{}: negative nutrient or non-positive serving",
                food.id
            )));
        }

        foods.push(food);
    }

    Ok(foods)
}
