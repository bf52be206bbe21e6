use std::fmt;

use serde::{Deserialize, Serialize};

/// Absolute nutrition for some amount of food.
///
/// Calories are kcal; protein, carbs, fat, and fiber are grams. Values
/// produced by the calculator are already rounded (calories to whole kcal,
/// the rest to one decimal), so sums of these accumulate small rounding
/// drift versus an unrounded computation. That is accepted behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl Nutrition {
    pub const ZERO: Nutrition = Nutrition {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
        fiber: 0.0,
    };
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Nutrition>>(iter: I) -> Nutrition {
        iter.fold(Nutrition::ZERO, |acc, n| acc + n)
    }
}

/// Closed set of food categories.
///
/// Category labels double as the vocabulary for preference matching, so a
/// user can avoid "dairy" or prefer "legume" without naming single foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Carb,
    Fat,
    Vegetable,
    Dairy,
    Fruit,
    Legume,
    Other,
}

impl FoodCategory {
    /// Lowercase label used for substring matching and display.
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Carb => "carb",
            FoodCategory::Fat => "fat",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Legume => "legume",
            FoodCategory::Other => "other",
        }
    }

    /// Parse a label produced by [`FoodCategory::label`].
    pub fn from_label(label: &str) -> Option<FoodCategory> {
        match label.trim().to_lowercase().as_str() {
            "protein" => Some(FoodCategory::Protein),
            "carb" => Some(FoodCategory::Carb),
            "fat" => Some(FoodCategory::Fat),
            "vegetable" => Some(FoodCategory::Vegetable),
            "dairy" => Some(FoodCategory::Dairy),
            "fruit" => Some(FoodCategory::Fruit),
            "legume" => Some(FoodCategory::Legume),
            "other" => Some(FoodCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a food's amount is measured.
///
/// Mass and volume foods carry nutrients per 100 g / 100 ml; count-based
/// foods carry nutrients per single unit (one egg, one slice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "unit")]
    Unit,
}

impl MeasureUnit {
    /// Short suffix for rendering amounts.
    pub fn suffix(&self) -> &'static str {
        match self {
            MeasureUnit::Grams => "g",
            MeasureUnit::Milliliters => "ml",
            MeasureUnit::Unit => "un",
        }
    }

    /// Count-based foods scale by amount directly instead of amount/100.
    pub fn is_count(&self) -> bool {
        matches!(self, MeasureUnit::Unit)
    }
}

/// A catalog food with its nutritional profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,

    /// Per 100 g/ml, or per single unit for count-based foods.
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,

    pub unit: MeasureUnit,

    /// Sensible default portion in the food's native unit; seeds the
    /// portion optimizer.
    pub common_serving: f64,
}

impl Food {
    /// Non-negative nutrients, a usable id, and a positive serving.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
            && self.fiber >= 0.0
            && self.common_serving > 0.0
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food {
            id: "oats".to_string(),
            name: "Oats".to_string(),
            category: FoodCategory::Carb,
            calories: 389.0,
            protein: 17.0,
            carbs: 66.0,
            fat: 7.0,
            fiber: 10.0,
            unit: MeasureUnit::Grams,
            common_serving: 40.0,
        }
    }

    #[test]
    fn test_nutrition_sum() {
        let a = Nutrition {
            calories: 100.0,
            protein: 10.0,
            carbs: 5.0,
            fat: 2.0,
            fiber: 1.0,
        };
        let b = Nutrition {
            calories: 50.0,
            protein: 1.0,
            carbs: 8.0,
            fat: 0.5,
            fiber: 0.2,
        };

        let total: Nutrition = [a, b].into_iter().sum();
        assert_eq!(total.calories, 150.0);
        assert_eq!(total.protein, 11.0);
        assert_eq!(total.fiber, 1.2);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut negative = sample_food();
        negative.protein = -1.0;
        assert!(!negative.is_valid());

        let mut no_serving = sample_food();
        no_serving.common_serving = 0.0;
        assert!(!no_serving.is_valid());

        let mut blank_id = sample_food();
        blank_id.id = "  ".to_string();
        assert!(!blank_id.is_valid());
    }

    #[test]
    fn test_category_label_roundtrip() {
        for cat in [
            FoodCategory::Protein,
            FoodCategory::Carb,
            FoodCategory::Fat,
            FoodCategory::Vegetable,
            FoodCategory::Dairy,
            FoodCategory::Fruit,
            FoodCategory::Legume,
            FoodCategory::Other,
        ] {
            assert_eq!(FoodCategory::from_label(cat.label()), Some(cat));
        }
        assert_eq!(FoodCategory::from_label("granola"), None);
    }
}
