use crate::catalog::FoodCatalog;
use crate::models::Nutrition;

/// Round a macro/fiber value to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Absolute nutrition for `amount` of the given food.
///
/// An unknown id yields a zero record; callers never see a missing-food
/// error here. Count-based foods scale by `amount` directly, everything
/// else by `amount / 100` against the per-100 reference values.
///
/// Rounding happens here and only here: calories to the nearest kcal, the
/// other components to one decimal. Aggregates sum these rounded values, so
/// totals drift slightly from an unrounded computation; that is intended.
pub fn calculate(catalog: &FoodCatalog, food_id: &str, amount: f64) -> Nutrition {
    let Some(food) = catalog.get(food_id) else {
        return Nutrition::ZERO;
    };

    let multiplier = if food.unit.is_count() {
        amount
    } else {
        amount / 100.0
    };

    Nutrition {
        calories: (food.calories * multiplier).round(),
        protein: round_tenth(food.protein * multiplier),
        carbs: round_tenth(food.carbs * multiplier),
        fat: round_tenth(food.fat * multiplier),
        fiber: round_tenth(food.fiber * multiplier),
    }
}
