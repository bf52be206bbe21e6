use serde::{Deserialize, Serialize};

use crate::models::food::Nutrition;

/// Named meal occasions, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MidMorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
    LateSnack,
}

impl MealSlot {
    /// Stable identifier used as the meal id in persisted plans.
    pub fn id(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MidMorningSnack => "mid_morning_snack",
            MealSlot::Lunch => "lunch",
            MealSlot::AfternoonSnack => "afternoon_snack",
            MealSlot::Dinner => "dinner",
            MealSlot::LateSnack => "late_snack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MidMorningSnack => "Mid-Morning Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon Snack",
            MealSlot::Dinner => "Dinner",
            MealSlot::LateSnack => "Late Snack",
        }
    }
}

/// One food portion inside a meal.
///
/// `nutrition` is a derived snapshot, never independent truth: it must
/// always equal `calculate(food_id, amount)`. Mutations go through the
/// planner's editing functions, which recompute it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealItem {
    pub food_id: String,
    /// Amount in the food's native unit (grams, milliliters, or count).
    pub amount: f64,
    pub nutrition: Nutrition,
}

/// A single meal: a slot, its items, and the derived total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub items: Vec<MealItem>,
    pub total_nutrition: Nutrition,
}

impl Meal {
    /// Build a meal from items, deriving the total.
    pub fn new(slot: MealSlot, items: Vec<MealItem>) -> Self {
        let mut meal = Meal {
            slot,
            items,
            total_nutrition: Nutrition::ZERO,
        };
        meal.recompute_total();
        meal
    }

    pub fn name(&self) -> &'static str {
        self.slot.display_name()
    }

    /// Re-derive the total from the current items. Call after any item
    /// mutation; the total is never maintained incrementally.
    pub fn recompute_total(&mut self) {
        self.total_nutrition = self.items.iter().map(|item| item.nutrition).sum();
    }
}

/// A full day of meals in slot order, plus the derived day total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMealPlan {
    pub meals: Vec<Meal>,
    pub total_nutrition: Nutrition,
}

impl DailyMealPlan {
    /// Build a plan from meals, deriving the day total.
    pub fn new(meals: Vec<Meal>) -> Self {
        let mut plan = DailyMealPlan {
            meals,
            total_nutrition: Nutrition::ZERO,
        };
        plan.recompute_total();
        plan
    }

    /// Re-derive the day total from meal totals.
    pub fn recompute_total(&mut self) {
        self.total_nutrition = self.meals.iter().map(|meal| meal.total_nutrition).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(food_id: &str, calories: f64, protein: f64) -> MealItem {
        MealItem {
            food_id: food_id.to_string(),
            amount: 100.0,
            nutrition: Nutrition {
                calories,
                protein,
                carbs: 0.0,
                fat: 0.0,
                fiber: 0.0,
            },
        }
    }

    #[test]
    fn test_slot_chronological_order() {
        let mut slots = vec![
            MealSlot::Dinner,
            MealSlot::Breakfast,
            MealSlot::LateSnack,
            MealSlot::Lunch,
        ];
        slots.sort();
        assert_eq!(
            slots,
            vec![
                MealSlot::Breakfast,
                MealSlot::Lunch,
                MealSlot::Dinner,
                MealSlot::LateSnack,
            ]
        );
    }

    #[test]
    fn test_meal_total_is_item_sum() {
        let meal = Meal::new(
            MealSlot::Lunch,
            vec![item("chicken_breast", 198.0, 37.2), item("brown_rice", 184.0, 3.9)],
        );
        assert_eq!(meal.total_nutrition.calories, 382.0);
        assert_eq!(meal.total_nutrition.protein, 41.1);
    }

    #[test]
    fn test_plan_total_tracks_meal_removal() {
        let mut plan = DailyMealPlan::new(vec![
            Meal::new(MealSlot::Breakfast, vec![item("oats", 156.0, 6.8)]),
            Meal::new(MealSlot::Lunch, vec![item("chicken_breast", 198.0, 37.2)]),
        ]);
        assert_eq!(plan.total_nutrition.calories, 354.0);

        plan.meals[1].items.clear();
        plan.meals[1].recompute_total();
        plan.recompute_total();
        assert_eq!(plan.total_nutrition.calories, 156.0);
    }

    #[test]
    fn test_empty_meal_has_zero_total() {
        let meal = Meal::new(MealSlot::LateSnack, Vec::new());
        assert_eq!(meal.total_nutrition, Nutrition::ZERO);
    }
}
