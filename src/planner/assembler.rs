use rand::Rng;

use crate::catalog::FoodCatalog;
use crate::models::{DailyMealPlan, Meal, NutritionalTargets, UserPreferences};
use crate::planner::distribution::{distribution_for, slot_targets};
use crate::planner::optimizer::optimize_portions;
use crate::planner::templates::{resolve_template, select_template};

/// Assemble a full day's meal plan.
///
/// Each active slot gets its share of the day targets, a randomly selected
/// template resolved against the user's preferences, and optimized
/// portions. Generation never fails: a slot whose roles all filter away
/// produces an empty meal with zero nutrition instead of aborting the plan.
///
/// The returned plan is an independent value; callers edit it through the
/// [`crate::planner::edit`] functions, which re-derive all totals.
pub fn assemble<R: Rng>(
    catalog: &FoodCatalog,
    day_targets: &NutritionalTargets,
    preferences: &UserPreferences,
    rng: &mut R,
) -> DailyMealPlan {
    let mut meals = Vec::new();

    for (slot, share) in distribution_for(preferences.meal_frequency) {
        let targets = slot_targets(day_targets, share);
        let template = select_template(*slot, rng);
        let resolved = resolve_template(catalog, template, preferences);
        let items = optimize_portions(catalog, &resolved, targets.calories);
        meals.push(Meal::new(*slot, items));
    }

    DailyMealPlan::new(meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealFrequency, MealSlot};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day_targets() -> NutritionalTargets {
        NutritionalTargets {
            calories: 2000.0,
            protein: 150.0,
            carbs: 225.0,
            fat: 67.0,
        }
    }

    fn prefs(frequency: MealFrequency) -> UserPreferences {
        UserPreferences {
            preferred_foods: Vec::new(),
            avoided_foods: Vec::new(),
            meal_frequency: frequency,
        }
    }

    #[test]
    fn test_three_meal_slots() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let plan = assemble(&catalog, &day_targets(), &prefs(MealFrequency::Three), &mut rng);

        let slots: Vec<MealSlot> = plan.meals.iter().map(|m| m.slot).collect();
        assert_eq!(slots, vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]);
    }

    #[test]
    fn test_day_total_is_meal_sum() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(2);
        let plan = assemble(&catalog, &day_targets(), &prefs(MealFrequency::Six), &mut rng);

        let summed: f64 = plan.meals.iter().map(|m| m.total_nutrition.calories).sum();
        assert_eq!(plan.total_nutrition.calories, summed);
    }

    #[test]
    fn test_unfillable_slot_yields_empty_meal() {
        let catalog = FoodCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        // Avoid every category the late-snack templates can draw from.
        let preferences = UserPreferences {
            avoided_foods: vec![
                "dairy".to_string(),
                "carb".to_string(),
                "fruit".to_string(),
            ],
            preferred_foods: Vec::new(),
            meal_frequency: MealFrequency::Six,
        };

        let plan = assemble(&catalog, &day_targets(), &preferences, &mut rng);
        assert_eq!(plan.meals.len(), 6);

        let late = plan
            .meals
            .iter()
            .find(|m| m.slot == MealSlot::LateSnack)
            .unwrap();
        assert!(late.items.is_empty());
        assert_eq!(late.total_nutrition.calories, 0.0);
    }
}
