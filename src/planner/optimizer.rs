use crate::catalog::FoodCatalog;
use crate::models::{Food, MealItem};
use crate::planner::constants::{
    CALORIE_TOLERANCE_KCAL, MAX_ADJUSTMENT_ITERATIONS, MIN_PORTION_AMOUNT, PORTION_STEP_DOWN,
    PORTION_STEP_UP,
};
use crate::planner::nutrition::calculate;

/// Assign portions to a resolved template and nudge them toward the meal's
/// calorie target.
///
/// Every food is seeded at its common serving. Then, for up to
/// [`MAX_ADJUSTMENT_ITERATIONS`] passes, the first item's amount is scaled
/// by [`PORTION_STEP_UP`]/[`PORTION_STEP_DOWN`] until total calories land
/// within [`CALORIE_TOLERANCE_KCAL`] of the target, with the amount floored
/// at [`MIN_PORTION_AMOUNT`].
///
/// Calories only: protein/carb/fat sub-targets are informational for the
/// caller, not solved for. Single-item proportional adjustment is a known
/// approximation; on non-convergence the last computed portions are
/// returned as-is.
pub fn optimize_portions(
    catalog: &FoodCatalog,
    resolved: &[&Food],
    target_calories: f64,
) -> Vec<MealItem> {
    let mut items: Vec<MealItem> = resolved
        .iter()
        .map(|food| MealItem {
            food_id: food.id.clone(),
            amount: food.common_serving,
            nutrition: calculate(catalog, &food.id, food.common_serving),
        })
        .collect();

    if items.is_empty() {
        return items;
    }

    for _ in 0..MAX_ADJUSTMENT_ITERATIONS {
        let total_calories: f64 = items.iter().map(|item| item.nutrition.calories).sum();
        let gap = target_calories - total_calories;

        if gap.abs() < CALORIE_TOLERANCE_KCAL {
            break;
        }

        let step = if gap > 0.0 {
            PORTION_STEP_UP
        } else {
            PORTION_STEP_DOWN
        };

        let primary = &mut items[0];
        primary.amount = (primary.amount * step).max(MIN_PORTION_AMOUNT);
        primary.nutrition = calculate(catalog, &primary.food_id, primary.amount);
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved<'a>(catalog: &'a FoodCatalog, ids: &[&str]) -> Vec<&'a Food> {
        ids.iter().map(|id| catalog.get(id).unwrap()).collect()
    }

    fn total_calories(items: &[MealItem]) -> f64 {
        items.iter().map(|i| i.nutrition.calories).sum()
    }

    #[test]
    fn test_empty_template_yields_empty_items() {
        let catalog = FoodCatalog::builtin();
        assert!(optimize_portions(&catalog, &[], 600.0).is_empty());
    }

    #[test]
    fn test_seeds_at_common_serving() {
        let catalog = FoodCatalog::builtin();
        let foods = resolved(&catalog, &["chicken_breast", "broccoli"]);
        // Seed total is ~249 kcal; within tolerance of 250, so no pass runs.
        let items = optimize_portions(&catalog, &foods, 250.0);

        assert_eq!(items[0].amount, 120.0);
        assert_eq!(items[1].amount, 150.0);
    }

    #[test]
    fn test_converges_upward() {
        let catalog = FoodCatalog::builtin();
        let foods = resolved(&catalog, &["brown_rice", "chicken_breast", "broccoli"]);
        let items = optimize_portions(&catalog, &foods, 600.0);

        assert!((total_calories(&items) - 600.0).abs() < CALORIE_TOLERANCE_KCAL);
        // Only the primary item moved.
        assert!(items[0].amount > 150.0);
        assert_eq!(items[1].amount, 120.0);
        assert_eq!(items[2].amount, 150.0);
    }

    #[test]
    fn test_converges_downward() {
        let catalog = FoodCatalog::builtin();
        let foods = resolved(&catalog, &["oats", "skim_milk"]);
        // Seed is ~224 kcal; target well below forces downward steps.
        let items = optimize_portions(&catalog, &foods, 130.0);

        assert!((total_calories(&items) - 130.0).abs() < CALORIE_TOLERANCE_KCAL);
        assert!(items[0].amount < 40.0);
    }

    #[test]
    fn test_amount_floored_on_impossible_target() {
        let catalog = FoodCatalog::builtin();
        // Olive oil seeds at the 10-unit floor already; a tiny target
        // pushes downward but the clamp holds the amount at the floor.
        let foods = resolved(&catalog, &["olive_oil"]);
        let items = optimize_portions(&catalog, &foods, 5.0);

        assert_eq!(items[0].amount, MIN_PORTION_AMOUNT);
    }

    #[test]
    fn test_snapshot_matches_calculator_after_adjustment() {
        let catalog = FoodCatalog::builtin();
        let foods = resolved(&catalog, &["brown_rice", "chicken_breast"]);
        let items = optimize_portions(&catalog, &foods, 700.0);

        for item in &items {
            let expected = calculate(&catalog, &item.food_id, item.amount);
            assert_eq!(item.nutrition, expected);
        }
    }

    #[test]
    fn test_best_effort_when_target_unreachable() {
        let catalog = FoodCatalog::builtin();
        let foods = resolved(&catalog, &["lettuce"]);
        // 1.1^10 of an 80 g lettuce portion can't reach 2000 kcal; the
        // optimizer must still terminate and return what it has.
        let items = optimize_portions(&catalog, &foods, 2000.0);

        assert_eq!(items.len(), 1);
        assert!(total_calories(&items) < 2000.0);
    }
}
