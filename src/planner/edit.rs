//! Whole-value edits on a generated plan.
//!
//! An edited plan must obey the same invariants as a freshly assembled one:
//! item snapshots equal the calculator's output and every total is
//! re-derived from its parts. No running total survives an edit.

use crate::catalog::FoodCatalog;
use crate::error::{NutriError, Result};
use crate::models::DailyMealPlan;
use crate::planner::nutrition::calculate;

fn check_indices(plan: &DailyMealPlan, meal_idx: usize, item_idx: usize) -> Result<()> {
    let meal = plan
        .meals
        .get(meal_idx)
        .ok_or_else(|| NutriError::InvalidInput(format!("no meal at index {meal_idx}")))?;
    if item_idx >= meal.items.len() {
        return Err(NutriError::InvalidInput(format!(
            "no item at index {item_idx} in {}",
            meal.name()
        )));
    }
    Ok(())
}

/// Change an item's amount, recomputing its snapshot and both totals.
pub fn set_item_amount(
    plan: &mut DailyMealPlan,
    catalog: &FoodCatalog,
    meal_idx: usize,
    item_idx: usize,
    amount: f64,
) -> Result<()> {
    if amount <= 0.0 {
        return Err(NutriError::InvalidInput(
            "amount must be positive".to_string(),
        ));
    }
    check_indices(plan, meal_idx, item_idx)?;

    let item = &mut plan.meals[meal_idx].items[item_idx];
    item.amount = amount;
    item.nutrition = calculate(catalog, &item.food_id, amount);

    plan.meals[meal_idx].recompute_total();
    plan.recompute_total();
    Ok(())
}

/// Swap an item for another catalog food at that food's common serving.
pub fn substitute_item(
    plan: &mut DailyMealPlan,
    catalog: &FoodCatalog,
    meal_idx: usize,
    item_idx: usize,
    food_id: &str,
) -> Result<()> {
    check_indices(plan, meal_idx, item_idx)?;
    let food = catalog
        .get(food_id)
        .ok_or_else(|| NutriError::InvalidFood(food_id.to_string()))?;

    let item = &mut plan.meals[meal_idx].items[item_idx];
    item.food_id = food.id.clone();
    item.amount = food.common_serving;
    item.nutrition = calculate(catalog, &food.id, food.common_serving);

    plan.meals[meal_idx].recompute_total();
    plan.recompute_total();
    Ok(())
}

/// Remove an item, recomputing both totals.
pub fn remove_item(plan: &mut DailyMealPlan, meal_idx: usize, item_idx: usize) -> Result<()> {
    check_indices(plan, meal_idx, item_idx)?;

    plan.meals[meal_idx].items.remove(item_idx);
    plan.meals[meal_idx].recompute_total();
    plan.recompute_total();
    Ok(())
}
