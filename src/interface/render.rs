use crate::catalog::FoodCatalog;
use crate::models::{DailyMealPlan, GoalSettings, NutritionalTargets, UserProfile};
use crate::progress::{DailyProgress, StreakInfo, WeeklyStats};
use crate::targets::{bmi_category, body_mass_index, daily_energy_expenditure};

/// Display the derived targets with the numbers behind them.
pub fn display_targets(profile: &UserProfile, goals: &GoalSettings, targets: &NutritionalTargets) {
    let bmi = body_mass_index(profile);

    println!();
    println!("=== Daily Targets ===");
    println!("BMI: {:.1} ({})", bmi, bmi_category(bmi));
    println!("Maintenance: {:.0} kcal", daily_energy_expenditure(profile));
    if goals.calorie_adjustment_pct != 0 {
        println!("Adjustment: {:+}%", goals.calorie_adjustment_pct);
    }
    println!(
        "Target: {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        targets.calories, targets.protein, targets.carbs, targets.fat
    );
    println!();
}

/// Display a full meal plan with per-item amounts and per-meal totals.
pub fn display_meal_plan(plan: &DailyMealPlan, targets: &NutritionalTargets, catalog: &FoodCatalog) {
    println!();
    println!("=== Daily Meal Plan ===");

    for meal in &plan.meals {
        println!();
        println!("--- {} ---", meal.name());

        if meal.items.is_empty() {
            println!("  (no foods match your preferences for this meal)");
            continue;
        }

        let max_name_len = meal
            .items
            .iter()
            .map(|item| {
                catalog
                    .get(&item.food_id)
                    .map(|f| f.name.len())
                    .unwrap_or(item.food_id.len())
            })
            .max()
            .unwrap_or(10);

        for item in &meal.items {
            let (name, suffix) = match catalog.get(&item.food_id) {
                Some(food) => (food.name.clone(), food.unit.suffix()),
                None => (item.food_id.clone(), ""),
            };
            println!(
                "  {:<width$}  {:>6.0} {:<3} {:>5.0} kcal | P {:>5.1} C {:>5.1} F {:>5.1}",
                name,
                item.amount,
                suffix,
                item.nutrition.calories,
                item.nutrition.protein,
                item.nutrition.carbs,
                item.nutrition.fat,
                width = max_name_len
            );
        }

        let total = meal.total_nutrition;
        println!(
            "  Total: {:.0} kcal | P {:.1} g | C {:.1} g | F {:.1} g",
            total.calories, total.protein, total.carbs, total.fat
        );
    }

    let total = plan.total_nutrition;
    println!();
    println!("--- Day Summary ---");
    println!(
        "Planned: {:.0} kcal | P {:.1} g | C {:.1} g | F {:.1} g | fiber {:.1} g",
        total.calories, total.protein, total.carbs, total.fat, total.fiber
    );
    println!(
        "Target:  {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        targets.calories, targets.protein, targets.carbs, targets.fat
    );
    println!("Calorie gap: {:+.0} kcal", total.calories - targets.calories);
    println!();
}

/// Display recent progress records, newest first.
pub fn display_progress_history(records: &[DailyProgress]) {
    if records.is_empty() {
        println!("No progress recorded yet. Use 'nutriplan log' after following a plan.");
        return;
    }

    println!();
    println!("=== Progress ({} days) ===", records.len());

    for record in records {
        println!(
            "{}  score {:>3}  meals {}/{}  {:>5.0}/{:.0} kcal",
            record.date,
            record.adherence_score,
            record.completed_meals,
            record.total_meals,
            record.consumed_calories,
            record.target_calories
        );
    }
    println!();
}

/// Display weekly aggregates, oldest first.
pub fn display_weekly_stats(weeks: &[WeeklyStats]) {
    if weeks.is_empty() {
        return;
    }

    println!("=== Weekly Summary ===");
    for week in weeks {
        println!(
            "{} to {}  avg score {:>3}  {} day(s), {} perfect  avg {:.0} kcal",
            week.week_start,
            week.week_end,
            week.average_adherence,
            week.total_days,
            week.perfect_days,
            week.average_calories
        );
    }
    println!();
}

pub fn display_streaks(info: &StreakInfo) {
    println!(
        "Streak: {} day(s) current, {} day(s) best",
        info.current, info.longest
    );
    println!();
}

/// Display the food catalog grouped by category.
pub fn display_food_catalog(catalog: &FoodCatalog) {
    println!();
    println!("=== Food Catalog ({} foods) ===", catalog.len());

    let mut current_category = None;
    let mut foods = catalog.all();
    foods.sort_by_key(|f| (f.category.label(), f.id.clone()));

    for food in foods {
        if current_category != Some(food.category) {
            current_category = Some(food.category);
            println!();
            println!("[{}]", food.category.label());
        }
        let basis = if food.unit.is_count() {
            "per unit"
        } else {
            "per 100"
        };
        println!(
            "  {:<20} {:>5.0} kcal {} | P {:>4.1} C {:>4.1} F {:>4.1} | serving {:.0} {}",
            food.name,
            food.calories,
            basis,
            food.protein,
            food.carbs,
            food.fat,
            food.common_serving,
            food.unit.suffix()
        );
    }
    println!();
}
