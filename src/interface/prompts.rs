use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::catalog::FoodCatalog;
use crate::error::{NutriError, Result};
use crate::models::{
    ActivityLevel, DailyMealPlan, GoalSettings, MealFrequency, Sex, UserPreferences, UserProfile,
};
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

/// Collect the user's biometric profile.
pub fn prompt_profile() -> Result<UserProfile> {
    let sex = match Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?
    {
        0 => Sex::Male,
        _ => Sex::Female,
    };

    let age: String = Input::new().with_prompt("Age (years)").interact_text()?;
    let age: u32 = age
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid age".to_string()))?;
    if !(10..=120).contains(&age) {
        return Err(NutriError::InvalidInput(
            "Age must be between 10 and 120".to_string(),
        ));
    }

    let weight_kg = prompt_positive_number("Weight (kg)")?;
    let height_cm = prompt_positive_number("Height (cm)")?;

    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
    ];
    let level_names: Vec<&str> = levels.iter().map(|l| l.display_name()).collect();
    let activity_level = levels[Select::new()
        .with_prompt("Activity level")
        .items(&level_names)
        .default(1)
        .interact()?];

    Ok(UserProfile {
        sex,
        age,
        weight_kg,
        height_cm,
        activity_level,
    })
}

/// Collect calorie adjustment and macro split.
pub fn prompt_goals() -> Result<GoalSettings> {
    let goal_names = [
        "Lose weight (-15% calories)",
        "Maintain weight",
        "Gain muscle (+15% calories)",
        "Custom adjustment",
    ];
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&goal_names)
        .default(1)
        .interact()?;

    let calorie_adjustment_pct = match selection {
        0 => -15,
        1 => 0,
        2 => 15,
        _ => {
            let input: String = Input::new()
                .with_prompt("Calorie adjustment % (-20 to 20)")
                .default("0".to_string())
                .interact_text()?;
            input
                .parse()
                .map_err(|_| NutriError::InvalidInput("Invalid percentage".to_string()))?
        }
    };

    let protein_pct = prompt_percent("Protein % of calories", 20)?;
    let carb_pct = prompt_percent("Carbs % of calories", 55)?;
    let fat_pct = prompt_percent("Fat % of calories", 25)?;

    let goals = GoalSettings {
        calorie_adjustment_pct,
        protein_pct,
        carb_pct,
        fat_pct,
    };

    if !goals.is_valid() {
        return Err(NutriError::InvalidInput(format!(
            "Macro percentages must sum to 100 (got {}) and adjustment must be within ±20%",
            protein_pct + carb_pct + fat_pct
        )));
    }

    Ok(goals)
}

/// Collect meal frequency plus preferred/avoided food terms.
pub fn prompt_preferences(catalog: &FoodCatalog) -> Result<UserPreferences> {
    let counts = ["3 meals", "4 meals", "5 meals", "6 meals"];
    let idx = Select::new()
        .with_prompt("Meals per day")
        .items(&counts)
        .default(3)
        .interact()?;
    let meal_frequency = MealFrequency::from_count(idx as u32 + 3)
        .ok_or_else(|| NutriError::InvalidInput("Invalid meal frequency".to_string()))?;

    println!("Foods or categories you prefer (e.g. 'chicken', 'fruit'):");
    let preferred_foods = prompt_food_terms(catalog)?;

    println!("Foods or categories to avoid:");
    let avoided_foods = prompt_food_terms(catalog)?;

    Ok(UserPreferences {
        preferred_foods,
        avoided_foods,
        meal_frequency,
    })
}

/// Collect food/category terms until an empty entry, fuzzy-matching each
/// against the catalog so typos don't silently match nothing.
fn prompt_food_terms(catalog: &FoodCatalog) -> Result<Vec<String>> {
    let mut terms = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a term (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        // Exact food-name or category match needs no confirmation.
        if exact_match(catalog, &input) {
            println!("Added: {input}");
            terms.push(input);
            continue;
        }

        let candidates = fuzzy_candidates(catalog, &input);

        if candidates.is_empty() {
            // Still usable as a raw substring; let the user decide.
            let keep = Confirm::new()
                .with_prompt(format!("No catalog match for '{input}'. Add it anyway?"))
                .default(false)
                .interact()?;
            if keep {
                terms.push(input);
            }
            continue;
        }

        if candidates.len() == 1 {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", candidates[0]))
                .default(true)
                .interact()?;
            if confirm {
                let term = candidates[0].to_lowercase();
                println!("Added: {term}");
                terms.push(term);
            }
            continue;
        }

        let mut options: Vec<String> = candidates.iter().take(5).cloned().collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < options.len() - 1 {
            let term = options[selection].to_lowercase();
            println!("Added: {term}");
            terms.push(term);
        }
    }

    Ok(terms)
}

/// Case-insensitive exact match against food names and category labels.
fn exact_match(catalog: &FoodCatalog, input: &str) -> bool {
    catalog
        .all()
        .iter()
        .any(|f| f.name.to_lowercase() == input || f.category.label() == input)
}

/// Food names ranked by Jaro-Winkler similarity to the input, best first.
fn fuzzy_candidates(catalog: &FoodCatalog, input: &str) -> Vec<String> {
    let mut scored: Vec<(String, f64)> = catalog
        .all()
        .iter()
        .map(|f| (f.name.clone(), jaro_winkler(&f.name.to_lowercase(), input)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(name, _)| name).collect()
}

/// Pick which meals of the active plan were completed today.
pub fn prompt_completed_meals(plan: &DailyMealPlan) -> Result<Vec<usize>> {
    let labels: Vec<String> = plan
        .meals
        .iter()
        .map(|m| format!("{} ({:.0} kcal)", m.name(), m.total_nutrition.calories))
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Which meals did you complete? (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(selected)
}

pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_positive_number(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    let value: f64 = input
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;
    if value <= 0.0 {
        return Err(NutriError::InvalidInput(
            "Value must be positive".to_string(),
        ));
    }
    Ok(value)
}

fn prompt_percent(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    let value: u32 = input
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid percentage".to_string()))?;
    if value > 100 {
        return Err(NutriError::InvalidInput(
            "Percentage cannot exceed 100".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_name_and_category() {
        let catalog = FoodCatalog::builtin();
        assert!(exact_match(&catalog, "oats"));
        assert!(exact_match(&catalog, "dairy"));
        assert!(!exact_match(&catalog, "granola"));
    }

    #[test]
    fn test_fuzzy_candidates_catch_typos() {
        let catalog = FoodCatalog::builtin();
        let candidates = fuzzy_candidates(&catalog, "brocoli");
        assert_eq!(candidates.first().map(String::as_str), Some("Broccoli"));
    }

    #[test]
    fn test_fuzzy_candidates_reject_garbage() {
        let catalog = FoodCatalog::builtin();
        assert!(fuzzy_candidates(&catalog, "xqzzv").is_empty());
    }
}
