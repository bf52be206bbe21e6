//! Calorie and macro target derivation from a biometric profile.

use crate::models::{GoalSettings, NutritionalTargets, Sex, UserProfile};

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Basal metabolic rate (kcal/day), revised Harris-Benedict.
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let UserProfile {
        age,
        weight_kg,
        height_cm,
        ..
    } = profile;
    let age = *age as f64;

    match profile.sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.33 * age,
    }
}

/// Total daily energy expenditure: BMR scaled by activity level.
pub fn daily_energy_expenditure(profile: &UserProfile) -> f64 {
    basal_metabolic_rate(profile) * profile.activity_level.multiplier()
}

/// Body mass index (kg/m²).
pub fn body_mass_index(profile: &UserProfile) -> f64 {
    let height_m = profile.height_cm / 100.0;
    profile.weight_kg / (height_m * height_m)
}

/// WHO-style BMI band for display.
pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

/// Derive whole-day targets from the profile and goal settings.
///
/// Calories are TDEE adjusted by the goal percentage; macro grams come from
/// the percentage split at 4 kcal/g for protein and carbs, 9 kcal/g for
/// fat. Each target is rounded to the nearest whole unit.
pub fn derive_targets(profile: &UserProfile, goals: &GoalSettings) -> NutritionalTargets {
    let adjustment = goals.calorie_adjustment_pct as f64 / 100.0;
    let calories = (daily_energy_expenditure(profile) * (1.0 + adjustment)).round();

    NutritionalTargets {
        calories,
        protein: (calories * goals.protein_pct as f64 / 100.0 / KCAL_PER_GRAM_PROTEIN).round(),
        carbs: (calories * goals.carb_pct as f64 / 100.0 / KCAL_PER_GRAM_CARBS).round(),
        fat: (calories * goals.fat_pct as f64 / 100.0 / KCAL_PER_GRAM_FAT).round(),
    }
}
