use serde::{Deserialize, Serialize};

/// Biological sex, as used by the Harris-Benedict equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Weekly activity level with its energy-expenditure multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (1-3 sessions/week)",
            ActivityLevel::Moderate => "Moderate (3-5 sessions/week)",
            ActivityLevel::Intense => "Intense (6-7 sessions/week)",
        }
    }
}

/// The user's biometric profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub sex: Sex,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
}

/// Calorie adjustment and macro split applied on top of the estimated
/// daily energy expenditure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSettings {
    /// Percent adjustment over maintenance calories, -20 to +20.
    pub calorie_adjustment_pct: i32,
    pub protein_pct: u32,
    pub carb_pct: u32,
    pub fat_pct: u32,
}

impl Default for GoalSettings {
    fn default() -> Self {
        GoalSettings {
            calorie_adjustment_pct: 0,
            protein_pct: 20,
            carb_pct: 55,
            fat_pct: 25,
        }
    }
}

impl GoalSettings {
    /// Macro percentages must cover the whole calorie budget.
    pub fn is_valid(&self) -> bool {
        (-20..=20).contains(&self.calorie_adjustment_pct)
            && self.protein_pct + self.carb_pct + self.fat_pct == 100
    }
}

/// How many meals the plan spreads the day across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealFrequency {
    Three,
    Four,
    Five,
    Six,
}

impl MealFrequency {
    pub const ALL: [MealFrequency; 4] = [
        MealFrequency::Three,
        MealFrequency::Four,
        MealFrequency::Five,
        MealFrequency::Six,
    ];

    pub fn from_count(count: u32) -> Option<MealFrequency> {
        match count {
            3 => Some(MealFrequency::Three),
            4 => Some(MealFrequency::Four),
            5 => Some(MealFrequency::Five),
            6 => Some(MealFrequency::Six),
            _ => None,
        }
    }

    pub fn meal_count(&self) -> u32 {
        match self {
            MealFrequency::Three => 3,
            MealFrequency::Four => 4,
            MealFrequency::Five => 5,
            MealFrequency::Six => 6,
        }
    }
}

/// Food preferences applied during plan generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Substrings of preferred food names or category labels.
    pub preferred_foods: Vec<String>,
    /// Substrings of foods to avoid; always enforced.
    pub avoided_foods: Vec<String>,
    pub meal_frequency: MealFrequency,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            preferred_foods: Vec::new(),
            avoided_foods: Vec::new(),
            meal_frequency: MealFrequency::Six,
        }
    }
}

/// Whole-day calorie and macro targets, the assembler's input contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutritionalTargets {
    pub calories: f64,
    /// Grams.
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_frequency_closed_set() {
        assert_eq!(MealFrequency::from_count(3), Some(MealFrequency::Three));
        assert_eq!(MealFrequency::from_count(6), Some(MealFrequency::Six));
        assert_eq!(MealFrequency::from_count(2), None);
        assert_eq!(MealFrequency::from_count(7), None);
    }

    #[test]
    fn test_goal_settings_validation() {
        assert!(GoalSettings::default().is_valid());

        let lopsided = GoalSettings {
            protein_pct: 50,
            ..Default::default()
        };
        assert!(!lopsided.is_valid());

        let extreme = GoalSettings {
            calorie_adjustment_pct: 35,
            ..Default::default()
        };
        assert!(!extreme.is_valid());
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Intense.multiplier(), 1.725);
    }
}
