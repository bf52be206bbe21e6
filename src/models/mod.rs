mod food;
mod meal;
mod profile;

pub use food::{Food, FoodCategory, MeasureUnit, Nutrition};
pub use meal::{DailyMealPlan, Meal, MealItem, MealSlot};
pub use profile::{
    ActivityLevel, GoalSettings, MealFrequency, NutritionalTargets, Sex, UserPreferences,
    UserProfile,
};
