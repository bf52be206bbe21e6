pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod progress;
pub mod state;
pub mod targets;

pub use error::{NutriError, Result};
pub use models::{DailyMealPlan, Food, Meal, MealItem, Nutrition};
