pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_completed_meals, prompt_goals, prompt_preferences, prompt_profile, prompt_yes_no,
};
pub use render::{
    display_food_catalog, display_meal_plan, display_progress_history, display_streaks,
    display_targets, display_weekly_stats,
};
