use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DailyMealPlan, Food, GoalSettings, UserPreferences, UserProfile};

/// Everything the app persists between runs, as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub profile: Option<UserProfile>,
    pub goals: Option<GoalSettings>,
    pub preferences: Option<UserPreferences>,

    /// User-defined foods layered over the builtin catalog.
    #[serde(default)]
    pub custom_foods: Vec<Food>,

    /// The last saved plan, the basis for progress logging.
    pub active_plan: Option<DailyMealPlan>,
}

/// Load app state; a missing file is a fresh state, not an error.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<AppState> {
    if !path.as_ref().exists() {
        return Ok(AppState::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save app state as pretty-printed JSON.
pub fn save_state<P: AsRef<Path>>(path: P, state: &AppState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}
