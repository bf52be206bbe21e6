use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Macro grams, consumed or targeted, for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroIntake {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One day of plan adherence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub completed_meals: u32,
    pub total_meals: u32,
    pub consumed_calories: f64,
    pub target_calories: f64,
    pub consumed_macros: MacroIntake,
    pub target_macros: MacroIntake,
    /// 0-100 composite of meal completion and calorie accuracy.
    pub adherence_score: u32,
}

/// Aggregates over one calendar week (Sunday through Saturday).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub average_adherence: u32,
    pub total_days: u32,
    /// Days scoring at or above the perfect-day threshold.
    pub perfect_days: u32,
    pub average_calories: f64,
    pub average_macros: MacroIntake,
}

/// Current and longest runs of qualifying days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakInfo {
    pub current: u32,
    pub longest: u32,
}
