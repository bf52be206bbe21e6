mod record;
mod score;
mod store;

pub use record::{DailyProgress, MacroIntake, StreakInfo, WeeklyStats};
pub use score::{adherence_score, streaks, weekly_stats, PERFECT_DAY_SCORE, STREAK_SCORE};
pub use store::{JsonProgressStore, ProgressRepository, RETENTION_DAYS};
