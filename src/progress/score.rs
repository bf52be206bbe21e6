use chrono::{Datelike, Duration, NaiveDate};

use crate::progress::record::{DailyProgress, MacroIntake, StreakInfo, WeeklyStats};

/// Adherence at or above this counts as a perfect day in weekly stats.
pub const PERFECT_DAY_SCORE: u32 = 90;

/// Adherence at or above this keeps a streak alive.
pub const STREAK_SCORE: u32 = 80;

/// Composite 0-100 adherence score.
///
/// Half the score is the meal-completion ratio, half is calorie accuracy:
/// `50·(completed/total) + 50·max(0, 100 − |consumed/target − 1|·100)/100`,
/// rounded to the nearest whole percent. Zero denominators (no meals
/// planned, or a non-positive calorie target) are invalid input and score
/// 0 rather than propagating NaN or infinity.
pub fn adherence_score(
    completed_meals: u32,
    total_meals: u32,
    consumed_calories: f64,
    target_calories: f64,
) -> u32 {
    if total_meals == 0 || target_calories <= 0.0 {
        return 0;
    }

    let meal_score = completed_meals as f64 / total_meals as f64 * 50.0;
    let calorie_accuracy =
        (100.0 - ((consumed_calories / target_calories - 1.0) * 100.0).abs()).max(0.0);
    let calorie_score = calorie_accuracy / 100.0 * 50.0;

    (meal_score + calorie_score).round() as u32
}

/// Per-week aggregates for the last `weeks_back` weeks, oldest first.
///
/// Weeks run Sunday through Saturday relative to `today`; weeks with no
/// recorded days are skipped.
pub fn weekly_stats(
    records: &[DailyProgress],
    weeks_back: u32,
    today: NaiveDate,
) -> Vec<WeeklyStats> {
    let days_from_sunday = today.weekday().num_days_from_sunday() as i64;
    let mut weeks = Vec::new();

    for i in 0..weeks_back as i64 {
        let week_start = today - Duration::days(days_from_sunday + 7 * i);
        let week_end = week_start + Duration::days(6);

        let in_week: Vec<&DailyProgress> = records
            .iter()
            .filter(|p| p.date >= week_start && p.date <= week_end)
            .collect();

        if in_week.is_empty() {
            continue;
        }

        let count = in_week.len() as f64;
        let average_adherence =
            (in_week.iter().map(|p| p.adherence_score as f64).sum::<f64>() / count).round() as u32;
        let perfect_days = in_week
            .iter()
            .filter(|p| p.adherence_score >= PERFECT_DAY_SCORE)
            .count() as u32;
        let average_calories =
            (in_week.iter().map(|p| p.consumed_calories).sum::<f64>() / count).round();
        let average_macros = MacroIntake {
            protein: in_week.iter().map(|p| p.consumed_macros.protein).sum::<f64>() / count,
            carbs: in_week.iter().map(|p| p.consumed_macros.carbs).sum::<f64>() / count,
            fat: in_week.iter().map(|p| p.consumed_macros.fat).sum::<f64>() / count,
        };

        weeks.push(WeeklyStats {
            week_start,
            week_end,
            average_adherence,
            total_days: in_week.len() as u32,
            perfect_days,
            average_calories,
            average_macros,
        });
    }

    weeks.reverse();
    weeks
}

/// Current and longest streaks of days scoring at least [`STREAK_SCORE`].
///
/// Streaks count consecutive qualifying records in reverse-date order; the
/// current streak is the run leading from the most recent record.
pub fn streaks(records: &[DailyProgress]) -> StreakInfo {
    let mut sorted: Vec<&DailyProgress> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut current = 0;
    for progress in &sorted {
        if progress.adherence_score >= STREAK_SCORE {
            current += 1;
        } else {
            break;
        }
    }

    let mut longest = 0;
    let mut run = 0;
    for progress in &sorted {
        if progress.adherence_score >= STREAK_SCORE {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    StreakInfo { current, longest }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, score: u32) -> DailyProgress {
        DailyProgress {
            date: date.parse().unwrap(),
            completed_meals: 3,
            total_meals: 3,
            consumed_calories: 2000.0,
            target_calories: 2000.0,
            consumed_macros: MacroIntake::default(),
            target_macros: MacroIntake::default(),
            adherence_score: score,
        }
    }

    #[test]
    fn test_adherence_all_meals_slight_undereat() {
        // mealScore 50, accuracy 90 -> calorieScore 45.
        assert_eq!(adherence_score(3, 3, 1800.0, 2000.0), 95);
    }

    #[test]
    fn test_adherence_perfect() {
        assert_eq!(adherence_score(4, 4, 2200.0, 2200.0), 100);
    }

    #[test]
    fn test_adherence_gross_overeat_floors_calorie_half() {
        // 200% of target -> accuracy max(0, 100-100) = 0.
        assert_eq!(adherence_score(3, 3, 4000.0, 2000.0), 50);
    }

    #[test]
    fn test_adherence_zero_denominators() {
        assert_eq!(adherence_score(0, 0, 1800.0, 2000.0), 0);
        assert_eq!(adherence_score(3, 3, 1800.0, 0.0), 0);
        assert_eq!(adherence_score(3, 3, 1800.0, -100.0), 0);
    }

    #[test]
    fn test_streaks_current_and_longest() {
        let records = vec![
            record("2026-08-01", 85), // most recent chain: 3 days
            record("2026-07-31", 92),
            record("2026-07-30", 80),
            record("2026-07-29", 60), // breaks the current streak
            record("2026-07-28", 95),
            record("2026-07-27", 95),
            record("2026-07-26", 95),
            record("2026-07-25", 95),
        ];

        let info = streaks(&records);
        assert_eq!(info.current, 3);
        assert_eq!(info.longest, 4);
    }

    #[test]
    fn test_streaks_empty() {
        assert_eq!(streaks(&[]), StreakInfo::default());
    }

    #[test]
    fn test_weekly_stats_grouping() {
        // 2026-08-08 is a Saturday; its week starts Sunday 2026-08-02.
        let today: NaiveDate = "2026-08-08".parse().unwrap();
        let records = vec![
            record("2026-08-07", 95),
            record("2026-08-05", 85),
            record("2026-07-29", 70), // previous week
        ];

        let weeks = weekly_stats(&records, 4, today);
        assert_eq!(weeks.len(), 2);

        // Oldest first.
        assert!(weeks[0].week_start < weeks[1].week_start);
        assert_eq!(weeks[0].average_adherence, 70);
        assert_eq!(weeks[1].total_days, 2);
        assert_eq!(weeks[1].average_adherence, 90);
        assert_eq!(weeks[1].perfect_days, 1);
    }

    #[test]
    fn test_weekly_stats_skips_empty_weeks() {
        let today: NaiveDate = "2026-08-08".parse().unwrap();
        let records = vec![record("2026-07-01", 90)];
        assert!(weekly_stats(&records, 2, today).is_empty());
    }
}
