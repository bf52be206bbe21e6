use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;
use crate::progress::record::DailyProgress;

/// At most this many days of history are retained, newest kept.
pub const RETENTION_DAYS: usize = 90;

/// Day-keyed progress storage.
///
/// Injected wherever progress is read or written so the scoring and
/// reporting logic never touches a concrete storage location.
pub trait ProgressRepository {
    /// Insert or replace the record for its date.
    fn save(&mut self, progress: DailyProgress) -> Result<()>;

    /// All records, newest first.
    fn get_all(&self) -> Result<Vec<DailyProgress>>;

    fn get_by_date(&self, date: NaiveDate) -> Result<Option<DailyProgress>>;
}

/// JSON-file-backed repository.
///
/// The whole history is one pretty-printed JSON array, rewritten on every
/// save; a missing or unreadable file reads as empty history.
pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonProgressStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Vec<DailyProgress> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }
}

impl ProgressRepository for JsonProgressStore {
    fn save(&mut self, progress: DailyProgress) -> Result<()> {
        let mut records = self.load();

        match records.iter_mut().find(|p| p.date == progress.date) {
            Some(existing) => *existing = progress,
            None => records.push(progress),
        }

        records.sort_by(|a, b| b.date.cmp(&a.date));
        records.truncate(RETENTION_DAYS);

        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<DailyProgress>> {
        let mut records = self.load();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    fn get_by_date(&self, date: NaiveDate) -> Result<Option<DailyProgress>> {
        Ok(self.load().into_iter().find(|p| p.date == date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::record::MacroIntake;
    use chrono::Duration;
    use tempfile::NamedTempFile;

    fn record(date: NaiveDate, score: u32) -> DailyProgress {
        DailyProgress {
            date,
            completed_meals: 3,
            total_meals: 3,
            consumed_calories: 1900.0,
            target_calories: 2000.0,
            consumed_macros: MacroIntake::default(),
            target_macros: MacroIntake::default(),
            adherence_score: score,
        }
    }

    #[test]
    fn test_save_and_reload() {
        let file = NamedTempFile::new().unwrap();
        let mut store = JsonProgressStore::new(file.path());

        let date: NaiveDate = "2026-08-07".parse().unwrap();
        store.save(record(date, 95)).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].adherence_score, 95);
        assert_eq!(store.get_by_date(date).unwrap().unwrap().date, date);
    }

    #[test]
    fn test_save_upserts_by_date() {
        let file = NamedTempFile::new().unwrap();
        let mut store = JsonProgressStore::new(file.path());
        let date: NaiveDate = "2026-08-07".parse().unwrap();

        store.save(record(date, 60)).unwrap();
        store.save(record(date, 95)).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].adherence_score, 95);
    }

    #[test]
    fn test_retention_caps_at_90_newest() {
        let file = NamedTempFile::new().unwrap();
        let mut store = JsonProgressStore::new(file.path());
        let start: NaiveDate = "2026-01-01".parse().unwrap();

        for i in 0..100 {
            store.save(record(start + Duration::days(i), 80)).unwrap();
        }

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), RETENTION_DAYS);
        // Newest kept, oldest dropped.
        assert_eq!(all[0].date, start + Duration::days(99));
        assert_eq!(all.last().unwrap().date, start + Duration::days(10));
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let store = JsonProgressStore::new("/nonexistent/progress.json");
        assert!(store.get_all().unwrap().is_empty());
        let date: NaiveDate = "2026-08-07".parse().unwrap();
        assert!(store.get_by_date(date).unwrap().is_none());
    }

    #[test]
    fn test_get_all_newest_first() {
        let file = NamedTempFile::new().unwrap();
        let mut store = JsonProgressStore::new(file.path());

        store.save(record("2026-08-01".parse().unwrap(), 80)).unwrap();
        store.save(record("2026-08-05".parse().unwrap(), 85)).unwrap();
        store.save(record("2026-08-03".parse().unwrap(), 90)).unwrap();

        let all = store.get_all().unwrap();
        let dates: Vec<String> = all.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, vec!["2026-08-05", "2026-08-03", "2026-08-01"]);
    }
}
