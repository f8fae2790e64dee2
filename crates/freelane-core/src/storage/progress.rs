//! SQLite-based storage for per-day block progress.
//!
//! One row per (user, date, block id) holding the terminal status and any
//! user-edited task list. The generator never touches this layer; the CLI
//! loads a record, overlays it via `hydrate::apply`, and writes back after
//! transitions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::{CoreError, Result, StorageError};
use crate::hydrate::{ProgressRecord, ProgressStore};

/// Row status stored as a string.
fn format_status(completed: bool, failed: bool) -> &'static str {
    if completed {
        "completed"
    } else if failed {
        "failed"
    } else {
        "pending"
    }
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS day_progress (
    user_id      TEXT NOT NULL,
    date         TEXT NOT NULL,
    block_id     TEXT NOT NULL,
    status       TEXT NOT NULL,
    custom_tasks TEXT,
    PRIMARY KEY (user_id, date, block_id)
);
";

/// Progress database handle.
pub struct ProgressDb {
    conn: Connection,
}

impl ProgressDb {
    /// Open (or create) the default progress database under the data dir.
    pub fn open_default() -> Result<Self> {
        let path = data_dir()?.join("progress.db");
        Self::open(&path)
    }

    /// Open (or create) a progress database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| StorageError::from(e))?;
        Ok(Self { conn })
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::from(e))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| StorageError::from(e))?;
        Ok(Self { conn })
    }

    fn read_record(&self, user_id: &str, date: NaiveDate) -> Result<Option<ProgressRecord>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT block_id, status, custom_tasks
             FROM day_progress
             WHERE user_id = ?1 AND date = ?2
             ORDER BY block_id",
        )?;

        let rows = stmt.query_map(params![user_id, date.to_string()], |row| {
            let block_id: String = row.get(0)?;
            let status: String = row.get(1)?;
            let custom_tasks: Option<String> = row.get(2)?;
            Ok((block_id, status, custom_tasks))
        })?;

        let mut record = ProgressRecord::default();
        let mut any = false;
        for row in rows {
            let (block_id, status, custom_tasks) = row?;
            any = true;
            match status.as_str() {
                "completed" => record.completed.push(block_id.clone()),
                "failed" => record.failed.push(block_id.clone()),
                _ => {}
            }
            if let Some(json) = custom_tasks {
                let tasks: Vec<String> = serde_json::from_str(&json)
                    .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
                record.custom_tasks.insert(block_id, tasks);
            }
        }

        Ok(if any { Some(record) } else { None })
    }

    fn write_record(
        &self,
        user_id: &str,
        date: NaiveDate,
        record: &ProgressRecord,
    ) -> Result<(), StorageError> {
        let date = date.to_string();
        self.conn.execute(
            "DELETE FROM day_progress WHERE user_id = ?1 AND date = ?2",
            params![user_id, date],
        )?;

        // Every block id mentioned anywhere in the record gets a row.
        let mut rows: HashMap<&str, (bool, bool)> = HashMap::new();
        for id in &record.completed {
            rows.entry(id).or_default().0 = true;
        }
        for id in &record.failed {
            rows.entry(id).or_default().1 = true;
        }
        for id in record.custom_tasks.keys() {
            rows.entry(id).or_default();
        }

        for (block_id, (completed, failed)) in rows {
            let custom = record
                .custom_tasks
                .get(block_id)
                .map(serde_json::to_string)
                .transpose()
                .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
            self.conn.execute(
                "INSERT INTO day_progress (user_id, date, block_id, status, custom_tasks)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    user_id,
                    date,
                    block_id,
                    format_status(completed, failed),
                    custom
                ],
            )?;
        }
        Ok(())
    }
}

impl ProgressStore for ProgressDb {
    fn get(&self, user_id: &str, date: NaiveDate) -> Result<Option<ProgressRecord>> {
        self.read_record(user_id, date).map_err(CoreError::from)
    }

    fn put(&self, user_id: &str, date: NaiveDate, record: &ProgressRecord) -> Result<()> {
        self.write_record(user_id, date, record)
            .map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_record() -> ProgressRecord {
        let mut record = ProgressRecord::default();
        record.mark_completed("block-warmup");
        record.mark_failed("block-prospect");
        record.set_custom_tasks(
            "block-deep",
            vec!["Finish the hero animation".to_string()],
        );
        record
    }

    #[test]
    fn get_returns_none_for_unknown_day() {
        let db = ProgressDb::open_in_memory().unwrap();
        assert!(db.get("local", date("2026-08-24")).unwrap().is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let db = ProgressDb::open_in_memory().unwrap();
        let record = sample_record();
        db.put("local", date("2026-08-24"), &record).unwrap();

        let loaded = db.get("local", date("2026-08-24")).unwrap().unwrap();
        assert_eq!(loaded.completed, vec!["block-warmup".to_string()]);
        assert_eq!(loaded.failed, vec!["block-prospect".to_string()]);
        assert_eq!(
            loaded.custom_tasks.get("block-deep").unwrap(),
            &vec!["Finish the hero animation".to_string()]
        );
    }

    #[test]
    fn put_replaces_previous_day_state() {
        let db = ProgressDb::open_in_memory().unwrap();
        db.put("local", date("2026-08-24"), &sample_record()).unwrap();

        let mut updated = ProgressRecord::default();
        updated.mark_completed("block-deep");
        db.put("local", date("2026-08-24"), &updated).unwrap();

        let loaded = db.get("local", date("2026-08-24")).unwrap().unwrap();
        assert_eq!(loaded.completed, vec!["block-deep".to_string()]);
        assert!(loaded.failed.is_empty());
        assert!(loaded.custom_tasks.is_empty());
    }

    #[test]
    fn days_and_users_are_isolated() {
        let db = ProgressDb::open_in_memory().unwrap();
        db.put("alice", date("2026-08-24"), &sample_record()).unwrap();

        assert!(db.get("alice", date("2026-08-25")).unwrap().is_none());
        assert!(db.get("bob", date("2026-08-24")).unwrap().is_none());
    }

    #[test]
    fn opens_on_disk_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.db");
        {
            let db = ProgressDb::open(&path).unwrap();
            db.put("local", date("2026-08-24"), &sample_record()).unwrap();
        }
        let db = ProgressDb::open(&path).unwrap();
        assert!(db.get("local", date("2026-08-24")).unwrap().is_some());
    }
}
