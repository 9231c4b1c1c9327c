use super::EntryStore;
use crate::days::Day;
use crate::entry::{Entry, EntryRow};
use crate::error::Result;
use crate::time_range::TimeRange;
use crate::week::WeekKey;
use rusqlite::{Connection, params};
use std::path::Path;
use tracing::debug;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS blocks (
        id TEXT PRIMARY KEY,
        week TEXT NOT NULL,
        day TEXT NOT NULL,
        description TEXT NOT NULL,
        planned_start TEXT,
        planned_end TEXT,
        actual_start TEXT,
        actual_end TEXT,
        is_note INTEGER DEFAULT 0,
        is_unplanned INTEGER DEFAULT 0,
        is_done INTEGER DEFAULT 0,
        tags TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    );
    CREATE INDEX IF NOT EXISTS idx_week ON blocks(week);
    CREATE INDEX IF NOT EXISTS idx_week_day ON blocks(week, day);
    CREATE TABLE IF NOT EXISTS retired_ids (
        id TEXT PRIMARY KEY
    );
";

/// Entries in a SQLite database file.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and brings the schema up to date.
    /// The parent directory must exist.
    pub fn open(path: &Path) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        // Databases created before tags existed lack the column.
        if let Err(e) = conn.execute("ALTER TABLE blocks ADD COLUMN tags TEXT", []) {
            debug!(error = %e, "tags column already present");
        }
        Ok(Self { conn })
    }
}

impl EntryStore for SqliteStore {
    fn insert_entry(&mut self, entry: &Entry) -> Result<String> {
        let row = EntryRow::from(entry);
        self.conn.execute(
            "INSERT INTO blocks (id, week, day, description, planned_start, planned_end,
                                 actual_start, actual_end, is_note, is_unplanned, is_done,
                                 tags, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                row.id,
                row.week,
                row.day,
                row.description,
                row.planned_start,
                row.planned_end,
                row.actual_start,
                row.actual_end,
                row.is_note,
                row.is_unplanned,
                row.is_done,
                row.tags,
                row.created_at,
            ],
        )?;
        Ok(row.id)
    }

    fn update_actual_time(&mut self, id: &str, actual: TimeRange) -> Result<usize> {
        Ok(self.conn.execute(
            "UPDATE blocks SET actual_start = ?1, actual_end = ?2 WHERE id = ?3 AND is_note = 0",
            params![actual.start.to_string(), actual.end.to_string(), id],
        )?)
    }

    fn set_done(&mut self, id: &str, done: bool) -> Result<usize> {
        Ok(self.conn.execute(
            "UPDATE blocks SET is_done = ?1 WHERE id = ?2",
            params![done, id],
        )?)
    }

    fn delete(&mut self, id: &str) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM blocks WHERE id = ?1", params![id])?;
        if removed > 0 {
            tx.execute(
                "INSERT OR IGNORE INTO retired_ids (id) VALUES (?1)",
                params![id],
            )?;
        }
        tx.commit()?;
        Ok(removed)
    }

    fn query_by_week_day(&self, week: WeekKey, day: Day) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, week, day, description, planned_start, planned_end, actual_start,
                    actual_end, is_note, is_unplanned, is_done, tags, created_at
             FROM blocks WHERE week = ?1 AND day = ?2",
        )?;
        let rows = stmt
            .query_map(params![week.to_string(), day.to_string()], |row| {
                Ok(EntryRow {
                    id: row.get(0)?,
                    week: row.get(1)?,
                    day: row.get(2)?,
                    description: row.get(3)?,
                    planned_start: row.get(4)?,
                    planned_end: row.get(5)?,
                    actual_start: row.get(6)?,
                    actual_end: row.get(7)?,
                    is_note: row.get(8)?,
                    is_unplanned: row.get(9)?,
                    is_done: row.get(10)?,
                    tags: row.get(11)?,
                    created_at: row.get(12)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(Entry::try_from).collect()
    }

    fn id_taken(&self, id: &str) -> Result<bool> {
        Ok(self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM blocks WHERE id = ?1)
                 OR EXISTS(SELECT 1 FROM retired_ids WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?)
    }
}
