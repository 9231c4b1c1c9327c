//! Storage port for entries.
//!
//! Stores persist and look up entries; they make no ordering promise for
//! [`EntryStore::query_by_week_day`]. Mutations report how many entries they touched,
//! and a count of zero means the id is unknown.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::days::Day;
use crate::entry::Entry;
use crate::error::Result;
use crate::time_range::TimeRange;
use crate::week::WeekKey;

pub trait EntryStore {
    /// Persists a new entry and returns its id.
    fn insert_entry(&mut self, entry: &Entry) -> Result<String>;

    /// Sets the actual time of a block or unplanned entry. Notes are not touched.
    fn update_actual_time(&mut self, id: &str, actual: TimeRange) -> Result<usize>;

    fn set_done(&mut self, id: &str, done: bool) -> Result<usize>;

    /// Removes an entry. Its id stays reserved.
    fn delete(&mut self, id: &str) -> Result<usize>;

    fn query_by_week_day(&self, week: WeekKey, day: Day) -> Result<Vec<Entry>>;

    /// Whether `id` belongs to a live entry or to a deleted one.
    fn id_taken(&self, id: &str) -> Result<bool>;
}
