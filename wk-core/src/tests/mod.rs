//! Fixtures shared by the unit tests.

use crate::clock::FixedClock;
use crate::config::Config;
use crate::days::Day;
use crate::entry::{Entry, EntryKind};
use crate::ids::SequentialIds;
use crate::planner::Planner;
use crate::render::DEFAULT_DATE_FORMAT;
use crate::store::MemoryStore;
use crate::time_range::TimeRange;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::path::PathBuf;

/// Test helper to create a default `Config`.
///
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config() -> Config {
    Config {
        db_path: PathBuf::from("week.db"),
        port: 8080,
        date_format: DEFAULT_DATE_FORMAT.to_string(),
        log_level: None,
    }
}

/// Wednesday 2025-02-05, in 2025-W06.
pub fn test_clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2025, 2, 5).expect("valid date"))
}

/// In-memory planner on [`test_clock`] with sequential ids.
pub fn mk_planner() -> Planner<MemoryStore> {
    Planner::new(MemoryStore::new(), &mk_config())
        .with_clock(test_clock())
        .with_ids(SequentialIds::default())
}

/// 2025-02-03 09:00 plus `secs` seconds.
pub fn at(secs: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 2, 3)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid datetime")
        + Duration::seconds(secs)
}

pub fn range(s: &str) -> TimeRange {
    TimeRange::parse(s).unwrap()
}

fn entry(id: &str, description: &str, kind: EntryKind, done: bool, secs: i64) -> Entry {
    Entry {
        id: id.to_string(),
        week: "2025-W06".parse().unwrap(),
        day: Day::Monday,
        description: description.to_string(),
        kind,
        done,
        tags: Vec::new(),
        created_at: at(secs),
    }
}

/// A planned block on Monday of 2025-W06, created `secs` after [`at`]`(0)`.
pub fn block(id: &str, planned: &str, secs: i64) -> Entry {
    let kind = EntryKind::Block {
        planned: range(planned),
        actual: None,
    };
    entry(id, &format!("block {id}"), kind, false, secs)
}

pub fn note(id: &str, secs: i64) -> Entry {
    entry(id, &format!("note {id}"), EntryKind::Note, false, secs)
}

pub fn unplanned(id: &str, actual: &str, secs: i64) -> Entry {
    let kind = EntryKind::Unplanned {
        actual: range(actual),
    };
    entry(id, &format!("unplanned {id}"), kind, true, secs)
}
