use crate::days::Day;
use crate::error::{Result, WkError};
use crate::time_range::{ClockTime, TimeRange};
use crate::week::WeekKey;
use chrono::NaiveDateTime;
use std::str::FromStr;

/// What an entry records, with the time fields each kind allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A planned block; what actually happened is recorded later.
    Block {
        planned: TimeRange,
        actual: Option<TimeRange>,
    },
    /// Free text attached to a day, no times.
    Note,
    /// Something that happened without being planned.
    Unplanned { actual: TimeRange },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub week: WeekKey,
    pub day: Day,
    pub description: String,
    pub kind: EntryKind,
    pub done: bool,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl Entry {
    pub fn planned(&self) -> Option<TimeRange> {
        match self.kind {
            EntryKind::Block { planned, .. } => Some(planned),
            _ => None,
        }
    }

    pub fn actual(&self) -> Option<TimeRange> {
        match self.kind {
            EntryKind::Block { actual, .. } => actual,
            EntryKind::Unplanned { actual } => Some(actual),
            EntryKind::Note => None,
        }
    }

    pub fn is_note(&self) -> bool {
        matches!(self.kind, EntryKind::Note)
    }

    pub fn is_unplanned(&self) -> bool {
        matches!(self.kind, EntryKind::Unplanned { .. })
    }
}

/// Flat, column-per-field shape of an [`Entry`] as stored in the `blocks` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub id: String,
    pub week: String,
    pub day: String,
    pub description: String,
    pub planned_start: Option<String>,
    pub planned_end: Option<String>,
    pub actual_start: Option<String>,
    pub actual_end: Option<String>,
    pub is_note: bool,
    pub is_unplanned: bool,
    pub is_done: bool,
    /// Comma separated, `None` when there are no tags.
    pub tags: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<&Entry> for EntryRow {
    fn from(entry: &Entry) -> Self {
        let planned = entry.planned();
        let actual = entry.actual();
        Self {
            id: entry.id.clone(),
            week: entry.week.to_string(),
            day: entry.day.to_string(),
            description: entry.description.clone(),
            planned_start: planned.map(|r| r.start.to_string()),
            planned_end: planned.map(|r| r.end.to_string()),
            actual_start: actual.map(|r| r.start.to_string()),
            actual_end: actual.map(|r| r.end.to_string()),
            is_note: entry.is_note(),
            is_unplanned: entry.is_unplanned(),
            is_done: entry.done,
            tags: (!entry.tags.is_empty()).then(|| entry.tags.join(",")),
            created_at: entry.created_at,
        }
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = WkError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let week = WeekKey::from_str(&row.week)
            .map_err(|_| WkError::corrupt(&row.id, format!("week `{}`", row.week)))?;
        let day = Day::from_str(&row.day)
            .map_err(|_| WkError::corrupt(&row.id, format!("day `{}`", row.day)))?;
        let planned = stored_range(&row.id, &row.planned_start, &row.planned_end)?;
        let actual = stored_range(&row.id, &row.actual_start, &row.actual_end)?;

        let kind = if row.is_note {
            EntryKind::Note
        } else if row.is_unplanned {
            let actual =
                actual.ok_or_else(|| WkError::corrupt(&row.id, "unplanned without actual time"))?;
            EntryKind::Unplanned { actual }
        } else {
            let planned =
                planned.ok_or_else(|| WkError::corrupt(&row.id, "block without planned time"))?;
            EntryKind::Block { planned, actual }
        };

        let tags = row
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Entry {
            id: row.id,
            week,
            day,
            description: row.description,
            kind,
            done: row.is_done,
            tags,
            created_at: row.created_at,
        })
    }
}

fn stored_range(id: &str, start: &Option<String>, end: &Option<String>) -> Result<Option<TimeRange>> {
    match (start, end) {
        (None, None) => Ok(None),
        (Some(s), Some(e)) => {
            let start = ClockTime::parse(s).ok_or_else(|| WkError::corrupt(id, format!("time `{s}`")))?;
            let end = ClockTime::parse(e).ok_or_else(|| WkError::corrupt(id, format!("time `{e}`")))?;
            Ok(Some(TimeRange { start, end }))
        }
        _ => Err(WkError::corrupt(id, "time range with only one bound")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{at, block, range};

    fn row() -> EntryRow {
        EntryRow {
            id: "a1b2c3".into(),
            week: "2025-W06".into(),
            day: "monday".into(),
            description: "deep work".into(),
            planned_start: Some("09:00".into()),
            planned_end: Some("11:00".into()),
            actual_start: None,
            actual_end: None,
            is_note: false,
            is_unplanned: false,
            is_done: false,
            tags: Some("focus,acme".into()),
            created_at: at(0),
        }
    }

    #[test]
    fn block_row_converts() {
        let entry = Entry::try_from(row()).unwrap();
        assert_eq!(entry.week.to_string(), "2025-W06");
        assert_eq!(entry.day, Day::Monday);
        assert_eq!(entry.planned(), Some(range("09:00-11:00")));
        assert_eq!(entry.actual(), None);
        assert_eq!(entry.tags, vec!["focus", "acme"]);
    }

    #[test]
    fn entry_survives_a_trip_through_a_row() {
        let mut entry = block("x1", "09:00-10:00", 3);
        entry.kind = EntryKind::Block {
            planned: range("09:00-10:00"),
            actual: Some(range("09:15-10:30")),
        };
        entry.tags = vec!["a".into(), "b".into()];
        let row = EntryRow::from(&entry);
        assert_eq!(row.tags.as_deref(), Some("a,b"));
        assert_eq!(row.actual_start.as_deref(), Some("09:15"));
        assert_eq!(Entry::try_from(row).unwrap(), entry);
    }

    #[test]
    fn note_and_unplanned_rows() {
        let mut note = row();
        note.is_note = true;
        note.planned_start = None;
        note.planned_end = None;
        note.tags = None;
        let note = Entry::try_from(note).unwrap();
        assert!(note.is_note());
        assert!(note.tags.is_empty());

        let mut unplanned = row();
        unplanned.is_unplanned = true;
        unplanned.is_done = true;
        unplanned.planned_start = None;
        unplanned.planned_end = None;
        unplanned.actual_start = Some("8:00".into());
        unplanned.actual_end = Some("08:30".into());
        let unplanned = Entry::try_from(unplanned).unwrap();
        assert_eq!(unplanned.kind, EntryKind::Unplanned { actual: range("08:00-08:30") });
        assert!(unplanned.done);
    }

    #[test]
    fn rows_breaking_invariants_are_rejected() {
        let mut missing_planned = row();
        missing_planned.planned_start = None;
        missing_planned.planned_end = None;
        assert!(matches!(
            Entry::try_from(missing_planned),
            Err(WkError::CorruptEntry { .. })
        ));

        let mut half_range = row();
        half_range.planned_end = None;
        assert!(matches!(Entry::try_from(half_range), Err(WkError::CorruptEntry { .. })));

        let mut bad_day = row();
        bad_day.day = "someday".into();
        assert!(matches!(Entry::try_from(bad_day), Err(WkError::CorruptEntry { .. })));
    }
}
