//! Presentation records shared by the terminal printer and the web grid.
//!
//! Week caption: `Feb 3 - Feb 9`
//! Entry line:   `[a1b2c3] ✓ 09:00-10:00 → 09:15-10:30  deep work #acme`

use crate::entry::{Entry, EntryKind};
use crate::tags::format_tags;
use crate::week::WeekKey;
use crate::days::Day;
use std::fmt;

/// Default strftime pattern for day labels, e.g. `Feb 3`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMarker {
    Blank,
    Done,
    Unplanned,
    Note,
}

impl StatusMarker {
    pub fn symbol(self) -> &'static str {
        match self {
            StatusMarker::Blank => " ",
            StatusMarker::Done => "✓",
            StatusMarker::Unplanned => "⚡",
            StatusMarker::Note => "•",
        }
    }

    /// CSS class for the web grid.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusMarker::Blank => "planned",
            StatusMarker::Done => "done",
            StatusMarker::Unplanned => "unplanned",
            StatusMarker::Note => "note",
        }
    }
}

impl fmt::Display for StatusMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One display line of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub id: String,
    pub status: StatusMarker,
    /// Empty for notes.
    pub time: String,
    pub description: String,
    /// `#a #b`, empty without tags.
    pub tags: String,
    pub is_note: bool,
}

pub fn render_entry(entry: &Entry) -> RenderedLine {
    let status = if entry.is_note() {
        StatusMarker::Note
    } else if entry.is_unplanned() {
        StatusMarker::Unplanned
    } else if entry.done {
        StatusMarker::Done
    } else {
        StatusMarker::Blank
    };

    let time = match entry.kind {
        EntryKind::Note => String::new(),
        EntryKind::Unplanned { actual } => actual.to_string(),
        EntryKind::Block {
            planned,
            actual: Some(actual),
        } => format!("{planned} → {actual}"),
        EntryKind::Block {
            planned,
            actual: None,
        } => planned.to_string(),
    };

    RenderedLine {
        id: entry.id.clone(),
        status,
        time,
        description: entry.description.clone(),
        tags: format_tags(&entry.tags),
        is_note: entry.is_note(),
    }
}

/// `Feb 3 - Feb 9`
pub fn format_week_caption(week: WeekKey, date_format: &str) -> String {
    let (monday, sunday) = week.date_range();
    format!(
        "{} - {}",
        monday.format(date_format),
        sunday.format(date_format)
    )
}

/// `Feb 3`
pub fn format_day_label(week: WeekKey, day: Day, date_format: &str) -> String {
    week.date_of(day).format(date_format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{block, note, range, unplanned};

    #[test]
    fn planned_block() {
        let line = render_entry(&block("a1", "9:00-10:00", 0));
        assert_eq!(line.status, StatusMarker::Blank);
        assert_eq!(line.time, "09:00-10:00");
        assert!(!line.is_note);
    }

    #[test]
    fn done_block_with_actual_time() {
        let mut entry = block("a1", "09:00-10:00", 0);
        entry.done = true;
        entry.kind = EntryKind::Block {
            planned: range("09:00-10:00"),
            actual: Some(range("09:15-10:30")),
        };
        let line = render_entry(&entry);
        assert_eq!(line.status, StatusMarker::Done);
        assert_eq!(line.status.symbol(), "✓");
        assert_eq!(line.time, "09:00-10:00 → 09:15-10:30");
    }

    #[test]
    fn unplanned_shows_actual_only_and_its_own_marker() {
        let line = render_entry(&unplanned("u1", "08:00-08:30", 0));
        assert_eq!(line.status, StatusMarker::Unplanned);
        assert_eq!(line.status.to_string(), "⚡");
        assert_eq!(line.time, "08:00-08:30");
    }

    #[test]
    fn note_has_marker_and_no_time() {
        let mut entry = note("n1", 0);
        entry.tags = vec!["idea".into(), "acme".into()];
        let line = render_entry(&entry);
        assert_eq!(line.status, StatusMarker::Note);
        assert!(line.is_note);
        assert_eq!(line.time, "");
        assert_eq!(line.tags, "#idea #acme");
    }

    #[test]
    fn toggling_done_twice_restores_the_line() {
        let mut entry = block("a1", "09:00-10:00", 0);
        let before = render_entry(&entry);
        entry.done = true;
        assert_ne!(render_entry(&entry), before);
        entry.done = false;
        assert_eq!(render_entry(&entry), before);
    }

    #[test]
    fn captions() {
        let week: WeekKey = "2025-W06".parse().unwrap();
        assert_eq!(format_week_caption(week, DEFAULT_DATE_FORMAT), "Feb 3 - Feb 9");
        assert_eq!(format_day_label(week, Day::Friday, DEFAULT_DATE_FORMAT), "Feb 7");
        assert_eq!(format_day_label(week, Day::Monday, "%Y-%m-%d"), "2025-02-03");
    }

    #[test]
    fn caption_across_new_year() {
        let week: WeekKey = "2026-W01".parse().unwrap();
        assert_eq!(format_week_caption(week, DEFAULT_DATE_FORMAT), "Dec 29 - Jan 4");
    }
}
