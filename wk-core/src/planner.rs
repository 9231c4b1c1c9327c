//! The `Planner`, the command-level API used by the CLI and the web viewer.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::days::Day;
use crate::entry::{Entry, EntryKind};
use crate::error::{Result, WkError};
use crate::ids::{IdGenerator, RandomIds};
use crate::order::sort_entries;
use crate::render::{RenderedLine, format_day_label, format_week_caption, render_entry};
use crate::resolve::{DaySlot, TODAY, resolve_day};
use crate::store::EntryStore;
use crate::tags::extract_tags;
use crate::time_range::TimeRange;
use crate::week::{WeekKey, WeekSelector};
use chrono::NaiveDate;
use tracing::{debug, warn};

const MAX_ID_ATTEMPTS: usize = 32;

/// One day of a [`WeekView`], lines already ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub day: Day,
    pub date: NaiveDate,
    /// The date formatted with the configured pattern, e.g. `Feb 3`.
    pub date_label: String,
    pub lines: Vec<RenderedLine>,
}

/// Everything needed to print or render a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekView {
    pub week: WeekKey,
    /// `Feb 3 - Feb 9`
    pub caption: String,
    pub prev: WeekKey,
    pub next: WeekKey,
    /// All seven days, or only the filtered one.
    pub days: Vec<DayView>,
    pub filtered: bool,
}

/// Validates user input and applies it to an [`EntryStore`].
///
/// Every command parses and checks all of its input before touching the store, so a
/// failed command never leaves a partial entry behind.
pub struct Planner<S: EntryStore> {
    store: S,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    date_format: String,
}

impl<S: EntryStore> Planner<S> {
    /// A planner on the system clock with random ids.
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            clock: Box::new(SystemClock),
            ids: Box::new(RandomIds),
            date_format: config.date_format.clone(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Adds a planned block. `day` defaults to today.
    pub fn add_block(
        &mut self,
        day: Option<&str>,
        range: &str,
        description: &str,
        tag: Option<&str>,
    ) -> Result<Entry> {
        let slot = self.resolve(day)?;
        let planned = TimeRange::parse(range)?;
        let tagged = extract_tags(description, tag);
        let kind = EntryKind::Block {
            planned,
            actual: None,
        };
        self.insert(slot, tagged.text, tagged.tags, kind, false)
    }

    /// Adds a note without times. `day` defaults to today.
    pub fn add_note(&mut self, day: Option<&str>, text: &str, tag: Option<&str>) -> Result<Entry> {
        if text.trim().is_empty() {
            return Err(WkError::MissingArgument("note text"));
        }
        let slot = self.resolve(day)?;
        let tagged = extract_tags(text, tag);
        self.insert(slot, tagged.text, tagged.tags, EntryKind::Note, false)
    }

    /// Records something that happened without a plan. It is created already done.
    pub fn record_unplanned(
        &mut self,
        day: Option<&str>,
        range: &str,
        description: &str,
        tag: Option<&str>,
    ) -> Result<Entry> {
        let slot = self.resolve(day)?;
        let actual = TimeRange::parse(range)?;
        if description.trim().is_empty() {
            return Err(WkError::MissingArgument("description"));
        }
        let tagged = extract_tags(description, tag);
        let kind = EntryKind::Unplanned { actual };
        self.insert(slot, tagged.text, tagged.tags, kind, true)
    }

    /// Records when a block actually happened.
    pub fn record_actual(&mut self, id: &str, range: &str) -> Result<TimeRange> {
        let actual = TimeRange::parse(range)?;
        let affected = self.store.update_actual_time(id, actual)?;
        Self::found(id, affected, "record actual time")?;
        debug!(%id, %actual, "recorded actual time");
        Ok(actual)
    }

    pub fn mark_done(&mut self, id: &str) -> Result<()> {
        let affected = self.store.set_done(id, true)?;
        Self::found(id, affected, "mark done")
    }

    pub fn mark_undone(&mut self, id: &str) -> Result<()> {
        let affected = self.store.set_done(id, false)?;
        Self::found(id, affected, "mark undone")
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        let affected = self.store.delete(id)?;
        Self::found(id, affected, "remove")
    }

    /// Builds the listing for a week, optionally narrowed to the weekday of `day`.
    ///
    /// Without a filter all seven days are returned, empty ones included.
    pub fn week_view(&self, selector: WeekSelector, day: Option<&str>) -> Result<WeekView> {
        let week = selector.resolve(self.clock.today());
        let filter = match day {
            Some(token) => Some(resolve_day(token, self.clock.as_ref())?.day),
            None => None,
        };

        let days = Day::all()
            .filter(|d| filter.is_none_or(|f| f == *d))
            .map(|d| self.day_view(week, d))
            .collect::<Result<Vec<_>>>()?;

        Ok(WeekView {
            week,
            caption: format_week_caption(week, &self.date_format),
            prev: week.prev(),
            next: week.next(),
            days,
            filtered: filter.is_some(),
        })
    }

    fn day_view(&self, week: WeekKey, day: Day) -> Result<DayView> {
        let mut entries = self.store.query_by_week_day(week, day)?;
        sort_entries(&mut entries);
        Ok(DayView {
            day,
            date: week.date_of(day),
            date_label: format_day_label(week, day, &self.date_format),
            lines: entries.iter().map(render_entry).collect(),
        })
    }

    fn resolve(&self, day: Option<&str>) -> Result<DaySlot> {
        resolve_day(day.unwrap_or(TODAY), self.clock.as_ref())
    }

    fn insert(
        &mut self,
        slot: DaySlot,
        description: String,
        tags: Vec<String>,
        kind: EntryKind,
        done: bool,
    ) -> Result<Entry> {
        let entry = Entry {
            id: self.fresh_id()?,
            week: slot.week,
            day: slot.day,
            description,
            kind,
            done,
            tags,
            created_at: self.clock.now(),
        };
        let stored = self.store.insert_entry(&entry)?;
        debug_assert_eq!(stored, entry.id);
        debug!(id = %stored, week = %entry.week, day = %entry.day, "inserted entry");
        Ok(entry)
    }

    fn fresh_id(&mut self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.store.id_taken(&id)? {
                return Ok(id);
            }
            debug!(%id, "id already used, drawing another");
        }
        Err(WkError::IdsExhausted(MAX_ID_ATTEMPTS))
    }

    fn found(id: &str, affected: usize, action: &str) -> Result<()> {
        if affected == 0 {
            warn!(%id, action, "no entry with this id");
            return Err(WkError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
