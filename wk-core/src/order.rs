use crate::entry::Entry;
use crate::time_range::ClockTime;

/// The time an entry is sorted by within its day.
///
/// Declaration order matters: every `At` sorts before `Unscheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EffectiveStart {
    At(ClockTime),
    Unscheduled,
}

impl Entry {
    /// Planned start, else actual start, else unscheduled.
    pub fn effective_start(&self) -> EffectiveStart {
        self.planned()
            .or_else(|| self.actual())
            .map(|range| EffectiveStart::At(range.start))
            .unwrap_or(EffectiveStart::Unscheduled)
    }
}

/// Orders one day's entries by effective start, then creation time.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_key(|e| (e.effective_start(), e.created_at));
}
