use super::EntryStore;
use crate::days::Day;
use crate::entry::{Entry, EntryKind};
use crate::error::Result;
use crate::time_range::TimeRange;
use crate::week::WeekKey;
use std::collections::HashSet;

/// Keeps entries in a `Vec`. Queries return newest first, so callers cannot lean on
/// insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
    retired: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }
}

impl EntryStore for MemoryStore {
    fn insert_entry(&mut self, entry: &Entry) -> Result<String> {
        self.entries.push(entry.clone());
        Ok(entry.id.clone())
    }

    fn update_actual_time(&mut self, id: &str, actual: TimeRange) -> Result<usize> {
        let Some(entry) = self.get_mut(id) else {
            return Ok(0);
        };
        match &mut entry.kind {
            EntryKind::Block { actual: slot, .. } => *slot = Some(actual),
            EntryKind::Unplanned { actual: slot } => *slot = actual,
            EntryKind::Note => return Ok(0),
        }
        Ok(1)
    }

    fn set_done(&mut self, id: &str, done: bool) -> Result<usize> {
        Ok(match self.get_mut(id) {
            Some(entry) => {
                entry.done = done;
                1
            }
            None => 0,
        })
    }

    fn delete(&mut self, id: &str) -> Result<usize> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = before - self.entries.len();
        if removed > 0 {
            self.retired.insert(id.to_string());
        }
        Ok(removed)
    }

    fn query_by_week_day(&self, week: WeekKey, day: Day) -> Result<Vec<Entry>> {
        Ok(self
            .entries
            .iter()
            .rev()
            .filter(|e| e.week == week && e.day == day)
            .cloned()
            .collect())
    }

    fn id_taken(&self, id: &str) -> Result<bool> {
        Ok(self.retired.contains(id) || self.get(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{block, note, range};

    #[test]
    fn query_filters_by_bucket() {
        let mut store = MemoryStore::new();
        let mut other_day = block("b", "09:00-10:00", 1);
        other_day.day = Day::Tuesday;
        store.insert_entry(&block("a", "09:00-10:00", 0)).unwrap();
        store.insert_entry(&other_day).unwrap();

        let monday = store
            .query_by_week_day("2025-W06".parse().unwrap(), Day::Monday)
            .unwrap();
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].id, "a");
    }

    #[test]
    fn mutations_report_affected_counts() {
        let mut store = MemoryStore::new();
        store.insert_entry(&block("a", "09:00-10:00", 0)).unwrap();
        store.insert_entry(&note("n", 1)).unwrap();

        assert_eq!(store.update_actual_time("a", range("09:30-10:30")).unwrap(), 1);
        assert_eq!(store.get("a").unwrap().actual(), Some(range("09:30-10:30")));
        assert_eq!(store.update_actual_time("n", range("09:30-10:30")).unwrap(), 0);
        assert_eq!(store.update_actual_time("zz", range("09:30-10:30")).unwrap(), 0);

        assert_eq!(store.set_done("a", true).unwrap(), 1);
        assert!(store.get("a").unwrap().done);
        assert_eq!(store.set_done("zz", true).unwrap(), 0);
    }

    #[test]
    fn deleted_ids_stay_taken() {
        let mut store = MemoryStore::new();
        store.insert_entry(&block("a", "09:00-10:00", 0)).unwrap();
        assert_eq!(store.delete("a").unwrap(), 1);
        assert_eq!(store.delete("a").unwrap(), 0);
        assert!(store.is_empty());
        assert!(store.id_taken("a").unwrap());
        assert!(!store.id_taken("b").unwrap());
    }
}
