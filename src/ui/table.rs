use std::collections::HashSet;

use crate::db::{fetch_all_students, StoreError, StudentStore};
use crate::models::StudentRecord;

/// Column labels for the grid, fixed to mirror the store schema.
pub(crate) const COLUMN_LABELS: [&str; 4] = ["Id", "Name", "Course", "Number"];

/// State of the on-screen grid. The grid never caches between reloads:
/// after every mutation the whole record set is fetched again, so what you
/// see is exactly what the store holds.
pub struct StudentTable {
    records: Vec<StudentRecord>,
    selected: Option<usize>,
    matched: HashSet<i64>,
}

impl StudentTable {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        let selected = if records.is_empty() { None } else { Some(0) };
        Self {
            records,
            selected,
            matched: HashSet::new(),
        }
    }

    /// Full refetch from the store, replacing every row. The cursor is
    /// clamped back into bounds and any search highlight is dropped, since
    /// the highlighted rows may no longer exist.
    pub fn reload(&mut self, store: &StudentStore) -> Result<(), StoreError> {
        self.records = fetch_all_students(store)?;
        self.matched.clear();
        self.selected = match self.selected {
            _ if self.records.is_empty() => None,
            None => Some(0),
            Some(idx) => Some(idx.min(self.records.len() - 1)),
        };
        Ok(())
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The row the cursor sits on, the implicit target for Edit/Delete.
    pub fn current_record(&self) -> Option<&StudentRecord> {
        self.records.get(self.selected?)
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Move the cursor by `offset` rows, clamped to the grid. This is the
    /// keyboard analog of clicking a cell.
    pub fn move_selection(&mut self, offset: isize) {
        if self.records.is_empty() {
            self.selected = None;
            return;
        }
        let len = self.records.len() as isize;
        let current = self.selected.unwrap_or(0) as isize;
        let next = (current + offset).clamp(0, len - 1);
        self.selected = Some(next as usize);
    }

    pub fn select_first(&mut self) {
        if !self.records.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.selected = Some(self.records.len() - 1);
        }
    }

    /// Highlight the rows whose ids came back from a store search and park
    /// the cursor on the first of them. Returns how many grid rows matched.
    pub fn mark_matches(&mut self, ids: impl IntoIterator<Item = i64>) -> usize {
        self.matched = ids.into_iter().collect();
        if let Some(first) = self
            .records
            .iter()
            .position(|record| self.matched.contains(&record.id))
        {
            self.selected = Some(first);
        }
        self.records
            .iter()
            .filter(|record| self.matched.contains(&record.id))
            .count()
    }

    pub(crate) fn is_matched(&self, id: i64) -> bool {
        self.matched.contains(&id)
    }
}
