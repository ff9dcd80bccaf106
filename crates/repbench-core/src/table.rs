//! RecordAccumulator: insertion-ordered job table.
//!
//! Rows keep the position at which their key was first resolved. Resolving a
//! key again replaces the outcome in place, so a retried job shows up once,
//! where it first appeared, with its latest outcome.

use std::collections::HashMap;

use crate::types::{JobKey, JobRecord, Outcome};

/// Mutable table built up while a scan runs.
#[derive(Debug, Default)]
pub struct RecordAccumulator {
    rows: Vec<JobRecord>,
    index: HashMap<JobKey, usize>,
}

impl RecordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, or overwrite its outcome if it is already present.
    ///
    /// Returns the outcome that was replaced, if any.
    pub fn observe(&mut self, key: JobKey, outcome: Outcome) -> Option<Outcome> {
        if let Some(&pos) = self.index.get(&key) {
            let previous = std::mem::replace(&mut self.rows[pos].outcome, outcome);
            tracing::debug!(%key, %previous, "job resolved again, keeping latest outcome");
            return Some(previous);
        }
        self.index.insert(key.clone(), self.rows.len());
        self.rows.push(JobRecord { key, outcome });
        None
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Freeze the table.
    pub fn finish(self) -> ResultTable {
        ResultTable { rows: self.rows }
    }
}

impl Extend<JobRecord> for RecordAccumulator {
    fn extend<T: IntoIterator<Item = JobRecord>>(&mut self, iter: T) {
        for record in iter {
            self.observe(record.key, record.outcome);
        }
    }
}

impl FromIterator<JobRecord> for RecordAccumulator {
    fn from_iter<T: IntoIterator<Item = JobRecord>>(iter: T) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// The finished, read-only job table in first-resolution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<JobRecord>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobRecord> {
        self.rows.iter()
    }

    /// Linear lookup; tables hold one row per chromosome file.
    pub fn get(&self, key: &str) -> Option<&Outcome> {
        self.rows
            .iter()
            .find(|r| r.key.as_str() == key)
            .map(|r| &r.outcome)
    }

    pub fn successes(&self) -> usize {
        self.rows.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.len() - self.successes()
    }

    pub fn into_records(self) -> Vec<JobRecord> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a JobRecord;
    type IntoIter = std::slice::Iter<'a, JobRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
