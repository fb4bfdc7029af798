//! Date-keyed statement histories.
//!
//! A history maps a quarter date to one statement. Keys are [`NaiveDate`]s in a
//! `BTreeMap`, so iteration order is chronological and "latest" is the last key.

use crate::statements::FinancialStatement;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single dated observation pulled out of a history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    /// Statement date
    pub date: NaiveDate,
    /// Observed value
    pub value: f64,
}

impl DatedValue {
    /// Create a new dated value.
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Chronologically ordered statements of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementHistory<S> {
    entries: BTreeMap<NaiveDate, S>,
}

impl<S> Default for StatementHistory<S> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<S: FinancialStatement> StatementHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a statement, merging with one already recorded on the same date.
    pub fn insert(&mut self, date: NaiveDate, statement: S) {
        let merged = match self.entries.get(&date) {
            Some(existing) => existing.merge(&statement),
            None => statement,
        };
        self.entries.insert(date, merged);
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no statements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Statement recorded on `date`.
    pub fn get(&self, date: &NaiveDate) -> Option<&S> {
        self.entries.get(date)
    }

    /// Latest statement and its date.
    pub fn latest(&self) -> Option<(NaiveDate, &S)> {
        self.entries.iter().next_back().map(|(d, s)| (*d, s))
    }

    /// Iterate in chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&NaiveDate, &S)> {
        self.entries.iter()
    }

    /// The `n` most recent values produced by `extract`, oldest first.
    ///
    /// Returns fewer than `n` values when the history is shorter.
    pub fn recent<F>(&self, n: usize, extract: F) -> Vec<DatedValue>
    where
        F: Fn(&S) -> f64,
    {
        let mut values: Vec<DatedValue> = self
            .entries
            .iter()
            .rev()
            .take(n)
            .map(|(date, statement)| DatedValue::new(*date, extract(statement)))
            .collect();
        values.reverse();
        values
    }

    /// The `n` most recent values of a single field, oldest first.
    pub fn recent_field(&self, n: usize, field: S::Field) -> Vec<DatedValue> {
        self.recent(n, |s| s.value(field))
    }

    /// Every value produced by `extract`, oldest first.
    pub fn series<F>(&self, extract: F) -> Vec<DatedValue>
    where
        F: Fn(&S) -> f64,
    {
        self.recent(self.len(), extract)
    }

    /// Copy of the history restricted to statements dated on or before `date`.
    pub fn up_to(&self, date: NaiveDate) -> Self {
        Self {
            entries: self
                .entries
                .range(..=date)
                .map(|(d, s)| (*d, s.clone()))
                .collect(),
        }
    }
}

impl<S: FinancialStatement> FromIterator<(NaiveDate, S)> for StatementHistory<S> {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, S)>>(iter: I) -> Self {
        let mut history = Self::new();
        for (date, statement) in iter {
            history.insert(date, statement);
        }
        history
    }
}
