//! Latest-valid statement selection.
//!
//! A [`SelectionSet`] borrows a history and keeps its own exclusion set.
//! Dates found invalid are excluded for the rest of the set's life, so
//! repeated lookups never revisit them, while the caller's history is left
//! untouched and can be shared between concurrent evaluations.

use chrono::NaiveDate;
use intrinsic_data::{BalanceSheet, FinancialStatement, StatementHistory};
use std::collections::BTreeSet;

/// Working set over one statement history.
#[derive(Debug)]
pub struct SelectionSet<'a, S> {
    history: &'a StatementHistory<S>,
    excluded: BTreeSet<NaiveDate>,
}

impl<'a, S: FinancialStatement> SelectionSet<'a, S> {
    /// Start a selection over `history` with nothing excluded.
    pub fn new(history: &'a StatementHistory<S>) -> Self {
        Self {
            history,
            excluded: BTreeSet::new(),
        }
    }

    /// Latest statement satisfying `is_valid`.
    ///
    /// Walks back from the newest date; every rejected date is excluded from
    /// later lookups on this set.
    pub fn latest_valid<F>(&mut self, is_valid: F) -> Option<(NaiveDate, &'a S)>
    where
        F: Fn(&S) -> bool,
    {
        let history = self.history;
        for (date, statement) in history.iter().rev() {
            if self.excluded.contains(date) {
                continue;
            }
            if is_valid(statement) {
                return Some((*date, statement));
            }
            self.excluded.insert(*date);
        }
        None
    }

    /// Whether `date` has been rejected.
    pub fn is_excluded(&self, date: &NaiveDate) -> bool {
        self.excluded.contains(date)
    }

    /// Statements still eligible, oldest first.
    pub fn remaining(&self) -> impl Iterator<Item = (&'a NaiveDate, &'a S)> + '_ {
        self.history
            .iter()
            .filter(|(date, _)| !self.excluded.contains(*date))
    }
}

/// Balance sheet validity: every field the valuation reads is reported.
pub fn validate_balance_sheet(balance_sheet: &BalanceSheet) -> bool {
    balance_sheet.is_complete()
}

/// Latest balance sheet passing [`validate_balance_sheet`].
pub fn latest_valid_balance_sheet(
    history: &StatementHistory<BalanceSheet>,
) -> Option<(NaiveDate, &BalanceSheet)> {
    SelectionSet::new(history).latest_valid(validate_balance_sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn complete(assets: f64) -> BalanceSheet {
        BalanceSheet {
            assets,
            current_assets: 500.0,
            liabilities: 400.0,
            current_liabilities: 200.0,
            retained_earnings: 100.0,
            cash: 50.0,
        }
    }

    fn history() -> StatementHistory<BalanceSheet> {
        [
            (date(2022, 9, 30), complete(900.0)),
            (date(2022, 12, 31), complete(1000.0)),
            (
                date(2023, 3, 31),
                BalanceSheet {
                    cash: 0.0,
                    ..complete(1100.0)
                },
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_skips_invalid_latest_and_excludes_it() {
        let history = history();
        let mut set = SelectionSet::new(&history);

        let (selected_date, sheet) = set.latest_valid(validate_balance_sheet).unwrap();
        assert_eq!(selected_date, date(2022, 12, 31));
        assert_eq!(sheet.assets, 1000.0);

        assert!(set.is_excluded(&date(2023, 3, 31)));
        assert!(set.remaining().all(|(d, _)| *d != date(2023, 3, 31)));
        assert_eq!(set.remaining().count(), 2);

        // Caller's history is not modified.
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_exclusions_persist_across_lookups() {
        let history = history();
        let mut set = SelectionSet::new(&history);

        // A stricter predicate rejects the two newest dates.
        let (d, _) = set.latest_valid(|s| s.assets < 950.0).unwrap();
        assert_eq!(d, date(2022, 9, 30));

        // The excluded dates are never reconsidered, even with a permissive predicate.
        let (d, _) = set.latest_valid(|_| true).unwrap();
        assert_eq!(d, date(2022, 9, 30));
    }

    #[test]
    fn test_no_valid_statement() {
        let history: StatementHistory<BalanceSheet> = [
            (date(2022, 12, 31), BalanceSheet::default()),
            (date(2023, 3, 31), BalanceSheet::default()),
        ]
        .into_iter()
        .collect();

        let mut set = SelectionSet::new(&history);
        assert!(set.latest_valid(validate_balance_sheet).is_none());
        assert_eq!(set.remaining().count(), 0);

        assert!(latest_valid_balance_sheet(&StatementHistory::new()).is_none());
    }
}
