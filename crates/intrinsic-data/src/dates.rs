//! Calendar helpers.

use crate::error::{DataError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| DataError::InvalidDate {
        value: value.to_string(),
    })
}

/// Whether `date` is the last day of its month.
pub fn is_end_of_month(date: NaiveDate) -> bool {
    date.checked_add_days(Days::new(1))
        .is_none_or(|next| next.month() != date.month())
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    // A month never has more than 31 days, so the walk is bounded.
    let mut current = date;
    for _ in 0..31 {
        if is_end_of_month(current) {
            break;
        }
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// Every month end falling within `[start, end]`, in order.
pub fn month_ends(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if start > end {
        return Err(DataError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut dates = Vec::new();
    let mut current = end_of_month(start);
    while current <= end {
        dates.push(current);
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = end_of_month(next),
            None => break,
        }
    }
    Ok(dates)
}
