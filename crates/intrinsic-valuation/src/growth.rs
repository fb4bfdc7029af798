//! Earnings and price growth estimates.

use crate::math::{growth_rate, safe_divide};
use crate::model::ValuationModel;
use chrono::{Days, NaiveDate};
use intrinsic_data::{IncomeField, Stock, TrendEstimator};
use tracing::debug;

const DAYS_PER_YEAR: u64 = 365;

/// Conservative yearly net-income growth.
///
/// Projects net income with `trend` to `as_of` and to the start of the
/// earnings window (`years_for_earnings_calcs` years earlier), applies the
/// growth law to the two estimates, spreads it over the window, then shrinks
/// it toward zero by the margin of safety. Zero when either estimate is
/// unavailable or zero.
pub fn net_income_growth_rate(
    stock: &Stock,
    model: &ValuationModel,
    trend: &dyn TrendEstimator,
    as_of: NaiveDate,
) -> f64 {
    let years = model.years_for_earnings_calcs;
    let Some(window_start) = as_of.checked_sub_days(Days::new(DAYS_PER_YEAR * u64::from(years)))
    else {
        return 0.0;
    };

    let series = stock
        .financial_statements
        .income_statements
        .recent_field(usize::MAX, IncomeField::NetIncome);

    let initial = trend.estimate(&series, window_start).unwrap_or(0.0);
    let last = trend.estimate(&series, as_of).unwrap_or(0.0);
    if initial == 0.0 || last == 0.0 {
        debug!(symbol = %stock.symbol, "net income trend unavailable");
        return 0.0;
    }

    let rate = safe_divide(growth_rate(&[initial, last]), f64::from(years));
    conservative(rate, model.min_mos)
}

/// Haircut a growth rate by the margin of safety, shrinking its magnitude
/// when positive and growing it when negative.
pub fn conservative(rate: f64, margin_of_safety: f64) -> f64 {
    let sign = if rate < 0.0 { -1.0 } else { 1.0 };
    rate * (1.0 - sign * margin_of_safety)
}

/// Growth of the opening price over the year before `as_of`.
///
/// Uses every dated price strictly after `as_of - 365 days` and on or before
/// `as_of`, skipping days without an opening price.
pub fn price_growth_rate(stock: &Stock, as_of: NaiveDate) -> f64 {
    let Some(year_ago) = as_of.checked_sub_days(Days::new(DAYS_PER_YEAR)) else {
        return 0.0;
    };

    let opens: Vec<f64> = stock
        .historical_pricing
        .range(year_ago..=as_of)
        .filter(|(date, _)| **date > year_ago)
        .map(|(_, price)| price.open)
        .filter(|open| *open != 0.0)
        .collect();

    growth_rate(&opens)
}
