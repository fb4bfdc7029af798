//! Trailing aggregates of quarterly statement values.
//!
//! Histories shorter than the requested window contribute whatever quarters
//! they have; an empty window sums to zero.

use crate::math::safe_divide;
use crate::ratios;
use intrinsic_data::{
    CashFlowField, CashFlowStatement, DatedValue, FinancialStatement, IncomeField,
    StatementHistory, Stock,
};

/// Quarters in a reporting year.
pub const QUARTERS_PER_YEAR: usize = 4;

/// Sum of the most recent `quarters` values produced by `extract`.
pub fn trailing_sum<S, F>(history: &StatementHistory<S>, quarters: usize, extract: F) -> f64
where
    S: FinancialStatement,
    F: Fn(&S) -> f64,
{
    sum(&history.recent(quarters, extract))
}

/// Trailing-year sum of one field.
pub fn yearly_sum<S: FinancialStatement>(history: &StatementHistory<S>, field: S::Field) -> f64 {
    trailing_sum(history, QUARTERS_PER_YEAR, |s| s.value(field))
}

/// Average yearly value of one field over the last `years` years.
///
/// Sums the most recent `years * 4` quarters and divides by `years`.
pub fn yearly_average<S: FinancialStatement>(
    history: &StatementHistory<S>,
    field: S::Field,
    years: u32,
) -> f64 {
    let total = trailing_sum(history, years as usize * QUARTERS_PER_YEAR, |s| {
        s.value(field)
    });
    safe_divide(total, f64::from(years))
}

fn sum(values: &[DatedValue]) -> f64 {
    values.iter().map(|v| v.value).sum()
}

/// Trailing-year net income.
pub fn net_income_for_year(stock: &Stock) -> f64 {
    yearly_sum(
        &stock.financial_statements.income_statements,
        IncomeField::NetIncome,
    )
}

/// Average yearly net income over the last `years` years.
pub fn net_income_average(stock: &Stock, years: u32) -> f64 {
    yearly_average(
        &stock.financial_statements.income_statements,
        IncomeField::NetIncome,
        years,
    )
}

/// Trailing-year revenue.
pub fn total_revenue_for_year(stock: &Stock) -> f64 {
    yearly_sum(
        &stock.financial_statements.income_statements,
        IncomeField::TotalRevenue,
    )
}

/// Trailing-year EBIT; quarters without interest lines contribute pre-tax income only.
pub fn ebit_for_year(stock: &Stock) -> f64 {
    trailing_sum(
        &stock.financial_statements.income_statements,
        QUARTERS_PER_YEAR,
        |s| s.ebit(),
    )
}

/// Trailing-year free cash flow.
pub fn fcf_for_year(stock: &Stock) -> f64 {
    trailing_sum(
        &stock.financial_statements.cash_flow_statements,
        QUARTERS_PER_YEAR,
        CashFlowStatement::free_cash_flow,
    )
}

/// Trailing-year dividends paid.
pub fn dividends_for_year(stock: &Stock) -> f64 {
    yearly_sum(
        &stock.financial_statements.cash_flow_statements,
        CashFlowField::DividendsPaid,
    )
}

/// Trailing-year dividend yield at the current price.
pub fn dividend_yield_for_year(stock: &Stock) -> f64 {
    ratios::dividend_yield(
        dividends_for_year(stock),
        stock.shares_outstanding,
        stock.current_price,
    )
}

/// Annualised mean of per-quarter P/E over the last `years` years.
///
/// Each quarter's EPS uses today's share count and price, so this measures
/// how the current price compares with each quarter's earnings. Zero when
/// there are no quarters.
pub fn average_pe(stock: &Stock, years: u32) -> f64 {
    let quarters = stock
        .financial_statements
        .income_statements
        .recent_field(years as usize * QUARTERS_PER_YEAR, IncomeField::NetIncome);
    if quarters.is_empty() {
        return 0.0;
    }

    let total: f64 = quarters
        .iter()
        .map(|q| {
            let eps = ratios::eps(q.value, stock.shares_outstanding);
            ratios::pe(stock.current_price, eps)
        })
        .sum();

    QUARTERS_PER_YEAR as f64 * total / quarters.len() as f64
}
