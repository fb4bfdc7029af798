//! The per-company snapshot the valuation engine reads.

use crate::error::{DataError, Result};
use crate::history::StatementHistory;
use crate::statements::{BalanceSheet, CashFlowStatement, IncomeStatement};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily price bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalPrice {
    /// Opening price
    pub open: f64,
    /// Daily high
    pub high: f64,
    /// Daily low
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

/// The three statement histories of a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialStatements {
    /// Quarterly income statements
    pub income_statements: StatementHistory<IncomeStatement>,
    /// Quarterly balance sheets
    pub balance_sheets: StatementHistory<BalanceSheet>,
    /// Quarterly cash flow statements
    pub cash_flow_statements: StatementHistory<CashFlowStatement>,
}

impl FinancialStatements {
    /// Restrict every history to statements dated on or before `date`.
    pub fn up_to(&self, date: NaiveDate) -> Self {
        Self {
            income_statements: self.income_statements.up_to(date),
            balance_sheets: self.balance_sheets.up_to(date),
            cash_flow_statements: self.cash_flow_statements.up_to(date),
        }
    }
}

/// Company snapshot: market data plus statement history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stock {
    /// Ticker symbol
    pub symbol: String,
    /// Listing exchange
    pub exchange: String,
    /// Shares outstanding
    pub shares_outstanding: f64,
    /// Latest price
    pub current_price: f64,
    /// Daily prices by date
    pub historical_pricing: BTreeMap<NaiveDate, HistoricalPrice>,
    /// Statement histories
    pub financial_statements: FinancialStatements,
}

impl Stock {
    /// Create an empty stock for `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Whole years of history covered by all three statement kinds.
    pub fn statement_years(&self) -> u32 {
        let statements = &self.financial_statements;
        [
            statements.income_statements.len(),
            statements.balance_sheets.len(),
            statements.cash_flow_statements.len(),
        ]
        .into_iter()
        .map(|len| (len / 4) as u32)
        .min()
        .unwrap_or(0)
    }

    /// Reconstruct the snapshot as it stood at the close of `date`.
    ///
    /// Statements and prices after `date` are dropped and the current price
    /// becomes that day's close (or open when no close was recorded).
    pub fn as_of(&self, date: NaiveDate) -> Result<Self> {
        let (_, bar) = self
            .historical_pricing
            .range(..=date)
            .next_back()
            .ok_or_else(|| DataError::MissingData {
                symbol: self.symbol.clone(),
                reason: format!("no price on or before {date}"),
            })?;

        let current_price = if bar.close != 0.0 { bar.close } else { bar.open };

        Ok(Self {
            symbol: self.symbol.clone(),
            exchange: self.exchange.clone(),
            shares_outstanding: self.shares_outstanding,
            current_price,
            historical_pricing: self
                .historical_pricing
                .range(..=date)
                .map(|(d, p)| (*d, *p))
                .collect(),
            financial_statements: self.financial_statements.up_to(date),
        })
    }
}
