//! The valuation record produced for one stock.

use crate::decision::{Health, Instruction};
use serde::{Deserialize, Serialize};

/// Ratios, intrinsic value estimates and the resulting decision.
///
/// Every monetary and ratio field is rounded to two decimal places. The
/// default value is the record reported for a stock that could not be
/// valued: all zeros, `SELL`, `DYING`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Valuation {
    /// Trailing-year dividend yield
    pub dividend_yield: f64,
    /// Market capitalisation
    pub market_cap: f64,
    /// Return on equity
    pub roe: f64,
    /// Return on assets
    pub roa: f64,
    /// Conservative yearly net-income growth
    pub growth_rate: f64,
    /// Opening-price growth over the last year
    pub price_growth_rate: f64,
    /// Debt to equity
    pub dte: f64,
    /// Current ratio
    pub cr: f64,
    /// Earnings per share
    pub eps: f64,
    /// Price to earnings
    pub pe: f64,
    /// P/E over growth
    pub peg: f64,
    /// Price to book
    pub pb: f64,
    /// P/E times P/B
    pub blended_multiplier: f64,
    /// Trailing-year free cash flow
    pub fcf: f64,
    /// Altman Z-score
    pub altman_z_score: f64,
    /// Whole years of statement history
    pub statement_years: u32,
    /// P/E-multiple intrinsic value
    pub pe_multiple_iv: f64,
    /// Graham intrinsic value
    pub graham_iv: f64,
    /// DCF intrinsic value
    pub dcf_iv: f64,
    /// ROE intrinsic value
    pub roe_iv: f64,
    /// Book value per share
    pub liquidation_iv: f64,
    /// Headline fair value per share
    pub fair_value: f64,
    /// Percent return if the price reaches fair value
    pub expected_return: f64,
    /// Trading instruction
    pub instruction: Instruction,
    /// Financial health
    pub health: Health,
}

impl Valuation {
    /// Whether the stock cleared the screen and trades at or below fair value.
    pub fn is_buy(&self) -> bool {
        self.instruction == Instruction::Buy
    }
}
