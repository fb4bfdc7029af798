//! ROE and dividend model
//!
//! Grows book equity per share and a dividend stream for ten years at the
//! growth rate. Year-ten earnings (equity per share times average ROE) are
//! capitalised at the discount rate and discounted back ten years; the
//! discounted dividends are added on top.
//!
//! The dividend stream is seeded with the trailing dividend *yield*, not a
//! dividend per share. The two differ by a factor of the share price, so the
//! dividend component is far smaller than a per-share reading would suggest.
//! Dividends are discounted with exponents `0..years`, the first projected
//! dividend being taken at face value.

use super::{IntrinsicInputs, IntrinsicModel};
use crate::math::{npv, safe_divide};
use serde::{Deserialize, Serialize};

/// Configuration for the ROE model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoeConfig {
    /// Projection horizon in years (default: 10)
    pub years: u32,
}

impl Default for RoeConfig {
    fn default() -> Self {
        Self { years: 10 }
    }
}

/// ROE-based value per share.
#[derive(Debug, Default)]
pub struct RoeModel {
    config: RoeConfig,
}

impl RoeModel {
    /// Create with an explicit configuration.
    pub const fn with_config(config: RoeConfig) -> Self {
        Self { config }
    }

    /// Sum of the discounted projected dividends.
    pub fn discounted_dividends(&self, inputs: &IntrinsicInputs) -> f64 {
        let mut dividend = inputs.dividend_yield;
        (0..self.config.years)
            .map(|i| {
                dividend *= 1.0 + inputs.growth_rate;
                npv(dividend, inputs.discount_rate, i)
            })
            .sum()
    }

    /// Capitalised year-end earnings discounted to today.
    pub fn discounted_terminal_value(&self, inputs: &IntrinsicInputs) -> f64 {
        let years = self.config.years;
        let equity_per_share = safe_divide(inputs.equity, inputs.shares_outstanding);
        let final_equity_per_share = equity_per_share * (1.0 + inputs.growth_rate).powi(years as i32);
        let required_value = safe_divide(
            final_equity_per_share * inputs.average_roe,
            inputs.discount_rate,
        );
        npv(required_value, inputs.discount_rate, years)
    }
}

impl IntrinsicModel for RoeModel {
    fn name(&self) -> &str {
        "roe"
    }

    fn value(&self, inputs: &IntrinsicInputs) -> f64 {
        self.discounted_terminal_value(inputs) + self.discounted_dividends(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(growth_rate: f64, dividend_yield: f64) -> IntrinsicInputs {
        IntrinsicInputs {
            equity: 600.0,
            shares_outstanding: 100.0,
            average_roe: 0.2,
            discount_rate: 0.10,
            growth_rate,
            dividend_yield,
            ..Default::default()
        }
    }

    #[test]
    fn test_terminal_value_without_growth() {
        // 6 * 0.2 / 0.1 = 12, discounted ten years
        let model = RoeModel::default();
        assert_relative_eq!(
            model.discounted_terminal_value(&inputs(0.0, 0.0)),
            12.0 / 1.1f64.powi(10),
            epsilon = 1e-12
        );
        assert_eq!(model.discounted_dividends(&inputs(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_dividends_are_seeded_with_yield() {
        // A 2.5% yield contributes 0.025 per year, not 2.5% of the price.
        let dividends = RoeModel::default().discounted_dividends(&inputs(0.0, 0.025));
        let expected: f64 = (0..10).map(|i| 0.025 / 1.1f64.powi(i)).sum();
        assert_relative_eq!(dividends, expected, epsilon = 1e-12);
        assert!(dividends < 0.2);
    }

    #[test]
    fn test_growth_compounds_both_streams() {
        let model = RoeModel::default();
        let value = model.value(&inputs(0.05, 0.025));

        let terminal = 6.0 * 1.05f64.powi(10) * 0.2 / 0.1 / 1.1f64.powi(10);
        let dividends: f64 = (0..10)
            .map(|i| 0.025 * 1.05f64.powi(i + 1) / 1.1f64.powi(i))
            .sum();
        assert_relative_eq!(value, terminal + dividends, epsilon = 1e-9);
    }
}
