//! Discounted cash flow model
//!
//! Free cash flow grows each year at `g * (1 - decline)^i` for year index
//! `i` starting at zero, so growth decays geometrically over the horizon.
//! Every projected year is discounted, and a terminal value of a fixed
//! multiple of the last discounted year is added before netting cash
//! against current liabilities.

use super::{IntrinsicInputs, IntrinsicModel};
use crate::math::{npv, safe_divide};
use serde::{Deserialize, Serialize};

/// Configuration for the DCF model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcfConfig {
    /// Projection horizon in years (default: 10)
    pub years: u32,
    /// Multiple of the final discounted FCF used as terminal value (default: 12.0)
    pub terminal_multiple: f64,
}

impl Default for DcfConfig {
    fn default() -> Self {
        Self {
            years: 10,
            terminal_multiple: 12.0,
        }
    }
}

/// Ten-year DCF per share.
#[derive(Debug, Default)]
pub struct DcfModel {
    config: DcfConfig,
}

impl DcfModel {
    /// Create with an explicit configuration.
    pub const fn with_config(config: DcfConfig) -> Self {
        Self { config }
    }

    /// Projected free cash flow for each year of the horizon, undiscounted.
    pub fn projected_cash_flows(&self, inputs: &IntrinsicInputs) -> Vec<f64> {
        let mut fcf = inputs.fcf;
        (0..self.config.years)
            .map(|i| {
                let decline = (1.0 - inputs.decline_rate).powi(i as i32);
                fcf *= 1.0 + inputs.growth_rate * decline;
                fcf
            })
            .collect()
    }
}

impl IntrinsicModel for DcfModel {
    fn name(&self) -> &str {
        "dcf"
    }

    fn value(&self, inputs: &IntrinsicInputs) -> f64 {
        let discounted: Vec<f64> = self
            .projected_cash_flows(inputs)
            .into_iter()
            .zip(1..)
            .map(|(fcf, year)| npv(fcf, inputs.discount_rate, year))
            .collect();

        let total: f64 = discounted.iter().sum();
        let terminal = discounted.last().copied().unwrap_or(0.0) * self.config.terminal_multiple;
        let company_value = total + terminal + inputs.cash - inputs.current_liabilities;

        safe_divide(company_value, inputs.shares_outstanding)
    }
}
