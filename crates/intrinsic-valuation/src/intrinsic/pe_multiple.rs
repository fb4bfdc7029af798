//! P/E-multiple model
//!
//! Projects EPS forward at the growth rate, prices it at the historical
//! average P/E and discounts the result back to today.

use super::{IntrinsicInputs, IntrinsicModel};
use crate::math::npv;
use serde::{Deserialize, Serialize};

/// Configuration for the P/E-multiple model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeMultipleConfig {
    /// Projection horizon in years (default: 5)
    pub years: u32,
}

impl Default for PeMultipleConfig {
    fn default() -> Self {
        Self { years: 5 }
    }
}

/// `npv(eps * average_pe * (1 + g)^years, discount_rate, years)`
#[derive(Debug, Default)]
pub struct PeMultipleModel {
    config: PeMultipleConfig,
}

impl PeMultipleModel {
    /// Create with an explicit configuration.
    pub const fn with_config(config: PeMultipleConfig) -> Self {
        Self { config }
    }
}

impl IntrinsicModel for PeMultipleModel {
    fn name(&self) -> &str {
        "pe_multiple"
    }

    fn value(&self, inputs: &IntrinsicInputs) -> f64 {
        let years = self.config.years;
        let future_value =
            inputs.eps * inputs.average_pe * (1.0 + inputs.growth_rate).powi(years as i32);
        npv(future_value, inputs.discount_rate, years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(eps: f64, average_pe: f64, growth_rate: f64) -> IntrinsicInputs {
        IntrinsicInputs {
            eps,
            average_pe,
            growth_rate,
            discount_rate: 0.10,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_growth_discounts_current_price() {
        // eps * pe == price; five years at 10% with no growth
        let value = PeMultipleModel::default().value(&inputs(2.0, 10.0, 0.0));
        assert_relative_eq!(value, 20.0 / 1.1f64.powi(5), epsilon = 1e-12);
    }

    #[test]
    fn test_growth_matching_discount_rate_preserves_value() {
        let value = PeMultipleModel::default().value(&inputs(2.0, 10.0, 0.10));
        assert_relative_eq!(value, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_horizon_is_undiscounted() {
        let model = PeMultipleModel::with_config(PeMultipleConfig { years: 0 });
        assert_eq!(model.value(&inputs(2.0, 10.0, 0.5)), 20.0);
    }
}
