//! Graham formula model

use super::{IntrinsicInputs, IntrinsicModel};
use crate::math::safe_divide;
use serde::{Deserialize, Serialize};

/// Configuration for the Graham model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrahamConfig {
    /// P/E of a company with no growth (default: 7.0)
    pub no_growth_pe: f64,
    /// Weight on growth in percent (default: 1.0; Graham used 2.0)
    pub growth_multiplier: f64,
    /// Risk-free rate in percent (default: 4.4)
    pub risk_free_rate: f64,
}

impl Default for GrahamConfig {
    fn default() -> Self {
        Self {
            no_growth_pe: 7.0,
            growth_multiplier: 1.0,
            risk_free_rate: 4.4,
        }
    }
}

/// `eps * (7 + m * g * 100) * 4.4 / (discount_rate * 100)`
///
/// Negated when EPS and growth are both negative, since their product would
/// otherwise read as a positive value.
#[derive(Debug, Default)]
pub struct GrahamModel {
    config: GrahamConfig,
}

impl GrahamModel {
    /// Create with an explicit configuration.
    pub const fn with_config(config: GrahamConfig) -> Self {
        Self { config }
    }
}

impl IntrinsicModel for GrahamModel {
    fn name(&self) -> &str {
        "graham"
    }

    fn value(&self, inputs: &IntrinsicInputs) -> f64 {
        let GrahamConfig {
            no_growth_pe,
            growth_multiplier,
            risk_free_rate,
        } = self.config;

        let multiple = no_growth_pe + growth_multiplier * inputs.growth_rate * 100.0;
        let value = safe_divide(
            inputs.eps * multiple * risk_free_rate,
            inputs.discount_rate * 100.0,
        );

        if inputs.eps < 0.0 && inputs.growth_rate < 0.0 {
            -value
        } else {
            value
        }
    }
}
