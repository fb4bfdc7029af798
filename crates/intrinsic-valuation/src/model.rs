//! Valuation assumptions and screening thresholds.

use crate::error::{Result, ValuationError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which P/E feeds the P/E-multiple model as the historical average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeBasis {
    /// Price over EPS of the multi-year average earnings (default)
    #[default]
    AverageEarnings,
    /// Mean of per-quarter P/E figures, annualised
    QuarterlyMean,
}

/// Assumptions and thresholds for one evaluation run.
///
/// Every field has a default, so a model file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationModel {
    /// Years of statements averaged for earnings (default: 5)
    pub years_for_earnings_calcs: u32,
    /// Margin of safety applied to growth estimates (default: 0.25)
    pub min_mos: f64,
    /// Discount rate for present values (default: 0.10)
    pub discount_rate: f64,
    /// Yearly decay of the FCF growth rate in the DCF model (default: 0.05)
    pub decline_rate: f64,
    /// Minimum return on equity (default: 0.10)
    pub min_roe: f64,
    /// Minimum earnings growth rate (default: 0.0)
    pub min_growth_rate: f64,
    /// Maximum debt to equity (default: 1.0)
    pub max_dte: f64,
    /// Minimum current ratio (default: 1.5)
    pub min_cr: f64,
    /// Minimum earnings per share (default: 0.0)
    pub min_eps: f64,
    /// Maximum price to earnings (default: 15.0)
    pub max_pe: f64,
    /// Maximum PEG (default: 1.0)
    pub max_peg: f64,
    /// Maximum price to book (default: 1.5)
    pub max_pb: f64,
    /// Maximum P/E times P/B (default: 22.5)
    pub max_blended_multiplier: f64,
    /// Minimum Altman Z-score (default: 1.8)
    pub min_altman_z_score: f64,
    /// Minimum whole years of statements (default: 3)
    pub min_statement_years: u32,
    /// P/E used by the P/E-multiple model (default: average earnings)
    pub pe_basis: PeBasis,
}

impl Default for ValuationModel {
    fn default() -> Self {
        Self {
            years_for_earnings_calcs: 5,
            min_mos: 0.25,
            discount_rate: 0.10,
            decline_rate: 0.05,
            min_roe: 0.10,
            min_growth_rate: 0.0,
            max_dte: 1.0,
            min_cr: 1.5,
            min_eps: 0.0,
            max_pe: 15.0,
            max_peg: 1.0,
            max_pb: 1.5,
            max_blended_multiplier: 22.5,
            min_altman_z_score: 1.8,
            min_statement_years: 3,
            pe_basis: PeBasis::AverageEarnings,
        }
    }
}

impl ValuationModel {
    /// Parse a TOML model and validate it.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let model: Self = toml::from_str(contents)?;
        model.validate()?;
        Ok(model)
    }

    /// Read a TOML model file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject assumptions the formulas cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.years_for_earnings_calcs == 0 {
            return Err(ValuationError::InvalidModel(
                "years_for_earnings_calcs must be at least 1".to_string(),
            ));
        }
        if !(self.discount_rate > 0.0) {
            return Err(ValuationError::InvalidModel(format!(
                "discount_rate must be positive, got {}",
                self.discount_rate
            )));
        }
        if !(0.0..1.0).contains(&self.min_mos) {
            return Err(ValuationError::InvalidModel(format!(
                "min_mos must be in [0, 1), got {}",
                self.min_mos
            )));
        }
        if !(0.0..1.0).contains(&self.decline_rate) {
            return Err(ValuationError::InvalidModel(format!(
                "decline_rate must be in [0, 1), got {}",
                self.decline_rate
            )));
        }
        Ok(())
    }
}
