//! Threshold screen deciding whether a stock is investable at all.

use crate::model::ValuationModel;
use crate::valuation::Valuation;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One failed screening rule, with the value that failed it.
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    /// ROE below the minimum
    #[display("roe {actual} below {min}")]
    Roe {
        /// Observed value
        actual: f64,
        /// Lower bound
        min: f64,
    },
    /// Growth below the minimum
    #[display("growth rate {actual} below {min}")]
    GrowthRate {
        /// Observed value
        actual: f64,
        /// Lower bound
        min: f64,
    },
    /// D/E outside `[0, max]`
    #[display("dte {actual} outside [0, {max}]")]
    DebtToEquity {
        /// Observed value
        actual: f64,
        /// Upper bound
        max: f64,
    },
    /// Current ratio below the minimum
    #[display("current ratio {actual} below {min}")]
    CurrentRatio {
        /// Observed value
        actual: f64,
        /// Lower bound
        min: f64,
    },
    /// EPS below the minimum
    #[display("eps {actual} below {min}")]
    Eps {
        /// Observed value
        actual: f64,
        /// Lower bound
        min: f64,
    },
    /// P/E outside `[0, max]`
    #[display("pe {actual} outside [0, {max}]")]
    Pe {
        /// Observed value
        actual: f64,
        /// Upper bound
        max: f64,
    },
    /// PEG outside `(0, max]`
    #[display("peg {actual} outside (0, {max}]")]
    Peg {
        /// Observed value
        actual: f64,
        /// Upper bound
        max: f64,
    },
    /// P/B outside `(0, max]`
    #[display("pb {actual} outside (0, {max}]")]
    Pb {
        /// Observed value
        actual: f64,
        /// Upper bound
        max: f64,
    },
    /// Blended multiplier outside `(0, max]`
    #[display("blended multiplier {actual} outside (0, {max}]")]
    BlendedMultiplier {
        /// Observed value
        actual: f64,
        /// Upper bound
        max: f64,
    },
    /// Altman Z-score below the minimum
    #[display("altman z-score {actual} below {min}")]
    AltmanZScore {
        /// Observed value
        actual: f64,
        /// Lower bound
        min: f64,
    },
    /// Too few years of statements
    #[display("{actual} statement years, need {min}")]
    StatementYears {
        /// Observed value
        actual: u32,
        /// Lower bound
        min: u32,
    },
}

/// AND of range checks against a [`ValuationModel`].
#[derive(Debug, Clone, Copy)]
pub struct ViabilityScreen<'a> {
    model: &'a ValuationModel,
}

impl<'a> ViabilityScreen<'a> {
    /// Screen with the thresholds of `model`.
    pub const fn new(model: &'a ValuationModel) -> Self {
        Self { model }
    }

    /// Every rule `valuation` fails, in a fixed order.
    pub fn violations(&self, valuation: &Valuation) -> Vec<Violation> {
        let m = self.model;
        let v = valuation;
        let mut violations = Vec::new();

        if v.roe < m.min_roe {
            violations.push(Violation::Roe {
                actual: v.roe,
                min: m.min_roe,
            });
        }
        if v.growth_rate < m.min_growth_rate {
            violations.push(Violation::GrowthRate {
                actual: v.growth_rate,
                min: m.min_growth_rate,
            });
        }
        if !within_closed(v.dte, m.max_dte) {
            violations.push(Violation::DebtToEquity {
                actual: v.dte,
                max: m.max_dte,
            });
        }
        if v.cr < m.min_cr {
            violations.push(Violation::CurrentRatio {
                actual: v.cr,
                min: m.min_cr,
            });
        }
        if v.eps < m.min_eps {
            violations.push(Violation::Eps {
                actual: v.eps,
                min: m.min_eps,
            });
        }
        if !within_closed(v.pe, m.max_pe) {
            violations.push(Violation::Pe {
                actual: v.pe,
                max: m.max_pe,
            });
        }
        if !within_open(v.peg, m.max_peg) {
            violations.push(Violation::Peg {
                actual: v.peg,
                max: m.max_peg,
            });
        }
        if !within_open(v.pb, m.max_pb) {
            violations.push(Violation::Pb {
                actual: v.pb,
                max: m.max_pb,
            });
        }
        if !within_open(v.blended_multiplier, m.max_blended_multiplier) {
            violations.push(Violation::BlendedMultiplier {
                actual: v.blended_multiplier,
                max: m.max_blended_multiplier,
            });
        }
        if v.altman_z_score < m.min_altman_z_score {
            violations.push(Violation::AltmanZScore {
                actual: v.altman_z_score,
                min: m.min_altman_z_score,
            });
        }
        if v.statement_years < m.min_statement_years {
            violations.push(Violation::StatementYears {
                actual: v.statement_years,
                min: m.min_statement_years,
            });
        }

        violations
    }

    /// True when no rule fails.
    pub fn is_viable(&self, valuation: &Valuation) -> bool {
        self.violations(valuation).is_empty()
    }
}

/// `value` in `[0, max]`.
fn within_closed(value: f64, max: f64) -> bool {
    (0.0..=max).contains(&value)
}

/// `value` in `(0, max]`.
fn within_open(value: f64, max: f64) -> bool {
    value > 0.0 && value <= max
}
