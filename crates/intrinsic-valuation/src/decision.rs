//! Fair value, instruction and health classification.

use crate::math::{round2, safe_divide};
use crate::model::ValuationModel;
use crate::screen::ViabilityScreen;
use crate::valuation::Valuation;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Z-score below which a company is [`Health::Dying`].
pub const DYING_BELOW: f64 = 1.8;
/// Z-score from which a company is [`Health::Healthy`].
pub const HEALTHY_FROM: f64 = 3.0;

/// Trading instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Instruction {
    /// Viable and priced below fair value
    #[display("BUY")]
    Buy,
    /// Not viable, or priced at or above fair value
    #[default]
    #[display("SELL")]
    Sell,
    /// Neither rule applies
    #[display("HOLD")]
    Hold,
}

/// Financial health from the Altman Z-score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Health {
    /// Z-score below 1.8
    #[default]
    #[display("DYING")]
    Dying,
    /// Z-score in `[1.8, 3.0)`
    #[display("AVERAGE")]
    Average,
    /// Z-score of 3.0 or more
    #[display("HEALTHY")]
    Healthy,
}

/// Headline fair value: the P/E-multiple estimate.
pub fn fair_value(valuation: &Valuation) -> f64 {
    valuation.pe_multiple_iv
}

/// Percent move from `current_price` to `fair_value`, rounded to cents.
///
/// Zero when there is no price.
pub fn expected_return(fair_value: f64, current_price: f64) -> f64 {
    round2(safe_divide(100.0 * (fair_value - current_price), current_price))
}

/// Instruction for a price against fair value.
///
/// The overvalued test runs first and both comparisons are inclusive, so a
/// price exactly at fair value is a `SELL`.
pub fn instruction(viable: bool, current_price: f64, fair_value: f64) -> Instruction {
    let overvalued = current_price >= fair_value;
    let undervalued = current_price <= fair_value;

    if !viable || overvalued {
        Instruction::Sell
    } else if viable && undervalued {
        Instruction::Buy
    } else {
        Instruction::Hold
    }
}

/// Health band of an Altman Z-score.
pub fn health(altman_z_score: f64) -> Health {
    if altman_z_score < DYING_BELOW {
        Health::Dying
    } else if altman_z_score >= HEALTHY_FROM {
        Health::Healthy
    } else {
        Health::Average
    }
}

/// Fill in fair value, expected return, instruction and health.
pub fn decide(mut valuation: Valuation, current_price: f64, model: &ValuationModel) -> Valuation {
    let viable = ViabilityScreen::new(model).is_viable(&valuation);

    valuation.fair_value = fair_value(&valuation);
    valuation.expected_return = expected_return(valuation.fair_value, current_price);
    valuation.instruction = instruction(viable, current_price, valuation.fair_value);
    valuation.health = health(valuation.altman_z_score);
    valuation
}
