//! Liquidation value: book equity per share.

use super::{IntrinsicInputs, IntrinsicModel};
use crate::math::safe_divide;

/// Equity over shares outstanding.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiquidationModel;

impl IntrinsicModel for LiquidationModel {
    fn name(&self) -> &str {
        "liquidation"
    }

    fn value(&self, inputs: &IntrinsicInputs) -> f64 {
        safe_divide(inputs.equity, inputs.shares_outstanding)
    }
}
