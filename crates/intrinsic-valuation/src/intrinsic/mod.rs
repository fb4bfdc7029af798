//! Intrinsic value models - per-share fair value estimates
//!
//! Each model is independent and reads what it needs from a shared
//! [`IntrinsicInputs`]. The P/E-multiple estimate is the headline fair value;
//! the others are reported alongside it, and liquidation value serves as a
//! floor.

pub mod dcf;
pub mod graham;
pub mod liquidation;
pub mod pe_multiple;
pub mod roe;

pub use dcf::{DcfConfig, DcfModel};
pub use graham::{GrahamConfig, GrahamModel};
pub use liquidation::LiquidationModel;
pub use pe_multiple::{PeMultipleConfig, PeMultipleModel};
pub use roe::{RoeConfig, RoeModel};

use serde::{Deserialize, Serialize};

/// A per-share fair value estimate.
pub trait IntrinsicModel: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Estimated value per share.
    fn value(&self, inputs: &IntrinsicInputs) -> f64;
}

/// Everything the intrinsic models read, unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicInputs {
    /// Earnings per share
    pub eps: f64,
    /// Historical average P/E
    pub average_pe: f64,
    /// Conservative yearly growth rate
    pub growth_rate: f64,
    /// Discount rate
    pub discount_rate: f64,
    /// Yearly decay of FCF growth
    pub decline_rate: f64,
    /// Trailing-year free cash flow
    pub fcf: f64,
    /// Cash on the latest balance sheet
    pub cash: f64,
    /// Current liabilities on the latest balance sheet
    pub current_liabilities: f64,
    /// Shares outstanding
    pub shares_outstanding: f64,
    /// Book equity
    pub equity: f64,
    /// Average return on equity
    pub average_roe: f64,
    /// Trailing-year dividend yield
    pub dividend_yield: f64,
}

/// The five estimates for one stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicValues {
    /// P/E-multiple estimate
    pub pe_multiple: f64,
    /// Graham formula estimate
    pub graham: f64,
    /// Discounted cash flow estimate
    pub dcf: f64,
    /// ROE and dividend estimate
    pub roe: f64,
    /// Book value per share
    pub liquidation: f64,
}

impl IntrinsicValues {
    /// Run every model with its default configuration.
    pub fn compute(inputs: &IntrinsicInputs) -> Self {
        Self {
            pe_multiple: PeMultipleModel::default().value(inputs),
            graham: GrahamModel::default().value(inputs),
            dcf: DcfModel::default().value(inputs),
            roe: RoeModel::default().value(inputs),
            liquidation: LiquidationModel.value(inputs),
        }
    }
}
