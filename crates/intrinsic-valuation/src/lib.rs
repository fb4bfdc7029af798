#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/intrinsic/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod decision;
pub mod engine;
pub mod error;
pub mod growth;
pub mod intrinsic;
pub mod math;
pub mod model;
pub mod ratios;
pub mod screen;
pub mod selector;
pub mod valuation;

// Re-export common types
pub use decision::{Health, Instruction};
pub use engine::ValuationEngine;
pub use error::{Result, ValuationError};
pub use intrinsic::{IntrinsicInputs, IntrinsicModel, IntrinsicValues};
pub use model::{PeBasis, ValuationModel};
pub use screen::{ViabilityScreen, Violation};
pub use selector::{SelectionSet, latest_valid_balance_sheet, validate_balance_sheet};
pub use valuation::Valuation;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
