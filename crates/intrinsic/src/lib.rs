#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/intrinsic/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod universe;

// Re-export main types from sub-crates
pub use intrinsic_data as data;
pub use intrinsic_output as output;
pub use intrinsic_valuation as valuation;

pub use error::{PipelineError, Result};
pub use pipeline::{BatchOutcome, Evaluation, Pipeline};
pub use universe::{ExchangeUniverse, StaticUniverse, Universe};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
