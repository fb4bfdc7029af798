#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/intrinsic/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dates;
pub mod error;
pub mod history;
pub mod statements;
pub mod stock;
pub mod store;
pub mod trend;

pub use error::{DataError, Result};
pub use history::{DatedValue, StatementHistory};
pub use statements::{
    BalanceField, BalanceSheet, CashFlowField, CashFlowStatement, FinancialStatement,
    IncomeField, IncomeStatement,
};
pub use stock::{FinancialStatements, HistoricalPrice, Stock};
pub use store::{JsonSnapshotStore, SnapshotLoader};
pub use trend::{PolynomialTrend, TrendEstimator};

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
