#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/intrinsic/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod report;
pub mod summary;

pub use export::{ExportError, ExportFormat, Exporter, ValuationExport};
pub use report::{ReportBuilder, ReportError, StockReport};
pub use summary::{FailedSymbol, ScreenSummary};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
