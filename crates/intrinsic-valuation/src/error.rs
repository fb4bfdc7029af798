//! Error types for valuation.

use thiserror::Error;

/// Result type for valuation operations.
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Errors that can occur while valuing a company.
#[derive(Debug, Error)]
pub enum ValuationError {
    /// No balance sheet in the history reports every required field
    #[error("No valid balance sheet for {symbol}")]
    NoValidBalanceSheet {
        /// Symbol being valued
        symbol: String,
    },

    /// Model assumption out of range
    #[error("Invalid valuation model: {0}")]
    InvalidModel(String),

    /// Model file could not be parsed
    #[error("Model parse error: {0}")]
    ModelParse(#[from] toml::de::Error),

    /// Model could not be rendered
    #[error("Model serialization error: {0}")]
    ModelSerialize(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
