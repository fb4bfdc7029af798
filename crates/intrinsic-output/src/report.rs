//! Per-stock valuation reports.

use chrono::{DateTime, NaiveDate, Utc};
use intrinsic_data::Stock;
use intrinsic_valuation::Valuation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Builder finished without a required part.
    #[error("Report is missing its {0}")]
    Incomplete(&'static str),
}

/// A stock snapshot with its valuation attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    /// Symbol being valued.
    pub symbol: String,

    /// Listing exchange.
    pub exchange: String,

    /// Historical valuation date, `None` for the latest snapshot.
    pub as_of: Option<NaiveDate>,

    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// The snapshot that was valued.
    pub stock: Stock,

    /// The valuation.
    pub valuation: Valuation,
}

impl StockReport {
    /// Create a report for `stock`, taking symbol and exchange from it.
    pub fn new(stock: Stock, valuation: Valuation, as_of: Option<NaiveDate>) -> Self {
        Self {
            symbol: stock.symbol.clone(),
            exchange: stock.exchange.clone(),
            as_of,
            generated_at: Utc::now(),
            stock,
            valuation,
        }
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a report written by [`StockReport::write_to`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    stock: Option<Stock>,
    valuation: Option<Valuation>,
    exchange: Option<String>,
    as_of: Option<NaiveDate>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the valued stock.
    pub fn stock(mut self, stock: Stock) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Set the valuation.
    pub fn valuation(mut self, valuation: Valuation) -> Self {
        self.valuation = Some(valuation);
        self
    }

    /// Override the exchange recorded on the stock.
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Set the historical valuation date.
    pub const fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Build the report.
    pub fn build(self) -> Result<StockReport, ReportError> {
        let mut stock = self.stock.ok_or(ReportError::Incomplete("stock"))?;
        let valuation = self.valuation.ok_or(ReportError::Incomplete("valuation"))?;
        if let Some(exchange) = self.exchange {
            stock.exchange = exchange;
        }
        Ok(StockReport::new(stock, valuation, self.as_of))
    }
}
