//! Batch export of valuations.
//!
//! Each valued stock becomes one flat [`ValuationExport`] row, written as
//! CSV or JSON through the [`Exporter`] trait.

use crate::report::StockReport;
use intrinsic_valuation::{Health, Instruction, Valuation};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    #[default]
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "pretty" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// One valued stock as a flat row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValuationExport {
    /// Security symbol.
    pub symbol: String,
    /// Listing exchange.
    pub exchange: String,
    /// Price the valuation was made at.
    pub current_price: f64,
    /// Headline fair value.
    pub fair_value: f64,
    /// Percent return to fair value.
    pub expected_return: f64,
    /// Trading instruction.
    pub instruction: Instruction,
    /// Health band.
    pub health: Health,
    /// Return on equity.
    pub roe: f64,
    /// Conservative earnings growth.
    pub growth_rate: f64,
    /// Debt to equity.
    pub dte: f64,
    /// Current ratio.
    pub cr: f64,
    /// Earnings per share.
    pub eps: f64,
    /// Price to earnings.
    pub pe: f64,
    /// PEG.
    pub peg: f64,
    /// Price to book.
    pub pb: f64,
    /// P/E times P/B.
    pub blended_multiplier: f64,
    /// Altman Z-score.
    pub altman_z_score: f64,
    /// Whole years of statements.
    pub statement_years: u32,
    /// P/E-multiple intrinsic value.
    pub pe_multiple_iv: f64,
    /// Graham intrinsic value.
    pub graham_iv: f64,
    /// DCF intrinsic value.
    pub dcf_iv: f64,
    /// ROE intrinsic value.
    pub roe_iv: f64,
    /// Liquidation value.
    pub liquidation_iv: f64,
}

impl ValuationExport {
    /// Flatten a valuation made at `current_price`.
    pub fn new(
        symbol: String,
        exchange: String,
        current_price: f64,
        valuation: &Valuation,
    ) -> Self {
        Self {
            symbol,
            exchange,
            current_price,
            fair_value: valuation.fair_value,
            expected_return: valuation.expected_return,
            instruction: valuation.instruction,
            health: valuation.health,
            roe: valuation.roe,
            growth_rate: valuation.growth_rate,
            dte: valuation.dte,
            cr: valuation.cr,
            eps: valuation.eps,
            pe: valuation.pe,
            peg: valuation.peg,
            pb: valuation.pb,
            blended_multiplier: valuation.blended_multiplier,
            altman_z_score: valuation.altman_z_score,
            statement_years: valuation.statement_years,
            pe_multiple_iv: valuation.pe_multiple_iv,
            graham_iv: valuation.graham_iv,
            dcf_iv: valuation.dcf_iv,
            roe_iv: valuation.roe_iv,
            liquidation_iv: valuation.liquidation_iv,
        }
    }
}

impl From<&StockReport> for ValuationExport {
    fn from(report: &StockReport) -> Self {
        Self::new(
            report.symbol.clone(),
            report.exchange.clone(),
            report.stock.current_price,
            &report.valuation,
        )
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

fn to_csv<'a>(rows: impl IntoIterator<Item = &'a ValuationExport>) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

impl Exporter for ValuationExport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => to_csv([self]),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for [ValuationExport] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => to_csv(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<ValuationExport> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        self.as_slice().export_to_string(format)
    }
}
