//! Evaluation pipeline: load, value and report.
//!
//! Latest valuations are written to `{out}/stocks/{exchange}/{symbol}.json`
//! and historical ones to `{out}/snapshots/{date}/{exchange}/{symbol}.json`.
//! Batch runs evaluate symbols in parallel; a symbol that fails is recorded
//! and logged without affecting the others.

use crate::error::{PipelineError, Result};
use crate::universe::Universe;
use chrono::{NaiveDate, Utc};
use intrinsic_data::{DataError, JsonSnapshotStore, SnapshotLoader, Stock, dates};
use intrinsic_output::{
    ExportFormat, Exporter, FailedSymbol, ReportBuilder, ScreenSummary, StockReport,
    ValuationExport,
};
use intrinsic_valuation::{ValuationEngine, ValuationModel};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A written report.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The report.
    pub report: StockReport,
    /// Where it was written.
    pub path: PathBuf,
}

/// Result of evaluating a universe.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Reports written, in universe order.
    pub reports: Vec<StockReport>,
    /// Symbols that produced no report.
    pub failures: Vec<FailedSymbol>,
}

impl BatchOutcome {
    /// Summary of the batch under `name`.
    pub fn summary(&self, name: impl Into<String>) -> ScreenSummary {
        ScreenSummary::from_reports(name, &self.reports, self.failures.clone())
    }

    /// One export row per report.
    pub fn exports(&self) -> Vec<ValuationExport> {
        self.reports.iter().map(ValuationExport::from).collect()
    }

    /// Write the export rows to `path`, creating parent directories.
    pub fn export_to(&self, path: &Path, format: ExportFormat) -> Result<()> {
        self.exports().export_to_file(path, format)?;
        info!(rows = self.reports.len(), path = %path.display(), "batch exported");
        Ok(())
    }
}

/// Loads snapshots, values them and writes reports.
#[derive(Debug, Clone)]
pub struct Pipeline<L = JsonSnapshotStore> {
    loader: L,
    model: ValuationModel,
    output_dir: PathBuf,
}

impl<L: SnapshotLoader> Pipeline<L> {
    /// Create a pipeline writing under `output_dir`.
    ///
    /// Fails when `model` does not pass [`ValuationModel::validate`].
    pub fn new(loader: L, model: ValuationModel, output_dir: impl Into<PathBuf>) -> Result<Self> {
        model.validate()?;
        Ok(Self {
            loader,
            model,
            output_dir: output_dir.into(),
        })
    }

    /// Valuation assumptions.
    pub const fn model(&self) -> &ValuationModel {
        &self.model
    }

    /// Snapshot source.
    pub const fn loader(&self) -> &L {
        &self.loader
    }

    /// Report root.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the report for `symbol` goes.
    pub fn report_path(&self, symbol: &str, exchange: &str, as_of: Option<NaiveDate>) -> PathBuf {
        let base = match as_of {
            Some(date) => self.output_dir.join("snapshots").join(date.to_string()),
            None => self.output_dir.join("stocks"),
        };
        base.join(exchange).join(format!("{symbol}.json"))
    }

    /// Value one symbol, rewound to `as_of` when given, and write its report.
    pub fn evaluate_symbol(
        &self,
        symbol: &str,
        exchange: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<Evaluation> {
        let stock = self.loader.load(symbol, exchange)?;
        self.evaluate_stock(&stock, exchange, as_of)
    }

    /// Value an already loaded stock and write its report.
    pub fn evaluate_stock(
        &self,
        stock: &Stock,
        exchange: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<Evaluation> {
        let (stock, valuation_date) = match as_of {
            Some(date) => (stock.as_of(date)?, date),
            None => (stock.clone(), Utc::now().date_naive()),
        };

        let engine = ValuationEngine::new(self.model.clone()).as_of(valuation_date);
        let valuation = engine.evaluate(&stock);
        debug!(
            symbol = %stock.symbol,
            instruction = %valuation.instruction,
            fair_value = valuation.fair_value,
            "valued"
        );

        let mut builder = ReportBuilder::new()
            .stock(stock)
            .valuation(valuation)
            .exchange(exchange);
        if let Some(date) = as_of {
            builder = builder.as_of(date);
        }
        let report = builder.build()?;

        let path = self.report_path(&report.symbol, exchange, as_of);
        report.write_to(&path)?;
        info!(symbol = %report.symbol, path = %path.display(), "report written");

        Ok(Evaluation { report, path })
    }

    /// Value every symbol of `universe` in parallel.
    pub fn evaluate_universe<U>(&self, universe: &U, exchange: &str) -> BatchOutcome
    where
        U: Universe + ?Sized,
    {
        self.evaluate_universe_with(universe, exchange, |_| {})
    }

    /// Like [`Pipeline::evaluate_universe`], calling `on_done` after each symbol.
    pub fn evaluate_universe_with<U, F>(
        &self,
        universe: &U,
        exchange: &str,
        on_done: F,
    ) -> BatchOutcome
    where
        U: Universe + ?Sized,
        F: Fn(&str) + Sync,
    {
        let symbols = universe.symbols();
        let results: Vec<(String, Result<Evaluation>)> = symbols
            .into_par_iter()
            .map(|symbol| {
                let result = self.evaluate_symbol(&symbol, exchange, None);
                on_done(&symbol);
                (symbol, result)
            })
            .collect();

        let mut outcome = BatchOutcome::default();
        for (symbol, result) in results {
            match result {
                Ok(evaluation) => outcome.reports.push(evaluation.report),
                Err(err) => {
                    warn!(symbol = %symbol, error = %err, "evaluation failed");
                    outcome.failures.push(FailedSymbol::new(symbol, err.to_string()));
                }
            }
        }
        outcome
    }

    /// Value `symbol` at every month end from `from` to `to`.
    ///
    /// Month ends before the first recorded price are skipped.
    pub fn backfill(
        &self,
        symbol: &str,
        exchange: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Evaluation>> {
        let month_ends = dates::month_ends(from, to)?;
        let stock = self.loader.load(symbol, exchange)?;

        let mut evaluations = Vec::with_capacity(month_ends.len());
        for date in month_ends {
            match self.evaluate_stock(&stock, exchange, Some(date)) {
                Ok(evaluation) => evaluations.push(evaluation),
                Err(PipelineError::Data(DataError::MissingData { reason, .. })) => {
                    debug!(symbol, %date, reason, "skipping month");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(evaluations)
    }
}
