//! Screen summary for a batch of valuations.
//!
//! Counts instructions and health bands, lists symbols that failed to load
//! or value, and ranks BUY candidates by expected return.

use crate::export::ValuationExport;
use crate::report::StockReport;
use intrinsic_valuation::{Health, Instruction};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A symbol that produced no report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailedSymbol {
    /// Security symbol.
    pub symbol: String,

    /// Why it failed.
    pub reason: String,
}

impl FailedSymbol {
    /// Create a new failure record.
    pub fn new(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of screening a universe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScreenSummary {
    /// Name of the screened universe, usually the exchange.
    pub name: String,

    /// Stocks valued.
    pub evaluated: usize,

    /// BUY count.
    pub buy: usize,

    /// SELL count.
    pub sell: usize,

    /// HOLD count.
    pub hold: usize,

    /// HEALTHY count.
    pub healthy: usize,

    /// AVERAGE count.
    pub average: usize,

    /// DYING count.
    pub dying: usize,

    /// BUY rows, highest expected return first.
    pub candidates: Vec<ValuationExport>,

    /// Symbols without a report.
    pub failures: Vec<FailedSymbol>,
}

impl ScreenSummary {
    /// Summarise `reports` and `failures` for the universe `name`.
    pub fn from_reports(
        name: impl Into<String>,
        reports: &[StockReport],
        failures: Vec<FailedSymbol>,
    ) -> Self {
        let mut summary = Self {
            name: name.into(),
            evaluated: reports.len(),
            failures,
            ..Default::default()
        };

        for report in reports {
            let valuation = &report.valuation;
            match valuation.instruction {
                Instruction::Buy => {
                    summary.buy += 1;
                    summary.candidates.push(ValuationExport::from(report));
                }
                Instruction::Sell => summary.sell += 1,
                Instruction::Hold => summary.hold += 1,
            }
            match valuation.health {
                Health::Healthy => summary.healthy += 1,
                Health::Average => summary.average += 1,
                Health::Dying => summary.dying += 1,
            }
        }

        summary.candidates.sort_by(|a, b| {
            b.expected_return
                .partial_cmp(&a.expected_return)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
        summary
    }

    /// The best `n` candidates.
    pub fn top(&self, n: usize) -> &[ValuationExport] {
        &self.candidates[..n.min(self.candidates.len())]
    }

    /// Share of valued stocks that are BUYs.
    pub fn buy_ratio(&self) -> f64 {
        if self.evaluated == 0 {
            0.0
        } else {
            self.buy as f64 / self.evaluated as f64
        }
    }

    /// Generate an ASCII table representation.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nScreen Summary: {}\n", self.name));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str(&format!(
            "  Evaluated:    {:>6}    Failed:   {:>6}\n",
            self.evaluated,
            self.failures.len()
        ));
        output.push_str(&format!(
            "  BUY:          {:>6}    SELL:     {:>6}    HOLD:  {:>6}\n",
            self.buy, self.sell, self.hold
        ));
        output.push_str(&format!(
            "  HEALTHY:      {:>6}    AVERAGE:  {:>6}    DYING: {:>6}\n",
            self.healthy, self.average, self.dying
        ));

        if !self.candidates.is_empty() {
            output.push_str("\nBuy Candidates:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            output.push_str(&format!(
                "{:<10} {:>10} {:>10} {:>10} {:>8} {:>8} {:>10}\n",
                "Symbol", "Price", "Fair", "Return", "P/E", "PEG", "Health"
            ));
            output.push_str(&"-".repeat(80));
            output.push('\n');

            for row in &self.candidates {
                output.push_str(&format!(
                    "{:<10} {:>10.2} {:>10.2} {:>9.2}% {:>8.2} {:>8.2} {:>10}\n",
                    row.symbol,
                    row.current_price,
                    row.fair_value,
                    row.expected_return,
                    row.pe,
                    row.peg,
                    row.health.to_string()
                ));
            }
        }

        if !self.failures.is_empty() {
            output.push_str("\nFailures:\n");
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for failure in &self.failures {
                output.push_str(&format!("{:<10} {}\n", failure.symbol, failure.reason));
            }
        }

        output.push_str(&"=".repeat(80));
        output.push('\n');
        output
    }
}

impl fmt::Display for ScreenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} evaluated, {} buy, {} sell, {} hold, {} failed",
            self.name,
            self.evaluated,
            self.buy,
            self.sell,
            self.hold,
            self.failures.len()
        )
    }
}
