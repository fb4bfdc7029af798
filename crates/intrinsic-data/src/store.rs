//! Snapshot storage.
//!
//! Snapshots live as one JSON document per symbol under
//! `{root}/stocks/{exchange}/{symbol}.json`.

use crate::error::{DataError, Result};
use crate::stock::Stock;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplies company snapshots to the valuation pipeline.
pub trait SnapshotLoader: Send + Sync {
    /// Load the latest snapshot of `symbol` on `exchange`.
    fn load(&self, symbol: &str, exchange: &str) -> Result<Stock>;
}

/// JSON file store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    root: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the snapshots of one exchange.
    pub fn exchange_dir(&self, exchange: &str) -> PathBuf {
        self.root.join("stocks").join(exchange)
    }

    /// Path of a symbol's snapshot.
    pub fn snapshot_path(&self, symbol: &str, exchange: &str) -> PathBuf {
        self.exchange_dir(exchange).join(format!("{symbol}.json"))
    }

    /// Symbols with a snapshot on `exchange`, sorted.
    pub fn list_symbols(&self, exchange: &str) -> Result<Vec<String>> {
        let mut symbols = Vec::new();
        for entry in fs::read_dir(self.exchange_dir(exchange))? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    symbols.push(stem.to_string());
                }
            }
        }
        symbols.sort();
        Ok(symbols)
    }

    /// Write a snapshot, creating directories as needed.
    pub fn save(&self, stock: &Stock, exchange: &str) -> Result<PathBuf> {
        let path = self.snapshot_path(&stock.symbol, exchange);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(stock)?)?;
        Ok(path)
    }
}

impl SnapshotLoader for JsonSnapshotStore {
    fn load(&self, symbol: &str, exchange: &str) -> Result<Stock> {
        if symbol.trim().is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let path = self.snapshot_path(symbol, exchange);
        debug!(symbol, exchange, path = %path.display(), "loading snapshot");

        let contents = fs::read_to_string(&path)?;
        let mut stock: Stock = serde_json::from_str(&contents)?;
        if stock.symbol.is_empty() {
            stock.symbol = symbol.to_string();
        } else if stock.symbol != symbol {
            return Err(DataError::Parse(format!(
                "{} holds a snapshot of {}, not {symbol}",
                path.display(),
                stock.symbol
            )));
        }
        if stock.exchange.is_empty() {
            stock.exchange = exchange.to_string();
        }
        Ok(stock)
    }
}
