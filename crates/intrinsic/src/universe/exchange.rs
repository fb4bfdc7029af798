//! Symbols discovered from an exchange's snapshot directory.

use intrinsic_data::{JsonSnapshotStore, Result};

/// Every symbol with a stored snapshot on one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeUniverse {
    exchange: String,
    symbols: Vec<String>,
}

impl ExchangeUniverse {
    /// List the snapshots of `exchange` in `store`.
    pub fn load(store: &JsonSnapshotStore, exchange: impl Into<String>) -> Result<Self> {
        let exchange = exchange.into();
        let symbols = store.list_symbols(&exchange)?;
        Ok(Self { exchange, symbols })
    }

    /// Exchange name.
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Symbols with a snapshot, sorted.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}
