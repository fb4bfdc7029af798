//! Universe management.
//!
//! A universe is the list of symbols a batch run evaluates, either given
//! explicitly or discovered from the snapshots stored for an exchange.

pub mod exchange;
pub mod fixed;

pub use exchange::ExchangeUniverse;
pub use fixed::StaticUniverse;

/// Trait for stock universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().iter().any(|s| s == symbol)
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for StaticUniverse {
    fn symbols(&self) -> Vec<String> {
        self.symbols().to_vec()
    }
}

impl Universe for ExchangeUniverse {
    fn symbols(&self) -> Vec<String> {
        self.symbols().to_vec()
    }
}
