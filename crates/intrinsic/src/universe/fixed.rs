//! Explicit symbol lists.

/// A fixed list of symbols, trimmed, deduplicated and sorted.
///
/// Case is kept: symbols name snapshot files, which may be case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticUniverse {
    symbols: Vec<String>,
}

impl StaticUniverse {
    /// Create a universe from any list of symbols.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        symbols.into_iter().collect()
    }

    /// Symbols in the universe.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl<S: Into<String>> FromIterator<S> for StaticUniverse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut symbols: Vec<String> = iter
            .into_iter()
            .map(Into::into)
            .map(|s: String| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        symbols.sort();
        symbols.dedup();
        Self { symbols }
    }
}
