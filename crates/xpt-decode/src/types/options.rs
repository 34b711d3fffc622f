//! Reader options.

/// Decimal places used when rendering numeric fields as text.
pub const DEFAULT_NUMERIC_PRECISION: usize = 6;

/// Options for reading XPT files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XptReaderOptions {
    /// Trim trailing spaces from character values (default: false).
    pub trim_strings: bool,
    /// Decimal places for rendered numerics (default: 6).
    pub numeric_precision: usize,
    /// Treat a short, all-blank final record as end of data (default: false).
    pub allow_trailing_padding: bool,
}

impl Default for XptReaderOptions {
    fn default() -> Self {
        Self {
            trim_strings: false,
            numeric_precision: DEFAULT_NUMERIC_PRECISION,
            allow_trailing_padding: false,
        }
    }
}

impl XptReaderOptions {
    /// Create reader options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim trailing spaces from character values.
    #[must_use]
    pub fn trim_strings(mut self) -> Self {
        self.trim_strings = true;
        self
    }

    /// Set the number of decimal places for rendered numerics.
    #[must_use]
    pub fn with_numeric_precision(mut self, precision: usize) -> Self {
        self.numeric_precision = precision;
        self
    }

    /// Accept the blank fill SAS writes after the last observation.
    #[must_use]
    pub fn allow_trailing_padding(mut self) -> Self {
        self.allow_trailing_padding = true;
        self
    }
}
