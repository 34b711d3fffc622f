//! Observation records and decoded values.

use std::fmt;

use crate::float::format_fixed;

/// One fixed-width observation, as read from the file.
///
/// The record holds bytes only; decoding goes through
/// [`VariableDirectory`](crate::VariableDirectory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationRecord {
    raw: Vec<u8>,
}

impl ObservationRecord {
    /// Wrap raw record bytes.
    #[must_use]
    pub fn new(raw: Vec<u8>) -> Self {
        Self { raw }
    }

    /// Raw record bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Record width in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the record has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Take back the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Character data.
    Char(String),
    /// Numeric data converted to IEEE.
    Num(f64),
}

impl FieldValue {
    /// Numeric value, if this is a numeric field.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(value) => Some(*value),
            Self::Char(_) => None,
        }
    }

    /// Character value, if this is a character field.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Char(text) => Some(text),
            Self::Num(_) => None,
        }
    }

    /// Render as text; numerics use `precision` decimal places.
    #[must_use]
    pub fn render(&self, precision: usize) -> String {
        match self {
            Self::Char(text) => text.clone(),
            Self::Num(value) => format_fixed(*value, precision),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(text) => f.write_str(text),
            Self::Num(value) => write!(f, "{value}"),
        }
    }
}
