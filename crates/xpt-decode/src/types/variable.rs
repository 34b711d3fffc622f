//! Variable (column) definitions from the NAMESTR directory.

use std::fmt;

/// Storage type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XptType {
    /// IBM floating point.
    Num,
    /// Fixed-width character data.
    Char,
}

impl XptType {
    /// Map the NAMESTR `ntype` code; anything other than 1 is character.
    #[must_use]
    pub const fn from_ntype(ntype: u16) -> Self {
        if ntype == 1 { Self::Num } else { Self::Char }
    }
}

impl fmt::Display for XptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num => write!(f, "Num"),
            Self::Char => write!(f, "Char"),
        }
    }
}

/// One declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Variable name, trimmed.
    pub name: String,
    /// Storage type.
    pub data_type: XptType,
    /// Width in the observation record, in bytes.
    pub length: u16,
    /// Declared byte offset in the observation record.
    pub position: u16,
    /// Declared 1-based variable number.
    pub number: u16,
    /// Label and the rest of the descriptor, as stored.
    pub label: String,
}

impl Variable {
    /// Whether values are IBM floating point.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.data_type == XptType::Num
    }

    /// Byte range in the observation record.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        let start = usize::from(self.position);
        start..start + usize::from(self.length)
    }
}
