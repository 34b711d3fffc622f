//! Error types for XPT decoding.

use std::fmt;

use thiserror::Error;

/// Region of the file being read when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The eight fixed 80-byte header records.
    Header,
    /// The NAMESTR variable descriptors.
    VariableDirectory,
    /// Blank fill between the descriptors and the OBS header.
    Padding,
    /// The OBS header record.
    ObservationHeader,
    /// A fixed-width observation record.
    Observation,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header records"),
            Self::VariableDirectory => write!(f, "variable directory"),
            Self::Padding => write!(f, "directory padding"),
            Self::ObservationHeader => write!(f, "observation header"),
            Self::Observation => write!(f, "observation record"),
        }
    }
}

/// Errors that can occur while decoding an XPT stream.
#[derive(Debug, Error)]
pub enum XptError {
    /// Fewer bytes are available than the section needs.
    #[error("{section}: {available} of {required} bytes available")]
    InsufficientData {
        section: Section,
        available: usize,
        required: usize,
    },

    /// A fixed header marker was not where it should be.
    #[error("expected to contain '{expected}' but got '{}'", String::from_utf8_lossy(.actual))]
    MalformedMarker {
        expected: &'static str,
        actual: Vec<u8>,
    },

    /// A numeric header field did not hold decimal digits.
    #[error("failed to parse {field}: {value:?}")]
    FieldFormat { field: &'static str, value: String },

    /// A read began but ended before the expected width.
    #[error("{section} truncated: read {actual} of {expected} bytes")]
    Truncation {
        section: Section,
        expected: usize,
        actual: usize,
    },

    /// No variable with the requested name.
    #[error("variable does not exist: {name}")]
    UnknownField { name: String },

    /// A variable's declared span falls outside the observation record.
    #[error(
        "variable {name} spans bytes {position}..{} outside a {width}-byte record",
        .position + .length
    )]
    OutOfRange {
        name: String,
        position: usize,
        length: usize,
        width: usize,
    },

    /// Descriptor records too small to hold the position field.
    #[error("variable descriptors of {size} bytes are shorter than the required {minimum}")]
    DescriptorTooShort { size: usize, minimum: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for XPT operations.
pub type Result<T> = std::result::Result<T, XptError>;

impl XptError {
    /// Create an InsufficientData error.
    pub fn insufficient(section: Section, available: usize, required: usize) -> Self {
        Self::InsufficientData {
            section,
            available,
            required,
        }
    }

    /// Create a Truncation error.
    pub fn truncated(section: Section, expected: usize, actual: usize) -> Self {
        Self::Truncation {
            section,
            expected,
            actual,
        }
    }

    /// Create an UnknownField error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Whether the input was too short rather than malformed.
    #[must_use]
    pub fn is_short_input(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::Truncation { .. }
        )
    }
}
