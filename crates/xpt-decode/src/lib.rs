//! Streaming decoder for SAS Transport (XPT) files.
//!
//! An XPT file is a run of 80-byte header records, a directory of
//! fixed-size NAMESTR variable descriptors, and then fixed-width
//! observation records. Numerics are stored as IBM/370 hexadecimal floats
//! and are converted to IEEE doubles on access.
//!
//! # Features
//!
//! - Header and directory validation with structured errors
//! - Forward-only reading from any [`std::io::Read`]; no seeking
//! - Exact IBM to IEEE floating-point conversion
//! - Field access by variable name, as text or typed values
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use xpt_decode::{FieldValue, XptReader, XptReaderOptions};
//!
//! let file = File::open("dm.xpt")?;
//! let reader = XptReader::with_options(file, XptReaderOptions::new().allow_trailing_padding())?;
//! let (header, directory, observations) = reader.into_parts();
//! println!("Dataset: {} ({} variables)", header.dataset_name, directory.len());
//!
//! for record in observations {
//!     let record = record?;
//!     if let FieldValue::Num(age) = directory.value(&record, "AGE")? {
//!         println!("{} is {age}", directory.field(&record, "USUBJID")?);
//!     }
//! }
//! # Ok::<(), xpt_decode::XptError>(())
//! ```

mod error;
pub mod float;
pub mod header;
mod reader;
mod source;
mod types;

// Re-export error types
pub use error::{Result, Section, XptError};

// Re-export core types
pub use header::{Header, Marker};
pub use types::{
    DEFAULT_NUMERIC_PRECISION, FieldValue, ObservationRecord, Variable, VariableDirectory,
    XptReaderOptions, XptType,
};

// Re-export reader functionality
pub use reader::{Observations, XptReader};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
