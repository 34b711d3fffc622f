//! Core types for decoded XPT data.

mod directory;
mod options;
mod record;
mod variable;

pub use directory::VariableDirectory;
pub use options::{DEFAULT_NUMERIC_PRECISION, XptReaderOptions};
pub use record::{FieldValue, ObservationRecord};
pub use variable::{Variable, XptType};
