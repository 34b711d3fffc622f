//! The variable directory and field access.

use std::ops::Range;

use super::{FieldValue, ObservationRecord, Variable, XptReaderOptions};
use crate::error::{Result, XptError};
use crate::float::decode_ibm;

/// Ordered variables of a dataset plus the observation width they imply.
///
/// Field accessors take the record explicitly; a record never holds a
/// reference back into the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDirectory {
    variables: Vec<Variable>,
    observation_width: usize,
    options: XptReaderOptions,
}

impl VariableDirectory {
    /// Build a directory; the observation width is the sum of all lengths.
    #[must_use]
    pub fn new(variables: Vec<Variable>) -> Self {
        let observation_width = variables.iter().map(|v| usize::from(v.length)).sum();
        Self {
            variables,
            observation_width,
            options: XptReaderOptions::default(),
        }
    }

    /// Use `options` when rendering field values.
    #[must_use]
    pub fn with_options(mut self, options: XptReaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Width of every observation record in bytes.
    #[must_use]
    pub fn observation_width(&self) -> usize {
        self.observation_width
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the dataset declares no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables in declaration order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Iterate variables in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Variable at a declaration index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Variable> {
        self.variables.get(index)
    }

    /// Declaration index of the first variable called `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name == name)
    }

    /// First variable called `name`.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.position_of(name).map(|index| &self.variables[index])
    }

    /// Raw bytes of `name` in `record`.
    pub fn raw<'r>(&self, record: &'r ObservationRecord, name: &str) -> Result<&'r [u8]> {
        let index = self
            .position_of(name)
            .ok_or_else(|| XptError::unknown_field(name))?;
        let span = self.checked_span(index, record.len())?;
        Ok(&record.as_bytes()[span])
    }

    /// Decode `name` in `record`.
    pub fn value(&self, record: &ObservationRecord, name: &str) -> Result<FieldValue> {
        let index = self
            .position_of(name)
            .ok_or_else(|| XptError::unknown_field(name))?;
        let span = self.checked_span(index, record.len())?;
        let bytes = &record.as_bytes()[span];

        if self.variables[index].is_numeric() {
            return Ok(FieldValue::Num(decode_ibm(bytes)));
        }
        let text = String::from_utf8_lossy(bytes);
        let text = if self.options.trim_strings {
            text.trim_end().to_string()
        } else {
            text.into_owned()
        };
        Ok(FieldValue::Char(text))
    }

    /// Decode `name` in `record` as text.
    ///
    /// Character values come back as stored, trailing blanks included;
    /// numerics are rendered with a fixed number of decimal places.
    pub fn field(&self, record: &ObservationRecord, name: &str) -> Result<String> {
        let value = self.value(record, name)?;
        Ok(value.render(self.options.numeric_precision))
    }

    fn checked_span(&self, index: usize, width: usize) -> Result<Range<usize>> {
        let variable = &self.variables[index];
        let span = variable.span();
        if span.end > width {
            return Err(XptError::OutOfRange {
                name: variable.name.clone(),
                position: span.start,
                length: span.len(),
                width,
            });
        }
        Ok(span)
    }
}

impl<'a> IntoIterator for &'a VariableDirectory {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}
