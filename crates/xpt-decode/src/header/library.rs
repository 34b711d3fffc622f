//! Library and member header records.
//!
//! An XPT file opens with eight 80-byte records:
//!
//! | # | Record             | Check            | Fields                          |
//! |---|--------------------|------------------|---------------------------------|
//! | 1 | LIBRARY header     | marker           |                                 |
//! | 2 | real header        | contains `SAS`   | version 24-31, OS 32-39, created 74-79 |
//! | 3 | modified header    |                  | superseded by record 7          |
//! | 4 | MEMBER header      | marker           | NAMESTR size 74-77              |
//! | 5 | DSCRPTR header     | marker           |                                 |
//! | 6 | member data        |                  | dataset name 8-15               |
//! | 7 | member second      |                  | modified 0-16                   |
//! | 8 | NAMESTR header     | marker           | variable count 54-57            |

use chrono::NaiveDateTime;

use super::datetime::parse_xpt_datetime;
use super::marker::{Marker, RECORD_LEN};
use crate::error::{Result, Section, XptError};

/// Number of records in the fixed header.
pub const HEADER_RECORD_COUNT: usize = 8;

/// Total size of the fixed header in bytes.
pub const HEADER_LEN: usize = RECORD_LEN * HEADER_RECORD_COUNT;

/// Offset of the NAMESTR size digits in the MEMBER header.
const NAMESTR_SIZE_OFFSET: usize = 74;

/// Offset of the variable count digits in the NAMESTR header.
const VARIABLE_COUNT_OFFSET: usize = 54;

/// Dataset-level metadata from the fixed header records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// SAS version that wrote the file.
    pub sas_version: String,
    /// Operating system that wrote the file.
    pub sas_os: String,
    /// Creation stamp from the real header, as stored.
    pub created: String,
    /// Last-modified stamp from the member second record.
    pub modified: String,
    /// Dataset (member) name.
    pub dataset_name: String,
    /// Number of variable descriptors that follow.
    pub variable_count: usize,
    /// Size of each variable descriptor in bytes.
    pub variable_record_size: usize,
}

impl Header {
    /// Total size of the variable directory in bytes.
    #[must_use]
    pub fn directory_len(&self) -> usize {
        self.variable_count.saturating_mul(self.variable_record_size)
    }

    /// Parse the modified stamp.
    #[must_use]
    pub fn modified_datetime(&self) -> Option<NaiveDateTime> {
        parse_xpt_datetime(&self.modified)
    }
}

/// Parse the eight fixed header records.
///
/// `data` must hold at least [`HEADER_LEN`] bytes; the caller checks
/// availability before consuming anything.
pub fn parse_header_records(data: &[u8]) -> Result<Header> {
    if data.len() < HEADER_LEN {
        return Err(XptError::insufficient(Section::Header, data.len(), HEADER_LEN));
    }
    let mut records = data.chunks_exact(RECORD_LEN);
    let mut next = || records.next().unwrap_or_default();

    Marker::Library.expect(next())?;

    let real = next();
    Marker::SasIdentification.expect(real)?;
    let sas_version = read_trimmed(real, 24, 8);
    let sas_os = read_trimmed(real, 32, 8);
    let created = read_raw(real, 74, RECORD_LEN - 74);

    // Superseded by the member's own stamp below.
    next();

    let member = next();
    Marker::Member.expect(member)?;
    let variable_record_size =
        parse_header_number(member, NAMESTR_SIZE_OFFSET, "NAMESTR length")?;

    Marker::Descriptor.expect(next())?;

    let dataset_name = read_trimmed(next(), 8, 8);

    let modified = read_trimmed(next(), 0, 17);

    let namestr = next();
    Marker::Namestr.expect(namestr)?;
    let variable_count = parse_header_number(namestr, VARIABLE_COUNT_OFFSET, "variable count")?;

    Ok(Header {
        sas_version,
        sas_os,
        created,
        modified,
        dataset_name,
        variable_count,
        variable_record_size,
    })
}

/// Parse a four-digit decimal field.
fn parse_header_number(record: &[u8], offset: usize, field: &'static str) -> Result<usize> {
    let text = read_raw(record, offset, 4);
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(XptError::FieldFormat { field, value: text });
    }
    digits
        .parse::<usize>()
        .map_err(|_| XptError::FieldFormat { field, value: text })
}

/// Read a string from a record, trimming surrounding whitespace.
fn read_trimmed(record: &[u8], offset: usize, len: usize) -> String {
    read_raw(record, offset, len).trim().to_string()
}

/// Read a string from a record as stored.
fn read_raw(record: &[u8], offset: usize, len: usize) -> String {
    record
        .get(offset..offset + len)
        .map(|slice| String::from_utf8_lossy(slice).into_owned())
        .unwrap_or_default()
}
