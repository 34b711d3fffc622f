//! NAMESTR variable descriptors.
//!
//! Each variable is described by one fixed-size NAMESTR record (140 bytes,
//! or 136 on VAX/VMS). The fields read here:
//!
//! | Offset | Field | Type    | Description                        |
//! |--------|-------|---------|------------------------------------|
//! | 0-1    | ntype | short   | 1=NUMERIC, anything else character |
//! | 4-5    | nlng  | short   | Length in the observation          |
//! | 6-7    | nvar0 | short   | Variable number                    |
//! | 8-15   | nname | char[8] | Name                               |
//! | 16-    | label | char[]  | Label and the rest of the record   |
//! | 86-87  | npos  | short   | Position in the observation        |

use super::marker::RECORD_LEN;
use crate::error::{Result, Section, XptError};
use crate::types::{Variable, XptType};

/// Standard NAMESTR length.
pub const NAMESTR_LEN: usize = 140;

/// VAX/VMS NAMESTR length.
pub const NAMESTR_LEN_VAX: usize = 136;

/// Smallest descriptor that still holds the position field.
pub const MIN_NAMESTR_LEN: usize = 88;

/// Reject descriptor sizes too small to hold every field we read.
pub fn check_namestr_len(size: usize) -> Result<()> {
    if size < MIN_NAMESTR_LEN {
        return Err(XptError::DescriptorTooShort {
            size,
            minimum: MIN_NAMESTR_LEN,
        });
    }
    Ok(())
}

/// Parse one descriptor. `data` must be at least [`MIN_NAMESTR_LEN`] bytes.
pub fn parse_namestr(data: &[u8]) -> Result<Variable> {
    check_namestr_len(data.len())?;
    Ok(Variable {
        name: String::from_utf8_lossy(&data[8..16]).trim().to_string(),
        data_type: XptType::from_ntype(read_u16(data, 0)),
        length: read_u16(data, 4),
        position: read_u16(data, 86),
        number: read_u16(data, 6),
        label: String::from_utf8_lossy(&data[16..]).into_owned(),
    })
}

/// Parse `count` consecutive descriptors of `size` bytes each.
pub fn parse_namestr_records(data: &[u8], count: usize, size: usize) -> Result<Vec<Variable>> {
    check_namestr_len(size)?;
    let required = count.saturating_mul(size);
    if data.len() < required {
        return Err(XptError::insufficient(
            Section::VariableDirectory,
            data.len(),
            required,
        ));
    }
    data.chunks_exact(size)
        .take(count)
        .map(parse_namestr)
        .collect()
}

/// Blank fill between the last descriptor and the OBS header.
///
/// Always between 1 and 80 bytes: a directory that ends exactly on a record
/// boundary is still followed by one full blank record.
#[must_use]
pub fn directory_padding(count: usize, size: usize) -> usize {
    RECORD_LEN - (count.wrapping_mul(size) % RECORD_LEN)
}

/// Read a big-endian u16 from data.
fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}
