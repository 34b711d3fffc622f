//! Fixed marker records that frame an XPT file.

use std::fmt;

use crate::error::{Result, XptError};

/// Record length in bytes.
pub const RECORD_LEN: usize = 80;

/// Structural markers, in the order they appear in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// First record of the file.
    Library,
    /// The real header record must name SAS somewhere.
    SasIdentification,
    /// Opens the member (dataset) section; carries the NAMESTR size.
    Member,
    /// Opens the member descriptor.
    Descriptor,
    /// Opens the variable directory; carries the variable count.
    Namestr,
    /// Immediately precedes the observation records.
    Observation,
}

impl Marker {
    /// Every marker, in file order.
    pub const ALL: [Marker; 6] = [
        Self::Library,
        Self::SasIdentification,
        Self::Member,
        Self::Descriptor,
        Self::Namestr,
        Self::Observation,
    ];

    /// The literal text the record must carry.
    #[must_use]
    pub const fn literal(self) -> &'static str {
        match self {
            Self::Library => {
                "HEADER RECORD*******LIBRARY HEADER RECORD!!!!!!!000000000000000000000000000000"
            }
            Self::SasIdentification => "SAS",
            Self::Member => "HEADER RECORD*******MEMBER  HEADER RECORD!!!!!!!",
            Self::Descriptor => "HEADER RECORD*******DSCRPTR HEADER RECORD!!!!!!!",
            Self::Namestr => "HEADER RECORD*******NAMESTR HEADER RECORD!!!!!!!",
            Self::Observation => "HEADER RECORD*******OBS     HEADER RECORD!!!!!!!",
        }
    }

    /// Whether `record` carries this marker.
    ///
    /// Header markers must open the record; the SAS identification may
    /// appear anywhere in it.
    #[must_use]
    pub fn matches(self, record: &[u8]) -> bool {
        let literal = self.literal().as_bytes();
        match self {
            Self::SasIdentification => record
                .windows(literal.len())
                .any(|window| window == literal),
            _ => record.starts_with(literal),
        }
    }

    /// Check `record` against this marker.
    pub fn expect(self, record: &[u8]) -> Result<()> {
        if self.matches(record) {
            Ok(())
        } else {
            Err(XptError::MalformedMarker {
                expected: self.literal(),
                actual: record.to_vec(),
            })
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library => write!(f, "LIBRARY HEADER"),
            Self::SasIdentification => write!(f, "SAS IDENTIFICATION"),
            Self::Member => write!(f, "MEMBER HEADER"),
            Self::Descriptor => write!(f, "DSCRPTR HEADER"),
            Self::Namestr => write!(f, "NAMESTR HEADER"),
            Self::Observation => write!(f, "OBS HEADER"),
        }
    }
}

/// Build a marker record the way SAS writes one: literal, zero fill, two spaces.
#[cfg(test)]
pub(crate) fn build_marker_record(marker: Marker) -> [u8; RECORD_LEN] {
    let mut record = [b' '; RECORD_LEN];
    record[48..78].fill(b'0');
    let literal = marker.literal().as_bytes();
    record[..literal.len()].copy_from_slice(literal);
    record
}
