//! XPT header record parsing.
//!
//! This module handles the fixed records that precede observation data:
//! - Library and member headers (dataset-level metadata)
//! - NAMESTR records (variable definitions)
//! - Marker records, including the OBS header that opens the data

pub mod datetime;
pub mod library;
pub mod marker;
pub mod namestr;

pub use datetime::parse_xpt_datetime;
pub use library::{HEADER_LEN, HEADER_RECORD_COUNT, Header, parse_header_records};
pub use marker::{Marker, RECORD_LEN};
pub use namestr::{
    MIN_NAMESTR_LEN, NAMESTR_LEN, NAMESTR_LEN_VAX, check_namestr_len, directory_padding,
    parse_namestr, parse_namestr_records,
};
