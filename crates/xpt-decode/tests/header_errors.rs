//! Failure modes of the header and directory state machine.
//!
//! Fixtures are spelled out as literal 80-byte records so the byte offsets
//! of every field are visible.

use std::io::Cursor;

use xpt_decode::{Marker, Section, XptError, XptReader};

const LIB_HEADER: &str =
    "HEADER RECORD*******LIBRARY HEADER RECORD!!!!!!!000000000000000000000000000000  ";
const SAS_HEADER: &str =
    "SAS                                                                             ";
const MODIFIED_HEADER: &str =
    " 21JAN08:13:32:41                                                               ";
const MEM_HEADER: &str =
    "HEADER RECORD*******MEMBER  HEADER RECORD!!!!!!!000000000000000001600000000140  ";
const DSCRPTR_HEADER: &str =
    "HEADER RECORD*******DSCRPTR HEADER RECORD!!!!!!!                                ";
const DATASET_HEADER: &str =
    "        AE                                                                      ";
const NAMESTR_HEADER: &str =
    "HEADER RECORD*******NAMESTR HEADER RECORD!!!!!!!000000001200000000000000000000  ";
const OBS_HEADER: &str =
    "HEADER RECORD*******OBS     HEADER RECORD!!!!!!!000000000000000000000000000000  ";

/// 12 descriptors of 140 bytes end on a record boundary, so a full blank
/// record of padding follows them.
const DIRECTORY_AND_PADDING: usize = 12 * 140 + 80;

fn header_with(replace: usize, record: &str) -> String {
    let mut records = [
        LIB_HEADER,
        SAS_HEADER,
        MODIFIED_HEADER,
        MEM_HEADER,
        DSCRPTR_HEADER,
        DATASET_HEADER,
        MODIFIED_HEADER,
        NAMESTR_HEADER,
    ];
    records[replace] = record;
    records.concat()
}

fn valid_header() -> String {
    header_with(0, LIB_HEADER)
}

fn parse(data: impl Into<Vec<u8>>) -> Result<XptReader<Cursor<Vec<u8>>>, XptError> {
    XptReader::new(Cursor::new(data.into()))
}

fn assert_marker_error(err: XptError, marker: Marker, actual: &str) {
    match err {
        XptError::MalformedMarker {
            expected,
            actual: seen,
        } => {
            assert_eq!(expected, marker.literal());
            assert_eq!(seen, actual.as_bytes());
        }
        other => panic!("expected {marker} mismatch, got {other:?}"),
    }
}

#[test]
fn test_fixture_records_are_80_bytes() {
    for record in [
        LIB_HEADER,
        SAS_HEADER,
        MODIFIED_HEADER,
        MEM_HEADER,
        DSCRPTR_HEADER,
        DATASET_HEADER,
        NAMESTR_HEADER,
        OBS_HEADER,
    ] {
        assert_eq!(record.len(), 80, "{record:?}");
    }
}

#[test]
fn test_short_stream() {
    let err = parse("Test").err().expect("short stream must fail");
    assert!(matches!(
        err,
        XptError::InsufficientData {
            section: Section::Header,
            available: 4,
            required: 640,
        }
    ));
    assert_eq!(err.to_string(), "header records: 4 of 640 bytes available");
}

#[test]
fn test_invalid_library_header() {
    let bad = LIB_HEADER.replace('H', "P");
    let err = parse(header_with(0, &bad)).err().unwrap();
    assert_marker_error(err, Marker::Library, &bad);
}

#[test]
fn test_invalid_sas_header() {
    let bad = SAS_HEADER.replace('S', "B");
    let err = parse(header_with(1, &bad)).err().unwrap();
    assert_marker_error(err, Marker::SasIdentification, &bad);
}

#[test]
fn test_invalid_member_header() {
    let bad = MEM_HEADER.replace('H', "B");
    let err = parse(header_with(3, &bad)).err().unwrap();
    assert_marker_error(err, Marker::Member, &bad);
}

#[test]
fn test_invalid_descriptor_header() {
    let bad = DSCRPTR_HEADER.replace('H', "B");
    let err = parse(header_with(4, &bad)).err().unwrap();
    assert_marker_error(err, Marker::Descriptor, &bad);
}

#[test]
fn test_invalid_namestr_header() {
    let bad = NAMESTR_HEADER.replace('H', "B");
    let err = parse(header_with(7, &bad)).err().unwrap();
    assert_marker_error(err, Marker::Namestr, &bad);
}

#[test]
fn test_first_mismatch_wins() {
    let bad_member = MEM_HEADER.replace('H', "B");
    let bad_namestr = NAMESTR_HEADER.replace('H', "B");
    let mut data = header_with(3, &bad_member);
    data.replace_range(7 * 80.., &bad_namestr);
    let err = parse(data).err().unwrap();
    assert_marker_error(err, Marker::Member, &bad_member);
}

#[test]
fn test_non_numeric_namestr_length() {
    let mut bad = MEM_HEADER.to_string();
    bad.replace_range(74..78, "01X0");
    let err = parse(header_with(3, &bad)).err().unwrap();
    assert!(matches!(
        err,
        XptError::FieldFormat { field: "NAMESTR length", ref value } if value == "01X0"
    ));
}

#[test]
fn test_non_numeric_variable_count() {
    let mut bad = NAMESTR_HEADER.to_string();
    bad.replace_range(54..58, "00X2");
    let err = parse(header_with(7, &bad)).err().unwrap();
    assert!(matches!(
        err,
        XptError::FieldFormat {
            field: "variable count",
            ..
        }
    ));
}

#[test]
fn test_missing_variable_records() {
    let err = parse(valid_header()).err().unwrap();
    assert!(matches!(
        err,
        XptError::InsufficientData {
            section: Section::VariableDirectory,
            available: 0,
            required: 1680,
        }
    ));
}

#[test]
fn test_partial_variable_records() {
    let data = valid_header() + &" ".repeat(1000);
    let err = parse(data).err().unwrap();
    assert!(matches!(
        err,
        XptError::InsufficientData {
            available: 1000,
            required: 1680,
            ..
        }
    ));
}

#[test]
fn test_truncated_padding() {
    let data = valid_header() + &" ".repeat(12 * 140 + 10);
    let err = parse(data).err().unwrap();
    assert!(matches!(
        err,
        XptError::Truncation {
            section: Section::Padding,
            expected: 80,
            actual: 10,
        }
    ));
}

#[test]
fn test_truncated_observation_header() {
    let data = valid_header() + &" ".repeat(DIRECTORY_AND_PADDING) + &OBS_HEADER[..20];
    let err = parse(data).err().unwrap();
    assert!(matches!(
        err,
        XptError::Truncation {
            section: Section::ObservationHeader,
            expected: 80,
            actual: 20,
        }
    ));
}

#[test]
fn test_invalid_observation_header() {
    let bad = OBS_HEADER.replace('H', "B");
    let data = valid_header() + &" ".repeat(DIRECTORY_AND_PADDING) + &bad;
    let err = parse(data).err().unwrap();
    assert_marker_error(err, Marker::Observation, &bad);
}

#[test]
fn test_descriptor_too_short_for_position() {
    let mut bad = MEM_HEADER.to_string();
    bad.replace_range(74..78, "0080");
    let data = header_with(3, &bad) + &" ".repeat(12 * 80 + 80) + OBS_HEADER;
    let err = parse(data).err().unwrap();
    assert!(matches!(
        err,
        XptError::DescriptorTooShort {
            size: 80,
            minimum: 88,
        }
    ));
}

#[test]
fn test_valid_header() {
    let data = valid_header() + &" ".repeat(DIRECTORY_AND_PADDING) + OBS_HEADER;
    let mut reader = parse(data).expect("valid header");

    let header = reader.header();
    assert_eq!(header.variable_count, 12);
    assert_eq!(header.variable_record_size, 140);
    assert_eq!(header.dataset_name, "AE");
    assert_eq!(header.modified, "21JAN08:13:32:41");
    assert!(header.modified_datetime().is_some());

    assert_eq!(reader.directory().len(), 12);
    assert!(reader.next_record().unwrap().is_none());
}
