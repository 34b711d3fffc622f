//! Builders for synthetic XPT byte streams.

#![allow(dead_code)]

use xpt_decode::Marker;

pub const RECORD_LEN: usize = 80;

/// IBM encodings of a few reference values.
pub const IBM_ONE: [u8; 8] = [0x41, 0x10, 0, 0, 0, 0, 0, 0];
pub const IBM_35: [u8; 8] = [0x42, 0x23, 0, 0, 0, 0, 0, 0];
pub const IBM_84: [u8; 8] = [0x42, 0x54, 0, 0, 0, 0, 0, 0];
pub const IBM_118_625: [u8; 8] = [0x42, 0x76, 0xa0, 0, 0, 0, 0, 0];
pub const IBM_MINUS_2_5: [u8; 8] = [0xc1, 0x28, 0, 0, 0, 0, 0, 0];

/// A marker record as SAS writes it: literal, zero fill, two blanks.
pub fn marker_record(marker: Marker) -> Vec<u8> {
    let mut record = vec![b' '; RECORD_LEN];
    record[48..78].fill(b'0');
    let literal = marker.literal().as_bytes();
    record[..literal.len()].copy_from_slice(literal);
    record
}

/// A blank record with `text` placed at each offset.
pub fn text_record(fields: &[(usize, &str)]) -> Vec<u8> {
    let mut record = vec![b' '; RECORD_LEN];
    for (offset, text) in fields {
        record[*offset..*offset + text.len()].copy_from_slice(text.as_bytes());
    }
    record
}

/// The eight header records with the given member fields.
pub fn header_records(dataset: &str, namestr_len: &str, var_count: &str) -> Vec<u8> {
    let mut member = marker_record(Marker::Member);
    member[64..68].copy_from_slice(b"0160");
    member[74..78].copy_from_slice(namestr_len.as_bytes());

    let mut namestr = marker_record(Marker::Namestr);
    namestr[54..58].copy_from_slice(var_count.as_bytes());

    [
        marker_record(Marker::Library),
        text_record(&[
            (0, "SAS"),
            (8, "SAS"),
            (16, "SASLIB"),
            (24, "9.4"),
            (32, "X64_10PR"),
            (64, "21JAN08:13:32:41"),
        ]),
        text_record(&[(1, "21JAN08:13:32:41")]),
        member,
        marker_record(Marker::Descriptor),
        text_record(&[(0, "SAS"), (8, dataset), (16, "SASDATA"), (24, "9.4")]),
        text_record(&[(1, "21JAN08:13:32:41")]),
        namestr,
    ]
    .concat()
}

/// A column to lay out in a synthetic dataset.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub numeric: bool,
    pub length: u16,
    pub label: &'static str,
}

impl Column {
    pub fn numeric(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            numeric: true,
            length: 8,
            label,
        }
    }

    pub fn character(name: &'static str, length: u16, label: &'static str) -> Self {
        Self {
            name,
            numeric: false,
            length,
            label,
        }
    }
}

/// One NAMESTR descriptor of `size` bytes.
pub fn namestr(column: &Column, number: u16, position: u16, size: usize) -> Vec<u8> {
    let mut buf = vec![0u8; size];
    let ntype: u16 = if column.numeric { 1 } else { 2 };
    buf[0..2].copy_from_slice(&ntype.to_be_bytes());
    buf[4..6].copy_from_slice(&column.length.to_be_bytes());
    buf[6..8].copy_from_slice(&number.to_be_bytes());
    buf[8..16].fill(b' ');
    buf[8..8 + column.name.len()].copy_from_slice(column.name.as_bytes());
    buf[16..56].fill(b' ');
    buf[16..16 + column.label.len()].copy_from_slice(column.label.as_bytes());
    buf[86..88].copy_from_slice(&position.to_be_bytes());
    buf
}

/// Header, directory, padding and OBS header for `columns`, laid out back to back.
pub fn dataset_prefix(dataset: &str, columns: &[Column], size: usize) -> Vec<u8> {
    let mut data = header_records(
        dataset,
        &format!("{size:04}"),
        &format!("{:04}", columns.len()),
    );
    let mut position = 0u16;
    for (i, column) in columns.iter().enumerate() {
        data.extend(namestr(column, i as u16 + 1, position, size));
        position += column.length;
    }
    let padding = RECORD_LEN - (columns.len() * size) % RECORD_LEN;
    data.extend(std::iter::repeat_n(b' ', padding));
    data.extend(marker_record(Marker::Observation));
    data
}

/// A complete stream: prefix followed by the given raw rows.
pub fn build_xpt(dataset: &str, columns: &[Column], rows: &[Vec<u8>]) -> Vec<u8> {
    let mut data = dataset_prefix(dataset, columns, 140);
    for row in rows {
        data.extend_from_slice(row);
    }
    data
}

/// Space-pad `text` to `len` bytes.
pub fn padded(text: &str, len: usize) -> Vec<u8> {
    let mut field = text.as_bytes().to_vec();
    field.resize(len, b' ');
    field
}

/// Exact IBM encoding of an integer with magnitude below 16^13.
pub fn ibm_from_i64(value: i64) -> [u8; 8] {
    if value == 0 {
        return [0; 8];
    }
    let magnitude = value.unsigned_abs();
    let mut digits = 0u32;
    while digits < 14 && magnitude >> (4 * digits) != 0 {
        digits += 1;
    }
    let mantissa = magnitude << (4 * (14 - digits));
    let sign = if value < 0 { 0x80u64 } else { 0 };
    let bits = ((sign | (64 + u64::from(digits))) << 56) | mantissa;
    bits.to_be_bytes()
}
