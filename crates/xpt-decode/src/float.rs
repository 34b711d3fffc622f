//! IBM mainframe to IEEE 754 floating-point conversion.
//!
//! XPT numerics are stored as IBM System/370 hexadecimal floats:
//!
//! | Bits  | Field    | Notes                             |
//! |-------|----------|-----------------------------------|
//! | 63    | sign     | same position as IEEE             |
//! | 56-62 | exponent | base 16, excess 64                |
//! | 0-55  | mantissa | fraction, no implicit leading one |

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const EXPONENT_MASK: u64 = 0x7f00_0000_0000_0000;
const MANTISSA_MASK: u64 = 0x00ff_ffff_ffff_ffff;
const LEADING_DIGIT_MASK: u64 = 0x00f0_0000_0000_0000;
const IEEE_IMPLICIT_BIT: u64 = 0x0010_0000_0000_0000;

/// Width of an IBM double in bytes.
pub const IBM_DOUBLE_LEN: usize = 8;

/// Convert an 8-byte IBM float to an IEEE f64.
///
/// Zero mantissas decode to a zero carrying the IBM sign bit. The 7-bit
/// IBM exponent always lands inside the IEEE normal range, so the result
/// is finite for every input.
#[must_use]
pub fn ibm_to_ieee(bytes: [u8; IBM_DOUBLE_LEN]) -> f64 {
    let bits = u64::from_be_bytes(bytes);

    let sign = bits & SIGN_MASK;
    let mut exponent = ((bits & EXPONENT_MASK) >> 56) as i64;
    let mut mantissa = bits & MANTISSA_MASK;

    if mantissa == 0 {
        return if sign == 0 { 0.0 } else { -0.0 };
    }

    // Unnormalized: pull the first non-zero hex digit to the top.
    while mantissa & LEADING_DIGIT_MASK == 0 {
        mantissa <<= 4;
        exponent -= 1;
    }

    let shift = normalization_shift(mantissa);
    mantissa >>= shift;
    mantissa &= !IEEE_IMPLICIT_BIT;

    // Excess 64 minus one more for the IEEE implicit bit, base 16 to base 2.
    let ieee_exponent = (exponent - 65) * 4 + i64::from(shift) + 1023;

    f64::from_bits(sign | ((ieee_exponent as u64) << 52) | mantissa)
}

/// Convert a numeric field of any width to f64.
///
/// SAS allows numerics of 2 to 8 bytes; shorter fields are the high-order
/// bytes of an 8-byte IBM double and are zero-extended. Bytes past the
/// eighth are ignored.
#[must_use]
pub fn decode_ibm(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; IBM_DOUBLE_LEN];
    let len = bytes.len().min(IBM_DOUBLE_LEN);
    buf[..len].copy_from_slice(&bytes[..len]);
    ibm_to_ieee(buf)
}

/// Right shift that leaves the leading mantissa bit at IEEE bit 52.
fn normalization_shift(mantissa: u64) -> u32 {
    if mantissa & 0x0080_0000_0000_0000 != 0 {
        3
    } else if mantissa & 0x0040_0000_0000_0000 != 0 {
        2
    } else if mantissa & 0x0020_0000_0000_0000 != 0 {
        1
    } else {
        0
    }
}

/// Render a decoded numeric with a fixed number of decimal places.
#[must_use]
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}
