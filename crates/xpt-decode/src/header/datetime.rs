//! SAS header timestamps (`ddMMMyy:hh:mm:ss`).

use chrono::NaiveDateTime;

const XPT_DATETIME_FORMAT: &str = "%d%b%y:%H:%M:%S";

/// Parse a header timestamp such as `21JAN08:13:32:41`.
///
/// Surrounding blanks are ignored. Returns `None` when the text is not a
/// valid timestamp.
#[must_use]
pub fn parse_xpt_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), XPT_DATETIME_FORMAT).ok()
}
