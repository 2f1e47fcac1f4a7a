//! Parsing of bare `major.minor` or `major` strings.

use crate::error::VersionError;

/// Minor value returned when the input has no minor component.
pub const UNSPECIFIED_MINOR: i32 = -1;

/// Parse `"major.minor"` or `"major"` into integer components.
///
/// A missing minor is reported as [`UNSPECIFIED_MINOR`]. Each segment must
/// be a non-empty run of ASCII digits, optionally preceded by one `+`, that
/// fits an `i32`; three or more segments are always rejected.
///
/// ```
/// use version::{parse_major_minor, UNSPECIFIED_MINOR};
///
/// assert_eq!(parse_major_minor("2.7").unwrap(), (2, 7));
/// assert_eq!(parse_major_minor("2").unwrap(), (2, UNSPECIFIED_MINOR));
/// assert!(parse_major_minor("2.7.1").is_err());
/// ```
pub fn parse_major_minor(input: &str) -> Result<(i32, i32), VersionError> {
    let parts: Vec<&str> = input.split('.').collect();
    let (major, minor) = match parts.as_slice() {
        [major] => (*major, None),
        [major, minor] => (*major, Some(*minor)),
        _ => return Err(reject("major.minor version number", input)),
    };

    let major = parse_segment(major).ok_or_else(|| reject("major version number", input))?;
    let minor = match minor {
        Some(minor) => parse_segment(minor).ok_or_else(|| reject("minor version number", input))?,
        None => UNSPECIFIED_MINOR,
    };
    Ok((major, minor))
}

/// A single leading `+` is allowed; `-` never is.
fn parse_segment(segment: &str) -> Option<i32> {
    let digits = segment.strip_prefix('+').unwrap_or(segment);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn reject(kind: &'static str, input: &str) -> VersionError {
    tracing::trace!(input, kind, "rejected major.minor");
    VersionError::invalid_major_minor(kind, input)
}
