//! Anchored patterns shared by the version grammars.
//!
//! ```text
//! number:  major "." minor ("." | "-" tag) patch ["." build]
//! binary:  number "-" series "-" arch
//! ```
//!
//! Numeric groups are 1-9 ASCII digits, the tag is one or more ASCII word
//! characters, series and arch are any run of non-hyphen characters. The
//! tag group is greedy: in `1.2-beta12` the tag is `beta1` and the patch `2`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use smol_str::SmolStr;

use crate::number::Number;

/// Unanchored body of the version number pattern.
///
/// Groups: 1 major, 2 minor, 3 tag (absent after `.`), 4 patch, 5 build.
const NUMBER_BODY: &str =
    r"([0-9]{1,9})\.([0-9]{1,9})(?:\.|-([0-9A-Za-z_]+))([0-9]{1,9})(?:\.([0-9]{1,9}))?";

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{NUMBER_BODY}$")).expect("version number pattern must compile")
});

/// Groups 6 and 7 hold series and arch.
static BINARY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{NUMBER_BODY}-([^-]+)-([^-]+)$"))
        .expect("binary version pattern must compile")
});

/// Match a complete version number, or `None` if any character is left over.
pub(crate) fn match_number(input: &str) -> Option<Number> {
    NUMBER_PATTERN
        .captures(input)
        .map(|caps| decode_number(&caps))
}

/// Match a complete binary version, returning the number, series and arch.
pub(crate) fn match_binary(input: &str) -> Option<(Number, &str, &str)> {
    let caps = BINARY_PATTERN.captures(input)?;
    let series = caps.get(6)?.as_str();
    let arch = caps.get(7)?.as_str();
    Some((decode_number(&caps), series, arch))
}

/// True when `tag` is a non-empty run of the tag group's characters.
pub(crate) fn is_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn decode_number(caps: &Captures<'_>) -> Number {
    Number {
        major: atoi(&caps[1]),
        minor: atoi(&caps[2]),
        tag: caps
            .get(3)
            .map(|m| SmolStr::new(m.as_str()))
            .unwrap_or_default(),
        patch: atoi(&caps[4]),
        build: caps.get(5).map_or(0, |m| atoi(m.as_str())),
    }
}

/// Convert a group the pattern already restricted to 1-9 ASCII digits.
///
/// # Panics
/// If the group is not a valid integer, which means the pattern and this
/// decoder disagree.
fn atoi(digits: &str) -> u32 {
    digits
        .parse()
        .unwrap_or_else(|err| panic!("pattern admitted non-numeric group {digits:?}: {err}"))
}
