//! Version numbers of the form `major.minor.patch` or `major.minor-tagpatch`.
//!
//! Either form may carry a trailing `.build`:
//!
//! ```text
//! 1.2.3        release
//! 1.2-beta3    pre-release tagged "beta"
//! 1.2.3.4      release, build 4
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::error::VersionError;
use crate::grammar;

/// A version number.
///
/// The zero value (all fields default) means "no version" and orders
/// below every other release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Number {
    pub major: u32,
    pub minor: u32,
    /// Pre-release tag; empty for a release, otherwise ASCII word characters.
    pub tag: SmolStr,
    pub patch: u32,
    /// Build number; 0 means absent and is not rendered.
    pub build: u32,
}

impl Number {
    /// The "no version" sentinel.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A release version with no tag and no build.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            ..Self::default()
        }
    }

    /// A pre-release version carrying `tag`.
    ///
    /// The caller must keep `tag` empty or made of ASCII letters, digits and
    /// `_`; anything else renders a string [`Number::parse`] rejects. Debug
    /// builds assert this.
    pub fn tagged(major: u32, minor: u32, tag: impl Into<SmolStr>, patch: u32) -> Self {
        let tag = tag.into();
        debug_assert!(
            tag.is_empty() || grammar::is_tag(&tag),
            "invalid version tag {tag:?}"
        );
        Self {
            major,
            minor,
            tag,
            patch,
            build: 0,
        }
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = build;
        self
    }

    /// True for the "no version" sentinel.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// True when the version carries no pre-release tag.
    pub fn is_release(&self) -> bool {
        self.tag.is_empty()
    }

    /// Parse a version number in canonical form.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        grammar::match_number(input).ok_or_else(|| {
            tracing::trace!(input, "rejected version number");
            VersionError::invalid_number(input)
        })
    }

    /// Parse a compiled-in version literal.
    ///
    /// # Panics
    /// If `literal` is not a valid version number. Use [`Number::parse`]
    /// for anything read at runtime.
    #[track_caller]
    pub fn literal(literal: &'static str) -> Self {
        match Self::parse(literal) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }

    /// Compare returning -1, 0 or 1 as `self` is less than, equal to, or
    /// greater than `other`.
    pub fn compare(&self, other: &Self) -> i32 {
        self.cmp(other) as i32
    }
}

/// Release tags sort after every pre-release tag; pre-release tags sort
/// by byte order.
fn compare_tags(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then_with(|| compare_tags(&self.tag, &other.tag))
            .then(self.patch.cmp(&other.patch))
            .then(self.build.cmp(&other.build))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_empty() {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        } else {
            write!(f, "{}.{}-{}{}", self.major, self.minor, self.tag, self.patch)?;
        }
        if self.build > 0 {
            write!(f, ".{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Number {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
