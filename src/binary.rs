//! Binary versions: a version number pinned to a series and architecture.
//!
//! Canonical form is `{number}-{series}-{arch}`, e.g. `1.18.0-trusty-amd64`.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::error::VersionError;
use crate::grammar;
use crate::number::Number;

/// A version number built for a particular series and architecture.
///
/// Series and arch are opaque identifiers; the grammar only requires them
/// to be non-empty and free of `-`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Binary {
    pub number: Number,
    pub series: SmolStr,
    pub arch: SmolStr,
}

impl Binary {
    pub fn new(number: Number, series: impl Into<SmolStr>, arch: impl Into<SmolStr>) -> Self {
        Self {
            number,
            series: series.into(),
            arch: arch.into(),
        }
    }

    /// Parse a binary version in canonical form.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        match grammar::match_binary(input) {
            Some((number, series, arch)) => Ok(Self::new(number, series, arch)),
            None => {
                tracing::trace!(input, "rejected binary version");
                Err(VersionError::invalid_binary(input))
            }
        }
    }

    /// Parse a compiled-in binary version literal.
    ///
    /// # Panics
    /// If `literal` is malformed. Never use this on runtime input.
    #[track_caller]
    pub fn literal(literal: &'static str) -> Self {
        match Self::parse(literal) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.number, self.series, self.arch)
    }
}

impl FromStr for Binary {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Binary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Binary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
