//! Common trait for version interchange formats.

use std::fmt::Display;
use std::str::FromStr;

use super::CodecError;
use crate::binary::Binary;
use crate::error::VersionError;
use crate::number::Number;

/// A version type with a single canonical string form.
///
/// Every adapter goes through `Display` to encode and `FromStr` to decode,
/// so the grammar lives in one place.
pub trait CanonicalVersion: Display + FromStr<Err = VersionError> {}

impl CanonicalVersion for Number {}
impl CanonicalVersion for Binary {}

/// Trait for version interchange formats.
///
/// Implementations only move the canonical string in and out of their
/// representation; [`encode`](Self::encode) and [`decode`](Self::decode)
/// do the rendering and parsing.
pub trait VersionFormat: Send + Sync {
    /// Encoded form of a single version value.
    type Repr;

    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Wrap a canonical version string in this format.
    fn encode_canonical(&self, canonical: &str) -> Result<Self::Repr, CodecError>;

    /// Extract the canonical version string from this format.
    fn decode_canonical(&self, repr: &Self::Repr) -> Result<String, CodecError>;

    /// Encode a version value.
    fn encode<V: CanonicalVersion>(&self, version: &V) -> Result<Self::Repr, CodecError> {
        self.encode_canonical(&version.to_string())
    }

    /// Decode a version value, surfacing both format and grammar faults.
    fn decode<V: CanonicalVersion>(&self, repr: &Self::Repr) -> Result<V, CodecError> {
        let canonical = self.decode_canonical(repr)?;
        Ok(canonical.parse::<V>()?)
    }
}
