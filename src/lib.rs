//! # version-base
//!
//! Version value types: parsing, ordering and canonical rendering.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON, YAML and document store adapters (feature-gated)
//!   ↓
//! binary      → Binary: number + series + arch
//!   ↓
//! number      → Number: major.minor[-tag]patch[.build], total order
//!   ↓
//! grammar     → Anchored patterns and component decoding
//!   ↓
//! error       → VersionError
//! ```
//!
//! `major_minor` stands alone and parses bare `major.minor` strings.
//!
//! ## Example
//!
//! ```
//! use version::{Binary, Number};
//!
//! let release = Number::parse("1.2.0").unwrap();
//! let beta = Number::parse("1.2-beta1").unwrap();
//! assert!(release > beta);
//!
//! let b: Binary = "1.18.0-trusty-amd64".parse().unwrap();
//! assert_eq!(b.number, Number::new(1, 18, 0));
//! assert_eq!(b.to_string(), "1.18.0-trusty-amd64");
//! ```

// ============================================================================
// MODULES (dependency order: error → grammar → number → binary → interchange)
// ============================================================================

/// Parse errors
pub mod error;

/// Anchored patterns shared by Number and Binary
mod grammar;

/// Version numbers
pub mod number;

/// Binary versions
pub mod binary;

/// Bare major.minor parsing
pub mod major_minor;

/// Boundary adapters: JSON, YAML, document store
#[cfg(feature = "interchange")]
pub mod interchange;

pub use binary::Binary;
pub use error::VersionError;
pub use major_minor::{UNSPECIFIED_MINOR, parse_major_minor};
pub use number::Number;
