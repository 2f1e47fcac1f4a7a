//! Version interchange formats.
//!
//! Versions cross every boundary as their canonical string. Each format
//! only decides how that string is wrapped:
//!
//! - **JSON** - a JSON string literal
//! - **YAML** - a YAML scalar string node
//! - **Document** - a string field in a JSON-shaped document store
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │   JSON   │   │   YAML   │   │ Document │
//! └────┬─────┘   └────┬─────┘   └────┬─────┘
//!      │              │              │
//!      ▼              ▼              ▼
//! ┌─────────────────────────────────────────┐
//! │          VersionFormat trait            │
//! │  - encode_canonical(&str) -> Repr       │
//! │  - decode_canonical(&Repr) -> String    │
//! └─────────────────────────────────────────┘
//!      │
//!      ▼
//! ┌─────────────────────────────────────────┐
//! │   Number / Binary  (Display, FromStr)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use version::Number;
//! use version::interchange::{Json, VersionFormat};
//!
//! let v = Number::parse("1.2.3").unwrap();
//! let text = Json.encode(&v).unwrap();
//! assert_eq!(text, "\"1.2.3\"");
//! assert_eq!(Json.decode::<Number>(&text).unwrap(), v);
//! ```

mod document;
mod error;
mod format;
mod json;
mod yaml;

pub use document::Document;
pub use error::CodecError;
pub use format::{CanonicalVersion, VersionFormat};
pub use json::Json;
pub use yaml::Yaml;

/// Format names [`detect_format_from_mime`] can return.
pub fn supported_formats() -> &'static [&'static str] {
    &["JSON", "YAML", "Document"]
}

/// Extra MIME types accepted alongside each format's own `mime_type()`.
const JSON_ALIASES: &[&str] = &["text/json"];
const YAML_ALIASES: &[&str] = &["application/yaml", "text/yaml"];

/// Detect format from MIME type, returning the format name.
pub fn detect_format_from_mime(mime: &str) -> Option<&'static str> {
    if mime == Json.mime_type() || JSON_ALIASES.contains(&mime) {
        Some(Json.name())
    } else if mime == Yaml.mime_type() || YAML_ALIASES.contains(&mime) {
        Some(Yaml.name())
    } else if mime == Document.mime_type() {
        Some(Document.name())
    } else {
        None
    }
}
