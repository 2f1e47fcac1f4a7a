//! JSON format support.
//!
//! A version is a JSON string literal holding its canonical form:
//!
//! ```json
//! "1.2-beta3"
//! ```

use super::{CodecError, VersionFormat};

/// JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl VersionFormat for Json {
    /// JSON text.
    type Repr = String;

    fn name(&self) -> &'static str {
        "JSON"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn encode_canonical(&self, canonical: &str) -> Result<String, CodecError> {
        serde_json::to_string(canonical)
            .map_err(|e| CodecError::json(format!("JSON write error: {e}")))
    }

    fn decode_canonical(&self, repr: &String) -> Result<String, CodecError> {
        serde_json::from_str::<String>(repr)
            .map_err(|e| CodecError::json(format!("JSON parse error: {e}")))
    }
}
