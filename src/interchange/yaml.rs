//! YAML format support.
//!
//! A version is a YAML scalar string node holding its canonical form:
//!
//! ```yaml
//! 1.18.0-trusty-amd64
//! ```

use super::{CodecError, VersionFormat};

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl VersionFormat for Yaml {
    /// YAML document text.
    type Repr = String;

    fn name(&self) -> &'static str {
        "YAML"
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn encode_canonical(&self, canonical: &str) -> Result<String, CodecError> {
        serde_yaml::to_string(canonical)
            .map_err(|e| CodecError::yaml(format!("YAML write error: {e}")))
    }

    fn decode_canonical(&self, repr: &String) -> Result<String, CodecError> {
        serde_yaml::from_str::<String>(repr)
            .map_err(|e| CodecError::yaml(format!("YAML parse error: {e}")))
    }
}
