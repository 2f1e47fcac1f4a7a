//! Document store support.
//!
//! This adapter is a string-in/string-out stand-in for a single field of a
//! document store record. The field holds the canonical version string and
//! nothing else; it is modelled as a `serde_json::Value` because that is the
//! shape JSON document stores hand back. No store client is involved.
//!
//! The MIME type is a vendor-tree label used only to tell this adapter
//! apart in [`detect_format_from_mime`](super::detect_format_from_mime);
//! it is not a registered type.

use serde_json::Value;

use super::{CodecError, VersionFormat};

/// Document field handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Document;

impl VersionFormat for Document {
    /// The stored field value.
    type Repr = Value;

    fn name(&self) -> &'static str {
        "Document"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.document+json"
    }

    fn encode_canonical(&self, canonical: &str) -> Result<Value, CodecError> {
        Ok(Value::String(canonical.to_string()))
    }

    fn decode_canonical(&self, repr: &Value) -> Result<String, CodecError> {
        match repr {
            Value::String(s) => Ok(s.clone()),
            other => Err(CodecError::document(format!(
                "expected a version string, found {}",
                value_kind(other)
            ))),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
