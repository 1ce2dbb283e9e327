//! JSON header decoding.

use folio_core::{Error, Result};
use serde_json::Value;

use super::HeaderDecoder;
use crate::record::{FieldRecord, FieldValue};

/// Decodes the header block as a JSON object.
///
/// The block is trimmed before decoding, so a header written as
///
/// ```text
/// ---
/// { "title": "Hello", "gallery": ["a.png"] }
/// ---
/// ```
///
/// decodes to `title` and `gallery`. Value conversion follows the same rules
/// as [`YamlDecoder`](super::YamlDecoder).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl HeaderDecoder for JsonDecoder {
    fn name(&self) -> &'static str {
        "json"
    }

    fn try_decode(&self, block: &str) -> Result<FieldRecord> {
        let value: Value = serde_json::from_str(block.trim())
            .map_err(|e| Error::decode(format!("invalid JSON: {e}")))?;

        let Value::Object(object) = value else {
            return Err(Error::decode("JSON header is not an object"));
        };

        let mut record = FieldRecord::new();
        for (key, value) in object {
            match value {
                Value::Array(items) => {
                    let items = items.into_iter().map(scalar_text).collect();
                    record.insert(key, FieldValue::List(items));
                }
                Value::Object(_) => log::warn!("Skipping nested object in header field '{key}'"),
                other => {
                    record.insert(key, FieldValue::Scalar(scalar_text(other)));
                }
            }
        }
        Ok(record)
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}
