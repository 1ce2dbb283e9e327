//! YAML header decoding.

use folio_core::{Error, Result};
use serde_yaml::Value;

use super::HeaderDecoder;
use crate::record::{FieldRecord, FieldValue};

/// Decodes the header block as a YAML mapping.
///
/// Scalars become [`FieldValue::Scalar`] (numbers and booleans in their
/// textual form, `null` as an empty string) and sequences become
/// [`FieldValue::List`]. Nested mappings have no [`FieldValue`] shape and are
/// skipped with a warning.
///
/// ```rust
/// use folio_content::decode::{HeaderDecoder, YamlDecoder};
///
/// let record = YamlDecoder.decode("title: Hello\ntags:\n  - a\n  - b");
/// assert_eq!(record.get_str("title"), Some("Hello"));
/// assert_eq!(record.get_list("tags").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

impl HeaderDecoder for YamlDecoder {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn try_decode(&self, block: &str) -> Result<FieldRecord> {
        let value: Value = serde_yaml::from_str(block)
            .map_err(|e| Error::decode(format!("invalid YAML: {e}")))?;

        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Ok(FieldRecord::new()),
            _ => return Err(Error::decode("YAML header is not a mapping")),
        };

        let mut record = FieldRecord::new();
        for (key, value) in mapping {
            let Some(key) = key_to_string(&key) else {
                log::warn!("Skipping YAML header entry with non-scalar key");
                continue;
            };
            match to_field_value(value) {
                Some(field) => {
                    record.insert(key, field);
                }
                None => log::warn!("Skipping nested mapping in header field '{key}'"),
            }
        }
        Ok(record)
    }
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn to_field_value(value: Value) -> Option<FieldValue> {
    match value {
        Value::Sequence(items) => Some(FieldValue::List(
            items.into_iter().map(scalar_text).collect(),
        )),
        Value::Mapping(_) => None,
        other => Some(FieldValue::Scalar(scalar_text(other))),
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        other => serde_json::to_string(&other).unwrap_or_default(),
    }
}
