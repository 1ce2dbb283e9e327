//! The flat record published for each document.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::record::{FieldRecord, FieldValue};

/// Reserved key holding the document body.
pub const BODY_KEY: &str = "body";

/// Reserved key holding the source document name.
pub const FILENAME_KEY: &str = "filename";

/// Header fields plus the reserved `body` and `filename` entries.
///
/// Serializes to a single flat JSON object: header fields in document order,
/// then `body`, then `filename` (when set). A header field that collides with
/// a reserved key is shadowed by the reserved value.
///
/// ```rust
/// use folio_content::{FieldRecord, ParsedDocument};
///
/// let mut fields = FieldRecord::new();
/// fields.insert("title", "Hello");
///
/// let doc = ParsedDocument::new(fields, "Body text").with_filename("hello.md");
/// let json = serde_json::to_string(&doc).unwrap();
/// assert_eq!(json, r#"{"title":"Hello","body":"Body text","filename":"hello.md"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Decoded and normalized header fields.
    pub fields: FieldRecord,
    /// Text after the header block.
    pub body: String,
    /// Name of the source document, attached by the collection loader.
    pub filename: Option<String>,
}

impl ParsedDocument {
    /// Create a document without a filename.
    pub fn new(fields: FieldRecord, body: impl Into<String>) -> Self {
        Self {
            fields,
            body: body.into(),
            filename: None,
        }
    }

    /// Attach the source document name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Returns `true` if the header produced at least one field.
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Look up a header field. Reserved keys are not visible here.
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    fn is_shadowed(&self, key: &str) -> bool {
        key == BODY_KEY || (key == FILENAME_KEY && self.filename.is_some())
    }
}

impl Serialize for ParsedDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.fields.iter() {
            if self.is_shadowed(key) {
                log::debug!("Header field '{key}' is shadowed by the reserved key");
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(BODY_KEY, &self.body)?;
        if let Some(filename) = &self.filename {
            map.serialize_entry(FILENAME_KEY, filename)?;
        }
        map.end()
    }
}
