//! Value cleaning for frontmatter fields.
//!
//! [`clean`] strips one layer of matching quotes and makes image paths
//! root-relative, so the front-end can use them directly as `src` values:
//!
//! ```rust
//! use folio_content::normalize::clean;
//!
//! assert_eq!(clean("\"a.png\""), "/a.png");
//! assert_eq!(clean("'notes'"), "notes");
//! assert_eq!(clean("/img/x.jpg"), "/img/x.jpg");
//! assert_eq!(clean("b.JPG"), "/b.JPG");
//! ```

use crate::record::{FieldRecord, FieldValue};

/// File extensions treated as images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "avif", "svg"];

/// Scalar fields holding a single image path.
pub const IMAGE_FIELDS: &[&str] = &["image", "featured_image"];

/// List field holding image paths.
pub const GALLERY_FIELD: &str = "gallery";

/// Clean a single raw value.
///
/// 1. Empty input yields an empty string.
/// 2. One layer of matching `'` or `"` quotes around the whole value is removed.
/// 3. Image paths (see [`IMAGE_EXTENSIONS`]) get a leading `/` if missing.
pub fn clean(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let unquoted = strip_quotes(value);
    if is_image_path(unquoted) && !unquoted.starts_with('/') {
        format!("/{unquoted}")
    } else {
        unquoted.to_string()
    }
}

/// [`clean`] for an absent value.
pub fn clean_opt(value: Option<&str>) -> String {
    value.map(clean).unwrap_or_default()
}

/// Clean every element of a list. Order and length are preserved.
pub fn clean_list<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| clean(v.as_ref())).collect()
}

/// Remove one layer of matching quotes wrapping the whole string.
pub fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' || first == b'\'') && first == last {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Returns `true` if the value ends in a known image extension.
pub fn is_image_path(value: &str) -> bool {
    value
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Apply [`clean`] to the image-bearing fields of a record.
///
/// `image` and `featured_image` are cleaned when scalar; `gallery` is cleaned
/// element-wise when it is a list. Fields of any other shape are untouched.
pub fn normalize_image_fields(record: &mut FieldRecord) {
    for key in IMAGE_FIELDS {
        if let Some(FieldValue::Scalar(value)) = record.get_mut(key) {
            *value = clean(value);
        }
    }

    if let Some(FieldValue::List(items)) = record.get_mut(GALLERY_FIELD) {
        *items = clean_list(items.as_slice());
    }
}
