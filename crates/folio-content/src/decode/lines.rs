//! Line-oriented header decoding for the restricted frontmatter syntax.
//!
//! Supported input:
//!
//! ```text
//! title: Hello
//! image: "cover.png"
//! gallery:
//! - "a.png"
//! - b.jpg
//! ```
//!
//! Each line is one of:
//!
//! - `- item`: appended to the list opened by the most recent `key:` line,
//!   or dropped if no list is open
//! - `key: value`: a scalar; closes any open list
//! - `key:`: opens a new, empty list under `key`
//! - anything else: ignored
//!
//! Values are passed through [`clean`](crate::normalize::clean).

use folio_core::Result;

use super::HeaderDecoder;
use crate::normalize::clean;
use crate::record::{FieldRecord, FieldValue};

/// Hand-rolled decoder for flat scalars and simple block lists.
///
/// Never fails; malformed lines are skipped.
///
/// ```rust
/// use folio_content::decode::{HeaderDecoder, LineDecoder};
///
/// let record = LineDecoder.decode("title: Hello\ngallery:\n- \"a.png\"\n- b.jpg\n");
/// assert_eq!(record.get_str("title"), Some("Hello"));
/// assert_eq!(
///     record.get_list("gallery").unwrap(),
///     &["/a.png".to_string(), "/b.jpg".to_string()]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDecoder;

impl HeaderDecoder for LineDecoder {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn try_decode(&self, block: &str) -> Result<FieldRecord> {
        let mut record = FieldRecord::new();
        let mut current_list: Option<String> = None;

        for line in block.lines() {
            let trimmed = line.trim();

            if let Some(item) = trimmed.strip_prefix("- ") {
                match current_list
                    .as_deref()
                    .and_then(|key| record.get_mut(key))
                {
                    Some(FieldValue::List(items)) => items.push(clean(item.trim())),
                    _ => log::trace!("Dropping list item outside of a list: {trimmed}"),
                }
                continue;
            }

            let Some((key, rest)) = trimmed.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            // Decided on the raw text: `key: ""` is a scalar, not a list.
            let rest = rest.trim();
            if rest.is_empty() {
                record.insert(key, FieldValue::List(Vec::new()));
                current_list = Some(key.to_string());
            } else {
                current_list = None;
                record.insert(key, FieldValue::Scalar(clean(rest)));
            }
        }

        Ok(record)
    }
}
