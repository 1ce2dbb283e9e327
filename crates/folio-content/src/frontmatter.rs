//! Frontmatter extraction.
//!
//! Frontmatter is a header block at the start of a document, delimited by
//! `---` lines:
//!
//! ```markdown
//! ---
//! title: Summer Fair
//! image: fair.jpg
//! gallery:
//! - stalls.png
//! - band.webp
//! ---
//!
//! The body of the document starts here.
//! ```
//!
//! # Usage
//!
//! ```rust
//! use folio_content::FrontmatterParser;
//!
//! let parser = FrontmatterParser::default();
//! let parsed = parser.parse("---\ntitle: Test\nimage: a.png\n---\nBody").unwrap();
//!
//! assert_eq!(parsed.fields.get_str("title"), Some("Test"));
//! assert_eq!(parsed.fields.get_str("image"), Some("/a.png"));
//! assert_eq!(parsed.body, "Body");
//!
//! // No header at all
//! assert!(parser.parse("# Just Markdown").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decode::{DecoderKind, HeaderDecoder};
use crate::document::ParsedDocument;
use crate::normalize::normalize_image_fields;
use crate::record::FieldRecord;

/// Delimiter line opening and closing the header block.
pub const DELIMITER: &str = "---";

/// Raw header and body slices of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSplit<'a> {
    /// Text between the delimiter lines.
    pub header: &'a str,
    /// Text after the closing delimiter line.
    pub body: &'a str,
}

/// Split a document into header block and body.
///
/// The document must start with a `---` line (after an optional BOM and
/// leading whitespace) and contain a second line that is exactly `---`
/// (trailing whitespace allowed). Returns `None` otherwise.
///
/// The body is everything after the newline ending the closing delimiter,
/// including any later `---` lines.
///
/// ```rust
/// use folio_content::frontmatter::split_frontmatter;
///
/// let split = split_frontmatter("---\na: 1\n---\nBody\n---\nMore").unwrap();
/// assert_eq!(split.header, "a: 1");
/// assert_eq!(split.body, "Body\n---\nMore");
///
/// assert!(split_frontmatter("---\na: 1\nno closing").is_none());
/// ```
pub fn split_frontmatter(content: &str) -> Option<HeaderSplit<'_>> {
    let text = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let text = text.trim_start();

    // Opening delimiter must be a complete line
    let (first, rest) = text.split_once('\n')?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let mut offset = 0;
    while offset <= rest.len() {
        let line_end = rest[offset..]
            .find('\n')
            .map(|pos| offset + pos)
            .unwrap_or(rest.len());
        let line = &rest[offset..line_end];

        if line.trim_end() == DELIMITER {
            let header = rest[..offset].trim_end_matches(['\n', '\r']);
            let body = rest.get(line_end + 1..).unwrap_or("");
            return Some(HeaderSplit { header, body });
        }

        if line_end == rest.len() {
            break;
        }
        offset = line_end + 1;
    }

    log::debug!("Frontmatter opening delimiter found but no closing delimiter");
    None
}

/// Header fields and body of a successfully split document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrontmatter {
    /// Decoded and normalized fields. May be empty.
    pub fields: FieldRecord,
    /// Body text.
    pub body: String,
}

impl ParsedFrontmatter {
    /// Turn into a publishable document without a filename.
    pub fn into_document(self) -> ParsedDocument {
        ParsedDocument::new(self.fields, self.body)
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Header decoding strategy.
    pub decoder: DecoderKind,
    /// Trim surrounding whitespace from the body.
    pub trim_body: bool,
}

/// Splits documents, decodes their header and normalizes image fields.
///
/// Holds no mutable state; one parser can be shared across threads and tasks.
pub struct FrontmatterParser {
    decoder: Box<dyn HeaderDecoder>,
    trim_body: bool,
}

impl FrontmatterParser {
    /// Create a parser from options.
    pub fn new(options: ParserOptions) -> Self {
        Self {
            decoder: options.decoder.build(),
            trim_body: options.trim_body,
        }
    }

    /// Create a parser around a custom decoder.
    pub fn with_decoder(decoder: impl HeaderDecoder + 'static) -> Self {
        Self {
            decoder: Box::new(decoder),
            trim_body: false,
        }
    }

    /// Set whether the body is whitespace-trimmed.
    pub fn trim_body(mut self, trim: bool) -> Self {
        self.trim_body = trim;
        self
    }

    /// Parse a document.
    ///
    /// Returns `None` when the document has no header block. A header that
    /// cannot be decoded still yields `Some`, with empty fields.
    pub fn parse(&self, text: &str) -> Option<ParsedFrontmatter> {
        let split = split_frontmatter(text)?;

        let mut fields = self.decoder.decode(split.header);
        normalize_image_fields(&mut fields);

        Some(ParsedFrontmatter {
            fields,
            body: self.finish_body(split.body),
        })
    }

    /// Parse a document, treating text without a header as a body-only
    /// document with no fields.
    pub fn parse_or_body(&self, text: &str) -> ParsedFrontmatter {
        self.parse(text).unwrap_or_else(|| ParsedFrontmatter {
            fields: FieldRecord::new(),
            body: self.finish_body(text),
        })
    }

    /// Parse a document and attach its filename.
    pub fn parse_document(&self, text: &str, filename: &str) -> Option<ParsedDocument> {
        self.parse(text)
            .map(|parsed| parsed.into_document().with_filename(filename))
    }

    fn finish_body(&self, body: &str) -> String {
        if self.trim_body {
            body.trim().to_string()
        } else {
            body.to_string()
        }
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl fmt::Debug for FrontmatterParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrontmatterParser")
            .field("decoder", &self.decoder.name())
            .field("trim_body", &self.trim_body)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
