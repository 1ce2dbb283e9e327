//! Frontmatter extraction, header decoding, and value normalization.
//!
//! This crate is the pure core of Folio. It performs no I/O: callers hand it
//! the raw text of one document and get back a structured record.
//!
//! # Modules
//!
//! - [`frontmatter`]: header/body splitting and [`FrontmatterParser`]
//! - [`decode`]: the [`HeaderDecoder`] strategies (YAML, JSON, line-oriented)
//! - [`normalize`]: quote stripping and root-relative image paths
//! - [`record`]: [`FieldValue`] and the ordered [`FieldRecord`]
//! - [`document`]: the published [`ParsedDocument`]
//!
//! # Example
//!
//! ```rust
//! use folio_content::{DecoderKind, FrontmatterParser, ParserOptions};
//!
//! let parser = FrontmatterParser::new(ParserOptions {
//!     decoder: DecoderKind::Lines,
//!     trim_body: true,
//! });
//!
//! let text = "---\ntitle: Hello\ngallery:\n- \"a.png\"\n- b.jpg\n---\n\nWelcome!\n";
//! let doc = parser.parse_document(text, "hello.md").unwrap();
//!
//! assert_eq!(doc.fields.get_str("title"), Some("Hello"));
//! assert_eq!(doc.body, "Welcome!");
//! assert_eq!(
//!     serde_json::to_string(&doc).unwrap(),
//!     r#"{"title":"Hello","gallery":["/a.png","/b.jpg"],"body":"Welcome!","filename":"hello.md"}"#
//! );
//! ```

pub mod decode;
pub mod document;
pub mod frontmatter;
pub mod normalize;
pub mod record;

// Re-export commonly used types
pub use decode::{DecoderKind, HeaderDecoder, JsonDecoder, LineDecoder, YamlDecoder};
pub use document::{ParsedDocument, BODY_KEY, FILENAME_KEY};
pub use frontmatter::{
    split_frontmatter, FrontmatterParser, HeaderSplit, ParsedFrontmatter, ParserOptions,
};
pub use normalize::{clean, clean_list, normalize_image_fields};
pub use record::{FieldRecord, FieldValue};
