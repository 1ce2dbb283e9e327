//! Header block decoders.
//!
//! A header block is the text between the two `---` delimiter lines. Three
//! interchangeable strategies turn it into a [`FieldRecord`]:
//!
//! - [`YamlDecoder`]: full YAML via `serde_yaml`
//! - [`JsonDecoder`]: a JSON object via `serde_json`
//! - [`LineDecoder`]: the restricted `key: value` / `- item` syntax, no library
//!
//! All three satisfy the same contract through [`HeaderDecoder::decode`]:
//! they never fail, and a block that cannot be decoded yields an empty record
//! after a warning is logged.

use std::fmt;
use std::str::FromStr;

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::record::FieldRecord;

pub mod json;
pub mod lines;
pub mod yaml;

pub use json::JsonDecoder;
pub use lines::LineDecoder;
pub use yaml::YamlDecoder;

/// Strategy for turning a header block into fields.
pub trait HeaderDecoder: Send + Sync {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Decode a header block, reporting failure.
    fn try_decode(&self, block: &str) -> Result<FieldRecord>;

    /// Decode a header block, falling back to an empty record on failure.
    fn decode(&self, block: &str) -> FieldRecord {
        match self.try_decode(block) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Failed to decode {} header: {e}", self.name());
                FieldRecord::new()
            }
        }
    }
}

/// Which [`HeaderDecoder`] a parser uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoderKind {
    /// [`YamlDecoder`]
    #[default]
    Yaml,
    /// [`JsonDecoder`]
    Json,
    /// [`LineDecoder`]
    Lines,
}

impl DecoderKind {
    /// Build the decoder for this kind.
    pub fn build(self) -> Box<dyn HeaderDecoder> {
        match self {
            DecoderKind::Yaml => Box::new(YamlDecoder),
            DecoderKind::Json => Box::new(JsonDecoder),
            DecoderKind::Lines => Box::new(LineDecoder),
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            DecoderKind::Yaml => "yaml",
            DecoderKind::Json => "json",
            DecoderKind::Lines => "lines",
        }
    }
}

impl fmt::Display for DecoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecoderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DecoderKind::Yaml),
            "json" => Ok(DecoderKind::Json),
            "lines" | "line" | "simple" => Ok(DecoderKind::Lines),
            other => Err(Error::config(format!(
                "Unknown decoder '{other}' (expected yaml, json, or lines)"
            ))),
        }
    }
}
