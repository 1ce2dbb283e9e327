//! Configuration file model.
//!
//! Loaded from the `--config` path (or `FOLIO_CONFIG`), else `./folio.toml`
//! when present, else built-in defaults. Every section is optional.
//!
//! ```toml
//! [content]
//! dir = "content"
//! extension = "md"
//!
//! [output]
//! dir = "public"
//!
//! [parser]
//! decoder = "yaml"
//! trim_body = false
//!
//! [policy]
//! missing_header = "skip"
//! require_fields = false
//!
//! [http]
//! base_url = "https://example.org"
//! timeout_secs = 30
//! concurrency = 8
//!
//! [[collections]]
//! name = "calendar"
//! output = "calendar.json"
//! ```

use std::path::{Path, PathBuf};

use folio_collect::CollectionPolicy;
use folio_content::ParserOptions;
use folio_core::{expand_tilde, Error, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Where documents are read from.
    pub content: ContentConfig,
    /// Where artifacts are written.
    pub output: OutputConfig,
    /// Header decoding options.
    pub parser: ParserOptions,
    /// Collection membership rules.
    pub policy: CollectionPolicy,
    /// Settings for `fetch`.
    pub http: HttpConfig,
    /// Collections built by `generate`.
    pub collections: Vec<CollectionEntry>,
}

/// `[content]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Root directory; each collection is a subdirectory.
    pub dir: String,
    /// Document extension, without the dot.
    pub extension: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".to_string(),
            extension: "md".to_string(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the JSON artifacts.
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "public".to_string(),
        }
    }
}

/// `[http]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Site serving `/content/{collection}/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Documents fetched at once.
    pub concurrency: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
            concurrency: 8,
        }
    }
}

/// One `[[collections]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    /// Collection (subdirectory) name.
    pub name: String,
    /// Artifact file name inside the output directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl CollectionEntry {
    /// Entry with the default artifact name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: None,
        }
    }

    /// Artifact file name: `output`, or `{name}.json`.
    pub fn output_file(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.json", self.name))
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content: ContentConfig::default(),
            output: OutputConfig::default(),
            parser: ParserOptions::default(),
            policy: CollectionPolicy::default(),
            http: HttpConfig::default(),
            collections: vec![
                CollectionEntry {
                    name: "calendar".to_string(),
                    output: Some("calendar.json".to_string()),
                },
                CollectionEntry {
                    name: "galleries".to_string(),
                    output: Some("galleries.json".to_string()),
                },
            ],
        }
    }
}

impl FolioConfig {
    /// Path the config would be read from.
    pub fn resolve_config_path(config_path: Option<&str>) -> PathBuf {
        match config_path {
            Some(path) => expand_tilde(path),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, a missing `./folio.toml`
    /// yields the defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_config_path(config_path);
        if config_path.is_none() && !path.exists() {
            log::debug!("No {DEFAULT_CONFIG_FILE} found; using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Content root with `~` expanded.
    pub fn content_root(&self) -> PathBuf {
        expand_tilde(&self.content.dir)
    }

    /// Output directory with `~` expanded.
    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output.dir)
    }

    /// Configured entry for `name`, or one with the default artifact name.
    pub fn collection(&self, name: &str) -> CollectionEntry {
        self.collections
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .unwrap_or_else(|| CollectionEntry::new(name))
    }
}
