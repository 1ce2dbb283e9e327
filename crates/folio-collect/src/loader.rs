//! Collection loading.
//!
//! [`CollectionLoader`] lists a collection through a [`DocumentSource`],
//! fetches documents concurrently, parses each one, and returns the records
//! in listing order. A single bad document never fails the collection:
//!
//! - listing failure: warning, empty collection
//! - read failure: warning, document skipped
//! - no header: skipped or kept as body-only, per [`CollectionPolicy`]
//! - undecodable header: kept with empty fields (see [`folio_content::HeaderDecoder`])

use std::sync::Arc;

use folio_content::{FrontmatterParser, ParsedDocument};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

use crate::source::DocumentSource;

/// Default number of documents fetched at once.
pub const DEFAULT_CONCURRENCY: usize = 8;

// ============================================================================
// Policy
// ============================================================================

/// What to do with a document that has no header block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingHeader {
    /// Leave it out of the collection.
    #[default]
    Skip,
    /// Publish it with no fields and the whole text as body.
    Keep,
}

/// Which documents make it into a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionPolicy {
    /// Handling of documents without a header block.
    pub missing_header: MissingHeader,
    /// Drop documents whose header produced no fields.
    pub require_fields: bool,
}

impl CollectionPolicy {
    /// Only documents with a header that decoded to at least one field.
    pub fn strict() -> Self {
        Self {
            missing_header: MissingHeader::Skip,
            require_fields: true,
        }
    }

    /// Every readable document, with or without a header.
    pub fn lenient() -> Self {
        Self {
            missing_header: MissingHeader::Keep,
            require_fields: false,
        }
    }
}

// ============================================================================
// Stats
// ============================================================================

/// A document that could not be read.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    /// Document name.
    pub document: String,
    /// Error message.
    pub message: String,
}

/// Statistics from loading one collection.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Documents named by the listing.
    pub listed: usize,
    /// Documents included in the result.
    pub loaded: usize,
    /// Documents dropped for lacking a header block.
    pub skipped_no_header: usize,
    /// Documents dropped for having no fields.
    pub skipped_no_fields: usize,
    /// Documents that could not be read.
    pub failures: Vec<LoadFailure>,
    /// Listing error, if the collection could not be enumerated.
    pub listing_error: Option<String>,
}

// ============================================================================
// CollectionLoader
// ============================================================================

/// Loads and parses every document of a collection.
///
/// Cheap to clone; the source and parser are shared.
#[derive(Clone)]
pub struct CollectionLoader {
    source: Arc<dyn DocumentSource>,
    parser: Arc<FrontmatterParser>,
    policy: CollectionPolicy,
    concurrency: usize,
}

impl CollectionLoader {
    /// Create a loader with the default parser and policy.
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Create a loader around an already shared source.
    pub fn from_shared(source: Arc<dyn DocumentSource>) -> Self {
        Self {
            source,
            parser: Arc::new(FrontmatterParser::default()),
            policy: CollectionPolicy::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Use a specific parser.
    pub fn with_parser(mut self, parser: FrontmatterParser) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Use a specific inclusion policy.
    pub fn with_policy(mut self, policy: CollectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set how many documents are fetched at once (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// The inclusion policy in use.
    pub fn policy(&self) -> CollectionPolicy {
        self.policy
    }

    /// The parser in use.
    pub fn parser(&self) -> &FrontmatterParser {
        &self.parser
    }

    /// Load a collection, returning only the records.
    pub async fn load(&self, collection: &str) -> Vec<ParsedDocument> {
        self.load_with_stats(collection).await.0
    }

    /// Load a collection, returning the records and what happened to the rest.
    pub async fn load_with_stats(&self, collection: &str) -> (Vec<ParsedDocument>, LoadStats) {
        let mut stats = LoadStats::default();

        let names = match self.source.list(collection).await {
            Ok(names) => names,
            Err(e) => {
                log::warn!(
                    "Unable to list collection '{collection}' from {} source: {e}",
                    self.source.name()
                );
                stats.listing_error = Some(e.to_string());
                return (Vec::new(), stats);
            }
        };
        stats.listed = names.len();

        let fetched: Vec<_> = stream::iter(names)
            .map(|name| async move {
                let result = self.source.read(collection, &name).await;
                (name, result)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut records = Vec::with_capacity(fetched.len());
        for (name, result) in fetched {
            let text = match result {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Skipping {collection}/{name}: {e}");
                    stats.failures.push(LoadFailure {
                        document: name,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            if let Some(doc) = self.admit(collection, &name, &text, &mut stats) {
                records.push(doc);
            }
        }

        stats.loaded = records.len();
        log::debug!(
            "Loaded {}/{} documents from collection '{collection}'",
            stats.loaded,
            stats.listed
        );
        (records, stats)
    }

    /// Parse one document and apply the policy.
    fn admit(
        &self,
        collection: &str,
        name: &str,
        text: &str,
        stats: &mut LoadStats,
    ) -> Option<ParsedDocument> {
        let parsed = match self.parser.parse(text) {
            Some(parsed) => parsed,
            None => match self.policy.missing_header {
                MissingHeader::Skip => {
                    log::debug!("Skipping {collection}/{name}: no frontmatter");
                    stats.skipped_no_header += 1;
                    return None;
                }
                MissingHeader::Keep => self.parser.parse_or_body(text),
            },
        };

        if self.policy.require_fields && parsed.fields.is_empty() {
            log::debug!("Skipping {collection}/{name}: no header fields");
            stats.skipped_no_fields += 1;
            return None;
        }

        Some(parsed.into_document().with_filename(name))
    }
}

impl std::fmt::Debug for CollectionLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionLoader")
            .field("source", &self.source.name())
            .field("parser", &self.parser)
            .field("policy", &self.policy)
            .field("concurrency", &self.concurrency)
            .finish()
    }
}
