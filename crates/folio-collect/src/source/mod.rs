//! Document sources.
//!
//! A [`DocumentSource`] enumerates the documents of a named collection and
//! hands back their raw text. The parsing core never touches the filesystem
//! or the network itself.
//!
//! # Sources
//!
//! - [`DirectorySource`]: `{root}/{collection}/*.{ext}` on local disk
//! - [`HttpSource`]: scrapes `{base_url}/content/{collection}/` for links

use async_trait::async_trait;
use folio_core::Result;

pub mod directory;
pub mod http;

pub use directory::DirectorySource;
pub use http::{extract_links, HttpSource};

/// Default document extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// Supplies raw document text for a collection.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Names of the documents in `collection`, in the order they should be
    /// published.
    async fn list(&self, collection: &str) -> Result<Vec<String>>;

    /// Raw text of one document.
    async fn read(&self, collection: &str, name: &str) -> Result<String>;

    /// Source name for diagnostics.
    fn name(&self) -> &str;
}
