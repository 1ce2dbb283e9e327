//! Runtime client for collections published on a web server.

use folio_content::{FrontmatterParser, ParsedDocument, ParserOptions};
use folio_core::Result;

use crate::loader::CollectionLoader;
use crate::source::HttpSource;

/// Collection holding dated events.
pub const CALENDAR: &str = "calendar";

/// Collection holding image galleries.
pub const GALLERIES: &str = "galleries";

/// Loads parsed collections from a site at runtime.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> folio_core::Result<()> {
/// use folio_collect::ContentClient;
///
/// let client = ContentClient::new("https://example.org")?;
/// for event in client.load_calendar().await {
///     println!("{:?}", event.fields.get_str("title"));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ContentClient {
    loader: CollectionLoader,
}

impl ContentClient {
    /// Create a client for `base_url`.
    ///
    /// Headers are decoded as YAML and bodies are trimmed.
    pub fn new(base_url: &str) -> Result<Self> {
        let source = HttpSource::new(base_url)?;
        let parser = FrontmatterParser::new(ParserOptions {
            trim_body: true,
            ..ParserOptions::default()
        });
        Ok(Self::with_loader(
            CollectionLoader::new(source).with_parser(parser),
        ))
    }

    /// Create a client around a configured loader.
    pub fn with_loader(loader: CollectionLoader) -> Self {
        Self { loader }
    }

    /// Load any collection by name.
    pub async fn load_collection(&self, name: &str) -> Vec<ParsedDocument> {
        self.loader.load(name).await
    }

    /// Load the `calendar` collection.
    pub async fn load_calendar(&self) -> Vec<ParsedDocument> {
        self.load_collection(CALENDAR).await
    }

    /// Load the `galleries` collection.
    pub async fn load_galleries(&self) -> Vec<ParsedDocument> {
        self.load_collection(GALLERIES).await
    }
}
