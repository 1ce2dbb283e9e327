//! HTTP source: collection listings scraped from a directory index page.
//!
//! The server is expected to publish documents under
//! `{base_url}/content/{collection}/` and to serve an HTML listing at that
//! URL whose `href` attributes name the documents.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::{Error, Result};
use regex::Regex;

use super::{DocumentSource, DEFAULT_EXTENSION};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches collections from a web server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    extension: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a source for `base_url` with a request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a source around an existing client.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            client,
        }
    }

    /// Use a different document extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a collection's listing page.
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/content/{collection}/", self.base_url)
    }

    /// URL of one document.
    pub fn document_url(&self, collection: &str, name: &str) -> String {
        format!("{}/content/{collection}/{name}", self.base_url)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(
                format!("GET {url}: {status}"),
                status.as_u16(),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| Error::http(format!("GET {url}: failed to read body: {e}")))
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn list(&self, collection: &str) -> Result<Vec<String>> {
        let url = self.collection_url(collection);
        let page = self.get_text(&url).await?;
        let links = extract_links(&page, &self.extension);
        log::debug!("Found {} documents at {url}", links.len());
        Ok(links)
    }

    async fn read(&self, collection: &str, name: &str) -> Result<String> {
        self.get_text(&self.document_url(collection, name)).await
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Extract document names from `href="….{extension}"` attributes.
///
/// Only the last path segment of each link is kept, so both relative and
/// absolute links resolve against the collection URL. Duplicates are dropped;
/// page order is otherwise preserved.
///
/// ```rust
/// use folio_collect::source::extract_links;
///
/// let html = r#"<a href="a.md">a</a> <a href="/content/calendar/b.md">b</a> <a href="x.txt">x</a>"#;
/// assert_eq!(extract_links(html, "md"), vec!["a.md", "b.md"]);
/// ```
pub fn extract_links(html: &str, extension: &str) -> Vec<String> {
    let pattern = format!(r#"href="([^"]+\.{})""#, regex::escape(extension));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            log::warn!("Cannot build link pattern for extension '{extension}': {e}");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    re.captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .map(|link| link.rsplit('/').next().unwrap_or(link))
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(String::from)
        .collect()
}
