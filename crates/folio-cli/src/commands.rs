//! `generate`, `parse` and `fetch` command implementations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_collect::{generate, CollectionLoader, DirectorySource, HttpSource};
use folio_content::{FrontmatterParser, ParsedDocument, ParserOptions};
use folio_core::{read_file, Error, Result};

use crate::config::{CollectionEntry, FolioConfig};

/// Outcome of building one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Collection name.
    pub collection: String,
    /// Artifact written.
    pub path: PathBuf,
    /// Records in the artifact.
    pub items: usize,
}

fn directory_loader(config: &FolioConfig) -> CollectionLoader {
    let source =
        DirectorySource::new(config.content_root()).with_extension(config.content.extension.clone());
    CollectionLoader::new(source)
        .with_parser(FrontmatterParser::new(config.parser))
        .with_policy(config.policy)
        .with_concurrency(config.http.concurrency)
}

/// Build the named collections, or every configured one when `names` is empty.
pub async fn run_generate(config: &FolioConfig, names: &[String]) -> Result<Vec<GenerateSummary>> {
    let entries: Vec<CollectionEntry> = if names.is_empty() {
        config.collections.clone()
    } else {
        names.iter().map(|n| config.collection(n)).collect()
    };

    let loader = directory_loader(config);
    let output_dir = config.output_dir();
    let mut summaries = Vec::with_capacity(entries.len());

    for entry in entries {
        let path = output_dir.join(entry.output_file());
        let items = generate(&loader, &entry.name, &path).await?;
        summaries.push(GenerateSummary {
            collection: entry.name,
            path,
            items,
        });
    }

    Ok(summaries)
}

/// Parse a single file. `None` means the file has no header block.
pub async fn run_parse(path: &Path, options: ParserOptions) -> Result<Option<ParsedDocument>> {
    let text = read_file(path).await?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    Ok(FrontmatterParser::new(options).parse_document(&text, filename))
}

/// Load a collection from `base_url`, or the configured `http.base_url`.
pub async fn run_fetch(
    config: &FolioConfig,
    collection: &str,
    base_url: Option<&str>,
) -> Result<Vec<ParsedDocument>> {
    let base_url = base_url
        .or(config.http.base_url.as_deref())
        .ok_or_else(|| Error::config("No base URL: pass --base-url or set http.base_url"))?;

    let source = HttpSource::with_timeout(base_url, Duration::from_secs(config.http.timeout_secs))?
        .with_extension(config.content.extension.clone());
    let loader = CollectionLoader::new(source)
        .with_parser(FrontmatterParser::new(config.parser))
        .with_policy(config.policy)
        .with_concurrency(config.http.concurrency);

    Ok(loader.load(collection).await)
}
