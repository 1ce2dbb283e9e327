//! JSON artifacts for front-end consumption.

use std::path::Path;

use folio_content::ParsedDocument;
use folio_core::{ensure_parent_dir, Error, Result};

use crate::loader::CollectionLoader;

/// Render records as a pretty-printed JSON array (two-space indent).
pub fn render_collection(records: &[ParsedDocument]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path`, creating the parent directory if needed.
pub async fn write_collection(path: &Path, records: &[ParsedDocument]) -> Result<()> {
    let json = render_collection(records)?;
    ensure_parent_dir(path).await?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Load `collection` and write it to `output`. Returns the record count.
///
/// Document-level failures are absorbed by the loader; only a failure to
/// write the artifact is an error.
pub async fn generate(loader: &CollectionLoader, collection: &str, output: &Path) -> Result<usize> {
    let records = loader.load(collection).await;
    write_collection(output, &records).await?;
    log::info!(
        "Generated {} with {} items from {collection}",
        output.display(),
        records.len()
    );
    Ok(records.len())
}
