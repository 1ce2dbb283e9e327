//! Local directory source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::{find_files_with_extension, read_file, Error, Result};

use super::{DocumentSource, DEFAULT_EXTENSION};

/// Reads collections from `{root}/{collection}/`.
///
/// Only files directly inside the collection directory with the configured
/// extension are listed, sorted by name.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Create a source rooted at `root` reading `.md` files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different document extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Root content directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one collection.
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }
}

#[async_trait]
impl DocumentSource for DirectorySource {
    async fn list(&self, collection: &str) -> Result<Vec<String>> {
        let dir = self.collection_dir(collection);
        let files = find_files_with_extension(&dir, &self.extension).await?;

        Ok(files
            .iter()
            .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
            .map(String::from)
            .collect())
    }

    async fn read(&self, collection: &str, name: &str) -> Result<String> {
        if name.contains(['/', '\\']) || name == ".." {
            return Err(Error::operation(format!(
                "Invalid document name '{name}' in collection {collection}"
            )));
        }
        read_file(&self.collection_dir(collection).join(name)).await
    }

    fn name(&self) -> &str {
        "directory"
    }
}
