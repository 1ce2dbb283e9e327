//! Async document discovery and reading.
//!
//! A collection is a single flat directory; discovery does not recurse.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// List regular files directly inside `dir` whose name ends in `.{extension}`.
///
/// Results are sorted by file name so that collection output is stable
/// across platforms. A missing directory is reported as [`Error::NotFound`].
///
/// # Example
///
/// ```no_run
/// # async fn run() -> folio_core::Result<()> {
/// use std::path::Path;
/// use folio_core::find_files_with_extension;
///
/// let files = find_files_with_extension(Path::new("content/calendar"), "md").await?;
/// for path in files {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !tokio::fs::try_exists(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        return Err(Error::not_found(format!("directory {}", dir.display())));
    }

    let suffix = format!(".{extension}");
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        if !file_type.is_file() {
            continue;
        }

        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(&suffix));
        if matches {
            files.push(path);
        } else {
            log::trace!("Skipping {}: not a .{extension} file", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Read a whole file as UTF-8 text.
pub async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}
