//! Path helpers: tilde expansion and output-location preparation.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a tilde are returned unchanged.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::expand_tilde;
///
/// assert_eq!(expand_tilde("public/data"), PathBuf::from("public/data"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Make sure the directory that will contain `path` exists.
///
/// Creates every missing ancestor. A path with no parent (or an empty one,
/// such as a bare file name) needs nothing created.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io_with_path(e, parent))?;
            log::debug!("Ensured output directory {}", parent.display());
            Ok(())
        }
        _ => Ok(()),
    }
}
