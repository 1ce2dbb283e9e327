//! Folio Core: shared error type and file utilities.
//!
//! This crate provides the foundational pieces used across all Folio crates.
//! It has no internal Folio dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: File and path utilities

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::files::{find_files_with_extension, read_file};
pub use util::paths::{ensure_parent_dir, expand_tilde};
