//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async document discovery and reading
//! - [`paths`]: Tilde expansion and output-location preparation

pub mod files;
pub mod paths;
