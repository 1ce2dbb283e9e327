//! Collection loading and JSON artifact output.
//!
//! This crate wraps the parsing core with the I/O it needs:
//!
//! - [`source`]: where document text comes from (directory or HTTP listing)
//! - [`loader`]: per-collection loading with per-document failure recovery
//! - [`output`]: pretty-printed JSON artifacts
//! - [`client`]: [`ContentClient`], a runtime service over an HTTP source
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> folio_core::Result<()> {
//! use std::path::Path;
//! use folio_collect::{generate, CollectionLoader, DirectorySource};
//!
//! let loader = CollectionLoader::new(DirectorySource::new("content"));
//! let count = generate(&loader, "calendar", Path::new("public/calendar.json")).await?;
//! println!("{count} events");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod loader;
pub mod output;
pub mod source;

pub use client::{ContentClient, CALENDAR, GALLERIES};
pub use loader::{CollectionLoader, CollectionPolicy, LoadFailure, LoadStats, MissingHeader};
pub use output::{generate, render_collection, write_collection};
pub use source::{DirectorySource, DocumentSource, HttpSource};
