//! # folio-cli
//!
//! Command-line front end for Folio:
//! - `generate`: build JSON collections from a content directory
//! - `parse`: inspect how one document parses
//! - `fetch`: load a collection from a web server
//! - `config`: show, query and create the configuration file

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;

pub use cli::{Args, Command, ConfigAction};
pub use config::{CollectionEntry, FolioConfig};
