//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_content::DecoderKind;

use crate::config::CONFIG_ENV;

/// Folio - build JSON collections from markdown frontmatter
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build collection artifacts from the content directory
    Generate {
        /// Collections to build (default: all configured)
        names: Vec<String>,
    },

    /// Parse one document and print its record as JSON
    Parse {
        /// Document to parse
        file: PathBuf,

        /// Header decoder (yaml, json, lines)
        #[arg(long)]
        decoder: Option<DecoderKind>,

        /// Trim whitespace around the body
        #[arg(long)]
        trim_body: bool,
    },

    /// Load a collection from a web server and print it as JSON
    Fetch {
        /// Collection name
        collection: String,

        /// Site URL (default: `http.base_url` from the config)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the config file path
    Path,

    /// Print a value by dotted key (e.g. `parser.decoder`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default config file
    Init {
        /// Target file (default: ./folio.toml)
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
