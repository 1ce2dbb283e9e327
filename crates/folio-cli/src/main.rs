//! Folio CLI
//!
//! Builds JSON collections from folders of markdown documents.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use folio_cli::commands::{run_fetch, run_generate, run_parse};
use folio_cli::config_handlers::handle_config_command;
use folio_cli::{Args, Command, FolioConfig};
use folio_content::ParserOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = args.config.as_deref();

    match args.command {
        Command::Config { action } => {
            handle_config_command(config_path, action).await?;
        }
        Command::Generate { names } => {
            let config = FolioConfig::load(config_path)?;
            let summaries = run_generate(&config, &names).await?;
            for summary in &summaries {
                println!(
                    "{}: {} items -> {}",
                    summary.collection,
                    summary.items,
                    summary.path.display()
                );
            }
            tracing::info!("Built {} collections", summaries.len());
        }
        Command::Parse {
            file,
            decoder,
            trim_body,
        } => {
            let config = FolioConfig::load(config_path)?;
            let options = ParserOptions {
                decoder: decoder.unwrap_or(config.parser.decoder),
                trim_body: trim_body || config.parser.trim_body,
            };
            match run_parse(&file, options).await? {
                Some(doc) => println!("{}", serde_json::to_string_pretty(&doc)?),
                None => println!("{}: no frontmatter", file.display()),
            }
        }
        Command::Fetch {
            collection,
            base_url,
        } => {
            let config = FolioConfig::load(config_path)?;
            let records = run_fetch(&config, &collection, base_url.as_deref())
                .await
                .with_context(|| format!("Failed to fetch collection '{collection}'"))?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}
