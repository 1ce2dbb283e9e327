//! Handler functions for `folio config` commands.
//!
//! Also provides the TOML dotted-key helpers used by `config get`.

use std::path::PathBuf;

use folio_core::{ensure_parent_dir, Error, Result};

use crate::cli::ConfigAction;
use crate::config::FolioConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub async fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Init { file, force } => {
            cmd_config_init(file.as_deref(), force).await?;
            Ok(())
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = FolioConfig::resolve_config_path(config_path);
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `folio config init` to create it)");
    }
    Ok(())
}

/// Print a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = FolioConfig::load(config_path)?;
    println!("{}", config_value(&config, key)?);
    Ok(())
}

/// Look up a dotted key in the effective configuration.
pub fn config_value(config: &FolioConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Write a default configuration file.
pub async fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = FolioConfig::resolve_config_path(file);

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    ensure_parent_dir(&path).await?;
    let toml_str = FolioConfig::default().to_toml_string()?;
    tokio::fs::write(&path, toml_str)
        .await
        .map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(path)
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
///
/// Numeric segments index into arrays, so `collections.0.name` works.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.').try_fold(value, |current, part| match current {
        toml::Value::Table(table) => table.get(part),
        toml::Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_default(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, FolioConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // cmd_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/folio.toml")).is_ok());
    }

    // ------------------------------------------------------------------------
    // cmd_config_get / config_value tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_get_nested_key() {
        let dir = TempDir::new().unwrap();
        let path = write_default(&dir);
        assert!(cmd_config_get(Some(path.to_str().unwrap()), "parser.decoder").is_ok());
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let dir = TempDir::new().unwrap();
        let path = write_default(&dir);

        let result = cmd_config_get(Some(path.to_str().unwrap()), "nonexistent.key");
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_config_value_formats() {
        let config = FolioConfig::default();
        assert_eq!(config_value(&config, "content.dir").unwrap(), "content");
        assert_eq!(config_value(&config, "http.timeout_secs").unwrap(), "30");
        assert_eq!(config_value(&config, "policy.missing_header").unwrap(), "skip");
        assert_eq!(config_value(&config, "parser.trim_body").unwrap(), "false");
        assert_eq!(
            config_value(&config, "collections.1.output").unwrap(),
            "galleries.json"
        );
    }

    #[test]
    fn test_config_value_unset_optional() {
        let config = FolioConfig::default();
        assert!(config_value(&config, "http.base_url").is_err());
    }

    // ------------------------------------------------------------------------
    // cmd_config_init tests
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_cmd_config_init_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site").join("folio.toml");

        let written = cmd_config_init(Some(path.to_str().unwrap()), false)
            .await
            .unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[content]"));
        assert!(content.contains("[[collections]]"));
        assert_eq!(
            FolioConfig::from_toml_str(&content).unwrap(),
            FolioConfig::default()
        );
    }

    #[tokio::test]
    async fn test_cmd_config_init_no_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "existing").unwrap();

        let result = cmd_config_init(Some(path.to_str().unwrap()), false).await;
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_cmd_config_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "old content").unwrap();

        cmd_config_init(Some(path.to_str().unwrap()), true)
            .await
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[output]"));
    }

    // ------------------------------------------------------------------------
    // get_nested_value tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value_top_level() {
        let val: toml::Value = toml::from_str("port = 8080").unwrap();
        assert_eq!(
            get_nested_value(&val, "port"),
            Some(&toml::Value::Integer(8080))
        );
    }

    #[test]
    fn test_get_nested_value_nested() {
        let val: toml::Value = toml::from_str("[http]\nconcurrency = 3").unwrap();
        assert_eq!(
            get_nested_value(&val, "http.concurrency"),
            Some(&toml::Value::Integer(3))
        );
    }

    #[test]
    fn test_get_nested_value_array_index() {
        let val: toml::Value =
            toml::from_str("[[collections]]\nname = \"a\"\n[[collections]]\nname = \"b\"").unwrap();
        assert_eq!(
            get_nested_value(&val, "collections.1.name"),
            Some(&toml::Value::String("b".to_string()))
        );
        assert!(get_nested_value(&val, "collections.2.name").is_none());
        assert!(get_nested_value(&val, "collections.x").is_none());
    }

    #[test]
    fn test_get_nested_value_missing() {
        let val: toml::Value = toml::from_str("[http]\nconcurrency = 3").unwrap();
        assert!(get_nested_value(&val, "nonexistent").is_none());
        assert!(get_nested_value(&val, "http.concurrency.deeper").is_none());
    }

    // ------------------------------------------------------------------------
    // format_toml_value tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_format_toml_value() {
        assert_eq!(
            format_toml_value(&toml::Value::String("hello".into())),
            "hello"
        );
        assert_eq!(format_toml_value(&toml::Value::Integer(42)), "42");
        assert_eq!(format_toml_value(&toml::Value::Float(2.5)), "2.5");
        assert_eq!(format_toml_value(&toml::Value::Boolean(true)), "true");
    }
}
