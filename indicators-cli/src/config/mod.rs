//! Configuration for input/output locations
//!
//! Values come from, in order of precedence: command-line flags, a TOML
//! config file, built-in defaults. The config file is optional; when no
//! `--config` is given, `<config_dir>/indicators-cli/config.toml` is used
//! if it exists.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default spreadsheet location
pub const DEFAULT_INPUT: &str = "indicadores_eng_azuredevops_v3.xlsx";
/// Default JSON preview location
pub const DEFAULT_PREVIEW: &str = "/tmp/indicators_preview.json";
/// Default SQL seed location
pub const DEFAULT_OUTPUT: &str =
    "supabase/migrations/20251116000000_seed_indicators_from_spreadsheet.sql";

const APP_DIR: &str = "indicators-cli";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spreadsheet to read
    pub input: PathBuf,
    /// Where `inspect` writes its JSON preview
    pub preview: PathBuf,
    /// Where `seed` writes the SQL document
    pub output: PathBuf,
    /// Rows included in the JSON preview
    pub preview_rows: usize,
    /// Rows printed in the head table
    pub head_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            preview: PathBuf::from(DEFAULT_PREVIEW),
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview_rows: 5,
            head_rows: 3,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// read when present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file does not exist: {}", path.display());
                }
                Self::from_file(path)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }
}

/// Per-user config file location (~/.config/indicators-cli/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.preview, PathBuf::from("/tmp/indicators_preview.json"));
        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.head_rows, 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            input = "planilhas/indicadores.xlsx"
            preview_rows = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.input, PathBuf::from("planilhas/indicadores.xlsx"));
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.head_rows, 3);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("preview_rows = \"many\"").is_err());
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let err = Config::load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = \"out/seed.sql\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output, PathBuf::from("out/seed.sql"));
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
    }
}
