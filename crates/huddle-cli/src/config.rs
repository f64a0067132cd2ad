// Configuration loading (huddle.toml) and environment overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use huddle_draw::DrawConfig;
use huddle_group::{GroupingConfig, NamingConfig};

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "huddle.toml";

/// Environment variable holding the naming service API key.
const API_KEY_ENV: &str = "GEMINI_API_KEY";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// huddle.toml
// ---------------------------------------------------------------------------

/// Everything the CLI reads from `huddle.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HuddleConfig {
    pub draw: DrawConfig,
    pub grouping: GroupingConfig,
    pub naming: NamingConfig,
}

impl HuddleConfig {
    /// Grouping settings with the top-level `[naming]` table folded in.
    pub fn grouping_config(&self) -> GroupingConfig {
        self.grouping.clone().with_naming(self.naming.clone())
    }
}

/// Load configuration from `path`, or from `./huddle.toml` if it exists.
///
/// An explicit path must exist. The API key falls back to `GEMINI_API_KEY`
/// when the file does not set one.
pub fn load(path: Option<&Path>) -> Result<HuddleConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_file(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                parse_file(default)?
            } else {
                HuddleConfig::default()
            }
        }
    };

    if config.naming.api_key.is_none() {
        config.naming.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
    }
    Ok(config)
}

fn parse_file(path: &Path) -> Result<HuddleConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_str(text: &str) -> Result<HuddleConfig, toml::de::Error> {
    toml::from_str(text)
}
