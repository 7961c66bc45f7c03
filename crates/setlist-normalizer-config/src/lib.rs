use log::debug;
use serde::{Deserialize, Serialize};
use setlist_normalizer_engine::PartialParseOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How parse results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered tracks with section headers.
    #[default]
    Text,
    /// The parse result as JSON.
    Json,
}

/// Default parse options from the `[parse]` table. Unset keys keep the
/// engine defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_non_songs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_encore_markers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

impl From<ParseDefaults> for PartialParseOptions {
    fn from(defaults: ParseDefaults) -> Self {
        PartialParseOptions {
            exclude_non_songs: defaults.exclude_non_songs,
            keep_encore_markers: defaults.keep_encore_markers,
            ignore_case: defaults.ignore_case,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub parse: ParseDefaults,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = Self::expand_path(config_path.as_ref());
        if !config_path.exists() {
            debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        debug!("loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = Self::expand_path(config_path.as_ref());
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/setlist-normalizer");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Parse options this config contributes, to be layered under CLI flags.
    pub fn parse_options(&self) -> PartialParseOptions {
        self.parse.into()
    }

    /// Expands `~` and environment variables; falls back to the path as given.
    fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => path.to_path_buf(),
        }
    }
}
