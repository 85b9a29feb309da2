use crate::error::{BookstoreError, Result};
use crate::store::fs::DEFAULT_STORE_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "TL";

/// User configuration, read from `config.json` in the platform config directory.
/// The tool never writes it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookstoreConfig {
    /// Store file used when `--store` is not given
    #[serde(default)]
    pub store_file: Option<PathBuf>,

    /// Label printed after prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for BookstoreConfig {
    fn default() -> Self {
        Self {
            store_file: None,
            currency: default_currency(),
        }
    }
}

impl BookstoreConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(BookstoreError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            BookstoreError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Store file to use: an explicit override wins, then the configured file,
    /// then `Books.json` in the working directory.
    pub fn resolve_store_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.store_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }
}

/// Default location of the config file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "bookstore", "bookstore")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
