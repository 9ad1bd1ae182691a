use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::error::{Error, InputError};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EcbProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub ecb: Option<EcbProviderConfig>,
}

/// Optional application configuration.
///
/// A missing config file means defaults: the public ECB endpoint and the
/// system temporary directory for the feed cache.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    pub cache_dir: Option<String>,
}

impl AppConfig {
    /// Loads the configuration for this run.
    ///
    /// An explicitly given path must exist and parse. The default path is
    /// consulted only when the file is present; a file the user wrote but
    /// we cannot read is an input error.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, Error> {
        let result = match path {
            Some(path) => Self::load_from_path(path),
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::load_from_path(&path),
                _ => Ok(Self::default()),
            },
        };
        result.map_err(|e| Error::Input(InputError::Config(e)))
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "fxc").context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Feed endpoint base URL, without the document path.
    pub fn feed_base_url(&self) -> &str {
        self.providers
            .ecb
            .as_ref()
            .map_or(crate::providers::ecb::DEFAULT_BASE_URL, |p| &p.base_url)
    }

    /// Directory holding the day-keyed cache files.
    pub fn cache_dir(&self) -> PathBuf {
        match &self.cache_dir {
            Some(dir) => PathBuf::from(dir),
            None => std::env::temp_dir(),
        }
    }
}
