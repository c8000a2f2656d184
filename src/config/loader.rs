//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the client
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;
use url::Url;

use crate::error::{ClientError, ClientResult};

use super::types::ClientConfig;

/// Loads, validates and provides access to the client configuration.
///
/// # Example
///
/// ```no_run
/// use backoffice_client::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/client.yaml")?;
/// println!("API at {}", loader.config().api.base_url);
/// # Ok::<(), backoffice_client::error::ClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ClientConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses `api.base_url` (`ConfigParseError`)
    /// - A value fails validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> ClientResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ClientError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            base_url = %loader.config.api.base_url,
            "Loaded client configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use backoffice_client::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("api:\n  base_url: \"http://pos.local/api/\"\n")?;
    /// assert_eq!(loader.config().notifications.display_ms, 5000);
    /// # Ok::<(), backoffice_client::error::ClientError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> ClientResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> ClientResult<Self> {
        let config: ClientConfig =
            serde_yaml::from_str(content).map_err(|e| ClientError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &ClientConfig) -> ClientResult<()> {
        Url::parse(&config.api.base_url).map_err(|e| ClientError::InvalidConfig {
            field: "api.base_url".to_string(),
            message: e.to_string(),
        })?;

        if config.api.timeout_ms == 0 {
            return Err(ClientError::InvalidConfig {
                field: "api.timeout_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ClientConfig {
        self.config
    }
}
