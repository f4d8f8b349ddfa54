use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use campusnav::NetworkConfig;
use serde::Deserialize;
use tracing::info;

use crate::error::ServerError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub directory: DirectoryConfig,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub request_timeout_secs: u64,
    pub concurrency_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            request_timeout_secs: 10,
            concurrency_limit: 256,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// JSON array of building documents
    pub buildings_path: PathBuf,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            buildings_path: PathBuf::from("data/buildings.json"),
        }
    }
}

impl Config {
    /// Reads the TOML config at `path`, or defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// network tolerances are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ServerError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    std::io::Error::new(
                        e.kind(),
                        format!("Failed to read config '{}': {}", path.display(), e),
                    )
                })?;
                Self::from_toml(&text)?
            }
            None => {
                info!("No config file given, using defaults");
                Self::default()
            }
        };

        config.network.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ServerError> {
        Ok(toml::from_str(text)?)
    }
}
