//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default seed data location, relative to the working directory
pub const DEFAULT_SEED_FILE: &str = "data/reviews.csv";

/// Environment variable selecting the listening port
pub const ENV_PORT: &str = "PORT";

/// Environment variable selecting the bind address
pub const ENV_HOST: &str = "RVA_HOST";

/// Environment variable selecting the seed file
pub const ENV_SEED_FILE: &str = "RVA_SEED_FILE";

/// Contents of the optional TOML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub seed_file: Option<PathBuf>,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: PathBuf,
}

impl ServerConfig {
    /// Resolve every setting from command line, environment, TOML and defaults
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let toml_config = match cli.config_file.as_deref() {
            Some(path) => load_toml_config(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_toml_config(&path)?,
                _ => {
                    info!("No config file found, using defaults");
                    TomlConfig::default()
                }
            },
        };

        Self::resolve_with(cli, &toml_config)
    }

    /// Resolve against an already loaded TOML config
    pub fn resolve_with(cli: &CliOverrides, toml_config: &TomlConfig) -> Result<Self> {
        let port = match cli.port {
            Some(port) => port,
            None => match port_from_env()? {
                Some(port) => port,
                None => toml_config.port.unwrap_or(DEFAULT_PORT),
            },
        };

        let host = cli
            .host
            .clone()
            .or_else(|| non_empty_env(ENV_HOST))
            .or_else(|| toml_config.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let seed_file = cli
            .seed_file
            .clone()
            .or_else(|| non_empty_env(ENV_SEED_FILE).map(PathBuf::from))
            .or_else(|| toml_config.seed_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE));

        Ok(Self {
            host,
            port,
            seed_file,
        })
    }

    /// Socket address string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load a TOML config file
///
/// A missing file yields defaults with a warning; a file that exists but
/// does not parse is a configuration error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!("Config file not found: {}, using defaults", path.display());
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

    info!("Loaded config file: {}", path.display());
    Ok(config)
}

/// Platform config file location (`<config_dir>/rva/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rva").join("config.toml"))
}

fn port_from_env() -> Result<Option<u16>> {
    match non_empty_env(ENV_PORT) {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} must be a port number, got {:?}", ENV_PORT, raw))),
        None => Ok(None),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
