use crate::error::{AddressError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("addresses.db"),
        }
    }
}

impl Config {
    /// Loads `ADDRESS_BOOK_CONFIG` (or `config.toml` when present), then applies
    /// `HOST`, `PORT` and `DATABASE_NAME` from the environment.
    pub fn load() -> Result<Self> {
        let explicit = env::var("ADDRESS_BOOK_CONFIG").ok();
        let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        let mut config = if explicit.is_some() || Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AddressError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(toml::from_str(&content)?)
    }

    /// Applies command-line flags, which win over file and environment values.
    pub fn apply_cli(
        &mut self,
        database: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
    ) {
        if let Some(database) = database {
            self.database.path = database;
        }
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| AddressError::Config(format!("PORT is not a valid port: {port}")))?;
        }
        if let Some(db) = lookup("DATABASE_NAME") {
            self.database.path = PathBuf::from(db);
        }
        Ok(())
    }
}
