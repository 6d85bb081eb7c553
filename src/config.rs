// src/config.rs
//! Configuration file parsing for the recipe catalog
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address for the HTTP API
//! - [storage] - Which seed data a fresh catalog starts from
//! - [logging] - Default tracing filter
//!
//! Every section is optional. A missing file is not an error for the binary,
//! which falls back to [`CatalogConfig::default`].

use crate::catalog::{Catalog, Fixture};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// HTTP API bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

/// Storage configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    /// Load the built-in sample catalog on startup
    #[serde(default = "default_true")]
    pub seed: bool,

    /// Custom fixture, used instead of the built-in sample
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            seed: true,
            fixture: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// EnvFilter directive; RUST_LOG takes precedence
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

impl CatalogConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: CatalogConfig = toml::from_str(&content).map_err(|e| {
            Error::ConfigError(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.logging.filter.trim().is_empty() {
            return Err(Error::ConfigError("logging.filter must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|e| {
            Error::ConfigError(format!("Invalid server.bind address {}: {}", self.server.bind, e))
        })
    }

    /// Seed data for a fresh catalog, `None` when seeding is off
    ///
    /// An explicit fixture path wins over the `seed` flag.
    pub fn fixture(&self) -> Result<Option<Fixture>> {
        match (&self.storage.fixture, self.storage.seed) {
            (Some(path), _) => Fixture::load(path).map(Some),
            (None, true) => Fixture::builtin().map(Some),
            (None, false) => Ok(None),
        }
    }

    /// A fresh in-memory catalog set up as configured
    pub fn open_catalog(&self) -> Result<Catalog> {
        match self.fixture()? {
            Some(fixture) => Catalog::seeded(&fixture),
            None => Catalog::open_in_memory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert!(config.storage.seed);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config("[server]\nbind = \"0.0.0.0:9000\"\n");
        let config = CatalogConfig::load(file.path()).unwrap();

        assert_eq!(config.bind_addr().unwrap().port(), 9000);
        assert!(config.storage.seed);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        let file = write_config("[server]\nbind = \"not an address\"\n");
        assert!(matches!(
            CatalogConfig::load(file.path()),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_malformed_and_missing_files() {
        let file = write_config("[server\nbind = ");
        assert!(matches!(
            CatalogConfig::load(file.path()),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            CatalogConfig::load(Path::new("/nonexistent/catalog.toml")),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_seed_disabled_opens_empty_catalog() {
        let file = write_config("[storage]\nseed = false\n");
        let config = CatalogConfig::load(file.path()).unwrap();

        let catalog = config.open_catalog().unwrap();
        assert_eq!(catalog.stats().unwrap().recipes, 0);
    }

    #[test]
    fn test_custom_fixture_overrides_builtin() {
        let fixture = write_config(
            "[[ingredients]]\nid = 1\nname = \"Oats\"\n\n\
             [[recipes]]\nid = 2\nname = \"Porridge\"\ndescription = \"Warm\"\nservings = 1\n\
             ingredients = [{ ingredient = 1, amount = 80.0, unit = \"grams\" }]\n",
        );
        let mut config = CatalogConfig::default();
        config.storage.fixture = Some(fixture.path().to_path_buf());

        let catalog = config.open_catalog().unwrap();
        let stats = catalog.stats().unwrap();
        assert_eq!(stats.recipes, 1);
        assert_eq!(stats.ingredients, 1);
    }
}
