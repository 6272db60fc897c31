//! # Console Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --data-dir ./data  --memory  --persist-stock                       │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CANTEEN_DATA_DIR=/srv/canteen                                      │
//! │     CANTEEN_ADMIN_PASSWORD=...                                         │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/canteen/config.toml (Linux)                              │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     current directory, file backend, admin/admin123, emp123            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [storage]
//! backend = "file"              # file | memory
//! data_dir = "/srv/canteen"
//! employees_file = "employee_details.csv"
//! inventory_file = "inv.csv"
//! orders_file = "orders.csv"
//! persist_stock_decrement = false
//!
//! [auth]
//! admin_username = "admin"
//! admin_password = "admin123"
//! employee_password = "emp123"
//! require_registered_employee = false
//! ```

use std::path::{Path, PathBuf};

use canteen_core::StaticCredentials;
use canteen_store::{StorageBackend, StoreConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cli::Cli;

/// Configuration loading failures. These end the process at start-up.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Auth Settings
// =============================================================================

/// The `[auth]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(flatten)]
    pub credentials: StaticCredentials,

    /// Employee logins must name a registered employee (ID and name).
    #[serde(default)]
    pub require_registered_employee: bool,
}

// =============================================================================
// App Config
// =============================================================================

/// Full console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StoreConfig,

    #[serde(default)]
    pub auth: AuthSettings,
}

impl AppConfig {
    /// Resolves the configuration for a run: file, environment, flags.
    pub fn resolve(cli: &Cli) -> ConfigResult<Self> {
        let mut config = Self::load(cli.config.clone())?;
        config.apply_env_overrides();
        config.apply_cli(cli);
        config.validate()?;

        info!(
            backend = %config.storage.backend,
            data_dir = %config.storage.data_dir.display(),
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Loads the config file, or defaults if there is none.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        match config_path {
            Some(path) => Self::from_file(&path),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                Some(path) => {
                    debug!(path = %path.display(), "Config file not found, using defaults");
                    Ok(Self::default())
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Parses one TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(path = %path.display(), "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `CANTEEN_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("CANTEEN_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = PathBuf::from(dir);
        }

        if let Some(backend) = lookup("CANTEEN_BACKEND") {
            match backend.parse::<StorageBackend>() {
                Ok(parsed) => self.storage.backend = parsed,
                Err(e) => warn!(error = %e, "Ignoring CANTEEN_BACKEND"),
            }
        }

        if let Some(flag) = lookup("CANTEEN_PERSIST_STOCK") {
            match parse_flag(&flag) {
                Some(persist) => self.storage.persist_stock_decrement = persist,
                None => warn!(value = %flag, "Ignoring CANTEEN_PERSIST_STOCK"),
            }
        }

        if let Some(name) = lookup("CANTEEN_ADMIN_USERNAME") {
            self.auth.credentials.admin_username = name;
        }

        if let Some(password) = lookup("CANTEEN_ADMIN_PASSWORD") {
            self.auth.credentials.admin_password = password;
        }

        if let Some(password) = lookup("CANTEEN_EMPLOYEE_PASSWORD") {
            self.auth.credentials.employee_password = password;
        }

        if let Some(flag) = lookup("CANTEEN_REQUIRE_REGISTERED_EMPLOYEE") {
            match parse_flag(&flag) {
                Some(required) => self.auth.require_registered_employee = required,
                None => warn!(value = %flag, "Ignoring CANTEEN_REQUIRE_REGISTERED_EMPLOYEE"),
            }
        }
    }

    /// Applies command-line flags.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.data_dir {
            self.storage.data_dir = dir.clone();
        }
        if cli.memory {
            self.storage.backend = StorageBackend::Memory;
        }
        if cli.persist_stock {
            self.storage.persist_stock_decrement = true;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let empty = self.storage.empty_file_names();
        if !empty.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "empty file name for {}",
                empty.join(", ")
            )));
        }

        if self.storage.backend == StorageBackend::File
            && self.storage.data_dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid("data_dir must not be empty".into()));
        }

        if self.auth.credentials.admin_username.trim().is_empty() {
            return Err(ConfigError::Invalid("admin_username must not be empty".into()));
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "canteen", "console")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.inventory_file, "inv.csv");
        assert!(!config.storage.persist_stock_decrement);
        assert_eq!(config.auth.credentials.admin_password, "admin123");
        assert_eq!(config.auth.credentials.employee_password, "emp123");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\ndata_dir = \"/srv/canteen\"\npersist_stock_decrement = true\n\n[auth]\nadmin_password = \"s3cret\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(path)).unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/canteen"));
        assert!(config.storage.persist_stock_decrement);
        assert_eq!(config.storage.orders_file, "orders.csv");
        assert_eq!(config.auth.credentials.admin_username, "admin");
        assert_eq!(config.auth.credentials.admin_password, "s3cret");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\n").unwrap();
        assert!(matches!(
            AppConfig::load(Some(path)).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("CANTEEN_DATA_DIR", "/tmp/c"),
            ("CANTEEN_BACKEND", "memory"),
            ("CANTEEN_PERSIST_STOCK", "yes"),
            ("CANTEEN_EMPLOYEE_PASSWORD", "staff"),
            ("CANTEEN_REQUIRE_REGISTERED_EMPLOYEE", "maybe"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/c"));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.storage.persist_stock_decrement);
        assert_eq!(config.auth.credentials.employee_password, "staff");
        assert!(!config.auth.require_registered_employee);
    }

    #[test]
    fn test_cli_wins() {
        let mut config = AppConfig::default();
        config.apply_cli(&Cli {
            data_dir: Some(PathBuf::from("./elsewhere")),
            memory: true,
            persist_stock: true,
            ..Cli::default()
        });
        assert_eq!(config.storage.data_dir, PathBuf::from("./elsewhere"));
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.storage.persist_stock_decrement);
    }

    #[test]
    fn test_validate_rejects_empty_file_name() {
        let mut config = AppConfig::default();
        config.storage.inventory_file = String::new();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: empty file name for inventory_file"
        );
    }
}
