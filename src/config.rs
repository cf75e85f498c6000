//! Configuration management for the contact book.
//!
//! All settings are optional and come from environment variables (a `.env`
//! file is honoured if present). The defaults keep every file in the
//! working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default primary store file.
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Default backup copy of the store file.
pub const DEFAULT_BACKUP_FILE: &str = "contacts_backup.json";

/// Default CSV export target.
pub const DEFAULT_EXPORT_FILE: &str = "contacts.csv";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Primary JSON store file
    pub contacts_file: PathBuf,

    /// Backup copy written after every save
    pub backup_file: PathBuf,

    /// Where "Export to CSV" writes
    pub export_file: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Primary store file (default: `contacts.json`)
    /// - `CONTACTS_BACKUP_FILE`: Backup file (default: `contacts_backup.json`)
    /// - `CONTACTS_EXPORT_FILE`: CSV export file (default: `contacts.csv`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; its absence is not an error
        let _ = dotenvy::dotenv();

        let contacts_file = Self::parse_env_path("CONTACTS_FILE", DEFAULT_CONTACTS_FILE)?;
        let backup_file = Self::parse_env_path("CONTACTS_BACKUP_FILE", DEFAULT_BACKUP_FILE)?;
        let export_file = Self::parse_env_path("CONTACTS_EXPORT_FILE", DEFAULT_EXPORT_FILE)?;

        if backup_file == contacts_file {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_BACKUP_FILE".to_string(),
                reason: "Must differ from CONTACTS_FILE".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            contacts_file,
            backup_file,
            export_file,
            log_level,
        })
    }

    /// Parse an environment variable as a path with a default value.
    fn parse_env_path(var_name: &str, default: &str) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val)),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
            Err(env::VarError::NotPresent) => Ok(PathBuf::from(default)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            backup_file: PathBuf::from(DEFAULT_BACKUP_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            log_level: "warn".to_string(),
        }
    }
}
