//! TOML-based configuration persistence.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\TeamSplit\config.toml`
//! - Linux:    `~/.config/teamsplit/config.toml`
//! - macOS:    `~/Library/Application Support/TeamSplit/config.toml`
//!
//! Every field carries a serde default so the app works on first run (before
//! a config file exists) and keeps working when an older file is missing
//! newer fields. The `[storage]` section is where the persisted key
//! namespaces and the data-file location come from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::StorageKeys;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: GeneralConfig,
    #[serde(default)]
    pub storage: StorageSettings,
}

/// General application behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Schema version string – bump when breaking changes are introduced.
    #[serde(default = "default_version")]
    pub version: String,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Storage namespaces and data-file location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// Key the group-name list is persisted under.
    #[serde(default = "default_group_collection")]
    pub group_collection: String,
    /// Prefix for per-group roster keys (`"<prefix>-<group-name>"`).
    #[serde(default = "default_player_collection")]
    pub player_collection: String,
    /// Optional override for the data file; defaults to `storage.json` next
    /// to the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl StorageSettings {
    /// Derives the key convention the storage services are constructed with.
    pub fn keys(&self) -> StorageKeys {
        StorageKeys::new(&self.group_collection, &self.player_collection)
    }

    /// Resolves the data file the [`FileStore`](super::json_file::FileStore)
    /// is backed by.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] when no override is
    /// configured and the platform directory cannot be determined.
    pub fn data_file_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("storage.json")),
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_group_collection() -> String {
    "@teamsplit:groups".to_string()
}
fn default_player_collection() -> String {
    "@teamsplit:players".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            group_collection: default_group_collection(),
            player_collection: default_player_collection(),
            data_file: None,
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from disk, returning `AppConfig::default()` if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk.
///
/// Creates the config directory and file if they do not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    // Ensure directory exists before writing.
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("TeamSplit"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("teamsplit"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/TeamSplit
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("TeamSplit")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        // Fallback for unsupported platforms.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
