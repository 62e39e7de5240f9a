//! Configuration management for tray-popup.
//!
//! Handles loading and saving the TOML configuration file from the platform
//! config directory, with atomic write operations.

use crate::{
    AppError, AppResult,
    config::{DEFAULT_THEME, PopupConfig, TrayConfig},
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tray icon settings.
    #[serde(default)]
    pub tray: TrayConfig,
    /// Popup window settings.
    #[serde(default)]
    pub popup: PopupConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    ///
    /// A missing theme is NOT rejected here. The tray controller validates
    /// it when the tray is created, which is where the failure is reported.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config = Self::parse(&contents)?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            Self::create_default()
        }
    }

    /// Parse configuration from TOML text.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Save configuration to the platform config directory.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;
        self.write_to(&config_path)
    }

    /// Write the TOML next to `path` and rename it into place, so readers
    /// never see a half-written file.
    #[track_caller]
    pub(crate) fn write_to(&self, path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let staged = path.with_extension("toml.tmp");
        fs::write(&staged, contents)?;
        fs::rename(&staged, path)?;

        info!(config_path = ?path, "Configuration saved");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "tray-popup", "Tray-Popup").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default() -> AppResult<Self> {
        let config = Config {
            tray: TrayConfig {
                theme: Some(DEFAULT_THEME.to_string()),
                locale: None,
            },
            popup: PopupConfig::default(),
        };

        if let Err(e) = config.save() {
            // The defaults are still usable for this run.
            warn!(error = ?e, "Failed to write default config");
        }

        Ok(config)
    }
}
