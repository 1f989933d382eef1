//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! settings from a YAML file, and the YAML helper shared with the dataset
//! loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::types::Settings;

/// Name of the settings file inside the configuration directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Loads and provides access to service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── settings.yaml        # Server, data and logging settings
/// └── data/
///     ├── attendance.yaml  # Attendance entries
///     └── enrollments.yaml # Benefit enrollments
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Binding to {}", loader.settings().server.bind_address);
/// println!("Reading data from {}", loader.data_directory().display());
/// # Ok::<(), hr_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
    settings: Settings,
}

impl ConfigLoader {
    /// Loads `settings.yaml` from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The settings file is missing (`ConfigNotFound`)
    /// - The settings file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let base_dir = path.as_ref().to_path_buf();
        let settings = load_yaml::<Settings>(&base_dir.join(SETTINGS_FILE))?;

        Ok(Self { base_dir, settings })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the dataset directory, resolved against the configuration
    /// directory when relative.
    pub fn data_directory(&self) -> PathBuf {
        let directory = &self.settings.data.directory;
        if directory.is_absolute() {
            directory.clone()
        } else {
            self.base_dir.join(directory)
        }
    }
}

/// Loads and parses a YAML file.
pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
