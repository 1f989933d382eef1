//! Configuration types for the payroll service.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from `settings.yaml`. Every section is optional and falls back
//! to its default.

use serde::Deserialize;
use std::path::PathBuf;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default dataset directory, relative to the configuration directory.
pub const DEFAULT_DATA_DIRECTORY: &str = "data";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "hr_payroll=info";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on (e.g. "127.0.0.1:8080").
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

/// Location of the attendance and enrollment dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataSettings {
    /// Dataset directory. Relative paths are resolved against the
    /// configuration directory.
    #[serde(default = "default_data_directory")]
    pub directory: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            directory: default_data_directory(),
        }
    }
}

fn default_data_directory() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIRECTORY)
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Default `tracing_subscriber::EnvFilter` directive, used when
    /// `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// The complete service configuration from settings.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Dataset location.
    #[serde(default)]
    pub data: DataSettings,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}
