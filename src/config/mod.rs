//! Configuration loading for the payroll service.
//!
//! This module loads service settings (bind address, dataset location and
//! logging filter) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use hr_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Listening on {}", config.settings().server.bind_address);
//! ```

mod loader;
mod types;

pub(crate) use loader::load_yaml;
pub use loader::{ConfigLoader, SETTINGS_FILE};
pub use types::{
    DEFAULT_BIND_ADDRESS, DEFAULT_DATA_DIRECTORY, DEFAULT_LOG_FILTER, DataSettings,
    LoggingSettings, ServerSettings, Settings,
};
