//! Error types for the payroll service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fault the report pipeline and its loaders can raise.

use thiserror::Error;

/// The main error type for the payroll service.
///
/// The core performs no local recovery: every variant travels unchanged to
/// the HTTP boundary, where all of them collapse into a single 400 response
/// carrying the display message.
///
/// # Example
///
/// ```
/// use hr_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An attendance or enrollment store could not be read.
    #[error("Failed to read {source_name}: {message}")]
    DataAccess {
        /// The store that raised the fault (e.g. "attendance records").
        source_name: String,
        /// The underlying fault's description.
        message: String,
    },

    /// A monetary computation exceeded the range of `Decimal`.
    #[error("Numeric overflow while computing {operation}")]
    Overflow {
        /// The computation that overflowed.
        operation: String,
    },
}

impl EngineError {
    /// Creates a data access error for the named store.
    pub fn data_access(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataAccess {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Creates an overflow error for the named computation.
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
