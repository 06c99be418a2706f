//! Error types for the Bill Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The allocation functions themselves never fail: degenerate inputs (zero
//! subtotals, empty assignee sets, missing optional fields) resolve to zero
//! through explicit guards. Errors arise only from configuration loading
//! and from the HTTP boundary.

use thiserror::Error;

/// The main error type for the Bill Allocation Engine.
///
/// # Example
///
/// ```
/// use split_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A split mode was requested that the engine does not implement.
    #[error("Unsupported split mode '{mode}' for {field}")]
    UnsupportedSplitMode {
        /// The configuration field with the unsupported mode.
        field: String,
        /// The requested mode.
        mode: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
