//! Error types for Tabula operations
//!
//! The filter engine, page slicer and window builder are total and never
//! fail. Errors only surface from configuration validation and from explicit
//! page navigation requested by a caller.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Page navigation errors.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Page {page} is out of range (1..={total_pages})")]
    OutOfRange { page: usize, total_pages: usize },
}

/// Master error type for all Tabula errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TabulaError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Page error: {0}")]
    Page(#[from] PageError),
}

/// Result type alias for Tabula operations.
pub type TabulaResult<T> = Result<T, TabulaError>;

// =============================================================================
// TESTS
// =============================================================================
