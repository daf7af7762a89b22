//! Error types for dxf-rooms

use std::convert::Infallible;
use std::io;
use thiserror::Error;

/// Main error type for dxf-rooms operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading the line source
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line could not be decoded with the configured encoding
    #[error("Encoding error at line {line}: {message}")]
    Encoding { line: usize, message: String },

    /// A lookahead read ran past the end of the section
    #[error("Incomplete structure: line {line} needs a value {offset} line(s) ahead")]
    Incomplete { line: usize, offset: usize },

    /// A value line did not hold the expected number
    #[error("Invalid value {value:?} at line {line} (expected {expected})")]
    InvalidValue {
        line: usize,
        value: String,
        expected: &'static str,
    },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl DxfError {
    /// True for the errors that end a whole read (line source failures).
    pub fn is_fatal(&self) -> bool {
        matches!(self, DxfError::Io(_) | DxfError::Encoding { .. })
    }
}

/// Result type alias for dxf-rooms operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

impl From<Infallible> for DxfError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
