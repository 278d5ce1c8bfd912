//! Custom error types for the income ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A record could not be built from text
    #[error("Parse error: {0}")]
    Parse(String),

    /// A persisted line could not be decoded
    #[error("{path}:{line}: {reason}")]
    CorruptLine {
        path: String,
        line: usize,
        reason: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a parse error for an amount token that is not a whole number
    pub fn invalid_amount(token: &str) -> Self {
        Self::Parse(format!("invalid amount '{}'", token))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
