//! Error types for the terminal shell.
//!
//! Pricing failures are not errors here: they are reported to the user and
//! the shell keeps going. `TerminalError` covers what stops the process.

use checkout_core::CheckoutError;

/// Terminal shell errors.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not read price list {path}")]
    ReadPriceList {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid price list {source_name}")]
    PriceList {
        source_name: String,
        #[source]
        source: CheckoutError,
    },
}

/// Convenience type alias for Results with TerminalError.
pub type TerminalResult<T> = Result<T, TerminalError>;
