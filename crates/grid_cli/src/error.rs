//! CLI error types.

use grid_core::market_data::TableError;
use grid_core::types::DiscretizationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `tenorgrid` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Table file is not valid TOML or does not describe a table.
    #[error("Invalid table file {path}: {message}")]
    TableFile {
        /// File being parsed
        path: String,
        /// Parser message
        message: String,
    },

    /// Command arguments are inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Table construction or query failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Time grid construction failed.
    #[error(transparent)]
    Discretization(#[from] DiscretizationError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
