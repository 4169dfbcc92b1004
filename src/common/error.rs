//! Error types for the regression harness
//!
//! Only startup problems surface as errors. Anything that goes wrong inside a
//! single test case is folded into that case's verdict instead.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Startup Errors ===
    #[error("{name} executable does not exist on the search path. Searched: {searched}")]
    SimulatorNotFound { name: String, searched: String },

    #[error("Cannot list test inputs in '{path}': {error}")]
    Discovery { path: String, error: String },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create a simulator not found error listing the searched directories
    pub fn simulator_not_found<S: AsRef<str>>(name: &str, dirs: &[S]) -> Self {
        Self::SimulatorNotFound {
            name: name.to_string(),
            searched: dirs.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", "),
        }
    }

    /// Create a file read error for `path`
    pub fn file_read(path: &std::path::Path, error: io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Process exit status for this error
    ///
    /// A missing simulator exits with `-1`; every other startup failure with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::SimulatorNotFound { .. } => -1,
            _ => 1,
        }
    }
}
