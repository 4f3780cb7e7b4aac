//! Error types and result handling for yara-check.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for yara-check operations.
///
/// Every variant is terminal for the process: the driver logs it at
/// error severity and exits with a non-zero status.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Configuration Errors =====
    #[error("Missing required argument: {name}")]
    MissingArgument { name: &'static str },

    // ===== Input Errors =====
    #[error("Rules path is not a regular file: {0}")]
    RulesNotAFile(PathBuf),

    #[error("Input path is not a file or a directory: {0}")]
    InvalidInput(PathBuf),

    // ===== I/O Errors =====
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to access directory: {path}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===== Detection Errors =====
    #[error("YARA rule compilation failed: {0}")]
    YaraCompilation(String),

    #[error("YARA scan failed: {0}")]
    YaraScan(String),

    /// The matching engine could not be initialized. Cannot occur while
    /// the engine is linked statically; part of the error contract for
    /// builds that load the engine dynamically.
    #[error("Matching engine unavailable: {0}")]
    EngineUnavailable(String),
}

impl Error {
    /// Create a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a directory access error.
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// Check if this error stems from command-line usage, in which case
    /// the driver prints usage help after logging it.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::MissingArgument { .. })
    }
}
