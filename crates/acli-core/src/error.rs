//! Errors produced by configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving, or querying configuration.
///
/// All variants are terminal for the invoking operation; nothing here is
/// retried. A corrupted file is the user's to fix (typically via `reset`),
/// never silently replaced by defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but its content is not a flat JSON object of
    /// scalar values.
    #[error("configuration file {} is corrupted", .path.display())]
    Corrupted {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("error reading configuration file {}: {source}", .path.display())]
    Unreadable {
        /// Path of the offending file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file or one of its parent directories could not be written.
    #[error("error saving configuration file {}: {source}", .path.display())]
    WriteFailed {
        /// Path the save was targeting.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested key is absent from an otherwise valid mapping.
    #[error("configuration key '{0}' not found")]
    KeyNotFound(String),
}
