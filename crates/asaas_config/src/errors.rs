//! Error types for the configuration store.

use std::{io, path::PathBuf};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while reading or writing the CLI settings file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The user's home directory could not be determined.
    #[error("Failed to get home directory")]
    HomeDirectoryNotFound,

    /// A filesystem operation on the settings file failed.
    ///
    /// Covers permission problems and any read or write failure other than the
    /// file being absent, which is treated as an empty configuration.
    #[error("Failed to {action} config file {path:?}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file exists but does not contain valid settings JSON.
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The settings could not be serialized.
    #[error("Failed to marshal config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An API key was requested but none has been stored.
    #[error("API key not set. Use 'asaas-cli config set-token <your-api-key>' to set it")]
    NotConfigured,
}
