//! Error types for configuration loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a configuration file into a typed record.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read. Passed through as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The file was read but its contents do not fit the target record.
    #[error("Error decoding config {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The target's current value could not be captured before decoding.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl LoadError {
    /// Path of the offending file, for decode failures.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Decode { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

/// A record held a value the encoder cannot represent.
#[derive(Debug, Error)]
#[error("Error encoding config: {0}")]
pub struct EncodeError(#[from] pub serde_yaml::Error);
