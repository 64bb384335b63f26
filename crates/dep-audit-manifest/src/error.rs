//! Manifest error types.

use std::path::{Path, PathBuf};

/// Result type for manifest decoding.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors raised while turning a manifest file into records.
#[derive(Debug)]
pub enum ManifestError {
    /// The manifest could not be read from disk.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest is not valid TOML, or a record lacks a required field.
    Malformed { path: PathBuf, message: String },
}

impl ManifestError {
    pub(crate) fn malformed(path: &Path, message: impl Into<String>) -> Self {
        ManifestError::Malformed {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Whether this is a decoding (as opposed to I/O) failure.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ManifestError::Malformed { .. })
    }
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ManifestError::Malformed { path, message } => {
                write!(f, "malformed manifest {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Io { source, .. } => Some(source),
            ManifestError::Malformed { .. } => None,
        }
    }
}
