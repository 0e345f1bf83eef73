//! Error types for override loading and watching.

use std::path::{Path, PathBuf};

/// Failure to read or parse a render-time override file.
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax error.
    #[error("invalid TOML override: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax error.
    #[error("invalid JSON override: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension has no parser.
    #[error("unsupported override file: {}", .0.display())]
    UnsupportedExtension(PathBuf),
}

impl OverrideError {
    /// Read failure for `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Failure to set up the override file watcher.
#[derive(Debug, thiserror::Error)]
#[error("file watcher error: {0}")]
pub struct WatchError(#[from] pub notify::Error);
