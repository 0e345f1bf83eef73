//! Asynchronous loading of the override file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::OverrideError;
use crate::overrides::{candidates, parse_override, ResolvedConfig};

/// Source of render-time overrides.
#[async_trait]
pub trait OverrideLoader: Send + Sync {
    /// Loads the overrides; `Ok(None)` when there are none.
    async fn load(&self) -> Result<Option<ResolvedConfig>, OverrideError>;
}

/// Loads `uas.config.*` / `usa.config.*` from a project root.
#[derive(Debug, Clone)]
pub struct FileOverrideLoader {
    root: PathBuf,
}

impl FileOverrideLoader {
    /// Creates a loader for `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// First existing override file.
    pub async fn discover(&self) -> Option<PathBuf> {
        for path in candidates(&self.root) {
            if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
                return Some(path);
            }
        }
        None
    }
}

/// Reads and parses one override file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_file(path: &Path) -> Result<Option<ResolvedConfig>, OverrideError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| OverrideError::io(path, e))?;
    parse_override(path, &content)
}

#[async_trait]
impl OverrideLoader for FileOverrideLoader {
    async fn load(&self) -> Result<Option<ResolvedConfig>, OverrideError> {
        let Some(path) = self.discover().await else {
            debug!(root = %self.root.display(), "No override file found");
            return Ok(None);
        };
        let config = load_file(&path).await?;
        info!(file = %path.display(), "Loaded override configuration");
        Ok(config)
    }
}

/// Runs `loader`, degrading failures to "no override".
pub async fn load_or_none(loader: &dyn OverrideLoader) -> Option<ResolvedConfig> {
    match loader.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load override configuration: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileOverrideLoader::new(dir.path());
        assert!(loader.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn loads_json_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("uas.config.json"),
            r#"{ "element-plus": { "usePreset": false } }"#,
        )
        .unwrap();

        let config = FileOverrideLoader::new(dir.path()).load().await.unwrap().unwrap();
        assert_eq!(config.library("element-plus").unwrap().use_preset, Some(false));
    }

    #[tokio::test]
    async fn broken_file_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("uas.config.toml"), "[vant").unwrap();

        let loader = FileOverrideLoader::new(dir.path());
        assert!(loader.load().await.is_err());
        assert!(load_or_none(&loader).await.is_none());
    }
}
