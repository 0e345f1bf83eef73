//! Override file watcher.
//!
//! Watches the project root (non-recursively) and keeps the
//! [`ConfigStore`] in step with the override file on disk.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use tracing::{debug, info, warn};

use crate::error::{OverrideError, WatchError};
use crate::overrides::{find_override_file, read_override, BASENAMES, EXTENSIONS};
use crate::store::ConfigStore;

const DEBOUNCE: Duration = Duration::from_millis(200);

/// Outcome of a change to the override file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    /// The file was (re)loaded into the store.
    Reloaded {
        /// File that was loaded.
        file: PathBuf,
    },
    /// The file disappeared; overrides were cleared.
    Removed,
    /// The file could not be read or parsed; overrides were cleared.
    Invalid {
        /// File that failed.
        file: PathBuf,
    },
}

/// Re-reads the override file into a store when it changes.
#[derive(Debug)]
pub struct Reloader {
    root: PathBuf,
    store: Arc<ConfigStore>,
    current: Option<PathBuf>,
    last_error: Option<OverrideError>,
}

impl Reloader {
    /// Creates a reloader; nothing is read until [`Reloader::reload`].
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, store: Arc<ConfigStore>) -> Self {
        Self {
            root: root.into(),
            store,
            current: None,
            last_error: None,
        }
    }

    /// Override file currently loaded.
    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Why the last reload produced [`ConfigEvent::Invalid`]; cleared by
    /// the next reload that does not fail.
    #[must_use]
    pub fn last_error(&self) -> Option<&OverrideError> {
        self.last_error.as_ref()
    }

    /// Handles a batch of changed paths; unrelated paths are ignored.
    pub fn apply(&mut self, paths: &[PathBuf]) -> Option<ConfigEvent> {
        if !paths.iter().any(|p| is_override_file(p)) {
            return None;
        }
        self.reload()
    }

    /// Rediscovers and reloads the override file.
    ///
    /// Returns `None` when there was no file before and there is none now.
    pub fn reload(&mut self) -> Option<ConfigEvent> {
        self.last_error = None;
        let Some(file) = find_override_file(&self.root) else {
            let had_file = self.current.take().is_some();
            if had_file {
                info!("Override file removed");
                self.store.replace(None);
                return Some(ConfigEvent::Removed);
            }
            return None;
        };

        self.current = Some(file.clone());
        match read_override(&file) {
            Ok(config) => {
                info!(file = %file.display(), "Override configuration reloaded");
                self.store.replace(config);
                Some(ConfigEvent::Reloaded { file })
            }
            Err(e) => {
                warn!(file = %file.display(), "Failed to load override configuration: {e}");
                self.store.replace(None);
                self.last_error = Some(e);
                Some(ConfigEvent::Invalid { file })
            }
        }
    }
}

fn is_override_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    BASENAMES.iter().any(|base| {
        name.strip_prefix(base)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|ext| EXTENSIONS.contains(&ext))
    })
}

/// Debounced watcher driving a [`Reloader`].
pub struct OverrideWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
    receiver: Receiver<DebounceEventResult>,
    reloader: Reloader,
}

impl OverrideWatcher {
    /// Starts watching `root` and performs an initial load into `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform watcher cannot be created.
    pub fn new(root: impl Into<PathBuf>, store: Arc<ConfigStore>) -> Result<Self, WatchError> {
        let root = root.into();
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, tx)?;
        debouncer
            .watcher()
            .watch(&root, RecursiveMode::NonRecursive)?;

        let mut reloader = Reloader::new(root, store);
        reloader.reload();
        Ok(Self {
            _debouncer: debouncer,
            receiver: rx,
            reloader,
        })
    }

    /// Override file currently loaded.
    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.reloader.current()
    }

    /// Blocks until the override file changes.
    ///
    /// Returns `None` once the watcher has shut down.
    pub fn next_event(&mut self) -> Option<ConfigEvent> {
        loop {
            match self.receiver.recv() {
                Ok(Ok(events)) => {
                    let paths: Vec<PathBuf> = events.into_iter().map(|e| e.path).collect();
                    if let Some(event) = self.reloader.apply(&paths) {
                        return Some(event);
                    }
                }
                Ok(Err(e)) => debug!("Watch error: {e}"),
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (tempfile::TempDir, Arc<ConfigStore>, Reloader) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(ConfigStore::new());
        let reloader = Reloader::new(dir.path(), Arc::clone(&store));
        (dir, store, reloader)
    }

    #[test]
    fn recognizes_override_names() {
        assert!(is_override_file(Path::new("/p/uas.config.toml")));
        assert!(is_override_file(Path::new("usa.config.json")));
        assert!(!is_override_file(Path::new("uas.config.yaml")));
        assert!(!is_override_file(Path::new("uas.configx.toml")));
        assert!(!is_override_file(Path::new("src/App.vue")));
    }

    #[test]
    fn unrelated_changes_are_ignored() {
        let (dir, store, mut reloader) = setup();
        assert_eq!(reloader.apply(&[dir.path().join("App.vue")]), None);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn reload_then_remove() {
        let (dir, store, mut reloader) = setup();
        let file = dir.path().join("uas.config.json");
        std::fs::write(&file, r#"{ "vant": { "usePreset": false } }"#).unwrap();

        assert_eq!(
            reloader.apply(&[file.clone()]),
            Some(ConfigEvent::Reloaded { file: file.clone() })
        );
        let snapshot = store.snapshot();
        assert_eq!(snapshot.config().unwrap().library("vant").unwrap().use_preset, Some(false));

        std::fs::remove_file(&file).unwrap();
        assert_eq!(reloader.apply(&[file]), Some(ConfigEvent::Removed));
        assert!(store.snapshot().config().is_none());
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn invalid_file_clears_overrides() {
        let (dir, store, mut reloader) = setup();
        let file = dir.path().join("uas.config.toml");
        std::fs::write(&file, "[vant]\nusePreset = false\n").unwrap();
        reloader.reload();
        assert!(store.snapshot().config().is_some());

        std::fs::write(&file, "[vant").unwrap();
        assert_eq!(reloader.apply(&[file.clone()]), Some(ConfigEvent::Invalid { file }));
        assert!(store.snapshot().config().is_none());
    }

    #[test]
    fn invalid_file_keeps_the_parse_error() {
        let (dir, _store, mut reloader) = setup();
        let file = dir.path().join("uas.config.toml");
        std::fs::write(&file, "[vant").unwrap();

        assert_eq!(reloader.reload(), Some(ConfigEvent::Invalid { file: file.clone() }));
        assert!(matches!(reloader.last_error(), Some(OverrideError::Toml(_))));

        std::fs::write(&file, "[vant]\n").unwrap();
        assert_eq!(reloader.reload(), Some(ConfigEvent::Reloaded { file }));
        assert!(reloader.last_error().is_none());
    }

    #[test]
    fn removal_without_prior_file_is_silent() {
        let (dir, store, mut reloader) = setup();
        assert_eq!(reloader.apply(&[dir.path().join("uas.config.json")]), None);
        assert_eq!(store.version(), 0);
    }
}
