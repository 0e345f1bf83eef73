//! Process-wide override configuration cell.
//!
//! Writers replace the whole snapshot; readers never observe a table that
//! is half updated. Every replacement bumps the version and is announced
//! on a watch channel so resolvers can drop their caches.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use tokio::sync::watch;
use tracing::debug;

use crate::overrides::ResolvedConfig;

/// Immutable view of the store at one version.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    version: u64,
    config: Option<Arc<ResolvedConfig>>,
}

impl Snapshot {
    /// Monotonic version; `0` before the first write.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current overrides, if any.
    #[must_use]
    pub fn config(&self) -> Option<&ResolvedConfig> {
        self.config.as_deref()
    }
}

/// Versioned, replace-only holder of the [`ResolvedConfig`].
pub struct ConfigStore {
    cell: ArcSwap<Snapshot>,
    tx: watch::Sender<u64>,
}

impl ConfigStore {
    /// Creates an empty store at version `0`.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            cell: ArcSwap::from_pointee(Snapshot::default()),
            tx,
        }
    }

    /// The shared process-wide store.
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<ConfigStore>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(ConfigStore::new())))
    }

    /// Replaces the configuration and returns the new version.
    pub fn replace(&self, config: Option<ResolvedConfig>) -> u64 {
        let config = config.map(Arc::new);
        let prev = self.cell.rcu(|cur| Snapshot {
            version: cur.version + 1,
            config: config.clone(),
        });
        let version = prev.version + 1;
        debug!(version, present = config.is_some(), "Override configuration replaced");
        self.tx.send_replace(version);
        version
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.cell.load_full()
    }

    /// Current version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.cell.load().version
    }

    /// Receiver that sees every new version.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("snapshot", &self.cell.load_full())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::normalize_config;
    use serde_json::json;

    #[test]
    fn starts_empty() {
        let store = ConfigStore::new();
        assert_eq!(store.version(), 0);
        assert!(store.snapshot().config().is_none());
    }

    #[test]
    fn replace_bumps_version() {
        let store = ConfigStore::new();
        let config = normalize_config(json!({ "vant": { "usePreset": false } }));
        assert_eq!(store.replace(config), 1);
        assert_eq!(store.replace(None), 2);
        assert!(store.snapshot().config().is_none());
    }

    #[test]
    fn old_snapshots_stay_intact() {
        let store = ConfigStore::new();
        store.replace(normalize_config(json!({ "vant": {} })));
        let before = store.snapshot();
        store.replace(normalize_config(json!({ "naive-ui": {} })));

        assert!(before.config().unwrap().library("vant").is_some());
        assert!(store.snapshot().config().unwrap().library("vant").is_none());
    }

    #[tokio::test]
    async fn subscribers_see_new_versions() {
        let store = ConfigStore::new();
        let mut rx = store.subscribe();
        store.replace(None);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
    }
}
