//! Enhanced-component resolver.
//!
//! Decides, per component name, whether a wrapped module should replace
//! the library component. Decisions are memoized until the override
//! configuration changes or [`EnhanceResolver::clear_cache`] is called.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{watch, OnceCell};
use tracing::debug;
use uas_lint_core::naming::{normalize, normalized_variants, to_pascal_case};

use crate::library::LibraryMeta;
use crate::loader::{load_or_none, OverrideLoader};
use crate::overrides::ResolvedConfig;
use crate::presets;
use crate::props::{resolve_props, Props, UiRule, UiRules};
use crate::store::ConfigStore;

/// Import name of every synthesized module.
pub const IMPORT_NAME: &str = "default";

/// Default directory for synthesized modules.
pub const DEFAULT_CACHE_DIR: &str = "node_modules/.uas";

/// Static resolver settings.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    library: LibraryMeta,
    rules: UiRules,
    use_preset: bool,
    cache_dir: PathBuf,
}

impl ResolverOptions {
    /// Options for `library` with its preset enabled.
    #[must_use]
    pub fn new(library: impl Into<LibraryMeta>) -> Self {
        Self {
            library: library.into(),
            rules: UiRules::new(),
            use_preset: true,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }

    /// Adds rules that win over the preset.
    #[must_use]
    pub fn rules(mut self, rules: UiRules) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds one rule.
    #[must_use]
    pub fn rule(mut self, component: impl Into<String>, rule: UiRule) -> Self {
        self.rules.insert(component.into(), rule);
        self
    }

    /// Enables or disables the library preset.
    #[must_use]
    pub fn use_preset(mut self, enabled: bool) -> Self {
        self.use_preset = enabled;
        self
    }

    /// Sets the directory for synthesized modules.
    #[must_use]
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    // ── Accessors ──

    /// Library metadata.
    #[must_use]
    pub fn library(&self) -> &LibraryMeta {
        &self.library
    }

    /// Whether the preset applies when no override says otherwise.
    #[must_use]
    pub fn preset_enabled(&self) -> bool {
        self.use_preset
    }
}

/// A resolved decision to wrap a component.
#[derive(Debug, Clone)]
pub struct EnhancedComponent {
    name: String,
    library: String,
    module_path: PathBuf,
    package: String,
    export_name: String,
    style_import: Option<String>,
    rule: UiRule,
}

impl EnhancedComponent {
    /// Requested component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Library identifier.
    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Name to import from the synthesized module.
    #[must_use]
    pub fn import_name(&self) -> &'static str {
        IMPORT_NAME
    }

    /// Synthesized module path.
    #[must_use]
    pub fn module_path(&self) -> &Path {
        &self.module_path
    }

    /// Package the original component comes from.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Export name of the original component.
    #[must_use]
    pub fn export_name(&self) -> &str {
        &self.export_name
    }

    /// Side-effect style import, if the library needs one.
    #[must_use]
    pub fn style_import(&self) -> Option<&str> {
        self.style_import.as_deref()
    }

    /// Effective rule.
    #[must_use]
    pub fn rule(&self) -> &UiRule {
        &self.rule
    }

    /// Props handed to the wrapped component.
    #[must_use]
    pub fn render(&self, passed_attrs: &Props, explicit: &Props) -> Props {
        resolve_props(&self.rule, passed_attrs, explicit)
    }
}

#[derive(Default)]
struct Cache {
    version: u64,
    entries: HashMap<String, Option<Arc<EnhancedComponent>>>,
}

/// Resolves component names to enhanced modules.
pub struct EnhanceResolver {
    options: ResolverOptions,
    store: Arc<ConfigStore>,
    loader: Option<Arc<dyn OverrideLoader>>,
    loaded: OnceCell<()>,
    cache: Mutex<Cache>,
}

impl EnhanceResolver {
    /// Creates a resolver reading overrides from [`ConfigStore::global`].
    #[must_use]
    pub fn new(options: ResolverOptions) -> Self {
        Self {
            options,
            store: ConfigStore::global(),
            loader: None,
            loaded: OnceCell::new(),
            cache: Mutex::new(Cache::default()),
        }
    }

    /// Reads overrides from `store` instead of the global one.
    #[must_use]
    pub fn with_store(mut self, store: Arc<ConfigStore>) -> Self {
        self.store = store;
        self
    }

    /// Loads overrides into the store before the first resolution.
    #[must_use]
    pub fn with_loader(mut self, loader: Arc<dyn OverrideLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Resolver options.
    #[must_use]
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Store the resolver reads from.
    #[must_use]
    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Receiver notified on every override replacement.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    /// Resolves `component`; `None` means "use the component unchanged".
    pub async fn resolve(&self, component: &str) -> Option<Arc<EnhancedComponent>> {
        self.ensure_loaded().await;

        let snapshot = self.store.snapshot();
        {
            let mut cache = self.cache.lock();
            if cache.version != snapshot.version() {
                cache.entries.clear();
                cache.version = snapshot.version();
            }
            if let Some(hit) = cache.entries.get(component) {
                return hit.clone();
            }
        }

        debug!(component, version = snapshot.version(), "Resolving component");
        let computed = self.compute(component, snapshot.config()).map(Arc::new);

        let mut cache = self.cache.lock();
        if cache.version == snapshot.version() {
            cache
                .entries
                .entry(component.to_string())
                .or_insert(computed)
                .clone()
        } else {
            computed
        }
    }

    /// Drops every memoized decision.
    pub fn clear_cache(&self) {
        self.cache.lock().entries.clear();
    }

    /// Effective rules for the current overrides, sorted by declared name.
    #[must_use]
    pub fn effective_rules(&self) -> Vec<(String, UiRule)> {
        let snapshot = self.store.snapshot();
        let mut rules: Vec<_> = self.merged_rules(snapshot.config()).into_values().collect();
        rules.sort_by(|a, b| a.0.cmp(&b.0));
        rules
    }

    async fn ensure_loaded(&self) {
        let Some(loader) = &self.loader else {
            return;
        };
        self.loaded
            .get_or_init(|| async {
                let config = load_or_none(loader.as_ref()).await;
                self.store.replace(config);
            })
            .await;
    }

    fn merged_rules(&self, config: Option<&ResolvedConfig>) -> HashMap<String, (String, UiRule)> {
        let library = self.options.library.name();
        let entry = config.and_then(|c| c.library(library));
        let use_preset = entry
            .and_then(|e| e.use_preset)
            .unwrap_or(self.options.use_preset);

        let mut merged = HashMap::new();
        let preset = if use_preset {
            presets::for_library(library)
        } else {
            UiRules::new()
        };
        let layers = [
            Some(&preset),
            Some(&self.options.rules),
            entry.and_then(|e| e.rules.as_ref()),
        ];
        for rules in layers.into_iter().flatten() {
            for (name, rule) in rules {
                let key = normalize(name);
                if key.is_empty() {
                    continue;
                }
                merged.insert(key, (name.clone(), rule.clone()));
            }
        }
        merged
    }

    fn compute(&self, component: &str, config: Option<&ResolvedConfig>) -> Option<EnhancedComponent> {
        let mut rules = self.merged_rules(config);
        let (declared, rule) = normalized_variants(component)
            .iter()
            .find_map(|key| rules.remove(key))?;

        let meta = &self.options.library;
        let canonical = to_pascal_case(&declared);
        Some(EnhancedComponent {
            name: component.to_string(),
            library: meta.name().to_string(),
            module_path: self
                .options
                .cache_dir
                .join(".enhanced")
                .join(format!("{canonical}.ts")),
            package: meta.package().to_string(),
            export_name: meta.export_for(&canonical),
            style_import: meta.style_import(&canonical),
            rule,
        })
    }
}

impl fmt::Debug for EnhanceResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnhanceResolver")
            .field("options", &self.options)
            .field("cached", &self.cache.lock().entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::UiLibrary;
    use crate::overrides::normalize_config;
    use serde_json::json;

    fn resolver(options: ResolverOptions) -> EnhanceResolver {
        EnhanceResolver::new(options).with_store(Arc::new(ConfigStore::new()))
    }

    #[tokio::test]
    async fn preset_component_resolves() {
        let r = resolver(ResolverOptions::new(UiLibrary::ElementPlus));
        let component = r.resolve("ElInput").await.unwrap();
        assert_eq!(component.import_name(), "default");
        assert!(component.module_path().ends_with(".enhanced/ElInput.ts"));
        assert_eq!(component.package(), "element-plus");
        assert_eq!(
            component.style_import(),
            Some("element-plus/es/components/input/style/css")
        );
    }

    #[tokio::test]
    async fn kebab_name_hits_pascal_rule() {
        let r = resolver(ResolverOptions::new(UiLibrary::Vant));
        let component = r.resolve("van-field").await.unwrap();
        assert_eq!(component.name(), "van-field");
        assert_eq!(component.export_name(), "Field");
        assert!(component.module_path().ends_with(".enhanced/VanField.ts"));
    }

    #[tokio::test]
    async fn unknown_component_is_none() {
        let r = resolver(ResolverOptions::new(UiLibrary::ElementPlus));
        assert!(r.resolve("ElTable").await.is_none());
        assert!(r.resolve("").await.is_none());
    }

    #[tokio::test]
    async fn disabled_preset_leaves_only_user_rules() {
        let r = resolver(
            ResolverOptions::new(UiLibrary::ElementPlus)
                .use_preset(false)
                .rule("ElTable", UiRule::new().default_prop("border", true)),
        );
        assert!(r.resolve("ElInput").await.is_none());
        let table = r.resolve("el-table").await.unwrap();
        assert_eq!(table.rule().default_props()["border"], json!(true));
    }

    #[tokio::test]
    async fn user_rule_replaces_preset_rule() {
        let r = resolver(
            ResolverOptions::new(UiLibrary::ElementPlus)
                .rule("el-input", UiRule::new().default_prop("size", "small")),
        );
        let input = r.resolve("ElInput").await.unwrap();
        assert!(!input.rule().default_props().contains_key("clearable"));
    }

    #[tokio::test]
    async fn repeated_resolution_is_cached() {
        let r = resolver(ResolverOptions::new(UiLibrary::ElementPlus));
        let a = r.resolve("ElInput").await.unwrap();
        let b = r.resolve("ElInput").await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        r.clear_cache();
        let c = r.resolve("ElInput").await.unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[tokio::test]
    async fn store_replacement_is_picked_up() {
        let store = Arc::new(ConfigStore::new());
        let r = EnhanceResolver::new(ResolverOptions::new(UiLibrary::ElementPlus))
            .with_store(Arc::clone(&store));
        assert!(r.resolve("ElTable").await.is_none());

        store.replace(normalize_config(json!({
            "element-plus": { "rules": { "ElTable": { "defaults": { "stripe": true } } } }
        })));
        let table = r.resolve("ElTable").await.unwrap();
        assert_eq!(table.rule().default_props()["stripe"], json!(true));

        store.replace(normalize_config(json!({ "element-plus": { "usePreset": false } })));
        assert!(r.resolve("ElInput").await.is_none());
    }

    #[tokio::test]
    async fn render_applies_rule() {
        let r = resolver(ResolverOptions::new(UiLibrary::ElementPlus));
        let input = r.resolve("ElInput").await.unwrap();
        let mut explicit = Props::new();
        explicit.insert("label".into(), json!("Email"));
        let props = input.render(&Props::new(), &explicit);
        assert_eq!(
            serde_json::Value::Object(props),
            json!({ "clearable": true, "label": "Email", "placeholder": "请输入Email" })
        );
    }

    #[tokio::test]
    async fn concurrent_resolutions_converge() {
        let r = Arc::new(resolver(ResolverOptions::new(UiLibrary::NaiveUi)));
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let r = Arc::clone(&r);
                tokio::spawn(async move { r.resolve("NSelect").await })
            })
            .collect();
        let mut results = Vec::new();
        for task in tasks {
            results.push(task.await.unwrap().unwrap());
        }
        let last = r.resolve("NSelect").await.unwrap();
        assert!(results.iter().all(|c| Arc::ptr_eq(c, &last)));
    }
}
