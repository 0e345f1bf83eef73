//! Resolve command implementation.
//!
//! Prints, per component, whether it would be replaced by an enhanced
//! module and with which defaults.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use uas_enhance::{
    ConfigEvent, ConfigStore, EnhanceResolver, EnhancedComponent, FileOverrideLoader,
    OverrideWatcher, ResolverOptions, UiLibrary,
};

/// Arguments of the resolve command.
pub struct Args {
    /// Names to resolve.
    pub components: Vec<String>,
    /// Library identifier.
    pub library: String,
    /// Directory searched for the override file.
    pub root: PathBuf,
    /// Whether the library preset applies.
    pub use_preset: bool,
    /// Keep running and re-resolve on override changes.
    pub watch: bool,
}

/// Runs the resolve command.
pub fn run(args: &Args) -> Result<()> {
    let library: UiLibrary = args.library.parse()?;
    let options = ResolverOptions::new(library).use_preset(args.use_preset);
    let store = Arc::new(ConfigStore::new());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if !args.watch {
        let resolver = EnhanceResolver::new(options)
            .with_store(store)
            .with_loader(Arc::new(FileOverrideLoader::new(&args.root)));
        let report = runtime.block_on(build_report(&resolver, &args.components));
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut watcher = OverrideWatcher::new(&args.root, Arc::clone(&store))
        .with_context(|| format!("Failed to watch {}", args.root.display()))?;
    let resolver = EnhanceResolver::new(options).with_store(store);
    tracing::info!("Watching {} for override changes", args.root.display());

    loop {
        let report = runtime.block_on(build_report(&resolver, &args.components));
        println!("{}", serde_json::to_string_pretty(&report)?);

        match watcher.next_event() {
            Some(ConfigEvent::Reloaded { file }) => {
                tracing::info!("Reloaded {}", file.display());
            }
            Some(ConfigEvent::Invalid { file }) => {
                tracing::warn!("Ignoring invalid {}", file.display());
            }
            Some(ConfigEvent::Removed) => tracing::info!("Override file removed"),
            None => break,
        }
    }

    Ok(())
}

async fn build_report(resolver: &EnhanceResolver, components: &[String]) -> Value {
    let mut entries = Vec::with_capacity(components.len());
    for name in components {
        let entry = match resolver.resolve(name).await {
            Some(component) => describe(&component),
            None => json!({ "component": name, "enhanced": false }),
        };
        entries.push(entry);
    }
    Value::Array(entries)
}

fn describe(component: &EnhancedComponent) -> Value {
    let rule = component.rule();
    json!({
        "component": component.name(),
        "enhanced": true,
        "module": component.module_path(),
        "import": component.import_name(),
        "from": {
            "package": component.package(),
            "export": component.export_name(),
        },
        "style": component.style_import(),
        "defaults": rule.default_props(),
        "autoPlaceholder": rule.placeholder_policy().is_enabled(),
    })
}
