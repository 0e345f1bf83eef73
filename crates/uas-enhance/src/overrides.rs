//! User override files: discovery, parsing, and shape normalization.
//!
//! The override file maps library names to `{ rules?, usePreset? }`.
//! Malformed parts are dropped one field at a time; a broken library entry
//! never invalidates its siblings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::OverrideError;
use crate::props::{AutoPlaceholder, UiRule, UiRules};

/// Basenames looked up in the project root, in order.
pub const BASENAMES: &[&str] = &["uas.config", "usa.config"];

/// Extensions tried for each basename, in order.
pub const EXTENSIONS: &[&str] = &["toml", "json"];

/// Override entry for one library.
#[derive(Debug, Clone, Default)]
pub struct LibraryOverride {
    /// Rules that win over the preset key-for-key.
    pub rules: Option<UiRules>,
    /// Whether the library preset applies; `None` defers to the resolver options.
    pub use_preset: Option<bool>,
}

/// Normalized override configuration, keyed by library name.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    libraries: BTreeMap<String, LibraryOverride>,
}

impl ResolvedConfig {
    /// Builds a configuration from already-normalized entries.
    #[must_use]
    pub fn new(libraries: BTreeMap<String, LibraryOverride>) -> Self {
        Self { libraries }
    }

    /// Override for `library`, if any.
    #[must_use]
    pub fn library(&self, library: &str) -> Option<&LibraryOverride> {
        self.libraries.get(library)
    }

    /// Library names with an override.
    pub fn library_names(&self) -> impl Iterator<Item = &str> {
        self.libraries.keys().map(String::as_str)
    }

    /// Number of library entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Returns `true` when no library has an override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

/// Normalizes a parsed override document.
///
/// A non-null top-level `default` entry is taken as the export. Returns
/// `None` when nothing usable remains.
#[must_use]
pub fn normalize_config(document: Value) -> Option<ResolvedConfig> {
    let export = match document {
        Value::Object(mut map) => match map.remove("default") {
            Some(inner) if !inner.is_null() => inner,
            Some(_) | None => Value::Object(map),
        },
        other => other,
    };
    let Value::Object(entries) = export else {
        debug!("Override export is not a table; ignoring");
        return None;
    };

    let libraries: BTreeMap<_, _> = entries
        .into_iter()
        .filter_map(|(name, value)| {
            let entry = normalize_library(value);
            if entry.is_none() {
                debug!(library = %name, "Dropping malformed library override");
            }
            entry.map(|entry| (name, entry))
        })
        .collect();

    if libraries.is_empty() {
        None
    } else {
        Some(ResolvedConfig { libraries })
    }
}

fn normalize_library(value: Value) -> Option<LibraryOverride> {
    let Value::Object(mut map) = value else {
        return None;
    };
    Some(LibraryOverride {
        rules: map.remove("rules").and_then(normalize_rules),
        use_preset: map.get("usePreset").and_then(Value::as_bool),
    })
}

fn normalize_rules(value: Value) -> Option<UiRules> {
    let Value::Object(map) = value else {
        return None;
    };
    let rules: UiRules = map
        .into_iter()
        .filter_map(|(component, rule)| normalize_rule(rule).map(|rule| (component, rule)))
        .collect();
    (!rules.is_empty()).then_some(rules)
}

fn normalize_rule(value: Value) -> Option<UiRule> {
    let Value::Object(mut map) = value else {
        return None;
    };
    let mut rule = UiRule::new();
    if let Some(Value::Object(defaults)) = map.remove("defaults") {
        rule = rule.defaults(defaults);
    }
    match map.remove("autoPlaceholder") {
        Some(Value::Bool(enabled)) => rule = rule.auto_placeholder(enabled),
        Some(Value::String(template)) => {
            rule = rule.auto_placeholder(AutoPlaceholder::Template(template));
        }
        _ => {}
    }
    Some(rule)
}

/// Parses override file content by extension (`toml` or `json`).
///
/// # Errors
///
/// Returns an error on a syntax error or an unknown extension.
pub fn parse_override(path: &Path, content: &str) -> Result<Option<ResolvedConfig>, OverrideError> {
    let document: Value = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(content)?,
        Some("json") => serde_json::from_str(content)?,
        _ => return Err(OverrideError::UnsupportedExtension(path.to_path_buf())),
    };
    Ok(normalize_config(document))
}

/// Reads and parses one override file synchronously.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_override(path: &Path) -> Result<Option<ResolvedConfig>, OverrideError> {
    let content = std::fs::read_to_string(path).map_err(|e| OverrideError::io(path, e))?;
    parse_override(path, &content)
}

/// Candidate override paths under `root`, in lookup order.
#[must_use]
pub fn candidates(root: &Path) -> Vec<PathBuf> {
    BASENAMES
        .iter()
        .flat_map(|base| EXTENSIONS.iter().map(move |ext| root.join(format!("{base}.{ext}"))))
        .collect()
}

/// First existing override file under `root`.
#[must_use]
pub fn find_override_file(root: &Path) -> Option<PathBuf> {
    candidates(root).into_iter().find(|p| p.is_file())
}
