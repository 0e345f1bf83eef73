//! Flat lookup of component rules keyed by normalized name.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::model::{ComponentRule, RuleOptions};
use crate::naming::{normalize, normalized_variants};

/// Mapping from normalized component name to its rule.
///
/// Every alias of a rule points at the same shared instance. When two rules
/// produce the same key, the one registered last wins.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    by_key: HashMap<String, Arc<ComponentRule>>,
    rules: Vec<Arc<ComponentRule>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from rule options.
    ///
    /// Flat rules are registered before grouped rules, each in declaration
    /// order. Rules with no requirements or no usable name are dropped.
    #[must_use]
    pub fn build(options: &RuleOptions) -> Self {
        let mut registry = Self::new();
        for rule in options.flatten() {
            registry.register(rule);
        }
        registry
    }

    /// Registers one rule under all of its keys.
    ///
    /// Returns `false` when the rule was dropped.
    pub fn register(&mut self, rule: ComponentRule) -> bool {
        if rule.attributes().is_empty() {
            debug!("Dropping rule {rule}: no attribute requirements");
            return false;
        }

        let mut keys = normalized_variants(rule.component());
        keys.extend(
            rule.match_names()
                .iter()
                .map(|alias| normalize(alias))
                .filter(|key| !key.is_empty()),
        );

        if keys.is_empty() {
            debug!("Dropping rule {rule}: no usable name");
            return false;
        }

        let rule = Arc::new(rule);
        for key in keys {
            if let Some(previous) = self.by_key.insert(key.clone(), Arc::clone(&rule)) {
                debug!("Rule {rule} overrides {previous} for key `{key}`");
            }
        }
        self.rules.push(rule);
        true
    }

    /// Looks up the rule for a tag or component name in any convention.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Arc<ComponentRule>> {
        self.by_key.get(&normalize(name))
    }

    /// Looks up an already normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<ComponentRule>> {
        self.by_key.get(key)
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns `true` when nothing can ever match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Registered rules in registration order.
    #[must_use]
    pub fn rules(&self) -> &[Arc<ComponentRule>] {
        &self.rules
    }
}
