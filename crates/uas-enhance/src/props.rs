//! Render-time prop resolution.
//!
//! ```text
//! rule.defaults ─┐
//! passed attrs ──┼─▶ ordered merge ─▶ transform? ─▶ placeholder? ─▶ props
//! explicit props ┘
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A bag of component props.
pub type Props = serde_json::Map<String, Value>;

/// Rules keyed by component name, as written by the user.
pub type UiRules = BTreeMap<String, UiRule>;

/// Text used when no custom placeholder generator is configured.
pub const DEFAULT_PLACEHOLDER_TEMPLATE: &str = "请输入{label}";

/// Placeholder generation policy.
#[derive(Clone, Default)]
pub enum AutoPlaceholder {
    /// Never synthesize a placeholder.
    #[default]
    Disabled,
    /// Use [`DEFAULT_PLACEHOLDER_TEMPLATE`].
    Default,
    /// Replace `{label}` in the given template.
    Template(String),
    /// Compute the text from the label.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl AutoPlaceholder {
    /// Wraps a label-to-text function.
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Returns `true` unless disabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Placeholder text for `label`, or `None` when disabled.
    #[must_use]
    pub fn text(&self, label: &str) -> Option<String> {
        match self {
            Self::Disabled => None,
            Self::Default => Some(DEFAULT_PLACEHOLDER_TEMPLATE.replace("{label}", label)),
            Self::Template(template) => Some(template.replace("{label}", label)),
            Self::Custom(f) => Some(f(label)),
        }
    }
}

impl From<bool> for AutoPlaceholder {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Default
        } else {
            Self::Disabled
        }
    }
}

impl fmt::Debug for AutoPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Default => f.write_str("Default"),
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

type Transform = Arc<dyn Fn(Props) -> Props + Send + Sync>;

/// How one component is enhanced at render time.
#[derive(Clone, Default)]
pub struct UiRule {
    defaults: Props,
    auto_placeholder: AutoPlaceholder,
    transform: Option<Transform>,
}

impl UiRule {
    /// Creates a rule that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one default prop.
    #[must_use]
    pub fn default_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Replaces all default props.
    #[must_use]
    pub fn defaults(mut self, defaults: Props) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the placeholder policy.
    #[must_use]
    pub fn auto_placeholder(mut self, policy: impl Into<AutoPlaceholder>) -> Self {
        self.auto_placeholder = policy.into();
        self
    }

    /// Sets a transform that replaces the merged props wholesale.
    #[must_use]
    pub fn transform(mut self, f: impl Fn(Props) -> Props + Send + Sync + 'static) -> Self {
        self.transform = Some(Arc::new(f));
        self
    }

    // ── Accessors ──

    /// Default props.
    #[must_use]
    pub fn default_props(&self) -> &Props {
        &self.defaults
    }

    /// Placeholder policy.
    #[must_use]
    pub fn placeholder_policy(&self) -> &AutoPlaceholder {
        &self.auto_placeholder
    }

    /// Returns `true` when a transform is set.
    #[must_use]
    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }
}

impl fmt::Debug for UiRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiRule")
            .field("defaults", &self.defaults)
            .field("auto_placeholder", &self.auto_placeholder)
            .field("transform", &self.transform.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Resolves the props handed to the wrapped component.
///
/// Later layers overwrite earlier ones: `rule.defaults`, then
/// `passed_attrs`, then `explicit`. A transform replaces the merged map.
/// Placeholder synthesis runs last and only fills a falsy `placeholder`
/// when `label` is truthy.
///
/// There is no separate argument for the props the wrapper declares:
/// callers fold those into `explicit`, so a declared prop always wins over
/// a passed-through attribute of the same name.
#[must_use]
pub fn resolve_props(rule: &UiRule, passed_attrs: &Props, explicit: &Props) -> Props {
    let mut props = rule.defaults.clone();
    for layer in [passed_attrs, explicit] {
        props.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    if let Some(transform) = &rule.transform {
        props = transform(props);
    }

    if rule.auto_placeholder.is_enabled() && !is_truthy(props.get("placeholder")) {
        let label = props.get("label").filter(|v| is_truthy(Some(*v))).map(label_text);
        if let Some(text) = label.and_then(|label| rule.auto_placeholder.text(&label)) {
            props.insert("placeholder".to_string(), Value::String(text));
        }
    }

    props
}

/// Truthiness as the template runtime sees it.
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
