//! Attribute classification.
//!
//! Static emptiness only applies to literal values. A bound expression is
//! computed at runtime and always counts as present.

use crate::markup::MarkupAttribute;

/// Directive name of a property binding (`:x` / `v-bind:x`).
pub const BIND_DIRECTIVE: &str = "bind";

/// Returns the logical attribute name, or `""` when the node does not name
/// an attribute (event handlers, `v-if`, dynamic bindings, ...).
#[must_use]
pub fn attribute_name(attr: &MarkupAttribute) -> &str {
    match attr {
        MarkupAttribute::Literal { name, .. } => name,
        MarkupAttribute::Bound {
            directive_name,
            argument_name: Some(argument),
            ..
        } if directive_name == BIND_DIRECTIVE => argument,
        MarkupAttribute::Bound { .. } => "",
    }
}

/// Returns `true` when the attribute is declared without a usable value.
///
/// Bound attributes are never empty. A literal is empty when it has no value
/// or its value is blank after trimming.
#[must_use]
pub fn is_empty(attr: &MarkupAttribute) -> bool {
    match attr {
        MarkupAttribute::Bound { .. } => false,
        MarkupAttribute::Literal { raw_value, .. } => {
            raw_value.as_deref().map_or(true, |v| v.trim().is_empty())
        }
    }
}

/// Finds the first attribute named `name`.
#[must_use]
pub fn find_attribute<'a>(attrs: &'a [MarkupAttribute], name: &str) -> Option<&'a MarkupAttribute> {
    attrs.iter().find(|attr| attribute_name(attr) == name)
}
