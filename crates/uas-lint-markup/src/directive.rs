//! Vue directive attribute names.
//!
//! | Written | Directive | Argument |
//! |---------|-----------|----------|
//! | `:maxlength`, `v-bind:maxlength`, `.value` | `bind` | `maxlength` / `value` |
//! | `@click.stop`, `v-on:click` | `on` | `click` |
//! | `#default`, `v-slot:default` | `slot` | `default` |
//! | `v-model`, `v-model:title.trim` | `model` | none / `title` |
//! | `:[key]` | `bind` | none (dynamic) |

/// Classification of a raw attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind<'a> {
    /// A plain attribute; the name as written.
    Literal(&'a str),
    /// A directive with its name (no `v-` prefix) and static argument.
    Directive {
        /// Directive name (`bind`, `on`, `slot`, `model`, `if`, ...).
        name: &'a str,
        /// Static argument with modifiers stripped.
        argument: Option<&'a str>,
    },
}

/// Decodes a raw attribute name.
///
/// ```
/// use uas_lint_markup::{decode, AttributeKind};
///
/// assert_eq!(
///     decode(":maxlength"),
///     AttributeKind::Directive { name: "bind", argument: Some("maxlength") }
/// );
/// assert_eq!(decode("maxlength"), AttributeKind::Literal("maxlength"));
/// ```
#[must_use]
pub fn decode(raw: &str) -> AttributeKind<'_> {
    if let Some(rest) = raw.strip_prefix("v-") {
        return decode_long_form(raw, rest);
    }
    match raw.as_bytes().first() {
        Some(b':' | b'.') if raw.len() > 1 => shorthand("bind", &raw[1..]),
        Some(b'@') if raw.len() > 1 => shorthand("on", &raw[1..]),
        Some(b'#') if raw.len() > 1 => shorthand("slot", &raw[1..]),
        _ => AttributeKind::Literal(raw),
    }
}

fn shorthand<'a>(name: &'a str, rest: &'a str) -> AttributeKind<'a> {
    AttributeKind::Directive {
        name,
        argument: argument(rest),
    }
}

fn decode_long_form<'a>(raw: &'a str, rest: &'a str) -> AttributeKind<'a> {
    let (head, arg) = match rest.split_once(':') {
        Some((head, arg)) => (head, Some(arg)),
        None => (rest, None),
    };
    let name = head.split('.').next().unwrap_or_default();
    if name.is_empty() {
        return AttributeKind::Literal(raw);
    }
    AttributeKind::Directive {
        name,
        argument: arg.and_then(argument),
    }
}

/// Static argument with modifiers removed; `None` for dynamic or empty ones.
fn argument(raw: &str) -> Option<&str> {
    if raw.starts_with('[') {
        return None;
    }
    raw.split('.').next().filter(|arg| !arg.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive<'a>(name: &'a str, argument: Option<&'a str>) -> AttributeKind<'a> {
        AttributeKind::Directive { name, argument }
    }

    #[test]
    fn plain_attributes() {
        assert_eq!(decode("maxlength"), AttributeKind::Literal("maxlength"));
        assert_eq!(decode("show-word-limit"), AttributeKind::Literal("show-word-limit"));
        assert_eq!(decode("data-v"), AttributeKind::Literal("data-v"));
    }

    #[test]
    fn bind_forms() {
        assert_eq!(decode(":maxlength"), directive("bind", Some("maxlength")));
        assert_eq!(decode("v-bind:maxlength"), directive("bind", Some("maxlength")));
        assert_eq!(decode(".value"), directive("bind", Some("value")));
        assert_eq!(decode(":title.camel"), directive("bind", Some("title")));
        assert_eq!(decode("v-bind"), directive("bind", None));
    }

    #[test]
    fn dynamic_argument_has_no_name() {
        assert_eq!(decode(":[key]"), directive("bind", None));
        assert_eq!(decode("v-bind:[key]"), directive("bind", None));
    }

    #[test]
    fn event_and_slot_forms() {
        assert_eq!(decode("@click.stop"), directive("on", Some("click")));
        assert_eq!(decode("v-on:input"), directive("on", Some("input")));
        assert_eq!(decode("#default"), directive("slot", Some("default")));
        assert_eq!(decode("v-slot:header"), directive("slot", Some("header")));
    }

    #[test]
    fn other_directives() {
        assert_eq!(decode("v-model"), directive("model", None));
        assert_eq!(decode("v-model.trim"), directive("model", None));
        assert_eq!(decode("v-model:title.trim"), directive("model", Some("title")));
        assert_eq!(decode("v-if"), directive("if", None));
    }

    #[test]
    fn degenerate_names_stay_literal() {
        assert_eq!(decode(":"), AttributeKind::Literal(":"));
        assert_eq!(decode("@"), AttributeKind::Literal("@"));
        assert_eq!(decode("v-"), AttributeKind::Literal("v-"));
        assert_eq!(decode("v-:x"), AttributeKind::Literal("v-:x"));
    }
}
