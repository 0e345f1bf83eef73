//! Component name normalization.
//!
//! Components are written as `el-input`, `ElInput` or `EL_INPUT` depending
//! on where they appear. All of them collapse to one comparison key through
//! [`normalize`].

use std::collections::BTreeSet;

/// Returns the canonical comparison key for a component name.
///
/// Drops every character outside `[A-Za-z0-9]` and lower-cases the rest.
/// The result is idempotent: `normalize(normalize(s)) == normalize(s)`.
///
/// ```
/// use uas_lint_core::naming::normalize;
///
/// assert_eq!(normalize("el-input"), "elinput");
/// assert_eq!(normalize("ElInput"), normalize("EL_INPUT"));
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Converts `ElInputNumber` / `el_input` to `el-input-number` / `el-input`.
#[must_use]
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        if c == '_' {
            out.push('-');
        } else {
            out.extend(c.to_lowercase());
        }
        prev = Some(c);
    }
    out
}

/// Converts `el-input` / `el_input` to `ElInput`.
///
/// Only the first letter of each segment is touched.
#[must_use]
pub fn to_pascal_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect()
}

/// Expands a name into the raw trimmed form, its kebab-case form and its
/// declared (Pascal) form.
///
/// Blank input yields an empty set.
#[must_use]
pub fn expand_variants(name: &str) -> BTreeSet<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return BTreeSet::new();
    }
    [
        trimmed.to_string(),
        to_kebab_case(trimmed),
        to_pascal_case(trimmed),
    ]
    .into_iter()
    .filter(|variant| !variant.is_empty())
    .collect()
}

/// Normalized keys of every variant of `name`. Empty keys are dropped.
#[must_use]
pub fn normalized_variants(name: &str) -> BTreeSet<String> {
    expand_variants(name)
        .iter()
        .map(|variant| normalize(variant))
        .filter(|key| !key.is_empty())
        .collect()
}
