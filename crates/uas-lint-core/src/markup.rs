//! Read-only view of a markup document.
//!
//! Parsing is not done here. A [`TemplateExtractor`] (see `uas-lint-markup`)
//! turns source text into a flat, document-ordered list of
//! [`MarkupElement`]s that rules consume.

use serde::{Deserialize, Serialize};

/// Position of a node in the source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first character.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(offset: usize, length: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            length,
            line,
            column,
        }
    }
}

/// One attribute node of an element's start tag.
///
/// Literal attributes carry their raw text; bound attributes are directive
/// expressions evaluated at runtime, so only their directive name and
/// static argument are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MarkupAttribute {
    /// `name="value"` or a bare `name`.
    Literal {
        /// Attribute name as written.
        name: String,
        /// Raw value; `None` when the attribute has no value node.
        raw_value: Option<String>,
        /// Location of the whole attribute.
        span: Span,
    },
    /// A directive such as `:maxlength="limit"` or `@click="go"`.
    Bound {
        /// Directive name without the `v-` prefix (`bind`, `on`, `model`, ...).
        directive_name: String,
        /// Static argument, e.g. `maxlength` in `:maxlength`.
        argument_name: Option<String>,
        /// Location of the whole attribute.
        span: Span,
    },
}

impl MarkupAttribute {
    /// Creates a literal attribute.
    #[must_use]
    pub fn literal(name: impl Into<String>, raw_value: Option<&str>, span: Span) -> Self {
        Self::Literal {
            name: name.into(),
            raw_value: raw_value.map(String::from),
            span,
        }
    }

    /// Creates a bound (directive) attribute.
    #[must_use]
    pub fn bound(
        directive_name: impl Into<String>,
        argument_name: Option<&str>,
        span: Span,
    ) -> Self {
        Self::Bound {
            directive_name: directive_name.into(),
            argument_name: argument_name.map(String::from),
            span,
        }
    }

    /// Returns the attribute's location.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. } | Self::Bound { span, .. } => *span,
        }
    }
}

/// A single element of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupElement {
    /// Tag name as written (`el-input`, `ElInput`, ...).
    pub tag: String,
    /// Start-tag attributes in source order.
    pub attributes: Vec<MarkupAttribute>,
    /// Location of the start tag.
    pub span: Span,
}

impl MarkupElement {
    /// Creates an element with no attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>, span: Span) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            span,
        }
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: MarkupAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Turns document source into markup elements.
///
/// Implement this to plug a parser into the [`Analyzer`](crate::Analyzer).
/// Elements must be returned in document order.
pub trait TemplateExtractor: Send + Sync {
    /// Language identifier (e.g., `"vue"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".vue"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts every element of the document's template.
    ///
    /// `extension` is the document's extension with the leading dot, so one
    /// extractor can treat `.vue` and `.html` differently.
    fn extract(&self, source: &str, extension: &str) -> Vec<MarkupElement>;
}
