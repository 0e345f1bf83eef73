//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::markup::Span;
use crate::rule::Rule;
use crate::types::{Location, Violation};

/// Context provided to per-document rules.
#[derive(Debug, Clone)]
pub struct DocumentContext<'a> {
    /// Absolute path to the document.
    pub path: &'a Path,
    /// Document contents.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> DocumentContext<'a> {
    /// Creates a new document context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Builds a location in this document from a markup span.
    #[must_use]
    pub fn location(&self, span: Span) -> Location {
        Location::from_span(self.relative_path.clone(), span)
    }

    /// Builds a violation of `rule` at `span` with the rule's default severity.
    #[must_use]
    pub fn violation<R: Rule + ?Sized>(
        &self,
        rule: &R,
        span: Span,
        message: impl Into<String>,
    ) -> Violation {
        Violation::new(
            rule.code(),
            rule.name(),
            rule.default_severity(),
            self.location(span),
            message,
        )
    }
}
