//! # uas-lint-markup
//!
//! Tree-sitter based template extraction.
//!
//! This crate turns `.vue` single-file components and `.html` documents
//! into the `uas-lint-core` markup view (`MarkupElement`,
//! `MarkupAttribute`). It provides:
//!
//! - [`HtmlTemplateExtractor`], a `TemplateExtractor` over `tree-sitter-html`
//! - [`directive::decode`] for Vue directive attribute names

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod directive;
pub mod html;

pub use directive::{decode, AttributeKind};
pub use html::HtmlTemplateExtractor;
