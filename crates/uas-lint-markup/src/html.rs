//! HTML and Vue template extractor using Tree-sitter.

use std::borrow::Cow;

use tracing::warn;
use tree_sitter::{Language, Node, Parser};
use uas_lint_core::{MarkupAttribute, MarkupElement, Span, TemplateExtractor};

use crate::directive::{decode, AttributeKind};

/// Extracts elements from `.vue` templates and `.html` documents.
///
/// For `.vue` files only elements nested in top-level `<template>` blocks
/// are returned; `<script>` and `<style>` blocks are never visited.
pub struct HtmlTemplateExtractor {
    language: Language,
}

impl HtmlTemplateExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_html::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn span(node: &Node<'_>) -> Span {
        let start = node.start_position();
        Span::new(
            node.start_byte(),
            node.end_byte() - node.start_byte(),
            start.row + 1,
            start.column + 1,
        )
    }

    /// The `start_tag` or `self_closing_tag` child of an `element`.
    fn open_tag<'t>(element: &Node<'t>) -> Option<Node<'t>> {
        let mut cursor = element.walk();
        let tag = element
            .children(&mut cursor)
            .find(|child| matches!(child.kind(), "start_tag" | "self_closing_tag"));
        tag
    }

    fn tag_name<'a>(tag: &Node<'_>, src: &'a [u8]) -> Option<&'a str> {
        let mut cursor = tag.walk();
        let name = tag
            .children(&mut cursor)
            .find(|child| child.kind() == "tag_name")
            .map(|child| Self::text(&child, src));
        name
    }

    fn attribute_value(attribute: &Node<'_>, src: &[u8]) -> Option<String> {
        let mut cursor = attribute.walk();
        for child in attribute.children(&mut cursor) {
            match child.kind() {
                "attribute_value" => return Some(Self::text(&child, src).to_owned()),
                "quoted_attribute_value" => {
                    let mut inner_cursor = child.walk();
                    let inner = child
                        .children(&mut inner_cursor)
                        .find(|c| c.kind() == "attribute_value")
                        .map_or_else(String::new, |c| Self::text(&c, src).to_owned());
                    return Some(inner);
                }
                _ => {}
            }
        }
        None
    }

    fn convert_attribute(attribute: &Node<'_>, src: &[u8]) -> Option<MarkupAttribute> {
        let mut cursor = attribute.walk();
        let name_node = attribute
            .children(&mut cursor)
            .find(|child| child.kind() == "attribute_name")?;
        let raw_name = Self::text(&name_node, src);
        let span = Self::span(attribute);

        Some(match decode(raw_name) {
            AttributeKind::Literal(name) => {
                let value = Self::attribute_value(attribute, src);
                MarkupAttribute::literal(name, value.as_deref(), span)
            }
            AttributeKind::Directive { name, argument } => {
                MarkupAttribute::bound(name, argument, span)
            }
        })
    }

    fn convert_element(element: &Node<'_>, src: &[u8]) -> Option<MarkupElement> {
        let tag = Self::open_tag(element)?;
        let name = Self::tag_name(&tag, src)?;

        let mut converted = MarkupElement::new(name, Self::span(&tag));
        let mut cursor = tag.walk();
        for child in tag.children(&mut cursor) {
            if child.kind() == "attribute" {
                if let Some(attribute) = Self::convert_attribute(&child, src) {
                    converted.attributes.push(attribute);
                }
            }
        }
        Some(converted)
    }

    /// Pushes every element below `node` in document order.
    ///
    /// `ERROR` nodes are entered too, so one malformed fragment does not
    /// hide the elements after it.
    fn collect_descendants(node: &Node<'_>, src: &[u8], out: &mut Vec<MarkupElement>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "element" => {
                    if let Some(element) = Self::convert_element(&child, src) {
                        out.push(element);
                    }
                    Self::collect_descendants(&child, src, out);
                }
                "ERROR" => Self::collect_descendants(&child, src, out),
                _ => {}
            }
        }
    }

    fn collect_vue_templates(root: &Node<'_>, src: &[u8], out: &mut Vec<MarkupElement>) {
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            let is_template = child.kind() == "element"
                && Self::open_tag(&child)
                    .and_then(|tag| Self::tag_name(&tag, src))
                    .is_some_and(|name| name.eq_ignore_ascii_case("template"));
            if is_template {
                Self::collect_descendants(&child, src, out);
            } else if child.kind() == "ERROR" {
                Self::collect_vue_templates(&child, src, out);
            }
        }
    }
}

impl Default for HtmlTemplateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateExtractor for HtmlTemplateExtractor {
    fn language_id(&self) -> &'static str {
        "vue"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".vue", ".html"]
    }

    fn extract(&self, source: &str, extension: &str) -> Vec<MarkupElement> {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&self.language) {
            warn!("Failed to load HTML grammar: {e}");
            return Vec::new();
        }

        // Parse the masked text, read names and values from the original;
        // byte offsets are identical in both.
        let masked = mask_interpolations(source);
        let src = source.as_bytes();
        let Some(tree) = parser.parse(masked.as_bytes(), None) else {
            warn!("Tree-sitter returned no tree");
            return Vec::new();
        };
        let root = tree.root_node();

        let mut elements = Vec::new();
        if extension == ".vue" {
            Self::collect_vue_templates(&root, src, &mut elements);
        } else {
            Self::collect_descendants(&root, src, &mut elements);
        }
        elements
    }
}

/// Blanks `{{ ... }}` interpolations so expressions such as `a < b` are
/// not read as tags. Line breaks are kept, every other byte becomes a space.
fn mask_interpolations(source: &str) -> Cow<'_, str> {
    if !source.contains("{{") {
        return Cow::Borrowed(source);
    }

    let mut bytes = source.as_bytes().to_vec();
    let mut from = 0;
    while let Some(open) = source[from..].find("{{") {
        let start = from + open;
        let Some(close) = source[start + 2..].find("}}") else {
            break;
        };
        let end = start + 2 + close + 2;
        for byte in &mut bytes[start..end] {
            if !matches!(*byte, b'\n' | b'\r') {
                *byte = b' ';
            }
        }
        from = end;
    }

    // Whole characters were replaced, so this cannot fail.
    String::from_utf8(bytes).map_or(Cow::Borrowed(source), Cow::Owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uas_lint_core::attribute::{attribute_name, is_empty};

    fn extract_vue(src: &str) -> Vec<MarkupElement> {
        HtmlTemplateExtractor::new().extract(src, ".vue")
    }

    fn names(element: &MarkupElement) -> Vec<&str> {
        element.attributes.iter().map(attribute_name).collect()
    }

    #[test]
    fn extracts_template_elements_only() {
        let elements = extract_vue(
            r#"<template>
  <div class="form">
    <el-input maxlength="50" />
  </div>
</template>

<script setup>
const limit = 10
</script>

<style scoped>
.form { color: red; }
</style>
"#,
        );
        let tags: Vec<_> = elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["div", "el-input"]);
    }

    #[test]
    fn comparison_inside_interpolation_keeps_later_elements() {
        let src = "<template>\n  <div>{{ count < 10 ? 'a' : 'b' }}</div>\n  <el-input />\n</template>\n";
        let elements = extract_vue(src);
        let tags: Vec<_> = elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["div", "el-input"]);

        let span = elements[1].span;
        assert_eq!((span.line, span.column), (3, 3));
        assert_eq!(&src[span.offset..span.offset + span.length], "<el-input />");
    }

    #[test]
    fn masking_preserves_offsets_and_lines() {
        let src = "<p>{{ a <\n b }}</p>{{ é }}";
        let masked = mask_interpolations(src);
        assert_eq!(masked.len(), src.len());
        assert_eq!(masked, "<p>      \n     </p>        ");
        assert!(matches!(mask_interpolations("<p>x</p>"), Cow::Borrowed(_)));
        assert_eq!(mask_interpolations("{{ open"), "{{ open");
    }

    #[test]
    fn spans_are_one_indexed() {
        let src = "<template>\n  <el-input />\n</template>\n";
        let elements = extract_vue(src);
        let span = elements[0].span;
        assert_eq!((span.line, span.column), (2, 3));
        assert_eq!(&src[span.offset..span.offset + span.length], "<el-input />");
    }

    #[test]
    fn decodes_literal_and_bound_attributes() {
        let elements = extract_vue(
            r#"<template>
  <el-input :maxlength="limit" show-word-limit placeholder="" v-model="value" @input="onInput" />
</template>
"#,
        );
        let input = &elements[0];
        assert_eq!(
            names(input),
            ["maxlength", "show-word-limit", "placeholder", "", ""]
        );
        assert!(!is_empty(&input.attributes[0]));
        assert!(is_empty(&input.attributes[1]));
        assert!(is_empty(&input.attributes[2]));
        assert!(matches!(
            &input.attributes[3],
            MarkupAttribute::Bound { directive_name, argument_name: None, .. } if directive_name == "model"
        ));
    }

    #[test]
    fn literal_values_are_kept_raw() {
        let elements = extract_vue("<template><el-input maxlength=50 title=' x ' /></template>");
        match &elements[0].attributes[..] {
            [MarkupAttribute::Literal { raw_value: a, .. }, MarkupAttribute::Literal { raw_value: b, .. }] => {
                assert_eq!(a.as_deref(), Some("50"));
                assert_eq!(b.as_deref(), Some(" x "));
            }
            other => panic!("unexpected attributes: {other:?}"),
        }
    }

    #[test]
    fn nested_templates_are_walked_in_document_order() {
        let elements = extract_vue(
            r#"<template>
  <el-form>
    <template v-if="show">
      <el-input />
    </template>
    <ElInput />
  </el-form>
</template>
"#,
        );
        let tags: Vec<_> = elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["el-form", "template", "el-input", "ElInput"]);
    }

    #[test]
    fn html_documents_report_every_element() {
        let elements = HtmlTemplateExtractor::new().extract(
            "<html><body><el-input maxlength=\"1\"></el-input></body></html>",
            ".html",
        );
        let tags: Vec<_> = elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, ["html", "body", "el-input"]);
    }

    #[test]
    fn vue_without_template_is_empty() {
        assert!(extract_vue("<script>export default {}</script>").is_empty());
    }
}
