// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive, style-baking node clone.

use snapdrag_dom::{Document, NodeKind, SVG_NAMESPACE};

use crate::tables::{HTML_ATTRIBUTES, SVG_ATTRIBUTES, SVG_TAG_NAMES, is_icon_class};

/// What a clone keeps besides resolved styles.
///
/// The default keeps the clone visually faithful and behaviorally inert: only
/// the attributes that affect rendering and only icon-font class names are
/// carried over, so ids, data attributes, and state classes stay on the source.
#[derive(Copy, Clone, Debug)]
pub struct CloneOptions {
    /// Attributes copied from non-SVG elements.
    pub html_attributes: &'static [&'static str],
    /// Attributes copied from SVG elements.
    pub svg_attributes: &'static [&'static str],
    /// Class names of non-SVG elements for which this returns `true` are copied.
    pub keep_class: fn(&str) -> bool,
    /// Create elements whose tag is a known SVG tag in the SVG namespace.
    pub svg_namespace: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            html_attributes: HTML_ATTRIBUTES,
            svg_attributes: SVG_ATTRIBUTES,
            keep_class: is_icon_class,
            svg_namespace: true,
        }
    }
}

impl CloneOptions {
    /// Copy resolved styles and nothing else; every element lands in the default namespace.
    pub fn styles_only() -> Self {
        Self {
            html_attributes: &[],
            svg_attributes: &[],
            keep_class: |_| false,
            svg_namespace: false,
        }
    }
}

/// Clone `node` and its subtree with the default [`CloneOptions`].
///
/// See [`clone_node_with`].
pub fn clone_node<D: Document>(doc: &mut D, node: &D::Node) -> Option<D::Node> {
    clone_node_with(doc, node, &CloneOptions::default())
}

/// Clone `node` and its subtree into new, detached nodes of `doc`.
///
/// - Elements get the same tag (in the SVG namespace for SVG tags), every
///   resolved style property baked into their inline style, and the attributes
///   and classes allowed by `options`.
/// - Text nodes get the same text.
/// - Any other node kind is not cloned: the failure is logged and `None` is
///   returned. Unsupported children are skipped; their siblings are still cloned.
///
/// Children are cloned depth-first and appended in document order.
pub fn clone_node_with<D: Document>(
    doc: &mut D,
    node: &D::Node,
    options: &CloneOptions,
) -> Option<D::Node> {
    match doc.node_kind(node) {
        NodeKind::Element => Some(clone_element(doc, node, options)),
        NodeKind::Text => {
            let text = doc.text_content(node).unwrap_or_default();
            Some(doc.create_text_node(&text))
        }
        NodeKind::Other(node_type) => {
            tracing::error!(?node, node_type, "unhandled node kind; not cloned");
            None
        }
    }
}

fn clone_element<D: Document>(doc: &mut D, original: &D::Node, options: &CloneOptions) -> D::Node {
    let tag = doc.tag_name(original).unwrap_or_default();
    let is_svg = options.svg_namespace && is_svg_element(doc, original, &tag);
    let clone = doc.create_element(&tag, is_svg.then_some(SVG_NAMESPACE));

    for (name, value) in doc.computed_style(original) {
        if is_index_key(&name) {
            continue;
        }
        doc.set_style_property(&clone, &name, &value);
    }

    if is_svg {
        copy_attributes(doc, original, &clone, options.svg_attributes);
    } else {
        for class in doc.class_list(original) {
            if (options.keep_class)(&class) {
                doc.add_class(&clone, &class);
            }
        }
        copy_attributes(doc, original, &clone, options.html_attributes);
    }

    for child in doc.child_nodes(original) {
        let Some(child_clone) = clone_node_with(doc, &child, options) else {
            continue;
        };
        if let Err(err) = doc.append_child(&clone, &child_clone) {
            tracing::debug!(?child, %err, "could not append cloned child");
        }
    }

    clone
}

fn copy_attributes<D: Document>(
    doc: &mut D,
    from: &D::Node,
    to: &D::Node,
    names: &[&str],
) {
    for name in names {
        if let Some(value) = doc.attribute(from, name) {
            doc.set_attribute(to, name, &value);
        }
    }
}

/// A known SVG tag, unless the host says the element lives in another namespace.
///
/// The match is exact: hosts report HTML tag names uppercased and SVG tag names
/// as written, so an HTML `A` never matches the SVG `a`.
fn is_svg_element<D: Document>(doc: &D, node: &D::Node, tag: &str) -> bool {
    SVG_TAG_NAMES.contains(&tag)
        && doc
            .namespace_uri(node)
            .is_none_or(|namespace| namespace == SVG_NAMESPACE)
}

/// Array-index keys of a style enumeration (`"0"`, `"17"`), not property names.
fn is_index_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;
    use snapdrag_dom::{MemoryDocument, XHTML_NAMESPACE};

    #[test]
    fn index_keys_are_digits_only() {
        assert!(is_index_key("0"));
        assert!(is_index_key("42"));
        assert!(!is_index_key(""));
        assert!(!is_index_key("z-index"));
        assert!(!is_index_key("1a"));
    }

    #[test]
    fn svg_detection_is_exact_and_respects_reported_namespace() {
        let mut doc = MemoryDocument::new();
        let svg_link = doc.create_element("a", Some(SVG_NAMESPACE));
        let html_link = doc.create_element("a", Some(XHTML_NAMESPACE));
        let unknown = doc.create_element("circle", None);
        let upper = doc.create_element("DIV", None);
        let upper_link = doc.create_element("A", Some(XHTML_NAMESPACE));
        let upper_svg = doc.create_element("CIRCLE", Some(SVG_NAMESPACE));
        let bare_upper_link = doc.create_element("A", None);

        assert!(is_svg_element(&doc, &svg_link, "a"));
        assert!(!is_svg_element(&doc, &html_link, "a"));
        assert!(is_svg_element(&doc, &unknown, "circle"));
        assert!(!is_svg_element(&doc, &upper, "DIV"));
        assert!(!is_svg_element(&doc, &upper_link, "A"));
        assert!(!is_svg_element(&doc, &bare_upper_link, "A"));
        assert!(!is_svg_element(&doc, &upper_svg, "CIRCLE"));
    }

    #[test]
    fn styles_only_copies_no_attributes_or_classes() {
        let mut doc = MemoryDocument::new();
        let img = doc.create_element("img", None);
        doc.set_attribute(&img, "src", "a.png");
        doc.add_class(&img, "fa");
        doc.set_resolved_style(img, "color", "red");

        let clone = clone_node_with(&mut doc, &img, &CloneOptions::styles_only()).unwrap();
        assert_eq!(doc.attribute(&clone, "src"), None);
        assert!(doc.class_list(&clone).is_empty());
        assert_eq!(doc.inline_style(&clone, "color").as_deref(), Some("red"));
    }

    #[test]
    fn styles_only_keeps_svg_tags_in_default_namespace() {
        let mut doc = MemoryDocument::new();
        let svg = doc.create_element("svg", Some(SVG_NAMESPACE));
        let clone = clone_node_with(&mut doc, &svg, &CloneOptions::styles_only()).unwrap();
        assert_eq!(doc.namespace_uri(&clone), None);
    }

    #[test]
    fn index_entries_never_reach_the_clone() {
        let mut doc = MemoryDocument::new();
        let node = doc.create_element("div", None);
        doc.set_resolved_style(node, "color", "red");
        let clone = clone_node(&mut doc, &node).unwrap();

        let names: Vec<String> = doc
            .computed_style(&clone)
            .into_iter()
            .map(|(name, _)| name)
            .filter(|name| !is_index_key(name))
            .collect();
        assert_eq!(names, ["color"]);
        assert_eq!(doc.inline_style(&clone, "0"), None);
    }
}
