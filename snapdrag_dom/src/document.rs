// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Document`] trait and node classification.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

use crate::DomError;

/// Namespace URI of SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Namespace URI of HTML elements.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Coarse classification of a node, following the DOM `nodeType` numbering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An element (`nodeType` 1).
    Element,
    /// A text node (`nodeType` 3).
    Text,
    /// Any other node (comments, processing instructions, documents, ...).
    ///
    /// Carries the raw `nodeType` value.
    Other(u16),
}

impl NodeKind {
    /// DOM `nodeType` of comment nodes.
    pub const COMMENT_NODE: u16 = 8;

    /// Classify a raw DOM `nodeType` value.
    pub const fn from_node_type(node_type: u16) -> Self {
        match node_type {
            1 => Self::Element,
            3 => Self::Text,
            other => Self::Other(other),
        }
    }

    /// The DOM `nodeType` value of this kind.
    pub const fn node_type(self) -> u16 {
        match self {
            Self::Element => 1,
            Self::Text => 3,
            Self::Other(node_type) => node_type,
        }
    }
}

/// Everything snapdrag consumes from the host document.
///
/// Implementations are expected to follow DOM semantics:
///
/// - [`append_child`](Self::append_child) moves a child that already has a
///   parent; a node never appears twice in the tree.
/// - [`computed_style`](Self::computed_style) returns the raw enumeration of the
///   resolved style declaration. Like a browser `CSSStyleDeclaration`, it may
///   contain array-index keys (`"0" -> "color"`) next to the named entries
///   (`"color" -> "rgb(255, 0, 0)"`). Consumers filter what they need.
/// - [`bounding_client_rect`](Self::bounding_client_rect) is in viewport
///   coordinates, the same space as pointer client positions.
///
/// Handles are compared by equality; two handles are the same node exactly when
/// they compare equal. Holding a handle never keeps a node alive.
pub trait Document {
    /// Handle of a node in this document.
    type Node: Clone + Eq + Hash + Debug;

    /// Returns `true` while `node` refers to a live node of this document.
    fn is_alive(&self, node: &Self::Node) -> bool;

    /// Classify `node`.
    fn node_kind(&self, node: &Self::Node) -> NodeKind;

    /// Tag name of an element, `None` for other node kinds.
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    /// Namespace URI of an element, if the host reports one.
    fn namespace_uri(&self, node: &Self::Node) -> Option<String>;

    /// Text content of a text node, `None` for other node kinds.
    fn text_content(&self, node: &Self::Node) -> Option<String>;

    /// Children of `node` in document order.
    fn child_nodes(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Parent of `node`, if attached.
    fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Raw enumeration of the resolved style of an element.
    fn computed_style(&self, node: &Self::Node) -> Vec<(String, String)>;

    /// Value of an inline style property.
    fn inline_style(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an inline style property.
    fn set_style_property(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Value of an attribute.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Class names of an element, in order.
    fn class_list(&self, node: &Self::Node) -> Vec<String>;

    /// Add a class name to an element. Adding an existing class is a no-op.
    fn add_class(&mut self, node: &Self::Node, class: &str);

    /// Create a detached element, optionally in `namespace`.
    fn create_element(&mut self, tag: &str, namespace: Option<&str>) -> Self::Node;

    /// Create a detached text node.
    fn create_text_node(&mut self, text: &str) -> Self::Node;

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Detach `child` from `parent`.
    ///
    /// Fails with [`DomError::NotAChild`] when `child` is not a child of `parent`.
    fn remove_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Bounding box of `node` in viewport coordinates.
    fn bounding_client_rect(&self, node: &Self::Node) -> Rect;

    /// Default mount point for overlays.
    fn body(&self) -> Self::Node;

    /// Whether input listeners accept an explicit `passive` option.
    ///
    /// Hosts that cannot configure passiveness keep the default.
    fn supports_passive_listeners(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_round_trips_known_types() {
        assert_eq!(NodeKind::from_node_type(1), NodeKind::Element);
        assert_eq!(NodeKind::from_node_type(3), NodeKind::Text);
        assert_eq!(
            NodeKind::from_node_type(NodeKind::COMMENT_NODE),
            NodeKind::Other(8)
        );
        assert_eq!(NodeKind::Other(9).node_type(), 9);
    }
}
