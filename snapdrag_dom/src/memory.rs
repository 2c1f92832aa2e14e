// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`Document`] implementation.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Rect;

use crate::{Document, DomError, NodeKind};

/// Identifier for a node in a [`MemoryDocument`].
///
/// This is a small, copyable handle consisting of a slot index and a generation
/// counter.
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On [`MemoryDocument::destroy`], the slot is freed; existing handles to it are stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Stale handles never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Generation of the slot this handle was issued for.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// Ordered name/value list; setting an existing name replaces it in place.
#[derive(Clone, Debug, Default)]
struct Declarations(Vec<(String, String)>);

impl Declarations {
    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, name: &str, value: &str) {
        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.0.push((name.to_string(), value.to_string())),
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[derive(Clone, Debug)]
enum Payload {
    Element {
        tag: String,
        namespace: Option<String>,
        resolved: Declarations,
        inline: Declarations,
        attributes: Declarations,
        classes: Vec<String>,
        rect: Rect,
    },
    Text(String),
    Other(u16),
}

#[derive(Clone, Debug)]
struct NodeData {
    payload: Payload,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

/// A complete, headless [`Document`].
///
/// Nodes live in a slot arena addressed by generational [`NodeId`]s. The host
/// (or a test) plays the role of the style engine and the layout engine:
///
/// - [`set_resolved_style`](Self::set_resolved_style) sets what the cascade resolved
///   for an element. The computed style is the resolved style overridden by the
///   element's inline style.
/// - [`set_layout_rect`](Self::set_layout_rect) sets the element's bounding box.
///
/// `create_element` stores the namespace exactly as given; no default
/// namespace is assigned.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    slots: Vec<Slot>,
    free: Vec<u32>,
    body: NodeId,
    passive_listeners: bool,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document containing only a `body` element.
    pub fn new() -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            body: NodeId::new(0, 1),
            passive_listeners: true,
        };
        doc.body = doc.alloc(Payload::Element {
            tag: "body".to_string(),
            namespace: None,
            resolved: Declarations::default(),
            inline: Declarations::default(),
            attributes: Declarations::default(),
            classes: Vec::new(),
            rect: Rect::ZERO,
        });
        doc
    }

    /// Number of live nodes, including the body.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.data.is_some()).count()
    }

    /// Always `false`: the body is always live.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Create a node of an arbitrary kind, such as a comment.
    pub fn create_other(&mut self, node_type: u16) -> NodeId {
        match NodeKind::from_node_type(node_type) {
            NodeKind::Element => self.create_element("div", None),
            NodeKind::Text => self.create_text_node(""),
            NodeKind::Other(node_type) => self.alloc(Payload::Other(node_type)),
        }
    }

    /// Set a property as resolved by the cascade for an element.
    pub fn set_resolved_style(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(Payload::Element { resolved, .. }) = self.payload_mut(node) {
            resolved.set(name, value);
        }
    }

    /// Set the bounding box of an element, in viewport coordinates.
    pub fn set_layout_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(Payload::Element { rect: r, .. }) = self.payload_mut(node) {
            *r = rect;
        }
    }

    /// Configure the answer of [`Document::supports_passive_listeners`].
    ///
    /// Defaults to `true`.
    pub fn set_passive_listener_support(&mut self, supported: bool) {
        self.passive_listeners = supported;
    }

    /// Borrow the children of `node` without allocating.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match self.data(node) {
            Some(d) => &d.children,
            None => &[],
        }
    }

    /// Detach `node` from its parent and free it together with its subtree.
    ///
    /// All handles into the subtree become stale. Destroying the body is ignored.
    pub fn destroy(&mut self, node: NodeId) {
        if node == self.body || !self.is_alive(&node) {
            return;
        }
        if let Some(parent) = self.data(node).and_then(|d| d.parent) {
            self.detach(parent, node);
        }
        let mut stack = Vec::from([node]);
        while let Some(id) = stack.pop() {
            if let Some(data) = self.slots[id.idx()].data.take() {
                stack.extend(data.children);
                self.free.push(id.0);
            }
        }
    }

    fn alloc(&mut self, payload: Payload) -> NodeId {
        let data = NodeData {
            payload,
            parent: None,
            children: Vec::new(),
        };
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.data = Some(data);
            NodeId::new(idx, slot.generation)
        } else {
            #[expect(clippy::cast_possible_truncation, reason = "slot count fits in u32")]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                data: Some(data),
            });
            NodeId::new(idx, 1)
        }
    }

    fn data(&self, node: NodeId) -> Option<&NodeData> {
        let slot = self.slots.get(node.idx())?;
        if slot.generation != node.generation() {
            return None;
        }
        slot.data.as_ref()
    }

    fn data_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        let slot = self.slots.get_mut(node.idx())?;
        if slot.generation != node.generation() {
            return None;
        }
        slot.data.as_mut()
    }

    fn payload_mut(&mut self, node: NodeId) -> Option<&mut Payload> {
        self.data_mut(node).map(|d| &mut d.payload)
    }

    fn detach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(p) = self.data_mut(parent) {
            p.children.retain(|c| *c != child);
        }
        if let Some(c) = self.data_mut(child) {
            c.parent = None;
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.data(id).and_then(|d| d.parent);
        }
        false
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn is_alive(&self, node: &NodeId) -> bool {
        self.data(*node).is_some()
    }

    fn node_kind(&self, node: &NodeId) -> NodeKind {
        match self.data(*node).map(|d| &d.payload) {
            Some(Payload::Element { .. }) => NodeKind::Element,
            Some(Payload::Text(_)) => NodeKind::Text,
            Some(Payload::Other(node_type)) => NodeKind::Other(*node_type),
            // A stale handle has no meaningful kind; report it as unsupported.
            None => NodeKind::Other(0),
        }
    }

    fn tag_name(&self, node: &NodeId) -> Option<String> {
        match &self.data(*node)?.payload {
            Payload::Element { tag, .. } => Some(tag.clone()),
            _ => None,
        }
    }

    fn namespace_uri(&self, node: &NodeId) -> Option<String> {
        match &self.data(*node)?.payload {
            Payload::Element { namespace, .. } => namespace.clone(),
            _ => None,
        }
    }

    fn text_content(&self, node: &NodeId) -> Option<String> {
        match &self.data(*node)?.payload {
            Payload::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn child_nodes(&self, node: &NodeId) -> Vec<NodeId> {
        self.children(*node).to_vec()
    }

    fn parent_node(&self, node: &NodeId) -> Option<NodeId> {
        self.data(*node)?.parent
    }

    fn computed_style(&self, node: &NodeId) -> Vec<(String, String)> {
        let Some(Payload::Element {
            resolved, inline, ..
        }) = self.data(*node).map(|d| &d.payload)
        else {
            return Vec::new();
        };
        let mut merged = resolved.clone();
        for (name, value) in inline.iter() {
            merged.set(name, value);
        }
        // Index entries first, then the named entries, like `CSSStyleDeclaration`.
        let mut out: Vec<(String, String)> = merged
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (format!("{i}"), name.to_string()))
            .collect();
        out.extend(merged.0);
        out
    }

    fn inline_style(&self, node: &NodeId, name: &str) -> Option<String> {
        match &self.data(*node)?.payload {
            Payload::Element { inline, .. } => inline.get(name).map(ToString::to_string),
            _ => None,
        }
    }

    fn set_style_property(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(Payload::Element { inline, .. }) = self.payload_mut(*node) {
            inline.set(name, value);
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        match &self.data(*node)?.payload {
            Payload::Element { attributes, .. } => attributes.get(name).map(ToString::to_string),
            _ => None,
        }
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(Payload::Element { attributes, .. }) = self.payload_mut(*node) {
            attributes.set(name, value);
        }
    }

    fn class_list(&self, node: &NodeId) -> Vec<String> {
        match self.data(*node).map(|d| &d.payload) {
            Some(Payload::Element { classes, .. }) => classes.clone(),
            _ => Vec::new(),
        }
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if let Some(Payload::Element { classes, .. }) = self.payload_mut(*node)
            && !classes.iter().any(|c| c == class)
        {
            classes.push(class.to_string());
        }
    }

    fn create_element(&mut self, tag: &str, namespace: Option<&str>) -> NodeId {
        self.alloc(Payload::Element {
            tag: tag.to_string(),
            namespace: namespace.map(ToString::to_string),
            resolved: Declarations::default(),
            inline: Declarations::default(),
            attributes: Declarations::default(),
            classes: Vec::new(),
            rect: Rect::ZERO,
        })
    }

    fn create_text_node(&mut self, text: &str) -> NodeId {
        self.alloc(Payload::Text(text.to_string()))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        let (parent, child) = (*parent, *child);
        let parent_is_element = match self.data(parent) {
            Some(d) => matches!(d.payload, Payload::Element { .. }),
            None => return Err(DomError::StaleNode),
        };
        let Some(old_parent) = self.data(child).map(|d| d.parent) else {
            return Err(DomError::StaleNode);
        };
        if !parent_is_element || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        if let Some(old_parent) = old_parent {
            self.detach(old_parent, child);
        }
        if let Some(p) = self.data_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.data_mut(child) {
            c.parent = Some(parent);
        }
        Ok(())
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        let Some(p) = self.data(*parent) else {
            return Err(DomError::StaleNode);
        };
        if !p.children.contains(child) {
            return Err(DomError::NotAChild);
        }
        self.detach(*parent, *child);
        Ok(())
    }

    fn bounding_client_rect(&self, node: &NodeId) -> Rect {
        match self.data(*node).map(|d| &d.payload) {
            Some(Payload::Element { rect, .. }) => *rect,
            _ => Rect::ZERO,
        }
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn supports_passive_listeners(&self) -> bool {
        self.passive_listeners
    }
}
