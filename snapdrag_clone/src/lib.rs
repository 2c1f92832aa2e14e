// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapdrag Clone: structural and visual copies of document subtrees.
//!
//! A drag preview has to look like its source after it has been detached from
//! the live cascade. Stylesheet rules stop applying to a node that is moved
//! out of its context, so [`clone_node`] bakes every resolved style property
//! into the clone's own inline style, node by node.
//!
//! The clone is meant to be decorative. It keeps:
//!
//! - the tag, in the SVG namespace for known SVG tags ([`SVG_TAG_NAMES`]);
//! - every resolved style property (array-index keys of the style enumeration are skipped);
//! - for HTML elements, only [`HTML_ATTRIBUTES`] and icon-font classes ([`is_icon_class`]);
//! - for SVG elements, only [`SVG_ATTRIBUTES`];
//! - text nodes verbatim.
//!
//! Other node kinds (comments, processing instructions) are logged and skipped.
//!
//! ```
//! use snapdrag_clone::clone_node;
//! use snapdrag_dom::{Document, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let button = doc.create_element("button", None);
//! doc.set_attribute(&button, "id", "save");
//! doc.add_class(&button, "fa");
//! doc.add_class(&button, "is-pressed");
//! doc.set_resolved_style(button, "background-color", "rgb(0, 120, 212)");
//! let label = doc.create_text_node("Save");
//! doc.append_child(&button, &label).unwrap();
//!
//! let copy = clone_node(&mut doc, &button).unwrap();
//! assert_eq!(doc.tag_name(&copy).as_deref(), Some("button"));
//! assert_eq!(doc.inline_style(&copy, "background-color").as_deref(), Some("rgb(0, 120, 212)"));
//! assert_eq!(doc.attribute(&copy, "id"), None);
//! assert_eq!(doc.class_list(&copy), ["fa"]);
//! assert_eq!(doc.child_nodes(&copy).len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clone;
mod tables;

pub use clone::{CloneOptions, clone_node, clone_node_with};
pub use tables::{HTML_ATTRIBUTES, SVG_ATTRIBUTES, SVG_TAG_NAMES, is_icon_class};
