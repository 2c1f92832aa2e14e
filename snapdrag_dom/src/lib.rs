// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapdrag DOM: the host document seam.
//!
//! Snapdrag does not own a rendering tree. Everything it needs from the host
//! (creating nodes, reading resolved styles, querying bounding boxes, moving
//! nodes between parents) goes through the [`Document`] trait, so the same
//! cloner, snapshot, and gesture code runs against a browser binding, a
//! headless test document, or any retained UI tree that can answer these
//! questions.
//!
//! ## API overview
//!
//! - [`Document`]: the trait a host implements. Its associated `Node` type is a
//!   small, cloneable handle; node identity is handle equality.
//! - [`NodeKind`]: element / text / anything else (carrying the DOM `nodeType`).
//! - [`DomError`]: recoverable failures of tree mutations.
//! - [`MemoryDocument`]: a complete in-memory implementation with generational
//!   [`NodeId`] handles, used by tests, benchmarks, and headless hosts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use snapdrag_dom::{Document, MemoryDocument, NodeKind};
//!
//! let mut doc = MemoryDocument::new();
//! let card = doc.create_element("div", None);
//! doc.set_resolved_style(card, "color", "red");
//! doc.set_layout_rect(card, Rect::new(80.0, 90.0, 180.0, 140.0));
//! let body = doc.body();
//! doc.append_child(&body, &card).unwrap();
//!
//! assert_eq!(doc.node_kind(&card), NodeKind::Element);
//! assert_eq!(doc.parent_node(&card), Some(body));
//! assert_eq!(doc.bounding_client_rect(&card).origin(), kurbo::Point::new(80.0, 90.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod error;
mod memory;

pub use document::{Document, NodeKind, SVG_NAMESPACE, XHTML_NAMESPACE};
pub use error::DomError;
pub use memory::{MemoryDocument, NodeId};
