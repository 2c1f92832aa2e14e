// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapdrag: drag previews and unified move handlers for document trees.
//!
//! This crate bundles the Snapdrag family behind one [`Environment`]:
//!
//! - `snapdrag_dom`: the [`Document`] abstraction over a host document tree,
//!   and [`MemoryDocument`] for tests and headless use.
//! - `snapdrag_clone`: [`clone_node`], deep clones with resolved style baked inline.
//! - `snapdrag_snapshot`: [`Snapshot`], fixed-position drag preview overlays.
//! - `snapdrag_gesture`: [`GestureTracker`], one start/move/end stream per
//!   touch contact or mouse drag.
//!
//! ## Dragging a preview
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use snapdrag::{
//!     Callbacks, Document, Environment, GestureContext, HandlerFactory, InputEvent,
//!     MemoryDocument, NodeId, PolyfillOptions,
//! };
//!
//! let mut env = Environment::new(MemoryDocument::new());
//! env.polyfill(PolyfillOptions::default());
//!
//! let doc = env.document_mut();
//! let card = doc.create_element("div", None);
//! doc.set_layout_rect(card, Rect::new(80.0, 90.0, 180.0, 190.0));
//! let body = doc.body();
//! doc.append_child(&body, &card).unwrap();
//!
//! // Handlers only record; the host applies positions to the preview.
//! let positions = Rc::new(RefCell::new(Vec::new()));
//! let sink = positions.clone();
//! env.set_move_handler(
//!     &card,
//!     Some(HandlerFactory::new(move |_: &GestureContext<NodeId>| {
//!         let sink = sink.clone();
//!         Callbacks::new().with_move(move |event| sink.borrow_mut().push(event.snapshot()))
//!     })),
//! );
//!
//! let mut preview = env.create_snapshot(&card, None).unwrap();
//! preview.place(env.document_mut(), Point::new(80.0, 90.0));
//!
//! env.dispatch(&InputEvent::mouse_down(card, 100.0, 100.0));
//! env.dispatch(&InputEvent::MouseMove { client: Point::new(150.0, 130.0) });
//! for position in positions.borrow_mut().drain(..) {
//!     preview.move_to(env.document_mut(), position);
//! }
//! env.dispatch(&InputEvent::MouseUp { client: Point::new(150.0, 130.0) });
//! preview.remove(env.document_mut());
//!
//! assert_eq!(
//!     env.document().inline_style(preview.clone_node(), "transform").as_deref(),
//!     Some("translateX(130px) translateY(120px)")
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

mod environment;

pub use environment::{Environment, PolyfillOptions, PolyfillReport};

pub use snapdrag_clone::{CloneOptions, clone_node, clone_node_with};
pub use snapdrag_dom::{Document, DomError, MemoryDocument, NodeId, NodeKind};
pub use snapdrag_gesture::{
    Callbacks, Capabilities, ContactId, ContactKey, ContactKind, DispatchOutcome, GestureContext,
    GestureEvent, GesturePhase, GestureTracker, HandlerFactory, InputEvent, InstallOptions,
    InstallOutcome, MoveHandler, MoveHandlerProperty, Touch,
};
pub use snapdrag_snapshot::{MAX_Z_INDEX, Snapshot, SnapshotMove, SnapshotState};
