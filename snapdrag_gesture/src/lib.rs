// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapdrag Gesture: unified touch and mouse move tracking.
//!
//! Mount a [`HandlerFactory`] on an element and every contact that goes down on
//! it (each touch, or the mouse) becomes its own gesture: a fresh
//! [`MoveHandler`] receives exactly one start, any number of moves and exactly
//! one end, in that order. Concurrent touches on one element are tracked and
//! torn down independently.
//!
//! The [`GestureTracker`] does not talk to an event loop itself. The host
//! forwards each raw [`InputEvent`] to [`GestureTracker::dispatch`] and applies
//! the returned [`DispatchOutcome`] (for example, calling `preventDefault` on
//! the real event). The listeners the tracker considers registered are
//! observable through [`GestureTracker::listeners`], so a host can mirror them.
//!
//! ## Positions
//!
//! Every [`GestureEvent`] carries:
//! - `client`: the contact position in viewport coordinates;
//! - `inset`: where the contact first landed relative to the element's top-left
//!   corner, fixed for the whole gesture;
//! - `snapshot`: `client - inset`, the top-left corner of a drag preview that
//!   stays put under the contact.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use snapdrag_dom::{Document, MemoryDocument, NodeId};
//! use snapdrag_gesture::{
//!     Callbacks, Capabilities, GestureContext, GestureTracker, HandlerFactory, InputEvent, Touch,
//! };
//!
//! let mut doc = MemoryDocument::new();
//! let card = doc.create_element("div", None);
//! doc.set_layout_rect(card, Rect::new(80.0, 90.0, 180.0, 190.0));
//! let body = doc.body();
//! doc.append_child(&body, &card).unwrap();
//!
//! let previews = Rc::new(RefCell::new(Vec::new()));
//! let log = previews.clone();
//! let factory = HandlerFactory::new(move |_: &GestureContext<NodeId>| {
//!     let log = log.clone();
//!     Callbacks::new().with_move(move |event| log.borrow_mut().push(event.snapshot()))
//! });
//!
//! let mut tracker = GestureTracker::new(Capabilities::detect(&doc));
//! tracker.set_handler(&card, Some(factory));
//!
//! let finger = Touch::new(0, 100.0, 100.0);
//! tracker.dispatch(&doc, &InputEvent::touch_start(card, &[finger], finger));
//! tracker.dispatch(&doc, &InputEvent::touch_move(&[Touch::new(0, 150.0, 130.0)]));
//! tracker.dispatch(&doc, &InputEvent::touch_end(&[]));
//!
//! assert_eq!(*previews.borrow(), [Point::new(130.0, 120.0)]);
//! assert_eq!(tracker.active_gestures(&card), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod handler;
mod input;
mod listener;
mod tracker;

pub use event::{GestureEvent, GesturePhase};
pub use handler::{Callbacks, ContactKey, ContactKind, GestureContext, HandlerFactory, MoveHandler};
pub use input::{ContactId, EventKind, InputEvent, Touch, TouchList};
pub use listener::{Listener, ListenerId, ListenerOptions, ListenerTarget};
pub use tracker::{
    Capabilities, DispatchOutcome, GestureTracker, InstallOptions, InstallOutcome,
    MoveHandlerProperty,
};
