// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapdrag Snapshot: drag-preview overlays.
//!
//! A [`Snapshot`] is a style-baked clone of an element (see `snapdrag_clone`)
//! that floats over the document as a fixed-position overlay. It never
//! intercepts pointer input and always stacks above ordinary content.
//!
//! ## Lifecycle
//!
//! 1) [`Snapshot::create`] clones the element. Nothing is visible yet.
//! 2) [`Snapshot::place`] moves the clone and mounts it in its container.
//! 3) [`Snapshot::move_to`] repositions it any number of times; the last move wins.
//! 4) [`Snapshot::remove`] detaches it. Removing twice is harmless.
//!
//! Positions are translations from the viewport's top-left corner. When driven
//! by a gesture, feed it the gesture's snapshot position so the preview keeps
//! the same offset under the pointer as the original had.
//!
//! ```
//! use kurbo::Point;
//! use snapdrag_dom::{Document, MemoryDocument};
//! use snapdrag_snapshot::{Snapshot, SnapshotMove};
//!
//! let mut doc = MemoryDocument::new();
//! let card = doc.create_element("div", None);
//!
//! let mut preview = Snapshot::create(&mut doc, &card, None).unwrap();
//! preview.place(&mut doc, Point::new(10.0, 20.0));
//! preview.move_to(&mut doc, SnapshotMove::new(Point::new(30.0, 40.0)).with_transition(120));
//! assert_eq!(
//!     doc.inline_style(preview.clone_node(), "transform").as_deref(),
//!     Some("translateX(30px) translateY(40px)")
//! );
//!
//! preview.remove(&mut doc);
//! assert!(doc.child_nodes(&doc.body()).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod snapshot;

pub use snapshot::{MAX_Z_INDEX, Snapshot, SnapshotMove, SnapshotState};
