// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Snapshot`] overlay and its lifecycle.

use alloc::format;

use kurbo::Point;
use snapdrag_clone::clone_node;
use snapdrag_dom::Document;

/// Stacking order given to every snapshot: the largest 32-bit layer value.
///
/// All snapshots share it, so among snapshots the one mounted last draws on top.
pub const MAX_Z_INDEX: i32 = i32::MAX;

/// Lifecycle state of a [`Snapshot`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SnapshotState {
    /// Created, never placed. Moves update the transform but nothing is visible.
    Created,
    /// Inserted into its container by [`Snapshot::place`].
    Placed,
    /// Moved at least once after being placed. Placing again keeps this state.
    Moved,
    /// Detached by [`Snapshot::remove`].
    Removed,
}

/// Target of a [`Snapshot::move_to`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapshotMove {
    /// Translation from the overlay's fixed origin (the viewport's top-left), in pixels.
    pub position: Point,
    /// Transition duration in milliseconds; `0` moves instantly.
    pub transition_ms: u32,
}

impl SnapshotMove {
    /// An instant move to `position`.
    pub const fn new(position: Point) -> Self {
        Self {
            position,
            transition_ms: 0,
        }
    }

    /// Animate the move over `transition_ms` milliseconds.
    #[must_use]
    pub const fn with_transition(mut self, transition_ms: u32) -> Self {
        self.transition_ms = transition_ms;
        self
    }
}

impl From<Point> for SnapshotMove {
    fn from(position: Point) -> Self {
        Self::new(position)
    }
}

/// A detached, styled clone of an element, positioned as a fixed overlay.
///
/// The snapshot does not own its source; it owns the clone. Nothing is cleaned
/// up automatically: call [`remove`](Self::remove) when the drag is over.
#[derive(Clone, Debug)]
pub struct Snapshot<N> {
    source: N,
    container: N,
    clone: N,
    state: SnapshotState,
}

impl<N: Clone + Eq + core::fmt::Debug> Snapshot<N> {
    /// Clone `element` into a new overlay that will be mounted in `container`
    /// (the document body when `None`).
    ///
    /// The clone is fixed to the viewport's top-left corner, ignores pointer
    /// input, and sits at [`MAX_Z_INDEX`]. Returns `None` when `element` cannot be
    /// cloned.
    pub fn create<D>(doc: &mut D, element: &N, container: Option<N>) -> Option<Self>
    where
        D: Document<Node = N>,
    {
        let clone = clone_node(doc, element)?;
        doc.set_style_property(&clone, "position", "fixed");
        doc.set_style_property(&clone, "left", "0px");
        doc.set_style_property(&clone, "top", "0px");
        doc.set_style_property(&clone, "pointer-events", "none");
        doc.set_style_property(&clone, "z-index", &format!("{MAX_Z_INDEX}"));
        Some(Self {
            source: element.clone(),
            container: container.unwrap_or_else(|| doc.body()),
            clone,
            state: SnapshotState::Created,
        })
    }

    /// The element this snapshot was cloned from.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Where [`place`](Self::place) mounts the clone.
    pub fn container(&self) -> &N {
        &self.container
    }

    /// The overlay node itself.
    pub fn clone_node(&self) -> &N {
        &self.clone
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SnapshotState {
        self.state
    }

    /// Move to `position`, then mount the clone in the container.
    ///
    /// Placing a snapshot that is already mounted only moves it, so it is never
    /// duplicated and a [`Moved`](SnapshotState::Moved) snapshot stays `Moved`.
    /// A removed snapshot can be placed again.
    pub fn place<D>(&mut self, doc: &mut D, position: Point)
    where
        D: Document<Node = N>,
    {
        let mounted = doc.parent_node(&self.clone).as_ref() == Some(&self.container);
        self.move_to(doc, position);
        if mounted {
            return;
        }
        if let Err(err) = doc.append_child(&self.container, &self.clone) {
            tracing::warn!(container = ?self.container, %err, "could not place snapshot");
            return;
        }
        self.state = SnapshotState::Placed;
    }

    /// Translate the clone and set its transition duration.
    ///
    /// Later moves overwrite earlier ones. Moving before placing is allowed.
    pub fn move_to<D>(&mut self, doc: &mut D, target: impl Into<SnapshotMove>)
    where
        D: Document<Node = N>,
    {
        let SnapshotMove {
            position,
            transition_ms,
        } = target.into();
        doc.set_style_property(
            &self.clone,
            "transform",
            &format!("translateX({}px) translateY({}px)", position.x, position.y),
        );
        doc.set_style_property(
            &self.clone,
            "transition-duration",
            &format!("{transition_ms}ms"),
        );
        if matches!(self.state, SnapshotState::Placed) {
            self.state = SnapshotState::Moved;
        }
    }

    /// Detach the clone from wherever it is mounted.
    ///
    /// Removing a snapshot that is not mounted does nothing.
    pub fn remove<D>(&mut self, doc: &mut D)
    where
        D: Document<Node = N>,
    {
        if let Some(parent) = doc.parent_node(&self.clone)
            && let Err(err) = doc.remove_child(&parent, &self.clone)
        {
            tracing::debug!(?parent, %err, "snapshot already detached");
        }
        self.state = SnapshotState::Removed;
    }

    /// Returns `true` while the clone is mounted in its container.
    pub fn is_placed<D>(&self, doc: &D) -> bool
    where
        D: Document<Node = N>,
    {
        doc.parent_node(&self.clone).as_ref() == Some(&self.container)
    }
}
