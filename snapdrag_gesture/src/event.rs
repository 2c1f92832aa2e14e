// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized gesture samples handed to [`MoveHandler`](crate::MoveHandler)s.

use core::cell::Cell;

use kurbo::{Point, Vec2};

/// Where in its gesture a [`GestureEvent`] sits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The contact went down.
    Start,
    /// The contact moved.
    Move,
    /// The contact lifted, or the gesture was torn down.
    End,
}

/// One input sample of one gesture.
///
/// All positions are in viewport coordinates.
///
/// - `inset` is the offset from the target element's top-left corner to the
///   initial contact position. It is measured once when the gesture starts and
///   stays fixed.
/// - `snapshot` is where a drag preview of the element should sit so that it
///   keeps the same offset under the contact: `client - inset`.
///
/// Only start events can be cancelable; [`prevent_default`](Self::prevent_default)
/// on any other event does nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureEvent {
    phase: GesturePhase,
    client: Point,
    initial_client: Point,
    inset: Vec2,
    cancelable: bool,
    interrupted: bool,
    default_prevented: Cell<bool>,
}

impl GestureEvent {
    pub(crate) fn start(client: Point, inset: Vec2, cancelable: bool) -> Self {
        Self {
            phase: GesturePhase::Start,
            client,
            initial_client: client,
            inset,
            cancelable,
            interrupted: false,
            default_prevented: Cell::new(false),
        }
    }

    pub(crate) fn sample(phase: GesturePhase, client: Point, initial_client: Point, inset: Vec2) -> Self {
        Self {
            phase,
            client,
            initial_client,
            inset,
            cancelable: false,
            interrupted: false,
            default_prevented: Cell::new(false),
        }
    }

    pub(crate) fn interrupted(mut self) -> Self {
        self.interrupted = true;
        self
    }

    /// Start, move, or end.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Current contact position.
    pub fn client(&self) -> Point {
        self.client
    }

    /// Contact position when the gesture started.
    pub fn initial_client(&self) -> Point {
        self.initial_client
    }

    /// Offset of the initial contact from the element's top-left corner.
    pub fn inset(&self) -> Vec2 {
        self.inset
    }

    /// Where a drag preview should sit: current position minus inset.
    pub fn snapshot(&self) -> Point {
        self.client - self.inset
    }

    /// Horizontal contact position.
    pub fn client_x(&self) -> f64 {
        self.client.x
    }

    /// Vertical contact position.
    pub fn client_y(&self) -> f64 {
        self.client.y
    }

    /// Horizontal contact position at start.
    pub fn initial_client_x(&self) -> f64 {
        self.initial_client.x
    }

    /// Vertical contact position at start.
    pub fn initial_client_y(&self) -> f64 {
        self.initial_client.y
    }

    /// Horizontal inset.
    pub fn inset_x(&self) -> f64 {
        self.inset.x
    }

    /// Vertical inset.
    pub fn inset_y(&self) -> f64 {
        self.inset.y
    }

    /// Horizontal preview position.
    pub fn snapshot_x(&self) -> f64 {
        self.snapshot().x
    }

    /// Vertical preview position.
    pub fn snapshot_y(&self) -> f64 {
        self.snapshot().y
    }

    /// Whether [`prevent_default`](Self::prevent_default) has any effect.
    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// `true` for the end event delivered when a handler is unmounted mid-gesture.
    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Ask the host to suppress the default action of the underlying input
    /// event (for example, scrolling on touch).
    ///
    /// The request is reported back through
    /// [`DispatchOutcome::default_prevented`](crate::DispatchOutcome::default_prevented).
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    /// Whether a handler called [`prevent_default`](Self::prevent_default) on a cancelable event.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
