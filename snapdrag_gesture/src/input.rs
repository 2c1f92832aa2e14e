// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input as delivered by the host.

use kurbo::Point;
use smallvec::SmallVec;

/// Stable identifier of one touch contact while it is down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(pub i64);

/// One touch point of a touch event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    /// Identifier of the contact this point belongs to.
    pub identifier: ContactId,
    /// Position in viewport coordinates.
    pub client: Point,
}

impl Touch {
    /// A touch point for contact `identifier` at `(x, y)`.
    pub const fn new(identifier: i64, x: f64, y: f64) -> Self {
        Self {
            identifier: ContactId(identifier),
            client: Point::new(x, y),
        }
    }
}

/// Touch points of one touch event.
pub type TouchList = SmallVec<[Touch; 4]>;

/// Kinds of input listeners, named after the DOM events they mirror.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `touchstart`, listened for on elements.
    TouchStart,
    /// `touchmove`, listened for on the document.
    TouchMove,
    /// `touchend`, listened for on the document.
    TouchEnd,
    /// `mousedown`, listened for on elements.
    MouseDown,
    /// `mousemove`, listened for on the document.
    MouseMove,
    /// `mouseup`, listened for on the document.
    MouseUp,
}

impl EventKind {
    /// The DOM event type name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
        }
    }

    /// Whether this kind starts a gesture (and is delivered to elements).
    pub const fn is_start(self) -> bool {
        matches!(self, Self::TouchStart | Self::MouseDown)
    }
}

/// One raw input event, forwarded by the host.
///
/// Start events name the element they hit; they bubble to its ancestors.
/// Move and end events are document-wide.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent<N> {
    /// One or more contacts touched down on `target`.
    TouchStart {
        /// Innermost element under the new contacts.
        target: N,
        /// All contacts currently down.
        touches: TouchList,
        /// Contacts that went down with this event.
        ///
        /// When empty, the last entry of `touches` is taken as the new contact.
        changed_touches: TouchList,
        /// Whether the host's event can have its default action prevented.
        cancelable: bool,
    },
    /// Contacts moved.
    TouchMove {
        /// All contacts currently down.
        touches: TouchList,
    },
    /// Contacts lifted.
    ///
    /// `touches` lists the contacts that are *still* down; lifted contacts are
    /// the ones missing from it.
    TouchEnd {
        /// All contacts still down.
        touches: TouchList,
    },
    /// A mouse button went down on `target`.
    MouseDown {
        /// Innermost element under the pointer.
        target: N,
        /// Pointer position in viewport coordinates.
        client: Point,
        /// Whether the host's event can have its default action prevented.
        cancelable: bool,
    },
    /// The mouse moved.
    MouseMove {
        /// Pointer position in viewport coordinates.
        client: Point,
    },
    /// A mouse button was released.
    MouseUp {
        /// Pointer position in viewport coordinates.
        client: Point,
    },
}

impl<N> InputEvent<N> {
    /// Convenience constructor for a single new contact.
    pub fn touch_start(target: N, touches: &[Touch], new_touch: Touch) -> Self {
        Self::TouchStart {
            target,
            touches: touches.iter().copied().collect(),
            changed_touches: core::iter::once(new_touch).collect(),
            cancelable: true,
        }
    }

    /// Convenience constructor for a move of the listed contacts.
    pub fn touch_move(touches: &[Touch]) -> Self {
        Self::TouchMove {
            touches: touches.iter().copied().collect(),
        }
    }

    /// Convenience constructor for a lift, given the contacts still down.
    pub fn touch_end(remaining: &[Touch]) -> Self {
        Self::TouchEnd {
            touches: remaining.iter().copied().collect(),
        }
    }

    /// Convenience constructor for a cancelable mouse-down.
    pub fn mouse_down(target: N, x: f64, y: f64) -> Self {
        Self::MouseDown {
            target,
            client: Point::new(x, y),
            cancelable: true,
        }
    }

    /// The listener kind this event is delivered to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::TouchStart { .. } => EventKind::TouchStart,
            Self::TouchMove { .. } => EventKind::TouchMove,
            Self::TouchEnd { .. } => EventKind::TouchEnd,
            Self::MouseDown { .. } => EventKind::MouseDown,
            Self::MouseMove { .. } => EventKind::MouseMove,
            Self::MouseUp { .. } => EventKind::MouseUp,
        }
    }

    /// The element a start event hit.
    pub fn target(&self) -> Option<&N> {
        match self {
            Self::TouchStart { target, .. } | Self::MouseDown { target, .. } => Some(target),
            _ => None,
        }
    }
}

/// Position of contact `id` in `touches`, if it is listed.
pub(crate) fn find_touch(touches: &[Touch], id: ContactId) -> Option<Point> {
    touches
        .iter()
        .find(|t| t.identifier == id)
        .map(|t| t.client)
}
