// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Consumer-supplied gesture handlers and the factories that mint them.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use crate::event::GestureEvent;
use crate::input::ContactId;

/// Input device behind a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// A touch contact.
    Touch,
    /// A mouse button held down.
    Mouse,
}

/// Key of an active gesture on one element.
///
/// Touch gestures are keyed by contact identifier. There is a single mouse key:
/// one element tracks at most one mouse drag at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactKey {
    /// The touch contact with this identifier.
    Touch(ContactId),
    /// The mouse.
    Mouse,
}

impl ContactKey {
    /// Device kind of this contact.
    pub const fn kind(self) -> ContactKind {
        match self {
            Self::Touch(_) => ContactKind::Touch,
            Self::Mouse => ContactKind::Mouse,
        }
    }

    /// Touch identifier, `None` for the mouse.
    pub const fn contact_id(self) -> Option<ContactId> {
        match self {
            Self::Touch(id) => Some(id),
            Self::Mouse => None,
        }
    }
}

/// Identity of one gesture, fixed when it starts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GestureContext<N> {
    kind: ContactKind,
    contact_id: Option<ContactId>,
    element: N,
}

impl<N> GestureContext<N> {
    pub(crate) fn new(contact: ContactKey, element: N) -> Self {
        Self {
            kind: contact.kind(),
            contact_id: contact.contact_id(),
            element,
        }
    }

    /// Touch or mouse.
    pub fn kind(&self) -> ContactKind {
        self.kind
    }

    /// Touch identifier, `None` for mouse gestures.
    pub fn contact_id(&self) -> Option<ContactId> {
        self.contact_id
    }

    /// The element the handler is mounted on.
    pub fn element(&self) -> &N {
        &self.element
    }
}

/// Callbacks for one gesture.
///
/// A fresh handler is created for every gesture, so it may keep per-gesture
/// state in `self`. Every callback is optional: the defaults do nothing.
pub trait MoveHandler {
    /// The contact went down. Call [`GestureEvent::prevent_default`] to suppress
    /// the host's default action.
    fn on_start(&mut self, event: &GestureEvent) {
        let _ = event;
    }

    /// The contact moved.
    fn on_move(&mut self, event: &GestureEvent) {
        let _ = event;
    }

    /// The contact lifted, or the handler was unmounted mid-gesture
    /// (see [`GestureEvent::is_interrupted`]).
    fn on_end(&mut self, event: &GestureEvent) {
        let _ = event;
    }
}

type Callback = Box<dyn FnMut(&GestureEvent)>;

/// A [`MoveHandler`] assembled from optional closures.
///
/// ```
/// use snapdrag_gesture::{Callbacks, MoveHandler};
///
/// let handler = Callbacks::new().with_start(|event| event.prevent_default());
/// # let _: &dyn MoveHandler = &handler;
/// ```
#[derive(Default)]
pub struct Callbacks {
    start: Option<Callback>,
    moved: Option<Callback>,
    end: Option<Callback>,
}

impl Callbacks {
    /// No callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start callback.
    #[must_use]
    pub fn with_start(mut self, f: impl FnMut(&GestureEvent) + 'static) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    /// Set the move callback.
    #[must_use]
    pub fn with_move(mut self, f: impl FnMut(&GestureEvent) + 'static) -> Self {
        self.moved = Some(Box::new(f));
        self
    }

    /// Set the end callback.
    #[must_use]
    pub fn with_end(mut self, f: impl FnMut(&GestureEvent) + 'static) -> Self {
        self.end = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("start", &self.start.is_some())
            .field("move", &self.moved.is_some())
            .field("end", &self.end.is_some())
            .finish()
    }
}

impl MoveHandler for Callbacks {
    fn on_start(&mut self, event: &GestureEvent) {
        if let Some(f) = &mut self.start {
            f(event);
        }
    }

    fn on_move(&mut self, event: &GestureEvent) {
        if let Some(f) = &mut self.moved {
            f(event);
        }
    }

    fn on_end(&mut self, event: &GestureEvent) {
        if let Some(f) = &mut self.end {
            f(event);
        }
    }
}

type Make<N> = dyn Fn(&GestureContext<N>) -> Box<dyn MoveHandler>;

/// Mints one [`MoveHandler`] per gesture.
///
/// Cloning is cheap and preserves identity: clones compare equal under
/// [`ptr_eq`](Self::ptr_eq).
pub struct HandlerFactory<N> {
    make: Rc<Make<N>>,
}

impl<N: 'static> HandlerFactory<N> {
    /// Wrap a constructor. It receives the identity of the gesture being started.
    pub fn new<F, H>(make: F) -> Self
    where
        F: Fn(&GestureContext<N>) -> H + 'static,
        H: MoveHandler + 'static,
    {
        Self {
            make: Rc::new(move |cx: &GestureContext<N>| -> Box<dyn MoveHandler> { Box::new(make(cx)) }),
        }
    }
}

impl<N> HandlerFactory<N> {
    /// Create the handler for a new gesture.
    pub fn create(&self, cx: &GestureContext<N>) -> Box<dyn MoveHandler> {
        (self.make)(cx)
    }

    /// Returns `true` if both factories wrap the same constructor.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.make, &other.make)
    }
}

impl<N> Clone for HandlerFactory<N> {
    fn clone(&self) -> Self {
        Self {
            make: Rc::clone(&self.make),
        }
    }
}

impl<N> fmt::Debug for HandlerFactory<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFactory")
            .field("make", &Rc::as_ptr(&self.make))
            .finish()
    }
}
