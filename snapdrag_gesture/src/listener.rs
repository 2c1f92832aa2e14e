// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for the input listeners a [`GestureTracker`](crate::GestureTracker)
//! keeps registered.
//!
//! The table mirrors what a DOM host has registered: hosts that forward real
//! listeners can diff [`GestureTracker::listeners`](crate::GestureTracker::listeners)
//! against their own registrations, and tests use it to check nothing leaks.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::handler::ContactKey;
use crate::input::EventKind;

/// Identifier of a registered listener.
///
/// Slots are reused after removal; the generation keeps stale ids from
/// resolving to a newer listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u32, u32);

impl ListenerId {
    const fn new(idx: usize, generation: u32) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "listener slots are bounded well below u32::MAX"
        )]
        let idx = idx as u32;
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What a listener is attached to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget<N> {
    /// An element; receives start events that hit it or bubble through it.
    Element(N),
    /// The document; receives every move and end event.
    Document,
}

/// Registration options, mirroring `addEventListener`'s options bag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    /// Explicit passiveness; `None` registers with the platform default.
    pub passive: Option<bool>,
}

impl ListenerOptions {
    /// Explicitly non-passive, so `preventDefault` is honored.
    pub const fn non_passive() -> Self {
        Self {
            passive: Some(false),
        }
    }
}

/// Which tracker state a listener feeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route<N> {
    /// Starts gestures for the handler mounted on `element`.
    Start { element: N },
    /// Samples the gesture `contact` on `element`.
    Gesture { element: N, contact: ContactKey },
}

impl<N> Route<N> {
    pub(crate) fn element(&self) -> &N {
        match self {
            Self::Start { element } | Self::Gesture { element, .. } => element,
        }
    }
}

/// A registered listener.
#[derive(Clone, Debug)]
pub struct Listener<N> {
    target: ListenerTarget<N>,
    kind: EventKind,
    options: ListenerOptions,
    pub(crate) route: Route<N>,
}

impl<N> Listener<N> {
    pub(crate) fn new(
        target: ListenerTarget<N>,
        kind: EventKind,
        options: ListenerOptions,
        route: Route<N>,
    ) -> Self {
        Self {
            target,
            kind,
            options,
            route,
        }
    }

    /// Where the listener is registered.
    pub fn target(&self) -> &ListenerTarget<N> {
        &self.target
    }

    /// Event type the listener is registered for.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Registration options.
    pub fn options(&self) -> ListenerOptions {
        self.options
    }

    /// The element whose handler this listener serves.
    pub fn element(&self) -> &N {
        self.route.element()
    }
}

#[derive(Clone, Debug)]
struct Slot<N> {
    generation: u32,
    listener: Option<Listener<N>>,
}

/// Registered listeners in registration order.
#[derive(Clone, Debug)]
pub(crate) struct ListenerTable<N> {
    slots: Vec<Slot<N>>,
    free: Vec<usize>,
    order: Vec<ListenerId>,
}

impl<N> Default for ListenerTable<N> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
        }
    }
}

impl<N> ListenerTable<N> {
    pub(crate) fn get(&self, id: ListenerId) -> Option<&Listener<N>> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.listener.as_ref()
    }

    /// Live listeners in registration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (ListenerId, &Listener<N>)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.get(*id).map(|l| (*id, l)))
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}

impl<N: PartialEq> ListenerTable<N> {
    pub(crate) fn add(&mut self, listener: Listener<N>) -> ListenerId {
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx];
            slot.generation = slot.generation.wrapping_add(1);
            slot.listener = Some(listener);
            ListenerId::new(idx, slot.generation)
        } else {
            self.slots.push(Slot {
                generation: 0,
                listener: Some(listener),
            });
            ListenerId::new(self.slots.len() - 1, 0)
        };
        self.order.push(id);
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> Option<Listener<N>> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let listener = slot.listener.take()?;
        self.free.push(id.idx());
        self.order.retain(|o| *o != id);
        Some(listener)
    }

    /// Ids of listeners registered for `kind` on `target`, in registration order.
    ///
    /// The result is a copy: dispatch walks it while listeners are added and removed.
    pub(crate) fn matching(
        &self,
        target: &ListenerTarget<N>,
        kind: EventKind,
    ) -> SmallVec<[ListenerId; 8]> {
        self.iter()
            .filter(|(_, l)| l.kind == kind && l.target == *target)
            .map(|(id, _)| id)
            .collect()
    }

    /// Remove every listener `keep` rejects; returns how many were removed.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Listener<N>) -> bool) -> usize {
        let doomed: SmallVec<[ListenerId; 8]> = self
            .iter()
            .filter(|(_, l)| !keep(l))
            .map(|(id, _)| id)
            .collect();
        for id in &doomed {
            self.remove(*id);
        }
        doomed.len()
    }
}
