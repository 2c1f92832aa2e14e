// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`GestureTracker`]: handler registry, listener bookkeeping and the
//! per-contact start/move/end state machine.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use snapdrag_dom::Document;

use crate::event::{GestureEvent, GesturePhase};
use crate::handler::{ContactKey, GestureContext, HandlerFactory, MoveHandler};
use crate::input::{EventKind, InputEvent, TouchList, find_touch};
use crate::listener::{Listener, ListenerId, ListenerOptions, ListenerTable, ListenerTarget, Route};

/// Host capabilities, probed once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Whether listeners accept an explicit `passive` option.
    pub passive_listeners: bool,
}

impl Capabilities {
    /// Probe `doc` for its capabilities.
    pub fn detect<D: Document>(doc: &D) -> Self {
        Self {
            passive_listeners: doc.supports_passive_listeners(),
        }
    }

    /// Options for the touch-start listener.
    ///
    /// Explicitly non-passive where passiveness is configurable, so handlers can
    /// prevent scrolling. Otherwise the platform default, which is non-passive.
    pub const fn touch_start_options(self) -> ListenerOptions {
        if self.passive_listeners {
            ListenerOptions::non_passive()
        } else {
            ListenerOptions { passive: None }
        }
    }
}

/// Options for [`GestureTracker::install`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InstallOptions {
    /// Reinstall even when already installed.
    pub force: bool,
}

/// What [`GestureTracker::install`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InstallOutcome {
    /// First install.
    Installed,
    /// Already installed; reinstalled because `force` was set.
    Reinstalled,
    /// Already installed; nothing done and a warning logged.
    Skipped,
}

/// What one [`GestureTracker::dispatch`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// A handler called [`GestureEvent::prevent_default`] on a cancelable start.
    /// The host should prevent the default action of the input event.
    pub default_prevented: bool,
    /// Number of listeners the event was delivered to.
    pub listeners_invoked: usize,
}

struct Gesture {
    handler: Box<dyn MoveHandler>,
    initial_client: Point,
    previous: Point,
    inset: Vec2,
    listeners: [ListenerId; 2],
}

impl Gesture {
    fn event(&self, phase: GesturePhase, client: Point) -> GestureEvent {
        GestureEvent::sample(phase, client, self.initial_client, self.inset)
    }
}

struct Mount<N> {
    factory: HandlerFactory<N>,
    gestures: SmallVec<[(ContactKey, Gesture); 2]>,
}

impl<N> Mount<N> {
    fn position(&self, contact: ContactKey) -> Option<usize> {
        self.gestures.iter().position(|(c, _)| *c == contact)
    }
}

/// Routes raw input to per-gesture [`MoveHandler`]s.
///
/// Elements get a handler with [`set_handler`](Self::set_handler). The host
/// forwards every input event to [`dispatch`](Self::dispatch), which delivers
/// it to the registered listeners the way the DOM would:
///
/// - a start event (touch start, mouse down) goes to the element it hit and then
///   to each ancestor, and starts a gesture on every one with a handler;
/// - each gesture adds its own document-level move and end listeners and drops
///   them when it ends, so concurrent touches are torn down independently.
///
/// The registry holds element handles only; it does not keep elements alive.
/// Call [`prune`](Self::prune) to drop entries whose elements are gone.
pub struct GestureTracker<N> {
    capabilities: Capabilities,
    installed: bool,
    mounts: HashMap<N, Mount<N>>,
    listeners: ListenerTable<N>,
}

impl<N: Clone + Eq + Hash + fmt::Debug> GestureTracker<N> {
    /// An empty tracker.
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            installed: false,
            mounts: HashMap::new(),
            listeners: ListenerTable::default(),
        }
    }

    /// The capabilities this tracker registers listeners with.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Enable the [`property`](Self::property) accessor.
    ///
    /// A second install without `force` is skipped with a warning. Either way
    /// there is only ever one accessor.
    pub fn install(&mut self, options: InstallOptions) -> InstallOutcome {
        if !self.installed {
            self.installed = true;
            return InstallOutcome::Installed;
        }
        if options.force {
            tracing::debug!("move handler reinstalled");
            InstallOutcome::Reinstalled
        } else {
            tracing::warn!("move handler is already installed; call install with force to reinstall");
            InstallOutcome::Skipped
        }
    }

    /// Whether [`install`](Self::install) has run.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// The handler accessor of `element`; `None` until installed.
    pub fn property(&mut self, element: &N) -> Option<MoveHandlerProperty<'_, N>> {
        if !self.installed {
            return None;
        }
        Some(MoveHandlerProperty {
            tracker: self,
            element: element.clone(),
        })
    }

    /// Mount `factory` on `element`, or unmount with `None`.
    ///
    /// Any previous handler is unmounted first, removing every listener it
    /// registered, including those of gestures still in flight. Each of those
    /// gestures gets an interrupted end event. Returns the previous factory.
    pub fn set_handler(
        &mut self,
        element: &N,
        factory: Option<HandlerFactory<N>>,
    ) -> Option<HandlerFactory<N>> {
        let previous = self.unmount(element);
        if let Some(factory) = factory {
            self.mount(element, factory);
        }
        previous
    }

    /// The factory mounted on `element`.
    pub fn handler(&self, element: &N) -> Option<&HandlerFactory<N>> {
        self.mounts.get(element).map(|m| &m.factory)
    }

    fn mount(&mut self, element: &N, factory: HandlerFactory<N>) {
        for (kind, options) in [
            (
                EventKind::TouchStart,
                self.capabilities.touch_start_options(),
            ),
            (EventKind::MouseDown, ListenerOptions::default()),
        ] {
            self.listeners.add(Listener::new(
                ListenerTarget::Element(element.clone()),
                kind,
                options,
                Route::Start {
                    element: element.clone(),
                },
            ));
        }
        self.mounts.insert(
            element.clone(),
            Mount {
                factory,
                gestures: SmallVec::new(),
            },
        );
    }

    fn unmount(&mut self, element: &N) -> Option<HandlerFactory<N>> {
        let mount = self.mounts.remove(element)?;
        let removed = self.listeners.retain(|l| l.element() != element);
        tracing::debug!(?element, removed, "move handler unmounted");
        for (contact, mut gesture) in mount.gestures {
            let end = gesture.event(GesturePhase::End, gesture.previous).interrupted();
            tracing::trace!(?element, ?contact, "gesture interrupted");
            gesture.handler.on_end(&end);
        }
        Some(mount.factory)
    }

    /// Drop the handlers of elements that are no longer alive in `doc`.
    ///
    /// Returns how many were dropped.
    pub fn prune<D>(&mut self, doc: &D) -> usize
    where
        D: Document<Node = N>,
    {
        let dead: Vec<N> = self
            .mounts
            .keys()
            .filter(|element| !doc.is_alive(element))
            .cloned()
            .collect();
        for element in &dead {
            self.unmount(element);
        }
        dead.len()
    }

    /// Deliver one input event.
    pub fn dispatch<D>(&mut self, doc: &D, event: &InputEvent<N>) -> DispatchOutcome
    where
        D: Document<Node = N>,
    {
        let mut outcome = DispatchOutcome::default();
        let kind = event.kind();
        if let Some(target) = event.target() {
            let mut current = Some(target.clone());
            while let Some(node) = current {
                for id in self
                    .listeners
                    .matching(&ListenerTarget::Element(node.clone()), kind)
                {
                    self.invoke(doc, id, event, &mut outcome);
                }
                current = doc.parent_node(&node);
            }
        } else {
            for id in self.listeners.matching(&ListenerTarget::Document, kind) {
                self.invoke(doc, id, event, &mut outcome);
            }
        }
        outcome
    }

    fn invoke<D>(
        &mut self,
        doc: &D,
        id: ListenerId,
        event: &InputEvent<N>,
        outcome: &mut DispatchOutcome,
    ) where
        D: Document<Node = N>,
    {
        // Removed earlier in this dispatch.
        let Some(listener) = self.listeners.get(id) else {
            return;
        };
        let route = listener.route.clone();
        outcome.listeners_invoked += 1;
        match route {
            Route::Start { element } => {
                outcome.default_prevented |= self.begin(doc, &element, event);
            }
            Route::Gesture { element, contact } => self.sample(&element, contact, event),
        }
    }

    fn begin<D>(&mut self, doc: &D, element: &N, event: &InputEvent<N>) -> bool
    where
        D: Document<Node = N>,
    {
        match event {
            InputEvent::TouchStart {
                touches,
                changed_touches,
                cancelable,
                ..
            } => {
                let fresh: TouchList = if changed_touches.is_empty() {
                    touches.last().copied().into_iter().collect()
                } else {
                    changed_touches.clone()
                };
                let mut prevented = false;
                for touch in fresh {
                    prevented |= self.start(
                        doc,
                        element,
                        ContactKey::Touch(touch.identifier),
                        touch.client,
                        *cancelable,
                    );
                }
                prevented
            }
            InputEvent::MouseDown {
                client, cancelable, ..
            } => self.start(doc, element, ContactKey::Mouse, *client, *cancelable),
            _ => false,
        }
    }

    fn start<D>(
        &mut self,
        doc: &D,
        element: &N,
        contact: ContactKey,
        client: Point,
        cancelable: bool,
    ) -> bool
    where
        D: Document<Node = N>,
    {
        let Some(mount) = self.mounts.get(element) else {
            return false;
        };
        if mount.position(contact).is_some() {
            tracing::debug!(?element, ?contact, "contact already tracked; start ignored");
            return false;
        }
        let mut handler = mount.factory.create(&GestureContext::new(contact, element.clone()));
        let inset = client - doc.bounding_client_rect(element).origin();

        tracing::trace!(?element, ?contact, "gesture started");
        let event = GestureEvent::start(client, inset, cancelable);
        handler.on_start(&event);

        let (move_kind, end_kind) = match contact {
            ContactKey::Touch(_) => (EventKind::TouchMove, EventKind::TouchEnd),
            ContactKey::Mouse => (EventKind::MouseMove, EventKind::MouseUp),
        };
        let route = Route::Gesture {
            element: element.clone(),
            contact,
        };
        let listeners = [move_kind, end_kind].map(|kind| {
            self.listeners.add(Listener::new(
                ListenerTarget::Document,
                kind,
                ListenerOptions::default(),
                route.clone(),
            ))
        });
        if let Some(mount) = self.mounts.get_mut(element) {
            mount.gestures.push((
                contact,
                Gesture {
                    handler,
                    initial_client: client,
                    previous: client,
                    inset,
                    listeners,
                },
            ));
        }
        event.default_prevented()
    }

    fn sample(&mut self, element: &N, contact: ContactKey, event: &InputEvent<N>) {
        let Some(mount) = self.mounts.get_mut(element) else {
            return;
        };
        let Some(index) = mount.position(contact) else {
            tracing::debug!(?element, ?contact, "no gesture for contact; sample ignored");
            return;
        };
        let client = match (event, contact) {
            (InputEvent::TouchMove { touches }, ContactKey::Touch(id)) => {
                let Some(client) = find_touch(touches, id) else {
                    tracing::trace!(?element, ?contact, "contact not in touch list; sample ignored");
                    return;
                };
                client
            }
            (InputEvent::MouseMove { client }, ContactKey::Mouse) => *client,
            (InputEvent::TouchEnd { touches }, ContactKey::Touch(id)) => {
                if find_touch(touches, id).is_some() {
                    // Another contact lifted.
                    return;
                }
                let (_, gesture) = mount.gestures.remove(index);
                let last = gesture.previous;
                self.finish(element, contact, gesture, last);
                return;
            }
            (InputEvent::MouseUp { client }, ContactKey::Mouse) => {
                let (_, gesture) = mount.gestures.remove(index);
                self.finish(element, contact, gesture, *client);
                return;
            }
            _ => return,
        };
        let gesture = &mut mount.gestures[index].1;
        gesture.previous = client;
        let event = gesture.event(GesturePhase::Move, client);
        gesture.handler.on_move(&event);
    }

    fn finish(&mut self, element: &N, contact: ContactKey, mut gesture: Gesture, client: Point) {
        for id in gesture.listeners {
            self.listeners.remove(id);
        }
        tracing::trace!(?element, ?contact, "gesture ended");
        let event = gesture.event(GesturePhase::End, client);
        gesture.handler.on_end(&event);
    }

    /// Number of gestures in flight on `element`.
    pub fn active_gestures(&self, element: &N) -> usize {
        self.mounts.get(element).map_or(0, |m| m.gestures.len())
    }

    /// Whether `contact` has a gesture in flight on `element`.
    pub fn is_tracking(&self, element: &N, contact: ContactKey) -> bool {
        self.mounts
            .get(element)
            .is_some_and(|m| m.position(contact).is_some())
    }

    /// Elements with a mounted handler, in no particular order.
    pub fn mounted(&self) -> impl Iterator<Item = &N> + '_ {
        self.mounts.keys()
    }

    /// Registered listeners, in registration order.
    pub fn listeners(&self) -> impl Iterator<Item = (ListenerId, &Listener<N>)> + '_ {
        self.listeners.iter()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<N: fmt::Debug> fmt::Debug for GestureTracker<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureTracker")
            .field("capabilities", &self.capabilities)
            .field("installed", &self.installed)
            .field("mounts", &self.mounts.len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// The `move_handler` property of one element.
///
/// Obtained from [`GestureTracker::property`] once the tracker is installed.
/// Reading is [`GestureTracker::handler`]; writing is
/// [`GestureTracker::set_handler`].
pub struct MoveHandlerProperty<'a, N> {
    tracker: &'a mut GestureTracker<N>,
    element: N,
}

impl<N: Clone + Eq + Hash + fmt::Debug> MoveHandlerProperty<'_, N> {
    /// The mounted factory.
    pub fn get(&self) -> Option<&HandlerFactory<N>> {
        self.tracker.handler(&self.element)
    }

    /// Replace the mounted factory; `None` unmounts.
    pub fn set(&mut self, factory: Option<HandlerFactory<N>>) {
        self.tracker.set_handler(&self.element, factory);
    }
}

impl<N: fmt::Debug> fmt::Debug for MoveHandlerProperty<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveHandlerProperty")
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}
