// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One host document together with its gesture registry.

use snapdrag_clone::clone_node;
use snapdrag_dom::Document;
use snapdrag_gesture::{
    Capabilities, DispatchOutcome, GestureTracker, HandlerFactory, InputEvent, InstallOptions,
    InstallOutcome, MoveHandlerProperty,
};
use snapdrag_snapshot::Snapshot;

/// Options for [`Environment::polyfill`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PolyfillOptions {
    /// Reinstall the move handler property even if it is already installed.
    pub force: bool,
}

/// What [`Environment::polyfill`] installed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PolyfillReport {
    /// The per-element `move_handler` property.
    pub move_handler: InstallOutcome,
    /// The document-level snapshot factory. Never skipped.
    pub snapshot: InstallOutcome,
}

/// A host document, its capabilities and its move handler registry.
///
/// Capabilities are probed once, when the environment is created.
#[derive(Debug)]
pub struct Environment<D: Document> {
    doc: D,
    tracker: GestureTracker<D::Node>,
    snapshot_factory: bool,
}

impl<D: Document> Environment<D> {
    /// Wrap `doc`.
    pub fn new(doc: D) -> Self {
        let capabilities = Capabilities::detect(&doc);
        tracing::debug!(?capabilities, "environment created");
        Self {
            doc,
            tracker: GestureTracker::new(capabilities),
            snapshot_factory: false,
        }
    }

    /// Install the `move_handler` property and the document snapshot factory.
    ///
    /// Installing the property a second time without `force` is skipped with a
    /// warning. The snapshot factory is always (re)installed.
    pub fn polyfill(&mut self, options: PolyfillOptions) -> PolyfillReport {
        let move_handler = self.tracker.install(InstallOptions {
            force: options.force,
        });
        let snapshot = if self.snapshot_factory {
            InstallOutcome::Reinstalled
        } else {
            InstallOutcome::Installed
        };
        self.snapshot_factory = true;
        PolyfillReport {
            move_handler,
            snapshot,
        }
    }

    /// Whether [`polyfill`](Self::polyfill) has installed the document snapshot factory.
    pub fn has_snapshot_factory(&self) -> bool {
        self.snapshot_factory
    }

    /// Snapshot `element` into an overlay mounted in `container` (the body when `None`).
    ///
    /// Drive the result with [`Snapshot::place`], [`Snapshot::move_to`] and
    /// [`Snapshot::remove`] against [`document_mut`](Self::document_mut).
    pub fn create_snapshot(
        &mut self,
        element: &D::Node,
        container: Option<D::Node>,
    ) -> Option<Snapshot<D::Node>> {
        Snapshot::create(&mut self.doc, element, container)
    }

    /// Deep clone `node` with its resolved style baked inline.
    pub fn clone_node(&mut self, node: &D::Node) -> Option<D::Node> {
        clone_node(&mut self.doc, node)
    }

    /// Mount `factory` on `element`, replacing any previous handler; `None` unmounts.
    pub fn set_move_handler(
        &mut self,
        element: &D::Node,
        factory: Option<HandlerFactory<D::Node>>,
    ) -> Option<HandlerFactory<D::Node>> {
        self.tracker.set_handler(element, factory)
    }

    /// The factory mounted on `element`.
    pub fn get_move_handler(&self, element: &D::Node) -> Option<&HandlerFactory<D::Node>> {
        self.tracker.handler(element)
    }

    /// The `move_handler` property of `element`; `None` until polyfilled.
    pub fn move_handler_property(
        &mut self,
        element: &D::Node,
    ) -> Option<MoveHandlerProperty<'_, D::Node>> {
        self.tracker.property(element)
    }

    /// Forward one input event to the mounted move handlers.
    pub fn dispatch(&mut self, event: &InputEvent<D::Node>) -> DispatchOutcome {
        self.tracker.dispatch(&self.doc, event)
    }

    /// Drop handlers of elements that no longer exist; returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        self.tracker.prune(&self.doc)
    }

    /// The host document.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// The host document, mutably.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    /// The gesture registry.
    pub fn tracker(&self) -> &GestureTracker<D::Node> {
        &self.tracker
    }

    /// Unwrap the document. Mounted handlers are dropped without end events.
    pub fn into_document(self) -> D {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdrag_dom::MemoryDocument;

    #[test]
    fn capabilities_are_probed_from_the_document() {
        let mut doc = MemoryDocument::new();
        doc.set_passive_listener_support(false);
        let env = Environment::new(doc);
        assert!(!env.tracker().capabilities().passive_listeners);
    }

    #[test]
    fn polyfill_reports_both_installs() {
        let mut env = Environment::new(MemoryDocument::new());
        assert!(!env.has_snapshot_factory());
        assert_eq!(
            env.polyfill(PolyfillOptions::default()),
            PolyfillReport {
                move_handler: InstallOutcome::Installed,
                snapshot: InstallOutcome::Installed,
            }
        );
        assert_eq!(
            env.polyfill(PolyfillOptions { force: true }),
            PolyfillReport {
                move_handler: InstallOutcome::Reinstalled,
                snapshot: InstallOutcome::Reinstalled,
            }
        );
        assert!(env.has_snapshot_factory());
    }
}
