// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`Document`](crate::Document) tree mutations.

/// A tree mutation the host refused to perform.
///
/// None of these are fatal to snapdrag; callers log and carry on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// `remove_child` was called with a node that is not a child of the given parent.
    #[error("the node to be removed is not a child of this node")]
    NotAChild,
    /// A handle no longer refers to a live node.
    #[error("the node handle is stale")]
    StaleNode,
    /// The insertion would make a node its own ancestor, or insert into a text node.
    #[error("the operation would yield an incorrect node tree")]
    HierarchyRequest,
}
