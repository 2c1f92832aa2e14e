// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle tests for `Snapshot`: place, move, remove.

use kurbo::Point;
use snapdrag_dom::{Document, MemoryDocument, NodeKind};
use snapdrag_snapshot::{Snapshot, SnapshotState};

#[test]
fn last_move_wins_over_placement() {
    let mut doc = MemoryDocument::new();
    let el = doc.create_element("div", None);
    let mut snapshot = Snapshot::create(&mut doc, &el, None).unwrap();

    snapshot.place(&mut doc, Point::new(10.0, 20.0));
    snapshot.move_to(&mut doc, Point::new(30.0, 40.0));

    assert_eq!(
        doc.inline_style(snapshot.clone_node(), "transform").as_deref(),
        Some("translateX(30px) translateY(40px)")
    );
    assert_eq!(snapshot.state(), SnapshotState::Moved);
}

#[test]
fn move_before_place_is_kept_until_placement_overrides_it() {
    let mut doc = MemoryDocument::new();
    let el = doc.create_element("div", None);
    let mut snapshot = Snapshot::create(&mut doc, &el, None).unwrap();

    snapshot.move_to(&mut doc, Point::new(5.0, 6.0));
    assert!(!snapshot.is_placed(&doc));
    assert_eq!(
        doc.inline_style(snapshot.clone_node(), "transform").as_deref(),
        Some("translateX(5px) translateY(6px)")
    );

    snapshot.place(&mut doc, Point::new(7.0, 8.0));
    assert!(snapshot.is_placed(&doc));
    assert_eq!(
        doc.inline_style(snapshot.clone_node(), "transform").as_deref(),
        Some("translateX(7px) translateY(8px)")
    );
}

#[test]
fn remove_detaches_and_tolerates_repeats() {
    let mut doc = MemoryDocument::new();
    let el = doc.create_element("div", None);
    let body = doc.body();
    let mut snapshot = Snapshot::create(&mut doc, &el, None).unwrap();

    snapshot.place(&mut doc, Point::ZERO);
    assert!(doc.children(body).contains(snapshot.clone_node()));

    snapshot.remove(&mut doc);
    assert!(!doc.children(body).contains(snapshot.clone_node()));
    assert_eq!(doc.parent_node(snapshot.clone_node()), None);

    snapshot.remove(&mut doc);
    assert_eq!(snapshot.state(), SnapshotState::Removed);
}

#[test]
fn later_snapshots_mount_above_earlier_ones() {
    let mut doc = MemoryDocument::new();
    let el = doc.create_element("div", None);
    let body = doc.body();
    let mut first = Snapshot::create(&mut doc, &el, None).unwrap();
    let mut second = Snapshot::create(&mut doc, &el, None).unwrap();

    second.place(&mut doc, Point::ZERO);
    first.place(&mut doc, Point::ZERO);

    // Same layer value; mount order decides.
    assert_eq!(
        doc.inline_style(first.clone_node(), "z-index"),
        doc.inline_style(second.clone_node(), "z-index")
    );
    assert_eq!(doc.children(body), &[*second.clone_node(), *first.clone_node()]);
}

#[test]
fn snapshot_is_a_deep_copy_of_its_source() {
    let mut doc = MemoryDocument::new();
    let el = doc.create_element("li", None);
    let label = doc.create_text_node("Row 3");
    doc.append_child(&el, &label).unwrap();

    let snapshot = Snapshot::create(&mut doc, &el, None).unwrap();
    let children = doc.child_nodes(snapshot.clone_node());
    assert_eq!(children.len(), 1);
    assert_eq!(doc.node_kind(&children[0]), NodeKind::Text);
    assert_eq!(doc.text_content(&children[0]).as_deref(), Some("Row 3"));
    assert_eq!(snapshot.source(), &el);
}

#[test]
fn text_nodes_can_be_snapshotted_but_comments_cannot() {
    let mut doc = MemoryDocument::new();
    let text = doc.create_text_node("loose");
    let comment = doc.create_other(NodeKind::COMMENT_NODE);

    assert!(Snapshot::create(&mut doc, &comment, None).is_none());
    // Text clones accept no style; creation still succeeds.
    assert!(Snapshot::create(&mut doc, &text, None).is_some());
}
