// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `snapdrag_clone` and `snapdrag_snapshot`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use snapdrag_clone::{CloneOptions, clone_node, clone_node_with};
use snapdrag_dom::{Document, MemoryDocument, NodeId, SVG_NAMESPACE};
use snapdrag_snapshot::Snapshot;

const PROPERTIES: &[(&str, &str)] = &[
    ("display", "flex"),
    ("color", "rgb(20, 20, 20)"),
    ("background-color", "rgb(250, 250, 250)"),
    ("font-family", "sans-serif"),
    ("font-size", "14px"),
    ("padding-left", "4px"),
    ("padding-right", "4px"),
    ("border-radius", "2px"),
];

/// A tree `depth` levels deep where every element has `fanout` children,
/// with one text node and one small SVG icon per leaf.
fn build_tree(doc: &mut MemoryDocument, depth: u32, fanout: u32) -> NodeId {
    let root = doc.create_element("div", None);
    for (name, value) in PROPERTIES {
        doc.set_resolved_style(root, name, value);
    }
    if depth == 0 {
        let text = doc.create_text_node("label");
        doc.append_child(&root, &text).unwrap();
        let icon = doc.create_element("svg", Some(SVG_NAMESPACE));
        doc.set_attribute(&icon, "viewBox", "0 0 16 16");
        let path = doc.create_element("path", Some(SVG_NAMESPACE));
        doc.set_attribute(&path, "d", "M0 0L16 16");
        doc.append_child(&icon, &path).unwrap();
        doc.append_child(&root, &icon).unwrap();
        return root;
    }
    for _ in 0..fanout {
        let child = build_tree(doc, depth - 1, fanout);
        doc.append_child(&root, &child).unwrap();
    }
    root
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone/tree");

    for depth in [1_u32, 3, 5] {
        group.bench_function(BenchmarkId::new("default", depth), |b| {
            b.iter_batched(
                || {
                    let mut doc = MemoryDocument::new();
                    let root = build_tree(&mut doc, depth, 3);
                    (doc, root)
                },
                |(mut doc, root)| black_box(clone_node(&mut doc, &root)),
                BatchSize::LargeInput,
            )
        });

        let options = CloneOptions::styles_only();
        group.bench_function(BenchmarkId::new("styles_only", depth), |b| {
            b.iter_batched(
                || {
                    let mut doc = MemoryDocument::new();
                    let root = build_tree(&mut doc, depth, 3);
                    (doc, root)
                },
                |(mut doc, root)| black_box(clone_node_with(&mut doc, &root, &options)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();

    let mut group = c.benchmark_group("snapshot");

    group.bench_function("create_place_remove", |b| {
        b.iter_batched(
            || {
                let mut doc = MemoryDocument::new();
                let root = build_tree(&mut doc, 2, 3);
                let body = doc.body();
                doc.append_child(&body, &root).unwrap();
                (doc, root)
            },
            |(mut doc, root)| {
                let mut snapshot = Snapshot::create(&mut doc, &root, None).unwrap();
                snapshot.place(&mut doc, Point::new(10.0, 10.0));
                snapshot.remove(&mut doc);
                black_box(doc)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("move_to", |b| {
        let mut doc = MemoryDocument::new();
        let root = build_tree(&mut doc, 2, 3);
        let mut snapshot = Snapshot::create(&mut doc, &root, None).unwrap();
        snapshot.place(&mut doc, Point::ZERO);
        let mut x = 0.0;
        b.iter(|| {
            x += 1.0;
            snapshot.move_to(&mut doc, Point::new(x, x * 0.5));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_clone);
criterion_main!(benches);
