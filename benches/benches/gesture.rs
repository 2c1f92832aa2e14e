// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `snapdrag_gesture` dispatch.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use snapdrag_dom::{Document, MemoryDocument, NodeId};
use snapdrag_gesture::{
    Callbacks, Capabilities, GestureContext, GestureTracker, HandlerFactory, InputEvent, Touch,
};

fn summing() -> HandlerFactory<NodeId> {
    HandlerFactory::new(|_: &GestureContext<NodeId>| {
        let mut sum = 0.0;
        Callbacks::new().with_move(move |event| {
            sum += event.snapshot_x();
            black_box(sum);
        })
    })
}

/// `count` mounted siblings under the body, each 50px wide.
fn setup(count: usize) -> (MemoryDocument, Vec<NodeId>, GestureTracker<NodeId>) {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let mut tracker = GestureTracker::new(Capabilities::detect(&doc));
    let factory = summing();
    let elements = (0..count)
        .map(|i| {
            let el = doc.create_element("div", None);
            let x = i as f64 * 50.0;
            doc.set_layout_rect(el, Rect::new(x, 0.0, x + 50.0, 50.0));
            doc.append_child(&body, &el).unwrap();
            tracker.set_handler(&el, Some(factory.clone()));
            el
        })
        .collect();
    (doc, elements, tracker)
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/touch_move");

    // One contact on each of the first `contacts` elements, all moving together.
    for contacts in [1_usize, 4, 10] {
        group.bench_function(BenchmarkId::new("contacts", contacts), |b| {
            let (doc, elements, mut tracker) = setup(32);
            let mut down = Vec::new();
            for (i, el) in elements.iter().take(contacts).enumerate() {
                let touch = Touch::new(i as i64, i as f64 * 50.0 + 5.0, 5.0);
                down.push(touch);
                tracker.dispatch(&doc, &InputEvent::touch_start(*el, &down, touch));
            }
            let mut dy = 0.0;
            b.iter(|| {
                dy += 1.0;
                let touches: Vec<Touch> = down
                    .iter()
                    .map(|t| Touch::new(t.identifier.0, t.client.x, t.client.y + dy))
                    .collect();
                black_box(tracker.dispatch(&doc, &InputEvent::touch_move(&touches)))
            })
        });
    }

    group.finish();

    let mut group = c.benchmark_group("gesture/lifecycle");

    group.bench_function("mouse_down_move_up", |b| {
        let (doc, elements, mut tracker) = setup(32);
        let target = elements[16];
        b.iter(|| {
            tracker.dispatch(&doc, &InputEvent::mouse_down(target, 805.0, 5.0));
            tracker.dispatch(&doc, &InputEvent::MouseMove {
                client: Point::new(810.0, 9.0),
            });
            black_box(tracker.dispatch(&doc, &InputEvent::MouseUp {
                client: Point::new(810.0, 9.0),
            }))
        })
    });

    group.bench_function("remount_32", |b| {
        b.iter_batched(
            || setup(32),
            |(_doc, elements, mut tracker)| {
                let factory = summing();
                for el in &elements {
                    tracker.set_handler(el, Some(factory.clone()));
                }
                black_box(tracker.listener_count())
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
