// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use imagetouch_gesture::{
    DragListener, DragSample, FlingSample, ImageViewTouch, PinchListener, PointerAction,
    PointerEvent, TouchConfig,
};
use kurbo::{Point, Size, Vec2};
use web_time::Instant;

fn view() -> ImageViewTouch<Size> {
    let mut v = ImageViewTouch::new(TouchConfig::default());
    v.on_layout(Size::new(1080.0, 1920.0));
    v.set_image(Some(Size::new(4000.0, 3000.0)), true);
    v.zoom_to(2.0);
    v
}

fn bench_drag_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/drag");

    // One down, 120 moves, one up: a two-second drag at 60 Hz.
    group.bench_function("pointer_and_drag_120_moves", |b| {
        b.iter_batched(
            view,
            |mut v| {
                let t0 = Instant::now();
                let mut last = Point::new(540.0, 960.0);
                v.on_pointer(&PointerEvent::new(PointerAction::Down, last, t0));
                for i in 1..=120_u32 {
                    let at = t0 + Duration::from_millis(u64::from(i) * 16);
                    let position = Point::new(540.0 - f64::from(i) * 3.0, 960.0);
                    v.on_pointer(&PointerEvent::new(PointerAction::Move, position, at));
                    v.on_drag(&DragSample {
                        delta: position - last,
                        pointer_count: 1,
                    });
                    last = position;
                }
                v.on_pointer(&PointerEvent::new(
                    PointerAction::Up,
                    last,
                    t0 + Duration::from_secs(2),
                ));
                black_box(v.image_matrix());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    c.bench_function("gesture/pinch_60_updates", |b| {
        b.iter_batched(
            view,
            |mut v| {
                let focus = Point::new(500.0, 900.0);
                v.on_scale_begin(focus);
                for _ in 0..60 {
                    v.on_scale(black_box(1.01), focus);
                }
                v.on_scale_end(Instant::now());
                black_box(v.scale());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_fling_animation(c: &mut Criterion) {
    c.bench_function("gesture/fling_ticks", |b| {
        b.iter_batched(
            view,
            |mut v| {
                let t0 = Instant::now();
                v.on_fling(&FlingSample {
                    origin: Point::new(900.0, 960.0),
                    position: Point::new(300.0, 960.0),
                    velocity: Vec2::new(-2400.0, 0.0),
                    pointer_count: 1,
                    time: t0,
                });
                let mut now = t0;
                while v.tick(now) {
                    now += Duration::from_millis(16);
                }
                black_box(v.bitmap_rect());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_drag_sequence, bench_pinch, bench_fling_animation);
criterion_main!(benches);
