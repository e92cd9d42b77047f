// Copyright 2025 the ImageTouch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use imagetouch_transform::{FitMode, Slot, TransformModel};
use kurbo::{Point, Size, Vec2};

fn model(mode: FitMode) -> TransformModel<Size> {
    let mut model = TransformModel::new();
    model.set_view_size(Size::new(1080.0, 1920.0));
    model.set_fit_mode(mode);
    model.set_images(
        [Some(Size::new(4000.0, 3000.0)), Some(Size::new(3000.0, 4000.0))],
        Slot::Right,
    );
    model.apply(true, None, None);
    model
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/apply");
    for mode in [
        FitMode::FitSmall,
        FitMode::FitBig,
        FitMode::FitWidth,
        FitMode::FitHeight,
        FitMode::Fill,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{mode:?}")),
            &mode,
            |b, &mode| {
                let mut m = model(mode);
                b.iter(|| {
                    m.apply(true, None, None);
                    black_box(m.image_matrix());
                });
            },
        );
    }
    group.finish();
}

fn bench_zoom_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/zoom_pan");

    group.bench_function("zoom_to", |b| {
        let mut m = model(FitMode::FitSmall);
        let focus = Point::new(540.0, 960.0);
        let mut up = true;
        b.iter(|| {
            m.zoom_to(if up { 2.5 } else { 1.0 }, black_box(focus));
            up = !up;
        });
    });

    group.bench_function("pan_by_clamped", |b| {
        let mut m = model(FitMode::FitSmall);
        m.zoom_to(2.5, Point::new(540.0, 960.0));
        let mut sign = 1.0;
        b.iter(|| {
            m.pan_by(black_box(Vec2::new(400.0 * sign, -250.0 * sign)));
            sign = -sign;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_apply, bench_zoom_pan);
criterion_main!(benches);
