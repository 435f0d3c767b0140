//! Benchmarks for the stamping pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use stampbrush::engine::velocity;
use stampbrush::{
    Background, BrushConfig, DrawingSurface, ImageResource, Point, PointerSample, SessionScript,
    SpeedScaling, StampEngine, StampTransform,
};

fn stamp_image(size: u32) -> ImageResource {
    ImageResource::new(RgbaImage::from_fn(size, size, |x, y| {
        Rgba([(x * 7) as u8, (y * 3) as u8, 128, if (x + y) % 5 == 0 { 0 } else { 255 }])
    }))
}

// -- Compositing benchmarks --

fn bench_compositing(c: &mut Criterion) {
    let mut group = c.benchmark_group("compositing");

    let image = stamp_image(256);
    let mut surface = DrawingSurface::new(800, 800, 1.0, Background::default());
    let mut retina = DrawingSurface::new(800, 800, 2.0, Background::default());

    let small = StampTransform::new(Point::new(400.0, 400.0), 0.0, 20.0);
    let large = StampTransform::new(Point::new(400.0, 400.0), 0.7, 200.0);

    group.bench_function("stamp_small", |b| {
        b.iter(|| surface.stamp(Some(&image), black_box(&small)))
    });

    group.bench_function("stamp_large_rotated", |b| {
        b.iter(|| surface.stamp(Some(&image), black_box(&large)))
    });

    group.bench_function("stamp_large_dpr2", |b| {
        b.iter(|| retina.stamp(Some(&image), black_box(&large)))
    });

    group.finish();
}

// -- Stroke benchmarks --

fn bench_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke");

    let image = stamp_image(64);
    let brush = BrushConfig::default().with_draw_interval(0);
    let samples: Vec<PointerSample> = (0..200)
        .map(|i| PointerSample::new(100.0 + i as f32 * 3.0, 400.0, i64::from(i) * 8))
        .collect();

    group.bench_function("stroke_200_moves", |b| {
        b.iter(|| {
            let mut engine = StampEngine::seeded(42);
            engine.set_image(image.clone());
            let mut surface = DrawingSurface::new(800, 800, 1.0, Background::default());
            engine.on_pointer_down(samples[0]);
            for sample in &samples[1..] {
                black_box(engine.on_pointer_move(*sample, &brush, &mut surface));
            }
            engine.on_pointer_up();
        })
    });

    group.bench_function("velocity_estimate", |b| {
        let scaling = SpeedScaling::default();
        b.iter(|| {
            samples
                .windows(2)
                .map(|w| velocity::estimate(Some(&w[0]), &w[1], scaling))
                .sum::<f32>()
        })
    });

    group.finish();
}

// -- Export benchmarks --

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    group.sample_size(20);

    let image = stamp_image(64);
    let mut opaque = DrawingSurface::new(800, 800, 1.0, Background::default());
    let mut transparent = DrawingSurface::new(800, 800, 1.0, Background::Transparent);
    for i in 0..50 {
        let t = StampTransform::new(Point::new(i as f32 * 16.0, i as f32 * 16.0), 0.3, 80.0);
        opaque.stamp(Some(&image), &t);
        transparent.stamp(Some(&image), &t);
    }

    group.bench_function("export_opaque", |b| b.iter(|| opaque.export().unwrap()));
    group.bench_function("export_transparent", |b| {
        b.iter(|| transparent.export().unwrap())
    });

    let script = "canvas: square\nevents:\n".to_string()
        + &(0..100)
            .map(|i| format!("  - {{ event: move, x: {}, y: 10, t: {} }}\n", i * 4, i * 16))
            .collect::<String>();

    group.bench_function("parse_session", |b| {
        b.iter(|| SessionScript::parse(black_box(&script)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_compositing, bench_stroke, bench_export);
criterion_main!(benches);
