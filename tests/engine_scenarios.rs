//! End-to-end stroke scenarios through the public engine API.

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use stampbrush::{
    Background, BrushConfig, Colour, DrawingSurface, ImageResource, Point, PointerSample,
    SequenceRandom, StampEngine,
};

fn red_stamp() -> ImageResource {
    ImageResource::new(RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255])))
}

fn engine(seed: u64) -> StampEngine {
    let mut engine = StampEngine::seeded(seed);
    engine.set_image(red_stamp());
    engine
}

#[test]
fn interval_gates_until_elapsed_then_stamps_at_pointer() {
    let mut engine = engine(11);
    let mut surface = DrawingSurface::new(400, 400, 1.0, Background::default());
    let brush = BrushConfig::default()
        .with_size(50.0)
        .with_rotation(0.0)
        .with_randomness(0.0)
        .with_draw_interval(50);

    engine.on_pointer_down(PointerSample::new(100.0, 100.0, 0));

    let early = engine.on_pointer_move(PointerSample::new(100.0, 100.0, 10), &brush, &mut surface);
    assert_eq!(early.committed, None);
    assert_eq!(surface.pixel(100, 100), Some(Colour::WHITE));

    let stamped = engine.on_pointer_move(PointerSample::new(100.0, 100.0, 60), &brush, &mut surface);
    let committed = stamped.committed.expect("stamp after interval");
    assert_eq!(committed.position, Point::new(100.0, 100.0));
    assert!(
        (47.5..=52.5).contains(&committed.render_size),
        "size {}",
        committed.render_size
    );
    assert_eq!(surface.pixel(100, 100), Some(Colour::rgb(255, 0, 0)));
}

#[test]
fn fast_pointer_saturates_size() {
    let mut engine = engine(5);
    let mut surface = DrawingSurface::new(800, 400, 1.0, Background::default());
    let brush = BrushConfig::default()
        .with_size(50.0)
        .with_randomness(0.0)
        .with_draw_interval(10);

    engine.on_pointer_down(PointerSample::new(100.0, 200.0, 0));
    let out = engine.on_pointer_move(PointerSample::new(300.0, 200.0, 10), &brush, &mut surface);

    assert_eq!(out.speed_multiplier, 2.5);
    let committed = out.committed.expect("stamp");
    let size = committed.render_size;
    assert!((47.5 * 2.5..=52.5 * 2.5).contains(&size), "size {}", size);
}

#[test]
fn exact_draws_give_exact_offsets() {
    let mut engine = StampEngine::new(SequenceRandom::new([0.0, 0.9, 0.5]));
    engine.set_image(red_stamp());
    let mut surface = DrawingSurface::new(400, 400, 1.0, Background::default());
    let brush = BrushConfig::default()
        .with_randomness(0.5)
        .with_draw_interval(0);

    engine.on_pointer_down(PointerSample::new(200.0, 200.0, 0));
    let out = engine.on_pointer_move(PointerSample::new(200.0, 200.0, 1), &brush, &mut surface);
    let committed = out.committed.unwrap();

    // x: -0.5 * 0.5 * 100, y: +0.4 * 0.5 * 100
    assert_eq!(committed.position.x, 175.0);
    assert!((committed.position.y - 220.0).abs() < 1e-3);
    assert_eq!(committed.render_size, brush.size);
}

#[test]
fn clear_then_export_is_background_only() {
    let mut engine = engine(2);
    let mut surface = DrawingSurface::new(64, 32, 2.0, Background::Opaque(Colour::rgb(10, 20, 30)));
    let brush = BrushConfig::default().with_draw_interval(0);

    engine.on_pointer_down(PointerSample::new(32.0, 16.0, 0));
    engine.on_pointer_move(PointerSample::new(32.0, 16.0, 5), &brush, &mut surface);
    engine.on_pointer_up();
    surface.clear();

    let png = surface.export().unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (128, 64));
    assert!(img.pixels().all(|p| p.0 == [10, 20, 30, 255]));
}

#[test]
fn transparent_export_keeps_alpha() {
    let mut engine = engine(3);
    let mut surface = DrawingSurface::new(100, 100, 1.0, Background::Transparent);
    let brush = BrushConfig::default()
        .with_size(20.0)
        .with_randomness(0.0)
        .with_draw_interval(0);

    engine.on_pointer_down(PointerSample::new(50.0, 50.0, 0));
    engine.on_pointer_move(PointerSample::new(50.0, 50.0, 1), &brush, &mut surface);

    let img = image::load_from_memory(&surface.export().unwrap()).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(50, 50).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 0]);
}

proptest! {
    #[test]
    fn committed_size_within_variance_of_speed_scaled_size(
        seed in any::<u64>(),
        moves in proptest::collection::vec((0.0f32..400.0, 0.0f32..400.0, 1i64..40), 1..40),
        size in 10.0f32..200.0,
        randomness in 0.0f32..=1.0,
    ) {
        let mut engine = engine(seed);
        let mut surface = DrawingSurface::new(64, 64, 1.0, Background::Transparent);
        let brush = BrushConfig::default()
            .with_size(size)
            .with_randomness(randomness)
            .with_draw_interval(0);

        engine.on_pointer_down(PointerSample::new(0.0, 0.0, 0));
        let mut t = 0;
        for (x, y, dt) in moves {
            t += dt;
            let out = engine.on_pointer_move(PointerSample::new(x, y, t), &brush, &mut surface);
            let committed = out.committed.expect("zero interval always commits");
            let base = size * out.speed_multiplier;
            prop_assert!(committed.render_size >= base * 0.95 - 1e-3);
            prop_assert!(committed.render_size <= base * 1.05 + 1e-3);
            prop_assert!((committed.position.x - x).abs() <= randomness * 50.0 + 1e-3);
            prop_assert!((committed.position.y - y).abs() <= randomness * 50.0 + 1e-3);
        }
    }
}
