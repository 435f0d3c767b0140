//! Randomised position and size offsets.
//!
//! All draws go through a `RandomSource` so tests can feed exact sequences.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Positional jitter span in pixels at `randomness = 1`.
pub const POSITION_SPAN: f32 = 100.0;

/// A source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// Seedable pseudo-random source backed by `SmallRng`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    next: usize,
}

impl SequenceRandom {
    /// Values are clamped into `[0, 1)`. An empty list always yields 0.5,
    /// which maps to a zero offset.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, next: 0 }
    }

    /// How many draws have been taken so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.next += 1;
            return 0.5;
        }
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

/// A draw mapped to `[-0.5, 0.5)`.
fn centered(rng: &mut dyn RandomSource) -> f32 {
    rng.next_unit() - 0.5
}

/// Offset `base` by up to `randomness * 50` px per axis.
///
/// Always consumes two draws (x then y), even when `randomness` is zero.
pub fn jitter_position(base: Point, randomness: f32, rng: &mut dyn RandomSource) -> Point {
    let dx = centered(rng) * randomness * POSITION_SPAN;
    let dy = centered(rng) * randomness * POSITION_SPAN;
    Point::new(base.x + dx, base.y + dy)
}

/// Scale `base` by `1 + U(-0.5, 0.5) * variance`. Consumes one draw.
pub fn jitter_size(base: f32, variance: f32, rng: &mut dyn RandomSource) -> f32 {
    base * (1.0 + centered(rng) * variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_randomness_is_identity() {
        let mut rng = SequenceRandom::new([0.0, 0.99]);
        let p = jitter_position(Point::new(100.0, 100.0), 0.0, &mut rng);
        assert_eq!(p, Point::new(100.0, 100.0));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_exact_offsets() {
        // 0.75 -> +0.25, 0.25 -> -0.25
        let mut rng = SequenceRandom::new([0.75, 0.25]);
        let p = jitter_position(Point::new(10.0, 20.0), 0.5, &mut rng);
        assert_eq!(p, Point::new(10.0 + 12.5, 20.0 - 12.5));
    }

    #[test]
    fn test_size_variance_extremes() {
        let mut rng = SequenceRandom::new([0.0]);
        assert!((jitter_size(50.0, 0.1, &mut rng) - 47.5).abs() < 1e-4);

        let mut rng = SequenceRandom::new([0.5]);
        assert_eq!(jitter_size(50.0, 0.1, &mut rng), 50.0);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut rng = SequenceRandom::new([0.1, 0.2]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.1);
    }

    #[test]
    fn test_sequence_clamps_to_half_open() {
        let mut rng = SequenceRandom::new([1.0, -3.0]);
        assert!(rng.next_unit() < 1.0);
        assert_eq!(rng.next_unit(), 0.0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..16 {
            let v = a.next_unit();
            assert!((0.0..1.0).contains(&v));
            assert_eq!(v, b.next_unit());
        }
    }

    proptest! {
        #[test]
        fn prop_position_within_bounds(seed in any::<u64>(), r in 0.0f32..=1.0) {
            let mut rng = SeededRandom::new(seed);
            let base = Point::new(400.0, 300.0);
            let p = jitter_position(base, r, &mut rng);
            prop_assert!((p.x - base.x).abs() <= r * 50.0 + 1e-3);
            prop_assert!((p.y - base.y).abs() <= r * 50.0 + 1e-3);
        }

        #[test]
        fn prop_size_within_five_percent(seed in any::<u64>(), base in 10.0f32..500.0) {
            let mut rng = SeededRandom::new(seed);
            let s = jitter_size(base, 0.1, &mut rng);
            prop_assert!(s >= base * 0.95 - 1e-3 && s <= base * 1.05 + 1e-3);
        }
    }
}
