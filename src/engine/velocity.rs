//! Pointer velocity to size multiplier.
//!
//! Only the previous sample is needed; there is no trajectory buffer.

use crate::types::{PointerSample, SpeedScaling};

/// Speeds at or below this (px/ms) never scale the stamp.
pub const DEAD_ZONE: f32 = 0.1;

/// Speed range above the dead zone over which the multiplier ramps up.
pub const RAMP: f32 = 2.0;

/// Pointer speed in pixels per millisecond, or `None` when there is no
/// previous sample or time did not advance.
pub fn speed(previous: Option<&PointerSample>, current: &PointerSample) -> Option<f32> {
    let previous = previous?;
    let elapsed = current.timestamp_ms - previous.timestamp_ms;
    if elapsed <= 0 {
        return None;
    }
    let distance = previous.position().distance_to(current.position());
    Some(distance / elapsed as f32)
}

/// Size multiplier for the move from `previous` to `current`.
///
/// Always in `[1.0, scaling.max_multiplier]` and non-decreasing in speed.
pub fn estimate(
    previous: Option<&PointerSample>,
    current: &PointerSample,
    scaling: SpeedScaling,
) -> f32 {
    if !scaling.enabled {
        return 1.0;
    }
    match speed(previous, current) {
        Some(speed) => multiplier_for_speed(speed, scaling.max_multiplier),
        None => 1.0,
    }
}

/// Cubic ease-out from 1.0 at the dead zone edge to `max_multiplier` at
/// `DEAD_ZONE + RAMP` px/ms and beyond.
pub fn multiplier_for_speed(speed: f32, max_multiplier: f32) -> f32 {
    if speed.is_nan() || speed <= DEAD_ZONE {
        return 1.0;
    }
    let t = ((speed - DEAD_ZONE) / RAMP).min(1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    1.0 + eased * (max_multiplier.max(1.0) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(x: f32, y: f32, t: i64) -> PointerSample {
        PointerSample::new(x, y, t)
    }

    #[test]
    fn test_no_previous_is_identity() {
        assert_eq!(estimate(None, &sample(5.0, 5.0, 10), SpeedScaling::default()), 1.0);
    }

    #[test]
    fn test_non_positive_elapsed_is_identity() {
        let prev = sample(0.0, 0.0, 100);
        let scaling = SpeedScaling::default();
        assert_eq!(estimate(Some(&prev), &sample(500.0, 0.0, 100), scaling), 1.0);
        assert_eq!(estimate(Some(&prev), &sample(500.0, 0.0, 90), scaling), 1.0);
    }

    #[test]
    fn test_dead_zone() {
        let prev = sample(0.0, 0.0, 0);
        // exactly 0.1 px/ms
        assert_eq!(
            estimate(Some(&prev), &sample(10.0, 0.0, 100), SpeedScaling::default()),
            1.0
        );
        // stationary pointer
        assert_eq!(
            estimate(Some(&prev), &sample(0.0, 0.0, 100), SpeedScaling::default()),
            1.0
        );
    }

    #[test]
    fn test_saturates_at_max() {
        let prev = sample(0.0, 0.0, 0);
        // 20 px/ms
        let m = estimate(Some(&prev), &sample(200.0, 0.0, 10), SpeedScaling::default());
        assert_eq!(m, 2.5);
    }

    #[test]
    fn test_midpoint_value() {
        // t = 0.5 -> eased = 0.875 -> 1 + 0.875 * 1.5
        let m = multiplier_for_speed(1.1, 2.5);
        assert!((m - 2.3125).abs() < 1e-5);
    }

    #[test]
    fn test_disabled_scaling() {
        let prev = sample(0.0, 0.0, 0);
        let m = estimate(Some(&prev), &sample(200.0, 0.0, 10), SpeedScaling::disabled());
        assert_eq!(m, 1.0);
    }

    #[test]
    fn test_diagonal_distance() {
        let prev = sample(0.0, 0.0, 0);
        assert_eq!(speed(Some(&prev), &sample(30.0, 40.0, 10)), Some(5.0));
    }

    proptest! {
        #[test]
        fn prop_multiplier_bounded(
            x0 in -2000.0f32..2000.0, y0 in -2000.0f32..2000.0,
            x1 in -2000.0f32..2000.0, y1 in -2000.0f32..2000.0,
            t0 in 0i64..10_000, dt in -50i64..500,
        ) {
            let prev = sample(x0, y0, t0);
            let cur = sample(x1, y1, t0 + dt);
            let m = estimate(Some(&prev), &cur, SpeedScaling::default());
            prop_assert!((1.0..=2.5).contains(&m));
        }

        #[test]
        fn prop_multiplier_monotonic(a in 0.0f32..10.0, b in 0.0f32..10.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(multiplier_for_speed(lo, 2.5) <= multiplier_for_speed(hi, 2.5));
        }

        #[test]
        fn prop_dead_zone_exact(speed in 0.0f32..=0.1) {
            prop_assert_eq!(multiplier_for_speed(speed, 2.5), 1.0);
        }
    }
}
