//! Brush configuration.
//!
//! A `BrushConfig` is owned by whoever drives the engine (a UI, a session
//! script). The engine reads it on every call and never mutates it.
//!
//! Out-of-range input is clamped rather than rejected: sliders can overshoot
//! and a bad value should never stop a stroke.

use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed stamp sizes in logical pixels.
pub const SIZE_RANGE: RangeInclusive<f32> = 10.0..=200.0;

/// Allowed positional randomness.
pub const RANDOMNESS_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Longest accepted minimum interval between stamps.
pub const MAX_DRAW_INTERVAL_MS: u32 = 1000;

/// Fixed relative size variance applied to every committed stamp.
pub const SIZE_VARIANCE_FACTOR: f32 = 0.1;

/// Upper bound of the pointer-speed size multiplier.
pub const MAX_SPEED_MULTIPLIER: f32 = 2.5;

/// Pointer-speed-driven scaling policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedScaling {
    pub enabled: bool,
    pub max_multiplier: f32,
}

impl Default for SpeedScaling {
    fn default() -> Self {
        Self {
            enabled: true,
            max_multiplier: MAX_SPEED_MULTIPLIER,
        }
    }
}

impl SpeedScaling {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Brush parameters for stamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Base stamp edge length in logical pixels.
    pub size: f32,

    /// Stamp rotation in radians, `[0, 2π)`.
    pub rotation: f32,

    /// Positional jitter amount, `[0, 1]`.
    pub randomness: f32,

    /// Minimum wall-clock gap between committed stamps.
    #[serde(alias = "draw_interval")]
    pub draw_interval_ms: u32,

    /// Relative size variance; fixed at 0.1 (±5%).
    #[serde(skip)]
    pub size_variance: f32,

    pub speed_scaling: SpeedScaling,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            size: 50.0,
            rotation: 0.0,
            randomness: 0.2,
            draw_interval_ms: 50,
            size_variance: SIZE_VARIANCE_FACTOR,
            speed_scaling: SpeedScaling::default(),
        }
    }
}

impl BrushConfig {
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = clamp_size(size);
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = wrap_rotation(rotation);
        self
    }

    pub fn with_randomness(mut self, randomness: f32) -> Self {
        self.randomness = clamp_randomness(randomness);
        self
    }

    /// Accepts a signed value so negative slider input clamps to zero.
    pub fn with_draw_interval(mut self, interval_ms: i64) -> Self {
        self.draw_interval_ms = clamp_interval(interval_ms);
        self
    }

    pub fn with_speed_scaling(mut self, speed_scaling: SpeedScaling) -> Self {
        self.speed_scaling = speed_scaling;
        self
    }

    /// Return a copy with every field pulled back into its valid range.
    ///
    /// Used after deserializing, where fields bypass the builder methods.
    pub fn clamped(self) -> Self {
        let max_multiplier = if self.speed_scaling.max_multiplier.is_finite() {
            self.speed_scaling.max_multiplier.max(1.0)
        } else {
            MAX_SPEED_MULTIPLIER
        };

        Self {
            size: clamp_size(self.size),
            rotation: wrap_rotation(self.rotation),
            randomness: clamp_randomness(self.randomness),
            draw_interval_ms: self.draw_interval_ms.min(MAX_DRAW_INTERVAL_MS),
            size_variance: SIZE_VARIANCE_FACTOR,
            speed_scaling: SpeedScaling {
                enabled: self.speed_scaling.enabled,
                max_multiplier,
            },
        }
    }
}

fn clamp_size(size: f32) -> f32 {
    if size.is_nan() {
        return BrushConfig::default().size;
    }
    size.clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end())
}

fn clamp_randomness(randomness: f32) -> f32 {
    if randomness.is_nan() {
        return BrushConfig::default().randomness;
    }
    randomness.clamp(*RANDOMNESS_RANGE.start(), *RANDOMNESS_RANGE.end())
}

fn clamp_interval(interval_ms: i64) -> u32 {
    interval_ms.clamp(0, MAX_DRAW_INTERVAL_MS as i64) as u32
}

/// Wrap an angle into `[0, 2π)`. Angles are periodic, so wrapping is the
/// nearest valid equivalent.
fn wrap_rotation(rotation: f32) -> f32 {
    if !rotation.is_finite() {
        return 0.0;
    }
    let wrapped = rotation.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
