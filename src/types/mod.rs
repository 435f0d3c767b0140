//! Core domain types for stampbrush.
//!
//! This module contains the values passed into and out of the engine:
//! - `BrushConfig` - size, rotation, jitter and rate settings
//! - `PointerSample` - timestamped pointer positions
//! - `StampTransform` - a resolved stamp placement
//! - `Colour` / `Background` - canvas fill
//! - `CanvasPreset` - named canvas sizes
//! - `ImageResource` - the decoded stamp image

mod brush;
mod colour;
mod pointer;
mod preset;
mod resource;
mod transform;

pub use brush::{
    BrushConfig, SpeedScaling, MAX_DRAW_INTERVAL_MS, MAX_SPEED_MULTIPLIER, RANDOMNESS_RANGE,
    SIZE_RANGE, SIZE_VARIANCE_FACTOR,
};
pub use colour::{Background, Colour};
pub use pointer::{Point, PointerSample};
pub use preset::CanvasPreset;
pub use resource::ImageResource;
pub use transform::StampTransform;
