//! stampbrush - Image stamping brush engine
//!
//! A library for painting repeated, transformed copies of an uploaded image
//! onto a raster canvas from a stream of pointer events, plus a headless
//! driver that replays recorded sessions and exports PNGs.

pub mod cli;
pub mod engine;
pub mod error;
pub mod loader;
pub mod output;
pub mod render;
pub mod session;
pub mod types;

pub use engine::{MoveOutcome, RandomSource, SeededRandom, SequenceRandom, StampEngine, StrokeState};
pub use error::{Result, StampError};
pub use loader::{ImageLoader, LoadStatus, LoadTicket};
pub use render::{encode_png, write_png, DrawingSurface};
pub use session::{replay_file, ReplaySummary, Session, SessionEvent, SessionScript};
pub use types::{
    Background, BrushConfig, CanvasPreset, Colour, ImageResource, Point, PointerSample,
    SpeedScaling, StampTransform,
};
