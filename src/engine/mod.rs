//! The stamping engine.
//!
//! Leaf components are pure functions over explicit state so they can be
//! tested in isolation; `StampEngine` threads them together per event.

pub mod jitter;
pub mod rate;
mod stamp_engine;
pub mod velocity;

pub use jitter::{RandomSource, SeededRandom, SequenceRandom};
pub use rate::RateLimiter;
pub use stamp_engine::{MoveOutcome, StampEngine, StrokeState};
