//! Session scripts and the headless driver that replays them.

mod replay;
mod script;

pub use replay::{replay_file, ReplaySummary, Session};
pub use script::{BrushPatch, SessionEvent, SessionScript, DEFAULT_VIEWPORT};
