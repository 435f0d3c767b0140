//! Rendering module for stampbrush.
//!
//! This module owns the raster surface, the stamp compositor that draws
//! into it, and PNG encoding for export.

pub mod compositor;
mod png;
mod surface;

pub use png::{encode_png, write_png, DEFAULT_EXPORT_NAME};
pub use surface::DrawingSurface;
