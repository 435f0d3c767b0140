//! The persistent raster the stamps land on.
//!
//! Sizes are given in logical pixels; the backing buffer is that size times
//! the device pixel ratio so exports stay sharp on high-density displays.

use image::{Rgba, RgbaImage};
use tracing::info;

use crate::error::Result;
use crate::types::{Background, Colour, ImageResource, StampTransform};

use super::{compositor, png};

/// Raster surface with device-pixel-ratio scaled backing storage.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    width: u32,
    height: u32,
    dpr: f32,
    background: Background,
    buffer: RgbaImage,
}

impl DrawingSurface {
    /// Create a surface already sized and painted with `background`.
    pub fn new(width: u32, height: u32, dpr: f32, background: Background) -> Self {
        let mut surface = Self {
            width: 0,
            height: 0,
            dpr: 1.0,
            background,
            buffer: RgbaImage::new(0, 0),
        };
        surface.resize(width, height, dpr);
        surface
    }

    /// Logical width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    /// Backing buffer dimensions in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn background(&self) -> Background {
        self.background
    }

    /// Change the background. It is applied by the next `clear` or `resize`.
    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Resize to `width`x`height` logical pixels at `dpr`.
    ///
    /// Reallocates the backing buffer and repaints the background; any
    /// previous content is discarded. Stamps are always sampled
    /// nearest-neighbour so image edges stay crisp at every ratio.
    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let width = width.max(1);
        let height = height.max(1);

        self.width = width;
        self.height = height;
        self.dpr = dpr;

        let (bw, bh) = (backing_len(width, dpr), backing_len(height, dpr));
        self.buffer = RgbaImage::from_pixel(bw, bh, Rgba(self.background.fill().to_rgba()));

        info!(width, height, dpr, backing_width = bw, backing_height = bh, "surface resized");
    }

    /// Repaint the whole surface with the background. Keeps the size.
    pub fn clear(&mut self) {
        let fill = Rgba(self.background.fill().to_rgba());
        for pixel in self.buffer.pixels_mut() {
            *pixel = fill;
        }
    }

    /// Draw one stamp. A missing image is a no-op.
    pub fn stamp(&mut self, image: Option<&ImageResource>, transform: &StampTransform) {
        compositor::stamp(self, image, transform);
    }

    /// Encode the surface as PNG at full backing resolution.
    ///
    /// An opaque background is composited under everything, so the output
    /// reflects the background configured now even if it changed since the
    /// last clear. A transparent background exports the raw RGBA buffer.
    pub fn export(&self) -> Result<Vec<u8>> {
        let flattened = self.flattened();
        let bytes = png::encode_png(&flattened)?;
        info!(
            width = flattened.width(),
            height = flattened.height(),
            bytes = bytes.len(),
            "surface exported"
        );
        Ok(bytes)
    }

    /// The buffer as it would be exported.
    pub fn flattened(&self) -> RgbaImage {
        match self.background {
            Background::Transparent => self.buffer.clone(),
            Background::Opaque(colour) => {
                let base = Rgba(colour.to_rgba());
                let mut out = self.buffer.clone();
                for pixel in out.pixels_mut() {
                    if pixel.0[3] == 255 {
                        continue;
                    }
                    let mut under = base;
                    image::Pixel::blend(&mut under, pixel);
                    *pixel = under;
                }
                out
            }
        }
    }

    /// Read one backing pixel. Returns `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.buffer.width() || y >= self.buffer.height() {
            return None;
        }
        let [r, g, b, a] = self.buffer.get_pixel(x, y).0;
        Some(Colour::new(r, g, b, a))
    }

    /// Read-only access to the backing buffer.
    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut RgbaImage {
        &mut self.buffer
    }
}

fn backing_len(logical: u32, dpr: f32) -> u32 {
    ((logical as f32 * dpr).round() as u32).max(1)
}
