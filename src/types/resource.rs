//! The uploaded stamp image.

use image::RgbaImage;

use crate::error::{Result, StampError};

/// An immutable decoded raster used as the stamp.
///
/// Replaced wholesale on every successful upload, never edited in place.
#[derive(Debug, Clone)]
pub struct ImageResource {
    pixels: RgbaImage,
}

impl ImageResource {
    /// Wrap an already-decoded buffer.
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Decode an uploaded file. The format is sniffed from the bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).map_err(|e| StampError::ImageDecode {
            message: e.to_string(),
        })?;
        let pixels = decoded.to_rgba8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(StampError::ImageDecode {
                message: "image has no pixels".to_string(),
            });
        }
        Ok(Self::new(pixels))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
