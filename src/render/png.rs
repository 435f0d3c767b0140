//! PNG output for exported surfaces.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Result, StampError};

/// File name exports are saved under when none is given.
pub const DEFAULT_EXPORT_NAME: &str = "drawing.png";

/// Encode an RGBA buffer as a complete PNG file in memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| StampError::Encode {
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(out.into_inner())
}

/// Write encoded PNG bytes to `path`, creating parent directories.
pub fn write_png(bytes: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StampError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    std::fs::write(path, bytes).map_err(|e| StampError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
