//! Canvas size presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StampError};

/// Named canvas sizes offered by the canvas picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasPreset {
    /// Portrait, 800x1200.
    Poster,
    /// Landscape, 1200x800.
    Pc,
    /// Phone, 400x800.
    Mobile,
    /// 800x800.
    Square,
    /// Whatever the viewport currently is.
    #[default]
    Fullscreen,
}

impl CanvasPreset {
    pub const ALL: [CanvasPreset; 5] = [
        CanvasPreset::Poster,
        CanvasPreset::Pc,
        CanvasPreset::Mobile,
        CanvasPreset::Square,
        CanvasPreset::Fullscreen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CanvasPreset::Poster => "poster",
            CanvasPreset::Pc => "pc",
            CanvasPreset::Mobile => "mobile",
            CanvasPreset::Square => "square",
            CanvasPreset::Fullscreen => "fullscreen",
        }
    }

    /// Fixed logical size, or `None` for the viewport-sized preset.
    pub fn fixed_size(self) -> Option<(u32, u32)> {
        match self {
            CanvasPreset::Poster => Some((800, 1200)),
            CanvasPreset::Pc => Some((1200, 800)),
            CanvasPreset::Mobile => Some((400, 800)),
            CanvasPreset::Square => Some((800, 800)),
            CanvasPreset::Fullscreen => None,
        }
    }

    /// Logical size for this preset. Fullscreen is recomputed from the
    /// viewport each time it is selected.
    pub fn resolve(self, viewport: (u32, u32)) -> (u32, u32) {
        self.fixed_size().unwrap_or(viewport)
    }
}

impl FromStr for CanvasPreset {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| StampError::InvalidConfig {
                field: "canvas",
                message: format!("unknown canvas preset '{}'", s),
                help: Some("Use one of: poster, pc, mobile, square, fullscreen".to_string()),
            })
    }
}

impl fmt::Display for CanvasPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
