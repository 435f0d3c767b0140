//! Session script parsing.
//!
//! A session script describes the canvas, brush and stamp image, followed by
//! the ordered input events a UI would have produced. YAML and JSON are both
//! accepted; the extension picks the parser.
//!
//! ```yaml
//! canvas: square
//! dpr: 2
//! background: "#fdf6e3"
//! image: stamp.png
//! brush:
//!   size: 60
//!   randomness: 0.3
//! events:
//!   - { event: down, x: 100, y: 100, t: 0 }
//!   - { event: move, x: 140, y: 110, t: 16 }
//!   - { event: up }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StampError};
use crate::types::{Background, BrushConfig, CanvasPreset, Colour, PointerSample, SpeedScaling};

/// Viewport used for the fullscreen preset when the script gives none.
pub const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

/// A full session: initial settings plus input events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionScript {
    pub canvas: CanvasPreset,

    /// Viewport size, used by the fullscreen preset.
    pub viewport: (u32, u32),

    /// Device pixel ratio of the simulated display.
    pub dpr: f32,

    /// Background colour for opaque canvases.
    pub background: Colour,

    pub transparent: bool,

    /// Seed for jitter draws. Unseeded sessions are not reproducible.
    pub seed: Option<u64>,

    /// Stamp image, relative to the script's directory.
    pub image: Option<PathBuf>,

    pub brush: BrushConfig,

    pub events: Vec<SessionEvent>,
}

impl Default for SessionScript {
    fn default() -> Self {
        Self {
            canvas: CanvasPreset::default(),
            viewport: DEFAULT_VIEWPORT,
            dpr: 1.0,
            background: Colour::WHITE,
            transparent: false,
            seed: None,
            image: None,
            brush: BrushConfig::default(),
            events: Vec::new(),
        }
    }
}

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up,
    /// Repaint with the current background.
    Clear,
    /// Pick a canvas preset; destroys content.
    Canvas { preset: CanvasPreset },
    /// Change the viewport (window resize). Re-applies fullscreen.
    Viewport { width: u32, height: u32 },
    /// Background controls; applied at the next clear or resize.
    Background {
        #[serde(default)]
        colour: Option<Colour>,
        #[serde(default)]
        transparent: Option<bool>,
    },
    /// Slider changes.
    Brush(BrushPatch),
    /// Upload a new stamp image.
    Upload { path: PathBuf },
}

/// Partial brush update; unset fields keep their value.
///
/// Values go through the clamping builders, like slider input would.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushPatch {
    pub size: Option<f32>,
    pub rotation: Option<f32>,
    pub randomness: Option<f32>,
    #[serde(alias = "draw_interval")]
    pub draw_interval_ms: Option<i64>,
    pub speed_scaling: Option<bool>,
}

impl BrushPatch {
    pub fn apply(&self, brush: BrushConfig) -> BrushConfig {
        let mut brush = brush;
        if let Some(size) = self.size {
            brush = brush.with_size(size);
        }
        if let Some(rotation) = self.rotation {
            brush = brush.with_rotation(rotation);
        }
        if let Some(randomness) = self.randomness {
            brush = brush.with_randomness(randomness);
        }
        if let Some(interval) = self.draw_interval_ms {
            brush = brush.with_draw_interval(interval);
        }
        if let Some(enabled) = self.speed_scaling {
            brush = brush.with_speed_scaling(SpeedScaling {
                enabled,
                ..brush.speed_scaling
            });
        }
        brush
    }
}

impl SessionScript {
    /// Load a script, choosing JSON for `.json` files and YAML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StampError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read session: {}", e),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse(&content)
        }
    }

    /// Parse a YAML script.
    pub fn parse(content: &str) -> Result<Self> {
        let script: Self = serde_yaml::from_str(content).map_err(|e| StampError::Parse {
            message: format!("Invalid session: {}", e),
            help: Some("Check the session YAML syntax".to_string()),
        })?;
        Ok(script.normalized())
    }

    /// Parse a JSON script.
    pub fn parse_json(content: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(content).map_err(|e| StampError::Parse {
            message: format!("Invalid session: {}", e),
            help: Some("Check the session JSON syntax".to_string()),
        })?;
        Ok(script.normalized())
    }

    /// Starting background from the colour and toggle.
    pub fn initial_background(&self) -> Background {
        Background::from_controls(self.background, self.transparent)
    }

    /// Clamp values that skipped the builders during deserialization.
    fn normalized(mut self) -> Self {
        self.brush = self.brush.clamped();
        self
    }
}
