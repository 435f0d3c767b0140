//! Headless session driver.
//!
//! `Session` plays the part of the UI: it holds the view state (brush,
//! canvas preset, viewport, background controls) and forwards events to the
//! engine and surface. The engine itself holds none of this state.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::engine::{SeededRandom, StampEngine};
use crate::error::{Result, StampError};
use crate::loader::LoadStatus;
use crate::render::DrawingSurface;
use crate::types::{Background, BrushConfig, CanvasPreset, Colour, PointerSample};

use super::script::{SessionEvent, SessionScript};

/// Counters collected while replaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub strokes: usize,
    pub stamps: usize,
    pub previews: usize,
    pub uploads: usize,
    pub failed_uploads: usize,
}

/// View state plus the engine and surface it drives.
#[derive(Debug)]
pub struct Session {
    engine: StampEngine,
    surface: DrawingSurface,
    brush: BrushConfig,
    preset: CanvasPreset,
    viewport: (u32, u32),
    background_colour: Colour,
    transparent: bool,
    base_dir: PathBuf,
    summary: ReplaySummary,
}

impl Session {
    /// Set up a session from a script's header. Events are not run.
    ///
    /// `seed` overrides the script's seed. Relative image paths resolve
    /// against `base_dir`.
    pub fn from_script(script: &SessionScript, base_dir: &Path, seed: Option<u64>) -> Result<Self> {
        let rng = match seed.or(script.seed) {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };

        let (width, height) = script.canvas.resolve(script.viewport);
        let surface = DrawingSurface::new(width, height, script.dpr, script.initial_background());

        let mut session = Self {
            engine: StampEngine::new(rng),
            surface,
            brush: script.brush,
            preset: script.canvas,
            viewport: script.viewport,
            background_colour: script.background,
            transparent: script.transparent,
            base_dir: base_dir.to_path_buf(),
            summary: ReplaySummary::default(),
        };

        if let Some(image) = &script.image {
            session.upload(image)?;
        }

        Ok(session)
    }

    pub fn engine(&self) -> &StampEngine {
        &self.engine
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn preset(&self) -> CanvasPreset {
        self.preset
    }

    pub fn summary(&self) -> ReplaySummary {
        self.summary
    }

    /// Apply one event.
    pub fn apply(&mut self, event: &SessionEvent) -> Result<()> {
        self.summary.events += 1;
        match event {
            SessionEvent::Down(sample) => self.pointer_down(*sample),
            SessionEvent::Move(sample) => self.pointer_move(*sample),
            SessionEvent::Up => self.engine.on_pointer_up(),
            SessionEvent::Clear => self.surface.clear(),
            SessionEvent::Canvas { preset } => self.select_canvas(*preset),
            SessionEvent::Viewport { width, height } => {
                self.viewport = (*width, *height);
                if self.preset == CanvasPreset::Fullscreen {
                    self.select_canvas(CanvasPreset::Fullscreen);
                }
            }
            SessionEvent::Background {
                colour,
                transparent,
            } => {
                if let Some(colour) = colour {
                    self.background_colour = *colour;
                }
                if let Some(transparent) = transparent {
                    self.transparent = *transparent;
                }
                self.surface.set_background(Background::from_controls(
                    self.background_colour,
                    self.transparent,
                ));
            }
            SessionEvent::Brush(patch) => {
                self.brush = patch.apply(self.brush);
                debug!(brush = ?self.brush, "brush updated");
            }
            SessionEvent::Upload { path } => self.upload(path)?,
        }
        Ok(())
    }

    /// Apply every event in order.
    pub fn run(&mut self, events: &[SessionEvent]) -> Result<ReplaySummary> {
        for event in events {
            self.apply(event)?;
        }
        // a script that ends mid-stroke releases the pointer
        self.engine.on_pointer_up();
        Ok(self.summary)
    }

    /// Encode the surface as PNG.
    pub fn export(&self) -> Result<Vec<u8>> {
        self.surface.export()
    }

    fn pointer_down(&mut self, sample: PointerSample) {
        self.summary.strokes += 1;
        self.engine.on_pointer_down(sample);
    }

    fn pointer_move(&mut self, sample: PointerSample) {
        let outcome = self
            .engine
            .on_pointer_move(sample, &self.brush, &mut self.surface);
        if outcome.preview.is_some() {
            self.summary.previews += 1;
        }
        if outcome.committed.is_some() {
            self.summary.stamps += 1;
        }
    }

    /// Resize to a preset. Fullscreen is recomputed from the viewport.
    fn select_canvas(&mut self, preset: CanvasPreset) {
        self.preset = preset;
        let (width, height) = preset.resolve(self.viewport);
        let dpr = self.surface.dpr();
        self.surface.resize(width, height, dpr);
    }

    /// Read and decode an image file. A file that does not decode is
    /// logged and skipped, keeping the previous image.
    fn upload(&mut self, path: &Path) -> Result<()> {
        let full = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        };

        let bytes = std::fs::read(&full).map_err(|e| StampError::Io {
            path: full.clone(),
            message: format!("Failed to read image: {}", e),
        })?;

        self.summary.uploads += 1;
        let ticket = self.engine.begin_upload();
        match self.engine.complete_upload(ticket, &bytes) {
            Ok(LoadStatus::Applied) => Ok(()),
            Ok(LoadStatus::Stale) => Ok(()),
            Err(StampError::ImageDecode { message }) => {
                warn!(path = %full.display(), %message, "skipping image that failed to decode");
                self.summary.failed_uploads += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Load a script from disk, replay it and return the session.
pub fn replay_file(path: &Path, seed: Option<u64>) -> Result<Session> {
    let script = SessionScript::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut session = Session::from_script(&script, base_dir, seed)?;
    session.run(&script.events)?;
    Ok(session)
}
