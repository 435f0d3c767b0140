//! Stroke state machine: turns pointer events into stamps.
//!
//! ```text
//! Idle --pointer down--> Drawing --pointer up--> Idle
//! ```
//!
//! Every move produces a preview transform for cursor feedback. While
//! drawing, a move additionally commits a stamp when the rate limiter
//! allows it. Velocity is always measured between consecutive move events,
//! not between committed stamps.

use tracing::{debug, trace};

use crate::error::{Result, StampError};
use crate::loader::{ImageLoader, LoadStatus, LoadTicket};
use crate::render::DrawingSurface;
use crate::types::{BrushConfig, ImageResource, PointerSample, StampTransform};

use super::jitter::{self, RandomSource, SeededRandom};
use super::rate::RateLimiter;
use super::velocity;

/// Whether the pointer is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing,
}

/// Result of one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Where the cursor preview should be drawn. `None` without an image.
    pub preview: Option<StampTransform>,
    /// The stamp drawn onto the surface by this move, if any.
    pub committed: Option<StampTransform>,
    pub speed_multiplier: f32,
}

/// Orchestrates velocity, jitter, rate limiting and compositing.
pub struct StampEngine {
    state: StrokeState,
    previous: Option<PointerSample>,
    limiter: RateLimiter,
    image: Option<ImageResource>,
    loader: ImageLoader,
    rng: Box<dyn RandomSource>,
    stroke_stamps: usize,
    total_stamps: usize,
}

impl StampEngine {
    /// Create an engine drawing randomness from `rng`.
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self {
            state: StrokeState::Idle,
            previous: None,
            limiter: RateLimiter::new(),
            image: None,
            loader: ImageLoader::new(),
            rng: Box::new(rng),
            stroke_stamps: 0,
            total_stamps: 0,
        }
    }

    /// Create an engine with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRandom::new(seed))
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == StrokeState::Drawing
    }

    /// The sample the next velocity estimate will be measured from.
    pub fn previous_sample(&self) -> Option<&PointerSample> {
        self.previous.as_ref()
    }

    pub fn image(&self) -> Option<&ImageResource> {
        self.image.as_ref()
    }

    /// The image, or `NoImageLoaded` for callers that need one.
    pub fn require_image(&self) -> Result<&ImageResource> {
        self.image.as_ref().ok_or(StampError::NoImageLoaded)
    }

    /// Install an image directly, bypassing upload ordering.
    pub fn set_image(&mut self, image: ImageResource) {
        self.image = Some(image);
    }

    /// Start an upload. See [`ImageLoader`].
    pub fn begin_upload(&mut self) -> LoadTicket {
        self.loader.begin()
    }

    /// Finish an upload with already-decoded data.
    pub fn finish_upload(
        &mut self,
        ticket: LoadTicket,
        decoded: Result<ImageResource>,
    ) -> Result<LoadStatus> {
        let (status, image) = self.loader.finish(ticket, decoded)?;
        if let Some(image) = image {
            self.image = Some(image);
        }
        Ok(status)
    }

    /// Decode `bytes` and finish the upload.
    pub fn complete_upload(&mut self, ticket: LoadTicket, bytes: &[u8]) -> Result<LoadStatus> {
        self.finish_upload(ticket, ImageResource::decode(bytes))
    }

    /// Upload in one step: begin and complete immediately.
    pub fn upload(&mut self, bytes: &[u8]) -> Result<LoadStatus> {
        let ticket = self.begin_upload();
        self.complete_upload(ticket, bytes)
    }

    /// Stamps committed during the current (or last) stroke.
    pub fn stroke_stamps(&self) -> usize {
        self.stroke_stamps
    }

    /// Stamps committed since the engine was created.
    pub fn total_stamps(&self) -> usize {
        self.total_stamps
    }

    /// Begin a stroke. Pointer-down itself does not stamp.
    ///
    /// The rate clock restarts at the pointer-down time: the first stamp of
    /// a stroke lands on the first move at least `draw_interval_ms` later.
    /// Nothing carries over from the previous stroke.
    pub fn on_pointer_down(&mut self, sample: PointerSample) {
        self.state = StrokeState::Drawing;
        self.previous = Some(sample);
        self.limiter.start_at(sample.timestamp_ms);
        self.stroke_stamps = 0;
        debug!(x = sample.x, y = sample.y, t = sample.timestamp_ms, "stroke started");
    }

    /// Handle a pointer move: compute the preview and, while drawing,
    /// possibly commit a stamp onto `surface`.
    pub fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        brush: &BrushConfig,
        surface: &mut DrawingSurface,
    ) -> MoveOutcome {
        let speed_multiplier =
            velocity::estimate(self.previous.as_ref(), &sample, brush.speed_scaling);
        self.previous = Some(sample);

        let Some(image) = self.image.as_ref() else {
            return MoveOutcome {
                preview: None,
                committed: None,
                speed_multiplier,
            };
        };

        let position =
            jitter::jitter_position(sample.position(), brush.randomness, self.rng.as_mut());
        let preview = StampTransform::new(position, brush.rotation, brush.size * speed_multiplier);

        let mut committed = None;
        if self.state == StrokeState::Drawing {
            if self.limiter.try_commit(sample.timestamp_ms, brush.draw_interval_ms) {
                let render_size =
                    jitter::jitter_size(preview.render_size, brush.size_variance, self.rng.as_mut());
                let transform = StampTransform { render_size, ..preview };
                surface.stamp(Some(image), &transform);
                self.stroke_stamps += 1;
                self.total_stamps += 1;
                committed = Some(transform);
            } else {
                trace!(
                    t = sample.timestamp_ms,
                    last = self.limiter.last_commit_ms(),
                    interval = brush.draw_interval_ms,
                    "stamp rate limited"
                );
            }
        }

        MoveOutcome {
            preview: Some(preview),
            committed,
            speed_multiplier,
        }
    }

    /// End the stroke.
    pub fn on_pointer_up(&mut self) {
        if self.state == StrokeState::Drawing {
            debug!(stamps = self.stroke_stamps, "stroke finished");
        }
        self.state = StrokeState::Idle;
        self.previous = None;
        self.limiter.reset();
    }
}

impl Default for StampEngine {
    fn default() -> Self {
        Self::new(SeededRandom::from_entropy())
    }
}

impl std::fmt::Debug for StampEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StampEngine")
            .field("state", &self.state)
            .field("previous", &self.previous)
            .field("limiter", &self.limiter)
            .field("has_image", &self.image.is_some())
            .field("total_stamps", &self.total_stamps)
            .finish()
    }
}
