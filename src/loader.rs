//! Image upload bookkeeping.
//!
//! Uploads may finish out of order (decoding can happen elsewhere). Each
//! upload gets a ticket when it starts; a finished upload is applied only if
//! no upload that started after it has already been applied. An older
//! result arriving late is discarded.

use tracing::{debug, warn};

use crate::error::Result;
use crate::types::ImageResource;

/// Identifies one upload, ordered by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// What happened to a finished upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The image replaced the current one.
    Applied,
    /// A newer upload already completed; this result was dropped.
    Stale,
}

/// Issues tickets and decides which finished upload wins.
#[derive(Debug, Default)]
pub struct ImageLoader {
    issued: u64,
    applied: Option<u64>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an upload.
    pub fn begin(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Generation of the upload currently shown, if any.
    pub fn applied(&self) -> Option<LoadTicket> {
        self.applied.map(LoadTicket)
    }

    /// Finish an upload whose decoding already happened.
    ///
    /// On `Ok(Applied)` the caller must install the returned image. A decode
    /// error is passed through and leaves the current image untouched.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        decoded: Result<ImageResource>,
    ) -> Result<(LoadStatus, Option<ImageResource>)> {
        let image = decoded.inspect_err(|e| {
            warn!(generation = ticket.0, error = %e, "image upload failed; keeping previous image");
        })?;

        if self.applied.is_some_and(|applied| applied > ticket.0) {
            debug!(
                generation = ticket.0,
                applied = self.applied,
                "discarding stale image upload"
            );
            return Ok((LoadStatus::Stale, None));
        }

        self.applied = Some(ticket.0);
        debug!(
            generation = ticket.0,
            width = image.width(),
            height = image.height(),
            "image upload applied"
        );
        Ok((LoadStatus::Applied, Some(image)))
    }

    /// Decode `bytes` and finish the upload.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        bytes: &[u8],
    ) -> Result<(LoadStatus, Option<ImageResource>)> {
        self.finish(ticket, ImageResource::decode(bytes))
    }
}
