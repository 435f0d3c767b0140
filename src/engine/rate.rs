//! Minimum-interval gating of stamp commits.

/// Whether a stamp at `now_ms` may be committed.
///
/// True when nothing has been committed yet, or at least `interval_ms`
/// has passed since the last commit.
pub fn should_commit(now_ms: i64, last_commit_ms: Option<i64>, interval_ms: u32) -> bool {
    match last_commit_ms {
        None => true,
        Some(last) => now_ms - last >= i64::from(interval_ms),
    }
}

/// Holds the last-commit timestamp for one stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimiter {
    last_commit_ms: Option<i64>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_commit_ms(&self) -> Option<i64> {
        self.last_commit_ms
    }

    /// Forget the last commit, so the next check passes.
    pub fn reset(&mut self) {
        self.last_commit_ms = None;
    }

    /// Start the clock at `now_ms` as if a stamp had just been committed.
    pub fn start_at(&mut self, now_ms: i64) {
        self.last_commit_ms = Some(now_ms);
    }

    /// Check the gate and record `now_ms` as the last commit if it passes.
    pub fn try_commit(&mut self, now_ms: i64, interval_ms: u32) -> bool {
        if should_commit(now_ms, self.last_commit_ms, interval_ms) {
            self.last_commit_ms = Some(now_ms);
            true
        } else {
            false
        }
    }
}
