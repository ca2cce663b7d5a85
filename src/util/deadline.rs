//! Wall-clock deadlines checked against an injected timestamp.
//!
//! The highlight-clear delay runs on real time, independent of the frame
//! clock. Rather than a fire-and-forget timer, the engine stores a deadline
//! and checks it each tick against the `now` its caller provides, which
//! keeps the behavior deterministic under test.

use web_time::{Duration, Instant};

/// A fixed point in wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `wait` after `now`.
    #[must_use]
    pub fn after(now: Instant, wait: Duration) -> Self {
        Self { at: now + wait }
    }

    /// Whether the deadline has been reached at `now`.
    #[must_use]
    pub fn passed(&self, now: Instant) -> bool {
        now >= self.at
    }
}
