//! Per-transition animation state.

/// Direction of an in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Integration: the pending token travels from the output slot into
    /// the input text.
    Forward,
    /// Un-integration: the last committed token travels from the input
    /// text back to the output slot.
    Reverse,
}

/// A transition's visual effect in flight.
///
/// Exists only while exactly one transition is pending completion; the
/// engine destroys it when progress reaches 1. There is no cancellation —
/// an animation always runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct ArcAnimation {
    /// Progress in [0, 1], accumulated once per frame.
    pub progress: f32,
    /// Which way the token travels.
    pub direction: Direction,
}

impl ArcAnimation {
    /// Fresh forward (integration) animation.
    #[must_use]
    pub fn forward() -> Self {
        Self {
            progress: 0.0,
            direction: Direction::Forward,
        }
    }

    /// Fresh reverse (un-integration) animation.
    #[must_use]
    pub fn reverse() -> Self {
        Self {
            progress: 0.0,
            direction: Direction::Reverse,
        }
    }

    /// Accumulate one frame of progress. Returns `true` when the
    /// transition is ready to finalize.
    pub fn advance(&mut self, speed: f32) -> bool {
        self.progress += speed;
        self.progress >= 1.0
    }
}
