//! Cumulative horizontal displacement of the input text.

use super::interpolation::lerp;

/// Eased horizontal offset applied to the input text.
///
/// `current` eases toward `target` every tick, unconditionally — the reflow
/// keeps settling even after the arc animation that retargeted it has
/// completed. Committing a token moves the target left by the token's
/// measured width; uncommitting moves it back right.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextShift {
    current: f32,
    target: f32,
}

impl TextShift {
    /// Shift at rest with no displacement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the target by `delta` pixels.
    pub fn shift_by(&mut self, delta: f32) {
        self.target += delta;
    }

    /// Ease one frame toward the target at the given lerp rate.
    pub fn tick(&mut self, rate: f32) {
        self.current = lerp(self.current, self.target, rate);
    }

    /// The displacement to draw with this frame.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// The displacement being eased toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }
}
