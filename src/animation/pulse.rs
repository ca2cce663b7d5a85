//! Transient "model is thinking" emphasis.

/// A decaying emphasis value triggered on token generation.
///
/// Triggering sets the value to 1; each tick subtracts the configured decay
/// while the value is positive. The raw value may land slightly negative
/// after the final subtraction — [`intensity`](Self::intensity) clamps it
/// for rendering. The pulse is independent of any arc animation and can
/// outlive one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pulse {
    value: f32,
}

impl Pulse {
    /// Inactive pulse.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pulse to full strength.
    pub fn trigger(&mut self) {
        self.value = 1.0;
    }

    /// Decay one frame's worth.
    pub fn tick(&mut self, decay: f32) {
        if self.value > 0.0 {
            self.value -= decay;
        }
    }

    /// Rendering intensity in [0, 1].
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.value.clamp(0.0, 1.0)
    }

    /// Whether the pulse still carries any emphasis.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.value > 0.0
    }
}
