use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Animation tunables.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Arc-animation progress accumulated per frame.
    #[schemars(title = "Speed")]
    pub speed: f32,
    /// Distance below the model box the token arc dips, in pixels.
    #[schemars(title = "Arc Depth")]
    pub arc_depth: f32,
    /// Pulse fade per frame.
    #[schemars(title = "Pulse Decay")]
    pub pulse_decay: f32,
    /// Lerp rate of the input-text shift toward its target.
    #[schemars(title = "Text Shift Rate")]
    pub text_shift_rate: f32,
    /// How long the generation highlight is held, in wall-clock
    /// milliseconds (independent of the frame clock).
    #[schemars(title = "Highlight Hold (ms)")]
    pub highlight_hold_ms: u64,
}

impl AnimationOptions {
    /// The highlight hold as a [`Duration`].
    #[must_use]
    pub fn highlight_hold(&self) -> Duration {
        Duration::from_millis(self.highlight_hold_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            speed: 0.015,
            arc_depth: 200.0,
            pulse_decay: 0.05,
            text_shift_rate: 0.1,
            highlight_hold_ms: 500,
        }
    }
}
