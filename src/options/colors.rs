use serde::{Deserialize, Serialize};

use crate::render::Rgba;

/// Color palette for the walkthrough scene.
///
/// The model box blends between its normal and highlight endpoints with
/// the pulse intensity; everything else is drawn flat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Canvas background.
    pub background: Rgba,
    /// Input text, tokens, and the box label.
    pub text: Rgba,
    /// Model box fill at rest.
    pub box_fill: Rgba,
    /// Model box outline at rest.
    pub box_stroke: Rgba,
    /// Model box fill at full pulse.
    pub box_fill_highlight: Rgba,
    /// Model box outline at full pulse.
    pub box_stroke_highlight: Rgba,
    /// Arrow color.
    pub arrow: Rgba,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0, 1.0],
            text: [0.196, 0.196, 0.196, 1.0],
            box_fill: [0.973, 0.976, 0.980, 1.0],
            box_stroke: [0.424, 0.459, 0.490, 1.0],
            box_fill_highlight: [0.588, 0.784, 1.0, 1.0],
            box_stroke_highlight: [0.392, 0.706, 1.0, 1.0],
            arrow: [0.392, 0.392, 0.392, 1.0],
        }
    }
}
