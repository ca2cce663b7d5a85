use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Gaps, sizes, and stroke weights.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Gap between adjacent elements, in pixels.
    #[schemars(title = "Element Gap")]
    pub element_gap: f32,
    /// Side length of the model box.
    #[schemars(title = "Model Box Size")]
    pub llm_size: f32,
    /// Estimated input-text width used to place the input anchor before
    /// any measurement happens.
    #[schemars(title = "Input Width Estimate")]
    pub input_width_estimate: f32,
    /// Desired input-arrow length used to place the input anchor.
    #[schemars(title = "Arrow Length Hint")]
    pub arrow_length_hint: f32,
    /// Stroke weight of the model box outline.
    #[schemars(title = "Box Stroke Weight")]
    pub box_stroke_weight: f32,
    /// Stroke weight of the arrows.
    #[schemars(title = "Arrow Weight")]
    pub arrow_weight: f32,
    /// Extra box size at full pulse, in pixels.
    #[schemars(title = "Pulse Box Growth")]
    pub pulse_box_growth: f32,
    /// Extra label font size at full pulse, in pixels.
    #[schemars(title = "Pulse Label Growth")]
    pub pulse_label_growth: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            element_gap: 20.0,
            llm_size: 180.0,
            input_width_estimate: 250.0,
            arrow_length_hint: 80.0,
            box_stroke_weight: 2.0,
            arrow_weight: 3.0,
            pulse_box_growth: 10.0,
            pulse_label_growth: 8.0,
        }
    }
}
