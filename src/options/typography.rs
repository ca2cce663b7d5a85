use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Font sizes for the scene's text.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[schemars(title = "Typography", inline)]
#[serde(default)]
pub struct TypographyOptions {
    /// Size of the input text and tokens.
    #[schemars(title = "Token Size")]
    pub token_size: f32,
    /// Base size of the model box label (grows with the pulse).
    #[schemars(title = "Label Size")]
    pub label_size: f32,
}

impl Default for TypographyOptions {
    fn default() -> Self {
        Self {
            token_size: 42.0,
            label_size: 40.0,
        }
    }
}
