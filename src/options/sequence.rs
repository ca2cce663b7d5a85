use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The sample data a session walks through.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Sequence", inline)]
#[serde(default)]
pub struct SequenceOptions {
    /// The fixed input prefix shown on the left.
    #[schemars(title = "Input Text")]
    pub input_text: String,
    /// The ordered output tokens the model "predicts", one per cycle.
    #[schemars(title = "Output Tokens")]
    pub output_tokens: Vec<String>,
    /// Label drawn inside the model box.
    #[schemars(title = "Model Label")]
    pub model_label: String,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            input_text: "Mike is quick,".to_owned(),
            output_tokens: vec![
                "he".to_owned(),
                "moves".to_owned(),
                "quickly".to_owned(),
                ".".to_owned(),
            ],
            model_label: "LLM".to_owned(),
        }
    }
}
