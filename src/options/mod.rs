//! Centralized session configuration with TOML preset support.
//!
//! All tweakable settings (sequence data, animation tunables, layout
//! gaps/sizes, colors, typography, keybindings) are consolidated here.
//! Options serialize to/from TOML so a slide deck can ship presets per
//! walkthrough.

mod animation;
mod colors;
mod layout;
mod sequence;
mod typography;

use std::path::Path;

pub use animation::AnimationOptions;
pub use colors::ColorOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
pub use sequence::SequenceOptions;
use serde::{Deserialize, Serialize};
pub use typography::TypographyOptions;

use crate::error::TokenvizError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Input prefix, output tokens, and the model box label.
    pub sequence: SequenceOptions,
    /// Animation speed, arc depth, pulse and shift rates.
    pub animation: AnimationOptions,
    /// Gaps, sizes, and stroke weights.
    pub layout: LayoutOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Font sizes.
    pub typography: TypographyOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TokenvizError> {
        let content = std::fs::read_to_string(path).map_err(TokenvizError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TokenvizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TokenvizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TokenvizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TokenvizError::Io)?;
        }
        std::fs::write(path, content).map_err(TokenvizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
