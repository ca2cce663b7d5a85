//! Converts host events into engine commands.
//!
//! The `InputProcessor` owns the key-binding map and is the only thing
//! that sits between raw host events and the engine's
//! [`execute`](crate::TokenAnimationEngine::execute) method. Dropping
//! events while an animation is active is the *engine's* job, not the
//! processor's — the processor translates unconditionally.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::{HostCommand, InputEvent};
use crate::engine::EngineCommand;

/// Maps physical key strings to [`EngineCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"ArrowRight"`, `"KeyD"`, etc. Several keys may bind the same command
/// (the defaults bind arrows for standalone use and D/A for embedded
/// decks, as a deck usually reserves the arrow keys for itself).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command.
    bindings: HashMap<String, EngineCommand>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowRight".into(), EngineCommand::Advance),
            ("ArrowLeft".into(), EngineCommand::Reverse),
            ("KeyD".into(), EngineCommand::Advance),
            ("KeyA".into(), EngineCommand::Reverse),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<EngineCommand> {
        self.bindings.get(key).copied()
    }

    /// Bind (or rebind) a key to a command.
    pub fn bind(&mut self, key: impl Into<String>, command: EngineCommand) {
        let _ = self.bindings.insert(key.into(), command);
    }
}

/// Converts raw host events into [`EngineCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(&event) {
///     if let Some(signal) = engine.execute(cmd, now, &measure) {
///         host.post(HostSignal::from(signal));
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<EngineCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process an input event and return zero or one commands.
    #[must_use]
    pub fn handle_event(&self, event: &InputEvent) -> Option<EngineCommand> {
        match event {
            InputEvent::Key { code } => self.handle_key_press(code),
            InputEvent::Host(HostCommand::DemoAdvance) => {
                Some(EngineCommand::Advance)
            }
            InputEvent::Host(HostCommand::DemoReverse) => {
                Some(EngineCommand::Reverse)
            }
        }
    }
}
