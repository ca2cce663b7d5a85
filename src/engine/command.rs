//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, a host
//! message, or a programmatic call — is represented as an
//! [`EngineCommand`]. Consumers construct commands and pass them to
//! [`TokenAnimationEngine::execute`](super::TokenAnimationEngine::execute).

use serde::{Deserialize, Serialize};

/// A discrete operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — keyboard, host
/// message, or API all look identical. Serde serializes as `snake_case`
/// strings so key-binding TOML stays readable:
/// ```toml
/// [keybindings.bindings]
/// ArrowRight = "advance"
/// ArrowLeft = "reverse"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineCommand {
    /// Step the walkthrough forward: generate the next token, or
    /// integrate the pending one.
    Advance,
    /// Step the walkthrough backward: remove the pending token, or pull
    /// the last committed one back out.
    Reverse,
}

/// Outward notification produced when a command hits a session boundary.
///
/// Boundaries are not errors: the command is a no-op and the containing
/// context decides what happens next (see
/// [`HostSignal`](crate::input::HostSignal)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSignal {
    /// `Advance` was issued with every token already committed.
    SequenceComplete,
    /// `Reverse` was issued at step 0.
    AtStart,
}
