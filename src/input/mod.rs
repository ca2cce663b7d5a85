//! Input handling: event types, the key-binding map, and the input
//! processor that converts host events into engine commands.

/// Platform-agnostic input events and host messages.
pub mod event;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{HostCommand, HostSignal, InputEvent};
pub use processor::{InputProcessor, KeyBindings};
