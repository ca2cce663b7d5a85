//! Platform-agnostic input events and slide-host messages.

use crate::engine::EngineSignal;

/// An input event delivered by the host environment.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`EngineCommand`](crate::EngineCommand) values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press, identified by its `winit`-style key code string
    /// (`"ArrowRight"`, `"KeyD"`, …).
    Key {
        /// Physical key code string.
        code: String,
    },
    /// A control message from a containing slide context.
    Host(HostCommand),
}

/// Control messages a containing slide deck sends into the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Step the walkthrough forward.
    DemoAdvance,
    /// Step the walkthrough backward.
    DemoReverse,
}

/// Outward message for the containing slide context.
///
/// Emitted when the walkthrough is stepped past either end; the host
/// decides what to do with it (typically navigate the deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    /// The sequence is complete; the deck may advance to the next slide.
    NextSlide,
    /// The walkthrough is at its start; the deck may go back a slide.
    PrevSlide,
}

impl From<EngineSignal> for HostSignal {
    fn from(signal: EngineSignal) -> Self {
        match signal {
            EngineSignal::SequenceComplete => Self::NextSlide,
            EngineSignal::AtStart => Self::PrevSlide,
        }
    }
}
