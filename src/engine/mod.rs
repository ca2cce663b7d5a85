//! The token animation engine.

pub mod command;
mod core;
mod transitions;

pub use command::{EngineCommand, EngineSignal};
pub use core::TokenAnimationEngine;
