//! Animation primitives for token transitions.
//!
//! An in-flight transition is an [`ArcAnimation`] whose progress the engine
//! accumulates once per frame; the token rides an [`ArcPath`] (quadratic
//! Bezier dipping below the model box). The input text eases toward its
//! target offset via [`TextShift`], and [`Pulse`] carries the transient
//! "model is thinking" emphasis.

pub mod arc;
pub mod interpolation;
pub mod pulse;
pub mod state;
pub mod text_shift;

pub use arc::ArcPath;
pub use pulse::Pulse;
pub use state::{ArcAnimation, Direction};
pub use text_shift::TextShift;
