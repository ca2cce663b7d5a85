//! Shared utilities for the animation engine.

pub mod deadline;
