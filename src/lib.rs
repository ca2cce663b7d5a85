// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Animation math works in f32 and compares exact sentinel values
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Frame-driven animation engine for next-token-prediction walkthroughs.
//!
//! Tokenviz animates the generate/integrate loop of an autoregressive
//! language model: a prompt sits to the left of a model box, each advance
//! makes the model "emit" the next token with a pulse, and a second
//! advance flies that token along an arc into the growing text. Every
//! transition is reversible, so a presenter can scrub the walkthrough
//! forward and backward live.
//!
//! # Key entry points
//!
//! - [`TokenAnimationEngine`] - the session state machine and frame loop
//! - [`options::Options`] - runtime configuration (sequence, animation
//!   timing, layout, colors)
//! - [`render::Renderer`] - the drawing surface the host implements
//! - [`input::InputProcessor`] - key/host-message translation
//!
//! # Architecture
//!
//! The engine owns no renderer, no event loop, and no clock. The host
//! calls [`TokenAnimationEngine::tick`] once per frame with the current
//! time, feeds commands through [`TokenAnimationEngine::execute`], and
//! hands a [`render::Renderer`] to [`TokenAnimationEngine::render`]. All
//! session state derives from a single step counter; the arc animation,
//! model pulse, and text shift are transient decorations around it.

pub mod animation;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod sequence;
pub mod state;
pub mod util;

pub use engine::{EngineCommand, EngineSignal, TokenAnimationEngine};
