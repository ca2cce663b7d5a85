//! The rendering interface the engine consumes.
//!
//! The engine never draws; it asks an externally supplied [`Renderer`] for
//! a handful of primitives and for text measurement. Coordinates are
//! abstract canvas pixels with y growing downward and left-to-right text
//! flow — the adapter owns any further translation.

pub mod layout;
pub mod measure;
pub mod scene;

pub use layout::Layout;
pub use measure::MonospaceMeasure;
pub use scene::Frame;

/// RGBA color with channels in [0, 1].
pub type Rgba = [f32; 4];

/// Horizontal text alignment relative to the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Position is the left edge of the text, vertically centered.
    Left,
    /// Position is the center of the text.
    Center,
}

/// Text-width measurement, required by the transition driver.
///
/// This is a dependency of the core, not an optional nicety: text-shift
/// deltas are computed from the measured width of `" " + token`.
pub trait TextMeasure {
    /// Width in canvas pixels of `text` rendered at `size`.
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Draw primitives invoked once per frame.
pub trait Renderer: TextMeasure {
    /// Filled and stroked rectangle centered at `center`.
    fn rect(
        &mut self,
        center: glam::Vec2,
        size: glam::Vec2,
        fill: Rgba,
        stroke: Rgba,
        stroke_weight: f32,
    );

    /// Straight line segment.
    fn line(&mut self, from: glam::Vec2, to: glam::Vec2, color: Rgba, weight: f32);

    /// Line segment with an arrow head at `to`.
    fn arrow(&mut self, from: glam::Vec2, to: glam::Vec2, color: Rgba, weight: f32);

    /// Positioned text, vertically centered on `pos`.
    fn text(
        &mut self,
        content: &str,
        pos: glam::Vec2,
        size: f32,
        color: Rgba,
        align: TextAlign,
    );
}
