//! Anchor geometry for the three fixed regions: input text, model box,
//! output slot.

use glam::Vec2;

use crate::options::LayoutOptions;

/// Resolved anchor positions for a canvas size.
///
/// The model box sits at canvas center; the input text is placed to its
/// left so the connecting arrow gets a reasonable length, and the output
/// slot mirrors the arrow on the right. Everything downstream (arrow
/// spans, the output slot, the arc dip) derives from these anchors plus
/// measured text widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Canvas dimensions in pixels.
    pub canvas: Vec2,
    /// Left edge / vertical center of the input text.
    pub input_anchor: Vec2,
    /// Center of the model box.
    pub llm_center: Vec2,
    gap: f32,
    llm_size: f32,
}

impl Layout {
    /// Compute anchors for a canvas of the given size.
    #[must_use]
    pub fn new(canvas: Vec2, opts: &LayoutOptions) -> Self {
        let llm_center = canvas / 2.0;
        let input_x = llm_center.x
            - opts.llm_size / 2.0
            - opts.element_gap
            - opts.arrow_length_hint
            - opts.element_gap
            - opts.input_width_estimate;

        Self {
            canvas,
            input_anchor: Vec2::new(input_x, canvas.y / 2.0),
            llm_center,
            gap: opts.element_gap,
            llm_size: opts.llm_size,
        }
    }

    /// Vertical center shared by the text rows and arrows.
    #[must_use]
    pub fn baseline_y(&self) -> f32 {
        self.llm_center.y
    }

    /// Where the input arrow starts, given the measured prefix width.
    ///
    /// The arrow is anchored to the static prefix, not the shifting
    /// committed text, so it stays put as tokens integrate.
    #[must_use]
    pub fn arrow_start_x(&self, prefix_width: f32) -> f32 {
        self.input_anchor.x + prefix_width + self.gap
    }

    /// Where the input arrow ends (left edge of the model box).
    #[must_use]
    pub fn arrow_end_x(&self) -> f32 {
        self.llm_center.x - self.llm_size / 2.0 - self.gap
    }

    /// Actual input-arrow length for the measured prefix width. The
    /// output arrow reuses this so both sides read symmetrically.
    #[must_use]
    pub fn arrow_length(&self, prefix_width: f32) -> f32 {
        self.arrow_end_x() - self.arrow_start_x(prefix_width)
    }

    /// Where the output arrow starts (right edge of the model box).
    #[must_use]
    pub fn output_arrow_start_x(&self) -> f32 {
        self.llm_center.x + self.llm_size / 2.0 + self.gap
    }

    /// Left edge of the output token slot.
    #[must_use]
    pub fn output_slot_x(&self, prefix_width: f32) -> f32 {
        self.output_arrow_start_x() + self.arrow_length(prefix_width) + self.gap
    }

    /// Y coordinate the token arc dips down to.
    #[must_use]
    pub fn arc_dip_y(&self, arc_depth: f32) -> f32 {
        self.llm_center.y + self.llm_size / 2.0 + arc_depth
    }
}
