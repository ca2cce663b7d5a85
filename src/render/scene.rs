//! Per-frame scene composition.
//!
//! [`Frame`] is an immutable snapshot of everything the render adapter
//! needs for one frame: step, in-flight animation, text shift, pulse, and
//! the resolved layout. [`Frame::draw`] composes the standard scene from
//! the adapter's primitives; hosts with bespoke visuals can read the
//! snapshot fields and draw their own.

use glam::Vec2;

use super::{Layout, Renderer, TextAlign, TextMeasure};
use crate::animation::interpolation::blend_rgba;
use crate::animation::{ArcAnimation, ArcPath, Direction};
use crate::options::Options;
use crate::sequence::TokenSequence;
use crate::state::{self, Phase};

/// Snapshot of one frame of engine state.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The session's token sequence.
    pub sequence: &'a TokenSequence,
    /// Resolved anchor geometry.
    pub layout: &'a Layout,
    /// Session configuration.
    pub options: &'a Options,
    /// Current step counter.
    pub step: usize,
    /// In-flight transition, if any.
    pub arc: Option<ArcAnimation>,
    /// Current (eased) input-text displacement.
    pub shift: f32,
    /// Clamped pulse intensity in [0, 1].
    pub pulse: f32,
    /// Whether the generation highlight is being held.
    pub highlight: bool,
}

impl Frame<'_> {
    /// Number of committed tokens to actually show in the input text.
    ///
    /// During a reverse arc the departing token is already in flight, so
    /// it is hidden from the committed text while still nominally counted
    /// by the step.
    #[must_use]
    pub fn visible_committed(&self) -> usize {
        let committed = state::committed_count(self.step);
        match self.arc {
            Some(arc) if arc.direction == Direction::Reverse => {
                committed.saturating_sub(1)
            }
            _ => committed,
        }
    }

    /// The input text displayed this frame.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.sequence.committed_text(self.visible_committed())
    }

    /// Where the next token lands in the input text (or departs from,
    /// when reversing): just past the displayed text and its joining
    /// space, shifted by the current reflow offset.
    pub fn insertion_point(&self, measure: &dyn TextMeasure) -> Vec2 {
        let font = self.options.typography.token_size;
        let base = self.display_text();
        let x = self.layout.input_anchor.x
            + self.shift
            + measure.text_width(&base, font)
            + measure.text_width(" ", font);
        Vec2::new(x, self.layout.baseline_y())
    }

    /// Compose the full scene from the adapter's primitives.
    pub fn draw(&self, r: &mut dyn Renderer) {
        self.draw_background(r);
        self.draw_input_text(r);
        self.draw_model_box(r);
        self.draw_output_token(r);
        self.draw_arrows(r);
    }

    fn draw_background(&self, r: &mut dyn Renderer) {
        let colors = &self.options.colors;
        r.rect(
            self.layout.canvas / 2.0,
            self.layout.canvas,
            colors.background,
            colors.background,
            0.0,
        );
    }

    fn draw_input_text(&self, r: &mut dyn Renderer) {
        let pos = Vec2::new(
            self.layout.input_anchor.x + self.shift,
            self.layout.baseline_y(),
        );
        r.text(
            &self.display_text(),
            pos,
            self.options.typography.token_size,
            self.options.colors.text,
            TextAlign::Left,
        );
    }

    fn draw_model_box(&self, r: &mut dyn Renderer) {
        let layout_opts = &self.options.layout;
        let colors = &self.options.colors;

        let size = layout_opts.llm_size + self.pulse * layout_opts.pulse_box_growth;
        let fill = blend_rgba(colors.box_fill, colors.box_fill_highlight, self.pulse);
        let stroke =
            blend_rgba(colors.box_stroke, colors.box_stroke_highlight, self.pulse);
        r.rect(
            self.layout.llm_center,
            Vec2::splat(size),
            fill,
            stroke,
            layout_opts.box_stroke_weight,
        );

        let label_size = self.options.typography.label_size
            + self.pulse * layout_opts.pulse_label_growth;
        r.text(
            &self.options.sequence.model_label,
            self.layout.llm_center,
            label_size,
            colors.text,
            TextAlign::Center,
        );
    }

    /// The output token: static in the slot while a generated token waits
    /// (with a pulse-driven fade-in), or riding the arc while a transition
    /// is in flight.
    fn draw_output_token(&self, r: &mut dyn Renderer) {
        match self.arc {
            Some(arc) => self.draw_arcing_token(r, arc),
            None => self.draw_slot_token(r),
        }
    }

    fn draw_slot_token(&self, r: &mut dyn Renderer) {
        let in_generate = Phase::of(self.step) == Phase::Generate;
        if !in_generate && self.pulse <= 0.0 {
            return;
        }
        let Some(token) = self.sequence.token(self.step / 2) else {
            return;
        };

        // Fade in over the first half of the pulse: invisible at full
        // strength, fully visible from the midpoint down.
        let alpha = if self.pulse > 0.5 {
            (1.0 - self.pulse) * 2.0
        } else {
            1.0
        };
        let mut color = self.options.colors.text;
        color[3] *= alpha;

        let font = self.options.typography.token_size;
        let prefix_width = r.text_width(self.sequence.prefix(), font);
        let pos = Vec2::new(
            self.layout.output_slot_x(prefix_width),
            self.layout.baseline_y(),
        );
        r.text(token, pos, font, color, TextAlign::Left);
    }

    fn draw_arcing_token(&self, r: &mut dyn Renderer, arc: ArcAnimation) {
        let index = match arc.direction {
            Direction::Forward => state::pending_token_index(self.step),
            Direction::Reverse => state::last_committed_index(self.step),
        };
        let Some(token) = index.and_then(|i| self.sequence.token(i)) else {
            return;
        };
        let token = token.to_owned();

        let font = self.options.typography.token_size;
        let prefix_width = r.text_width(self.sequence.prefix(), font);
        let slot = Vec2::new(
            self.layout.output_slot_x(prefix_width),
            self.layout.baseline_y(),
        );
        let insertion = self.insertion_point(&*r);

        let (start, end) = match arc.direction {
            Direction::Forward => (slot, insertion),
            Direction::Reverse => (insertion, slot),
        };
        let path = ArcPath::between(
            start,
            end,
            self.layout.arc_dip_y(self.options.animation.arc_depth),
        );
        r.text(
            &token,
            path.position(arc.progress),
            font,
            self.options.colors.text,
            TextAlign::Left,
        );
    }

    fn draw_arrows(&self, r: &mut dyn Renderer) {
        let layout_opts = &self.options.layout;
        let colors = &self.options.colors;
        let font = self.options.typography.token_size;
        let y = self.layout.baseline_y();

        let prefix_width = r.text_width(self.sequence.prefix(), font);
        let start = self.layout.arrow_start_x(prefix_width);
        let end = self.layout.arrow_end_x();
        r.arrow(
            Vec2::new(start, y),
            Vec2::new(end, y),
            colors.arrow,
            layout_opts.arrow_weight,
        );

        // The output arrow appears only while something occupies (or is
        // leaving toward) the output slot.
        let show_output = match self.arc {
            Some(arc) => {
                arc.direction == Direction::Reverse || self.pulse > 0.0
            }
            None => Phase::of(self.step) == Phase::Generate || self.pulse > 0.0,
        };
        if show_output {
            let out_start = self.layout.output_arrow_start_x();
            let out_end = out_start + self.layout.arrow_length(prefix_width);
            r.arrow(
                Vec2::new(out_start, y),
                Vec2::new(out_end, y),
                colors.arrow,
                layout_opts.arrow_weight,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{MonospaceMeasure, Rgba};

    /// Renderer that records every draw call for inspection.
    struct RecordingRenderer {
        measure: MonospaceMeasure,
        rects: Vec<(Vec2, Vec2, Rgba, Rgba)>,
        arrows: Vec<(Vec2, Vec2)>,
        texts: Vec<(String, Vec2, f32, Rgba)>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self {
                measure: MonospaceMeasure::new(10.0),
                rects: Vec::new(),
                arrows: Vec::new(),
                texts: Vec::new(),
            }
        }

        fn text_positions(&self, content: &str) -> Vec<Vec2> {
            self.texts
                .iter()
                .filter(|(c, ..)| c == content)
                .map(|(_, pos, ..)| *pos)
                .collect()
        }
    }

    impl TextMeasure for RecordingRenderer {
        fn text_width(&self, text: &str, size: f32) -> f32 {
            self.measure.text_width(text, size)
        }
    }

    impl Renderer for RecordingRenderer {
        fn rect(
            &mut self,
            center: Vec2,
            size: Vec2,
            fill: Rgba,
            stroke: Rgba,
            _stroke_weight: f32,
        ) {
            self.rects.push((center, size, fill, stroke));
        }

        fn line(&mut self, _from: Vec2, _to: Vec2, _color: Rgba, _weight: f32) {}

        fn arrow(&mut self, from: Vec2, to: Vec2, _color: Rgba, _weight: f32) {
            self.arrows.push((from, to));
        }

        fn text(
            &mut self,
            content: &str,
            pos: Vec2,
            size: f32,
            color: Rgba,
            _align: TextAlign,
        ) {
            self.texts.push((content.to_owned(), pos, size, color));
        }
    }

    fn fixtures() -> (TokenSequence, Layout, Options) {
        let options = Options::default();
        let sequence = TokenSequence::new(
            options.sequence.input_text.clone(),
            options.sequence.output_tokens.clone(),
        );
        let layout = Layout::new(Vec2::new(1400.0, 600.0), &options.layout);
        (sequence, layout, options)
    }

    fn frame<'a>(
        sequence: &'a TokenSequence,
        layout: &'a Layout,
        options: &'a Options,
        step: usize,
    ) -> Frame<'a> {
        Frame {
            sequence,
            layout,
            options,
            step,
            arc: None,
            shift: 0.0,
            pulse: 0.0,
            highlight: false,
        }
    }

    #[test]
    fn idle_frame_draws_prompt_box_and_input_arrow() {
        let (sequence, layout, options) = fixtures();
        let f = frame(&sequence, &layout, &options, 0);
        let mut r = RecordingRenderer::new();
        f.draw(&mut r);

        // Background + model box.
        assert_eq!(r.rects.len(), 2);
        assert_eq!(r.rects[1].0, layout.llm_center);
        // Input arrow only; nothing at the output slot.
        assert_eq!(r.arrows.len(), 1);
        assert_eq!(r.text_positions("Mike is quick,").len(), 1);
        assert!(r.text_positions("he").is_empty());
    }

    #[test]
    fn generate_phase_shows_pending_token_and_output_arrow() {
        let (sequence, layout, options) = fixtures();
        let f = frame(&sequence, &layout, &options, 1);
        let mut r = RecordingRenderer::new();
        f.draw(&mut r);

        assert_eq!(r.arrows.len(), 2);
        let positions = r.text_positions("he");
        assert_eq!(positions.len(), 1);
        let prefix_width = 14.0 * 10.0;
        assert_eq!(positions[0].x, layout.output_slot_x(prefix_width));
    }

    #[test]
    fn forward_arc_places_token_on_bezier_path() {
        let (sequence, layout, options) = fixtures();
        let mut f = frame(&sequence, &layout, &options, 1);
        f.arc = Some(ArcAnimation {
            progress: 0.5,
            direction: Direction::Forward,
        });
        let mut r = RecordingRenderer::new();
        f.draw(&mut r);

        let positions = r.text_positions("he");
        assert_eq!(positions.len(), 1);

        let prefix_width = 14.0 * 10.0;
        let slot = Vec2::new(
            layout.output_slot_x(prefix_width),
            layout.baseline_y(),
        );
        let insertion = f.insertion_point(&MonospaceMeasure::new(10.0));
        let expected = ArcPath::between(
            slot,
            insertion,
            layout.arc_dip_y(options.animation.arc_depth),
        )
        .position(0.5);
        assert!((positions[0] - expected).length() < 1e-4);
    }

    #[test]
    fn reverse_arc_hides_departing_token_from_input() {
        let (sequence, layout, options) = fixtures();
        let mut f = frame(&sequence, &layout, &options, 2);
        f.arc = Some(ArcAnimation {
            progress: 0.2,
            direction: Direction::Reverse,
        });

        assert_eq!(f.visible_committed(), 0);
        assert_eq!(f.display_text(), "Mike is quick,");

        // The departing token is drawn on the arc, plus the output arrow.
        let mut r = RecordingRenderer::new();
        f.draw(&mut r);
        assert_eq!(r.text_positions("he").len(), 1);
        assert_eq!(r.arrows.len(), 2);
    }

    #[test]
    fn forward_arc_without_pulse_hides_output_arrow() {
        let (sequence, layout, options) = fixtures();
        let mut f = frame(&sequence, &layout, &options, 1);
        f.arc = Some(ArcAnimation {
            progress: 0.3,
            direction: Direction::Forward,
        });
        let mut r = RecordingRenderer::new();
        f.draw(&mut r);
        assert_eq!(r.arrows.len(), 1);
    }

    #[test]
    fn drained_pulse_renders_normal_box_exactly() {
        let (sequence, layout, options) = fixtures();
        let f = frame(&sequence, &layout, &options, 2);
        let mut r = RecordingRenderer::new();
        f.draw(&mut r);

        let (_, size, fill, stroke) = r.rects[1];
        assert_eq!(fill, options.colors.box_fill);
        assert_eq!(stroke, options.colors.box_stroke);
        assert_eq!(size, Vec2::splat(options.layout.llm_size));
    }

    #[test]
    fn full_pulse_blends_box_toward_highlight() {
        let (sequence, layout, options) = fixtures();
        let mut f = frame(&sequence, &layout, &options, 1);
        f.pulse = 1.0;
        let mut r = RecordingRenderer::new();
        f.draw(&mut r);

        let (_, size, fill, _) = r.rects[1];
        assert_eq!(fill, options.colors.box_fill_highlight);
        assert_eq!(
            size,
            Vec2::splat(options.layout.llm_size + options.layout.pulse_box_growth)
        );

        // Freshly triggered pulse: the waiting token starts invisible.
        let (.., color) = r
            .texts
            .iter()
            .find(|(c, ..)| c == "he")
            .map(|(c, p, s, col)| (c.clone(), *p, *s, *col))
            .unwrap();
        assert_eq!(color[3], 0.0);
    }

    #[test]
    fn committed_tokens_appear_in_order() {
        let (sequence, layout, options) = fixtures();
        let f = frame(&sequence, &layout, &options, 8);
        assert_eq!(f.display_text(), "Mike is quick, he moves quickly .");
    }
}
