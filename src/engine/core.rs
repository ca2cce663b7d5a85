//! Engine construction, the per-frame tick, and state queries.

use glam::Vec2;
use web_time::Instant;

use crate::animation::{ArcAnimation, Pulse, TextShift};
use crate::options::Options;
use crate::render::{Frame, Layout, Renderer, TextMeasure};
use crate::sequence::TokenSequence;
use crate::state::{self, Phase};
use crate::util::deadline::Deadline;

/// The core engine driving one next-token-prediction walkthrough.
///
/// Owns the full session state: the step counter, the in-flight arc
/// animation (at most one), the pulse, the generation highlight, and the
/// input-text shift. One instance per rendered session; there are no
/// globals.
///
/// # Construction
///
/// Use [`TokenAnimationEngine::new`] with an [`Options`] value and the
/// canvas size. Call [`resize`](Self::resize) when the canvas changes and
/// [`reset`](Self::reset) to return the session to step 0.
///
/// # Frame loop
///
/// Each frame, call [`tick`](Self::tick) once with the current wall-clock
/// time, then [`render`](Self::render) with the host's renderer. Commands
/// arrive via [`execute`](Self::execute); both take the
/// [`TextMeasure`] collaborator because text-shift deltas are computed
/// from measured token widths.
pub struct TokenAnimationEngine {
    pub(crate) sequence: TokenSequence,
    pub(crate) options: Options,
    pub(crate) layout: Layout,
    /// Step counter in `[0, 2N]` — the sole source of truth for phase.
    pub(crate) step: usize,
    /// In-flight transition, if any. Input is dropped while this is set.
    pub(crate) arc: Option<ArcAnimation>,
    pub(crate) pulse: Pulse,
    pub(crate) highlight: bool,
    pub(crate) highlight_deadline: Option<Deadline>,
    pub(crate) shift: TextShift,
}

impl TokenAnimationEngine {
    /// Engine for a fresh session at step 0.
    #[must_use]
    pub fn new(options: Options, canvas: Vec2) -> Self {
        let sequence = TokenSequence::new(
            options.sequence.input_text.clone(),
            options.sequence.output_tokens.clone(),
        );
        log::debug!(
            "session start: {} output tokens, canvas {}x{}",
            sequence.len(),
            canvas.x,
            canvas.y
        );
        let layout = Layout::new(canvas, &options.layout);
        Self {
            sequence,
            options,
            layout,
            step: 0,
            arc: None,
            pulse: Pulse::new(),
            highlight: false,
            highlight_deadline: None,
            shift: TextShift::new(),
        }
    }

    /// Recompute layout anchors for a new canvas size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.layout =
                Layout::new(Vec2::new(width, height), &self.options.layout);
        }
    }

    /// Return the session to step 0, discarding all transient state.
    pub fn reset(&mut self) {
        self.step = 0;
        self.arc = None;
        self.pulse = Pulse::new();
        self.highlight = false;
        self.highlight_deadline = None;
        self.shift = TextShift::new();
    }

    /// One logical clock tick, called once per rendered frame.
    ///
    /// Advances the in-flight arc (finalizing the transition when progress
    /// reaches 1), eases the text shift toward its target, decays the
    /// pulse, and clears the generation highlight once its wall-clock
    /// deadline passes `now`.
    pub fn tick(&mut self, now: Instant, measure: &dyn TextMeasure) {
        if let Some(mut arc) = self.arc.take() {
            if arc.advance(self.options.animation.speed) {
                self.finish_transition(arc.direction, measure);
            } else {
                self.arc = Some(arc);
            }
        }

        self.shift.tick(self.options.animation.text_shift_rate);
        self.pulse.tick(self.options.animation.pulse_decay);

        if self.highlight_deadline.is_some_and(|d| d.passed(now)) {
            self.highlight = false;
            self.highlight_deadline = None;
        }
    }

    /// Snapshot of the current frame for the render adapter.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            sequence: &self.sequence,
            layout: &self.layout,
            options: &self.options,
            step: self.step,
            arc: self.arc,
            shift: self.shift.current(),
            pulse: self.pulse.intensity(),
            highlight: self.highlight,
        }
    }

    /// Draw the current frame with the host's renderer.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.frame().draw(renderer);
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Current step counter.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Current phase, derived from the step.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::of(self.step)
    }

    /// Number of committed tokens.
    #[must_use]
    pub fn committed_count(&self) -> usize {
        state::committed_count(self.step)
    }

    /// Index of the pending token, if in the Generate phase.
    #[must_use]
    pub fn pending_token_index(&self) -> Option<usize> {
        state::pending_token_index(self.step)
    }

    /// Whether a transition's visual effect is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.arc.is_some()
    }

    /// The in-flight animation, if any.
    #[must_use]
    pub fn arc(&self) -> Option<ArcAnimation> {
        self.arc
    }

    /// Clamped pulse intensity in [0, 1].
    #[must_use]
    pub fn pulse_intensity(&self) -> f32 {
        self.pulse.intensity()
    }

    /// Whether the generation highlight is being held.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlight
    }

    /// Current (eased) input-text displacement.
    #[must_use]
    pub fn text_shift(&self) -> f32 {
        self.shift.current()
    }

    /// The displacement the input text is easing toward.
    #[must_use]
    pub fn text_shift_target(&self) -> f32 {
        self.shift.target()
    }

    /// The session's token sequence.
    #[must_use]
    pub fn sequence(&self) -> &TokenSequence {
        &self.sequence
    }

    /// Session configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resolved anchor geometry.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
