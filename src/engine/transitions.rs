//! Command execution and step-counter transitions.
//!
//! Advancing from the Integrate phase is instantaneous (the step moves
//! immediately and the pulse/highlight fire), while advancing from the
//! Generate phase defers the step until the forward arc completes. The
//! reverse directions mirror that asymmetry: leaving Generate is
//! instantaneous, leaving Integrate waits for the reverse arc.

use web_time::Instant;

use super::command::{EngineCommand, EngineSignal};
use super::core::TokenAnimationEngine;
use crate::animation::{ArcAnimation, Direction};
use crate::render::TextMeasure;
use crate::state::{self, Phase};
use crate::util::deadline::Deadline;

impl TokenAnimationEngine {
    /// Execute a command against the current session state.
    ///
    /// Returns a boundary signal when the command would step past either
    /// end of the sequence; the session state is untouched in that case.
    /// Commands arriving while an arc animation is in flight are dropped
    /// (not queued).
    pub fn execute(
        &mut self,
        command: EngineCommand,
        now: Instant,
        measure: &dyn TextMeasure,
    ) -> Option<EngineSignal> {
        if self.arc.is_some() {
            log::trace!("dropping {command:?}: animation in flight");
            return None;
        }
        match command {
            EngineCommand::Advance => self.advance(now, measure),
            EngineCommand::Reverse => self.reverse(measure),
        }
    }

    /// Step forward: generate the next token or integrate the pending one.
    fn advance(
        &mut self,
        now: Instant,
        measure: &dyn TextMeasure,
    ) -> Option<EngineSignal> {
        if self.step >= self.sequence.max_step() {
            log::debug!("advance at step {}: sequence complete", self.step);
            return Some(EngineSignal::SequenceComplete);
        }
        match Phase::of(self.step) {
            Phase::Integrate => {
                // Generation is instantaneous: the token appears in the
                // output slot with a model pulse and a held highlight.
                self.pulse.trigger();
                self.highlight = true;
                self.highlight_deadline = Some(Deadline::after(
                    now,
                    self.options.animation.highlight_hold(),
                ));
                self.step += 1;
                log::debug!("generated token, step -> {}", self.step);
            }
            Phase::Generate => {
                // Integration animates: shift the input text left to make
                // room, then fly the token in. The step moves only when
                // the arc completes.
                if let Some(index) = state::pending_token_index(self.step) {
                    if let Some(spaced) = self.sequence.spaced_token(index) {
                        let width = measure.text_width(
                            &spaced,
                            self.options.typography.token_size,
                        );
                        self.shift.shift_by(-width);
                    }
                }
                self.arc = Some(ArcAnimation::forward());
                log::debug!("integrating token, arc started at step {}", self.step);
            }
        }
        None
    }

    /// Step backward: remove the pending token or un-integrate the last
    /// committed one.
    fn reverse(&mut self, _measure: &dyn TextMeasure) -> Option<EngineSignal> {
        if self.step == 0 {
            log::debug!("reverse at step 0: at start");
            return Some(EngineSignal::AtStart);
        }
        match Phase::of(self.step) {
            Phase::Generate => {
                // Un-generation is instantaneous: the pending token
                // vanishes and the highlight clears immediately.
                self.step -= 1;
                self.highlight = false;
                self.highlight_deadline = None;
                log::debug!("removed pending token, step -> {}", self.step);
            }
            Phase::Integrate => {
                self.arc = Some(ArcAnimation::reverse());
                log::debug!(
                    "un-integrating token, arc started at step {}",
                    self.step
                );
            }
        }
        None
    }

    /// Finalize a completed arc animation.
    pub(crate) fn finish_transition(
        &mut self,
        direction: Direction,
        measure: &dyn TextMeasure,
    ) {
        match direction {
            Direction::Forward => {
                self.step += 1;
                log::debug!("integration complete, step -> {}", self.step);
            }
            Direction::Reverse => {
                if let Some(index) = state::last_committed_index(self.step) {
                    if let Some(spaced) = self.sequence.spaced_token(index) {
                        let width = measure.text_width(
                            &spaced,
                            self.options.typography.token_size,
                        );
                        self.shift.shift_by(width);
                    }
                }
                self.step = self.step.saturating_sub(1);
                log::debug!("un-integration complete, step -> {}", self.step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use web_time::Duration;

    use super::*;
    use crate::options::Options;
    use crate::render::MonospaceMeasure;

    const CHAR_WIDTH: f32 = 10.0;

    fn engine() -> TokenAnimationEngine {
        TokenAnimationEngine::new(Options::default(), Vec2::new(1400.0, 600.0))
    }

    fn measure() -> MonospaceMeasure {
        MonospaceMeasure::new(CHAR_WIDTH)
    }

    /// Run ticks until the in-flight animation (if any) completes.
    fn settle(e: &mut TokenAnimationEngine, now: Instant, m: &dyn TextMeasure) {
        let mut guard = 0;
        while e.is_animating() {
            e.tick(now, m);
            guard += 1;
            assert!(guard < 200, "animation never completed");
        }
    }

    /// Advance and, when the advance starts an arc, run it to completion.
    fn advance_settled(
        e: &mut TokenAnimationEngine,
        now: Instant,
        m: &dyn TextMeasure,
    ) -> Option<EngineSignal> {
        let signal = e.execute(EngineCommand::Advance, now, m);
        settle(e, now, m);
        signal
    }

    #[test]
    fn advance_from_integrate_is_instantaneous() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();

        let signal = e.execute(EngineCommand::Advance, now, &m);
        assert_eq!(signal, None);
        assert_eq!(e.step(), 1);
        assert!(!e.is_animating());
        assert_eq!(e.pulse_intensity(), 1.0);
        assert!(e.is_highlighted());
    }

    #[test]
    fn advance_from_generate_defers_step_until_arc_completes() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();

        let _ = e.execute(EngineCommand::Advance, now, &m);
        let signal = e.execute(EngineCommand::Advance, now, &m);
        assert_eq!(signal, None);
        // Step holds at 1 while the arc flies.
        assert_eq!(e.step(), 1);
        assert!(e.is_animating());
        // " he" at 10px/char.
        assert_eq!(e.text_shift_target(), -30.0);

        settle(&mut e, now, &m);
        assert_eq!(e.step(), 2);
        assert_eq!(e.committed_count(), 1);
    }

    #[test]
    fn full_walkthrough_reaches_and_holds_the_final_step() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();
        let max = e.sequence().max_step();
        assert_eq!(max, 8);

        for _ in 0..8 {
            assert_eq!(advance_settled(&mut e, now, &m), None);
        }
        assert_eq!(e.step(), 8);
        assert_eq!(e.committed_count(), 4);

        // Further advances signal completion and change nothing.
        assert_eq!(
            advance_settled(&mut e, now, &m),
            Some(EngineSignal::SequenceComplete)
        );
        assert_eq!(e.step(), 8);
        assert!(!e.is_animating());
    }

    #[test]
    fn reverse_at_start_signals_without_side_effects() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();

        let signal = e.execute(EngineCommand::Reverse, now, &m);
        assert_eq!(signal, Some(EngineSignal::AtStart));
        assert_eq!(e.step(), 0);
        assert!(!e.is_animating());
        assert_eq!(e.pulse_intensity(), 0.0);
    }

    #[test]
    fn reverse_from_generate_removes_pending_token_instantly() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();

        let _ = e.execute(EngineCommand::Advance, now, &m);
        assert!(e.is_highlighted());

        let signal = e.execute(EngineCommand::Reverse, now, &m);
        assert_eq!(signal, None);
        assert_eq!(e.step(), 0);
        assert!(!e.is_animating());
        assert!(!e.is_highlighted());
    }

    #[test]
    fn reverse_from_integrate_arcs_then_restores_shift() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();

        let _ = advance_settled(&mut e, now, &m); // generate "he"
        let _ = advance_settled(&mut e, now, &m); // integrate "he"
        assert_eq!(e.step(), 2);
        assert_eq!(e.text_shift_target(), -30.0);

        let signal = e.execute(EngineCommand::Reverse, now, &m);
        assert_eq!(signal, None);
        assert_eq!(e.step(), 2);
        assert!(e.is_animating());

        settle(&mut e, now, &m);
        assert_eq!(e.step(), 1);
        assert_eq!(e.text_shift_target(), 0.0);
    }

    #[test]
    fn advance_then_reverse_round_trips_step_and_shift() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();

        for _ in 0..5 {
            let _ = advance_settled(&mut e, now, &m);
        }
        let step = e.step();
        let target = e.text_shift_target();

        let _ = advance_settled(&mut e, now, &m);
        let _ = e.execute(EngineCommand::Reverse, now, &m);
        settle(&mut e, now, &m);

        assert_eq!(e.step(), step);
        assert_eq!(e.text_shift_target(), target);
    }

    #[test]
    fn commands_are_dropped_while_an_arc_is_in_flight() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();

        let _ = e.execute(EngineCommand::Advance, now, &m);
        let _ = e.execute(EngineCommand::Advance, now, &m);
        assert!(e.is_animating());
        let target = e.text_shift_target();

        // Neither direction is honored or queued mid-flight.
        assert_eq!(e.execute(EngineCommand::Advance, now, &m), None);
        assert_eq!(e.execute(EngineCommand::Reverse, now, &m), None);
        assert_eq!(e.text_shift_target(), target);

        settle(&mut e, now, &m);
        assert_eq!(e.step(), 2);
    }

    #[test]
    fn highlight_clears_only_after_the_hold_elapses() {
        let mut e = engine();
        let m = measure();
        let start = Instant::now();

        let _ = e.execute(EngineCommand::Advance, start, &m);
        assert!(e.is_highlighted());

        e.tick(start + Duration::from_millis(499), &m);
        assert!(e.is_highlighted());

        e.tick(start + Duration::from_millis(500), &m);
        assert!(!e.is_highlighted());
    }

    #[test]
    fn shift_target_accumulates_every_spaced_token_width() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();

        for _ in 0..8 {
            let _ = advance_settled(&mut e, now, &m);
        }
        // " he" + " moves" + " quickly" + " ." at 10px/char.
        assert_eq!(e.text_shift_target(), -(3.0 + 6.0 + 8.0 + 2.0) * CHAR_WIDTH);
    }

    #[test]
    fn empty_sequence_is_complete_immediately() {
        let mut options = Options::default();
        options.sequence.output_tokens.clear();
        let mut e =
            TokenAnimationEngine::new(options, Vec2::new(1400.0, 600.0));
        let m = measure();
        let now = Instant::now();

        assert_eq!(
            e.execute(EngineCommand::Advance, now, &m),
            Some(EngineSignal::SequenceComplete)
        );
        assert_eq!(
            e.execute(EngineCommand::Reverse, now, &m),
            Some(EngineSignal::AtStart)
        );
        assert_eq!(e.step(), 0);
    }

    #[test]
    fn step_stays_within_session_bounds() {
        let mut e = engine();
        let m = measure();
        let now = Instant::now();
        let max = e.sequence().max_step();

        for _ in 0..12 {
            let _ = advance_settled(&mut e, now, &m);
            assert!(e.step() <= max);
        }
        for _ in 0..12 {
            let _ = e.execute(EngineCommand::Reverse, now, &m);
            settle(&mut e, now, &m);
            assert!(e.step() <= max);
        }
        assert_eq!(e.step(), 0);
    }
}
