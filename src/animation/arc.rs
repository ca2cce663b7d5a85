//! Quadratic-Bezier arc path for the traveling token.

use glam::Vec2;

/// The curve a token follows between the output slot and the input text.
///
/// The control point sits at the horizontal midpoint of the endpoints,
/// pushed down to `dip_y` (below the model box), so the token bulges
/// downward regardless of travel direction — forward and reverse only swap
/// the endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    /// Travel origin.
    pub start: Vec2,
    /// Travel destination.
    pub end: Vec2,
    /// Bezier control point.
    pub control: Vec2,
}

impl ArcPath {
    /// Arc between two points dipping down to `dip_y`.
    #[must_use]
    pub fn between(start: Vec2, end: Vec2, dip_y: f32) -> Self {
        Self {
            start,
            end,
            control: Vec2::new((start.x + end.x) / 2.0, dip_y),
        }
    }

    /// Position along the arc at progress `t` (clamped to [0, 1]).
    ///
    /// `B(t) = (1-t)²·start + 2(1-t)t·control + t²·end`
    #[inline]
    #[must_use]
    pub fn position(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let omt = 1.0 - t;
        self.start * (omt * omt) + self.control * (2.0 * omt * t) + self.end * (t * t)
    }
}
