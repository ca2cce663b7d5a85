//! Interpolation helpers shared across the animation system.

use crate::render::Rgba;

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Linear blend between two colors, channel by channel.
///
/// `t` is clamped to [0, 1]; `t = 0` returns `a` exactly, so a fully
/// decayed pulse renders the normal endpoint with no residue.
#[inline]
#[must_use]
pub fn blend_rgba(a: Rgba, b: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    [
        lerp(a[0], b[0], t),
        lerp(a[1], b[1], t),
        lerp(a[2], b[2], t),
        lerp(a[3], b[3], t),
    ]
}
