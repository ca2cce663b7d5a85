//! Deterministic text measurement for headless hosts and tests.

use super::TextMeasure;

/// Fixed-advance measurer: every character is `char_width` pixels wide.
///
/// Real hosts measure through their font stack; this one exists for
/// headless embedding and for exercising the engine deterministically.
/// The font size is ignored — the advance is constant.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    /// Horizontal advance per character, in canvas pixels.
    pub char_width: f32,
}

impl MonospaceMeasure {
    /// Measurer with the given per-character advance.
    #[must_use]
    pub fn new(char_width: f32) -> Self {
        Self { char_width }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str, _size: f32) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_char_count() {
        let measure = MonospaceMeasure::new(10.0);
        assert_eq!(measure.text_width("", 42.0), 0.0);
        assert_eq!(measure.text_width(" ", 42.0), 10.0);
        assert_eq!(measure.text_width(" he", 42.0), 30.0);
    }

    #[test]
    fn size_is_ignored() {
        let measure = MonospaceMeasure::new(8.0);
        assert_eq!(
            measure.text_width("abc", 12.0),
            measure.text_width("abc", 64.0)
        );
    }
}
