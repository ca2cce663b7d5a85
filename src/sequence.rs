//! The immutable token sequence a session walks through.

/// Input prefix plus the ordered output tokens, fixed for the session.
///
/// All index access is bounds-guarded: a step counter derives indices and
/// the sequence refuses anything out of range rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    prefix: String,
    tokens: Vec<String>,
}

impl TokenSequence {
    /// Create a sequence from the input prefix and output tokens.
    pub fn new(prefix: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            tokens,
        }
    }

    /// The fixed input prefix text.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of output tokens (N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence has no output tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Highest legal step value (2N).
    #[must_use]
    pub fn max_step(&self) -> usize {
        self.tokens.len() * 2
    }

    /// The token at `index`, if in range.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// The token at `index` with its joining space (`" he"`), if in range.
    ///
    /// This is the string whose measured pixel width drives the text-shift
    /// delta when the token is committed or uncommitted.
    #[must_use]
    pub fn spaced_token(&self, index: usize) -> Option<String> {
        self.token(index).map(|t| format!(" {t}"))
    }

    /// The input text with the first `count` tokens committed.
    ///
    /// A space joins every committed token. `count` is clamped to N.
    #[must_use]
    pub fn committed_text(&self, count: usize) -> String {
        let mut text = self.prefix.clone();
        for token in self.tokens.iter().take(count) {
            text.push(' ');
            text.push_str(token);
        }
        text
    }
}
