//! Pure step/phase model for the generation walkthrough.
//!
//! The step counter is the sole source of truth for where the walkthrough
//! is: even step `2k` means k tokens are committed to the input text with
//! none pending; odd step `2k+1` means token k has been produced and awaits
//! integration. Everything here is a pure function of the step value.

/// Which half of the generate/integrate cycle a step is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Odd step: a token has been produced and awaits integration.
    Generate,
    /// Even step: every produced token is merged into the input text.
    /// Step 0 is the initial state and behaves as Integrate with nothing
    /// to un-integrate.
    Integrate,
}

impl Phase {
    /// Phase of the given step, by parity.
    #[must_use]
    pub fn of(step: usize) -> Self {
        if step % 2 == 1 {
            Self::Generate
        } else {
            Self::Integrate
        }
    }
}

/// Number of tokens committed to the input text at the given step.
#[must_use]
pub fn committed_count(step: usize) -> usize {
    step / 2
}

/// Index of the produced-but-uncommitted token, if the step has one.
///
/// Only the Generate phase has a pending token.
#[must_use]
pub fn pending_token_index(step: usize) -> Option<usize> {
    (step % 2 == 1).then_some(step / 2)
}

/// Index of the most recently committed token, if any.
///
/// Defined only in the Integrate phase with at least one commit; this is
/// the token a reverse transition pulls back out of the input text.
#[must_use]
pub fn last_committed_index(step: usize) -> Option<usize> {
    (step % 2 == 0 && step > 0).then(|| step / 2 - 1)
}
