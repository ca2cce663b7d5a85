//! Crate-level error types.

use std::fmt;

/// Errors produced by the tokenviz crate.
///
/// Engine boundary conditions (advancing past the last step, reversing at
/// step 0, input during an active animation) are *not* errors — they are
/// defined no-ops or outward signals. Only the configuration layer can fail.
#[derive(Debug)]
pub enum TokenvizError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TokenvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TokenvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for TokenvizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
