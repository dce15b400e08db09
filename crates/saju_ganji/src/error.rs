//! Error types for chart vocabulary validation.

use thiserror::Error;

/// Errors from symbol parsing or pillar construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GanjiError {
    /// A stem symbol outside the ten-element catalog.
    #[error("unknown stem symbol: {0:?}")]
    UnknownStem(char),
    /// A branch symbol outside the twelve-element catalog.
    #[error("unknown branch symbol: {0:?}")]
    UnknownBranch(char),
    /// A stem/branch pair whose parities differ; such pairs do not occur
    /// in the 60-term cycle.
    #[error("invalid pillar {stem}{branch}: stem and branch parity differ")]
    InvalidPillar { stem: char, branch: char },
    /// A pillar string that is not exactly two hanja symbols.
    #[error("malformed pillar string: {0:?}")]
    MalformedPillar(String),
    /// A chart string with the wrong number of pillars.
    #[error("expected 4 pillars, got {0}")]
    WrongPillarCount(usize),
}
