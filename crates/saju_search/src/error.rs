//! Error types for the crossing search.

use thiserror::Error;

use saju_time::TimeError;

/// Errors from term search and classification.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The crossing finder exhausted its bracket expansions without a sign
    /// change. With the fixed 15-degree targets and month-scale windows
    /// this indicates a broken adapter or a mismatched year/window, not a
    /// condition worth retrying.
    #[error("no sign change bracketing {target_deg} deg after {expansions} expansions")]
    Unbracketed { target_deg: f64, expansions: u32 },
    /// Invalid search configuration.
    #[error("invalid search config: {0}")]
    InvalidConfig(&'static str),
    /// Error from instant construction or zone handling.
    #[error(transparent)]
    Time(#[from] TimeError),
}
