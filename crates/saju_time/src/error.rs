//! Error types for instant construction and zone handling.

use thiserror::Error;

/// Errors from adapter operations that construct or re-zone instants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A zone identifier not present in the IANA database.
    #[error("unknown time zone: {0:?}")]
    UnknownZone(String),
    /// A civil date/time that does not exist on the requested axis.
    #[error("unrepresentable civil time: {0}")]
    InvalidCivilTime(String),
}
