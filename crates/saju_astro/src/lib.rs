//! Solar-position math for the sexagenary calendar.
//!
//! This crate provides:
//! - Civil calendar ↔ Julian Day conversion (Gregorian)
//! - Julian centuries since J2000.0
//! - Apparent solar ecliptic longitude from a bounded-error series
//! - Angle normalization helpers shared by the crossing search
//!
//! Pure `f64` math with no dependencies; zone handling and instant types
//! live in `saju_time`.

pub mod julian;
pub mod solar;

pub use julian::{J2000_JD, calendar_to_jd, julian_centuries};
pub use solar::{normalize_360, solar_longitude_deg, wrap180};
