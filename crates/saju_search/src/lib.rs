//! Solar-term search: locate when the Sun crosses the 24 fixed 15-degree
//! longitude boundaries, and classify any instant against them.
//!
//! This crate provides:
//! - The fixed 24-term catalog (ordinal 0 = Ipchun at 315 degrees)
//! - A bisection crossing finder over `wrap180(longitude - target)`
//! - Current/next term analysis with guaranteed non-negative day deltas
//! - The full-year table of all 24 term instants
//!
//! Everything is generic over [`saju_time::DateAdapter`]; no concrete time
//! backend is named here.

pub mod error;
pub mod finder;
pub mod term_types;
pub mod terms;

pub use error::SearchError;
pub use finder::{find_term_crossing, solar_longitude_at};
pub use term_types::{
    ALL_TERMS, SolarTerm, TERM0_LONGITUDE_DEG, TERM_STEP_DEG, TermEvent, TermInfo,
    TermSearchConfig,
};
pub use terms::{term_info, terms_for_year};
