//! Sexagenary (stem-branch) calendar vocabulary.
//!
//! This crate provides:
//! - The ten heavenly stems and twelve earthly branches as cyclic enums
//! - Validated pillars (only parity-matching pairs exist in the 60-cycle)
//! - The four-pillar chart and its position vocabulary
//! - Gapja-cycle index arithmetic via the stem/branch congruences
//!
//! Symbols are matched bit-exact against the canonical hanja catalog; no
//! fuzzy matching or locale variants. Solar-term and sinsal analysis live
//! in downstream crates.

pub mod branch;
pub mod error;
pub mod pillar;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch, Triad};
pub use error::GanjiError;
pub use pillar::{ALL_POSITIONS, FourPillars, Pillar, PillarPosition};
pub use stem::{ALL_STEMS, Stem};
