//! Sinsal pattern matching over four-pillar charts.
//!
//! This crate provides:
//! - The catalog of thirty named patterns with read-only metadata
//! - The static rule tables the patterns are defined by
//! - The matcher that evaluates every rule against a chart and returns
//!   deduplicated (pattern, position) matches in flat and grouped form
//!
//! All tables are immutable constants or lazily-built read-only maps;
//! matching is pure and idempotent.

pub mod info;
pub mod matcher;
pub mod sinsal;
pub mod tables;

pub use info::{SinsalInfo, catalog, info};
pub use matcher::{SinsalMatch, SinsalReport, match_chart};
pub use sinsal::{ALL_SINSAL, Polarity, Sinsal};
pub use tables::StemOrBranch;
