//! Validated stem-branch pillars and the four-pillar chart.

use serde::Serialize;

use crate::branch::Branch;
use crate::error::GanjiError;
use crate::stem::Stem;

/// One (stem, branch) pair of the 60-term gapja cycle.
///
/// Only parity-matching pairs exist: yang stems combine with yang branches
/// and yin with yin, giving 60 of the 120 raw combinations. Construction
/// rejects the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Build a pillar, rejecting parity-mismatched pairs.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, GanjiError> {
        if stem.is_yang() != branch.is_yang() {
            return Err(GanjiError::InvalidPillar {
                stem: stem.hanja(),
                branch: branch.hanja(),
            });
        }
        Ok(Self { stem, branch })
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the 60-term gapja cycle (0 = Gapja 甲子, 59 = Gyehae 癸亥).
    ///
    /// Solves the pair of congruences n ≡ stem (mod 10), n ≡ branch (mod 12):
    /// the unique n in [0, 60) is (6·stem − 5·branch) mod 60.
    pub fn gapja_index(self) -> u8 {
        let s = self.stem.ordinal() as i32;
        let b = self.branch.ordinal() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Pillar at a gapja cycle position, wrapping modulo 60.
    pub fn from_gapja(n: u8) -> Self {
        let n = n % 60;
        // n mod 10 and n mod 12 always share n's parity, so the pair is valid.
        Self {
            stem: Stem::from_ordinal(n % 10),
            branch: Branch::from_ordinal(n % 12),
        }
    }

    /// Parse a two-symbol hanja pair such as "甲寅".
    pub fn parse(s: &str) -> Result<Self, GanjiError> {
        let mut chars = s.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GanjiError::MalformedPillar(s.to_string()));
        };
        let stem = Stem::from_symbol(first).ok_or(GanjiError::UnknownStem(first))?;
        let branch = Branch::from_symbol(second).ok_or(GanjiError::UnknownBranch(second))?;
        Self::new(stem, branch)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// The four chart slots, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in canonical order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Stable lowercase key used in summaries and serialized output.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

impl std::fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete four-pillar chart. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillars {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub const fn year(self) -> Pillar {
        self.year
    }

    pub const fn month(self) -> Pillar {
        self.month
    }

    pub const fn day(self) -> Pillar {
        self.day
    }

    pub const fn hour(self) -> Pillar {
        self.hour
    }

    /// The pillar occupying a chart slot.
    pub const fn pillar(self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// All (position, pillar) pairs in canonical order.
    pub fn pillars(self) -> [(PillarPosition, Pillar); 4] {
        ALL_POSITIONS.map(|p| (p, self.pillar(p)))
    }

    /// Parse four whitespace-separated hanja pairs, year first.
    pub fn parse(s: &str) -> Result<Self, GanjiError> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(GanjiError::WrongPillarCount(parts.len()));
        }
        Ok(Self::new(
            Pillar::parse(parts[0])?,
            Pillar::parse(parts[1])?,
            Pillar::parse(parts[2])?,
            Pillar::parse(parts[3])?,
        ))
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}
