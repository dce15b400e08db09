//! The 24-term catalog and search result types.

use crate::error::SearchError;

/// Longitude of the first term of the cycle, Ipchun, in degrees.
pub const TERM0_LONGITUDE_DEG: f64 = 315.0;

/// Angular spacing between consecutive terms.
pub const TERM_STEP_DEG: f64 = 15.0;

/// The 24 solar terms in cycle order (ordinal 0 = Ipchun).
///
/// The cycle starts at Ipchun (315 degrees), the traditional new-year
/// boundary of the sexagenary calendar, and advances 15 degrees per term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baekro,
    Chubun,
    Hanro,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms in cycle order (index 0 = Ipchun, 23 = Daehan).
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baekro,
    SolarTerm::Chubun,
    SolarTerm::Hanro,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

impl SolarTerm {
    /// Position in the 24-term cycle (0-23).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Term at a cycle position, wrapping modulo 24.
    pub const fn from_ordinal(n: u8) -> Self {
        ALL_TERMS[(n % 24) as usize]
    }

    /// The next term in the cycle.
    pub const fn next(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Target apparent solar longitude for this term, in [0, 360).
    pub const fn target_longitude_deg(self) -> f64 {
        let deg = TERM0_LONGITUDE_DEG + TERM_STEP_DEG * self.ordinal() as f64;
        if deg >= 360.0 { deg - 360.0 } else { deg }
    }

    /// The term whose 15-degree sector contains `longitude_deg`.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let offset = (longitude_deg - TERM0_LONGITUDE_DEG).rem_euclid(360.0);
        Self::from_ordinal((offset / TERM_STEP_DEG).floor() as u8)
    }

    /// Civil month this term falls in. Two terms per month; Ipchun/Usu in
    /// February through Daeseol/Dongji in December, then Sohan/Daehan in
    /// the following January.
    pub const fn civil_month(self) -> u32 {
        let month = 2 + (self.ordinal() / 2) as u32;
        if month > 12 { month - 12 } else { month }
    }

    /// Korean name of the term.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Usu => "우수",
            Self::Gyeongchip => "경칩",
            Self::Chunbun => "춘분",
            Self::Cheongmyeong => "청명",
            Self::Gogu => "곡우",
            Self::Ipha => "입하",
            Self::Soman => "소만",
            Self::Mangjong => "망종",
            Self::Haji => "하지",
            Self::Soseo => "소서",
            Self::Daeseo => "대서",
            Self::Ipchu => "입추",
            Self::Cheoseo => "처서",
            Self::Baekro => "백로",
            Self::Chubun => "추분",
            Self::Hanro => "한로",
            Self::Sanggang => "상강",
            Self::Ipdong => "입동",
            Self::Soseol => "소설",
            Self::Daeseol => "대설",
            Self::Dongji => "동지",
            Self::Sohan => "소한",
            Self::Daehan => "대한",
        }
    }

    /// Hanja name of the term.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Usu => "雨水",
            Self::Gyeongchip => "驚蟄",
            Self::Chunbun => "春分",
            Self::Cheongmyeong => "淸明",
            Self::Gogu => "穀雨",
            Self::Ipha => "立夏",
            Self::Soman => "小滿",
            Self::Mangjong => "芒種",
            Self::Haji => "夏至",
            Self::Soseo => "小暑",
            Self::Daeseo => "大暑",
            Self::Ipchu => "立秋",
            Self::Cheoseo => "處暑",
            Self::Baekro => "白露",
            Self::Chubun => "秋分",
            Self::Hanro => "寒露",
            Self::Sanggang => "霜降",
            Self::Ipdong => "立冬",
            Self::Soseol => "小雪",
            Self::Daeseol => "大雪",
            Self::Dongji => "冬至",
            Self::Sohan => "小寒",
            Self::Daehan => "大寒",
        }
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.korean(), self.hanja())
    }
}

/// One located term boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TermEvent<I> {
    pub term: SolarTerm,
    /// Exact crossing instant, expressed in the requested zone.
    pub instant: I,
}

/// Classification of a query instant against the term cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct TermInfo<I> {
    /// Term whose sector contains the query instant.
    pub current: SolarTerm,
    /// Exact instant the current term began, in the query zone.
    pub current_instant: I,
    /// Whole days elapsed since the current term began. Never negative.
    pub days_since: i64,
    /// The following term.
    pub next: SolarTerm,
    /// Exact instant the next term begins, in the query zone.
    pub next_instant: I,
    /// Whole days remaining until the next term. Never negative.
    pub days_until: i64,
}

/// Tunables for the crossing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermSearchConfig {
    /// Convergence tolerance on the wrapped longitude difference, degrees.
    pub tolerance_deg: f64,
    /// Bisection iteration cap.
    pub max_iterations: u32,
    /// Symmetric one-day bracket expansions allowed before giving up.
    pub max_expansions: u32,
    /// Days the search window starts before the 1st of the term's month.
    pub window_lead_days: i64,
    /// Total window span in days.
    pub window_span_days: i64,
}

impl Default for TermSearchConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 1e-6,
            max_iterations: 80,
            max_expansions: 10,
            window_lead_days: 3,
            window_span_days: 36,
        }
    }
}

impl TermSearchConfig {
    /// Check invariants on the configuration values.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.tolerance_deg > 0.0) {
            return Err(SearchError::InvalidConfig("tolerance_deg must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig("max_iterations must be nonzero"));
        }
        if self.window_span_days <= 0 {
            return Err(SearchError::InvalidConfig("window_span_days must be positive"));
        }
        if self.window_lead_days < 0 {
            return Err(SearchError::InvalidConfig("window_lead_days must not be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_array_order() {
        for (i, term) in ALL_TERMS.iter().enumerate() {
            assert_eq!(term.ordinal() as usize, i);
        }
    }

    #[test]
    fn cycle_wraps() {
        for n in 0..24u8 {
            assert_eq!(SolarTerm::from_ordinal(n + 24), SolarTerm::from_ordinal(n));
        }
        assert_eq!(SolarTerm::Daehan.next(), SolarTerm::Ipchun);
    }

    #[test]
    fn consecutive_targets_differ_by_step() {
        for n in 0..24u8 {
            let a = SolarTerm::from_ordinal(n).target_longitude_deg();
            let b = SolarTerm::from_ordinal(n + 1).target_longitude_deg();
            let diff = (b - a).rem_euclid(360.0);
            assert!((diff - TERM_STEP_DEG).abs() < 1e-9, "ordinal {n}: {diff}");
        }
    }

    #[test]
    fn sector_lookup() {
        assert_eq!(SolarTerm::from_longitude(315.0), SolarTerm::Ipchun);
        assert_eq!(SolarTerm::from_longitude(314.999), SolarTerm::Daehan);
        assert_eq!(SolarTerm::from_longitude(0.0), SolarTerm::Chunbun);
        assert_eq!(SolarTerm::from_longitude(359.9), SolarTerm::Gyeongchip);
        assert_eq!(SolarTerm::from_longitude(270.0), SolarTerm::Dongji);
    }

    #[test]
    fn two_terms_per_civil_month() {
        for month in 1..=12u32 {
            let count = ALL_TERMS
                .iter()
                .filter(|t| t.civil_month() == month)
                .count();
            assert_eq!(count, 2, "month {month}");
        }
        assert_eq!(SolarTerm::Ipchun.civil_month(), 2);
        assert_eq!(SolarTerm::Dongji.civil_month(), 12);
        assert_eq!(SolarTerm::Sohan.civil_month(), 1);
        assert_eq!(SolarTerm::Daehan.civil_month(), 1);
    }

    #[test]
    fn config_validation() {
        assert!(TermSearchConfig::default().validate().is_ok());
        let c = TermSearchConfig {
            tolerance_deg: 0.0,
            ..TermSearchConfig::default()
        };
        assert!(c.validate().is_err());
        let c = TermSearchConfig {
            max_iterations: 0,
            ..TermSearchConfig::default()
        };
        assert!(c.validate().is_err());
        let c = TermSearchConfig {
            window_span_days: 0,
            ..TermSearchConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
