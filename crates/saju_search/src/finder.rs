//! Bisection crossing finder for term boundaries.
//!
//! Pure numerical root-finding on f(t) = wrap180(longitude(t) - target).
//! The wrap keeps sign changes meaningful within one solar revolution, so
//! a bracketed sign change marks exactly one crossing. Bisection is used
//! rather than Newton: the derivative is not worth computing and a
//! guaranteed, bounded convergence matters more than speed here.

use tracing::{debug, trace};

use saju_astro::{calendar_to_jd, solar_longitude_deg, wrap180};
use saju_time::DateAdapter;

use crate::error::SearchError;
use crate::term_types::TermSearchConfig;

/// Milliseconds per day, the unit of bracket arithmetic.
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Apparent solar longitude at an instant, degrees in [0, 360).
pub fn solar_longitude_at<A: DateAdapter>(adapter: &A, t: &A::Instant) -> f64 {
    let utc = adapter.to_utc(t);
    let day_fraction = adapter.day(&utc) as f64
        + adapter.hour(&utc) as f64 / 24.0
        + adapter.minute(&utc) as f64 / 1440.0
        + adapter.second(&utc) as f64 / 86_400.0;
    let jd = calendar_to_jd(adapter.year(&utc), adapter.month(&utc), day_fraction);
    solar_longitude_deg(jd)
}

/// Find the instant the solar longitude crosses `target_deg` inside (or
/// near) the given bracket.
///
/// If the bracket does not straddle the crossing it is widened one day per
/// side, at most `config.max_expansions` times; an unbracketed crossing
/// after that fails the call. Bisection then runs until the wrapped
/// difference at the midpoint drops under `config.tolerance_deg` or the
/// iteration cap is reached, whichever comes first. Bracket state lives in
/// locals only; the function is pure from the caller's side.
pub fn find_term_crossing<A: DateAdapter>(
    adapter: &A,
    target_deg: f64,
    bracket_start: &A::Instant,
    bracket_end: &A::Instant,
    config: &TermSearchConfig,
) -> Result<A::Instant, SearchError> {
    config.validate()?;

    let f = |millis: i64| -> Result<f64, SearchError> {
        let t = adapter.from_millis(millis, "UTC")?;
        Ok(wrap180(solar_longitude_at(adapter, &t) - target_deg))
    };

    let mut lo = adapter.to_millis(bracket_start);
    let mut hi = adapter.to_millis(bracket_end);
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    let mut f_lo = f(lo)?;
    let mut f_hi = f(hi)?;

    let mut expansions = 0u32;
    while f_lo * f_hi > 0.0 {
        if expansions == config.max_expansions {
            return Err(SearchError::Unbracketed {
                target_deg,
                expansions,
            });
        }
        expansions += 1;
        lo -= MILLIS_PER_DAY;
        hi += MILLIS_PER_DAY;
        f_lo = f(lo)?;
        f_hi = f(hi)?;
        debug!(target_deg, expansions, "expanded crossing bracket");
    }

    for iteration in 0..config.max_iterations {
        let mid = lo + (hi - lo) / 2;
        let f_mid = f(mid)?;
        if f_mid.abs() < config.tolerance_deg {
            trace!(target_deg, iteration, "crossing converged");
            return Ok(adapter.from_millis(mid, "UTC")?);
        }
        if f_lo * f_mid <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    // Iteration cap hit; the interval is sub-millisecond by now.
    let mid = lo + (hi - lo) / 2;
    Ok(adapter.from_millis(mid, "UTC")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::backend;

    #[test]
    fn locates_2024_march_equinox() {
        let adapter = backend();
        let a = adapter.create_utc(2024, 3, 10, 0, 0, 0).unwrap();
        let b = adapter.create_utc(2024, 3, 30, 0, 0, 0).unwrap();
        let config = TermSearchConfig::default();
        let hit = find_term_crossing(adapter, 0.0, &a, &b, &config).unwrap();
        assert_eq!(adapter.month(&hit), 3);
        assert_eq!(adapter.day(&hit), 20);
        let residual = wrap180(solar_longitude_at(adapter, &hit));
        assert!(residual.abs() < 1e-6, "residual {residual}");
    }

    #[test]
    fn expands_a_short_bracket() {
        // A two-day window well short of the equinox still converges via
        // expansion.
        let adapter = backend();
        let a = adapter.create_utc(2024, 3, 12, 0, 0, 0).unwrap();
        let b = adapter.create_utc(2024, 3, 14, 0, 0, 0).unwrap();
        let config = TermSearchConfig::default();
        let hit = find_term_crossing(adapter, 0.0, &a, &b, &config).unwrap();
        assert_eq!(adapter.day(&hit), 20);
    }

    #[test]
    fn fails_when_unbracketable() {
        // The equinox is months away from this window; ten expansions
        // cannot reach it.
        let adapter = backend();
        let a = adapter.create_utc(2024, 7, 1, 0, 0, 0).unwrap();
        let b = adapter.create_utc(2024, 7, 2, 0, 0, 0).unwrap();
        let config = TermSearchConfig::default();
        let err = find_term_crossing(adapter, 0.0, &a, &b, &config).unwrap_err();
        assert!(matches!(err, SearchError::Unbracketed { .. }));
    }

    #[test]
    fn swapped_bracket_is_tolerated() {
        let adapter = backend();
        let a = adapter.create_utc(2024, 3, 10, 0, 0, 0).unwrap();
        let b = adapter.create_utc(2024, 3, 30, 0, 0, 0).unwrap();
        let config = TermSearchConfig::default();
        let hit = find_term_crossing(adapter, 0.0, &b, &a, &config).unwrap();
        assert_eq!(adapter.day(&hit), 20);
    }

    #[test]
    fn rejects_bad_config() {
        let adapter = backend();
        let a = adapter.create_utc(2024, 3, 10, 0, 0, 0).unwrap();
        let b = adapter.create_utc(2024, 3, 30, 0, 0, 0).unwrap();
        let config = TermSearchConfig {
            tolerance_deg: -1.0,
            ..TermSearchConfig::default()
        };
        assert!(matches!(
            find_term_crossing(adapter, 0.0, &a, &b, &config),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
