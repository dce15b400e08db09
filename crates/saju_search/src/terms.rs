//! Solar-term classification: current/next term for an instant, and the
//! full-year term table.
//!
//! Given a zoned instant, these functions determine where it sits in the
//! 24-term cycle and locate the exact boundary instants around it. All
//! searching happens on the UTC axis; results are re-zoned to the caller.

use saju_time::DateAdapter;

use crate::error::SearchError;
use crate::finder::{MILLIS_PER_DAY, find_term_crossing, solar_longitude_at};
use crate::term_types::{ALL_TERMS, SolarTerm, TermEvent, TermInfo, TermSearchConfig};

/// Locate the exact instant `term` begins, searching the month it falls in
/// within `civil_year`.
fn locate_term<A: DateAdapter>(
    adapter: &A,
    term: SolarTerm,
    civil_year: i32,
    config: &TermSearchConfig,
) -> Result<A::Instant, SearchError> {
    let month_start = adapter.create_utc(civil_year, term.civil_month(), 1, 0, 0, 0)?;
    let start = adapter.minus_days(&month_start, config.window_lead_days);
    let end = adapter.plus_days(&start, config.window_span_days);
    find_term_crossing(adapter, term.target_longitude_deg(), &start, &end, config)
}

/// Classify a zoned instant against the term cycle.
///
/// The current term is read off the instant's solar longitude and its
/// boundary is located in the query's civil year; if that lands after the
/// query (possible near a boundary, and always for the January terms
/// queried early in the year), the prior year is used instead. The next
/// term is handled symmetrically with the following year. Both day deltas
/// are therefore never negative.
pub fn term_info<A: DateAdapter>(
    adapter: &A,
    instant: &A::Instant,
    config: &TermSearchConfig,
) -> Result<TermInfo<A::Instant>, SearchError> {
    let zone = adapter.zone_name(instant);
    let query_millis = adapter.to_millis(instant);
    let civil_year = {
        let utc = adapter.to_utc(instant);
        adapter.year(&utc)
    };

    let current = SolarTerm::from_longitude(solar_longitude_at(adapter, instant));
    let next = current.next();

    let mut current_at = locate_term(adapter, current, civil_year, config)?;
    if adapter.to_millis(&current_at) > query_millis {
        current_at = locate_term(adapter, current, civil_year - 1, config)?;
    }

    let mut next_at = locate_term(adapter, next, civil_year, config)?;
    if adapter.to_millis(&next_at) < query_millis {
        next_at = locate_term(adapter, next, civil_year + 1, config)?;
    }

    let since_millis = query_millis - adapter.to_millis(&current_at);
    let until_millis = adapter.to_millis(&next_at) - query_millis;
    let days_since = (since_millis as f64 / MILLIS_PER_DAY as f64).floor() as i64;
    let days_until = (until_millis as f64 / MILLIS_PER_DAY as f64).ceil() as i64;

    Ok(TermInfo {
        current,
        current_instant: adapter.set_zone(&current_at, &zone)?,
        days_since,
        next,
        next_instant: adapter.set_zone(&next_at, &zone)?,
        days_until,
    })
}

/// All 24 term instants for the cycle that opens at Ipchun of `year`.
///
/// Sohan and Daehan close the cycle in January of `year + 1`, keeping the
/// table ordered by ordinal and strictly increasing in time. Each entry is
/// located independently; no query instant is involved.
pub fn terms_for_year<A: DateAdapter>(
    adapter: &A,
    year: i32,
    zone: &str,
    config: &TermSearchConfig,
) -> Result<Vec<TermEvent<A::Instant>>, SearchError> {
    ALL_TERMS
        .iter()
        .map(|&term| {
            let civil_year = if term.civil_month() == 1 { year + 1 } else { year };
            let at = locate_term(adapter, term, civil_year, config)?;
            Ok(TermEvent {
                term,
                instant: adapter.set_zone(&at, zone)?,
            })
        })
        .collect()
}
