//! Property tests for term classification.
//!
//! For any valid instant the classification must hold its structural
//! invariants: non-negative day deltas, cycle-adjacent current/next, and
//! boundaries that actually straddle the query.

use proptest::prelude::*;

use saju_astro::wrap180;
use saju_search::{TermSearchConfig, solar_longitude_at, term_info};
use saju_time::{DateAdapter, backend};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn classification_invariants(
        year in 2015i32..2035,
        day_offset in 0i64..365,
        minute_offset in 0i64..1440,
        zone_index in 0usize..4,
    ) {
        let zone = ["Asia/Seoul", "UTC", "America/Chicago", "Australia/Sydney"][zone_index];
        let adapter = backend();
        let base = adapter.create_utc(year, 1, 1, 0, 0, 0).unwrap();
        let shifted = adapter.plus_minutes(&adapter.plus_days(&base, day_offset), minute_offset);
        let query = adapter.set_zone(&shifted, zone).unwrap();

        let config = TermSearchConfig::default();
        let info = term_info(adapter, &query, &config).unwrap();

        prop_assert!(info.days_since >= 0);
        prop_assert!(info.days_until >= 0);
        prop_assert_eq!(info.next, info.current.next());

        // Boundaries straddle the query on the physical timeline.
        prop_assert!(adapter.is_gte(&query, &info.current_instant));
        prop_assert!(adapter.is_gte(&info.next_instant, &query));

        // Results come back in the query zone.
        prop_assert_eq!(adapter.zone_name(&info.current_instant), zone);

        // Root accuracy at both located boundaries.
        let cur_residual = wrap180(
            solar_longitude_at(adapter, &info.current_instant)
                - info.current.target_longitude_deg(),
        );
        prop_assert!(cur_residual.abs() < 1e-5, "current residual {}", cur_residual);
        let next_residual = wrap180(
            solar_longitude_at(adapter, &info.next_instant) - info.next.target_longitude_deg(),
        );
        prop_assert!(next_residual.abs() < 1e-5, "next residual {}", next_residual);
    }
}
