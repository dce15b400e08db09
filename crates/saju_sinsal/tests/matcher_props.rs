//! Property tests for the matcher over arbitrary valid charts.

use proptest::prelude::*;

use saju_ganji::{FourPillars, Pillar};
use saju_sinsal::{SinsalMatch, match_chart};

fn arb_chart() -> impl Strategy<Value = FourPillars> {
    // Any four gapja indices form a valid chart.
    (0u8..60, 0u8..60, 0u8..60, 0u8..60).prop_map(|(y, m, d, h)| {
        FourPillars::new(
            Pillar::from_gapja(y),
            Pillar::from_gapja(m),
            Pillar::from_gapja(d),
            Pillar::from_gapja(h),
        )
    })
}

proptest! {
    #[test]
    fn no_duplicate_pairs(chart in arb_chart()) {
        let report = match_chart(chart);
        let mut deduped = report.matches.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped, report.matches);
    }

    #[test]
    fn matching_is_idempotent(chart in arb_chart()) {
        prop_assert_eq!(match_chart(chart), match_chart(chart));
    }

    #[test]
    fn summary_is_exactly_the_flat_list_regrouped(chart in arb_chart()) {
        let report = match_chart(chart);

        let mut from_summary: Vec<SinsalMatch> = report
            .summary
            .iter()
            .flat_map(|(&sinsal, positions)| {
                positions
                    .iter()
                    .map(move |&position| SinsalMatch { sinsal, position })
            })
            .collect();
        from_summary.sort();

        prop_assert_eq!(from_summary, report.matches);
    }

    #[test]
    fn no_empty_summary_rows(chart in arb_chart()) {
        let report = match_chart(chart);
        prop_assert!(report.summary.values().all(|positions| !positions.is_empty()));
    }
}
