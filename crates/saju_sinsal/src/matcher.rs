//! Rule evaluation over a four-pillar chart.
//!
//! Every rule is evaluated independently; no rule short-circuits on
//! another's result. Raw hits are collected, deduplicated by (pattern,
//! position), and returned both flat and regrouped by pattern. The two
//! views always carry identical information.

use std::collections::BTreeMap;

use serde::Serialize;

use saju_ganji::{FourPillars, PillarPosition};

use crate::sinsal::Sinsal;
use crate::tables::{
    GHOST_GATE_PAIRS, KUI_GANG_PILLARS, MUTUAL_GRUDGE_PAIRS, PUNISHMENT_PAIRS,
    SOLITARY_SPOUSE_PILLARS, SUSPENDED_NEEDLE_BRANCHES, SUSPENDED_NEEDLE_STEMS, StemOrBranch,
    TRIAD_CYCLE, WHITE_TIGER_PILLARS, golden_carriage_branch, heavenly_noble_branches,
    hidden_stipend_branch, literary_star_branch, lonely_star_branch, moon_virtue_stem,
    pair_in_table, red_passion_branch, sheep_blade_branch, sky_virtue_target, triad_cycle_target,
    void_branches, widow_star_branch,
};

/// One deduplicated pattern hit at a chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SinsalMatch {
    pub sinsal: Sinsal,
    pub position: PillarPosition,
}

/// Flat matches plus the per-pattern grouping of positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinsalReport {
    /// Deduplicated matches in catalog order.
    pub matches: Vec<SinsalMatch>,
    /// The same matches regrouped: pattern to its ordered positions.
    pub summary: BTreeMap<Sinsal, Vec<PillarPosition>>,
}

impl SinsalReport {
    /// Positions a pattern matched at, empty if it did not.
    pub fn positions(&self, sinsal: Sinsal) -> &[PillarPosition] {
        self.summary.get(&sinsal).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Evaluate every rule against the chart.
pub fn match_chart(chart: FourPillars) -> SinsalReport {
    let mut raw: Vec<SinsalMatch> = Vec::new();

    collect_triad_cycle(chart, &mut raw);
    collect_day_stem_rules(chart, &mut raw);
    collect_month_rules(chart, &mut raw);
    collect_direction_rules(chart, &mut raw);
    collect_pair_rules(chart, &mut raw);
    collect_void(chart, &mut raw);
    collect_pillar_sets(chart, &mut raw);

    raw.sort();
    raw.dedup();

    let mut summary: BTreeMap<Sinsal, Vec<PillarPosition>> = BTreeMap::new();
    for m in &raw {
        summary.entry(m.sinsal).or_default().push(m.position);
    }

    SinsalReport {
        matches: raw,
        summary,
    }
}

/// The twelve triad-cycle patterns, referenced from both the year and the
/// day branch. A pillar other than the reference bearing the target branch
/// matches.
fn collect_triad_cycle(chart: FourPillars, out: &mut Vec<SinsalMatch>) {
    for reference in [PillarPosition::Year, PillarPosition::Day] {
        let reference_branch = chart.pillar(reference).branch();
        for (offset, &sinsal) in TRIAD_CYCLE.iter().enumerate() {
            let target = triad_cycle_target(reference_branch, offset as u8);
            for (position, pillar) in chart.pillars() {
                if position != reference && pillar.branch() == target {
                    out.push(SinsalMatch { sinsal, position });
                }
            }
        }
    }
}

/// Day-stem keyed lookups: any pillar whose branch is in the selected set
/// matches at its own position.
fn collect_day_stem_rules(chart: FourPillars, out: &mut Vec<SinsalMatch>) {
    let day_stem = chart.day().stem();
    let nobles = heavenly_noble_branches(day_stem);

    for (position, pillar) in chart.pillars() {
        let branch = pillar.branch();
        if nobles.contains(&branch) {
            out.push(SinsalMatch {
                sinsal: Sinsal::HeavenlyNoble,
                position,
            });
        }
        if branch == sheep_blade_branch(day_stem) {
            out.push(SinsalMatch {
                sinsal: Sinsal::SheepBlade,
                position,
            });
        }
        if branch == red_passion_branch(day_stem) {
            out.push(SinsalMatch {
                sinsal: Sinsal::RedPassion,
                position,
            });
        }
        if branch == literary_star_branch(day_stem) {
            out.push(SinsalMatch {
                sinsal: Sinsal::LiteraryStar,
                position,
            });
        }
        if branch == golden_carriage_branch(day_stem) {
            out.push(SinsalMatch {
                sinsal: Sinsal::GoldenCarriage,
                position,
            });
        }
        if branch == hidden_stipend_branch(day_stem) {
            out.push(SinsalMatch {
                sinsal: Sinsal::HiddenStipend,
                position,
            });
        }
    }
}

/// Month-branch keyed virtues, carried by any pillar holding the target.
fn collect_month_rules(chart: FourPillars, out: &mut Vec<SinsalMatch>) {
    let month_branch = chart.month().branch();

    match sky_virtue_target(month_branch) {
        StemOrBranch::Stem(stem) => {
            for (position, pillar) in chart.pillars() {
                if pillar.stem() == stem {
                    out.push(SinsalMatch {
                        sinsal: Sinsal::SkyVirtue,
                        position,
                    });
                }
            }
        }
        StemOrBranch::Branch(branch) => {
            for (position, pillar) in chart.pillars() {
                if pillar.branch() == branch {
                    out.push(SinsalMatch {
                        sinsal: Sinsal::SkyVirtue,
                        position,
                    });
                }
            }
        }
    }

    let virtue_stem = moon_virtue_stem(month_branch.triad());
    for (position, pillar) in chart.pillars() {
        if pillar.stem() == virtue_stem {
            out.push(SinsalMatch {
                sinsal: Sinsal::MoonVirtue,
                position,
            });
        }
    }
}

/// Year-branch directional rules. The targets sit outside the year's own
/// group, so no reference exclusion is needed.
fn collect_direction_rules(chart: FourPillars, out: &mut Vec<SinsalMatch>) {
    let year_branch = chart.year().branch();
    let lonely = lonely_star_branch(year_branch);
    let widow = widow_star_branch(year_branch);

    for (position, pillar) in chart.pillars() {
        if pillar.branch() == lonely {
            out.push(SinsalMatch {
                sinsal: Sinsal::LonelyStar,
                position,
            });
        }
        if pillar.branch() == widow {
            out.push(SinsalMatch {
                sinsal: Sinsal::WidowStar,
                position,
            });
        }
    }
}

/// Pairwise relations between any two pillars; a hit marks both positions.
fn collect_pair_rules(chart: FourPillars, out: &mut Vec<SinsalMatch>) {
    const PAIR_RULES: [(Sinsal, &[(saju_ganji::Branch, saju_ganji::Branch)]); 3] = [
        (Sinsal::MutualGrudge, &MUTUAL_GRUDGE_PAIRS),
        (Sinsal::GhostGate, &GHOST_GATE_PAIRS),
        (Sinsal::Punishment, &PUNISHMENT_PAIRS),
    ];

    let pillars = chart.pillars();
    for i in 0..pillars.len() {
        for j in (i + 1)..pillars.len() {
            let (pos_a, pillar_a) = pillars[i];
            let (pos_b, pillar_b) = pillars[j];
            for (sinsal, table) in PAIR_RULES {
                if pair_in_table(table, pillar_a.branch(), pillar_b.branch()) {
                    out.push(SinsalMatch {
                        sinsal,
                        position: pos_a,
                    });
                    out.push(SinsalMatch {
                        sinsal,
                        position: pos_b,
                    });
                }
            }
        }
    }
}

/// Void branches of the day pillar's gapja decade. The day pillar never
/// sits in its own void decade, so all four positions can be scanned.
fn collect_void(chart: FourPillars, out: &mut Vec<SinsalMatch>) {
    let [first, second] = void_branches(chart.day());
    for (position, pillar) in chart.pillars() {
        let branch = pillar.branch();
        if branch == first || branch == second {
            out.push(SinsalMatch {
                sinsal: Sinsal::Void,
                position,
            });
        }
    }
}

/// Whole-pillar set rules.
fn collect_pillar_sets(chart: FourPillars, out: &mut Vec<SinsalMatch>) {
    for (position, pillar) in chart.pillars() {
        let pair = (pillar.stem(), pillar.branch());
        if KUI_GANG_PILLARS.contains(&pair) {
            out.push(SinsalMatch {
                sinsal: Sinsal::KuiGang,
                position,
            });
        }
        if WHITE_TIGER_PILLARS.contains(&pair) {
            out.push(SinsalMatch {
                sinsal: Sinsal::WhiteTiger,
                position,
            });
        }
        if SUSPENDED_NEEDLE_STEMS.contains(&pillar.stem())
            || SUSPENDED_NEEDLE_BRANCHES.contains(&pillar.branch())
        {
            out.push(SinsalMatch {
                sinsal: Sinsal::SuspendedNeedle,
                position,
            });
        }
    }

    let day = (chart.day().stem(), chart.day().branch());
    if SOLITARY_SPOUSE_PILLARS.contains(&day) {
        out.push(SinsalMatch {
            sinsal: Sinsal::SolitarySpouse,
            position: PillarPosition::Day,
        });
    }
}
