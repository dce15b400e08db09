//! Static rule tables the patterns are defined by.
//!
//! Everything here is constant lookup data: triad bases, stem-keyed branch
//! targets, month-keyed virtue targets, directional groups, pairwise
//! relations, the void decades, and the whole-pillar sets. The matcher
//! consumes these read-only; nothing is ever mutated.

use saju_ganji::{Branch, Pillar, Stem, Triad};

use crate::sinsal::Sinsal;

// ---------------------------------------------------------------------------
// 1. Triad cycle
// ---------------------------------------------------------------------------

/// The twelve triad-cycle patterns, ordered by their offset from the
/// Robbery base. Pattern at offset k targets base + k.
pub const TRIAD_CYCLE: [Sinsal; 12] = [
    Sinsal::Robbery,
    Sinsal::Disaster,
    Sinsal::SkyCalamity,
    Sinsal::EarthStar,
    Sinsal::PeachBlossom,
    Sinsal::MoonCalamity,
    Sinsal::LossOfFace,
    Sinsal::GeneralStar,
    Sinsal::SaddleHorse,
    Sinsal::SkyHorse,
    Sinsal::SixHarms,
    Sinsal::FloweryCanopy,
];

/// Robbery base branch per triad. The base is the branch immediately after
/// the triad's final (storage) member; the other eleven patterns follow it
/// in branch order.
pub const fn robbery_base(triad: Triad) -> Branch {
    match triad {
        Triad::Fire => Branch::Hae,
        Triad::Water => Branch::Sa,
        Triad::Metal => Branch::In,
        Triad::Wood => Branch::Sin,
    }
}

/// Target branch of the triad-cycle pattern at `offset` for a reference
/// branch.
pub fn triad_cycle_target(reference: Branch, offset: u8) -> Branch {
    Branch::from_ordinal(robbery_base(reference.triad()).ordinal() + offset)
}

// ---------------------------------------------------------------------------
// 2. Day-stem keyed targets
// ---------------------------------------------------------------------------

/// Heavenly Noble: day stem selects two helper branches.
pub const fn heavenly_noble_branches(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Branch::Chuk, Branch::Mi],
        Stem::Eul | Stem::Gi => [Branch::Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => [Branch::Hae, Branch::Yu],
        Stem::Sin => [Branch::O, Branch::In],
        Stem::Im | Stem::Gye => [Branch::Sa, Branch::Myo],
    }
}

/// Sheep Blade: the blade branch one step past the stem's prosperity
/// branch. Yang stems use the next branch, yin stems the branch after the
/// one they sit on.
pub const fn sheep_blade_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::Myo,
        Stem::Eul => Branch::Jin,
        Stem::Byeong | Stem::Mu => Branch::O,
        Stem::Jeong | Stem::Gi => Branch::Mi,
        Stem::Gyeong => Branch::Yu,
        Stem::Sin => Branch::Sul,
        Stem::Im => Branch::Ja,
        Stem::Gye => Branch::Chuk,
    }
}

/// Red Passion: day stem selects the attraction branch.
pub const fn red_passion_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap | Stem::Eul => Branch::O,
        Stem::Byeong => Branch::In,
        Stem::Jeong => Branch::Mi,
        Stem::Mu | Stem::Gi => Branch::Jin,
        Stem::Gyeong => Branch::Sul,
        Stem::Sin => Branch::Yu,
        Stem::Im => Branch::Ja,
        Stem::Gye => Branch::Sin,
    }
}

/// Literary Star: day stem selects the scholarship branch.
pub const fn literary_star_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::Sa,
        Stem::Eul => Branch::O,
        Stem::Byeong | Stem::Mu => Branch::Sin,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Gyeong => Branch::Hae,
        Stem::Sin => Branch::Ja,
        Stem::Im => Branch::In,
        Stem::Gye => Branch::Myo,
    }
}

/// Golden Carriage: day stem selects the carriage branch.
pub const fn golden_carriage_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::Jin,
        Stem::Eul => Branch::Sa,
        Stem::Byeong | Stem::Mu => Branch::Mi,
        Stem::Jeong | Stem::Gi => Branch::Sin,
        Stem::Gyeong => Branch::Sul,
        Stem::Sin => Branch::Hae,
        Stem::Im => Branch::Chuk,
        Stem::Gye => Branch::In,
    }
}

/// Hidden Stipend: the branch that pairs with the stem's prosperity branch
/// in the six-harmony relation.
pub const fn hidden_stipend_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::Hae,
        Stem::Eul => Branch::Sul,
        Stem::Byeong | Stem::Mu => Branch::Sin,
        Stem::Jeong | Stem::Gi => Branch::Mi,
        Stem::Gyeong => Branch::Sa,
        Stem::Sin => Branch::Jin,
        Stem::Im => Branch::In,
        Stem::Gye => Branch::Chuk,
    }
}

// ---------------------------------------------------------------------------
// 3. Month-branch keyed targets
// ---------------------------------------------------------------------------

/// A lookup target that may be either a stem or a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemOrBranch {
    Stem(Stem),
    Branch(Branch),
}

/// Sky Virtue: the month branch selects a stem or branch that carries the
/// virtue anywhere in the chart.
pub const fn sky_virtue_target(month_branch: Branch) -> StemOrBranch {
    match month_branch {
        Branch::In => StemOrBranch::Stem(Stem::Jeong),
        Branch::Myo => StemOrBranch::Branch(Branch::Sin),
        Branch::Jin => StemOrBranch::Stem(Stem::Im),
        Branch::Sa => StemOrBranch::Stem(Stem::Sin),
        Branch::O => StemOrBranch::Branch(Branch::Hae),
        Branch::Mi => StemOrBranch::Stem(Stem::Gap),
        Branch::Sin => StemOrBranch::Stem(Stem::Gye),
        Branch::Yu => StemOrBranch::Branch(Branch::In),
        Branch::Sul => StemOrBranch::Stem(Stem::Byeong),
        Branch::Hae => StemOrBranch::Stem(Stem::Eul),
        Branch::Ja => StemOrBranch::Branch(Branch::Sa),
        Branch::Chuk => StemOrBranch::Stem(Stem::Gyeong),
    }
}

/// Moon Virtue: the month triad selects its yang stem.
pub const fn moon_virtue_stem(month_triad: Triad) -> Stem {
    match month_triad {
        Triad::Fire => Stem::Byeong,
        Triad::Water => Stem::Im,
        Triad::Metal => Stem::Gyeong,
        Triad::Wood => Stem::Gap,
    }
}

// ---------------------------------------------------------------------------
// 4. Year-branch directional groups
// ---------------------------------------------------------------------------

/// Lonely Star: the branch just past the year's directional group.
pub const fn lonely_star_branch(year_branch: Branch) -> Branch {
    match year_branch {
        Branch::Hae | Branch::Ja | Branch::Chuk => Branch::In,
        Branch::In | Branch::Myo | Branch::Jin => Branch::Sa,
        Branch::Sa | Branch::O | Branch::Mi => Branch::Sin,
        Branch::Sin | Branch::Yu | Branch::Sul => Branch::Hae,
    }
}

/// Widow Star: the branch just before the year's directional group.
pub const fn widow_star_branch(year_branch: Branch) -> Branch {
    match year_branch {
        Branch::Hae | Branch::Ja | Branch::Chuk => Branch::Sul,
        Branch::In | Branch::Myo | Branch::Jin => Branch::Chuk,
        Branch::Sa | Branch::O | Branch::Mi => Branch::Jin,
        Branch::Sin | Branch::Yu | Branch::Sul => Branch::Mi,
    }
}

// ---------------------------------------------------------------------------
// 5. Pairwise branch relations
// ---------------------------------------------------------------------------

/// Mutual-grudge pairs.
pub const MUTUAL_GRUDGE_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Mi),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Yu),
    (Branch::Myo, Branch::Sin),
    (Branch::Jin, Branch::Hae),
    (Branch::Sa, Branch::Sul),
];

/// Ghost-gate pairs.
pub const GHOST_GATE_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Yu),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Mi),
    (Branch::Myo, Branch::Sin),
    (Branch::Jin, Branch::Hae),
    (Branch::Sa, Branch::Sul),
];

/// Punishment pairs, including the four self-punishing branches.
pub const PUNISHMENT_PAIRS: [(Branch, Branch); 11] = [
    (Branch::In, Branch::Sa),
    (Branch::Sa, Branch::Sin),
    (Branch::In, Branch::Sin),
    (Branch::Chuk, Branch::Sul),
    (Branch::Sul, Branch::Mi),
    (Branch::Chuk, Branch::Mi),
    (Branch::Ja, Branch::Myo),
    (Branch::Jin, Branch::Jin),
    (Branch::O, Branch::O),
    (Branch::Yu, Branch::Yu),
    (Branch::Hae, Branch::Hae),
];

/// Whether two branches appear as a pair (either order) in a table.
pub fn pair_in_table(table: &[(Branch, Branch)], a: Branch, b: Branch) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

// ---------------------------------------------------------------------------
// 6. Void decades (gongmang)
// ---------------------------------------------------------------------------

/// The two void branches of the day pillar's gapja decade.
///
/// Each decade of the 60-cycle leaves two branches uncovered; the decade
/// starting at 甲子 voids Sul/Hae, and each following decade shifts the
/// pair back by two branches.
pub fn void_branches(day_pillar: Pillar) -> [Branch; 2] {
    let decade = day_pillar.gapja_index() / 10;
    let first = (10 + 10 * decade) % 12;
    [Branch::from_ordinal(first), Branch::from_ordinal(first + 1)]
}

// ---------------------------------------------------------------------------
// 7. Whole-pillar sets
// ---------------------------------------------------------------------------

/// KuiGang pillars: the great-firmness day lords.
pub const KUI_GANG_PILLARS: [(Stem, Branch); 5] = [
    (Stem::Gyeong, Branch::Jin),
    (Stem::Gyeong, Branch::Sul),
    (Stem::Im, Branch::Jin),
    (Stem::Im, Branch::Sul),
    (Stem::Mu, Branch::Sul),
];

/// White Tiger pillars.
pub const WHITE_TIGER_PILLARS: [(Stem, Branch); 7] = [
    (Stem::Gap, Branch::Jin),
    (Stem::Eul, Branch::Mi),
    (Stem::Byeong, Branch::Sul),
    (Stem::Jeong, Branch::Chuk),
    (Stem::Mu, Branch::Jin),
    (Stem::Im, Branch::Sul),
    (Stem::Gye, Branch::Chuk),
];

/// Suspended Needle: the needle-shaped stems.
pub const SUSPENDED_NEEDLE_STEMS: [Stem; 2] = [Stem::Gap, Stem::Sin];

/// Suspended Needle: the needle-shaped branches.
pub const SUSPENDED_NEEDLE_BRANCHES: [Branch; 4] =
    [Branch::Myo, Branch::O, Branch::Mi, Branch::Sin];

/// Solitary Spouse day pillars.
pub const SOLITARY_SPOUSE_PILLARS: [(Stem, Branch); 5] = [
    (Stem::Gap, Branch::In),
    (Stem::Eul, Branch::Sa),
    (Stem::Jeong, Branch::Sa),
    (Stem::Mu, Branch::Sin),
    (Stem::Sin, Branch::Hae),
];
