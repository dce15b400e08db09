//! The thirty-pattern catalog.
//!
//! Pattern keys are stable camelCase identifiers used in serialized
//! summaries; Korean and hanja names carry the traditional reading.

use serde::Serialize;

/// Traditional reading of a pattern's influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Auspicious,
    Inauspicious,
    Neutral,
}

/// The named celestial patterns evaluated against a chart.
///
/// The first twelve form the triad cycle and are defined by a single
/// base-plus-offset table; the rest fall into stem-keyed, month-keyed,
/// directional, pairwise, void, and whole-pillar rule shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Sinsal {
    // Triad cycle, in base-offset order.
    Robbery,
    Disaster,
    SkyCalamity,
    EarthStar,
    PeachBlossom,
    MoonCalamity,
    LossOfFace,
    GeneralStar,
    SaddleHorse,
    SkyHorse,
    SixHarms,
    FloweryCanopy,
    // Day-stem keyed.
    HeavenlyNoble,
    SheepBlade,
    RedPassion,
    LiteraryStar,
    GoldenCarriage,
    HiddenStipend,
    // Month-branch keyed.
    SkyVirtue,
    MoonVirtue,
    // Year-branch directional groups.
    LonelyStar,
    WidowStar,
    // Pairwise branch relations.
    MutualGrudge,
    GhostGate,
    Punishment,
    // Day-pillar gapja decade.
    Void,
    // Whole-pillar sets.
    KuiGang,
    WhiteTiger,
    SuspendedNeedle,
    SolitarySpouse,
}

/// Every pattern, in catalog order.
pub const ALL_SINSAL: [Sinsal; 30] = [
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
    Sinsal::HeavenlyNoble,
    Sinsal::SheepBlade,
    Sinsal::RedPassion,
    Sinsal::LiteraryStar,
    Sinsal::GoldenCarriage,
    Sinsal::HiddenStipend,
    Sinsal::SkyVirtue,
    Sinsal::MoonVirtue,
    Sinsal::LonelyStar,
    Sinsal::WidowStar,
    Sinsal::MutualGrudge,
    Sinsal::GhostGate,
    Sinsal::Punishment,
    Sinsal::Void,
    Sinsal::KuiGang,
    Sinsal::WhiteTiger,
    Sinsal::SuspendedNeedle,
    Sinsal::SolitarySpouse,
];

impl Sinsal {
    /// Stable camelCase key, identical to the serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Robbery => "robbery",
            Self::Disaster => "disaster",
            Self::SkyCalamity => "skyCalamity",
            Self::EarthStar => "earthStar",
            Self::PeachBlossom => "peachBlossom",
            Self::MoonCalamity => "moonCalamity",
            Self::LossOfFace => "lossOfFace",
            Self::GeneralStar => "generalStar",
            Self::SaddleHorse => "saddleHorse",
            Self::SkyHorse => "skyHorse",
            Self::SixHarms => "sixHarms",
            Self::FloweryCanopy => "floweryCanopy",
            Self::HeavenlyNoble => "heavenlyNoble",
            Self::SheepBlade => "sheepBlade",
            Self::RedPassion => "redPassion",
            Self::LiteraryStar => "literaryStar",
            Self::GoldenCarriage => "goldenCarriage",
            Self::HiddenStipend => "hiddenStipend",
            Self::SkyVirtue => "skyVirtue",
            Self::MoonVirtue => "moonVirtue",
            Self::LonelyStar => "lonelyStar",
            Self::WidowStar => "widowStar",
            Self::MutualGrudge => "mutualGrudge",
            Self::GhostGate => "ghostGate",
            Self::Punishment => "punishment",
            Self::Void => "void",
            Self::KuiGang => "kuiGang",
            Self::WhiteTiger => "whiteTiger",
            Self::SuspendedNeedle => "suspendedNeedle",
            Self::SolitarySpouse => "solitarySpouse",
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Robbery => "겁살",
            Self::Disaster => "재살",
            Self::SkyCalamity => "천살",
            Self::EarthStar => "지살",
            Self::PeachBlossom => "도화살",
            Self::MoonCalamity => "월살",
            Self::LossOfFace => "망신살",
            Self::GeneralStar => "장성살",
            Self::SaddleHorse => "반안살",
            Self::SkyHorse => "역마살",
            Self::SixHarms => "육해살",
            Self::FloweryCanopy => "화개살",
            Self::HeavenlyNoble => "천을귀인",
            Self::SheepBlade => "양인살",
            Self::RedPassion => "홍염살",
            Self::LiteraryStar => "문창귀인",
            Self::GoldenCarriage => "금여",
            Self::HiddenStipend => "암록",
            Self::SkyVirtue => "천덕귀인",
            Self::MoonVirtue => "월덕귀인",
            Self::LonelyStar => "고신살",
            Self::WidowStar => "과숙살",
            Self::MutualGrudge => "원진살",
            Self::GhostGate => "귀문관살",
            Self::Punishment => "형살",
            Self::Void => "공망",
            Self::KuiGang => "괴강살",
            Self::WhiteTiger => "백호대살",
            Self::SuspendedNeedle => "현침살",
            Self::SolitarySpouse => "고란살",
        }
    }

    /// Hanja label.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Robbery => "劫殺",
            Self::Disaster => "災殺",
            Self::SkyCalamity => "天殺",
            Self::EarthStar => "地殺",
            Self::PeachBlossom => "桃花殺",
            Self::MoonCalamity => "月殺",
            Self::LossOfFace => "亡身殺",
            Self::GeneralStar => "將星殺",
            Self::SaddleHorse => "攀鞍殺",
            Self::SkyHorse => "驛馬殺",
            Self::SixHarms => "六害殺",
            Self::FloweryCanopy => "華蓋殺",
            Self::HeavenlyNoble => "天乙貴人",
            Self::SheepBlade => "羊刃殺",
            Self::RedPassion => "紅艶殺",
            Self::LiteraryStar => "文昌貴人",
            Self::GoldenCarriage => "金輿",
            Self::HiddenStipend => "暗祿",
            Self::SkyVirtue => "天德貴人",
            Self::MoonVirtue => "月德貴人",
            Self::LonelyStar => "孤辰殺",
            Self::WidowStar => "寡宿殺",
            Self::MutualGrudge => "怨嗔殺",
            Self::GhostGate => "鬼門關殺",
            Self::Punishment => "刑殺",
            Self::Void => "空亡",
            Self::KuiGang => "魁罡殺",
            Self::WhiteTiger => "白虎大殺",
            Self::SuspendedNeedle => "懸針殺",
            Self::SolitarySpouse => "孤鸞殺",
        }
    }

    /// Traditional polarity of the pattern.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::HeavenlyNoble
            | Self::LiteraryStar
            | Self::GoldenCarriage
            | Self::HiddenStipend
            | Self::SkyVirtue
            | Self::MoonVirtue
            | Self::GeneralStar
            | Self::SaddleHorse => Polarity::Auspicious,
            Self::EarthStar
            | Self::PeachBlossom
            | Self::SkyHorse
            | Self::FloweryCanopy
            | Self::RedPassion
            | Self::Void
            | Self::KuiGang => Polarity::Neutral,
            _ => Polarity::Inauspicious,
        }
    }

    /// One-line traditional meaning.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Robbery => "sudden loss and seizure; resources slip away",
            Self::Disaster => "confinement and conflict with authority",
            Self::SkyCalamity => "hardship from above: drought, illness, misfortune",
            Self::EarthStar => "movement over land; relocation and new ground",
            Self::PeachBlossom => "charm and attraction; romance enters the chart",
            Self::MoonCalamity => "withered growth; plans stall before bearing fruit",
            Self::LossOfFace => "exposure and disgrace; secrets come to light",
            Self::GeneralStar => "command and leadership; authority in the field",
            Self::SaddleHorse => "steady advancement; promotion by patient effort",
            Self::SkyHorse => "restless travel; change of home or work",
            Self::SixHarms => "quiet obstruction; help arrives then falls through",
            Self::FloweryCanopy => "solitary refinement; art, study, and seclusion",
            Self::HeavenlyNoble => "the strongest helper; trouble meets a rescuer",
            Self::SheepBlade => "excess of strength; the blade cuts both ways",
            Self::RedPassion => "magnetism and desire; entanglements of the heart",
            Self::LiteraryStar => "scholarship and clear writing; examinations favored",
            Self::GoldenCarriage => "comfort and quiet wealth; support of a spouse",
            Self::HiddenStipend => "unseen provision; resources arrive unannounced",
            Self::SkyVirtue => "protective virtue of heaven; harm is softened",
            Self::MoonVirtue => "protective virtue of the moon; quiet benevolence",
            Self::LonelyStar => "isolation for the early-born; distance from kin",
            Self::WidowStar => "isolation for the late-born; the empty room",
            Self::MutualGrudge => "resentment between pillars; friction without cause",
            Self::GhostGate => "obsession and restless nights; the unseen gate",
            Self::Punishment => "mutual injury between branches; legal entanglement",
            Self::Void => "emptiness over the decade; effort returns hollow",
            Self::KuiGang => "extreme firmness; great swings of fortune",
            Self::WhiteTiger => "sudden injury or blood; the tiger strikes",
            Self::SuspendedNeedle => "piercing sharpness; surgery, needles, pointed words",
            Self::SolitarySpouse => "a lonely marriage bed; the spouse stands apart",
        }
    }
}

impl std::fmt::Display for Sinsal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.korean(), self.hanja())
    }
}
