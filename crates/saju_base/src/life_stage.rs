//! Twelve life stages (sibiunseong) of a branch relative to a day stem.
//!
//! Each stem is "born" (JangSaeng) at a fixed branch. Yang stems then advance
//! through the 12 stages moving forward through the branches, yin stems move
//! backward. The resulting 10 tables of 12 entries are built at compile time.

use serde::Serialize;

use crate::branch::Branch;
use crate::pillar::Chart;
use crate::stem::{ALL_STEMS, Stem};

/// The 12 life stages, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifeStage {
    /// 長生, birth.
    JangSaeng,
    /// 沐浴, bathing.
    Mokyok,
    /// 冠帶, coming of age.
    Gwandae,
    /// 建祿, taking office.
    Geonrok,
    /// 帝旺, peak.
    Jewang,
    /// 衰, decline.
    Soe,
    /// 病, sickness.
    Byeong,
    /// 死, death.
    Sa,
    /// 墓, tomb.
    Myo,
    /// 絶, severance.
    Jeol,
    /// 胎, conception.
    Tae,
    /// 養, nurture.
    Yang,
}

/// All 12 life stages in cycle order.
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::JangSaeng,
    LifeStage::Mokyok,
    LifeStage::Gwandae,
    LifeStage::Geonrok,
    LifeStage::Jewang,
    LifeStage::Soe,
    LifeStage::Byeong,
    LifeStage::Sa,
    LifeStage::Myo,
    LifeStage::Jeol,
    LifeStage::Tae,
    LifeStage::Yang,
];

/// Vitality tier of a life stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Energy {
    Strong,
    Medium,
    Weak,
}

impl LifeStage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::JangSaeng => "JangSaeng",
            Self::Mokyok => "Mokyok",
            Self::Gwandae => "Gwandae",
            Self::Geonrok => "Geonrok",
            Self::Jewang => "Jewang",
            Self::Soe => "Soe",
            Self::Byeong => "Byeong",
            Self::Sa => "Sa",
            Self::Myo => "Myo",
            Self::Jeol => "Jeol",
            Self::Tae => "Tae",
            Self::Yang => "Yang",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::JangSaeng => "長生",
            Self::Mokyok => "沐浴",
            Self::Gwandae => "冠帶",
            Self::Geonrok => "建祿",
            Self::Jewang => "帝旺",
            Self::Soe => "衰",
            Self::Byeong => "病",
            Self::Sa => "死",
            Self::Myo => "墓",
            Self::Jeol => "絶",
            Self::Tae => "胎",
            Self::Yang => "養",
        }
    }

    /// 0-based index (JangSaeng=0 .. Yang=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::JangSaeng => 0,
            Self::Mokyok => 1,
            Self::Gwandae => 2,
            Self::Geonrok => 3,
            Self::Jewang => 4,
            Self::Soe => 5,
            Self::Byeong => 6,
            Self::Sa => 7,
            Self::Myo => 8,
            Self::Jeol => 9,
            Self::Tae => 10,
            Self::Yang => 11,
        }
    }

    /// Strong: JangSaeng, Gwandae, Geonrok, Jewang.
    /// Weak: Byeong, Sa, Myo, Jeol. Everything else is Medium.
    pub const fn energy(self) -> Energy {
        match self {
            Self::JangSaeng | Self::Gwandae | Self::Geonrok | Self::Jewang => Energy::Strong,
            Self::Byeong | Self::Sa | Self::Myo | Self::Jeol => Energy::Weak,
            Self::Mokyok | Self::Soe | Self::Tae | Self::Yang => Energy::Medium,
        }
    }
}

/// Branch at which a stem's cycle begins (JangSaeng).
pub const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::Hae,
        Stem::Byeong | Stem::Mu => Branch::In,
        Stem::Gyeong => Branch::Sa,
        Stem::Im => Branch::Sin,
        Stem::Eul => Branch::O,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Sin => Branch::Ja,
        Stem::Gye => Branch::Myo,
    }
}

const fn build_table(stem: Stem) -> [LifeStage; 12] {
    let start = birth_branch(stem).index() as usize;
    let forward = stem.index() % 2 == 0;
    let mut table = [LifeStage::JangSaeng; 12];
    let mut b = 0;
    while b < 12 {
        let step = if forward {
            (b + 12 - start) % 12
        } else {
            (start + 12 - b) % 12
        };
        table[b] = ALL_LIFE_STAGES[step];
        b += 1;
    }
    table
}

const fn build_all_tables() -> [[LifeStage; 12]; 10] {
    let mut tables = [[LifeStage::JangSaeng; 12]; 10];
    let mut s = 0;
    while s < 10 {
        tables[s] = build_table(ALL_STEMS[s]);
        s += 1;
    }
    tables
}

/// Life stage table per stem, indexed `[stem][branch]`.
pub const LIFE_STAGE_TABLE: [[LifeStage; 12]; 10] = build_all_tables();

/// Life stage of `branch` relative to `day_stem`.
pub const fn life_stage(day_stem: Stem, branch: Branch) -> LifeStage {
    LIFE_STAGE_TABLE[day_stem.index() as usize][branch.index() as usize]
}

/// Life stage of each pillar's branch relative to the day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeStageResult {
    pub year: LifeStage,
    pub month: LifeStage,
    pub day: LifeStage,
    pub hour: LifeStage,
}

impl LifeStageResult {
    /// Stages in chart order.
    pub const fn stages(&self) -> [LifeStage; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Number of pillars in each energy tier: (strong, medium, weak).
    pub fn energy_counts(&self) -> (u8, u8, u8) {
        self.stages()
            .iter()
            .fold((0, 0, 0), |(s, m, w), st| match st.energy() {
                Energy::Strong => (s + 1, m, w),
                Energy::Medium => (s, m + 1, w),
                Energy::Weak => (s, m, w + 1),
            })
    }

    /// Stages for every pillar of a chart.
    pub fn from_chart(chart: &Chart) -> Self {
        life_stages(
            chart.day_stem(),
            chart.year.branch,
            chart.month.branch,
            chart.day.branch,
            chart.hour.branch,
        )
    }
}

/// Map each pillar branch to its life stage relative to the day stem.
pub fn life_stages(
    day_stem: Stem,
    year_branch: Branch,
    month_branch: Branch,
    day_branch: Branch,
    hour_branch: Branch,
) -> LifeStageResult {
    LifeStageResult {
        year: life_stage(day_stem, year_branch),
        month: life_stage(day_stem, month_branch),
        day: life_stage(day_stem, day_branch),
        hour: life_stage(day_stem, hour_branch),
    }
}
