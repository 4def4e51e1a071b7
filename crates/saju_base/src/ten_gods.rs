//! Ten gods (tongbyeon / sipseong): every stem and branch of a chart
//! classified relative to the day stem.
//!
//! The category comes from the element relation of the day stem towards the
//! target; polarity decides between the two labels of each category. Stems
//! use full polarity matching. Branches ignore polarity and always take the
//! same-polarity label of their category.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{ElementRelation, Polarity};
use crate::pillar::Chart;
use crate::stem::Stem;

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    /// 比肩, peer.
    Bigyeon,
    /// 劫財, rival.
    Geopjae,
    /// 食神, expressive.
    Siksin,
    /// 傷官, eccentric.
    Sanggwan,
    /// 偏財, indirect wealth.
    Pyeonjae,
    /// 正財, direct wealth.
    Jeongjae,
    /// 偏官, indirect authority.
    Pyeongwan,
    /// 正官, direct authority.
    Jeonggwan,
    /// 偏印, indirect support.
    Pyeonin,
    /// 正印, direct support.
    Jeongin,
}

/// All 10 labels in canonical order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geopjae,
    TenGod::Siksin,
    TenGod::Sanggwan,
    TenGod::Pyeonjae,
    TenGod::Jeongjae,
    TenGod::Pyeongwan,
    TenGod::Jeonggwan,
    TenGod::Pyeonin,
    TenGod::Jeongin,
];

/// Five groups, each holding two of the ten labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGodGroup {
    /// Peer and rival.
    Companion,
    /// Expressive and eccentric.
    Output,
    /// Indirect and direct wealth.
    Wealth,
    /// Indirect and direct authority.
    Authority,
    /// Indirect and direct support.
    Resource,
}

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigyeon => "Bigyeon",
            Self::Geopjae => "Geopjae",
            Self::Siksin => "Siksin",
            Self::Sanggwan => "Sanggwan",
            Self::Pyeonjae => "Pyeonjae",
            Self::Jeongjae => "Jeongjae",
            Self::Pyeongwan => "Pyeongwan",
            Self::Jeonggwan => "Jeonggwan",
            Self::Pyeonin => "Pyeonin",
            Self::Jeongin => "Jeongin",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Bigyeon => "Peer",
            Self::Geopjae => "Rival",
            Self::Siksin => "Expressive",
            Self::Sanggwan => "Eccentric",
            Self::Pyeonjae => "Indirect Wealth",
            Self::Jeongjae => "Direct Wealth",
            Self::Pyeongwan => "Indirect Authority",
            Self::Jeonggwan => "Direct Authority",
            Self::Pyeonin => "Indirect Support",
            Self::Jeongin => "Direct Support",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Bigyeon => 0,
            Self::Geopjae => 1,
            Self::Siksin => 2,
            Self::Sanggwan => 3,
            Self::Pyeonjae => 4,
            Self::Jeongjae => 5,
            Self::Pyeongwan => 6,
            Self::Jeonggwan => 7,
            Self::Pyeonin => 8,
            Self::Jeongin => 9,
        }
    }

    pub const fn group(self) -> TenGodGroup {
        match self {
            Self::Bigyeon | Self::Geopjae => TenGodGroup::Companion,
            Self::Siksin | Self::Sanggwan => TenGodGroup::Output,
            Self::Pyeonjae | Self::Jeongjae => TenGodGroup::Wealth,
            Self::Pyeongwan | Self::Jeonggwan => TenGodGroup::Authority,
            Self::Pyeonin | Self::Jeongin => TenGodGroup::Resource,
        }
    }
}

impl TenGodGroup {
    pub const fn index(self) -> usize {
        match self {
            Self::Companion => 0,
            Self::Output => 1,
            Self::Wealth => 2,
            Self::Authority => 3,
            Self::Resource => 4,
        }
    }
}

/// Label from the day stem's relation to the target and polarity match.
const fn label(relation: ElementRelation, same_polarity: bool) -> TenGod {
    match (relation, same_polarity) {
        (ElementRelation::Same, true) => TenGod::Bigyeon,
        (ElementRelation::Same, false) => TenGod::Geopjae,
        (ElementRelation::Generates, true) => TenGod::Siksin,
        (ElementRelation::Generates, false) => TenGod::Sanggwan,
        (ElementRelation::Controls, true) => TenGod::Pyeonjae,
        (ElementRelation::Controls, false) => TenGod::Jeongjae,
        (ElementRelation::ControlledBy, true) => TenGod::Pyeongwan,
        (ElementRelation::ControlledBy, false) => TenGod::Jeonggwan,
        (ElementRelation::GeneratedBy, true) => TenGod::Pyeonin,
        (ElementRelation::GeneratedBy, false) => TenGod::Jeongin,
    }
}

/// Classify a stem relative to the day stem.
pub const fn classify_stem(day_stem: Stem, target: Stem) -> TenGod {
    let relation = day_stem.element().relation_to(target.element());
    let same = matches!(
        (day_stem.polarity(), target.polarity()),
        (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
    );
    label(relation, same)
}

/// Classify a branch relative to the day stem (polarity ignored).
pub const fn classify_branch(day_stem: Stem, target: Branch) -> TenGod {
    label(day_stem.element().relation_to(target.element()), true)
}

/// Ten-god labels for every slot of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenGodsResult {
    pub year_stem: TenGod,
    pub year_branch: TenGod,
    pub month_stem: TenGod,
    pub month_branch: TenGod,
    /// Always `Bigyeon`: the day stem measured against itself.
    pub day_stem: TenGod,
    pub day_branch: TenGod,
    pub hour_stem: TenGod,
    pub hour_branch: TenGod,
    /// Occurrences indexed by `TenGod::index()`; sums to 8.
    pub frequency: [u8; 10],
    /// Labels tied for the highest frequency, in canonical order.
    pub dominant: Vec<TenGod>,
}

impl TenGodsResult {
    /// All 8 slot labels in chart order (stem then branch per pillar).
    pub const fn labels(&self) -> [TenGod; 8] {
        [
            self.year_stem,
            self.year_branch,
            self.month_stem,
            self.month_branch,
            self.day_stem,
            self.day_branch,
            self.hour_stem,
            self.hour_branch,
        ]
    }

    pub fn count(&self, god: TenGod) -> u8 {
        self.frequency[god.index() as usize]
    }

    /// Counts folded into the five groups, indexed by `TenGodGroup::index()`.
    pub fn group_counts(&self) -> [u8; 5] {
        let mut groups = [0u8; 5];
        for god in ALL_TEN_GODS {
            groups[god.group().index()] += self.count(god);
        }
        groups
    }

    pub fn group_count(&self, group: TenGodGroup) -> u8 {
        self.group_counts()[group.index()]
    }
}

/// Classify every slot of a chart.
pub fn ten_gods(chart: &Chart) -> TenGodsResult {
    let ds = chart.day_stem();
    let year_stem = classify_stem(ds, chart.year.stem);
    let year_branch = classify_branch(ds, chart.year.branch);
    let month_stem = classify_stem(ds, chart.month.stem);
    let month_branch = classify_branch(ds, chart.month.branch);
    let day_stem = classify_stem(ds, ds);
    let day_branch = classify_branch(ds, chart.day.branch);
    let hour_stem = classify_stem(ds, chart.hour.stem);
    let hour_branch = classify_branch(ds, chart.hour.branch);

    let mut frequency = [0u8; 10];
    for god in [
        year_stem,
        year_branch,
        month_stem,
        month_branch,
        day_stem,
        day_branch,
        hour_stem,
        hour_branch,
    ] {
        frequency[god.index() as usize] += 1;
    }
    let max = frequency.iter().copied().max().unwrap_or(0);
    let dominant = ALL_TEN_GODS
        .into_iter()
        .filter(|g| frequency[g.index() as usize] == max)
        .collect();

    TenGodsResult {
        year_stem,
        year_branch,
        month_stem,
        month_branch,
        day_stem,
        day_branch,
        hour_stem,
        hour_branch,
        frequency,
        dominant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::pillar::Pillar;
    use crate::stem::ALL_STEMS;

    #[test]
    fn gap_day_stem_table() {
        let expected = [
            (Stem::Gap, TenGod::Bigyeon),
            (Stem::Eul, TenGod::Geopjae),
            (Stem::Byeong, TenGod::Siksin),
            (Stem::Jeong, TenGod::Sanggwan),
            (Stem::Mu, TenGod::Pyeonjae),
            (Stem::Gi, TenGod::Jeongjae),
            (Stem::Gyeong, TenGod::Pyeongwan),
            (Stem::Sin, TenGod::Jeonggwan),
            (Stem::Im, TenGod::Pyeonin),
            (Stem::Gye, TenGod::Jeongin),
        ];
        for (target, god) in expected {
            assert_eq!(classify_stem(Stem::Gap, target), god, "{}", target.name());
        }
    }

    #[test]
    fn english_names_pair_by_group() {
        assert_eq!(TenGod::Jeongjae.english_name(), "Direct Wealth");
        assert_eq!(TenGod::Pyeonin.english_name(), "Indirect Support");
    }

    #[test]
    fn yin_day_stem_swaps_polarity_labels() {
        assert_eq!(classify_stem(Stem::Eul, Stem::Gap), TenGod::Geopjae);
        assert_eq!(classify_stem(Stem::Eul, Stem::Gyeong), TenGod::Jeonggwan);
        assert_eq!(classify_stem(Stem::Eul, Stem::Sin), TenGod::Pyeongwan);
        assert_eq!(classify_stem(Stem::Eul, Stem::Im), TenGod::Jeongin);
    }

    #[test]
    fn all_hundred_stem_pairs_classified_once() {
        // Each day stem sees each of the ten labels exactly once.
        for ds in ALL_STEMS {
            let mut seen = [0u8; 10];
            for t in ALL_STEMS {
                seen[classify_stem(ds, t).index() as usize] += 1;
            }
            assert_eq!(seen, [1; 10], "{}", ds.name());
        }
    }

    #[test]
    fn branches_only_use_same_polarity_labels() {
        let allowed = [
            TenGod::Bigyeon,
            TenGod::Siksin,
            TenGod::Pyeonjae,
            TenGod::Pyeongwan,
            TenGod::Pyeonin,
        ];
        for ds in ALL_STEMS {
            for b in ALL_BRANCHES {
                assert!(allowed.contains(&classify_branch(ds, b)));
            }
        }
    }

    #[test]
    fn chart_result_frequency_sums_to_eight() {
        let chart = Chart {
            year: Pillar::new(Stem::Gyeong, Branch::O),
            month: Pillar::new(Stem::Jeong, Branch::Jin),
            day: Pillar::new(Stem::Gap, Branch::Ja),
            hour: Pillar::new(Stem::Gap, Branch::Ja),
        };
        let r = ten_gods(&chart);
        assert_eq!(r.day_stem, TenGod::Bigyeon);
        assert_eq!(r.frequency.iter().map(|&c| c as u32).sum::<u32>(), 8);
        assert_eq!(r.year_stem, TenGod::Pyeongwan);
        assert_eq!(r.year_branch, TenGod::Siksin);
        assert_eq!(r.month_branch, TenGod::Pyeonjae);
        assert_eq!(r.day_branch, TenGod::Pyeonin);
        assert_eq!(r.hour_stem, TenGod::Bigyeon);
        // Bigyeon (day + hour stem) and Pyeonin (day + hour branch) tie at 2
        assert_eq!(r.dominant, vec![TenGod::Bigyeon, TenGod::Pyeonin]);
        assert_eq!(r.group_count(TenGodGroup::Companion), 2);
        assert_eq!(r.group_counts().iter().map(|&c| c as u32).sum::<u32>(), 8);
    }
}
