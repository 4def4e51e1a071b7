//! Special-combination markers (sinsal).
//!
//! Seven independent rules. Each rule derives a set of target branches from
//! one key (day stem, day branch, year branch, or day pillar) and then scans
//! all four pillar branches, recording every position that matches.

use serde::Serialize;

use crate::branch::Branch;
use crate::pillar::{Chart, PillarPosition};
use crate::stem::Stem;

/// The seven marker kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerKind {
    /// 天乙貴人, the top-grade noble helper.
    CheoneulGwiin,
    /// 文昌貴人, scholarship and learning.
    MunchangGwiin,
    /// 華蓋殺, artistry and solitude.
    Hwagae,
    /// 桃花殺, charm and popularity.
    Dohwa,
    /// 驛馬殺, travel and movement.
    Yeokma,
    /// 怨嗔殺, resentment.
    Wonjin,
    /// 空亡, void.
    Gongmang,
}

/// All 7 marker kinds in rule order.
pub const ALL_MARKER_KINDS: [MarkerKind; 7] = [
    MarkerKind::CheoneulGwiin,
    MarkerKind::MunchangGwiin,
    MarkerKind::Hwagae,
    MarkerKind::Dohwa,
    MarkerKind::Yeokma,
    MarkerKind::Wonjin,
    MarkerKind::Gongmang,
];

impl MarkerKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CheoneulGwiin => "CheoneulGwiin",
            Self::MunchangGwiin => "MunchangGwiin",
            Self::Hwagae => "Hwagae",
            Self::Dohwa => "Dohwa",
            Self::Yeokma => "Yeokma",
            Self::Wonjin => "Wonjin",
            Self::Gongmang => "Gongmang",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        !matches!(self, Self::Wonjin | Self::Gongmang)
    }

    /// Fixed one-line description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::CheoneulGwiin => "noble helper; protection and timely assistance",
            Self::MunchangGwiin => "scholarly star; learning, writing, examinations",
            Self::Hwagae => "canopy star; artistic and spiritual inclination, solitude",
            Self::Dohwa => "peach blossom; charm, popularity, attraction",
            Self::Yeokma => "post horse; travel, relocation, active change",
            Self::Wonjin => "resentment; friction and misunderstanding in relationships",
            Self::Gongmang => "void; effort in the affected pillar bears less fruit",
        }
    }
}

/// Cheoneul Gwiin targets, keyed by day stem.
pub const fn cheoneul_targets(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Branch::Chuk, Branch::Mi],
        Stem::Eul | Stem::Gi => [Branch::Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => [Branch::Hae, Branch::Yu],
        Stem::Sin => [Branch::In, Branch::O],
        Stem::Im | Stem::Gye => [Branch::Sa, Branch::Myo],
    }
}

/// Munchang Gwiin target, keyed by day stem.
pub const fn munchang_target(day_stem: Stem) -> Branch {
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

/// Hwagae target: the tomb branch of the day branch's triad.
pub const fn hwagae_target(day_branch: Branch) -> Branch {
    const TARGETS: [Branch; 4] = [Branch::Jin, Branch::Sul, Branch::Chuk, Branch::Mi];
    TARGETS[day_branch.triad() as usize]
}

/// Dohwa target, keyed by the day branch's triad.
pub const fn dohwa_target(day_branch: Branch) -> Branch {
    const TARGETS: [Branch; 4] = [Branch::Yu, Branch::Myo, Branch::O, Branch::Ja];
    TARGETS[day_branch.triad() as usize]
}

/// Yeokma target, keyed by the day branch's triad.
pub const fn yeokma_target(day_branch: Branch) -> Branch {
    const TARGETS: [Branch; 4] = [Branch::In, Branch::Sin, Branch::Hae, Branch::Sa];
    TARGETS[day_branch.triad() as usize]
}

/// Wonjin partner of the year branch (the relation is symmetric).
pub const fn wonjin_target(year_branch: Branch) -> Branch {
    match year_branch {
        Branch::Ja => Branch::Mi,
        Branch::Mi => Branch::Ja,
        Branch::Chuk => Branch::O,
        Branch::O => Branch::Chuk,
        Branch::In => Branch::Yu,
        Branch::Yu => Branch::In,
        Branch::Myo => Branch::Sin,
        Branch::Sin => Branch::Myo,
        Branch::Jin => Branch::Hae,
        Branch::Hae => Branch::Jin,
        Branch::Sa => Branch::Sul,
        Branch::Sul => Branch::Sa,
    }
}

/// Gongmang (void) branches of the day pillar.
///
/// Each run of ten days starting at a Gap stem leaves two branches unpaired;
/// those are void. The run's root is found by stepping back to the Gap stem,
/// so every stem/branch pair resolves to one of the six roots.
pub const fn gongmang_targets(day_stem: Stem, day_branch: Branch) -> [Branch; 2] {
    let root_branch = day_branch.offset(-(day_stem.index() as i64));
    [root_branch.offset(10), root_branch.offset(11)]
}

/// A detected marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    /// Every pillar whose branch matched, in chart order.
    pub positions: Vec<PillarPosition>,
    pub auspicious: bool,
    pub description: &'static str,
}

/// All markers detected in a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerReport {
    pub markers: Vec<Marker>,
    pub auspicious_count: usize,
    pub inauspicious_count: usize,
    pub has_cheoneul: bool,
    pub has_munchang: bool,
}

impl MarkerReport {
    /// Markers for every pillar of a chart.
    pub fn from_chart(chart: &Chart) -> Self {
        detect_markers(
            chart.year.stem,
            chart.year.branch,
            chart.month.branch,
            chart.day.stem,
            chart.day.branch,
            chart.hour.branch,
        )
    }

    pub fn has(&self, kind: MarkerKind) -> bool {
        self.markers.iter().any(|m| m.kind == kind)
    }

    pub fn get(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == kind)
    }
}

fn scan(branches: &[(PillarPosition, Branch); 4], targets: &[Branch]) -> Vec<PillarPosition> {
    branches
        .iter()
        .filter(|(_, b)| targets.contains(b))
        .map(|(p, _)| *p)
        .collect()
}

/// Evaluate all seven marker rules.
///
/// `year_stem` is accepted for signature completeness with the chart layout;
/// none of the seven rules is keyed by it.
pub fn detect_markers(
    _year_stem: Stem,
    year_branch: Branch,
    month_branch: Branch,
    day_stem: Stem,
    day_branch: Branch,
    hour_branch: Branch,
) -> MarkerReport {
    let branches = [
        (PillarPosition::Year, year_branch),
        (PillarPosition::Month, month_branch),
        (PillarPosition::Day, day_branch),
        (PillarPosition::Hour, hour_branch),
    ];

    let rules: [(MarkerKind, Vec<Branch>); 7] = [
        (MarkerKind::CheoneulGwiin, cheoneul_targets(day_stem).to_vec()),
        (MarkerKind::MunchangGwiin, vec![munchang_target(day_stem)]),
        (MarkerKind::Hwagae, vec![hwagae_target(day_branch)]),
        (MarkerKind::Dohwa, vec![dohwa_target(day_branch)]),
        (MarkerKind::Yeokma, vec![yeokma_target(day_branch)]),
        (MarkerKind::Wonjin, vec![wonjin_target(year_branch)]),
        (
            MarkerKind::Gongmang,
            gongmang_targets(day_stem, day_branch).to_vec(),
        ),
    ];

    let markers: Vec<Marker> = rules
        .into_iter()
        .filter_map(|(kind, targets)| {
            let positions = scan(&branches, &targets);
            (!positions.is_empty()).then(|| Marker {
                kind,
                positions,
                auspicious: kind.is_auspicious(),
                description: kind.description(),
            })
        })
        .collect();

    let auspicious_count = markers.iter().filter(|m| m.auspicious).count();
    let inauspicious_count = markers.len() - auspicious_count;
    let has_cheoneul = markers.iter().any(|m| m.kind == MarkerKind::CheoneulGwiin);
    let has_munchang = markers.iter().any(|m| m.kind == MarkerKind::MunchangGwiin);

    MarkerReport {
        markers,
        auspicious_count,
        inauspicious_count,
        has_cheoneul,
        has_munchang,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn gongmang_six_roots() {
        assert_eq!(gongmang_targets(Stem::Gap, Branch::Ja), [Branch::Sul, Branch::Hae]);
        assert_eq!(gongmang_targets(Stem::Gap, Branch::Sul), [Branch::Sin, Branch::Yu]);
        assert_eq!(gongmang_targets(Stem::Gap, Branch::Sin), [Branch::O, Branch::Mi]);
        assert_eq!(gongmang_targets(Stem::Gap, Branch::O), [Branch::Jin, Branch::Sa]);
        assert_eq!(gongmang_targets(Stem::Gap, Branch::Jin), [Branch::In, Branch::Myo]);
        assert_eq!(gongmang_targets(Stem::Gap, Branch::In), [Branch::Ja, Branch::Chuk]);
    }

    #[test]
    fn gongmang_non_root_day() {
        // Gye-Hae is the last day of the Gap-In run → void Ja, Chuk
        assert_eq!(gongmang_targets(Stem::Gye, Branch::Hae), [Branch::Ja, Branch::Chuk]);
        // Mu-O steps back 4 to Gap-In
        assert_eq!(gongmang_targets(Stem::Mu, Branch::O), [Branch::Ja, Branch::Chuk]);
    }

    #[test]
    fn gongmang_never_hits_own_run() {
        // Void branches are exactly the two branches absent from the run.
        for i in 0..60 {
            let (s, b) = crate::sexagenary::pillar_parts(i);
            let root = i - s.index() as i64;
            let run: Vec<Branch> = (0..10).map(|k| Branch::from_index(root + k)).collect();
            for v in gongmang_targets(s, b) {
                assert!(!run.contains(&v));
            }
        }
    }

    #[test]
    fn wonjin_is_symmetric() {
        for b in ALL_BRANCHES {
            assert_eq!(wonjin_target(wonjin_target(b)), b);
            assert_ne!(wonjin_target(b), b);
        }
    }

    #[test]
    fn cheoneul_targets_distinct() {
        for s in ALL_STEMS {
            let [a, b] = cheoneul_targets(s);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn triad_targets_belong_to_expected_groups() {
        for b in ALL_BRANCHES {
            // Hwagae is inside the triad; Dohwa and Yeokma are outside it.
            assert_eq!(hwagae_target(b).triad(), b.triad());
            assert_ne!(dohwa_target(b).triad(), b.triad());
            assert_ne!(yeokma_target(b).triad(), b.triad());
        }
    }

    #[test]
    fn detect_multiple_positions() {
        // Day stem Gap → Cheoneul Chuk/Mi; both year and hour carry Chuk.
        let r = detect_markers(
            Stem::Gye,
            Branch::Chuk,
            Branch::Myo,
            Stem::Gap,
            Branch::Ja,
            Branch::Chuk,
        );
        let m = r.get(MarkerKind::CheoneulGwiin).unwrap();
        assert_eq!(m.positions, vec![PillarPosition::Year, PillarPosition::Hour]);
        assert!(r.has_cheoneul);
        assert!(m.auspicious);
    }

    #[test]
    fn detect_counts_match_markers() {
        // Day Gap-Ja: Gongmang Sul/Hae; year Sul → void on year.
        // Day branch Ja: Dohwa Yu on month; Yeokma In on hour.
        let r = detect_markers(
            Stem::Mu,
            Branch::Sul,
            Branch::Yu,
            Stem::Gap,
            Branch::Ja,
            Branch::In,
        );
        assert!(r.has(MarkerKind::Gongmang));
        assert!(r.has(MarkerKind::Dohwa));
        assert!(r.has(MarkerKind::Yeokma));
        assert_eq!(r.get(MarkerKind::Gongmang).unwrap().positions, vec![PillarPosition::Year]);
        assert_eq!(
            r.auspicious_count + r.inauspicious_count,
            r.markers.len()
        );
        assert!(!r.has_munchang);
    }

    #[test]
    fn chart_may_have_no_markers() {
        // Day Gap-O (root Gap-O → void Jin/Sa), day branch O (fire triad):
        // Cheoneul Chuk/Mi, Munchang Sa, Hwagae Sul, Dohwa Myo, Yeokma Sin.
        // Year In → Wonjin Yu. Branches In, Ja, O, Ja hit none.
        let r = detect_markers(
            Stem::Im,
            Branch::In,
            Branch::Ja,
            Stem::Gap,
            Branch::O,
            Branch::Ja,
        );
        assert!(r.markers.is_empty());
        assert_eq!(r.auspicious_count, 0);
        assert_eq!(r.inauspicious_count, 0);
    }
}
