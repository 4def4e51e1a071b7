//! Two-chart compatibility scoring.
//!
//! The base layer compares the two charts pillar by pillar (year with year,
//! month with month, and so on) using the harmony and clash tables, then
//! compares their element tallies. The optional advanced layer looks at the
//! sub-analyses of both charts.

use tracing::debug;

use crate::compatibility_types::{
    AdvancedScores, AdviceCode, AnalysisBundle, CompatibilityResult, CompatibilityTier, Direction,
    RelationKind, RelationScope, Relationship, STRENGTH_THRESHOLD, StrengthCode,
    WEAKNESS_THRESHOLD, WeaknessCode,
};
use crate::config::CompatibilityConfig;
use crate::element::{ALL_ELEMENTS, ElementTally};
use crate::life_stage::Energy;
use crate::marker::{ALL_MARKER_KINDS, MarkerKind};
use crate::pillar::{ALL_POSITIONS, Chart};
use crate::relationship::{branches_clash, branches_harmonize, stems_clash, stems_harmonize};
use crate::ten_gods::TenGodGroup;

/// Starting value of each advanced sub-score.
const ADVANCED_BASE: i32 = 50;

fn to_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Stem sub-score: base plus a bonus per harmonizing pillar pair and minus a
/// penalty per clashing one.
pub fn stem_score(a: &Chart, b: &Chart, config: &CompatibilityConfig) -> f64 {
    let raw = ALL_POSITIONS.iter().fold(config.base_score, |acc, &pos| {
        let (x, y) = (a.pillar(pos).stem, b.pillar(pos).stem);
        if stems_harmonize(x, y) {
            acc + config.harmony_bonus
        } else if stems_clash(x, y) {
            acc - config.clash_penalty
        } else {
            acc
        }
    });
    raw.clamp(0.0, 100.0)
}

/// Branch sub-score, same structure as [`stem_score`].
pub fn branch_score(a: &Chart, b: &Chart, config: &CompatibilityConfig) -> f64 {
    let raw = ALL_POSITIONS.iter().fold(config.base_score, |acc, &pos| {
        let (x, y) = (a.pillar(pos).branch, b.pillar(pos).branch);
        if branches_harmonize(x, y) {
            acc + config.harmony_bonus
        } else if branches_clash(x, y) {
            acc - config.clash_penalty
        } else {
            acc
        }
    });
    raw.clamp(0.0, 100.0)
}

/// Element sub-score: 100 minus a penalty per unit of tally difference.
pub fn element_score(a: &ElementTally, b: &ElementTally, config: &CompatibilityConfig) -> f64 {
    (100.0 - config.element_diff_penalty * f64::from(a.abs_diff(b))).clamp(0.0, 100.0)
}

/// Every stem/branch relation per pillar pair plus cross-chart element
/// relations in both directions.
pub fn relationships(a: &Chart, b: &Chart) -> Vec<Relationship> {
    let mut out = Vec::new();

    for pos in ALL_POSITIONS {
        let (pa, pb) = (a.pillar(pos), b.pillar(pos));
        let before = out.len();
        let kinds = [
            (stems_harmonize(pa.stem, pb.stem), RelationKind::StemHarmony),
            (stems_clash(pa.stem, pb.stem), RelationKind::StemClash),
            (branches_harmonize(pa.branch, pb.branch), RelationKind::BranchHarmony),
            (branches_clash(pa.branch, pb.branch), RelationKind::BranchClash),
        ];
        out.extend(kinds.into_iter().filter(|(hit, _)| *hit).map(|(_, kind)| Relationship {
            kind,
            scope: RelationScope::Pillar(pos),
            direction: None,
        }));
        if out.len() == before {
            out.push(Relationship {
                kind: RelationKind::Neutral,
                scope: RelationScope::Pillar(pos),
                direction: None,
            });
        }
    }

    let ta = ElementTally::from_chart(a);
    let tb = ElementTally::from_chart(b);
    for (from, to, direction) in [
        (&ta, &tb, Direction::FirstToSecond),
        (&tb, &ta, Direction::SecondToFirst),
    ] {
        for e in ALL_ELEMENTS {
            if from.count(e) > 2 && to.count(e.generates()) > 2 {
                out.push(Relationship {
                    kind: RelationKind::ElementGeneration,
                    scope: RelationScope::Elements,
                    direction: Some(direction),
                });
            }
            if from.count(e) > 3 && to.count(e.controls()) >= 1 {
                out.push(Relationship {
                    kind: RelationKind::ElementControl,
                    scope: RelationScope::Elements,
                    direction: Some(direction),
                });
            }
        }
    }

    out
}

/// Ten-gods complementarity: wealth against output, authority against
/// resource, and a penalty for two companion-heavy charts.
pub fn ten_gods_score(a: &AnalysisBundle<'_>, b: &AnalysisBundle<'_>) -> u8 {
    let ga = a.analysis.ten_gods.group_counts();
    let gb = b.analysis.ten_gods.group_counts();
    let g = |counts: &[u8; 5], group: TenGodGroup| counts[group.index()];

    let pairs = |x: TenGodGroup, y: TenGodGroup| {
        (g(&ga, x) >= 2 && g(&gb, y) >= 2) || (g(&gb, x) >= 2 && g(&ga, y) >= 2)
    };

    let mut score = ADVANCED_BASE;
    if pairs(TenGodGroup::Wealth, TenGodGroup::Output) {
        score += 20;
    }
    if pairs(TenGodGroup::Authority, TenGodGroup::Resource) {
        score += 20;
    }
    if g(&ga, TenGodGroup::Companion) >= 3 && g(&gb, TenGodGroup::Companion) >= 3 {
        score -= 15;
    }
    clamp_score(score)
}

/// Marker balance: shared noble helpers add, shared inauspicious kinds subtract.
pub fn marker_score(a: &AnalysisBundle<'_>, b: &AnalysisBundle<'_>) -> u8 {
    let (ma, mb) = (&a.analysis.markers, &b.analysis.markers);
    let mut score = ADVANCED_BASE;
    if ma.has_cheoneul && mb.has_cheoneul {
        score += 20;
    }
    if ma.has_munchang && mb.has_munchang {
        score += 15;
    }
    score -= 10 * shared_inauspicious(a, b).len() as i32;
    clamp_score(score)
}

/// Day-pillar energy balance: a strong day with a weak one complements,
/// two of the same extreme compete.
pub fn energy_score(a: &AnalysisBundle<'_>, b: &AnalysisBundle<'_>) -> u8 {
    let ea = a.analysis.life_stages.day.energy();
    let eb = b.analysis.life_stages.day.energy();
    let delta = match (ea, eb) {
        (Energy::Strong, Energy::Weak) | (Energy::Weak, Energy::Strong) => 25,
        (Energy::Strong, Energy::Strong) | (Energy::Weak, Energy::Weak) => -15,
        _ => 0,
    };
    clamp_score(ADVANCED_BASE + delta)
}

/// Advanced layer over two bundles.
pub fn advanced_scores(a: &AnalysisBundle<'_>, b: &AnalysisBundle<'_>) -> AdvancedScores {
    let ten_gods = ten_gods_score(a, b);
    let markers = marker_score(a, b);
    let energy = energy_score(a, b);
    let sum = u32::from(ten_gods) + u32::from(markers) + u32::from(energy);
    AdvancedScores {
        ten_gods,
        markers,
        energy,
        combined: (f64::from(sum) / 3.0).round() as u8,
    }
}

fn flags(
    scores: &[(u8, StrengthCode, WeaknessCode)],
) -> (Vec<StrengthCode>, Vec<WeaknessCode>) {
    let strengths = scores
        .iter()
        .filter(|(s, _, _)| *s >= STRENGTH_THRESHOLD)
        .map(|&(_, code, _)| code)
        .collect();
    let weaknesses = scores
        .iter()
        .filter(|(s, _, _)| *s < WEAKNESS_THRESHOLD)
        .map(|&(_, _, code)| code)
        .collect();
    (strengths, weaknesses)
}

fn build(
    a: &Chart,
    b: &Chart,
    config: &CompatibilityConfig,
    advanced: Option<AdvancedScores>,
) -> CompatibilityResult {
    let stem = stem_score(a, b, config);
    let branch = branch_score(a, b, config);
    let element = element_score(&ElementTally::from_chart(a), &ElementTally::from_chart(b), config);

    let total = to_score(
        config.stem_weight * stem + config.branch_weight * branch + config.element_weight * element,
    );
    let tier = CompatibilityTier::from_score(total);

    let mut scored = vec![
        (to_score(stem), StrengthCode::StemHarmony, WeaknessCode::StemConflict),
        (to_score(branch), StrengthCode::BranchHarmony, WeaknessCode::BranchConflict),
        (to_score(element), StrengthCode::ElementBalance, WeaknessCode::ElementImbalance),
    ];
    if let Some(adv) = advanced {
        scored.extend([
            (adv.ten_gods, StrengthCode::TenGodsComplement, WeaknessCode::TenGodsFriction),
            (adv.markers, StrengthCode::MarkerBalance, WeaknessCode::MarkerFriction),
            (adv.energy, StrengthCode::EnergyBalance, WeaknessCode::EnergyMismatch),
        ]);
    }
    let (strengths, weaknesses) = flags(&scored);

    debug!(
        stem,
        branch,
        element,
        total,
        tier = tier.name(),
        "compatibility scored"
    );

    CompatibilityResult {
        chart1: *a,
        chart2: *b,
        stem_score: to_score(stem),
        branch_score: to_score(branch),
        element_score: to_score(element),
        total,
        tier,
        relationships: relationships(a, b),
        advanced,
        strengths,
        weaknesses,
        advice: AdviceCode::for_tier(tier),
    }
}

/// Base-layer comparison of two charts.
pub fn compare(a: &Chart, b: &Chart, config: &CompatibilityConfig) -> CompatibilityResult {
    build(a, b, config, None)
}

/// Base layer plus the advanced layer computed from both bundles.
pub fn compare_with_analysis(
    a: &AnalysisBundle<'_>,
    b: &AnalysisBundle<'_>,
    config: &CompatibilityConfig,
) -> CompatibilityResult {
    build(a.chart, b.chart, config, Some(advanced_scores(a, b)))
}

/// Inauspicious marker kinds present in both bundles.
pub fn shared_inauspicious(a: &AnalysisBundle<'_>, b: &AnalysisBundle<'_>) -> Vec<MarkerKind> {
    ALL_MARKER_KINDS
        .into_iter()
        .filter(|k| !k.is_auspicious() && a.analysis.markers.has(*k) && b.analysis.markers.has(*k))
        .collect()
}
