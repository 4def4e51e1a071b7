//! Result and input types for two-chart compatibility scoring.

use serde::Serialize;

use crate::life_stage::LifeStageResult;
use crate::marker::MarkerReport;
use crate::pillar::{Chart, PillarPosition};
use crate::ten_gods::TenGodsResult;

/// Score tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CompatibilityTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Lower score bound of each tier above Poor.
pub const TIER_THRESHOLDS: [(u8, CompatibilityTier); 3] = [
    (80, CompatibilityTier::Excellent),
    (60, CompatibilityTier::Good),
    (40, CompatibilityTier::Fair),
];

/// Sub-scores at or above this produce a strength code.
pub const STRENGTH_THRESHOLD: u8 = 80;

/// Sub-scores below this produce a weakness code.
pub const WEAKNESS_THRESHOLD: u8 = 40;

impl CompatibilityTier {
    pub fn from_score(score: u8) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|&&(min, _)| score >= min)
            .map_or(Self::Poor, |&(_, tier)| tier)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Kind of a detected cross-chart relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationKind {
    StemHarmony,
    StemClash,
    BranchHarmony,
    BranchClash,
    /// An element abundant in one chart feeds one abundant in the other.
    ElementGeneration,
    /// An element dominant in one chart restrains one present in the other.
    ElementControl,
    /// No stem or branch relation on this pillar pair.
    Neutral,
}

impl RelationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StemHarmony => "StemHarmony",
            Self::StemClash => "StemClash",
            Self::BranchHarmony => "BranchHarmony",
            Self::BranchClash => "BranchClash",
            Self::ElementGeneration => "ElementGeneration",
            Self::ElementControl => "ElementControl",
            Self::Neutral => "Neutral",
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(
            self,
            Self::StemHarmony | Self::BranchHarmony | Self::ElementGeneration
        )
    }
}

/// Where a relation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationScope {
    Pillar(PillarPosition),
    Elements,
}

/// Which chart's elements act on the other's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    FirstToSecond,
    SecondToFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub kind: RelationKind,
    pub scope: RelationScope,
    /// Set for element relations only.
    pub direction: Option<Direction>,
}

/// Optional second scoring layer built from the sub-analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvancedScores {
    pub ten_gods: u8,
    pub markers: u8,
    pub energy: u8,
    /// Rounded mean of the three.
    pub combined: u8,
}

/// A sub-score that reached the strength threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthCode {
    StemHarmony,
    BranchHarmony,
    ElementBalance,
    TenGodsComplement,
    MarkerBalance,
    EnergyBalance,
}

/// A sub-score below the weakness threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeaknessCode {
    StemConflict,
    BranchConflict,
    ElementImbalance,
    TenGodsFriction,
    MarkerFriction,
    EnergyMismatch,
}

/// Advice keyed by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdviceCode {
    Nurture,
    BuildOnStrengths,
    CommunicateOpenly,
    ProceedWithCare,
}

impl AdviceCode {
    pub const fn for_tier(tier: CompatibilityTier) -> Self {
        match tier {
            CompatibilityTier::Excellent => Self::Nurture,
            CompatibilityTier::Good => Self::BuildOnStrengths,
            CompatibilityTier::Fair => Self::CommunicateOpenly,
            CompatibilityTier::Poor => Self::ProceedWithCare,
        }
    }
}

/// Full compatibility verdict for two charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub chart1: Chart,
    pub chart2: Chart,
    pub stem_score: u8,
    pub branch_score: u8,
    pub element_score: u8,
    /// Weighted aggregate of the three sub-scores.
    pub total: u8,
    pub tier: CompatibilityTier,
    pub relationships: Vec<Relationship>,
    pub advanced: Option<AdvancedScores>,
    pub strengths: Vec<StrengthCode>,
    pub weaknesses: Vec<WeaknessCode>,
    pub advice: AdviceCode,
}

/// Sub-analyses of one chart: life stages, markers, ten gods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvancedAnalysis {
    pub life_stages: LifeStageResult,
    pub markers: MarkerReport,
    pub ten_gods: TenGodsResult,
}

impl AdvancedAnalysis {
    pub fn from_chart(chart: &Chart) -> Self {
        Self {
            life_stages: LifeStageResult::from_chart(chart),
            markers: MarkerReport::from_chart(chart),
            ten_gods: crate::ten_gods::ten_gods(chart),
        }
    }
}

/// A chart together with its sub-analyses, as consumed by the advanced layer.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisBundle<'a> {
    pub chart: &'a Chart,
    pub analysis: &'a AdvancedAnalysis,
}

impl<'a> AnalysisBundle<'a> {
    pub const fn new(chart: &'a Chart, analysis: &'a AdvancedAnalysis) -> Self {
        Self { chart, analysis }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(CompatibilityTier::from_score(100), CompatibilityTier::Excellent);
        assert_eq!(CompatibilityTier::from_score(80), CompatibilityTier::Excellent);
        assert_eq!(CompatibilityTier::from_score(79), CompatibilityTier::Good);
        assert_eq!(CompatibilityTier::from_score(60), CompatibilityTier::Good);
        assert_eq!(CompatibilityTier::from_score(59), CompatibilityTier::Fair);
        assert_eq!(CompatibilityTier::from_score(40), CompatibilityTier::Fair);
        assert_eq!(CompatibilityTier::from_score(39), CompatibilityTier::Poor);
        assert_eq!(CompatibilityTier::from_score(0), CompatibilityTier::Poor);
    }

    #[test]
    fn advice_covers_every_tier() {
        assert_eq!(AdviceCode::for_tier(CompatibilityTier::Excellent), AdviceCode::Nurture);
        assert_eq!(AdviceCode::for_tier(CompatibilityTier::Poor), AdviceCode::ProceedWithCare);
    }

    #[test]
    fn relation_sign() {
        assert!(RelationKind::StemHarmony.is_positive());
        assert!(!RelationKind::BranchClash.is_positive());
        assert!(!RelationKind::Neutral.is_positive());
    }
}
