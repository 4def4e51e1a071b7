//! Tunable parameters for chart construction and compatibility scoring.
//!
//! Every field has a default matching the traditional scoring convention, so
//! `AnalysisConfig::default()` is what callers normally want. Configs are
//! deserializable (missing fields fall back to defaults) and must pass
//! [`AnalysisConfig::validate`] before use.

use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// What to do when lunar to solar conversion fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarFallback {
    /// Fail the chart computation.
    Reject,
    /// Reuse the lunar numbers as a solar date and attach a warning.
    #[default]
    TreatAsSolar,
}

/// Scoring weights and deltas for chart comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityConfig {
    /// Starting score for stem and branch harmony.
    pub base_score: f64,
    /// Added per harmonizing pillar pair.
    pub harmony_bonus: f64,
    /// Subtracted per clashing pillar pair.
    pub clash_penalty: f64,
    /// Subtracted per unit of element-count difference.
    pub element_diff_penalty: f64,
    /// Aggregate weight of the stem sub-score.
    pub stem_weight: f64,
    /// Aggregate weight of the branch sub-score.
    pub branch_weight: f64,
    /// Aggregate weight of the element sub-score.
    pub element_weight: f64,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        Self {
            base_score: 50.0,
            harmony_bonus: 15.0,
            clash_penalty: 10.0,
            element_diff_penalty: 2.5,
            stem_weight: 0.3,
            branch_weight: 0.4,
            element_weight: 0.3,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub lunar_fallback: LunarFallback,
    pub compatibility: CompatibilityConfig,
}

impl AnalysisConfig {
    /// Check that weights are non-negative and sum to 1, and that deltas are
    /// non-negative. Keeps every aggregate score inside [0, 100].
    pub fn validate(&self) -> Result<(), SajuError> {
        let c = &self.compatibility;
        let weights = [c.stem_weight, c.branch_weight, c.element_weight];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SajuError::Config(
                "compatibility weights must be finite and non-negative".into(),
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(SajuError::Config(format!(
                "compatibility weights must sum to 1, got {sum}"
            )));
        }
        let deltas = [
            c.base_score,
            c.harmony_bonus,
            c.clash_penalty,
            c.element_diff_penalty,
        ];
        if deltas.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(SajuError::Config(
                "compatibility deltas must be finite and non-negative".into(),
            ));
        }
        if c.base_score > 100.0 {
            return Err(SajuError::Config("base score must not exceed 100".into()));
        }
        Ok(())
    }
}
