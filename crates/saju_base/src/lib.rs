//! Pure four-pillar (saju) arithmetic and table lookups.
//!
//! This crate provides:
//! - Stem, branch and element alphabets with the sexagenary cycle
//! - Four-pillar charts from solar or lunar birth data
//! - Life stages, special markers and ten-gods typing
//! - Decade cycles and day/month fortunes
//! - Two-chart compatibility scoring
//! - Name-stroke numerology
//!
//! Every function is deterministic and side-effect free apart from
//! `tracing` events.

pub mod branch;
pub mod chart;
pub mod compatibility;
pub mod compatibility_types;
pub mod config;
pub mod decade;
pub mod element;
pub mod error;
pub mod fortune;
pub mod hangul;
pub mod life_stage;
pub mod marker;
pub mod name;
pub mod pillar;
pub mod relationship;
pub mod sexagenary;
pub mod stem;
pub mod ten_gods;

pub use branch::{ALL_BRANCHES, Branch};
pub use chart::{
    BirthChart, BirthInput, CalendarKind, ChartWarning, Gender, LunarConversionError,
    LunarConverter, NoLunarConverter, SolarDate, compute_chart,
};
pub use compatibility::{compare, compare_with_analysis};
pub use compatibility_types::{
    AdvancedAnalysis, AdvancedScores, AdviceCode, AnalysisBundle, CompatibilityResult,
    CompatibilityTier, RelationKind, RelationScope, Relationship, StrengthCode, WeaknessCode,
};
pub use config::{AnalysisConfig, CompatibilityConfig, LunarFallback};
pub use decade::{DecadeCycle, DecadePeriod, generate_decades};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, ElementTally, Polarity};
pub use error::SajuError;
pub use fortune::{
    DayFortune, FortuneCalendar, FortuneLevel, MonthFortune, classify_compatibility, day_pillar,
    generate_calendar, month_fortunes, month_pillar,
};
pub use life_stage::{Energy, LifeStage, LifeStageResult, life_stage, life_stages};
pub use marker::{Marker, MarkerKind, MarkerReport, detect_markers};
pub use name::{NameStrokeProfile, NumberTier, analyze};
pub use pillar::{ALL_POSITIONS, Chart, Pillar, PillarPosition};
pub use sexagenary::{cycle_index, julian_day_number};
pub use stem::{ALL_STEMS, Stem};
pub use ten_gods::{TenGod, TenGodGroup, TenGodsResult, classify_branch, classify_stem, ten_gods};
