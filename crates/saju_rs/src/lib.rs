//! Convenience wrapper for the saju calculation engine.
//!
//! Holds an optional process-wide configuration and lunar calendar backend
//! and exposes one function per analysis, so callers only need
//! `use saju_rs::*`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let input = BirthInput::solar(1990, 3, 15, 14, 30, Gender::Male);
//! let birth = compute_chart(input)?;
//! let decades = generate_decades(&birth.chart, Gender::Male, 34);
//! println!("{}", birth.chart);
//! ```

pub mod convenience;
pub mod global;

pub use convenience::{
    age_on, analyze_name, compare_charts, compare_charts_with, compute_advanced_analysis,
    compute_chart, compute_chart_with, generate_decades, generate_fortune_calendar,
    generate_fortune_calendar_on, month_fortunes, today,
};
pub use global::{SharedConverter, config, init, is_initialized};

// Re-export core types so callers don't need to depend on saju_base directly.
pub use saju_base::{
    AdvancedAnalysis, AdvancedScores, AdviceCode, AnalysisConfig, BirthChart, BirthInput, Branch,
    CalendarKind, Chart, ChartWarning, CompatibilityConfig, CompatibilityResult,
    CompatibilityTier, DayFortune, DecadeCycle, DecadePeriod, Element, ElementTally, Energy,
    FortuneCalendar, FortuneLevel, Gender, LifeStage, LifeStageResult, LunarConversionError,
    LunarConverter, LunarFallback, Marker, MarkerKind, MarkerReport, MonthFortune,
    NameStrokeProfile, NoLunarConverter, NumberTier, Pillar, PillarPosition, Polarity,
    Relationship, SajuError, SolarDate, Stem, StrengthCode, TenGod, TenGodGroup, TenGodsResult,
    WeaknessCode,
};
