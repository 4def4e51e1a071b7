use chrono::{Datelike, Local, NaiveDate};
use tracing::instrument;

use saju_base::compatibility_types::AnalysisBundle;
use saju_base::{
    AdvancedAnalysis, AnalysisConfig, BirthChart, BirthInput, Chart, CompatibilityConfig,
    CompatibilityResult, DecadeCycle, FortuneCalendar, Gender, LunarConverter, MonthFortune,
    NameStrokeProfile, SajuError, SolarDate,
};

use crate::global;

/// Compute a chart with the global configuration and lunar backend.
#[instrument(level = "debug", skip(input), fields(year = input.year, lunar = input.is_lunar()))]
pub fn compute_chart(input: BirthInput) -> Result<BirthChart, SajuError> {
    let config = global::config();
    saju_base::compute_chart(&input, global::converter(), config.lunar_fallback)
}

/// Compute a chart with an explicit backend and configuration.
pub fn compute_chart_with(
    input: BirthInput,
    converter: &dyn LunarConverter,
    config: &AnalysisConfig,
) -> Result<BirthChart, SajuError> {
    config.validate()?;
    saju_base::compute_chart(&input, converter, config.lunar_fallback)
}

/// Life stages, markers and ten gods of a chart.
pub fn compute_advanced_analysis(chart: &Chart) -> AdvancedAnalysis {
    AdvancedAnalysis::from_chart(chart)
}

/// Decade cycle with the period active at `current_age`.
pub fn generate_decades(chart: &Chart, gender: Gender, current_age: u32) -> DecadeCycle {
    saju_base::generate_decades(chart, gender, current_age)
}

/// Fortune calendar for today's local date.
pub fn generate_fortune_calendar(chart: &Chart) -> Result<FortuneCalendar, SajuError> {
    generate_fortune_calendar_on(chart, today())
}

/// Fortune calendar anchored at `date`.
#[instrument(level = "debug", skip(chart))]
pub fn generate_fortune_calendar_on(
    chart: &Chart,
    date: NaiveDate,
) -> Result<FortuneCalendar, SajuError> {
    saju_base::generate_calendar(chart, date)
}

/// Fortunes for the twelve months of `year`.
pub fn month_fortunes(chart: &Chart, year: i32) -> [MonthFortune; 12] {
    saju_base::month_fortunes(chart, year)
}

/// Compare two charts including the advanced layer, using the global
/// compatibility configuration.
pub fn compare_charts(a: &Chart, b: &Chart) -> CompatibilityResult {
    compare_charts_with(a, b, &global::config().compatibility)
}

/// Compare two charts including the advanced layer.
#[instrument(level = "debug", skip_all)]
pub fn compare_charts_with(
    a: &Chart,
    b: &Chart,
    config: &CompatibilityConfig,
) -> CompatibilityResult {
    let aa = AdvancedAnalysis::from_chart(a);
    let ab = AdvancedAnalysis::from_chart(b);
    saju_base::compare_with_analysis(
        &AnalysisBundle::new(a, &aa),
        &AnalysisBundle::new(b, &ab),
        config,
    )
}

/// Name-stroke numerology, optionally checked against a chart.
pub fn analyze_name(name: &str, chart: Option<&Chart>) -> Result<NameStrokeProfile, SajuError> {
    saju_base::analyze(name, chart)
}

/// Completed years between a birth date and `on`.
pub fn age_on(birth: SolarDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - birth.year;
    if (on.month(), on.day()) < (birth.month, birth.day) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
