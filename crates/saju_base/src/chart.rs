//! Birth input validation and four-pillar chart construction.
//!
//! Lunar birth dates are converted through a pluggable [`LunarConverter`].
//! When conversion fails, [`LunarFallback`] decides between rejecting the
//! input and reusing the lunar numbers as a solar date; the latter is always
//! reported through [`ChartWarning::LunarConversionFallback`].

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LunarFallback;
use crate::error::SajuError;
use crate::pillar::Chart;

/// Gender of the chart owner (decides decade-cycle direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Calendar the birth date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    Solar,
    /// Lunar date; `leap_month` marks an intercalary month.
    Lunar { leap_month: bool },
}

/// Birth date and time as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub calendar: CalendarKind,
    pub gender: Gender,
}

impl BirthInput {
    /// Solar birth input.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, minute: u32, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarKind::Solar,
            gender,
        }
    }

    /// Lunar birth input.
    pub fn lunar(
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
        hour: u32,
        minute: u32,
        gender: Gender,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarKind::Lunar { leap_month },
            gender,
        }
    }

    pub const fn is_lunar(&self) -> bool {
        matches!(self.calendar, CalendarKind::Lunar { .. })
    }
}

/// A Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Validate against the Gregorian calendar.
    pub fn to_naive(self) -> Result<NaiveDate, SajuError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(SajuError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Failure reported by a lunar calendar backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LunarConversionError(pub String);

/// Lunar to solar date conversion backend.
pub trait LunarConverter {
    /// Convert a lunar (year, month, day, leap) date to its solar date.
    fn convert(
        &self,
        lunar_year: i32,
        lunar_month: u32,
        lunar_day: u32,
        is_leap_month: bool,
    ) -> Result<SolarDate, LunarConversionError>;
}

/// Converter used when no lunar calendar backend is available.
///
/// Every conversion fails, so lunar inputs go through the fallback policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLunarConverter;

impl LunarConverter for NoLunarConverter {
    fn convert(&self, _: i32, _: u32, _: u32, _: bool) -> Result<SolarDate, LunarConversionError> {
        Err(LunarConversionError(
            "no lunar calendar backend configured".to_string(),
        ))
    }
}

/// Recoverable issue encountered while building a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ChartWarning {
    /// Lunar conversion failed and the lunar numbers were used as solar.
    LunarConversionFallback { reason: String },
}

/// A computed chart together with the input it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthChart {
    pub chart: Chart,
    pub input: BirthInput,
    /// The Gregorian date the pillars were computed from.
    pub solar_date: SolarDate,
    pub warnings: Vec<ChartWarning>,
}

fn validate_time(hour: u32, minute: u32) -> Result<(), SajuError> {
    if hour > 23 || minute > 59 {
        return Err(SajuError::InvalidTime { hour, minute });
    }
    Ok(())
}

fn validate_lunar(year: i32, month: u32, day: u32) -> Result<(), SajuError> {
    if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
        return Err(SajuError::InvalidDate { year, month, day });
    }
    Ok(())
}

/// Resolve the solar date for an input, applying the lunar fallback policy.
fn resolve_solar_date(
    input: &BirthInput,
    converter: &dyn LunarConverter,
    fallback: LunarFallback,
    warnings: &mut Vec<ChartWarning>,
) -> Result<SolarDate, SajuError> {
    let CalendarKind::Lunar { leap_month } = input.calendar else {
        return Ok(SolarDate::new(input.year, input.month, input.day));
    };
    validate_lunar(input.year, input.month, input.day)?;
    match converter.convert(input.year, input.month, input.day, leap_month) {
        Ok(solar) => Ok(solar),
        Err(e) => match fallback {
            LunarFallback::Reject => Err(SajuError::LunarConversion(e.0)),
            LunarFallback::TreatAsSolar => {
                warn!(
                    year = input.year,
                    month = input.month,
                    day = input.day,
                    reason = %e,
                    "lunar conversion failed, treating lunar date as solar"
                );
                warnings.push(ChartWarning::LunarConversionFallback { reason: e.0 });
                Ok(SolarDate::new(input.year, input.month, input.day))
            }
        },
    }
}

/// Compute the four pillars for a birth input.
pub fn compute_chart(
    input: &BirthInput,
    converter: &dyn LunarConverter,
    fallback: LunarFallback,
) -> Result<BirthChart, SajuError> {
    validate_time(input.hour, input.minute)?;
    let mut warnings = Vec::new();
    let solar_date = resolve_solar_date(input, converter, fallback, &mut warnings)?;
    solar_date.to_naive()?;

    let chart = Chart::from_solar(solar_date.year, solar_date.month, solar_date.day, input.hour);
    debug!(%solar_date, hour = input.hour, %chart, "computed chart");

    Ok(BirthChart {
        chart,
        input: *input,
        solar_date,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::pillar::Pillar;
    use crate::stem::Stem;

    struct FixedConverter(SolarDate);

    impl LunarConverter for FixedConverter {
        fn convert(&self, _: i32, _: u32, _: u32, _: bool) -> Result<SolarDate, LunarConversionError> {
            Ok(self.0)
        }
    }

    #[test]
    fn solar_chart_is_deterministic() {
        let input = BirthInput::solar(1990, 3, 15, 14, 30, Gender::Male);
        let a = compute_chart(&input, &NoLunarConverter, LunarFallback::Reject).unwrap();
        let b = compute_chart(&input, &NoLunarConverter, LunarFallback::Reject).unwrap();
        assert_eq!(a, b);
        assert!(a.warnings.is_empty());
        assert_eq!(a.solar_date, SolarDate::new(1990, 3, 15));
        assert_eq!(a.chart.year, Pillar::new(Stem::Gyeong, Branch::O));
    }

    #[test]
    fn invalid_solar_date_rejected() {
        let input = BirthInput::solar(2023, 2, 29, 10, 0, Gender::Female);
        let err = compute_chart(&input, &NoLunarConverter, LunarFallback::Reject).unwrap_err();
        assert_eq!(
            err,
            SajuError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn month_13_rejected() {
        let input = BirthInput::solar(2023, 13, 1, 10, 0, Gender::Female);
        assert!(compute_chart(&input, &NoLunarConverter, LunarFallback::Reject).is_err());
    }

    #[test]
    fn invalid_time_rejected() {
        let input = BirthInput::solar(2023, 1, 1, 24, 0, Gender::Male);
        let err = compute_chart(&input, &NoLunarConverter, LunarFallback::Reject).unwrap_err();
        assert_eq!(err, SajuError::InvalidTime { hour: 24, minute: 0 });
        let input = BirthInput::solar(2023, 1, 1, 5, 60, Gender::Male);
        assert!(compute_chart(&input, &NoLunarConverter, LunarFallback::Reject).is_err());
    }

    #[test]
    fn lunar_uses_converter() {
        let input = BirthInput::lunar(1990, 2, 19, false, 14, 30, Gender::Male);
        let conv = FixedConverter(SolarDate::new(1990, 3, 15));
        let bc = compute_chart(&input, &conv, LunarFallback::Reject).unwrap();
        let solar = BirthInput::solar(1990, 3, 15, 14, 30, Gender::Male);
        let expected = compute_chart(&solar, &conv, LunarFallback::Reject).unwrap();
        assert_eq!(bc.chart, expected.chart);
        assert_eq!(bc.input, input);
        assert!(bc.warnings.is_empty());
    }

    #[test]
    fn lunar_failure_rejected_when_configured() {
        let input = BirthInput::lunar(1990, 2, 19, false, 14, 30, Gender::Male);
        let err = compute_chart(&input, &NoLunarConverter, LunarFallback::Reject).unwrap_err();
        assert!(matches!(err, SajuError::LunarConversion(_)));
    }

    #[test]
    fn lunar_failure_falls_back_with_warning() {
        let input = BirthInput::lunar(1990, 2, 19, false, 14, 30, Gender::Male);
        let bc = compute_chart(&input, &NoLunarConverter, LunarFallback::TreatAsSolar).unwrap();
        assert_eq!(bc.solar_date, SolarDate::new(1990, 2, 19));
        assert_eq!(bc.warnings.len(), 1);
        assert!(matches!(
            bc.warnings[0],
            ChartWarning::LunarConversionFallback { .. }
        ));
    }

    #[test]
    fn lunar_fallback_to_impossible_solar_date_fails() {
        // Lunar 2/30 exists, but February 30 does not.
        let input = BirthInput::lunar(1990, 2, 30, false, 14, 30, Gender::Male);
        let err = compute_chart(&input, &NoLunarConverter, LunarFallback::TreatAsSolar).unwrap_err();
        assert!(matches!(err, SajuError::InvalidDate { .. }));
    }

    #[test]
    fn backend_error_message_reaches_saju_error() {
        let err = LunarConversionError("table ends at 2050".to_string());
        assert_eq!(err.to_string(), "table ends at 2050");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert_eq!(boxed.to_string(), "table ends at 2050");

        let input = BirthInput::lunar(1990, 2, 19, false, 14, 30, Gender::Male);
        let err = compute_chart(&input, &NoLunarConverter, LunarFallback::Reject).unwrap_err();
        assert_eq!(
            err.to_string(),
            "lunar conversion failed: no lunar calendar backend configured"
        );
    }

    #[test]
    fn lunar_day_31_rejected_before_conversion() {
        let input = BirthInput::lunar(1990, 1, 31, false, 0, 0, Gender::Female);
        let conv = FixedConverter(SolarDate::new(1990, 3, 1));
        assert!(matches!(
            compute_chart(&input, &conv, LunarFallback::TreatAsSolar),
            Err(SajuError::InvalidDate { .. })
        ));
    }
}
