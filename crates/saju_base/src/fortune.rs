//! Day and month fortunes scored against a personal chart.
//!
//! Day pillars count days from the Gap-Ja epoch (2000-01-07); month pillars
//! use the same month arithmetic as the birth chart. Each pillar is scored by
//! a small point system against the chart's day and year pillars.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::element::ElementRelation;
use crate::error::SajuError;
use crate::pillar::{Chart, Pillar};
use crate::relationship::{branches_clash, branches_harmonize, stems_clash, stems_harmonize};
use crate::sexagenary::{DAY_EPOCH_CE_DAYS, month_branch, month_stem, year_cycle_index};

/// Five-level fortune ordinal, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FortuneLevel {
    Excellent,
    Good,
    Normal,
    Caution,
    Warning,
}

impl FortuneLevel {
    /// Level for a point total.
    pub const fn from_points(points: i32) -> Self {
        if points >= 3 {
            Self::Excellent
        } else if points >= 1 {
            Self::Good
        } else if points == 0 {
            Self::Normal
        } else if points >= -2 {
            Self::Caution
        } else {
            Self::Warning
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Normal => "Normal",
            Self::Caution => "Caution",
            Self::Warning => "Warning",
        }
    }
}

/// Score of a pillar against a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FortuneVerdict {
    pub level: FortuneLevel,
    /// Raw point total.
    pub points: i32,
    /// 50 + 10 × points, clamped to [0, 100].
    pub score: u8,
}

/// Fortune of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayFortune {
    pub date: NaiveDate,
    pub pillar: Pillar,
    pub level: FortuneLevel,
    pub score: u8,
}

/// Fortune of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthFortune {
    pub year: i32,
    pub month: u32,
    pub pillar: Pillar,
    pub level: FortuneLevel,
    pub score: u8,
}

/// Current month, today, tomorrow, and the seven days starting today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneCalendar {
    pub current_month: MonthFortune,
    pub today: DayFortune,
    pub tomorrow: DayFortune,
    pub this_week: [DayFortune; 7],
}

/// Day pillar of a calendar date.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let days = date.num_days_from_ce() as i64 - DAY_EPOCH_CE_DAYS;
    Pillar::from_cycle_index(days)
}

/// Month pillar of a calendar month (month in 1..=12).
pub const fn month_pillar(year: i32, month: u32) -> Pillar {
    let year_stem = Pillar::from_cycle_index(year_cycle_index(year)).stem;
    Pillar::new(month_stem(year_stem, month), month_branch(month))
}

/// Score a pillar against the chart's day and year pillars.
///
/// Points: ±2 for stem harmony/clash with the day stem, ±2 for branch
/// harmony/clash with the day branch, ±1 for branch harmony/clash with the
/// year branch, +1 when the pillar element generates or matches the day
/// element and −1 when it controls it.
pub fn classify_compatibility(pillar: Pillar, chart: &Chart) -> FortuneVerdict {
    let mut points = 0i32;

    if stems_harmonize(pillar.stem, chart.day.stem) {
        points += 2;
    } else if stems_clash(pillar.stem, chart.day.stem) {
        points -= 2;
    }

    if branches_harmonize(pillar.branch, chart.day.branch) {
        points += 2;
    } else if branches_clash(pillar.branch, chart.day.branch) {
        points -= 2;
    }

    if branches_harmonize(pillar.branch, chart.year.branch) {
        points += 1;
    } else if branches_clash(pillar.branch, chart.year.branch) {
        points -= 1;
    }

    match pillar.element().relation_to(chart.day_element()) {
        ElementRelation::Generates | ElementRelation::Same => points += 1,
        ElementRelation::Controls => points -= 1,
        ElementRelation::ControlledBy | ElementRelation::GeneratedBy => {}
    }

    FortuneVerdict {
        level: FortuneLevel::from_points(points),
        points,
        score: (50 + 10 * points).clamp(0, 100) as u8,
    }
}

/// Fortune of one day.
pub fn day_fortune(chart: &Chart, date: NaiveDate) -> DayFortune {
    let pillar = day_pillar(date);
    let v = classify_compatibility(pillar, chart);
    DayFortune {
        date,
        pillar,
        level: v.level,
        score: v.score,
    }
}

/// Fortune of one month.
pub fn month_fortune(chart: &Chart, year: i32, month: u32) -> MonthFortune {
    let pillar = month_pillar(year, month);
    let v = classify_compatibility(pillar, chart);
    MonthFortune {
        year,
        month,
        pillar,
        level: v.level,
        score: v.score,
    }
}

/// Fortunes for all twelve months of a year.
pub fn month_fortunes(chart: &Chart, year: i32) -> [MonthFortune; 12] {
    std::array::from_fn(|i| month_fortune(chart, year, i as u32 + 1))
}

/// Calendar view anchored at `today`.
///
/// Fails only when the week would run past the last representable date.
pub fn generate_calendar(chart: &Chart, today: NaiveDate) -> Result<FortuneCalendar, SajuError> {
    if today.checked_add_days(Days::new(6)).is_none() {
        return Err(SajuError::InvalidDate {
            year: today.year(),
            month: today.month(),
            day: today.day(),
        });
    }
    let this_week = std::array::from_fn(|k| day_fortune(chart, today + Days::new(k as u64)));
    Ok(FortuneCalendar {
        current_month: month_fortune(chart, today.year(), today.month()),
        today: this_week[0],
        tomorrow: this_week[1],
        this_week,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::sexagenary::{day_cycle_index, julian_day_number};
    use crate::stem::Stem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_constant_matches_chrono() {
        assert_eq!(date(2000, 1, 7).num_days_from_ce() as i64, DAY_EPOCH_CE_DAYS);
        assert_eq!(day_pillar(date(2000, 1, 7)), Pillar::new(Stem::Gap, Branch::Ja));
    }

    #[test]
    fn day_pillar_agrees_with_jdn_path() {
        let mut d = date(1899, 12, 25);
        for _ in 0..400 {
            let jdn = julian_day_number(d.year(), d.month(), d.day());
            assert_eq!(day_pillar(d), Pillar::from_cycle_index(day_cycle_index(jdn)), "{d}");
            d = d + Days::new(97);
        }
    }

    #[test]
    fn month_pillar_matches_chart() {
        for m in 1..=12 {
            let chart = Chart::from_solar(2024, m, 15, 12);
            assert_eq!(month_pillar(2024, m), chart.month);
        }
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(FortuneLevel::from_points(5), FortuneLevel::Excellent);
        assert_eq!(FortuneLevel::from_points(3), FortuneLevel::Excellent);
        assert_eq!(FortuneLevel::from_points(2), FortuneLevel::Good);
        assert_eq!(FortuneLevel::from_points(1), FortuneLevel::Good);
        assert_eq!(FortuneLevel::from_points(0), FortuneLevel::Normal);
        assert_eq!(FortuneLevel::from_points(-2), FortuneLevel::Caution);
        assert_eq!(FortuneLevel::from_points(-3), FortuneLevel::Warning);
        assert!(FortuneLevel::Excellent < FortuneLevel::Warning);
    }

    #[test]
    fn harmonious_pillar_scores_high() {
        let chart = Chart {
            year: Pillar::new(Stem::Gyeong, Branch::O),
            month: Pillar::new(Stem::Jeong, Branch::Jin),
            day: Pillar::new(Stem::Gap, Branch::Ja),
            hour: Pillar::new(Stem::Gap, Branch::Ja),
        };
        // Gi/Gap stem harmony (+2), Chuk/Ja branch harmony (+2).
        // Chuk/O is neutral; earth is controlled by wood, which scores nothing.
        let v = classify_compatibility(Pillar::new(Stem::Gi, Branch::Chuk), &chart);
        assert_eq!(v.points, 4);
        assert_eq!(v.level, FortuneLevel::Excellent);
        assert_eq!(v.score, 90);
    }

    #[test]
    fn clashing_pillar_scores_low() {
        let chart = Chart {
            year: Pillar::new(Stem::Gyeong, Branch::Ja),
            month: Pillar::new(Stem::Jeong, Branch::Jin),
            day: Pillar::new(Stem::Gap, Branch::Ja),
            hour: Pillar::new(Stem::Gap, Branch::Ja),
        };
        // Gyeong clashes Gap (−2), O clashes Ja twice (−2, −1), metal controls wood (−1)
        let v = classify_compatibility(Pillar::new(Stem::Gyeong, Branch::O), &chart);
        assert_eq!(v.points, -6);
        assert_eq!(v.level, FortuneLevel::Warning);
        assert_eq!(v.score, 0);
    }

    #[test]
    fn calendar_layout() {
        let chart = Chart::from_solar(1990, 3, 15, 14);
        let today = date(2024, 12, 28);
        let cal = generate_calendar(&chart, today).unwrap();
        assert_eq!(cal.today.date, today);
        assert_eq!(cal.tomorrow.date, date(2024, 12, 29));
        assert_eq!(cal.this_week[6].date, date(2025, 1, 3));
        assert_eq!(cal.current_month.month, 12);
        assert_eq!(cal.current_month.year, 2024);
        for w in cal.this_week.windows(2) {
            assert_eq!(
                w[1].pillar,
                Pillar::new(w[0].pillar.stem.offset(1), w[0].pillar.branch.offset(1))
            );
        }
    }

    #[test]
    fn calendar_at_end_of_time_fails() {
        let chart = Chart::from_solar(1990, 3, 15, 14);
        assert!(generate_calendar(&chart, NaiveDate::MAX).is_err());
    }

    #[test]
    fn calendar_week_may_end_on_last_date() {
        let chart = Chart::from_solar(1990, 3, 15, 14);
        let start = NaiveDate::MAX.checked_sub_days(Days::new(6)).unwrap();
        let cal = generate_calendar(&chart, start).unwrap();
        assert_eq!(cal.this_week[6].date, NaiveDate::MAX);

        let late = NaiveDate::MAX.checked_sub_days(Days::new(5)).unwrap();
        assert!(generate_calendar(&chart, late).is_err());
    }

    #[test]
    fn twelve_month_overview() {
        let chart = Chart::from_solar(1990, 3, 15, 14);
        let months = month_fortunes(&chart, 2025);
        for (i, m) in months.iter().enumerate() {
            assert_eq!(m.month as usize, i + 1);
            assert_eq!(m.pillar, month_pillar(2025, m.month));
        }
    }
}
