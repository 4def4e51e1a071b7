//! Pillars (stem/branch pairs) and the four-pillar chart.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::sexagenary::{
    cycle_index, day_cycle_index, hour_branch, hour_stem, julian_day_number, month_branch, month_stem,
    pillar_parts, year_cycle_index,
};
use crate::stem::Stem;

/// A stem/branch pair for one temporal unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a cycle index, wrapping modulo 60.
    pub const fn from_cycle_index(i: i64) -> Self {
        let (stem, branch) = pillar_parts(i);
        Self { stem, branch }
    }

    /// Position in the 60-step cycle; None for mixed-polarity pairs.
    pub const fn cycle_index(&self) -> Option<u8> {
        cycle_index(self.stem, self.branch)
    }

    /// Element of the pillar (taken from its stem).
    pub const fn element(&self) -> Element {
        self.stem.element()
    }

    /// Hanja rendering, e.g. "甲子".
    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Hangul rendering, e.g. "갑자".
    pub fn hangul(&self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// Which of the four pillars a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }
}

/// The four pillars of a birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Chart {
    /// Four pillars for a solar date and hour.
    ///
    /// The caller is responsible for passing a valid Gregorian date and an
    /// hour in 0..=23; `chart::compute_chart` validates before calling this.
    pub const fn from_solar(year: i32, month: u32, day: u32, hour: u32) -> Self {
        let year_pillar = Pillar::from_cycle_index(year_cycle_index(year));
        let month_pillar = Pillar::new(month_stem(year_pillar.stem, month), month_branch(month));
        let day_pillar =
            Pillar::from_cycle_index(day_cycle_index(julian_day_number(year, month, day)));
        let hb = hour_branch(hour);
        let hour_pillar = Pillar::new(hour_stem(day_pillar.stem, hb), hb);
        Self {
            year: year_pillar,
            month: month_pillar,
            day: day_pillar,
            hour: hour_pillar,
        }
    }

    /// Pillars in chart order (year, month, day, hour).
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Pillar at a position.
    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// The day stem, the reference point of every relational analysis.
    pub const fn day_stem(&self) -> Stem {
        self.day.stem
    }

    /// Element of the day pillar.
    pub const fn day_element(&self) -> Element {
        self.day.stem.element()
    }

    /// Branches with their positions, in chart order.
    pub fn branches(&self) -> [(PillarPosition, Branch); 4] {
        [
            (PillarPosition::Year, self.year.branch),
            (PillarPosition::Month, self.month.branch),
            (PillarPosition::Day, self.day.branch),
            (PillarPosition::Hour, self.hour.branch),
        ]
    }
}

impl Display for Chart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year.hanja(),
            self.month.hanja(),
            self.day.hanja(),
            self.hour.hanja()
        )
    }
}
