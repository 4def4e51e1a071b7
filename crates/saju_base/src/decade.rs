//! Decade cycle (daeun): ten 10-year periods stepped from the month pillar.
//!
//! Direction: forward for a yang year stem with a male owner or a yin year
//! stem with a female owner, backward otherwise. Period k (0-based) takes the
//! month pillar moved k+1 steps in that direction and covers ages
//! [1 + 10k, 10 + 10k], so the ten periods tile ages 1..=100.

use serde::Serialize;
use tracing::debug;

use crate::branch::Branch;
use crate::chart::Gender;
use crate::element::{ElementTally, Polarity};
use crate::life_stage::{Energy, LifeStage, life_stage};
use crate::pillar::{Chart, Pillar};
use crate::stem::Stem;
use crate::ten_gods::{TenGod, classify_branch, classify_stem};

/// Number of periods generated per chart.
pub const DECADE_COUNT: usize = 10;

/// Years covered by one period.
pub const YEARS_PER_DECADE: u32 = 10;

/// Age at which the first period starts.
pub const FIRST_DECADE_AGE: u32 = 1;

/// One 10-year period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadePeriod {
    /// 1-based position in the cycle.
    pub order: u8,
    pub start_age: u32,
    /// Inclusive.
    pub end_age: u32,
    pub stem: Stem,
    pub branch: Branch,
    /// Elements of this period's stem and branch (sums to 2).
    pub elements: ElementTally,
    /// Life stage of the period branch relative to the day stem.
    pub life_stage: LifeStage,
    pub stem_ten_god: TenGod,
    pub branch_ten_god: TenGod,
    pub energy: Energy,
}

impl DecadePeriod {
    pub const fn pillar(&self) -> Pillar {
        Pillar::new(self.stem, self.branch)
    }

    pub const fn contains_age(&self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

/// Full decade cycle plus the period active at a given age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeCycle {
    pub periods: [DecadePeriod; DECADE_COUNT],
    /// True when the cycle steps forward through stems and branches.
    pub forward: bool,
    pub current: Option<DecadePeriod>,
    pub next: Option<DecadePeriod>,
}

/// Whether the cycle runs forward for this year stem and gender.
pub const fn is_forward(year_stem: Stem, gender: Gender) -> bool {
    matches!(
        (year_stem.polarity(), gender),
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female)
    )
}

/// Generate the ten periods for a chart.
pub fn decade_periods(chart: &Chart, gender: Gender) -> ([DecadePeriod; DECADE_COUNT], bool) {
    let forward = is_forward(chart.year.stem, gender);
    let sign: i64 = if forward { 1 } else { -1 };
    let day_stem = chart.day_stem();

    let periods = std::array::from_fn(|k| {
        let steps = sign * (k as i64 + 1);
        let stem = chart.month.stem.offset(steps);
        let branch = chart.month.branch.offset(steps);
        let stage = life_stage(day_stem, branch);
        let start_age = FIRST_DECADE_AGE + YEARS_PER_DECADE * k as u32;
        DecadePeriod {
            order: k as u8 + 1,
            start_age,
            end_age: start_age + YEARS_PER_DECADE - 1,
            stem,
            branch,
            elements: ElementTally::from_elements([stem.element(), branch.element()]),
            life_stage: stage,
            stem_ten_god: classify_stem(day_stem, stem),
            branch_ten_god: classify_branch(day_stem, branch),
            energy: stage.energy(),
        }
    });
    (periods, forward)
}

/// Generate the decade cycle and locate the current and next period.
///
/// `current` is None when `current_age` falls outside 1..=100; `next` is
/// None when there is no current period or it is the last one.
pub fn generate_decades(chart: &Chart, gender: Gender, current_age: u32) -> DecadeCycle {
    let (periods, forward) = decade_periods(chart, gender);
    let current_idx = periods.iter().position(|p| p.contains_age(current_age));
    let current = current_idx.map(|i| periods[i]);
    let next = current_idx.and_then(|i| periods.get(i + 1).copied());
    debug!(
        forward,
        current_age,
        current = ?current.map(|p| p.order),
        "generated decade cycle"
    );
    DecadeCycle {
        periods,
        forward,
        current,
        next,
    }
}
