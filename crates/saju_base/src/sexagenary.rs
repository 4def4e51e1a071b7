//! Sexagenary (60-step) cycle arithmetic shared by every pillar computation.
//!
//! A cycle index i in 0..60 names the pair (stem i mod 10, branch i mod 12).
//! Only pairs of equal polarity occur, so 60 of the 120 stem/branch
//! combinations are reachable.
//!
//! Epochs:
//! - years: CE 4 = index 0 (Gap-Ja); 1984 is the most recent Gap-Ja year.
//! - days: JDN + 49 ≡ index (mod 60); 2000-01-07 (JDN 2451551) is Gap-Ja.

use crate::branch::Branch;
use crate::stem::Stem;

/// Number of pairs in the cycle.
pub const CYCLE_LEN: i64 = 60;

/// Reference year with cycle index 0 (Gap-Ja).
pub const YEAR_EPOCH: i32 = 4;

/// Offset added to a Julian Day Number to get its day cycle index.
pub const DAY_JDN_OFFSET: i64 = 49;

/// Gregorian date whose day pillar is Gap-Ja: (year, month, day).
pub const DAY_EPOCH: (i32, u32, u32) = (2000, 1, 7);

/// `NaiveDate::num_days_from_ce()` of the day epoch (2000-01-07).
pub const DAY_EPOCH_CE_DAYS: i64 = 730_126;

/// Stem and branch of a cycle index, wrapping modulo 60.
pub const fn pillar_parts(cycle_index: i64) -> (Stem, Branch) {
    let i = cycle_index.rem_euclid(CYCLE_LEN);
    (Stem::from_index(i), Branch::from_index(i))
}

/// Cycle index (0..60) of a stem/branch pair.
///
/// Returns None for mixed-polarity pairs, which never occur in the cycle.
pub const fn cycle_index(stem: Stem, branch: Branch) -> Option<u8> {
    let s = stem.index();
    let b = branch.index();
    if s % 2 != b % 2 {
        return None;
    }
    // Index i satisfies i ≡ s (mod 10), i ≡ b (mod 12); i = s + 10k for k in 0..6.
    let mut k = 0u8;
    while k < 6 {
        let i = s + 10 * k;
        if i % 12 == b {
            return Some(i);
        }
        k += 1;
    }
    None
}

/// Julian Day Number for a proleptic Gregorian calendar date.
pub const fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Cycle index of a year.
pub const fn year_cycle_index(year: i32) -> i64 {
    (year as i64 - YEAR_EPOCH as i64).rem_euclid(CYCLE_LEN)
}

/// Cycle index of a day given its Julian Day Number.
pub const fn day_cycle_index(jdn: i64) -> i64 {
    (jdn + DAY_JDN_OFFSET).rem_euclid(CYCLE_LEN)
}

/// Stem index of a month pillar: (2 × year stem + month) mod 10.
pub const fn month_stem(year_stem: Stem, month: u32) -> Stem {
    Stem::from_index(2 * year_stem.index() as i64 + month as i64)
}

/// Branch of a month pillar: month 1 maps to In (tiger).
pub const fn month_branch(month: u32) -> Branch {
    Branch::from_index(month as i64 + 1)
}

/// Branch of an hour: 23:00-00:59 is Ja, then one branch per 2 hours.
pub const fn hour_branch(hour: u32) -> Branch {
    Branch::from_index((hour as i64 + 1) / 2)
}

/// Stem of an hour pillar: (2 × day stem + hour branch) mod 10.
pub const fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    Stem::from_index(2 * day_stem.index() as i64 + hour_branch.index() as i64)
}
