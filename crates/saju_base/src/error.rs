//! Error types for saju calculations.

use thiserror::Error;

/// Errors from chart construction, name analysis, or configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// The (year, month, day) triple is not a valid calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23 or minute outside 0..=59.
    #[error("invalid time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Name is empty, too short, or contains unsupported characters.
    #[error("invalid name: {0}")]
    InvalidName(String),
    /// Lunar to solar conversion failed and the fallback policy rejects it.
    #[error("lunar conversion failed: {0}")]
    LunarConversion(String),
    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_date_is_zero_padded() {
        let e = SajuError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(e.to_string(), "invalid date: 2024-02-30");
    }

    #[test]
    fn display_invalid_time() {
        let e = SajuError::InvalidTime { hour: 24, minute: 5 };
        assert_eq!(e.to_string(), "invalid time: 24:05");
    }
}
