use serde::Serialize;

use crate::error::{DateError, Result};

/// Half-open `min..max` domain of a format kind, plus the bounds the self-test
/// walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidityRange {
    pub min: i64,
    pub max: i64,
    pub test_start: i64,
    pub test_stop: i64,
    pub test_step: i64,
}

impl ValidityRange {
    pub const fn new(min: i64, max: i64, test_start: i64, test_stop: i64) -> Self {
        Self {
            min,
            max,
            test_start,
            test_stop,
            test_step: 1,
        }
    }

    pub const fn stepped(self, test_step: i64) -> Self {
        Self { test_step, ..self }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value < self.max
    }

    pub fn check(&self, value: i64) -> Result<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(DateError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Values covered by the self-test that also satisfy the predicate.
    pub fn test_values(&self) -> impl Iterator<Item = i64> + '_ {
        let step = usize::try_from(self.test_step.max(1)).unwrap_or(1);
        (self.test_start..self.test_stop)
            .step_by(step)
            .filter(|value| self.contains(*value))
    }
}

pub const MONTH_OF_YEAR: ValidityRange = ValidityRange::new(1, 13, 1, 13);
pub const NUMBER: ValidityRange = ValidityRange::new(0, 1_000_000, 0, 1001);
pub const YEAR_AD: ValidityRange = ValidityRange::new(0, 2501, 0, 2501);
/// Chinese titles go back to 前1700年, hence the wider domain.
pub const YEAR_BC: ValidityRange = ValidityRange::new(0, 4001, 0, 501);
pub const DECADE_AD: ValidityRange = ValidityRange::new(0, 2501, 0, 2501).stepped(10);
pub const DECADE_BC: ValidityRange = ValidityRange::new(0, 4001, 0, 501).stepped(10);
// Some centuries use roman numerals, which stop at XXX; tests stay well below.
pub const CENTURY_AD: ValidityRange = ValidityRange::new(1, 41, 1, 23);
pub const CENTURY_BC: ValidityRange = ValidityRange::new(1, 91, 1, 23);
pub const CENTURY_BC_CAT: ValidityRange = ValidityRange::new(1, 41, 1, 23);
pub const MILLENNIUM_AD: ValidityRange = ValidityRange::new(1, 6, 1, 4);
pub const MILLENNIUM_BC: ValidityRange = ValidityRange::new(1, 20, 1, 2);
pub const MUSIC_ALBUMS: ValidityRange = ValidityRange::new(1950, 2021, 1950, 2021);
pub const CURRENT_EVENTS: ValidityRange = ValidityRange::new(0, 1, 0, 1);
pub const YEAR_OF_MONTH: ValidityRange = ValidityRange::new(1, 4001, 1900, 2101);

pub const fn day_of_month(max_days: u32) -> ValidityRange {
    let stop = max_days as i64 + 1;
    ValidityRange::new(1, stop, 1, stop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_half_open() {
        assert!(YEAR_AD.contains(0));
        assert!(YEAR_AD.contains(2500));
        assert!(!YEAR_AD.contains(2501));
        assert!(!CENTURY_AD.contains(0));
        assert_eq!(
            CENTURY_AD.check(41),
            Err(DateError::OutOfRange {
                value: 41,
                min: 1,
                max: 41,
            })
        );
    }

    #[test]
    fn decade_tests_step_by_ten() {
        let values = DECADE_BC.test_values().collect::<Vec<_>>();
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.get(1), Some(&10));
        assert_eq!(values.last(), Some(&500));
    }

    #[test]
    fn day_ranges_follow_month_length() {
        assert_eq!(day_of_month(29).test_values().count(), 29);
        assert!(day_of_month(30).contains(30));
        assert!(!day_of_month(30).contains(31));
    }
}
