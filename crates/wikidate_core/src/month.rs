use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::error::{DateError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    pub fn from_number(number: u32) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize).copied())
            .ok_or(DateError::InvalidMonth(number))
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|month| month.as_str() == name)
    }

    /// Longest the month can be in any year.
    pub fn max_days(self) -> u32 {
        match self {
            Self::February => 29,
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Length of `month` in `year`, or `None` when the year is outside chrono's range.
pub fn days_in_month(year: i32, month: Month) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month.number(), 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Moves `date` by `month_delta` months, keeping the day where possible.
///
/// When the target month is shorter the day is clamped to its last day. With
/// `add_overlap` the clamped days spill into the following month instead, so
/// 31 January plus one month becomes 3 March (2 March in leap years).
pub fn apply_month_delta(date: NaiveDate, month_delta: i64, add_overlap: bool) -> Result<NaiveDate> {
    let overflow = || DateError::CalendarOverflow {
        date,
        months: month_delta,
    };
    let months = u32::try_from(month_delta.unsigned_abs())
        .map(Months::new)
        .map_err(|_| overflow())?;
    let shifted = if month_delta < 0 {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    }
    .ok_or_else(overflow)?;

    let overlap = date.day() - shifted.day();
    if !add_overlap || overlap == 0 {
        return Ok(shifted);
    }
    shifted
        .checked_add_days(Days::new(u64::from(overlap)))
        .ok_or_else(overflow)
}

/// Number of whole calendar months from `from` to `to`, ignoring days.
pub fn get_month_delta(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.month()) - i64::from(from.month())
        + (i64::from(to.year()) - i64::from(from.year())) * 12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn month_numbers_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()).expect("month"), month);
            assert_eq!(Month::from_name(month.as_str()), Some(month));
        }
        assert_eq!(Month::from_number(0), Err(DateError::InvalidMonth(0)));
        assert_eq!(Month::from_number(13), Err(DateError::InvalidMonth(13)));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2024, Month::February), Some(29));
        assert_eq!(days_in_month(2023, Month::February), Some(28));
        assert_eq!(days_in_month(2023, Month::April), Some(30));
        assert_eq!(days_in_month(2023, Month::December), Some(31));
        assert_eq!(days_in_month(i32::MAX, Month::January), None);
    }

    #[test]
    fn max_days_bounds_every_year() {
        for month in Month::ALL {
            for year in [1900, 2000, 2023, 2024] {
                let days = days_in_month(year, month).expect("days");
                assert!(days <= month.max_days(), "{month} {year}");
            }
        }
    }

    #[test]
    fn apply_month_delta_clamps_to_month_end() {
        let shift = |from, delta| apply_month_delta(from, delta, false).expect("shift");
        assert_eq!(shift(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(shift(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift(date(2023, 3, 15), 1), date(2023, 4, 15));
        assert_eq!(shift(date(2023, 3, 31), -1), date(2023, 2, 28));
    }

    #[test]
    fn apply_month_delta_carries_overlap() {
        let shift = |from, delta| apply_month_delta(from, delta, true).expect("shift");
        assert_eq!(shift(date(2023, 1, 31), 1), date(2023, 3, 3));
        assert_eq!(shift(date(2024, 1, 31), 1), date(2024, 3, 2));
        assert_eq!(shift(date(2023, 3, 31), 1), date(2023, 5, 1));
    }

    #[test]
    fn apply_month_delta_rolls_years() {
        let shift = |from, delta| apply_month_delta(from, delta, false).expect("shift");
        assert_eq!(shift(date(2023, 12, 5), 1), date(2024, 1, 5));
        assert_eq!(shift(date(2023, 1, 5), -1), date(2022, 12, 5));
        assert_eq!(shift(date(2023, 6, 5), -30), date(2020, 12, 5));
        assert_eq!(
            apply_month_delta(date(2023, 6, 5), 0, true).expect("shift"),
            date(2023, 6, 5)
        );
    }

    #[test]
    fn apply_month_delta_reports_overflow() {
        let start = date(2023, 6, 5);
        assert_eq!(
            apply_month_delta(start, i64::MAX, false),
            Err(DateError::CalendarOverflow {
                date: start,
                months: i64::MAX,
            })
        );
        assert!(apply_month_delta(NaiveDate::MAX, 1, true).is_err());
        assert!(apply_month_delta(NaiveDate::MIN, -1, false).is_err());
    }

    #[test]
    fn month_delta_between_dates() {
        assert_eq!(get_month_delta(date(2023, 1, 31), date(2023, 2, 1)), 1);
        assert_eq!(get_month_delta(date(2023, 11, 1), date(2025, 2, 1)), 15);
        assert_eq!(get_month_delta(date(2023, 5, 1), date(2022, 5, 20)), -12);
    }
}
