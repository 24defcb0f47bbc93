use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MONTH_LABELS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Year 1
    pub const MIN: Self = Self(NonZeroU16::MIN);

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether February has 29 days in this year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Shifts the year by `delta`, returning `None` outside `1..=MAX_YEAR`
    pub fn checked_add(self, delta: i32) -> Option<Self> {
        let shifted = i32::from(self.get()).checked_add(delta)?;
        u16::try_from(shifted).ok().and_then(|y| Self::new(y).ok())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Short English label ("Jan" .. "Dec")
    pub const fn label(self) -> &'static str {
        MONTH_LABELS[(self.get() - 1) as usize]
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (JANUARY..=DECEMBER).filter_map(|m| Self::new(m).ok())
    }

    /// Number of days in this month of `year`
    #[inline]
    pub const fn days_in(self, year: Year) -> u8 {
        days_in_month(year.get(), self.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value, valid for the year and month it was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// First day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it's non-zero and exists in the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month: month.get(),
            day: value,
            year: year.get(),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > month.days_in(year) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Same day number, or the last day of the month when the month is shorter
    pub fn clamped(self, year: Year, month: Month) -> Self {
        let last = month.days_in(year);
        if self.get() <= last {
            self
        } else {
            // days_in is always >= 28, never zero
            NonZeroU8::new(last).map_or(self, Self)
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{month, year};

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_checked_add() {
        assert_eq!(year(2024).checked_add(6), Some(year(2030)));
        assert_eq!(year(2024).checked_add(-24), Some(year(2000)));
        assert_eq!(year(1).checked_add(-1), None);
        assert_eq!(year(9999).checked_add(1), None);
    }

    #[test]
    fn test_year_serde() {
        let json = serde_json::to_string(&year(2024)).expect("failed to serialize year");
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).expect("failed to deserialize year");
        assert_eq!(parsed, year(2024));
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_labels_and_iteration() {
        let labels: Vec<&str> = Month::all().map(Month::label).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "Jan");
        assert_eq!(labels[11], "Dec");
        assert_eq!(month(5).label(), "May");
    }

    #[test]
    fn test_day_validated_against_month() {
        // February non-leap - 28 days
        assert!(Day::new(28, year(2023), month(2)).is_ok());
        assert!(Day::new(29, year(2023), month(2)).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, year(2024), month(2)).is_ok());
        assert!(Day::new(30, year(2024), month(2)).is_err());

        // April - 30 days
        assert!(Day::new(30, year(2024), month(4)).is_ok());
        assert!(matches!(
            Day::new(31, year(2024), month(4)),
            Err(ParseError::InvalidDay {
                month: 4,
                day: 31,
                year: 2024
            })
        ));

        assert!(Day::new(0, year(2024), month(1)).is_err());
    }

    #[test]
    fn test_day_clamped() {
        let day = Day::new(31, year(2024), month(1)).expect("Jan 31 should be valid");
        assert_eq!(day.clamped(year(2024), month(2)).get(), 29);
        assert_eq!(day.clamped(year(2023), month(2)).get(), 28);
        assert_eq!(day.clamped(year(2024), month(4)).get(), 30);
        assert_eq!(day.clamped(year(2024), month(3)).get(), 31);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for m in 1..=12 {
            assert_eq!(
                days_in_month(2023, m),
                expected[m as usize],
                "Month {m} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_month_days_in_covers_every_month() {
        let expected = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let lengths: Vec<u8> = Month::all().map(|m| m.days_in(year(2024))).collect();
        assert_eq!(lengths, expected);
        assert_eq!(month(2).days_in(year(1900)), 28);
        assert_eq!(month(2).days_in(year(2000)), 29);
    }
}
