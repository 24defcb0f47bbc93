use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use crate::{
    ISO_DATE_SEPARATOR, ISO_TIME_SEPARATOR, ParseError,
    prelude::*,
    types::{Day, Month, Year},
};

/// A concrete calendar day.
///
/// Ordering is chronological because fields compare year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// 0001-01-01
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };

    /// Builds a date from raw components.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for an out-of-range year,
    /// month, or day.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Same date moved to `month`, keeping the year.
    /// The day is clamped to the length of the target month.
    #[must_use]
    pub fn with_month(self, month: Month) -> Self {
        Self {
            month,
            day: self.day.clamped(self.year, month),
            ..self
        }
    }

    /// Same date moved to `year`, keeping the month.
    /// The day is clamped (Feb 29 becomes Feb 28 in a common year).
    #[must_use]
    pub fn with_year(self, year: Year) -> Self {
        Self {
            year,
            day: self.day.clamped(year, self.month),
            ..self
        }
    }

    /// First day of this date's month
    #[must_use]
    pub fn first_of_month(self) -> Self {
        Self {
            day: Day::FIRST,
            ..self
        }
    }

    /// Shifts by whole months, clamping the day.
    /// Returns `None` when the result leaves the supported year range.
    pub fn add_months(self, delta: i32) -> Option<Self> {
        let index = i32::from(self.month.get()) - 1 + delta;
        let year = self.year.checked_add(index.div_euclid(12))?;
        let month = u8::try_from(index.rem_euclid(12) + 1)
            .ok()
            .and_then(|m| Month::new(m).ok())?;
        Some(Self {
            year,
            month,
            day: self.day.clamped(year, month),
        })
    }

    /// Shifts by whole days. Returns `None` outside the supported year range.
    pub fn add_days(self, delta: i64) -> Option<Self> {
        let base = NaiveDate::from(self);
        let days = Days::new(delta.unsigned_abs());
        let shifted = if delta < 0 {
            base.checked_sub_days(days)?
        } else {
            base.checked_add_days(days)?
        };
        Self::try_from(shifted).ok()
    }

    /// Day of week counted from Sunday (0) to Saturday (6)
    pub fn weekday_from_sunday(self) -> u8 {
        // num_days_from_sunday is always < 7
        u8::try_from(NaiveDate::from(self).weekday().num_days_from_sunday()).unwrap_or(0)
    }

    fn parse_component<T: FromStr>(part: &str, input: &str) -> Result<T, ParseError> {
        part.trim()
            .parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(input.to_owned()))
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        // CalendarDate components are validated, so this always resolves.
        Self::from_ymd_opt(
            i32::from(date.year.get()),
            u32::from(date.month.get()),
            u32::from(date.day.get()),
        )
        .unwrap_or(Self::MIN)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        let month = u8::try_from(date.month()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        Self::new(year, month, day)
    }
}

/// Parses ISO 8601 dates: `YYYY-MM-DD`, optionally followed by a time part
/// (`2016-05-19T12:00:00.000Z`). The time part is ignored.
impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let date_part = trimmed
            .split_once(ISO_TIME_SEPARATOR)
            .map_or(trimmed, |(date, _time)| date);

        let parts: Vec<&str> = date_part.split(ISO_DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{ISO_DATE_SEPARATOR}MM{ISO_DATE_SEPARATOR}DD, found {} component(s): {s}",
                parts.len()
            )));
        };

        Self::new(
            Self::parse_component(year, s)?,
            Self::parse_component(month, s)?,
            Self::parse_component(day, s)?,
        )
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
