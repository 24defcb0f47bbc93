use serde::{Deserialize, Serialize};

use crate::{CalendarDate, prelude::*};

/// Selection mode, fixed for the lifetime of a picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    #[display(fmt = "single")]
    Single,
    #[display(fmt = "range")]
    Range,
}

/// A possibly half-open date range as held while the user is picking it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeValue {
    pub start: Option<CalendarDate>,
    pub end:   Option<CalendarDate>,
}

impl RangeValue {
    pub const EMPTY: Self = Self {
        start: None,
        end:   None,
    };

    pub const fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    /// Both endpoints chosen
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `date` lies between both endpoints (inclusive).
    /// Always false for an incomplete range.
    pub fn contains(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

/// Current value of a picker: one date or a range, depending on [`Mode`].
///
/// Serializes untagged: a single value is an ISO date string or `null`, a
/// range is `{"start": .., "end": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    Single(Option<CalendarDate>),
    Range(RangeValue),
}

impl SelectionValue {
    /// The empty value for `mode`
    pub const fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Single => Self::Single(None),
            Mode::Range => Self::Range(RangeValue::EMPTY),
        }
    }

    /// The mode this value shape belongs to
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Range(_) => Mode::Range,
        }
    }

    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Single(date) => date.is_none(),
            Self::Range(range) => range.is_empty(),
        }
    }

    pub const fn as_single(&self) -> Option<CalendarDate> {
        match self {
            Self::Single(date) => *date,
            Self::Range(_) => None,
        }
    }

    pub const fn as_range(&self) -> Option<RangeValue> {
        match self {
            Self::Single(_) => None,
            Self::Range(range) => Some(*range),
        }
    }

    /// Dates to highlight on the day grid: the single date, or whichever
    /// range endpoints are present (start first).
    pub fn highlighted(&self) -> Vec<CalendarDate> {
        match self {
            Self::Single(date) => date.iter().copied().collect(),
            Self::Range(range) => range.start.into_iter().chain(range.end).collect(),
        }
    }
}

impl From<CalendarDate> for SelectionValue {
    fn from(date: CalendarDate) -> Self {
        Self::Single(Some(date))
    }
}
