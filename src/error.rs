use crate::{MAX_MONTH, MAX_YEAR, Mode, prelude::*};

/// Error produced while building or parsing calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Unknown date format pattern: {_0}")]
    UnknownPattern(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Advisory problem found in a [`PickerConfig`](crate::PickerConfig).
///
/// Construction never fails on these; they are logged and kept on the
/// engine so callers can surface them during development.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    /// The initial value does not show up on the initial calendar page.
    #[error(
        "`display_date` ({display}) must match the initial value: the date itself in single mode, \
         `start` or `end` in range mode"
    )]
    DisplayDateMismatch { display: String },

    /// Range initial value ends before it starts.
    #[error("`end` date ({end}) cannot be earlier than `start` date ({start})")]
    EndBeforeStart { start: String, end: String },

    /// Initial value shape does not fit the selection mode.
    #[error("initial value does not fit {mode} mode; starting with an empty selection")]
    ModeMismatch { mode: Mode },

    /// A `min_date` / `max_date` bound could not be parsed.
    #[error("ignoring {field} bound: {source}")]
    InvalidBound {
        field: &'static str,
        #[source]
        source: ParseError,
    },

    /// `min_date` is later than `max_date`.
    #[error("`min_date` ({min}) is later than `max_date` ({max})")]
    BoundsInverted { min: String, max: String },
}
