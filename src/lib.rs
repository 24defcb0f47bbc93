//! Rendering-independent date selection engine.
//!
//! [`DatePicker`] holds the state behind a date-picker widget: the picked
//! date or range, the calendar page on screen, and the day/month/year
//! drill-down view. A presentation shell feeds it [`Gesture`]s and renders
//! its snapshots; the engine answers with [`Event`]s.
//!
//! ```
//! use date_select::{CalendarDate, DateFormat, DatePicker, FixedClock, Mode, PickerConfig};
//!
//! let today = CalendarDate::new(2024, 3, 1)?;
//! let config = PickerConfig::new(Mode::Range).with_date_format(DateFormat::DayMonthYear);
//! let mut picker = DatePicker::new(config, FixedClock(today));
//!
//! picker.select_date(CalendarDate::new(2024, 3, 10)?);
//! picker.select_date(CalendarDate::new(2024, 3, 5)?);
//! assert_eq!(picker.display_string(), "05/03/2024 - 10/03/2024");
//! # Ok::<(), date_select::ParseError>(())
//! ```

mod calendar;
mod clock;
mod config;
mod consts;
mod date;
mod engine;
mod error;
mod format;
mod prelude;
mod state;
mod types;
mod value;
mod view;

pub use calendar::{DayCell, MonthOption, YearOption, month_grid, month_options, year_options};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DateBounds, PickerConfig};
pub use consts::*;
pub use date::CalendarDate;
pub use engine::{DatePicker, PickerListener};
pub use error::{ConfigWarning, ParseError};
pub use format::DateFormat;
pub use state::{Event, Gesture, SelectionState, Transition};
pub use types::{Day, Month, Year, is_leap_year};
pub use value::{Mode, RangeValue, SelectionValue};
pub use view::ViewGranularity;

#[cfg(test)]
pub(crate) mod test_utils {
    #![allow(clippy::expect_used)]

    use crate::{CalendarDate, Month, Year};

    pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("test date should be valid")
    }

    pub fn year(value: u16) -> Year {
        Year::new(value).expect("test year should be valid")
    }

    pub fn month(value: u8) -> Month {
        Month::new(value).expect("test month should be valid")
    }
}
