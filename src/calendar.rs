//! Page contents for the day, month, and year views.

use crate::{
    CalendarDate, DAYS_PER_WEEK, DateBounds, SelectionValue, WEEKS_PER_PAGE, YEARS_PER_PAGE,
    types::{Month, Year},
};

/// One cell of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub date:             CalendarDate,
    /// False for the leading/trailing days of neighbouring months
    pub in_current_month: bool,
    /// Picked date or range endpoint
    pub selected:         bool,
    /// Strictly between the endpoints of a complete range
    pub in_range:         bool,
    /// Outside `min_date`/`max_date`; the shell should not offer it
    pub disabled:         bool,
    pub today:            bool,
}

/// One entry of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthOption {
    pub month:   Month,
    pub label:   &'static str,
    pub current: bool,
}

/// One entry of the year view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearOption {
    pub year:    Year,
    pub current: bool,
}

/// Six Sunday-first weeks covering the month of `display_date`.
///
/// Cells that would fall outside year 1..=9999 are left out.
pub fn month_grid(
    display_date: CalendarDate,
    value: &SelectionValue,
    bounds: &DateBounds,
    today: CalendarDate,
) -> Vec<DayCell> {
    let first = display_date.first_of_month();
    let lead = i64::from(first.weekday_from_sunday());
    let highlighted = value.highlighted();
    let range = value.as_range().filter(crate::RangeValue::is_complete);

    let cells = i64::try_from(DAYS_PER_WEEK * WEEKS_PER_PAGE).unwrap_or(42);
    (0..cells)
        .filter_map(|offset| first.add_days(offset - lead))
        .map(|date| DayCell {
            date,
            in_current_month: date.year() == first.year() && date.month() == first.month(),
            selected: highlighted.contains(&date),
            in_range: range.is_some_and(|r| r.contains(date) && !highlighted.contains(&date)),
            disabled: !bounds.contains(date),
            today: date == today,
        })
        .collect()
}

/// The twelve months, flagging the one `display_date` is in.
pub fn month_options(display_date: CalendarDate) -> Vec<MonthOption> {
    Month::all()
        .map(|month| MonthOption {
            month,
            label: month.label(),
            current: month == display_date.month(),
        })
        .collect()
}

/// The page of years containing `display_date`'s year.
///
/// Pages are fixed blocks of `YEARS_PER_PAGE` starting at year 1
/// (1..=12, 13..=24, ...), so paging never shifts under the user.
pub fn year_options(display_date: CalendarDate) -> Vec<YearOption> {
    let current = display_date.year();
    let offset = (current.get() - 1) % YEARS_PER_PAGE;
    let first = current.get() - offset;
    (first..first + YEARS_PER_PAGE)
        .filter_map(|y| Year::new(y).ok())
        .map(|year| YearOption {
            year,
            current: year == current,
        })
        .collect()
}
