//! Selection state snapshots and the pure reducer that advances them.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Clock, Mode, RangeValue, SelectionValue, types::{Month, Year}};

/// One user action submitted by the presentation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Click on a day cell
    SelectDate(CalendarDate),
    /// Show the page containing this date without touching the value
    NavigateMonth(CalendarDate),
    /// Header "previous" arrow
    ShowPreviousMonth,
    /// Header "next" arrow
    ShowNextMonth,
    /// Month chosen in the month view
    PickMonth(Month),
    /// Year chosen in the year view
    PickYear(Year),
    /// Click on the header's month/year label
    ClickHeaderLabel,
    /// Externally detected validation result
    SetInvalid(bool),
    /// Clear button
    Clear,
}

/// Notification produced while applying a gesture, in firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The value changed through a pick or a clear
    ChangeDate(SelectionValue),
    /// The clear button was used
    Clear,
    /// A single date was picked or a range got both ends; the shell may close
    SelectionComplete,
}

/// Immutable snapshot of a picker's selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionState {
    /// Date whose month page is shown
    pub display_date:   CalendarDate,
    /// Raw clicks of the current selection, at most two
    pub selected_dates: Vec<CalendarDate>,
    pub value:          SelectionValue,
    pub invalid:        bool,
}

/// Result of applying one gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state:  SelectionState,
    pub events: Vec<Event>,
}

impl Transition {
    const fn quiet(state: SelectionState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }
}

impl SelectionState {
    pub const fn new(value: SelectionValue, display_date: CalendarDate) -> Self {
        Self {
            display_date,
            selected_dates: Vec::new(),
            value,
            invalid: false,
        }
    }

    /// Empty selection for `mode`
    pub const fn empty(mode: Mode, display_date: CalendarDate) -> Self {
        Self::new(SelectionValue::empty(mode), display_date)
    }

    /// Computes the snapshot following `gesture`. `self` is left untouched.
    ///
    /// `clock` is only read by [`Gesture::Clear`].
    pub fn apply(&self, mode: Mode, gesture: Gesture, clock: &impl Clock) -> Transition {
        match gesture {
            Gesture::SelectDate(date) => match mode {
                Mode::Single => self.select_single(date),
                Mode::Range => self.select_range(date),
            },
            Gesture::NavigateMonth(date) => Transition::quiet(self.with_display_date(date)),
            Gesture::ShowPreviousMonth => Transition::quiet(self.shifted_month(-1)),
            Gesture::ShowNextMonth => Transition::quiet(self.shifted_month(1)),
            Gesture::PickMonth(month) => {
                Transition::quiet(self.with_display_date(self.display_date.with_month(month)))
            },
            Gesture::PickYear(year) => {
                Transition::quiet(self.with_display_date(self.display_date.with_year(year)))
            },
            Gesture::ClickHeaderLabel => Transition::quiet(self.clone()),
            Gesture::SetInvalid(invalid) => Transition::quiet(Self {
                invalid,
                ..self.clone()
            }),
            Gesture::Clear => Self::cleared(mode, clock.today()),
        }
    }

    fn with_display_date(&self, display_date: CalendarDate) -> Self {
        Self {
            display_date,
            ..self.clone()
        }
    }

    /// Month arrows stop at the ends of the supported calendar.
    fn shifted_month(&self, delta: i32) -> Self {
        let target = self.display_date.add_months(delta).unwrap_or(self.display_date);
        self.with_display_date(target)
    }

    fn cleared(mode: Mode, today: CalendarDate) -> Transition {
        let state = Self::empty(mode, today);
        let events = vec![Event::Clear, Event::ChangeDate(state.value)];
        Transition { state, events }
    }

    fn select_single(&self, date: CalendarDate) -> Transition {
        let state = Self {
            display_date:   date,
            selected_dates: vec![date],
            value:          SelectionValue::Single(Some(date)),
            invalid:        self.invalid,
        };
        let events = vec![Event::SelectionComplete, Event::ChangeDate(state.value)];
        Transition { state, events }
    }

    /// Range picking: a click either opens a new range or closes the open one.
    ///
    /// Closing with a date before the start swaps the ends. Clicking the start
    /// again closes a zero-length range.
    fn select_range(&self, date: CalendarDate) -> Transition {
        let current = self.value.as_range().unwrap_or_default();

        let (value, selected_dates) = match (current.start, current.end) {
            (Some(start), None) if date < start => {
                (RangeValue::new(Some(date), Some(start)), vec![start, date])
            },
            (Some(start), None) => (RangeValue::new(Some(start), Some(date)), vec![start, date]),
            _ => (RangeValue::new(Some(date), None), vec![date, date]),
        };

        let state = Self {
            display_date: date,
            selected_dates,
            value: SelectionValue::Range(value),
            invalid: self.invalid,
        };

        let mut events = Vec::with_capacity(2);
        if value.end.is_some() {
            events.push(Event::SelectionComplete);
        }
        events.push(Event::ChangeDate(state.value));
        Transition { state, events }
    }
}
