use std::fmt;

use tracing::{debug, warn};

use crate::{
    CalendarDate, Clock, ConfigWarning, DateBounds, DateFormat, Event, Gesture, Mode, PickerConfig,
    SelectionState, SelectionValue, SystemClock, ViewGranularity,
    calendar::{self, DayCell, MonthOption, YearOption},
    types::{Month, Year},
};

/// Receives picker notifications as gestures are applied.
///
/// Every method defaults to a no-op so listeners only implement what they use.
pub trait PickerListener {
    fn on_change_date(&mut self, _value: &SelectionValue) {}
    fn on_clear(&mut self) {}
    fn on_selection_complete(&mut self) {}
}

/// Date selection engine behind a date-picker widget.
///
/// Gestures take `&mut self`, so each one is reduced, committed, and
/// notified before the next can start. The picker is `Send` whenever its
/// clock is; listeners are required to be `Send`.
pub struct DatePicker<C = SystemClock> {
    mode:        Mode,
    date_format: DateFormat,
    placeholder: Option<String>,
    bounds:      DateBounds,
    warnings:    Vec<ConfigWarning>,
    state:       SelectionState,
    view:        ViewGranularity,
    clock:       C,
    listener:    Option<Box<dyn PickerListener + Send>>,
}

impl DatePicker<SystemClock> {
    /// Picker reading today's date from the local clock.
    pub fn with_system_clock(config: PickerConfig) -> Self {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> DatePicker<C> {
    /// Builds a picker. Never fails: configuration problems are logged
    /// and kept in [`warnings`](Self::warnings).
    pub fn new(config: PickerConfig, clock: C) -> Self {
        let display_date = config.display_date.unwrap_or_else(|| clock.today());
        let (value, mismatch) = config.starting_value();
        let (bounds, mut warnings) = config.bounds();
        warnings.extend(mismatch);
        warnings.extend(config.consistency_warnings(display_date));

        for warning in &warnings {
            warn!(%warning, "date picker configuration");
        }
        debug!(mode = %config.mode, format = %config.date_format, %display_date, "date picker created");

        Self {
            mode: config.mode,
            date_format: config.date_format,
            placeholder: config.placeholder,
            bounds,
            warnings,
            state: SelectionState::new(value, display_date),
            view: ViewGranularity::default(),
            clock,
            listener: None,
        }
    }

    /// Installs the listener that receives notifications, replacing any previous one.
    #[must_use]
    pub fn with_listener(mut self, listener: impl PickerListener + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Applies one gesture and returns the notifications it fired, in order.
    pub fn dispatch(&mut self, gesture: Gesture) -> Vec<Event> {
        let transition = self.state.apply(self.mode, gesture, &self.clock);
        let view = self.view.after(&gesture);

        debug!(
            ?gesture,
            from = %self.view,
            to = %view,
            display_date = %transition.state.display_date,
            events = transition.events.len(),
            "date picker transition"
        );

        self.state = transition.state;
        self.view = view;

        if let Some(listener) = self.listener.as_deref_mut() {
            for event in &transition.events {
                match event {
                    Event::ChangeDate(value) => listener.on_change_date(value),
                    Event::Clear => listener.on_clear(),
                    Event::SelectionComplete => listener.on_selection_complete(),
                }
            }
        }
        transition.events
    }

    pub fn select_date(&mut self, date: CalendarDate) -> Vec<Event> {
        self.dispatch(Gesture::SelectDate(date))
    }

    pub fn navigate_month(&mut self, date: CalendarDate) -> Vec<Event> {
        self.dispatch(Gesture::NavigateMonth(date))
    }

    pub fn show_previous_month(&mut self) -> Vec<Event> {
        self.dispatch(Gesture::ShowPreviousMonth)
    }

    pub fn show_next_month(&mut self) -> Vec<Event> {
        self.dispatch(Gesture::ShowNextMonth)
    }

    pub fn pick_month(&mut self, month: Month) -> Vec<Event> {
        self.dispatch(Gesture::PickMonth(month))
    }

    pub fn pick_year(&mut self, year: Year) -> Vec<Event> {
        self.dispatch(Gesture::PickYear(year))
    }

    pub fn click_header_label(&mut self) -> Vec<Event> {
        self.dispatch(Gesture::ClickHeaderLabel)
    }

    pub fn set_invalid(&mut self, invalid: bool) -> Vec<Event> {
        self.dispatch(Gesture::SetInvalid(invalid))
    }

    pub fn clear(&mut self) -> Vec<Event> {
        self.dispatch(Gesture::Clear)
    }

    /// Text for the input box
    pub fn display_string(&self) -> String {
        match &self.state.value {
            SelectionValue::Single(date) => self.date_format.format(*date),
            SelectionValue::Range(range) => self.date_format.format_range(range),
        }
    }

    /// Configured placeholder, or one derived from the date format
    pub fn placeholder(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| self.date_format.placeholder(self.mode))
    }

    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    pub const fn value(&self) -> &SelectionValue {
        &self.state.value
    }

    pub const fn current_view(&self) -> ViewGranularity {
        self.view
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn date_format(&self) -> DateFormat {
        self.date_format
    }

    pub const fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    /// Problems found in the configuration at construction
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Dates drawn as selected on the day grid
    pub fn highlighted_dates(&self) -> Vec<CalendarDate> {
        self.state.value.highlighted()
    }

    /// Whether the shell should offer `date`. Advisory: [`select_date`](Self::select_date)
    /// accepts any date.
    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        self.bounds.contains(date)
    }

    pub fn month_grid(&self) -> Vec<DayCell> {
        calendar::month_grid(
            self.state.display_date,
            &self.state.value,
            &self.bounds,
            self.clock.today(),
        )
    }

    pub fn month_options(&self) -> Vec<MonthOption> {
        calendar::month_options(self.state.display_date)
    }

    pub fn year_options(&self) -> Vec<YearOption> {
        calendar::year_options(self.state.display_date)
    }
}

impl<C: fmt::Debug> fmt::Debug for DatePicker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("mode", &self.mode)
            .field("date_format", &self.date_format)
            .field("state", &self.state)
            .field("view", &self.view)
            .field("bounds", &self.bounds)
            .field("warnings", &self.warnings)
            .field("clock", &self.clock)
            .field("listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
