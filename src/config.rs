use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ConfigWarning, DateFormat, Mode, SelectionValue};

/// Construction options for a [`DatePicker`](crate::DatePicker).
///
/// Deserializes from camelCase keys, every field optional:
///
/// ```json
/// { "mode": "range", "dateFormat": "DD/MM/YYYY", "minDate": "2016-05-19T12:00:00.000Z" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    pub mode:          Mode,
    /// Value shown before the first pick. Should match `display_date`.
    pub initial_value: Option<SelectionValue>,
    /// Calendar page shown first; today when absent.
    pub display_date:  Option<CalendarDate>,
    pub date_format:   DateFormat,
    /// ISO date string, lowest selectable day (advisory)
    pub min_date:      Option<String>,
    /// ISO date string, highest selectable day (advisory)
    pub max_date:      Option<String>,
    /// Overrides the placeholder derived from `date_format`
    pub placeholder:   Option<String>,
}

impl PickerConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<SelectionValue>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    #[must_use]
    pub const fn with_display_date(mut self, date: CalendarDate) -> Self {
        self.display_date = Some(date);
        self
    }

    #[must_use]
    pub const fn with_date_format(mut self, format: DateFormat) -> Self {
        self.date_format = format;
        self
    }

    #[must_use]
    pub fn with_min_date(mut self, iso: impl Into<String>) -> Self {
        self.min_date = Some(iso.into());
        self
    }

    #[must_use]
    pub fn with_max_date(mut self, iso: impl Into<String>) -> Self {
        self.max_date = Some(iso.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Parses `min_date` / `max_date`. Unparsable bounds are dropped and reported.
    pub(crate) fn bounds(&self) -> (DateBounds, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();
        let mut parse = |field: &'static str, raw: Option<&String>| {
            raw.and_then(|iso| match iso.parse::<CalendarDate>() {
                Ok(date) => Some(date),
                Err(source) => {
                    warnings.push(ConfigWarning::InvalidBound { field, source });
                    None
                },
            })
        };
        let bounds = DateBounds {
            min: parse("min_date", self.min_date.as_ref()),
            max: parse("max_date", self.max_date.as_ref()),
        };
        if let (Some(min), Some(max)) = (bounds.min, bounds.max) {
            if min > max {
                warnings.push(ConfigWarning::BoundsInverted {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        (bounds, warnings)
    }

    /// Resolves the starting value against the mode.
    ///
    /// A value of the wrong shape is replaced with the mode's empty value.
    pub(crate) fn starting_value(&self) -> (SelectionValue, Option<ConfigWarning>) {
        match self.initial_value {
            None => (SelectionValue::empty(self.mode), None),
            Some(value) if value.mode() == self.mode => (value, None),
            Some(_) => (
                SelectionValue::empty(self.mode),
                Some(ConfigWarning::ModeMismatch { mode: self.mode }),
            ),
        }
    }

    /// Advisory consistency checks between the initial value and the first page.
    ///
    /// Dates are compared through the configured format, so only differences
    /// visible in the input box count.
    pub(crate) fn consistency_warnings(&self, display_date: CalendarDate) -> Vec<ConfigWarning> {
        let format = self.date_format;
        let shown = format.format(Some(display_date));
        let mut warnings = Vec::new();

        let matches_display = match self.initial_value {
            None | Some(SelectionValue::Single(None)) => return warnings,
            Some(value) if value.mode() != self.mode => return warnings,
            Some(SelectionValue::Single(date)) => format.format(date) == shown,
            Some(SelectionValue::Range(range)) => {
                if let (Some(start), Some(end)) = (range.start, range.end) {
                    if start > end {
                        warnings.push(ConfigWarning::EndBeforeStart {
                            start: start.to_string(),
                            end:   end.to_string(),
                        });
                    }
                }
                format.format(range.start) == shown || format.format(range.end) == shown
            },
        };

        if !matches_display {
            warnings.insert(0, ConfigWarning::DisplayDateMismatch { display: shown });
        }
        warnings
    }
}

/// Advisory selectable window. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateBounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateBounds {
    pub const UNBOUNDED: Self = Self { min: None, max: None };

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min.is_none_or(|min| min <= date) && self.max.is_none_or(|max| date <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeValue;
    use crate::test_utils::date;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.mode, Mode::Single);
        assert_eq!(config.date_format, DateFormat::DayMonthYear);
        assert!(config.initial_value.is_none());
        assert!(config.display_date.is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "mode": "range",
            "initialValue": { "start": "2024-03-05", "end": "2024-03-10" },
            "displayDate": "2024-03-05",
            "dateFormat": "MM/DD/YYYY",
            "minDate": "2016-05-19T12:00:00.000Z",
            "placeholder": "pick a range"
        }"#;
        let config: PickerConfig = serde_json::from_str(json).expect("failed to parse config");

        assert_eq!(config.mode, Mode::Range);
        assert_eq!(config.date_format, DateFormat::MonthDayYear);
        assert_eq!(config.display_date, Some(date(2024, 3, 5)));
        assert_eq!(
            config.initial_value,
            Some(SelectionValue::Range(RangeValue::new(
                Some(date(2024, 3, 5)),
                Some(date(2024, 3, 10))
            )))
        );
        assert_eq!(config.min_date.as_deref(), Some("2016-05-19T12:00:00.000Z"));
        assert!(config.max_date.is_none());
        assert_eq!(config.placeholder.as_deref(), Some("pick a range"));
    }

    #[test]
    fn test_bounds_parsing() {
        let config = PickerConfig::default()
            .with_min_date("2016-05-19T12:00:00.000Z")
            .with_max_date("2016-06-30");
        let (bounds, warnings) = config.bounds();

        assert!(warnings.is_empty());
        assert_eq!(bounds.min, Some(date(2016, 5, 19)));
        assert_eq!(bounds.max, Some(date(2016, 6, 30)));
        assert!(bounds.contains(date(2016, 5, 19)));
        assert!(bounds.contains(date(2016, 6, 30)));
        assert!(!bounds.contains(date(2016, 5, 18)));
        assert!(!bounds.contains(date(2016, 7, 1)));
    }

    #[test]
    fn test_bad_bounds_are_dropped_with_warning() {
        let config = PickerConfig::default().with_min_date("yesterday");
        let (bounds, warnings) = config.bounds();

        assert_eq!(bounds, DateBounds::UNBOUNDED);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::InvalidBound { field: "min_date", .. }]
        ));
    }

    #[test]
    fn test_inverted_bounds_warn_but_stay() {
        let config = PickerConfig::default()
            .with_min_date("2024-06-01")
            .with_max_date("2024-01-01");
        let (bounds, warnings) = config.bounds();

        assert_eq!(bounds.min, Some(date(2024, 6, 1)));
        assert!(matches!(warnings.as_slice(), [ConfigWarning::BoundsInverted { .. }]));
    }

    #[test]
    fn test_consistency_single() {
        let consistent = PickerConfig::new(Mode::Single).with_initial_value(date(2024, 3, 5));
        assert!(consistent.consistency_warnings(date(2024, 3, 5)).is_empty());
        assert!(matches!(
            consistent.consistency_warnings(date(2024, 3, 6)).as_slice(),
            [ConfigWarning::DisplayDateMismatch { .. }]
        ));
    }

    #[test]
    fn test_consistency_range() {
        let range = RangeValue::new(Some(date(2024, 3, 5)), Some(date(2024, 3, 10)));
        let config = PickerConfig::new(Mode::Range).with_initial_value(SelectionValue::Range(range));

        assert!(config.consistency_warnings(date(2024, 3, 5)).is_empty());
        assert!(config.consistency_warnings(date(2024, 3, 10)).is_empty());
        assert_eq!(config.consistency_warnings(date(2024, 3, 7)).len(), 1);
    }

    #[test]
    fn test_end_before_start_warns() {
        let range = RangeValue::new(Some(date(2024, 3, 10)), Some(date(2024, 3, 5)));
        let config = PickerConfig::new(Mode::Range).with_initial_value(SelectionValue::Range(range));

        let warnings = config.consistency_warnings(date(2024, 3, 10));
        assert!(matches!(warnings.as_slice(), [ConfigWarning::EndBeforeStart { .. }]));
    }

    #[test]
    fn test_mode_mismatch_falls_back_to_empty() {
        let config = PickerConfig::new(Mode::Range).with_initial_value(date(2024, 3, 5));
        let (value, warning) = config.starting_value();

        assert_eq!(value, SelectionValue::empty(Mode::Range));
        assert_eq!(warning, Some(ConfigWarning::ModeMismatch { mode: Mode::Range }));
        assert!(config.consistency_warnings(date(2024, 1, 1)).is_empty());
    }
}
