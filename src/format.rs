use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DISPLAY_SEPARATOR, Mode, ParseError, RANGE_SEPARATOR, RangeValue, prelude::*};

/// Field order used when rendering a date into the input box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum DateFormat {
    #[display(fmt = "MM/DD/YYYY")]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[default]
    #[display(fmt = "DD/MM/YYYY")]
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[display(fmt = "YYYY/MM/DD")]
    #[serde(rename = "YYYY/MM/DD")]
    YearMonthDay,
}

impl DateFormat {
    pub const ALL: [Self; 3] = [Self::MonthDayYear, Self::DayMonthYear, Self::YearMonthDay];

    /// Renders `date`, or an empty string when there is none.
    ///
    /// Month and day are zero-padded to two digits, the year is written as is.
    pub fn format(self, date: Option<CalendarDate>) -> String {
        let Some(date) = date else {
            return String::new();
        };
        let (y, m, d) = (date.year().get(), date.month().get(), date.day().get());
        let sep = DISPLAY_SEPARATOR;
        match self {
            Self::MonthDayYear => format!("{m:02}{sep}{d:02}{sep}{y}"),
            Self::DayMonthYear => format!("{d:02}{sep}{m:02}{sep}{y}"),
            Self::YearMonthDay => format!("{y}{sep}{m:02}{sep}{d:02}"),
        }
    }

    /// Renders both endpoints; the separator only appears once a start exists.
    pub fn format_range(self, range: &RangeValue) -> String {
        let separator = if range.start.is_some() { RANGE_SEPARATOR } else { "" };
        format!("{}{separator}{}", self.format(range.start), self.format(range.end))
    }

    /// Default input placeholder, e.g. `dd/mm/yyyy` or `dd/mm/yyyy - dd/mm/yyyy`
    pub fn placeholder(self, mode: Mode) -> String {
        let pattern = self.to_string().to_lowercase();
        match mode {
            Mode::Single => pattern,
            Mode::Range => format!("{pattern}{RANGE_SEPARATOR}{pattern}"),
        }
    }
}

impl FromStr for DateFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownPattern(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_absent_date_formats_empty() {
        for format in DateFormat::ALL {
            assert_eq!(format.format(None), "", "{format} should render nothing");
        }
    }

    #[test]
    fn test_format_patterns() {
        struct TestCase {
            format:   DateFormat,
            date:     CalendarDate,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                format:   DateFormat::MonthDayYear,
                date:     date(2024, 3, 5),
                expected: "03/05/2024",
            },
            TestCase {
                format:   DateFormat::DayMonthYear,
                date:     date(2024, 3, 5),
                expected: "05/03/2024",
            },
            TestCase {
                format:   DateFormat::YearMonthDay,
                date:     date(2024, 3, 5),
                expected: "2024/03/05",
            },
            TestCase {
                format:   DateFormat::DayMonthYear,
                date:     date(1999, 12, 31),
                expected: "31/12/1999",
            },
            TestCase {
                format:   DateFormat::MonthDayYear,
                date:     date(2030, 10, 1),
                expected: "10/01/2030",
            },
        ];

        for case in &cases {
            let rendered = case.format.format(Some(case.date));
            assert_eq!(rendered, case.expected, "{} with {}", case.date, case.format);
            assert_eq!(rendered.len(), 10);
        }
    }

    #[test]
    fn test_year_is_not_padded() {
        assert_eq!(DateFormat::DayMonthYear.format(Some(date(987, 1, 2))), "02/01/987");
    }

    #[test]
    fn test_format_range() {
        let format = DateFormat::DayMonthYear;
        assert_eq!(format.format_range(&RangeValue::EMPTY), "");
        assert_eq!(
            format.format_range(&RangeValue::new(Some(date(2024, 3, 5)), None)),
            "05/03/2024 - "
        );
        assert_eq!(
            format.format_range(&RangeValue::new(Some(date(2024, 3, 5)), Some(date(2024, 3, 10)))),
            "05/03/2024 - 10/03/2024"
        );
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(DateFormat::DayMonthYear.placeholder(Mode::Single), "dd/mm/yyyy");
        assert_eq!(
            DateFormat::YearMonthDay.placeholder(Mode::Range),
            "yyyy/mm/dd - yyyy/mm/dd"
        );
    }

    #[test]
    fn test_parse_and_serde() {
        assert_eq!("MM/DD/YYYY".parse::<DateFormat>(), Ok(DateFormat::MonthDayYear));
        assert_eq!("yyyy/mm/dd".parse::<DateFormat>(), Ok(DateFormat::YearMonthDay));
        assert!(matches!(
            "DD-MM-YYYY".parse::<DateFormat>(),
            Err(ParseError::UnknownPattern(_))
        ));

        let json = serde_json::to_string(&DateFormat::DayMonthYear).expect("failed to serialize format");
        assert_eq!(json, r#""DD/MM/YYYY""#);
        let parsed: DateFormat = serde_json::from_str(r#""MM/DD/YYYY""#).expect("failed to parse format");
        assert_eq!(parsed, DateFormat::MonthDayYear);
    }
}
