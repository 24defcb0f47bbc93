/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Short month labels for the month view, January first
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator for ISO 8601 dates (`min_date`, `max_date`, serde)
pub const ISO_DATE_SEPARATOR: char = '-';
/// Separator between an ISO date and its time part
pub const ISO_TIME_SEPARATOR: char = 'T';
/// Date component separator in formatted input values
pub const DISPLAY_SEPARATOR: char = '/';
/// Separator between the start and end of a formatted range
pub const RANGE_SEPARATOR: &str = " - ";

/// Days per week row in the calendar grid
pub const DAYS_PER_WEEK: usize = 7;
/// Week rows in the calendar grid (enough for any month)
pub const WEEKS_PER_PAGE: usize = 6;
/// Number of years listed on one year-view page
pub const YEARS_PER_PAGE: u16 = 12;
