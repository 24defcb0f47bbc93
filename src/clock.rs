use chrono::Local;

use crate::CalendarDate;

/// Source of "today" for default display dates and `clear`.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let now = Local::now().date_naive();
        // Only fails past year 9999 or before year 1.
        CalendarDate::try_from(now).unwrap_or_else(|err| {
            tracing::warn!(%now, %err, "system date outside supported range");
            CalendarDate::MIN
        })
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
