//! Reference instant for date-relative derivations
//!
//! Period windows and the month totalizer read "today" through [`Clock`] so a fixed instant
//! can be injected.

use chrono::{Local, NaiveDate};

/// Source of the current calendar day
pub trait Clock: Send + Sync {
    /// Today's date in the dashboard's local calendar
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Pin the clock to `year-month-day`, or `None` if that is not a calendar date
    #[inline]
    #[must_use]
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
