//! Day specifiers that are relative to a month: "the nth Tuesday", "the last
//! Friday", "the last day of February".

use crate::civil::last_day_of_month;
use crate::consts::MAX_WEEKDAY_INDEX;
use crate::types::{Day, Month, Weekday, Year};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Marker for "the last one", composed with a month or weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last;

impl fmt::Display for Last {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("last")
    }
}

/// The `index`th occurrence of a weekday within some month.
///
/// Whether a fifth occurrence exists depends on the month, so `ok()` here only
/// checks `1..=5`; the year-month composites do the full check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdayIndexed {
    weekday: Weekday,
    index:   u8,
}

impl WeekdayIndexed {
    /// Not validated; see [`WeekdayIndexed::ok`].
    pub const fn new(weekday: Weekday, index: u8) -> Self {
        Self { weekday, index }
    }

    /// Returns the weekday.
    pub const fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Returns the occurrence index, 1-based.
    pub const fn index(self) -> u8 {
        self.index
    }

    /// True for a valid weekday and an index in `1..=5`.
    pub const fn ok(self) -> bool {
        self.weekday.ok() && 1 <= self.index && self.index <= MAX_WEEKDAY_INDEX
    }
}

impl Ord for WeekdayIndexed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then_with(|| self.weekday.get().cmp(&other.weekday.get()))
    }
}

impl PartialOrd for WeekdayIndexed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WeekdayIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.weekday, self.index)
    }
}

/// The last occurrence of a weekday within some month. Every month has one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdayLast {
    weekday: Weekday,
}

impl WeekdayLast {
    /// The last `weekday` of some month.
    pub const fn new(weekday: Weekday) -> Self {
        Self { weekday }
    }

    /// Returns the weekday.
    pub const fn weekday(self) -> Weekday {
        self.weekday
    }

    /// True when the weekday is valid.
    pub const fn ok(self) -> bool {
        self.weekday.ok()
    }
}

impl From<Weekday> for WeekdayLast {
    fn from(weekday: Weekday) -> Self {
        Self::new(weekday)
    }
}

impl fmt::Display for WeekdayLast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.weekday, Last)
    }
}

/// The last day of a month, whatever year it ends up in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDayLast {
    month: Month,
}

impl MonthDayLast {
    /// The last day of `month`.
    pub const fn new(month: Month) -> Self {
        Self { month }
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month
    }

    /// True when the month is in `1..=12`.
    pub const fn ok(self) -> bool {
        self.month.ok()
    }

    /// The last day of the month in `year`. Zero if the month is not valid.
    pub const fn day(self, year: Year) -> Day {
        Day::new(last_day_of_month(year.get() as i32, self.month.get() as u32) as u8)
    }
}

impl From<Month> for MonthDayLast {
    fn from(month: Month) -> Self {
        Self::new(month)
    }
}

impl fmt::Display for MonthDayLast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, Last)
    }
}
