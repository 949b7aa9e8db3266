//! Partial calendar points: a year and month, or a month and a day specifier
//! without a year.

use crate::civil::last_day_of_month;
use crate::consts::{COMPOSE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY_DAYS_LEAP, MIN_DAY};
use crate::indexed::{WeekdayIndexed, WeekdayLast};
use crate::types::{Day, Month, Year};
use crate::units::{Months, Years};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A month of a specific year.
///
/// Fields are declared year first, so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year:  Year,
    month: Month,
}

impl YearMonth {
    /// Pairs a year with a month. Not validated.
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Returns the year.
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month
    }

    /// True when the month is in `1..=12`.
    pub const fn ok(self) -> bool {
        self.year.ok() && self.month.ok()
    }

    /// Number of days in this month. Zero if the month is not valid.
    pub const fn days_in_month(self) -> u8 {
        last_day_of_month(self.year.get() as i32, self.month.get() as u32) as u8
    }

    /// The last day of this month.
    pub const fn last_day(self) -> Day {
        Day::new(self.days_in_month())
    }

    /// Total months since year zero, used for differences.
    const fn serial(self) -> i32 {
        self.year.get() as i32 * 12 + self.month.get() as i32
    }
}

impl Add<Months> for YearMonth {
    type Output = Self;

    /// Adds with carry into the year. The year wraps at the edge of its range.
    fn add(self, rhs: Months) -> Self {
        let (month, carry) = self.month.add_with_carry(rhs);
        Self::new(self.year + Years::new(carry), month)
    }
}

impl Add<YearMonth> for Months {
    type Output = YearMonth;

    fn add(self, rhs: YearMonth) -> YearMonth {
        rhs + self
    }
}

impl Sub<Months> for YearMonth {
    type Output = Self;

    fn sub(self, rhs: Months) -> Self {
        self + -rhs
    }
}

impl Add<Years> for YearMonth {
    type Output = Self;

    fn add(self, rhs: Years) -> Self {
        Self::new(self.year + rhs, self.month)
    }
}

impl Add<YearMonth> for Years {
    type Output = YearMonth;

    fn add(self, rhs: YearMonth) -> YearMonth {
        rhs + self
    }
}

impl Sub<Years> for YearMonth {
    type Output = Self;

    fn sub(self, rhs: Years) -> Self {
        Self::new(self.year - rhs, self.month)
    }
}

impl Sub for YearMonth {
    type Output = Months;

    fn sub(self, rhs: Self) -> Months {
        Months::new(self.serial() - rhs.serial())
    }
}

impl AddAssign<Months> for YearMonth {
    fn add_assign(&mut self, rhs: Months) {
        *self = *self + rhs;
    }
}

impl SubAssign<Months> for YearMonth {
    fn sub_assign(&mut self, rhs: Months) {
        *self = *self - rhs;
    }
}

impl AddAssign<Years> for YearMonth {
    fn add_assign(&mut self, rhs: Years) {
        *self = *self + rhs;
    }
}

impl SubAssign<Years> for YearMonth {
    fn sub_assign(&mut self, rhs: Years) {
        *self = *self - rhs;
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COMPOSE_SEPARATOR}{}", self.year, self.month)
    }
}

/// A month and day without a year, like a birthday.
///
/// February 29 is valid here since some year has it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    month: Month,
    day:   Day,
}

impl MonthDay {
    /// Pairs a month with a day. Not validated.
    pub const fn new(month: Month, day: Day) -> Self {
        Self { month, day }
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the day.
    pub const fn day(self) -> Day {
        self.day
    }

    /// True when some year has this day in this month.
    pub const fn ok(self) -> bool {
        if !self.month.ok() {
            return false;
        }
        let max = if self.month.get() == 2 {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.month.get() as usize]
        };
        MIN_DAY <= self.day.get() && self.day.get() <= max
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COMPOSE_SEPARATOR}{}", self.month, self.day)
    }
}

/// The nth weekday of a month without a year, like "4th Thursday of November".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthWeekday {
    month:           Month,
    weekday_indexed: WeekdayIndexed,
}

impl MonthWeekday {
    /// Not validated; see [`MonthWeekday::ok`].
    pub const fn new(month: Month, weekday_indexed: WeekdayIndexed) -> Self {
        Self { month, weekday_indexed }
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the weekday and its occurrence index.
    pub const fn weekday_indexed(self) -> WeekdayIndexed {
        self.weekday_indexed
    }

    /// True when the month and the occurrence index are in range.
    pub const fn ok(self) -> bool {
        self.month.ok() && self.weekday_indexed.ok()
    }
}

impl fmt::Display for MonthWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COMPOSE_SEPARATOR}{}", self.month, self.weekday_indexed)
    }
}

/// The last weekday of a month without a year, like "last Monday of May".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthWeekdayLast {
    month:        Month,
    weekday_last: WeekdayLast,
}

impl MonthWeekdayLast {
    /// Not validated; see [`MonthWeekdayLast::ok`].
    pub const fn new(month: Month, weekday_last: WeekdayLast) -> Self {
        Self { month, weekday_last }
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the weekday specifier.
    pub const fn weekday_last(self) -> WeekdayLast {
        self.weekday_last
    }

    /// True when the month and weekday are valid.
    pub const fn ok(self) -> bool {
        self.month.ok() && self.weekday_last.ok()
    }
}

impl fmt::Display for MonthWeekdayLast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COMPOSE_SEPARATOR}{}", self.month, self.weekday_last)
    }
}
