//! Fully specified calendar points. Each one converts to and from a
//! [`DayPoint`] and supports month and year arithmetic with carry.
//!
//! Month and year arithmetic never clamps the day: January 31 plus one month
//! is February 31, which is not `ok()`. Use [`YearMonthDayLast`] when "last
//! day of the month" is what is meant.

use crate::DateError;
use crate::civil::{civil_from_days, days_from_civil};
use crate::composite::YearMonth;
use crate::consts::{COMPOSE_SEPARATOR, DATE_SEPARATOR, MAX_WEEKDAY_INDEX};
use crate::day_point::DayPoint;
use crate::indexed::{Last, MonthDayLast, WeekdayIndexed, WeekdayLast};
use crate::types::{Day, Month, Weekday, Year};
use crate::units::{Days, Months, Years};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// Month and year arithmetic for any type that can be split into a `YearMonth`
// and rebuilt with a different one, keeping the day specifier.
macro_rules! impl_calendar_arithmetic {
    ($ty:ty) => {
        impl Add<Months> for $ty {
            type Output = Self;

            fn add(self, rhs: Months) -> Self {
                self.with_year_month(self.year_month() + rhs)
            }
        }

        impl Add<$ty> for Months {
            type Output = $ty;

            fn add(self, rhs: $ty) -> $ty {
                rhs + self
            }
        }

        impl Sub<Months> for $ty {
            type Output = Self;

            fn sub(self, rhs: Months) -> Self {
                self.with_year_month(self.year_month() - rhs)
            }
        }

        impl Add<Years> for $ty {
            type Output = Self;

            fn add(self, rhs: Years) -> Self {
                self.with_year_month(self.year_month() + rhs)
            }
        }

        impl Add<$ty> for Years {
            type Output = $ty;

            fn add(self, rhs: $ty) -> $ty {
                rhs + self
            }
        }

        impl Sub<Years> for $ty {
            type Output = Self;

            fn sub(self, rhs: Years) -> Self {
                self.with_year_month(self.year_month() - rhs)
            }
        }

        impl AddAssign<Months> for $ty {
            fn add_assign(&mut self, rhs: Months) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<Months> for $ty {
            fn sub_assign(&mut self, rhs: Months) {
                *self = *self - rhs;
            }
        }

        impl AddAssign<Years> for $ty {
            fn add_assign(&mut self, rhs: Years) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<Years> for $ty {
            fn sub_assign(&mut self, rhs: Years) {
                *self = *self - rhs;
            }
        }
    };
}

/// A year, month and day of the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonthDay {
    year:  Year,
    month: Month,
    day:   Day,
}

impl YearMonthDay {
    /// Not validated; see [`YearMonthDay::ok`] and [`YearMonthDay::try_new`].
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Builds a date from raw integers, validating every field.
    ///
    /// # Errors
    /// Returns the `DateError` for the first field that is out of range: the
    /// year, then the month, then the day for that month.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let year = Year::try_new(year)?;
        let month = Month::try_new(month)?;
        let ym = YearMonth::new(year, month);
        if day == 0 || day > u32::from(ym.days_in_month()) {
            debug!("rejecting day {day} for {year}-{month}");
            return Err(DateError::DayOutOfRange {
                day,
                year: i32::from(year),
                month: u32::from(month),
            });
        }
        Ok(Self::new(year, month, Day::new(day as u8)))
    }

    /// Returns the year.
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the day.
    pub const fn day(self) -> Day {
        self.day
    }

    /// The year and month without the day.
    pub const fn year_month(self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    const fn with_year_month(self, ym: YearMonth) -> Self {
        Self::new(ym.year(), ym.month(), self.day)
    }

    /// True when the month is valid and the day exists in it.
    pub const fn ok(self) -> bool {
        let ym = self.year_month();
        ym.ok() && 1 <= self.day.get() && self.day.get() <= ym.days_in_month()
    }

    /// Days since 1970-01-01. Exact for every `ok()` date.
    pub const fn to_day_point(self) -> DayPoint {
        DayPoint::new(days_from_civil(
            self.year.get() as i32,
            self.month.get() as u32,
            self.day.get() as u32,
        ))
    }

    /// Civil date of `point`. Years outside the 16-bit range wrap.
    pub const fn from_day_point(point: DayPoint) -> Self {
        let (y, m, d) = civil_from_days(point.count());
        Self::new(Year::new(y as i16), Month::new(m as u8), Day::new(d as u8))
    }

    /// Day of the week.
    pub const fn weekday(self) -> Weekday {
        self.to_day_point().weekday()
    }
}

impl From<DayPoint> for YearMonthDay {
    fn from(point: DayPoint) -> Self {
        Self::from_day_point(point)
    }
}

impl From<YearMonthDay> for DayPoint {
    fn from(ymd: YearMonthDay) -> Self {
        ymd.to_day_point()
    }
}

impl From<YearMonthDayLast> for YearMonthDay {
    fn from(last: YearMonthDayLast) -> Self {
        Self::new(last.year(), last.month(), last.day())
    }
}

impl_calendar_arithmetic!(YearMonthDay);

impl fmt::Display for YearMonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{}",
            self.year,
            self.month.get(),
            self.day
        )
    }
}

/// The last day of a specific month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonthDayLast {
    year:           Year,
    month_day_last: MonthDayLast,
}

impl YearMonthDayLast {
    /// Not validated; see [`YearMonthDayLast::ok`].
    pub const fn new(year: Year, month_day_last: MonthDayLast) -> Self {
        Self { year, month_day_last }
    }

    /// Returns the year.
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month_day_last.month()
    }

    /// Returns the month specifier.
    pub const fn month_day_last(self) -> MonthDayLast {
        self.month_day_last
    }

    /// The year and month.
    pub const fn year_month(self) -> YearMonth {
        YearMonth::new(self.year, self.month())
    }

    const fn with_year_month(self, ym: YearMonth) -> Self {
        Self::new(ym.year(), MonthDayLast::new(ym.month()))
    }

    /// The day number of the last day, including 29 for a leap February.
    pub const fn day(self) -> Day {
        self.month_day_last.day(self.year)
    }

    /// True when the month is in `1..=12`.
    pub const fn ok(self) -> bool {
        self.year.ok() && self.month_day_last.ok()
    }

    /// Day point of the last day of the month.
    pub const fn to_day_point(self) -> DayPoint {
        YearMonthDay::new(self.year, self.month(), self.day()).to_day_point()
    }
}

impl From<YearMonthDayLast> for DayPoint {
    fn from(last: YearMonthDayLast) -> Self {
        last.to_day_point()
    }
}

impl From<YearMonth> for YearMonthDayLast {
    fn from(ym: YearMonth) -> Self {
        Self::new(ym.year(), MonthDayLast::new(ym.month()))
    }
}

impl_calendar_arithmetic!(YearMonthDayLast);

impl fmt::Display for YearMonthDayLast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COMPOSE_SEPARATOR}{}", self.year, self.month_day_last)
    }
}

/// The nth weekday of a specific month, like "2nd Tuesday of November 2021".
///
/// Ordered by year, month, occurrence index and then weekday encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonthWeekday {
    year:            Year,
    month:           Month,
    weekday_indexed: WeekdayIndexed,
}

impl YearMonthWeekday {
    /// Not validated; see [`YearMonthWeekday::ok`] and [`YearMonthWeekday::try_new`].
    pub const fn new(year: Year, month: Month, weekday_indexed: WeekdayIndexed) -> Self {
        Self { year, month, weekday_indexed }
    }

    /// Checked construction. Fails when the occurrence does not exist in the
    /// month, for example a fifth Wednesday in a February with only four.
    ///
    /// # Errors
    /// Returns `DateError::MonthOutOfRange`, `WeekdayOutOfRange` or
    /// `WeekdayIndexOutOfRange` for bad fields, and `DayOutOfRange` with the
    /// computed day number when the occurrence would fall past month end.
    pub fn try_new(
        year: Year,
        month: Month,
        weekday_indexed: WeekdayIndexed,
    ) -> Result<Self, DateError> {
        let month = Month::try_new(u32::from(month))?;
        let weekday = Weekday::try_new(u32::from(weekday_indexed.weekday()))?;
        let weekday_indexed = weekday.try_nth(u32::from(weekday_indexed.index()))?;
        let ymw = Self::new(year, month, weekday_indexed);
        let day = ymw.day_unchecked();
        if day > u32::from(ymw.year_month().days_in_month()) {
            debug!("no {weekday_indexed} in {year}-{month}");
            return Err(DateError::DayOutOfRange {
                day,
                year: i32::from(year),
                month: u32::from(month),
            });
        }
        Ok(ymw)
    }

    /// Returns the year.
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the weekday.
    pub const fn weekday(self) -> Weekday {
        self.weekday_indexed.weekday()
    }

    /// Returns the occurrence index, 1-based.
    pub const fn index(self) -> u8 {
        self.weekday_indexed.index()
    }

    /// Returns the weekday and its occurrence index.
    pub const fn weekday_indexed(self) -> WeekdayIndexed {
        self.weekday_indexed
    }

    /// The year and month.
    pub const fn year_month(self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    const fn with_year_month(self, ym: YearMonth) -> Self {
        Self::new(ym.year(), ym.month(), self.weekday_indexed)
    }

    /// Day of the month the occurrence lands on, which may exceed the month
    /// length for a missing fifth occurrence.
    fn day_unchecked(self) -> u32 {
        let first = YearMonthDay::new(self.year, self.month, Day::new(1)).weekday();
        let offset = self.weekday() - first;
        offset.count() as u32 + (u32::from(self.index()) - 1) * 7 + 1
    }

    /// True when the fields are in range and the occurrence exists in the month.
    pub fn ok(self) -> bool {
        if !self.year_month().ok() || !self.weekday_indexed.ok() {
            return false;
        }
        if self.index() < MAX_WEEKDAY_INDEX {
            return true;
        }
        self.day_unchecked() <= u32::from(self.year_month().days_in_month())
    }

    /// Day point of the occurrence. Past month end for a missing fifth occurrence.
    pub fn to_day_point(self) -> DayPoint {
        let first = YearMonthDay::new(self.year, self.month, Day::new(1)).to_day_point();
        let offset = self.weekday() - first.weekday();
        first + offset + Days::new((i32::from(self.index()) - 1) * 7)
    }

    /// The occurrence `point` falls on: its weekday and which week of the month.
    pub fn from_day_point(point: DayPoint) -> Self {
        let ymd = YearMonthDay::from_day_point(point);
        let index = (ymd.day().get() - 1) / 7 + 1;
        Self::new(ymd.year(), ymd.month(), point.weekday().nth(index))
    }
}

impl From<DayPoint> for YearMonthWeekday {
    fn from(point: DayPoint) -> Self {
        Self::from_day_point(point)
    }
}

impl From<YearMonthWeekday> for DayPoint {
    fn from(ymw: YearMonthWeekday) -> Self {
        ymw.to_day_point()
    }
}

impl_calendar_arithmetic!(YearMonthWeekday);

impl fmt::Display for YearMonthWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{COMPOSE_SEPARATOR}{}{COMPOSE_SEPARATOR}{}",
            self.year, self.month, self.weekday_indexed
        )
    }
}

/// The last weekday of a specific month, like "last Monday of May 2021".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonthWeekdayLast {
    year:         Year,
    month:        Month,
    weekday_last: WeekdayLast,
}

impl YearMonthWeekdayLast {
    /// Not validated; see [`YearMonthWeekdayLast::ok`].
    pub const fn new(year: Year, month: Month, weekday_last: WeekdayLast) -> Self {
        Self { year, month, weekday_last }
    }

    /// Returns the year.
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month.
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the weekday.
    pub const fn weekday(self) -> Weekday {
        self.weekday_last.weekday()
    }

    /// Returns the weekday specifier.
    pub const fn weekday_last(self) -> WeekdayLast {
        self.weekday_last
    }

    /// The year and month.
    pub const fn year_month(self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    const fn with_year_month(self, ym: YearMonth) -> Self {
        Self::new(ym.year(), ym.month(), self.weekday_last)
    }

    /// True when the month and weekday are valid.
    pub const fn ok(self) -> bool {
        self.year_month().ok() && self.weekday_last.ok()
    }

    /// Day point of the last such weekday in the month.
    pub fn to_day_point(self) -> DayPoint {
        let last = YearMonthDayLast::new(self.year, MonthDayLast::new(self.month)).to_day_point();
        last - (last.weekday() - self.weekday())
    }
}

impl From<YearMonthWeekdayLast> for DayPoint {
    fn from(ymwl: YearMonthWeekdayLast) -> Self {
        ymwl.to_day_point()
    }
}

impl_calendar_arithmetic!(YearMonthWeekdayLast);

impl fmt::Display for YearMonthWeekdayLast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{COMPOSE_SEPARATOR}{}{COMPOSE_SEPARATOR}{}",
            self.year, self.month, self.weekday_last
        )
    }
}

impl From<(YearMonth, Last)> for YearMonthDayLast {
    fn from((ym, Last): (YearMonth, Last)) -> Self {
        ym.into()
    }
}
