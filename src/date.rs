//! A validated, mutable calendar date.
//!
//! [`Date`] is always a real day in years `-32768..=32767`. It remembers how
//! its day was specified, so month and year arithmetic can keep meaning "the
//! last day" or "the second Tuesday" in the target month.
//!
//! How the date is held in memory is a type parameter. All three strategies
//! produce identical results; they differ only in which reads and writes pay
//! for a civil conversion:
//!
//! | Strategy     | Stores                   | Field read | `+= Days`                   |
//! |--------------|--------------------------|------------|-----------------------------|
//! | [`DualCache`]| fields and day point     | free       | add, convert to fields      |
//! | [`DayCount`] | day point                | convert    | add                         |
//! | [`Fields`]   | fields                   | free       | convert, add, convert back  |

use crate::DateError;
use crate::clock::{SystemClock, WallClock};
use crate::composite::YearMonth;
use crate::day_point::DayPoint;
use crate::indexed::{Last, WeekdayIndexed, WeekdayLast};
use crate::types::{Day, Month, Weekday, Year};
use crate::units::{Days, Months, Weeks, Years};
use crate::ymd::{YearMonthDay, YearMonthDayLast, YearMonthWeekday, YearMonthWeekdayLast};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// How the day of a [`Date`] was specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaySpec {
    /// A plain day of the month.
    Fixed(Day),
    /// The last day of the month.
    Last,
    /// The nth occurrence of a weekday in the month.
    NthWeekday(WeekdayIndexed),
    /// The last occurrence of a weekday in the month.
    LastWeekday(Weekday),
}

impl DaySpec {
    /// Finds the day this spec names in `year`-`month`, validating as it goes.
    fn resolve(self, year: Year, month: Month) -> Result<YearMonthDay, DateError> {
        let month = Month::try_new(u32::from(month))?;
        match self {
            Self::Fixed(day) => {
                YearMonthDay::try_new(i32::from(year), u32::from(month), u32::from(day))
            }
            Self::Last => {
                let last = YearMonthDayLast::from(YearMonth::new(year, month));
                Ok(YearMonthDay::from(last))
            }
            Self::NthWeekday(wdi) => {
                let ymw = YearMonthWeekday::try_new(year, month, wdi)?;
                Ok(YearMonthDay::from(ymw.to_day_point()))
            }
            Self::LastWeekday(weekday) => {
                let weekday = Weekday::try_new(u32::from(weekday))?;
                let ymwl = YearMonthWeekdayLast::new(year, month, weekday.last());
                Ok(YearMonthDay::from(ymwl.to_day_point()))
            }
        }
    }

    /// Same as [`DaySpec::resolve`] without any checks. Garbage in, garbage out.
    fn resolve_unchecked(self, year: Year, month: Month) -> YearMonthDay {
        match self {
            Self::Fixed(day) => YearMonthDay::new(year, month, day),
            Self::Last => YearMonthDay::from(YearMonthDayLast::from(YearMonth::new(year, month))),
            Self::NthWeekday(wdi) => {
                YearMonthDay::from(YearMonthWeekday::new(year, month, wdi).to_day_point())
            }
            Self::LastWeekday(weekday) => YearMonthDay::from(
                YearMonthWeekdayLast::new(year, month, weekday.last()).to_day_point(),
            ),
        }
    }
}

impl Default for DaySpec {
    fn default() -> Self {
        Self::Fixed(Day::new(1))
    }
}

impl From<Day> for DaySpec {
    fn from(day: Day) -> Self {
        Self::Fixed(day)
    }
}

impl From<Last> for DaySpec {
    fn from(_: Last) -> Self {
        Self::Last
    }
}

impl From<WeekdayIndexed> for DaySpec {
    fn from(wdi: WeekdayIndexed) -> Self {
        Self::NthWeekday(wdi)
    }
}

impl From<WeekdayLast> for DaySpec {
    fn from(wdl: WeekdayLast) -> Self {
        Self::LastWeekday(wdl.weekday())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::DualCache {}
    impl Sealed for super::DayCount {}
    impl Sealed for super::Fields {}
}

/// In-memory representation of a [`Date`].
///
/// Implementations are only ever handed valid dates, and must keep
/// [`Storage::day_point`] and [`Storage::fields`] describing the same day.
pub trait Storage: sealed::Sealed + Copy + fmt::Debug {
    fn from_fields(fields: YearMonthDay) -> Self;
    fn from_day_point(point: DayPoint) -> Self;
    fn fields(&self) -> YearMonthDay;
    fn day_point(&self) -> DayPoint;

    /// Moves the date by `days`.
    ///
    /// # Errors
    /// Returns `DateError::DayPointOutOfRange` if the result leaves the
    /// representable years. `self` is unchanged in that case.
    fn add_days(&mut self, days: Days) -> Result<(), DateError>;
}

/// Keeps both the civil fields and the day point, rewriting both on every
/// change. Every read is free.
#[derive(Debug, Clone, Copy)]
pub struct DualCache {
    fields: YearMonthDay,
    point:  DayPoint,
}

impl Storage for DualCache {
    fn from_fields(fields: YearMonthDay) -> Self {
        Self { fields, point: fields.to_day_point() }
    }

    fn from_day_point(point: DayPoint) -> Self {
        Self { fields: YearMonthDay::from(point), point }
    }

    fn fields(&self) -> YearMonthDay {
        self.fields
    }

    fn day_point(&self) -> DayPoint {
        self.point
    }

    fn add_days(&mut self, days: Days) -> Result<(), DateError> {
        *self = Self::from_day_point(self.point.checked_add(days)?);
        Ok(())
    }
}

/// Keeps only the day point and derives the fields on every read.
#[derive(Debug, Clone, Copy)]
pub struct DayCount {
    point: DayPoint,
}

impl Storage for DayCount {
    fn from_fields(fields: YearMonthDay) -> Self {
        Self { point: fields.to_day_point() }
    }

    fn from_day_point(point: DayPoint) -> Self {
        Self { point }
    }

    fn fields(&self) -> YearMonthDay {
        YearMonthDay::from(self.point)
    }

    fn day_point(&self) -> DayPoint {
        self.point
    }

    fn add_days(&mut self, days: Days) -> Result<(), DateError> {
        self.point = self.point.checked_add(days)?;
        Ok(())
    }
}

/// Keeps only the civil fields and derives the day point when needed.
#[derive(Debug, Clone, Copy)]
pub struct Fields {
    fields: YearMonthDay,
}

impl Storage for Fields {
    fn from_fields(fields: YearMonthDay) -> Self {
        Self { fields }
    }

    fn from_day_point(point: DayPoint) -> Self {
        Self { fields: YearMonthDay::from(point) }
    }

    fn fields(&self) -> YearMonthDay {
        self.fields
    }

    fn day_point(&self) -> DayPoint {
        self.fields.to_day_point()
    }

    fn add_days(&mut self, days: Days) -> Result<(), DateError> {
        // Always derived from the current fields; nothing else is cached.
        let point = self.fields.to_day_point().checked_add(days)?;
        self.fields = YearMonthDay::from(point);
        Ok(())
    }
}

/// A valid calendar date in years `-32768..=32767`.
///
/// Equality, ordering and hashing go by the day alone; two dates naming the
/// same day through different [`DaySpec`]s are equal.
///
/// The arithmetic operators panic when the result would leave the supported
/// years or name a day that does not exist. Use the `checked_*` methods to
/// get a `Result` instead.
#[derive(Clone, Copy)]
pub struct Date<S: Storage = DualCache> {
    storage: S,
    spec:    DaySpec,
}

/// A [`Date`] that caches both fields and day point.
pub type CachedDate = Date<DualCache>;
/// A [`Date`] that stores only its day point.
pub type DayCountDate = Date<DayCount>;
/// A [`Date`] that stores only its fields.
pub type FieldsDate = Date<Fields>;

impl<S: Storage> Date<S> {
    /// Builds a date from raw values, validating all of them.
    ///
    /// ```
    /// use civil_date::{CachedDate, Day, LAST, TUESDAY};
    ///
    /// let second_tuesday = CachedDate::try_new(2021, 11, TUESDAY.nth(2)).unwrap();
    /// assert_eq!(second_tuesday.day(), Day::new(9));
    ///
    /// let end_of_feb = CachedDate::try_new(2024, 2, LAST).unwrap();
    /// assert_eq!(end_of_feb.day(), Day::new(29));
    /// ```
    ///
    /// # Errors
    /// Returns `DateError` when the year or month is out of range, the fixed
    /// day does not exist in the month, or the requested nth weekday does not
    /// exist in the month.
    pub fn try_new(year: i32, month: u32, day: impl Into<DaySpec>) -> Result<Self, DateError> {
        let year = Year::try_new(year)?;
        let month = Month::try_new(month)?;
        let spec = day.into();
        let fields = spec.resolve(year, month)?;
        Ok(Self { storage: S::from_fields(fields), spec })
    }

    /// Builds a date without validating anything.
    ///
    /// The caller promises the values name a real day. Every other method
    /// assumes that, so breaking the promise gives meaningless results.
    pub fn new_unchecked(year: Year, month: Month, day: impl Into<DaySpec>) -> Self {
        let spec = day.into();
        let fields = spec.resolve_unchecked(year, month);
        Self { storage: S::from_fields(fields), spec }
    }

    /// The date for `point`.
    ///
    /// # Errors
    /// Returns `DateError::DayPointOutOfRange` if `point` lies outside the
    /// supported years.
    pub fn from_day_point(point: DayPoint) -> Result<Self, DateError> {
        let point = DayPoint::try_new(i64::from(point.count()))?;
        let storage = S::from_day_point(point);
        Ok(Self { spec: DaySpec::Fixed(storage.fields().day()), storage })
    }

    /// Today's date in UTC, read from the system clock.
    pub fn today() -> Self {
        Self::today_with(&SystemClock)
    }

    /// Today's date as reported by `clock`.
    pub fn today_with<C: WallClock + ?Sized>(clock: &C) -> Self {
        let ymd = clock.today();
        Self::new_unchecked(ymd.year(), ymd.month(), ymd.day())
    }

    /// Year field.
    pub fn year(&self) -> Year {
        self.storage.fields().year()
    }

    /// Month field.
    pub fn month(&self) -> Month {
        self.storage.fields().month()
    }

    /// Day of the month, whatever the day spec.
    pub fn day(&self) -> Day {
        self.storage.fields().day()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.storage.day_point().weekday()
    }

    /// True when the date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.year().is_leap()
    }

    /// How the day was specified. Reset to [`DaySpec::Fixed`] by day arithmetic.
    pub const fn day_spec(&self) -> DaySpec {
        self.spec
    }

    /// Days since 1970-01-01.
    pub fn day_point(&self) -> DayPoint {
        self.storage.day_point()
    }

    /// The civil fields as a plain value.
    pub fn year_month_day(&self) -> YearMonthDay {
        self.storage.fields()
    }

    /// The same date held by a different storage strategy.
    pub fn with_storage<T: Storage>(self) -> Date<T> {
        Date { storage: T::from_fields(self.storage.fields()), spec: self.spec }
    }

    fn with_fixed_spec(mut self) -> Self {
        self.spec = DaySpec::Fixed(self.storage.fields().day());
        self
    }

    /// # Errors
    /// Returns `DateError::DayPointOutOfRange` if the result would leave the
    /// supported years.
    pub fn checked_add_days(mut self, days: Days) -> Result<Self, DateError> {
        self.storage.add_days(days)?;
        let date = self.with_fixed_spec();
        trace!("moved by {days} to {date}");
        Ok(date)
    }

    /// # Errors
    /// See [`Date::checked_add_days`].
    pub fn checked_sub_days(self, days: Days) -> Result<Self, DateError> {
        self.checked_add_days(-days)
    }

    /// Moves by whole months, re-resolving the day spec in the target month.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the year leaves the supported
    /// range, or `DateError::DayOutOfRange` if a fixed day or nth weekday
    /// does not exist in the target month.
    pub fn checked_add_months(self, months: Months) -> Result<Self, DateError> {
        let (month, carry) = self.month().add_with_carry(months);
        let year = Year::try_new(i32::from(self.year()).saturating_add(carry))?;
        self.respecified(year, month)
    }

    /// # Errors
    /// See [`Date::checked_add_months`].
    pub fn checked_sub_months(self, months: Months) -> Result<Self, DateError> {
        self.checked_add_months(-months)
    }

    /// Moves by whole years, re-resolving the day spec in the target year.
    ///
    /// # Errors
    /// Same as [`Date::checked_add_months`].
    pub fn checked_add_years(self, years: Years) -> Result<Self, DateError> {
        let year = Year::try_new(i32::from(self.year()).saturating_add(years.count()))?;
        self.respecified(year, self.month())
    }

    /// # Errors
    /// See [`Date::checked_add_years`].
    pub fn checked_sub_years(self, years: Years) -> Result<Self, DateError> {
        self.checked_add_years(-years)
    }

    fn respecified(self, year: Year, month: Month) -> Result<Self, DateError> {
        let fields = self.spec.resolve(year, month)?;
        let date = Self { storage: S::from_fields(fields), spec: self.spec };
        trace!("re-resolved {:?} to {date}", self.spec);
        Ok(date)
    }
}

impl<S: Storage> Default for Date<S> {
    /// January 1st of year zero.
    fn default() -> Self {
        Self::new_unchecked(Year::new(0), Month::new(1), Day::new(1))
    }
}

impl<S: Storage> fmt::Debug for Date<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Date")
            .field("storage", &self.storage)
            .field("spec", &self.spec)
            .finish()
    }
}

impl<S: Storage> fmt::Display for Date<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage.fields(), f)
    }
}

impl<S: Storage> PartialEq for Date<S> {
    fn eq(&self, other: &Self) -> bool {
        self.day_point() == other.day_point()
    }
}

impl<S: Storage> Eq for Date<S> {}

impl<S: Storage> PartialOrd for Date<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Storage> Ord for Date<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day_point().cmp(&other.day_point())
    }
}

impl<S: Storage> Hash for Date<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.day_point().hash(state);
    }
}

impl<S: Storage> From<Date<S>> for DayPoint {
    fn from(date: Date<S>) -> Self {
        date.day_point()
    }
}

impl<S: Storage> From<Date<S>> for YearMonthDay {
    fn from(date: Date<S>) -> Self {
        date.year_month_day()
    }
}

impl<S: Storage> TryFrom<DayPoint> for Date<S> {
    type Error = DateError;

    fn try_from(point: DayPoint) -> Result<Self, Self::Error> {
        Self::from_day_point(point)
    }
}

impl<S: Storage> TryFrom<YearMonthDay> for Date<S> {
    type Error = DateError;

    fn try_from(ymd: YearMonthDay) -> Result<Self, Self::Error> {
        Self::try_new(i32::from(ymd.year()), u32::from(ymd.month()), ymd.day())
    }
}

impl<S: Storage> TryFrom<YearMonthDayLast> for Date<S> {
    type Error = DateError;

    fn try_from(ymdl: YearMonthDayLast) -> Result<Self, Self::Error> {
        Self::try_new(i32::from(ymdl.year()), u32::from(ymdl.month()), Last)
    }
}

impl<S: Storage> TryFrom<YearMonthWeekday> for Date<S> {
    type Error = DateError;

    fn try_from(ymw: YearMonthWeekday) -> Result<Self, Self::Error> {
        Self::try_new(i32::from(ymw.year()), u32::from(ymw.month()), ymw.weekday_indexed())
    }
}

impl<S: Storage> TryFrom<YearMonthWeekdayLast> for Date<S> {
    type Error = DateError;

    fn try_from(ymwl: YearMonthWeekdayLast) -> Result<Self, Self::Error> {
        Self::try_new(i32::from(ymwl.year()), u32::from(ymwl.month()), ymwl.weekday_last())
    }
}

// Operator forms of the checked arithmetic. They panic on failure, the way
// integer overflow does in debug builds.
macro_rules! date_operators {
    ($unit:ty, $add:ident, $sub:ident) => {
        impl<S: Storage> Add<$unit> for Date<S> {
            type Output = Self;

            /// # Panics
            /// If the result is not a representable date.
            fn add(self, rhs: $unit) -> Self {
                match self.$add(rhs) {
                    Ok(date) => date,
                    Err(err) => panic!("{self} + {rhs}: {err}"),
                }
            }
        }

        impl<S: Storage> Add<Date<S>> for $unit {
            type Output = Date<S>;

            fn add(self, rhs: Date<S>) -> Date<S> {
                rhs + self
            }
        }

        impl<S: Storage> Sub<$unit> for Date<S> {
            type Output = Self;

            /// # Panics
            /// If the result is not a representable date.
            fn sub(self, rhs: $unit) -> Self {
                match self.$sub(rhs) {
                    Ok(date) => date,
                    Err(err) => panic!("{self} - {rhs}: {err}"),
                }
            }
        }

        impl<S: Storage> AddAssign<$unit> for Date<S> {
            fn add_assign(&mut self, rhs: $unit) {
                *self = *self + rhs;
            }
        }

        impl<S: Storage> SubAssign<$unit> for Date<S> {
            fn sub_assign(&mut self, rhs: $unit) {
                *self = *self - rhs;
            }
        }
    };
}

date_operators!(Days, checked_add_days, checked_sub_days);
date_operators!(Months, checked_add_months, checked_sub_months);
date_operators!(Years, checked_add_years, checked_sub_years);

impl<S: Storage> Add<Weeks> for Date<S> {
    type Output = Self;

    fn add(self, rhs: Weeks) -> Self {
        self + Days::from(rhs)
    }
}

impl<S: Storage> Sub<Weeks> for Date<S> {
    type Output = Self;

    fn sub(self, rhs: Weeks) -> Self {
        self - Days::from(rhs)
    }
}

impl<S: Storage> Sub for Date<S> {
    type Output = Days;

    fn sub(self, rhs: Self) -> Days {
        self.day_point() - rhs.day_point()
    }
}

/// Serialized form of a [`Date`]: the fields plus the day spec.
#[derive(Serialize, Deserialize)]
struct DateRepr {
    year:  Year,
    month: Month,
    day:   DaySpec,
}

impl<S: Storage> Serialize for Date<S> {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        DateRepr { year: self.year(), month: self.month(), day: self.spec }.serialize(serializer)
    }
}

impl<'de, S: Storage> Deserialize<'de> for Date<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = DateRepr::deserialize(deserializer)?;
        Self::try_new(i32::from(repr.year), u32::from(repr.month), repr.day)
            .map_err(serde::de::Error::custom)
    }
}
