use crate::DateError;
use crate::civil::{floor_div_i64, is_leap_year};
use crate::consts::{MAX_DAY, MAX_MONTH, MAX_WEEKDAY, MAX_WEEKDAY_INDEX, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::indexed::{WeekdayIndexed, WeekdayLast};
use crate::units::{Days, Months, Years};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A day of the month, `1..=31` when valid.
///
/// Construction never fails and never looks at a month, so `Day::new(31)` is
/// fine even if it ends up paired with February. Use [`Day::ok`] for the
/// context-free range check and the composite types for the real one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Day(u8);

impl Day {
    /// Wraps any value. Use [`Day::ok`] to check it.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True for `1..=31`.
    pub const fn ok(self) -> bool {
        MIN_DAY <= self.0 && self.0 <= MAX_DAY
    }

    /// Next day number. Wraps at the storage boundary, not at 31.
    #[must_use]
    pub const fn succ(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Previous day number. Wraps at the storage boundary.
    #[must_use]
    pub const fn pred(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl From<Day> for u32 {
    fn from(day: Day) -> Self {
        Self::from(day.0)
    }
}

impl Add<Days> for Day {
    type Output = Self;

    fn add(self, rhs: Days) -> Self {
        Self(self.0.wrapping_add(rhs.count() as u8))
    }
}

impl Add<Day> for Days {
    type Output = Day;

    fn add(self, rhs: Day) -> Day {
        rhs + self
    }
}

impl Sub<Days> for Day {
    type Output = Self;

    fn sub(self, rhs: Days) -> Self {
        self + -rhs
    }
}

impl Sub for Day {
    type Output = Days;

    fn sub(self, rhs: Self) -> Days {
        Days::new(i32::from(self.0) - i32::from(rhs.0))
    }
}

impl AddAssign<Days> for Day {
    fn add_assign(&mut self, rhs: Days) {
        *self = *self + rhs;
    }
}

impl SubAssign<Days> for Day {
    fn sub_assign(&mut self, rhs: Days) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A month of the year, `1..=12` when valid.
///
/// Arithmetic with [`Months`] wraps around the year without carrying into
/// any year; the composite types apply the carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Month {
    /// Wraps any value. Use [`Month::ok`] or [`Month::try_new`] to check it.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Checked construction.
    ///
    /// # Errors
    /// Returns `DateError::MonthOutOfRange` unless `value` is in `1..=12`.
    pub fn try_new(value: u32) -> Result<Self, DateError> {
        if value == 0 || value > u32::from(MAX_MONTH) {
            debug!("rejecting month {value}");
            return Err(DateError::MonthOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True for `1..=12`.
    pub const fn ok(self) -> bool {
        1 <= self.0 && self.0 <= MAX_MONTH
    }

    /// Next month; December wraps to January.
    #[must_use]
    pub fn succ(self) -> Self {
        self + Months::new(1)
    }

    /// Previous month; January wraps to December.
    #[must_use]
    pub fn pred(self) -> Self {
        self - Months::new(1)
    }

    /// Adds `delta` months and returns the wrapped month together with the
    /// number of whole years crossed (negative when going backwards).
    pub(crate) fn add_with_carry(self, delta: Months) -> (Self, i32) {
        let zero_based = i64::from(self.0) - 1 + i64::from(delta.count());
        let years = floor_div_i64(zero_based, 12);
        let month = zero_based - years * 12 + 1;
        (Self(month as u8), years as i32)
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(u32::from(value))
    }
}

impl TryFrom<u32> for Month {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        Self::from(month.0)
    }
}

impl Add<Months> for Month {
    type Output = Self;

    fn add(self, rhs: Months) -> Self {
        self.add_with_carry(rhs).0
    }
}

impl Add<Month> for Months {
    type Output = Month;

    fn add(self, rhs: Month) -> Month {
        rhs + self
    }
}

impl Sub<Months> for Month {
    type Output = Self;

    fn sub(self, rhs: Months) -> Self {
        self + -rhs
    }
}

impl Sub for Month {
    type Output = Months;

    /// Forward distance from `rhs` to `self`, always in `0..=11`.
    fn sub(self, rhs: Self) -> Months {
        Months::new((i32::from(self.0) - i32::from(rhs.0)).rem_euclid(12))
    }
}

impl AddAssign<Months> for Month {
    fn add_assign(&mut self, rhs: Months) {
        *self = *self + rhs;
    }
}

impl SubAssign<Months> for Month {
    fn sub_assign(&mut self, rhs: Months) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok() {
            f.write_str(MONTH_NAMES[usize::from(self.0 - 1)])
        } else {
            write!(f, "{} is not a valid month", self.0)
        }
    }
}

/// A proleptic Gregorian year in `[-32768, 32767]`.
///
/// Every `i16` is a valid year. Year arithmetic does not wrap like months do;
/// it only wraps at the edge of the storage type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(i16);

impl Year {
    /// -32768
    pub const MIN: Self = Self(i16::MIN);
    /// 32767
    pub const MAX: Self = Self(i16::MAX);

    /// Wraps an `i16`; every value is a valid year.
    pub const fn new(value: i16) -> Self {
        Self(value)
    }

    /// Checked construction from a wider integer.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if `value` is outside `[-32768, 32767]`.
    pub fn try_new(value: i32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            debug!("rejecting year {value}");
            return Err(DateError::YearOutOfRange(value));
        }
        Ok(Self(value as i16))
    }

    /// Returns the year value as i16
    #[inline]
    pub const fn get(self) -> i16 {
        self.0
    }

    /// Always true; every representable year is valid.
    pub const fn ok(self) -> bool {
        true
    }

    /// Gregorian leap rule.
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0 as i32)
    }

    #[must_use]
    pub const fn succ(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn pred(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }
}

impl TryFrom<i32> for Year {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<i16> for Year {
    fn from(value: i16) -> Self {
        Self(value)
    }
}

impl From<Year> for i16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        Self::from(year.0)
    }
}

impl Add<Years> for Year {
    type Output = Self;

    fn add(self, rhs: Years) -> Self {
        Self(self.0.wrapping_add(rhs.count() as i16))
    }
}

impl Add<Year> for Years {
    type Output = Year;

    fn add(self, rhs: Year) -> Year {
        rhs + self
    }
}

impl Sub<Years> for Year {
    type Output = Self;

    fn sub(self, rhs: Years) -> Self {
        self + -rhs
    }
}

impl Sub for Year {
    type Output = Years;

    fn sub(self, rhs: Self) -> Years {
        Years::new(i32::from(self.0) - i32::from(rhs.0))
    }
}

impl AddAssign<Years> for Year {
    fn add_assign(&mut self, rhs: Years) {
        *self = *self + rhs;
    }
}

impl SubAssign<Years> for Year {
    fn sub_assign(&mut self, rhs: Years) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Four digits, plus one for the sign of negative years.
        let width = if self.0 < 0 { 5 } else { 4 };
        write!(f, "{:0width$}", self.0)
    }
}

/// A day of the week, Sunday = 0 through Saturday = 6.
///
/// Weekdays are cyclic and deliberately have no ordering. `a - b` is the
/// number of days forward from `b` to the next `a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl Weekday {
    /// Wraps any value. Use [`Weekday::ok`] or [`Weekday::try_new`] to check it.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Checked construction.
    ///
    /// # Errors
    /// Returns `DateError::WeekdayOutOfRange` unless `value` is in `0..=6`.
    pub fn try_new(value: u32) -> Result<Self, DateError> {
        if value > u32::from(MAX_WEEKDAY) {
            debug!("rejecting weekday {value}");
            return Err(DateError::WeekdayOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the weekday encoding as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True for `0..=6`.
    pub const fn ok(self) -> bool {
        self.0 <= MAX_WEEKDAY
    }

    /// Next weekday; Saturday wraps to Sunday.
    #[must_use]
    pub fn succ(self) -> Self {
        self + Days::new(1)
    }

    /// Previous weekday; Sunday wraps to Saturday.
    #[must_use]
    pub fn pred(self) -> Self {
        self - Days::new(1)
    }

    /// The `index`th occurrence of this weekday in a month, `1..=5` when
    /// valid. Not checked here.
    pub const fn nth(self, index: u8) -> WeekdayIndexed {
        WeekdayIndexed::new(self, index)
    }

    /// Checked variant of [`Weekday::nth`].
    ///
    /// # Errors
    /// Returns `DateError::WeekdayIndexOutOfRange` unless `index` is in `1..=5`.
    pub fn try_nth(self, index: u32) -> Result<WeekdayIndexed, DateError> {
        if index == 0 || index > u32::from(MAX_WEEKDAY_INDEX) {
            debug!("rejecting weekday index {index}");
            return Err(DateError::WeekdayIndexOutOfRange(index));
        }
        Ok(WeekdayIndexed::new(self, index as u8))
    }

    /// The last occurrence of this weekday in a month.
    pub const fn last(self) -> WeekdayLast {
        WeekdayLast::new(self)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(u32::from(value))
    }
}

impl TryFrom<u32> for Weekday {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.0
    }
}

impl From<Weekday> for u32 {
    fn from(weekday: Weekday) -> Self {
        Self::from(weekday.0)
    }
}

impl Add<Days> for Weekday {
    type Output = Self;

    fn add(self, rhs: Days) -> Self {
        let shifted = i64::from(self.0) + i64::from(rhs.count());
        let weeks = floor_div_i64(shifted, 7);
        Self((shifted - weeks * 7) as u8)
    }
}

impl Add<Weekday> for Days {
    type Output = Weekday;

    fn add(self, rhs: Weekday) -> Weekday {
        rhs + self
    }
}

impl Sub<Days> for Weekday {
    type Output = Self;

    fn sub(self, rhs: Days) -> Self {
        self + -rhs
    }
}

impl Sub for Weekday {
    type Output = Days;

    /// Days forward from `rhs` to `self`, always in `0..=6`.
    fn sub(self, rhs: Self) -> Days {
        Days::new((i32::from(self.0) - i32::from(rhs.0)).rem_euclid(7))
    }
}

impl AddAssign<Days> for Weekday {
    fn add_assign(&mut self, rhs: Days) {
        *self = *self + rhs;
    }
}

impl SubAssign<Days> for Weekday {
    fn sub_assign(&mut self, rhs: Days) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok() {
            f.write_str(WEEKDAY_NAMES[usize::from(self.0)])
        } else {
            write!(f, "{} is not a valid weekday", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{
        DECEMBER, FEBRUARY, JANUARY, MONDAY, NOVEMBER, SATURDAY, SUNDAY, THURSDAY, TUESDAY,
        WEDNESDAY,
    };

    #[test]
    fn test_day_ok() {
        assert!(!Day::new(0).ok());
        assert!(Day::new(1).ok());
        assert!(Day::new(31).ok());
        assert!(!Day::new(32).ok());
    }

    #[test]
    fn test_day_arithmetic() {
        assert_eq!(Day::new(10) + Days::new(5), Day::new(15));
        assert_eq!(Days::new(5) + Day::new(10), Day::new(15));
        assert_eq!(Day::new(10) - Days::new(3), Day::new(7));
        assert_eq!(Day::new(10) - Day::new(3), Days::new(7));
        assert_eq!(Day::new(3) - Day::new(10), Days::new(-7));

        let mut day = Day::new(30);
        day += Days::new(2);
        assert_eq!(day, Day::new(32), "day arithmetic is month-agnostic");
        assert!(!day.ok());
        day -= Days::new(31);
        assert_eq!(day, Day::new(1));
    }

    #[test]
    fn test_day_succ_pred() {
        assert_eq!(Day::new(31).succ(), Day::new(32));
        assert_eq!(Day::new(1).pred(), Day::new(0));
    }

    #[test]
    fn test_day_display() {
        assert_eq!(Day::new(7).to_string(), "07");
        assert_eq!(Day::new(15).to_string(), "15");
    }

    #[test]
    fn test_month_try_new() {
        for m in 1..=12 {
            assert!(Month::try_new(m).is_ok(), "Month {m} should be valid");
        }
        assert_eq!(Month::try_new(0), Err(DateError::MonthOutOfRange(0)));
        assert_eq!(Month::try_new(13), Err(DateError::MonthOutOfRange(13)));

        let result: Result<Month, _> = 255u8.try_into();
        assert_eq!(result, Err(DateError::MonthOutOfRange(255)));
    }

    #[test]
    fn test_month_unchecked_is_representable() {
        let month = Month::new(13);
        assert!(!month.ok());
        assert_eq!(month.get(), 13);
        assert_eq!(month.to_string(), "13 is not a valid month");
    }

    #[test]
    fn test_month_add_cases() {
        struct TestCase {
            month:    u8,
            delta:    i32,
            expected: u8,
            carry:    i32,
        }

        let cases = [
            TestCase { month: 1, delta: 0, expected: 1, carry: 0 },
            TestCase { month: 1, delta: 11, expected: 12, carry: 0 },
            TestCase { month: 12, delta: 1, expected: 1, carry: 1 },
            TestCase { month: 1, delta: 13, expected: 2, carry: 1 },
            TestCase { month: 1, delta: -1, expected: 12, carry: -1 },
            TestCase { month: 3, delta: -14, expected: 1, carry: -1 },
            TestCase { month: 3, delta: -15, expected: 12, carry: -2 },
            TestCase { month: 6, delta: 1_200, expected: 6, carry: 100 },
        ];

        for case in &cases {
            let (month, carry) = Month::new(case.month).add_with_carry(Months::new(case.delta));
            assert_eq!(month.get(), case.expected, "{} + {}", case.month, case.delta);
            assert_eq!(carry, case.carry, "{} + {}", case.month, case.delta);
            assert_eq!(Month::new(case.month) + Months::new(case.delta), month);
        }
    }

    #[test]
    fn test_month_wraps() {
        assert_eq!(DECEMBER.succ(), JANUARY);
        assert_eq!(JANUARY.pred(), DECEMBER);
        assert_eq!(NOVEMBER + Months::new(2), JANUARY);
        assert_eq!(Months::new(2) + NOVEMBER, JANUARY);
        assert_eq!(FEBRUARY - Months::new(3), NOVEMBER);

        let mut month = JANUARY;
        month -= Months::new(1);
        assert_eq!(month, DECEMBER);
        month += Months::new(2);
        assert_eq!(month, FEBRUARY);
    }

    #[test]
    fn test_month_difference_is_forward_distance() {
        assert_eq!(FEBRUARY - JANUARY, Months::new(1));
        assert_eq!(JANUARY - FEBRUARY, Months::new(11));
        assert_eq!(JANUARY - DECEMBER, Months::new(1));
        assert_eq!(JANUARY - JANUARY, Months::new(0));

        for a in 1..=12 {
            for b in 1..=12 {
                let (a, b) = (Month::new(a), Month::new(b));
                let diff = a - b;
                assert!((0..=11).contains(&diff.count()));
                assert_eq!(b + diff, a);
            }
        }
    }

    #[test]
    fn test_month_display() {
        assert_eq!(JANUARY.to_string(), "Jan");
        assert_eq!(DECEMBER.to_string(), "Dec");
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&Month::new(8)).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Month::new(8));

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_year_try_new() {
        assert_eq!(Year::try_new(-32_768), Ok(Year::MIN));
        assert_eq!(Year::try_new(32_767), Ok(Year::MAX));
        assert_eq!(Year::try_new(32_768), Err(DateError::YearOutOfRange(32_768)));
        assert_eq!(Year::try_new(-32_769), Err(DateError::YearOutOfRange(-32_769)));

        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);
    }

    #[test]
    fn test_year_arithmetic() {
        let year = Year::new(2020);
        assert_eq!(year + Years::new(5), Year::new(2025));
        assert_eq!(Years::new(5) + year, Year::new(2025));
        assert_eq!(year - Years::new(2021), Year::new(-1));
        assert_eq!(Year::new(2025) - year, Years::new(5));
        assert_eq!(year - Year::new(2025), Years::new(-5));
        assert_eq!(year.succ(), Year::new(2021));
        assert_eq!(Year::new(0).pred(), Year::new(-1), "no wrap at zero");
    }

    #[test]
    fn test_year_is_leap() {
        assert!(Year::new(2000).is_leap());
        assert!(!Year::new(1900).is_leap());
        assert!(Year::new(0).is_leap());
        assert!(Year::new(-4).is_leap());
        assert!(!Year::new(-1).is_leap());
    }

    #[test]
    fn test_year_display() {
        assert_eq!(Year::new(2024).to_string(), "2024");
        assert_eq!(Year::new(33).to_string(), "0033");
        assert_eq!(Year::new(-1).to_string(), "-0001");
        assert_eq!(Year::new(-32_768).to_string(), "-32768");
    }

    #[test]
    fn test_year_ordering() {
        assert!(Year::new(-1) < Year::new(0));
        assert!(Year::MIN < Year::MAX);
    }

    #[test]
    fn test_weekday_try_new() {
        for wd in 0..=6 {
            assert!(Weekday::try_new(wd).is_ok());
        }
        assert_eq!(Weekday::try_new(7), Err(DateError::WeekdayOutOfRange(7)));
        assert!(!Weekday::new(7).ok());
    }

    #[test]
    fn test_weekday_arithmetic() {
        assert_eq!(SATURDAY + Days::new(1), SUNDAY);
        assert_eq!(SUNDAY - Days::new(1), SATURDAY);
        assert_eq!(SUNDAY + Days::new(-8), SATURDAY);
        assert_eq!(THURSDAY + Days::new(700), THURSDAY);
        assert_eq!(Days::new(1) + MONDAY, TUESDAY);
        assert_eq!(SATURDAY.succ(), SUNDAY);
        assert_eq!(SUNDAY.pred(), SATURDAY);

        let mut weekday = WEDNESDAY;
        weekday += Days::new(3);
        assert_eq!(weekday, SATURDAY);
        weekday -= Days::new(6);
        assert_eq!(weekday, SUNDAY);
    }

    #[test]
    fn test_weekday_difference_is_forward_distance() {
        assert_eq!(MONDAY - SUNDAY, Days::new(1));
        assert_eq!(SUNDAY - MONDAY, Days::new(6));
        assert_eq!(SUNDAY - SATURDAY, Days::new(1));
        for a in 0..7 {
            for b in 0..7 {
                let (a, b) = (Weekday::new(a), Weekday::new(b));
                let diff = a - b;
                assert!((0..=6).contains(&diff.count()));
                assert_eq!(b + diff, a);
            }
        }
    }

    #[test]
    fn test_weekday_nth_and_last() {
        let second_tuesday = TUESDAY.nth(2);
        assert_eq!(second_tuesday.weekday(), TUESDAY);
        assert_eq!(second_tuesday.index(), 2);
        assert_eq!(TUESDAY.last().weekday(), TUESDAY);

        assert!(TUESDAY.try_nth(5).is_ok());
        assert_eq!(TUESDAY.try_nth(0), Err(DateError::WeekdayIndexOutOfRange(0)));
        assert_eq!(TUESDAY.try_nth(6), Err(DateError::WeekdayIndexOutOfRange(6)));
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(SUNDAY.to_string(), "Sun");
        assert_eq!(SATURDAY.to_string(), "Sat");
        assert_eq!(Weekday::new(9).to_string(), "9 is not a valid weekday");
    }

    #[test]
    fn test_weekday_serde() {
        let json = serde_json::to_string(&THURSDAY).unwrap();
        assert_eq!(json, "4");
        let parsed: Weekday = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, THURSDAY);
        assert!(serde_json::from_str::<Weekday>("7").is_err());
    }
}
