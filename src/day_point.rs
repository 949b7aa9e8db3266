use crate::DateError;
use crate::civil::{civil_from_days, weekday_from_days};
use crate::consts::{DATE_SEPARATOR, MAX_DAY_POINT, MIN_DAY_POINT};
use crate::types::{Day, Month, Weekday, Year};
use crate::units::Days;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A count of days since 1970-01-01.
///
/// This is the canonical linear form of a calendar date: ordering, equality
/// and differences of dates are all computed on day points. Any `i32` is a
/// valid day point, but only the ones in [`DayPoint::MIN`]`..=`[`DayPoint::MAX`]
/// convert back to a date with a representable year. The `+` and `-`
/// operators wrap at the edges of `i32`; use [`DayPoint::checked_add`] to
/// stay inside the representable years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayPoint(i32);

impl DayPoint {
    /// -32768-01-01
    pub const MIN: Self = Self(MIN_DAY_POINT);
    /// 32767-12-31
    pub const MAX: Self = Self(MAX_DAY_POINT);
    /// 1970-01-01
    pub const EPOCH: Self = Self(0);

    /// Wraps a raw day count. Not range checked.
    pub const fn new(days: i32) -> Self {
        Self(days)
    }

    /// Days since the epoch.
    #[inline]
    pub const fn count(self) -> i32 {
        self.0
    }

    /// True when the day point converts to a date with a representable year.
    pub const fn ok(self) -> bool {
        MIN_DAY_POINT <= self.0 && self.0 <= MAX_DAY_POINT
    }

    /// Day of the week; 1970-01-01 was a Thursday.
    pub const fn weekday(self) -> Weekday {
        Weekday::new(weekday_from_days(self.0) as u8)
    }

    /// Checked construction from a wide day count.
    ///
    /// # Errors
    /// Returns `DateError::DayPointOutOfRange` if the day count falls outside
    /// [`DayPoint::MIN`]`..=`[`DayPoint::MAX`].
    pub fn try_new(days: i64) -> Result<Self, DateError> {
        if days < i64::from(MIN_DAY_POINT) || days > i64::from(MAX_DAY_POINT) {
            debug!("rejecting day count {days}");
            return Err(DateError::DayPointOutOfRange(days));
        }
        Ok(Self(days as i32))
    }

    /// Adds `days`, failing if the result leaves the representable range.
    ///
    /// # Errors
    /// Returns `DateError::DayPointOutOfRange` with the unreduced result.
    pub fn checked_add(self, days: Days) -> Result<Self, DateError> {
        Self::try_new(i64::from(self.0) + i64::from(days.count()))
    }

    /// Civil fields of this day point.
    ///
    /// Outside the representable range the year silently wraps; check
    /// [`DayPoint::ok`] first when that matters.
    pub(crate) const fn to_fields(self) -> (Year, Month, Day) {
        let (y, m, d) = civil_from_days(self.0);
        (Year::new(y as i16), Month::new(m as u8), Day::new(d as u8))
    }
}

impl From<i32> for DayPoint {
    fn from(days: i32) -> Self {
        Self(days)
    }
}

impl From<DayPoint> for i32 {
    fn from(point: DayPoint) -> Self {
        point.0
    }
}

impl From<DayPoint> for Weekday {
    fn from(point: DayPoint) -> Self {
        point.weekday()
    }
}

impl Add<Days> for DayPoint {
    type Output = Self;

    fn add(self, rhs: Days) -> Self {
        Self(self.0.wrapping_add(rhs.count()))
    }
}

impl Add<DayPoint> for Days {
    type Output = DayPoint;

    fn add(self, rhs: DayPoint) -> DayPoint {
        rhs + self
    }
}

impl Sub<Days> for DayPoint {
    type Output = Self;

    fn sub(self, rhs: Days) -> Self {
        Self(self.0.wrapping_sub(rhs.count()))
    }
}

impl Sub for DayPoint {
    type Output = Days;

    fn sub(self, rhs: Self) -> Days {
        Days::new(self.0.wrapping_sub(rhs.0))
    }
}

impl AddAssign<Days> for DayPoint {
    fn add_assign(&mut self, rhs: Days) {
        *self = *self + rhs;
    }
}

impl SubAssign<Days> for DayPoint {
    fn sub_assign(&mut self, rhs: Days) {
        *self = *self - rhs;
    }
}

impl fmt::Display for DayPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_fields();
        write!(f, "{year}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{day}", month.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FRIDAY, SATURDAY, SUNDAY, THURSDAY, TUESDAY, WEDNESDAY};

    #[test]
    fn test_epoch_is_thursday() {
        assert_eq!(DayPoint::EPOCH.weekday(), THURSDAY);
        assert_eq!(Weekday::from(DayPoint::new(-1)), WEDNESDAY);
        assert_eq!(Weekday::from(DayPoint::new(-4)), SUNDAY);
        assert_eq!(Weekday::from(DayPoint::new(-5)), SATURDAY);
    }

    #[test]
    fn test_arithmetic() {
        let point = DayPoint::new(100);
        assert_eq!(point + Days::new(5), DayPoint::new(105));
        assert_eq!(Days::new(5) + point, DayPoint::new(105));
        assert_eq!(point - Days::new(200), DayPoint::new(-100));
        assert_eq!(DayPoint::new(105) - point, Days::new(5));

        let mut point = DayPoint::EPOCH;
        point += Days::new(7);
        point -= Days::new(2);
        assert_eq!(point.count(), 5);
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(DayPoint::MAX.checked_add(Days::new(0)), Ok(DayPoint::MAX));
        assert_eq!(
            DayPoint::MAX.checked_add(Days::new(1)),
            Err(DateError::DayPointOutOfRange(i64::from(MAX_DAY_POINT) + 1))
        );
        assert!(DayPoint::MIN.checked_add(Days::new(-1)).is_err());
        assert!(DayPoint::new(i32::MAX).checked_add(Days::new(i32::MAX)).is_err());
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        struct TestCase {
            point:   DayPoint,
            weekday: Weekday,
        }

        let cases = [
            TestCase { point: DayPoint::new(i32::MAX), weekday: FRIDAY },
            TestCase { point: DayPoint::new(i32::MIN), weekday: TUESDAY },
        ];

        for case in &cases {
            assert!(!case.point.ok());
            assert_eq!(case.point.weekday(), case.weekday, "{:?}", case.point);
            assert_eq!(Weekday::from(case.point), case.weekday);
            assert!(!case.point.to_string().is_empty());
            assert!(DayPoint::try_new(i64::from(case.point.count())).is_err());
        }

        assert_eq!(DayPoint::new(i32::MAX) + Days::new(1), DayPoint::new(i32::MIN));
        assert_eq!(DayPoint::new(i32::MIN) - Days::new(1), DayPoint::new(i32::MAX));
        assert_eq!(DayPoint::new(i32::MIN) - DayPoint::new(i32::MAX), Days::new(1));
    }

    #[test]
    fn test_ok() {
        assert!(DayPoint::MIN.ok());
        assert!(DayPoint::MAX.ok());
        assert!(!DayPoint::new(MAX_DAY_POINT + 1).ok());
        assert!(!DayPoint::new(MIN_DAY_POINT - 1).ok());
    }

    #[test]
    fn test_display() {
        struct TestCase {
            days:     i32,
            expected: &'static str,
        }

        let cases = [
            TestCase { days: 0, expected: "1970-01-01" },
            TestCase { days: 11_016, expected: "2000-02-29" },
            TestCase { days: -719_528, expected: "0000-01-01" },
            TestCase { days: -719_529, expected: "-0001-12-31" },
            TestCase { days: MAX_DAY_POINT, expected: "32767-12-31" },
        ];

        for case in &cases {
            assert_eq!(DayPoint::new(case.days).to_string(), case.expected);
        }
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&DayPoint::new(-3)).unwrap();
        assert_eq!(json, "-3");
        let parsed: DayPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DayPoint::new(-3));
    }
}
