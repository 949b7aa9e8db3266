//! Building calendar points out of their parts.
//!
//! Every pairing is available through [`compose`] and through the `/`
//! operator, in either argument order where both orders make sense:
//!
//! ```
//! use civil_date::{compose, Day, Year, YearMonthDay, LAST, MARCH};
//!
//! let a = Year::new(2021) / MARCH / Day::new(7);
//! let b = Day::new(7) / MARCH / Year::new(2021);
//! let c = compose(compose(MARCH, Day::new(7)), Year::new(2021));
//! assert_eq!(a, b);
//! assert_eq!(a, c);
//!
//! let end_of_feb = Year::new(2024) / civil_date::FEBRUARY / LAST;
//! assert_eq!(YearMonthDay::from(end_of_feb).day(), Day::new(29));
//! ```

use crate::composite::{MonthDay, MonthWeekday, MonthWeekdayLast, YearMonth};
use crate::indexed::{Last, MonthDayLast, WeekdayIndexed, WeekdayLast};
use crate::types::{Day, Month, Year};
use crate::ymd::{YearMonthDay, YearMonthDayLast, YearMonthWeekday, YearMonthWeekdayLast};
use std::ops::Div;

/// Combines two calendar parts into a larger one.
pub trait Compose<Rhs> {
    type Output;

    fn compose(self, rhs: Rhs) -> Self::Output;
}

/// Combines two calendar parts. See the module docs for the accepted pairs.
pub fn compose<A, B>(a: A, b: B) -> A::Output
where
    A: Compose<B>,
{
    a.compose(b)
}

macro_rules! composition {
    // Both argument orders, same result.
    (both $lhs:ty, $rhs:ty => $out:ty, |$a:ident, $b:ident| $body:expr) => {
        composition!($lhs, $rhs => $out, |$a, $b| $body);
        composition!($rhs, $lhs => $out, |$b, $a| $body);
    };
    ($lhs:ty, $rhs:ty => $out:ty, |$a:ident, $b:ident| $body:expr) => {
        impl Compose<$rhs> for $lhs {
            type Output = $out;

            fn compose(self, rhs: $rhs) -> $out {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl Div<$rhs> for $lhs {
            type Output = $out;

            fn div(self, rhs: $rhs) -> $out {
                self.compose(rhs)
            }
        }
    };
}

composition!(Year, Month => YearMonth, |y, m| YearMonth::new(y, m));

composition!(YearMonth, Day => YearMonthDay, |ym, d| YearMonthDay::new(ym.year(), ym.month(), d));
composition!(YearMonth, Last => YearMonthDayLast, |ym, _last| YearMonthDayLast::from(ym));
composition!(YearMonth, WeekdayIndexed => YearMonthWeekday, |ym, wdi| {
    YearMonthWeekday::new(ym.year(), ym.month(), wdi)
});
composition!(YearMonth, WeekdayLast => YearMonthWeekdayLast, |ym, wdl| {
    YearMonthWeekdayLast::new(ym.year(), ym.month(), wdl)
});

composition!(both Month, Day => MonthDay, |m, d| MonthDay::new(m, d));
composition!(both Month, Last => MonthDayLast, |m, _last| MonthDayLast::new(m));
composition!(both Month, WeekdayIndexed => MonthWeekday, |m, wdi| MonthWeekday::new(m, wdi));
composition!(both Month, WeekdayLast => MonthWeekdayLast, |m, wdl| MonthWeekdayLast::new(m, wdl));

composition!(both Year, MonthDay => YearMonthDay, |y, md| YearMonthDay::new(y, md.month(), md.day()));
composition!(both Year, MonthDayLast => YearMonthDayLast, |y, mdl| YearMonthDayLast::new(y, mdl));
composition!(both Year, MonthWeekday => YearMonthWeekday, |y, mw| {
    YearMonthWeekday::new(y, mw.month(), mw.weekday_indexed())
});
composition!(both Year, MonthWeekdayLast => YearMonthWeekdayLast, |y, mwl| {
    YearMonthWeekdayLast::new(y, mwl.month(), mwl.weekday_last())
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FEBRUARY, LAST, MAY, MONDAY, NOVEMBER, THURSDAY};

    #[test]
    fn test_all_orders_agree_for_ymd() {
        let y = Year::new(2021);
        let m = NOVEMBER;
        let d = Day::new(25);
        let expected = YearMonthDay::new(y, m, d);

        assert_eq!(y / m / d, expected);
        assert_eq!(m / d / y, expected);
        assert_eq!(d / m / y, expected);
        assert_eq!(y / (m / d), expected);
        assert_eq!(y / (d / m), expected);
        assert_eq!(compose(compose(y, m), d), expected);
        assert_eq!(compose(compose(d, m), y), expected);
    }

    #[test]
    fn test_last_orders() {
        let y = Year::new(2024);
        let expected = YearMonthDayLast::new(y, MonthDayLast::new(FEBRUARY));

        assert_eq!(y / FEBRUARY / LAST, expected);
        assert_eq!(FEBRUARY / LAST / y, expected);
        assert_eq!(LAST / FEBRUARY / y, expected);
        assert_eq!(y / (LAST / FEBRUARY), expected);
        assert_eq!(YearMonthDay::from(expected).day(), Day::new(29));
    }

    #[test]
    fn test_weekday_orders() {
        let y = Year::new(2021);
        let thanksgiving = YearMonthWeekday::new(y, NOVEMBER, THURSDAY.nth(4));
        assert_eq!(y / NOVEMBER / THURSDAY.nth(4), thanksgiving);
        assert_eq!(NOVEMBER / THURSDAY.nth(4) / y, thanksgiving);
        assert_eq!(THURSDAY.nth(4) / NOVEMBER / y, thanksgiving);
        assert_eq!(
            YearMonthDay::from(thanksgiving.to_day_point()),
            YearMonthDay::new(y, NOVEMBER, Day::new(25))
        );

        let memorial = YearMonthWeekdayLast::new(y, MAY, MONDAY.last());
        assert_eq!(y / MAY / MONDAY.last(), memorial);
        assert_eq!(MAY / MONDAY.last() / y, memorial);
        assert_eq!(MONDAY.last() / MAY / y, memorial);
    }

    #[test]
    fn test_partial_composites() {
        assert_eq!(MAY / Day::new(1), MonthDay::new(MAY, Day::new(1)));
        assert_eq!(Day::new(1) / MAY, MonthDay::new(MAY, Day::new(1)));
        assert_eq!(Year::new(2021) / MAY, YearMonth::new(Year::new(2021), MAY));
    }
}
