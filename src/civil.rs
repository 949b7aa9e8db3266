//! Conversions between the linear day count and civil `(year, month, day)`
//! triples in the proleptic Gregorian calendar.
//!
//! Day 0 is 1970-01-01. The algorithms shift the calendar so the year starts
//! on March 1st, which puts the leap day at the very end of the computational
//! year, and then split the timeline into 400-year eras of exactly
//! [`DAYS_PER_ERA`] days. Inside an era every quantity is non-negative, so
//! only the era computation needs floor division.
//!
//! Year values are carried in `i32` and day-of-era values in `u32`. The
//! intermediate products need at least 20 signed and 18 unsigned bits, so
//! these must not be narrowed.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_ERA, EPOCH_SHIFT, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};

/// Integer division rounding toward negative infinity.
///
/// `b` must be positive.
#[inline]
pub const fn floor_div(a: i32, b: i32) -> i32 {
    debug_assert!(b > 0);
    if a >= 0 { a / b } else { (a - (b - 1)) / b }
}

/// Remainder matching [`floor_div`]; always in `0..b`.
#[inline]
pub const fn floor_mod(a: i32, b: i32) -> i32 {
    a - floor_div(a, b) * b
}

/// 64-bit [`floor_div`], used by month and weekday arithmetic where a large
/// delta is added to a small field before reducing.
#[inline]
pub(crate) const fn floor_div_i64(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0);
    if a >= 0 { a / b } else { (a - (b - 1)) / b }
}

/// Returns true when `year` is a leap year.
pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or 0 when `month` is not in `1..=12`.
pub const fn last_day_of_month(year: i32, month: u32) -> u32 {
    if month == 0 || month > MAX_MONTH as u32 {
        return 0;
    }
    if month == 2 && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP as u32
    } else {
        DAYS_IN_MONTH[month as usize] as u32
    }
}

/// Day count of the civil date `year-month-day`.
///
/// Exact inverse of [`civil_from_days`] for every valid date. Defined (though
/// not meaningful) for out-of-range month and day values as long as the
/// arithmetic stays inside `i32`.
pub const fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
    // March-based year: January and February belong to the previous year.
    let y = if month <= 2 { year - 1 } else { year };
    let era = floor_div(y, GREGORIAN_CYCLE);
    let yoe = (y - era * GREGORIAN_CYCLE) as u32; // [0, 399]
    let mp = if month > 2 { month - 3 } else { month + 9 }; // [0, 11]
    // Day-of-year is (153 * mp + 2) / 5 + day - 1; the -1 is applied in
    // signed arithmetic so a day of 0 stays defined.
    let doy1 = (153 * mp + 2) / 5 + day; // [1, 366]
    let doe1 = yoe * 365 + yoe / 4 - yoe / 100 + doy1; // [1, 146097]
    era * DAYS_PER_ERA + doe1 as i32 - 1 - EPOCH_SHIFT
}

/// Civil date `(year, month, day)` of the day count `days`.
///
/// Total over `i32`. Day counts outside [`MIN_DAY_POINT`]`..=`[`MAX_DAY_POINT`]
/// give years outside the 16-bit range, which callers narrow themselves.
///
/// [`MIN_DAY_POINT`]: crate::MIN_DAY_POINT
/// [`MAX_DAY_POINT`]: crate::MAX_DAY_POINT
pub const fn civil_from_days(days: i32) -> (i32, u32, u32) {
    // Shifting by the epoch can leave i32 near the ends of the range.
    let z = days as i64 + EPOCH_SHIFT as i64;
    let era = floor_div_i64(z, DAYS_PER_ERA as i64);
    let doe = (z - era * DAYS_PER_ERA as i64) as u32; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let y = (yoe as i64 + era * GREGORIAN_CYCLE as i64) as i32;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if month <= 2 { y + 1 } else { y };
    (year, month, day)
}

/// Weekday encoding (Sunday = 0) of the day count `days`.
///
/// Day 0 was a Thursday.
pub const fn weekday_from_days(days: i32) -> u32 {
    let z = days as i64;
    if z >= -4 { ((z + 4) % 7) as u32 } else { ((z + 5) % 7 + 6) as u32 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_DAY_POINT, MIN_DAY_POINT};

    #[test]
    fn test_floor_div_cases() {
        struct TestCase {
            a:       i32,
            b:       i32,
            div:     i32,
            modulus: i32,
        }

        let cases = [
            TestCase { a: 7, b: 7, div: 1, modulus: 0 },
            TestCase { a: 6, b: 7, div: 0, modulus: 6 },
            TestCase { a: 0, b: 7, div: 0, modulus: 0 },
            TestCase { a: -1, b: 7, div: -1, modulus: 6 },
            TestCase { a: -7, b: 7, div: -1, modulus: 0 },
            TestCase { a: -8, b: 7, div: -2, modulus: 6 },
            TestCase { a: -1, b: 400, div: -1, modulus: 399 },
            TestCase { a: -400, b: 400, div: -1, modulus: 0 },
            TestCase { a: -401, b: 400, div: -2, modulus: 399 },
        ];

        for case in &cases {
            assert_eq!(floor_div(case.a, case.b), case.div, "{} div {}", case.a, case.b);
            assert_eq!(floor_mod(case.a, case.b), case.modulus, "{} mod {}", case.a, case.b);
            assert_eq!(floor_div(case.a, case.b), case.a.div_euclid(case.b));
        }
    }

    #[test]
    fn test_epoch() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(weekday_from_days(0), 4, "1970-01-01 was a Thursday");
    }

    #[test]
    fn test_known_dates() {
        struct TestCase {
            civil: (i32, u32, u32),
            days:  i32,
        }

        let cases = [
            TestCase { civil: (2000, 2, 29), days: 11_016 },
            TestCase { civil: (2000, 3, 1), days: 11_017 },
            TestCase { civil: (1969, 12, 31), days: -1 },
            TestCase { civil: (2021, 1, 1), days: 18_628 },
            TestCase { civil: (0, 1, 1), days: -719_528 },
            TestCase { civil: (0, 3, 1), days: -719_468 },
            TestCase { civil: (-1, 12, 31), days: -719_529 },
            TestCase { civil: (-32_768, 1, 1), days: MIN_DAY_POINT },
            TestCase { civil: (-400, 3, 1), days: -719_468 - 146_097 },
            TestCase { civil: (32_767, 12, 31), days: MAX_DAY_POINT },
        ];

        for case in &cases {
            let (y, m, d) = case.civil;
            assert_eq!(days_from_civil(y, m, d), case.days, "{y}-{m}-{d}");
            assert_eq!(civil_from_days(case.days), case.civil, "day {}", case.days);
        }
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2024, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2023, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 1900, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2100, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2000, is_leap: true, description: "divisible by 400" },
            TestCase { year: 0, is_leap: true, description: "year zero is divisible by 400" },
            TestCase { year: -4, is_leap: true, description: "negative divisible by 4" },
            TestCase { year: -1, is_leap: false, description: "negative not divisible by 4" },
            TestCase { year: -100, is_leap: false, description: "negative century" },
            TestCase { year: -400, is_leap: true, description: "negative divisible by 400" },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_last_day_of_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &days) in expected.iter().enumerate() {
            let month = i as u32 + 1;
            assert_eq!(last_day_of_month(2023, month), days, "month {month}");
        }
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(1900, 2), 28);
        assert_eq!(last_day_of_month(2024, 0), 0);
        assert_eq!(last_day_of_month(2024, 13), 0);
    }

    #[test]
    fn test_sweep_is_consecutive() {
        // Walk civil dates forward one day at a time and check both directions
        // agree with the running day count.
        let start = -800_000;
        let (mut y, mut m, mut d) = civil_from_days(start);
        let mut prev_weekday = weekday_from_days(start);
        for z in start..=800_000 {
            assert_eq!(civil_from_days(z), (y, m, d), "day {z}");
            assert_eq!(days_from_civil(y, m, d), z, "{y}-{m}-{d}");
            if z != start {
                assert_eq!(weekday_from_days(z), (prev_weekday + 1) % 7, "day {z}");
            }
            prev_weekday = weekday_from_days(z);

            d += 1;
            if d > last_day_of_month(y, m) {
                d = 1;
                m += 1;
                if m > 12 {
                    m = 1;
                    y += 1;
                }
            }
        }
    }

    #[test]
    fn test_extreme_day_counts() {
        struct TestCase {
            days:    i32,
            weekday: u32,
        }

        let cases = [
            TestCase { days: i32::MAX, weekday: 5 },
            TestCase { days: i32::MAX - 3, weekday: 2 },
            TestCase { days: i32::MIN, weekday: 2 },
            TestCase { days: i32::MIN + 1, weekday: 3 },
        ];

        for case in &cases {
            assert_eq!(weekday_from_days(case.days), case.weekday, "day {}", case.days);
            assert_eq!(
                i64::from(weekday_from_days(case.days)),
                (i64::from(case.days) + 4).rem_euclid(7),
                "day {}",
                case.days
            );

            let (y, m, d) = civil_from_days(case.days);
            assert!(!(-32_768..=32_767).contains(&y), "day {} gave year {y}", case.days);
            assert!((1..=12).contains(&m), "day {}", case.days);
            assert!(d >= 1 && d <= last_day_of_month(y, m), "day {}", case.days);
        }

        // Consecutive days stay consecutive right up to the edge.
        let (y, m, d) = civil_from_days(i32::MAX - 1);
        let (ny, nm, nd) = civil_from_days(i32::MAX);
        assert!((ny, nm, nd) > (y, m, d));
    }

    #[test]
    fn test_full_range_endpoints_round_trip() {
        for z in (MIN_DAY_POINT..MIN_DAY_POINT + 1_000).chain(MAX_DAY_POINT - 1_000..=MAX_DAY_POINT) {
            let (y, m, d) = civil_from_days(z);
            assert!((-32_768..=32_767).contains(&y));
            assert_eq!(days_from_civil(y, m, d), z);
        }
    }

    quickcheck::quickcheck! {
        fn prop_civil_round_trip(z: i32) -> bool {
            let z = z % MAX_DAY_POINT;
            let (y, m, d) = civil_from_days(z);
            days_from_civil(y, m, d) == z
        }

        fn prop_days_round_trip(y: i16, m: u8, d: u8) -> quickcheck::TestResult {
            let year = i32::from(y);
            let month = u32::from(m % 12) + 1;
            let day = u32::from(d % 31) + 1;
            if day > last_day_of_month(year, month) {
                return quickcheck::TestResult::discard();
            }
            let z = days_from_civil(year, month, day);
            quickcheck::TestResult::from_bool(civil_from_days(z) == (year, month, day))
        }

        fn prop_weekday_periodic(z: i32) -> bool {
            let z = z % MAX_DAY_POINT;
            weekday_from_days(z + 7) == weekday_from_days(z)
                && weekday_from_days(z) == floor_mod(z + 4, 7) as u32
        }
    }
}
