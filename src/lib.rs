//! Proleptic Gregorian calendar arithmetic.
//!
//! Calendar fields are small unchecked value types ([`Day`], [`Month`],
//! [`Year`], [`Weekday`]) that are combined into calendar points with `/`:
//!
//! ```
//! use civil_date::{DayPoint, Months, Year, YearMonthDay, Day, JANUARY, FRIDAY};
//!
//! let date = Year::new(2021) / JANUARY / Day::new(31);
//! assert_eq!(DayPoint::from(date).count(), 18_658);
//!
//! // Month arithmetic does not clamp; the result just isn't ok().
//! assert!(!(date + Months::new(1)).ok());
//!
//! let last_friday = Year::new(2021) / JANUARY / FRIDAY.last();
//! assert_eq!(YearMonthDay::from(last_friday.to_day_point()).day(), Day::new(29));
//! ```
//!
//! Construction never fails and validity is queried with `ok()`. The
//! `try_*` constructors, `TryFrom` impls and [`Date`] are the checked
//! alternatives and report a [`DateError`].

#[macro_use]
mod logging;

mod civil;
mod clock;
mod compose;
mod composite;
mod consts;
mod date;
mod day_point;
mod error;
mod indexed;
mod prelude;
#[cfg(test)]
mod test_utils;
mod time_of_day;
mod types;
mod units;
mod ymd;

pub use civil::{
    civil_from_days, days_from_civil, floor_div, floor_mod, is_leap_year, last_day_of_month,
    weekday_from_days,
};
pub use clock::{SystemClock, WallClock};
pub use compose::{Compose, compose};
pub use composite::{MonthDay, MonthWeekday, MonthWeekdayLast, YearMonth};
pub use consts::*;
pub use date::{CachedDate, Date, DayCount, DayCountDate, DaySpec, DualCache, Fields, FieldsDate, Storage};
pub use day_point::DayPoint;
pub use error::DateError;
pub use indexed::{Last, MonthDayLast, WeekdayIndexed, WeekdayLast};
pub use time_of_day::{ClockMode, TimeOfDay};
pub use types::{Day, Month, Weekday, Year};
pub use units::{
    Days, Hours, Microseconds, Milliseconds, MinutePrecision, Minutes, Months, Nanoseconds,
    Precision, SecondPrecision, Seconds, Subseconds, Tier, Weeks, Years, ceil, floor, round, trunc,
};
pub use ymd::{YearMonthDay, YearMonthDayLast, YearMonthWeekday, YearMonthWeekdayLast};
