/// Error type for the checked construction paths.
///
/// The unchecked constructors never fail; validity of the values they build is
/// queried with `ok()`. Only the `try_*` constructors, the `TryFrom` impls and
/// the `checked_*` arithmetic on [`Date`](crate::Date) report errors, and every
/// error names the offending field and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DateError {
    /// Year outside the 16-bit signed domain.
    #[error("year {0} is out of range [-32768, 32767]")]
    YearOutOfRange(i32),

    /// Month outside `1..=12`.
    #[error("month {0} is out of range")]
    MonthOutOfRange(u32),

    /// Weekday encoding outside `0..=6`.
    #[error("week day {0} is out of range")]
    WeekdayOutOfRange(u32),

    /// Occurrence index outside `1..=5`.
    #[error("week day argument {0} is out of range")]
    WeekdayIndexOutOfRange(u32),

    /// Day does not exist in the given month. Also reported when an "nth
    /// weekday" lands past the end of the month, in which case `day` is the
    /// computed day number.
    #[error("day {day} is out of range for {year}-{month}")]
    DayOutOfRange { day: u32, year: i32, month: u32 },

    /// Day count whose civil date falls outside the representable years.
    #[error("day count {0} is out of range: year is out of range [-32768, 32767]")]
    DayPointOutOfRange(i64),
}

impl DateError {
    /// Name of the field that failed validation.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::YearOutOfRange(_) => "year",
            Self::MonthOutOfRange(_) => "month",
            Self::WeekdayOutOfRange(_) => "weekday",
            Self::WeekdayIndexOutOfRange(_) => "weekday index",
            Self::DayOutOfRange { .. } => "day",
            Self::DayPointOutOfRange(_) => "day count",
        }
    }
}
