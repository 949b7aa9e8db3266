use crate::indexed::Last;
use crate::types::{Month, Weekday, Year};

/// Smallest representable year (inclusive)
pub const MIN_YEAR: i32 = i16::MIN as i32;

/// Largest representable year (inclusive)
pub const MAX_YEAR: i32 = i16::MAX as i32;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Largest day number any month can hold
pub const MAX_DAY: u8 = 31;

/// Largest valid weekday encoding (Saturday)
pub const MAX_WEEKDAY: u8 = 6;

/// Largest occurrence index of a weekday within a month
pub const MAX_WEEKDAY_INDEX: u8 = 5;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one 400-year era
pub const DAYS_PER_ERA: i32 = 146_097;

/// Days from 0000-03-01 to 1970-01-01, the day-count epoch
pub const EPOCH_SHIFT: i32 = 719_468;

/// Weekday of the epoch day (1970-01-01 was a Thursday)
pub const EPOCH_WEEKDAY: Weekday = THURSDAY;

/// Day count of -32768-01-01, the first day `Date` can hold
pub const MIN_DAY_POINT: i32 = -12_687_795;

/// Day count of 32767-12-31, the last day `Date` can hold
pub const MAX_DAY_POINT: i32 = 11_248_737;

/// Date component separator used by `Display`
pub const DATE_SEPARATOR: char = '-';
/// Composition separator used by `Display` (mirrors `year / month / day`)
pub const COMPOSE_SEPARATOR: char = '/';

/// Month 1, January
pub const JANUARY: Month = Month::new(1);
/// Month 2, February
pub const FEBRUARY: Month = Month::new(2);
/// Month 3, March
pub const MARCH: Month = Month::new(3);
/// Month 4, April
pub const APRIL: Month = Month::new(4);
/// Month 5, May
pub const MAY: Month = Month::new(5);
/// Month 6, June
pub const JUNE: Month = Month::new(6);
/// Month 7, July
pub const JULY: Month = Month::new(7);
/// Month 8, August
pub const AUGUST: Month = Month::new(8);
/// Month 9, September
pub const SEPTEMBER: Month = Month::new(9);
/// Month 10, October
pub const OCTOBER: Month = Month::new(10);
/// Month 11, November
pub const NOVEMBER: Month = Month::new(11);
/// Month 12, December
pub const DECEMBER: Month = Month::new(12);

/// Weekday encoding 0, Sunday
pub const SUNDAY: Weekday = Weekday::new(0);
/// Weekday encoding 1, Monday
pub const MONDAY: Weekday = Weekday::new(1);
/// Weekday encoding 2, Tuesday
pub const TUESDAY: Weekday = Weekday::new(2);
/// Weekday encoding 3, Wednesday
pub const WEDNESDAY: Weekday = Weekday::new(3);
/// Weekday encoding 4, Thursday
pub const THURSDAY: Weekday = Weekday::new(4);
/// Weekday encoding 5, Friday
pub const FRIDAY: Weekday = Weekday::new(5);
/// Weekday encoding 6, Saturday
pub const SATURDAY: Weekday = Weekday::new(6);

/// The "last" marker: `year / month / LAST`, `weekday.last()`
pub const LAST: Last = Last;

/// Year 0 of the proleptic Gregorian calendar (1 BC), a leap year
pub const YEAR_ZERO: Year = Year::new(0);
