//! Duration types.
//!
//! Calendar durations (`Days`, `Weeks`, `Months`, `Years`) drive the field
//! arithmetic. Clock durations (`Hours`, `Minutes`, `Seconds`,
//! `Subseconds<N>`) carry the resolution that picks a [`TimeOfDay`] tier.
//!
//! [`TimeOfDay`]: crate::TimeOfDay

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

macro_rules! calendar_duration {
    ($(#[$doc:meta])* $name:ident, $fmt:tt) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            Add, Sub, Neg, AddAssign, SubAssign, From, Into, Display,
            Serialize, Deserialize,
        )]
        #[display(fmt = $fmt, _0)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a signed count.
            pub const fn new(count: i32) -> Self {
                Self(count)
            }

            #[inline]
            pub const fn count(self) -> i32 {
                self.0
            }
        }
    };
}

calendar_duration!(
    /// A signed number of days.
    Days,
    "{}d"
);
calendar_duration!(
    /// A signed number of weeks; converts into [`Days`].
    Weeks,
    "{}w"
);
calendar_duration!(
    /// A signed number of calendar months.
    Months,
    "{}mo"
);
calendar_duration!(
    /// A signed number of calendar years; converts into [`Months`].
    Years,
    "{}y"
);

impl From<Weeks> for Days {
    fn from(weeks: Weeks) -> Self {
        Self(weeks.0 * 7)
    }
}

impl From<Years> for Months {
    fn from(years: Years) -> Self {
        Self(years.0 * 12)
    }
}

/// Resolution tier of a clock duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Hour,
    Minute,
    Second,
    Subsecond,
}

/// A clock duration with a fixed resolution.
///
/// The resolution is a property of the type, so a [`TimeOfDay`] built from a
/// `Minutes` value always decomposes into hours and minutes and never into
/// seconds.
///
/// [`TimeOfDay`]: crate::TimeOfDay
pub trait Precision: Copy + Eq + Ord + fmt::Debug {
    /// Which fields a time of day at this resolution carries.
    const TIER: Tier;
    /// Ticks of this duration in one hour.
    const TICKS_PER_HOUR: i64;

    fn from_count(count: i64) -> Self;
    fn count(self) -> i64;
}

/// Resolutions of one minute or finer.
pub trait MinutePrecision: Precision {}

/// Resolutions of one second or finer.
pub trait SecondPrecision: MinutePrecision {}

macro_rules! clock_duration {
    ($(#[$doc:meta])* $name:ident, $fmt:tt, $tier:expr, $per_hour:expr) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            Add, Sub, Neg, AddAssign, SubAssign, From, Into, Display,
            Serialize, Deserialize,
        )]
        #[display(fmt = $fmt, _0)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a signed count.
            pub const fn new(count: i64) -> Self {
                Self(count)
            }

            #[inline]
            pub const fn count(self) -> i64 {
                self.0
            }
        }

        impl Precision for $name {
            const TIER: Tier = $tier;
            const TICKS_PER_HOUR: i64 = $per_hour;

            fn from_count(count: i64) -> Self {
                Self(count)
            }

            fn count(self) -> i64 {
                self.0
            }
        }
    };
}

clock_duration!(
    /// Whole hours.
    Hours,
    "{}h",
    Tier::Hour,
    1
);
clock_duration!(
    /// Whole minutes.
    Minutes,
    "{}min",
    Tier::Minute,
    60
);
clock_duration!(
    /// Whole seconds.
    Seconds,
    "{}s",
    Tier::Second,
    3_600
);

impl MinutePrecision for Minutes {}
impl MinutePrecision for Seconds {}
impl SecondPrecision for Seconds {}

/// A count of `1 / PER_SECOND` second ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subseconds<const PER_SECOND: u64>(i64);

/// Thousandths of a second.
pub type Milliseconds = Subseconds<1_000>;
/// Millionths of a second.
pub type Microseconds = Subseconds<1_000_000>;
/// Billionths of a second.
pub type Nanoseconds = Subseconds<1_000_000_000>;

impl<const PER_SECOND: u64> Subseconds<PER_SECOND> {
    /// Wraps a signed tick count.
    pub const fn new(count: i64) -> Self {
        Self(count)
    }

    #[inline]
    pub const fn count(self) -> i64 {
        self.0
    }

    /// Number of decimal digits needed to print one second's worth of ticks,
    /// i.e. `ceil(log10(PER_SECOND))`.
    pub const fn decimal_width() -> usize {
        ceil_log10(PER_SECOND)
    }
}

impl<const PER_SECOND: u64> Precision for Subseconds<PER_SECOND> {
    const TIER: Tier = Tier::Subsecond;
    const TICKS_PER_HOUR: i64 = 3_600 * PER_SECOND as i64;

    fn from_count(count: i64) -> Self {
        Self(count)
    }

    fn count(self) -> i64 {
        self.0
    }
}

impl<const PER_SECOND: u64> MinutePrecision for Subseconds<PER_SECOND> {}
impl<const PER_SECOND: u64> SecondPrecision for Subseconds<PER_SECOND> {}

impl<const PER_SECOND: u64> Add for Subseconds<PER_SECOND> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<const PER_SECOND: u64> Sub for Subseconds<PER_SECOND> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<const PER_SECOND: u64> Neg for Subseconds<PER_SECOND> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<const PER_SECOND: u64> AddAssign for Subseconds<PER_SECOND> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const PER_SECOND: u64> SubAssign for Subseconds<PER_SECOND> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const PER_SECOND: u64> From<i64> for Subseconds<PER_SECOND> {
    fn from(count: i64) -> Self {
        Self(count)
    }
}

impl<const PER_SECOND: u64> From<Subseconds<PER_SECOND>> for i64 {
    fn from(value: Subseconds<PER_SECOND>) -> Self {
        value.0
    }
}

impl<const PER_SECOND: u64> fmt::Display for Subseconds<PER_SECOND> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}s", self.0, PER_SECOND)
    }
}

/// `ceil(log10(n))` for `n >= 1`.
pub(crate) const fn ceil_log10(n: u64) -> usize {
    let mut i = n.saturating_sub(1);
    let mut digits = 0;
    while i > 0 {
        i /= 10;
        digits += 1;
    }
    digits
}

/// `from` expressed in `To` ticks as an exact fraction `(numerator, denominator)`.
fn ratio<To: Precision, Src: Precision>(from: Src) -> (i128, i128) {
    (
        i128::from(from.count()) * i128::from(To::TICKS_PER_HOUR),
        i128::from(Src::TICKS_PER_HOUR),
    )
}

/// Converts to a coarser or finer resolution, truncating toward zero.
pub fn trunc<To: Precision, Src: Precision>(from: Src) -> To {
    let (n, d) = ratio::<To, Src>(from);
    To::from_count((n / d) as i64)
}

/// Converts to another resolution, rounding toward negative infinity.
pub fn floor<To: Precision, Src: Precision>(from: Src) -> To {
    let (n, d) = ratio::<To, Src>(from);
    To::from_count(n.div_euclid(d) as i64)
}

/// Converts to another resolution, rounding toward positive infinity.
pub fn ceil<To: Precision, Src: Precision>(from: Src) -> To {
    let (n, d) = ratio::<To, Src>(from);
    let q = n.div_euclid(d) + i128::from(n.rem_euclid(d) != 0);
    To::from_count(q as i64)
}

/// Converts to another resolution, rounding to nearest with ties to even.
pub fn round<To: Precision, Src: Precision>(from: Src) -> To {
    let (n, d) = ratio::<To, Src>(from);
    let lo = n.div_euclid(d);
    let rem = n.rem_euclid(d);
    let q = match (2 * rem).cmp(&d) {
        Ordering::Less => lo,
        Ordering::Greater => lo + 1,
        Ordering::Equal if lo % 2 == 0 => lo,
        Ordering::Equal => lo + 1,
    };
    To::from_count(q as i64)
}
