//! Splitting a duration since midnight into clock fields.
//!
//! The precision of a [`TimeOfDay`] is its type parameter. A
//! `TimeOfDay<Minutes>` carries hours and minutes and nothing finer, and a
//! `TimeOfDay<Milliseconds>` carries hours, minutes, seconds and a
//! millisecond remainder. Accessors for fields a precision does not have do
//! not exist on that type.
//!
//! Decomposition truncates toward zero, so negative durations produce
//! negative fields rather than wrapping to the previous day.

use crate::units::{
    Hours, MinutePrecision, Minutes, Precision, SecondPrecision, Seconds, Subseconds, Tier,
    ceil_log10,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

const HOURS_PER_HALF_DAY: i64 = 12;
const HOURS_PER_DAY: i64 = 24;
const MINUTES_PER_HOUR: i64 = 60;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;

/// Whether the hour field counts 0 through 23 or 1 through 12 with a
/// morning/afternoon flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockMode {
    #[default]
    Hour24,
    Am,
    Pm,
}

impl ClockMode {
    /// True for `Am` and `Pm`.
    pub const fn is_12_hour(self) -> bool {
        matches!(self, Self::Am | Self::Pm)
    }
}

/// Converts a 12-hour reading to a 24-hour hour count.
const fn to_24(hours: i64, mode: ClockMode) -> i64 {
    match mode {
        ClockMode::Hour24 => hours,
        ClockMode::Pm if hours != HOURS_PER_HALF_DAY => hours + HOURS_PER_HALF_DAY,
        ClockMode::Am if hours == HOURS_PER_HALF_DAY => 0,
        ClockMode::Am | ClockMode::Pm => hours,
    }
}

/// Converts a 24-hour hour count to a 12-hour reading.
const fn to_12(hours: i64) -> (i64, ClockMode) {
    if hours >= HOURS_PER_HALF_DAY {
        let h = if hours > HOURS_PER_HALF_DAY { hours - HOURS_PER_HALF_DAY } else { hours };
        (h, ClockMode::Pm)
    } else if hours == 0 {
        (HOURS_PER_HALF_DAY, ClockMode::Am)
    } else {
        (hours, ClockMode::Am)
    }
}

/// A time of day at precision `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDay<P: Precision> {
    hours:      i64,
    minutes:    i64,
    seconds:    i64,
    subseconds: i64,
    mode:       ClockMode,
    #[serde(skip)]
    precision:  PhantomData<P>,
}

impl<P: Precision> TimeOfDay<P> {
    /// Decomposes a 24-hour duration since midnight.
    pub fn new(since_midnight: P) -> Self {
        let ticks_per_hour = P::TICKS_PER_HOUR;
        let total = since_midnight.count();
        let hours = total / ticks_per_hour;
        let mut rest = total % ticks_per_hour;

        let (mut minutes, mut seconds, mut subseconds) = (0, 0, 0);
        if P::TIER >= Tier::Minute {
            let ticks_per_minute = ticks_per_hour / MINUTES_PER_HOUR;
            minutes = rest / ticks_per_minute;
            rest %= ticks_per_minute;
        }
        if P::TIER >= Tier::Second {
            let ticks_per_second = ticks_per_hour / SECONDS_PER_HOUR;
            seconds = rest / ticks_per_second;
            subseconds = rest % ticks_per_second;
        }
        Self::from_parts(hours, minutes, seconds, subseconds, ClockMode::Hour24)
    }

    const fn from_parts(
        hours: i64,
        minutes: i64,
        seconds: i64,
        subseconds: i64,
        mode: ClockMode,
    ) -> Self {
        Self { hours, minutes, seconds, subseconds, mode, precision: PhantomData }
    }

    /// The hour field as stored, which is 1 through 12 in 12-hour mode.
    pub const fn hours(&self) -> Hours {
        Hours::new(self.hours)
    }

    /// Current hour mode.
    pub const fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Switches to 24-hour mode in place. No-op if already there.
    pub fn make_24(&mut self) {
        self.hours = to_24(self.hours, self.mode);
        self.mode = ClockMode::Hour24;
    }

    /// Switches to 12-hour mode in place. No-op if already there.
    pub fn make_12(&mut self) {
        if self.mode == ClockMode::Hour24 {
            (self.hours, self.mode) = to_12(self.hours);
        }
    }

    #[must_use]
    pub fn to_24_hour(mut self) -> Self {
        self.make_24();
        self
    }

    #[must_use]
    pub fn to_12_hour(mut self) -> Self {
        self.make_12();
        self
    }

    /// The duration since midnight this time of day represents, whatever
    /// mode it is displayed in.
    pub fn since_midnight(&self) -> P {
        let ticks_per_hour = P::TICKS_PER_HOUR;
        let mut total = to_24(self.hours, self.mode) * ticks_per_hour;
        if P::TIER >= Tier::Minute {
            total += self.minutes * (ticks_per_hour / MINUTES_PER_HOUR);
        }
        if P::TIER >= Tier::Second {
            total += self.seconds * (ticks_per_hour / SECONDS_PER_HOUR) + self.subseconds;
        }
        P::from_count(total)
    }

    /// True when every field is in range for the current mode.
    pub fn ok(&self) -> bool {
        let hours_ok = if self.mode.is_12_hour() {
            (1..=HOURS_PER_HALF_DAY).contains(&self.hours)
        } else {
            (0..HOURS_PER_DAY).contains(&self.hours)
        };
        let ticks_per_second = P::TICKS_PER_HOUR / SECONDS_PER_HOUR;
        hours_ok
            && (0..MINUTES_PER_HOUR).contains(&self.minutes)
            && (0..SECONDS_PER_MINUTE).contains(&self.seconds)
            && (ticks_per_second == 0 || (0..ticks_per_second).contains(&self.subseconds))
    }

    fn write_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ClockMode::Hour24 => Ok(()),
            ClockMode::Am => f.write_str("am"),
            ClockMode::Pm => f.write_str("pm"),
        }
    }
}

impl<P: MinutePrecision> TimeOfDay<P> {
    /// Minutes past the hour.
    pub const fn minutes(&self) -> Minutes {
        Minutes::new(self.minutes)
    }
}

impl<P: SecondPrecision> TimeOfDay<P> {
    /// Seconds past the minute.
    pub const fn seconds(&self) -> Seconds {
        Seconds::new(self.seconds)
    }
}

impl<const PER_SECOND: u64> TimeOfDay<Subseconds<PER_SECOND>> {
    /// Builds a time of day from fields. Hours are read per `mode`.
    pub const fn from_hms_sub(
        hours: Hours,
        minutes: Minutes,
        seconds: Seconds,
        subseconds: Subseconds<PER_SECOND>,
        mode: ClockMode,
    ) -> Self {
        Self::from_parts(
            hours.count(),
            minutes.count(),
            seconds.count(),
            subseconds.count(),
            mode,
        )
    }

    /// The part below one second.
    pub const fn subseconds(&self) -> Subseconds<PER_SECOND> {
        Subseconds::new(self.subseconds)
    }
}

impl TimeOfDay<Hours> {
    /// Builds a time of day from an hour. Read per `mode`.
    pub const fn from_hour(hours: Hours, mode: ClockMode) -> Self {
        Self::from_parts(hours.count(), 0, 0, 0, mode)
    }
}

impl TimeOfDay<Minutes> {
    /// Builds a time of day from fields. Hours are read per `mode`.
    pub const fn from_hm(hours: Hours, minutes: Minutes, mode: ClockMode) -> Self {
        Self::from_parts(hours.count(), minutes.count(), 0, 0, mode)
    }
}

impl TimeOfDay<Seconds> {
    /// Builds a time of day from fields. Hours are read per `mode`.
    pub const fn from_hms(hours: Hours, minutes: Minutes, seconds: Seconds, mode: ClockMode) -> Self {
        Self::from_parts(
            hours.count(),
            minutes.count(),
            seconds.count(),
            0,
            mode,
        )
    }
}

impl<P: Precision> From<P> for TimeOfDay<P> {
    fn from(since_midnight: P) -> Self {
        Self::new(since_midnight)
    }
}

impl<P: Precision> fmt::Display for TimeOfDay<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode.is_12_hour() {
            write!(f, "{}", self.hours)?;
        } else {
            write!(f, "{:02}", self.hours)?;
        }
        match P::TIER {
            Tier::Hour => {
                if !self.mode.is_12_hour() {
                    f.write_str("00")?;
                }
            }
            Tier::Minute => write!(f, ":{:02}", self.minutes)?,
            Tier::Second => write!(f, ":{:02}:{:02}", self.minutes, self.seconds)?,
            Tier::Subsecond => {
                let per_second = (P::TICKS_PER_HOUR / SECONDS_PER_HOUR) as u64;
                let width = ceil_log10(per_second);
                let scaled = i128::from(self.subseconds) * 10_i128.pow(width as u32)
                    / i128::from(per_second);
                write!(f, ":{:02}:{:02}.{scaled:0width$}", self.minutes, self.seconds)?;
            }
        }
        self.write_suffix(f)
    }
}
