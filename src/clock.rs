use crate::day_point::DayPoint;
use crate::ymd::YearMonthDay;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: i64 = 86_400;

/// Source of the current civil date.
///
/// [`Date::today_with`](crate::Date::today_with) trusts the returned value
/// to be a valid date.
pub trait WallClock {
    fn today(&self) -> YearMonthDay;
}

/// Reads the system clock and reports the UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Whole days since 1970-01-01 in UTC, rounding toward negative infinity
    /// for times before the epoch.
    fn days_since_epoch(now: SystemTime) -> i64 {
        let seconds = match now.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            // Anything below a whole second still belongs to the previous day.
            Err(err) => {
                let before = err.duration();
                let whole = before.as_secs() as i64;
                if before.subsec_nanos() > 0 { -whole - 1 } else { -whole }
            }
        };
        seconds.div_euclid(SECONDS_PER_DAY)
    }

    pub(crate) fn date_at(now: SystemTime) -> YearMonthDay {
        let days = Self::days_since_epoch(now);
        let days = days.clamp(
            i64::from(DayPoint::MIN.count()),
            i64::from(DayPoint::MAX.count()),
        );
        let point = DayPoint::new(days as i32);
        trace!("system clock reads day {}", point.count());
        YearMonthDay::from(point)
    }
}

impl WallClock for SystemClock {
    fn today(&self) -> YearMonthDay {
        Self::date_at(SystemTime::now())
    }
}
