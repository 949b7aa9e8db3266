use crate::clock::WallClock;
use crate::types::{Day, Month, Year};
use crate::ymd::YearMonthDay;

pub fn ymd(year: i16, month: u8, day: u8) -> YearMonthDay {
    YearMonthDay::new(Year::new(year), Month::new(month), Day::new(day))
}

/// A clock stuck on one date.
pub struct FixedClock(pub YearMonthDay);

impl WallClock for FixedClock {
    fn today(&self) -> YearMonthDay {
        self.0
    }
}
