//! Shorthand constructors for tests. Panics on invalid input.

use crate::{CivilDate, DateTime, Month, TimeOfDay, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("valid year")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("valid month")
}

pub fn date(y: u16, m: u8, d: u8) -> CivilDate {
    CivilDate::new(y, m, d).expect("valid date")
}

pub fn datetime(y: u16, m: u8, d: u8, hour: u8, minute: u8, second: u8) -> DateTime {
    DateTime::new(
        date(y, m, d),
        TimeOfDay::new(hour, minute, second).expect("valid time"),
    )
}
