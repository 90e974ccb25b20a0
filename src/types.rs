use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_NAMES, WEEKDAY_LABELS,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A calendar year in `MIN_YEAR..=MAX_YEAR` (1..=9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `DateError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::InvalidYear(value));
        }
        NonZeroU16::new(value).map(Self).ok_or(DateError::InvalidYear(value))
    }

    /// Returns the year as a plain number
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month number in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `DateError::InvalidMonth` for 0 or anything past December.
    pub fn new(value: u8) -> Result<Self, DateError> {
        match NonZeroU8::new(value) {
            Some(nz) if value <= MAX_MONTH => Ok(Self(nz)),
            _ => Err(DateError::InvalidMonth(value)),
        }
    }

    /// Returns the month number, January = 1
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full English name, e.g. "October"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day of month, checked against the length of the month it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    pub(crate) const FIRST: Self = Self(NonZeroU8::MIN);

    /// Last day of `year`-`month`
    pub(crate) fn last_of(year: Year, month: Month) -> Self {
        NonZeroU8::new(days_in_month(year.get(), month.get())).map_or(Self::FIRST, Self)
    }

    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of `year`-`month`.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }

    /// Returns the day of month
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// Day of the week. Discriminants count from Sunday, matching grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Su")]
    Sunday = 0,
    #[display(fmt = "Mo")]
    Monday = 1,
    #[display(fmt = "Tu")]
    Tuesday = 2,
    #[display(fmt = "We")]
    Wednesday = 3,
    #[display(fmt = "Th")]
    Thursday = 4,
    #[display(fmt = "Fr")]
    Friday = 5,
    #[display(fmt = "Sa")]
    Saturday = 6,
}

impl Weekday {
    /// Weekday for a column index; wraps modulo 7
    pub const fn from_index(index: u8) -> Self {
        match index % DAYS_PER_WEEK {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Zero-based column, Sunday = 0
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        WEEKDAY_LABELS[self as usize]
    }
}

/// Sub-day precision carried alongside a date. Never compared by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[display(fmt = "{hour:02}:{minute:02}:{second:02}")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// # Errors
    /// Returns `DateError::InvalidTime` if any component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(DateError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
