//! Civil-calendar arithmetic.
//!
//! Dates are proleptic Gregorian `(year, month, day)` triples between
//! `0001-01-01` and `9999-12-31`. Every stepping operation is checked and
//! returns `None` when the result would leave that window.
//!
//! Month and year stepping keep the day number and let it overflow into the
//! following month instead of clamping it: October 31 plus one month is
//! "November 31", which lands on December 1.

use std::ops::Range;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DateError;
use crate::consts::{
    DATE_SEPARATOR, DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_WEEK, EPOCH_WEEKDAY, MAX_MONTH, MIN_DAY,
};
use crate::types::{Day, Month, TimeOfDay, Weekday, Year};

/// Days from 0000-03-01 to 0001-01-01 in the shifted (March-first) calendar.
const SHIFTED_EPOCH_OFFSET: i64 = 306;

/// A date with no time-of-day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CivilDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CivilDate {
    /// # Errors
    /// Returns the matching `DateError` variant for the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(self) -> Year {
        self.year
    }

    pub const fn month(self) -> Month {
        self.month
    }

    pub const fn day(self) -> Day {
        self.day
    }

    /// Days elapsed since 0001-01-01.
    pub fn day_number(self) -> i64 {
        let (y, m, d) = (
            i64::from(self.year.get()),
            i64::from(self.month.get()),
            i64::from(self.day.get()),
        );
        // Shift the year to start in March so the leap day is the last day.
        let y = if m <= 2 { y - 1 } else { y };
        let era = y.div_euclid(400);
        let year_of_era = y - era * 400;
        let month_from_march = (m + 9) % 12;
        let day_of_year = (153 * month_from_march + 2) / 5 + d - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - SHIFTED_EPOCH_OFFSET
    }

    /// Inverse of [`CivilDate::day_number`]. `None` outside the supported years.
    pub fn from_day_number(days: i64) -> Option<Self> {
        if days < 0 {
            return None;
        }
        let z = days.checked_add(SHIFTED_EPOCH_OFFSET)?;
        let era = z / DAYS_PER_GREGORIAN_CYCLE;
        let day_of_era = z - era * DAYS_PER_GREGORIAN_CYCLE;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let month_from_march = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
        let month = if month_from_march < 10 {
            month_from_march + 3
        } else {
            month_from_march - 9
        };
        let year = year_of_era + era * 400 + i64::from(month <= 2);

        Self::new(
            u16::try_from(year).ok()?,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
        )
        .ok()
    }

    pub fn weekday(self) -> Weekday {
        let index = (self.day_number() + i64::from(EPOCH_WEEKDAY)).rem_euclid(i64::from(DAYS_PER_WEEK));
        Weekday::from_index(u8::try_from(index).unwrap_or_default())
    }

    /// Plain day arithmetic.
    pub fn add_days(self, days: i64) -> Option<Self> {
        Self::from_day_number(self.day_number().checked_add(days)?)
    }

    pub fn add_weeks(self, weeks: i64) -> Option<Self> {
        self.add_days(weeks.checked_mul(i64::from(DAYS_PER_WEEK))?)
    }

    /// Moves the month by `months`, keeping the day number and rolling any
    /// overflow into the next month (Oct 31 + 1 month = Dec 1).
    pub fn add_months(self, months: i64) -> Option<Self> {
        let total = (i64::from(self.year.get()) * i64::from(MAX_MONTH)
            + i64::from(self.month.get() - 1))
        .checked_add(months)?;
        let year = u16::try_from(total.div_euclid(i64::from(MAX_MONTH))).ok()?;
        let month = u8::try_from(total.rem_euclid(i64::from(MAX_MONTH)) + 1).ok()?;
        let first = Self::new(year, month, MIN_DAY).ok()?;
        first.add_days(i64::from(self.day.get() - MIN_DAY))
    }

    /// Same rollover rule as [`CivilDate::add_months`]: Feb 29 + 1 year = Mar 1.
    pub fn add_years(self, years: i64) -> Option<Self> {
        self.add_months(years.checked_mul(i64::from(MAX_MONTH))?)
    }

    pub const fn first_of_month(self) -> Self {
        Self {
            day: Day::FIRST,
            ..self
        }
    }

    pub fn last_of_month(self) -> Self {
        Self {
            day: Day::last_of(self.year, self.month),
            ..self
        }
    }

    /// Day numbers covered by this month's grid: from the Sunday on or before
    /// the 1st up to (excluding) the first Sunday after the last day.
    pub(crate) fn grid_span(self) -> Range<i64> {
        let first = self.first_of_month();
        let start = first.day_number() - i64::from(first.weekday().index());
        let after_last = self.last_of_month().day_number() + 1;
        let week = i64::from(DAYS_PER_WEEK);
        let pad = (week - (after_last - start).rem_euclid(week)) % week;
        start..after_last + pad
    }

    /// The Sunday on or before the first of the month.
    /// `None` when that Sunday falls before 0001-01-01.
    pub fn leading_sunday(self) -> Option<Self> {
        Self::from_day_number(self.grid_span().start)
    }

    /// The first Sunday on or after the day following the last of the month.
    /// `None` when that Sunday falls after 9999-12-31.
    pub fn trailing_sunday(self) -> Option<Self> {
        Self::from_day_number(self.grid_span().end)
    }
}

impl FromStr for CivilDate {
    type Err = DateError;

    /// Strict ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [y, m, d] = parts[..] else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };
        let all_digits = parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit()));
        if !all_digits || y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let number = |part: &str| -> Result<u16, DateError> {
            part.parse::<u16>()
                .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))
        };
        let month = u8::try_from(number(m)?).map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;
        let day = u8::try_from(number(d)?).map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;
        Self::new(number(y)?, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A civil date with an attached time of day.
///
/// The time is carried through navigation untouched; only [`DateTime::date`]
/// takes part in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{date}T{time}")]
pub struct DateTime {
    date: CivilDate,
    time: TimeOfDay,
}

impl DateTime {
    pub const fn new(date: CivilDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    pub const fn date(self) -> CivilDate {
        self.date
    }

    pub const fn time(self) -> TimeOfDay {
        self.time
    }

    /// Replaces the date, keeping the time of day.
    #[must_use]
    pub const fn with_date(self, date: CivilDate) -> Self {
        Self { date, ..self }
    }
}

impl From<CivilDate> for DateTime {
    fn from(date: CivilDate) -> Self {
        Self::new(date, TimeOfDay::MIDNIGHT)
    }
}

impl FromStr for DateTime {
    type Err = DateError;

    /// Accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((date, time)) = trimmed.split_once('T') else {
            return trimmed.parse::<CivilDate>().map(Self::from);
        };

        let fields: Vec<&str> = time.split(':').collect();
        let [h, m, sec] = fields[..] else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };
        let field = |part: &str| -> Result<u8, DateError> {
            part.parse::<u8>()
                .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))
        };
        let time = TimeOfDay::new(field(h)?, field(m)?, field(sec)?)?;
        Ok(Self::new(date.parse()?, time))
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Drops sub-day precision.
pub const fn normalize(value: DateTime) -> CivilDate {
    value.date
}

pub fn first_of_month(date: CivilDate) -> CivilDate {
    date.first_of_month()
}

pub fn last_of_month(date: CivilDate) -> CivilDate {
    date.last_of_month()
}

pub fn leading_sunday(date: CivilDate) -> Option<CivilDate> {
    date.leading_sunday()
}

pub fn trailing_sunday(date: CivilDate) -> Option<CivilDate> {
    date.trailing_sunday()
}
