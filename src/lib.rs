//! A month-view date picker for terminal applications.
//!
//! The crate owns no event loop or screen. A host feeds it already-classified
//! [`Intent`]s through [`DatePicker::apply`] and paints the string returned by
//! [`DatePicker::view`]:
//!
//! ```
//! use month_picker::{CivilDate, DatePicker, Intent, Options, Styles};
//!
//! let start = CivilDate::new(2023, 2, 2).unwrap();
//! let end = CivilDate::new(2023, 2, 10).unwrap();
//! let picker = DatePicker::new(Options::new(start).start(start).end(end));
//!
//! // Stepping before the start is refused and the state is unchanged.
//! let update = picker.apply(Intent::Left);
//! assert_eq!(update.picker, picker);
//! assert!(update.rejection.is_some());
//!
//! let update = picker.apply(Intent::Right);
//! assert_eq!(update.picker.date(), CivilDate::new(2023, 2, 3).unwrap());
//! println!("{}", update.picker.view(&Styles::default()));
//! ```

mod consts;
mod date;
mod focus;
mod grid;
mod options;
mod picker;
mod range;
mod types;
mod view;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use date::{
    CivilDate, DateTime, first_of_month, last_of_month, leading_sunday, normalize, trailing_sunday,
};
pub use focus::{Action, Focus, Step};
pub use grid::{GridCell, Week, WeekGrid, build as build_grid};
pub use options::Options;
pub use picker::{DatePicker, Effect, Intent, Update};
pub use range::{RangeBound, Rejection, in_bounds};
pub use types::{Day, Month, TimeOfDay, Weekday, Year, days_in_month, is_leap_year};
pub use view::{Styles, TextStyle, render};

/// Invalid calendar components or a malformed date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[error("Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
}
