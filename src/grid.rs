//! Month grid construction.
//!
//! A grid covers the displayed month padded out to whole Sunday-first weeks.
//! Building one is a pure function of the reference date, selection flag,
//! focus and range; nothing is cached between builds.

use std::array;

use crate::consts::{BLANK_LABEL, DAYS_PER_WEEK};
use crate::types::{Month, Weekday, Year};
use crate::{CivilDate, DateTime, Focus, RangeBound, normalize};

const COLUMNS: usize = DAYS_PER_WEEK as usize;

/// One day slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// `None` only for padding that would fall outside 0001-01-01..=9999-12-31.
    pub date:        Option<CivilDate>,
    pub in_month:    bool,
    pub is_selected: bool,
    pub is_focused:  bool,
    pub is_disabled: bool,
}

impl GridCell {
    /// Two-digit day for cells in the displayed month, blanks otherwise.
    pub fn label(&self) -> String {
        match self.date {
            Some(date) if self.in_month => date.day().to_string(),
            _ => BLANK_LABEL.to_owned(),
        }
    }
}

/// A week row, Sunday through Saturday.
pub type Week = [GridCell; COLUMNS];

/// The visible month: a weekday header plus 4 to 6 week rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeekGrid {
    year:  Year,
    month: Month,
    rows:  Vec<Week>,
}

impl WeekGrid {
    /// Year of the displayed month
    pub const fn year(&self) -> Year {
        self.year
    }

    /// The displayed month
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Weekday labels, Sunday first.
    pub fn header(&self) -> [Weekday; COLUMNS] {
        array::from_fn(|column| Weekday::from_index(u8::try_from(column).unwrap_or_default()))
    }

    pub fn rows(&self) -> &[Week] {
        &self.rows
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten()
    }

    /// Index of the row holding `date`, if it is on the grid.
    pub fn row_of(&self, date: CivilDate) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|cell| cell.date == Some(date)))
    }
}

/// Lays out the month containing `reference`.
pub fn build(reference: DateTime, selected: bool, focus: Focus, bound: &RangeBound) -> WeekGrid {
    let current = normalize(reference);
    let span = current.grid_span();
    let week = i64::from(DAYS_PER_WEEK);

    let cell = |day_number: i64| -> GridCell {
        let date = CivilDate::from_day_number(day_number);
        let in_month = date.is_some_and(|d| d.year() == current.year() && d.month() == current.month());
        let is_current = selected && date == Some(current);
        GridCell {
            date,
            in_month,
            is_selected: is_current && focus != Focus::Calendar,
            is_focused: is_current && focus == Focus::Calendar,
            is_disabled: date.is_none_or(|d| !bound.contains(d)),
        }
    };

    let row_count = (span.end - span.start) / week;
    let rows = (0..row_count)
        .map(|row| {
            let sunday = span.start + row * week;
            array::from_fn(|column| cell(sunday + i64::try_from(column).unwrap_or_default()))
        })
        .collect();

    WeekGrid {
        year: current.year(),
        month: current.month(),
        rows,
    }
}
