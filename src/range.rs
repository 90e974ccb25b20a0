use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CivilDate, DateTime, OPEN_BOUND, RANGE_SEPARATOR, normalize};

/// Optional inclusive limits on navigation.
///
/// Each side is applied independently. A start later than the end is not
/// rejected here; it simply leaves no admissible date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RangeBound {
    #[serde(default)]
    start: Option<CivilDate>,
    #[serde(default)]
    end:   Option<CivilDate>,
}

/// A navigation step that would have left the configured range.
///
/// Returned instead of a new state; the picker it was produced from is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("date outside of allowed range {bound}")]
pub struct Rejection {
    pub bound: RangeBound,
}

impl RangeBound {
    pub const fn new(start: Option<CivilDate>, end: Option<CivilDate>) -> Self {
        Self { start, end }
    }

    /// No limit on either side.
    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Earliest admissible date, if any
    pub const fn start(&self) -> Option<CivilDate> {
        self.start
    }

    /// Latest admissible date, if any
    pub const fn end(&self) -> Option<CivilDate> {
        self.end
    }

    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True when both sides are set and the start is after the end.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }

    /// Inclusive check on each present side.
    pub fn contains(&self, date: CivilDate) -> bool {
        let after_start = self.start.is_none_or(|start| date >= start);
        let before_end = self.end.is_none_or(|end| date <= end);
        after_start && before_end
    }

    /// Same as [`RangeBound::contains`] after dropping the time of day.
    pub fn admits(&self, value: DateTime) -> bool {
        self.contains(normalize(value))
    }
}

/// Whether `date` satisfies every present side of `bound`.
pub fn in_bounds(date: CivilDate, bound: &RangeBound) -> bool {
    bound.contains(date)
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => f.write_str(OPEN_BOUND)?,
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => f.write_str(OPEN_BOUND),
        }
    }
}
