use serde::{Deserialize, Serialize};

use crate::{CivilDate, DateTime, Focus, RangeBound};

/// Construction options for a [`crate::DatePicker`].
///
/// ```
/// # use month_picker::{DatePicker, Focus, Options};
/// let options: Options = serde_json::from_str(
///     r#"{ "date": "2023-02-02", "start": "2023-02-02", "end": "2023-02-10" }"#,
/// ).unwrap();
/// let picker = DatePicker::new(options);
/// assert_eq!(picker.focus(), Focus::Calendar);
/// assert!(!picker.is_selected());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Initial reference date; the grid shows its month.
    pub date:     DateTime,
    /// Earliest reachable date, inclusive.
    #[serde(default)]
    pub start:    Option<CivilDate>,
    /// Latest reachable date, inclusive.
    #[serde(default)]
    pub end:      Option<CivilDate>,
    /// Defaults to [`Focus::Calendar`].
    #[serde(default)]
    pub focus:    Focus,
    /// Whether the reference date starts out as a committed selection.
    #[serde(default)]
    pub selected: bool,
}

impl Options {
    /// Options for `date` with every other field at its default.
    pub fn new(date: impl Into<DateTime>) -> Self {
        Self {
            date:     date.into(),
            start:    None,
            end:      None,
            focus:    Focus::default(),
            selected: false,
        }
    }

    #[must_use]
    pub const fn start(mut self, start: CivilDate) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub const fn end(mut self, end: CivilDate) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub const fn focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub const fn range(&self) -> RangeBound {
        RangeBound::new(self.start, self.end)
    }
}
