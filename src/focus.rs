use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Which part of the picker receives directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// Ignore every date-altering intent.
    #[display(fmt = "none")]
    None,
    /// Up/Down change the month.
    #[display(fmt = "month header")]
    MonthHeader,
    /// Up/Down change the year.
    #[display(fmt = "year header")]
    YearHeader,
    /// Up/Down change the week, Left/Right the day.
    #[default]
    #[display(fmt = "calendar")]
    Calendar,
}

/// Date change requested by an intent under a given focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

/// What a directional intent resolves to under a given focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Step(Step),
    Focus(Focus),
    Nothing,
}

impl Focus {
    /// MonthHeader → YearHeader → Calendar, stopping at Calendar.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::MonthHeader => Self::YearHeader,
            Self::YearHeader | Self::Calendar => Self::Calendar,
            Self::None => Self::None,
        }
    }

    /// Calendar → YearHeader → MonthHeader, stopping at MonthHeader.
    #[must_use]
    pub const fn retreat(self) -> Self {
        match self {
            Self::Calendar => Self::YearHeader,
            Self::YearHeader | Self::MonthHeader => Self::MonthHeader,
            Self::None => Self::None,
        }
    }

    /// Action for Up: one unit back in time for the focused element.
    pub const fn up(self) -> Action {
        match self {
            Self::MonthHeader => Action::Step(Step::Months(-1)),
            Self::YearHeader => Action::Step(Step::Years(-1)),
            Self::Calendar => Action::Step(Step::Weeks(-1)),
            Self::None => Action::Nothing,
        }
    }

    /// Action for Down: one unit forward in time for the focused element.
    pub const fn down(self) -> Action {
        match self {
            Self::MonthHeader => Action::Step(Step::Months(1)),
            Self::YearHeader => Action::Step(Step::Years(1)),
            Self::Calendar => Action::Step(Step::Weeks(1)),
            Self::None => Action::Nothing,
        }
    }

    /// Action for Left: back a day on the calendar, or over to the month header.
    pub const fn left(self) -> Action {
        match self {
            Self::YearHeader => Action::Focus(Self::MonthHeader),
            Self::Calendar => Action::Step(Step::Days(-1)),
            Self::MonthHeader | Self::None => Action::Nothing,
        }
    }

    /// Action for Right: forward a day on the calendar, or over to the year header.
    pub const fn right(self) -> Action {
        match self {
            Self::MonthHeader => Action::Focus(Self::YearHeader),
            Self::Calendar => Action::Step(Step::Days(1)),
            Self::YearHeader | Self::None => Action::Nothing,
        }
    }
}
