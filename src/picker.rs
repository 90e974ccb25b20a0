//! The navigation controller.
//!
//! [`DatePicker`] is a small value. Every operation returns the next value and
//! leaves the receiver alone, so a host can keep the previous state around to
//! diff against or simply overwrite it.

use crate::focus::{Action, Step};
use crate::grid::{self, WeekGrid};
use crate::view::{self, Styles};
use crate::{CivilDate, DateTime, Focus, Options, RangeBound, Rejection, normalize};

/// A pre-classified user action. Mapping keys to intents is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    FocusAdvance,
    FocusRetreat,
    Quit,
}

/// Follow-up the host should carry out after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Quit,
}

/// Result of [`DatePicker::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    /// State after the intent; identical to the input when nothing changed.
    pub picker:    DatePicker,
    /// Reference date before the move, when the intent moved it. The new
    /// one is `picker.time()`.
    pub previous:  Option<DateTime>,
    /// Set when a date step was refused because of the range.
    pub rejection: Option<Rejection>,
    pub effect:    Option<Effect>,
}

impl Update {
    const fn unchanged(picker: DatePicker) -> Self {
        Self {
            picker,
            previous: None,
            rejection: None,
            effect: None,
        }
    }

    /// Whether the reference date moved.
    pub const fn is_moved(&self) -> bool {
        self.previous.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePicker {
    time:     DateTime,
    range:    RangeBound,
    focus:    Focus,
    selected: bool,
}

impl DatePicker {
    pub const fn new(options: Options) -> Self {
        Self {
            time:     options.date,
            range:    options.range(),
            focus:    options.focus,
            selected: options.selected,
        }
    }

    /// The reference date, including its time of day.
    pub const fn time(&self) -> DateTime {
        self.time
    }

    /// The reference date without its time of day.
    pub const fn date(&self) -> CivilDate {
        normalize(self.time)
    }

    /// Navigation limits fixed at construction
    pub const fn range(&self) -> RangeBound {
        self.range
    }

    /// Which element owns keyboard input
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the reference date is a committed selection
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Dispatches `intent` against the current focus.
    pub fn apply(&self, intent: Intent) -> Update {
        let action = match intent {
            Intent::Quit => {
                return Update {
                    effect: Some(Effect::Quit),
                    ..Update::unchanged(*self)
                };
            },
            Intent::FocusAdvance => Action::Focus(self.focus.advance()),
            Intent::FocusRetreat => Action::Focus(self.focus.retreat()),
            Intent::Up => self.focus.up(),
            Intent::Down => self.focus.down(),
            Intent::Left => self.focus.left(),
            Intent::Right => self.focus.right(),
        };

        match action {
            Action::Nothing => Update::unchanged(*self),
            Action::Focus(focus) => Update::unchanged(self.set_focus(focus)),
            Action::Step(step) => match self.step(step) {
                Ok(picker) => Update {
                    previous: Some(self.time),
                    ..Update::unchanged(picker)
                },
                Err(rejection) => Update {
                    rejection: Some(rejection),
                    ..Update::unchanged(*self)
                },
            },
        }
    }

    /// Moves the reference date, keeping its time of day. A move made with the
    /// calendar focused also marks the date selected.
    ///
    /// # Errors
    /// Returns a [`Rejection`] carrying the current range when the candidate
    /// falls outside it, or outside the supported calendar.
    pub fn step(&self, step: Step) -> Result<Self, Rejection> {
        let current = self.date();
        let candidate = match step {
            Step::Days(days) => current.add_days(days),
            Step::Weeks(weeks) => current.add_weeks(weeks),
            Step::Months(months) => current.add_months(months),
            Step::Years(years) => current.add_years(years),
        };

        match candidate.filter(|date| self.range.contains(*date)) {
            Some(date) => {
                tracing::debug!(message = "date picker moved", from = %current, to = %date, ?step);
                Ok(Self {
                    time: self.time.with_date(date),
                    selected: self.selected || self.focus == Focus::Calendar,
                    ..*self
                })
            },
            None => {
                tracing::debug!(
                    message = "date picker step rejected",
                    from = %current,
                    ?step,
                    range = %self.range,
                );
                Err(Rejection { bound: self.range })
            },
        }
    }

    /// Back one day.
    ///
    /// # Errors
    /// See [`DatePicker::step`].
    pub fn yesterday(&self) -> Result<Self, Rejection> {
        self.step(Step::Days(-1))
    }

    /// Forward one day.
    ///
    /// # Errors
    /// See [`DatePicker::step`].
    pub fn tomorrow(&self) -> Result<Self, Rejection> {
        self.step(Step::Days(1))
    }

    /// # Errors
    /// See [`DatePicker::step`].
    pub fn last_week(&self) -> Result<Self, Rejection> {
        self.step(Step::Weeks(-1))
    }

    /// # Errors
    /// See [`DatePicker::step`].
    pub fn next_week(&self) -> Result<Self, Rejection> {
        self.step(Step::Weeks(1))
    }

    /// # Errors
    /// See [`DatePicker::step`].
    pub fn last_month(&self) -> Result<Self, Rejection> {
        self.step(Step::Months(-1))
    }

    /// Forward one month; an overflowing day rolls into the month after.
    ///
    /// # Errors
    /// See [`DatePicker::step`].
    pub fn next_month(&self) -> Result<Self, Rejection> {
        self.step(Step::Months(1))
    }

    /// # Errors
    /// See [`DatePicker::step`].
    pub fn last_year(&self) -> Result<Self, Rejection> {
        self.step(Step::Years(-1))
    }

    /// # Errors
    /// See [`DatePicker::step`].
    pub fn next_year(&self) -> Result<Self, Rejection> {
        self.step(Step::Years(1))
    }

    #[must_use]
    pub fn set_focus(&self, focus: Focus) -> Self {
        tracing::trace!(message = "date picker focus", from = %self.focus, to = %focus);
        Self { focus, ..*self }
    }

    /// Same as `set_focus(Focus::None)`.
    #[must_use]
    pub fn blur(&self) -> Self {
        self.set_focus(Focus::None)
    }

    /// Replaces the reference date as-is. The range is not consulted.
    #[must_use]
    pub const fn set_time(&self, time: DateTime) -> Self {
        Self { time, ..*self }
    }

    /// Marks the reference date as a committed selection.
    #[must_use]
    pub const fn select_date(&self) -> Self {
        Self {
            selected: true,
            ..*self
        }
    }

    #[must_use]
    pub const fn unselect_date(&self) -> Self {
        Self {
            selected: false,
            ..*self
        }
    }

    /// The visible month for this state.
    pub fn grid(&self) -> WeekGrid {
        grid::build(self.time, self.selected, self.focus, &self.range)
    }

    /// Text block for this state, see [`view::render`].
    pub fn view(&self, styles: &Styles) -> String {
        view::render(self, styles)
    }
}

impl From<Options> for DatePicker {
    fn from(options: Options) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, datetime};

    fn halloween() -> DatePicker {
        DatePicker::new(Options::new(date(2023, 10, 31)))
    }

    fn february(reference: CivilDate) -> DatePicker {
        DatePicker::new(
            Options::new(reference)
                .start(date(2023, 2, 2))
                .end(date(2023, 2, 10)),
        )
    }

    #[test]
    fn test_new_uses_options() {
        let picker = DatePicker::new(
            Options::new(datetime(2023, 10, 31, 9, 15, 0))
                .focus(Focus::YearHeader)
                .selected(true),
        );
        assert_eq!(picker.time(), datetime(2023, 10, 31, 9, 15, 0));
        assert_eq!(picker.date(), date(2023, 10, 31));
        assert_eq!(picker.focus(), Focus::YearHeader);
        assert!(picker.is_selected());
        assert!(picker.range().is_unbounded());
    }

    #[test]
    fn test_named_steps() {
        struct TestCase {
            name: &'static str,
            step: fn(&DatePicker) -> Result<DatePicker, Rejection>,
            want: CivilDate,
        }

        let cases = [
            TestCase { name: "yesterday", step: DatePicker::yesterday, want: date(2023, 10, 30) },
            TestCase { name: "tomorrow", step: DatePicker::tomorrow, want: date(2023, 11, 1) },
            TestCase { name: "last_week", step: DatePicker::last_week, want: date(2023, 10, 24) },
            TestCase { name: "next_week", step: DatePicker::next_week, want: date(2023, 11, 7) },
            TestCase { name: "last_month", step: DatePicker::last_month, want: date(2023, 10, 1) },
            TestCase { name: "next_month", step: DatePicker::next_month, want: date(2023, 12, 1) },
            TestCase { name: "last_year", step: DatePicker::last_year, want: date(2022, 10, 31) },
            TestCase { name: "next_year", step: DatePicker::next_year, want: date(2024, 10, 31) },
        ];

        let picker = halloween();
        for case in &cases {
            let next = (case.step)(&picker).unwrap();
            assert_eq!(next.date(), case.want, "{}", case.name);
            assert_eq!(picker.date(), date(2023, 10, 31), "{} mutated its receiver", case.name);
        }
    }

    #[test]
    fn test_day_then_week_forward() {
        let picker = halloween().tomorrow().unwrap();
        assert_eq!(picker.date(), date(2023, 11, 1));
        let picker = picker.next_week().unwrap();
        assert_eq!(picker.date(), date(2023, 11, 8));
    }

    #[test]
    fn test_steps_keep_time_of_day() {
        let picker = DatePicker::new(Options::new(datetime(2023, 10, 31, 18, 45, 30)));
        let next = picker.next_month().unwrap();
        assert_eq!(next.time(), datetime(2023, 12, 1, 18, 45, 30));
    }

    #[test]
    fn test_yesterday_at_start_is_rejected() {
        let picker = february(date(2023, 2, 2));
        let rejection = picker.yesterday().unwrap_err();
        assert_eq!(rejection.bound.start(), Some(date(2023, 2, 2)));
        assert_eq!(rejection.bound.end(), Some(date(2023, 2, 10)));
        assert_eq!(picker.date(), date(2023, 2, 2));
        assert!(picker.last_week().is_err());
    }

    #[test]
    fn test_tomorrow_at_end_is_rejected() {
        let picker = february(date(2023, 2, 10));
        assert!(picker.tomorrow().is_err());
        assert!(picker.next_week().is_err());
        assert_eq!(picker.date(), date(2023, 2, 10));
    }

    #[test]
    fn test_round_trip_inside_range() {
        let start = february(date(2023, 2, 2));
        let moved = start.tomorrow().unwrap();
        assert_eq!(moved.date(), date(2023, 2, 3));
        let back = moved.yesterday().unwrap();
        assert_eq!(back.date(), date(2023, 2, 2));
        assert_eq!(back, start.select_date());
    }

    #[test]
    fn test_single_step_rejection_does_not_snap() {
        // A week forward from Feb 5 would be Feb 12, past the end.
        let picker = february(date(2023, 2, 5));
        assert!(picker.next_week().is_err());
        assert_eq!(picker.next_week().unwrap_err(), picker.next_week().unwrap_err());
    }

    #[test]
    fn test_calendar_limits_reject() {
        let picker = DatePicker::new(Options::new(date(9999, 12, 31)));
        let rejection = picker.tomorrow().unwrap_err();
        assert!(rejection.bound.is_unbounded());
        assert!(DatePicker::new(Options::new(date(1, 1, 1))).yesterday().is_err());
    }

    #[test]
    fn test_apply_in_calendar() {
        let picker = halloween();
        let update = picker.apply(Intent::Right);
        assert_eq!(update.picker.date(), date(2023, 11, 1));
        assert_eq!(update.previous, Some(DateTime::from(date(2023, 10, 31))));
        assert!(update.is_moved());
        assert_eq!(update.rejection, None);
        assert_eq!(update.effect, None);

        assert_eq!(picker.apply(Intent::Left).picker.date(), date(2023, 10, 30));
        assert_eq!(picker.apply(Intent::Up).picker.date(), date(2023, 10, 24));
        assert_eq!(picker.apply(Intent::Down).picker.date(), date(2023, 11, 7));
    }

    #[test]
    fn test_apply_in_headers() {
        let month = halloween().set_focus(Focus::MonthHeader);
        assert_eq!(month.apply(Intent::Down).picker.date(), date(2023, 12, 1));
        assert_eq!(month.apply(Intent::Up).picker.date(), date(2023, 10, 1));
        assert_eq!(month.apply(Intent::Right).picker.focus(), Focus::YearHeader);
        assert_eq!(month.apply(Intent::Left), Update::unchanged(month));

        let year = halloween().set_focus(Focus::YearHeader);
        assert_eq!(year.apply(Intent::Down).picker.date(), date(2024, 10, 31));
        assert_eq!(year.apply(Intent::Up).picker.date(), date(2022, 10, 31));
        assert_eq!(year.apply(Intent::Left).picker.focus(), Focus::MonthHeader);
        assert_eq!(year.apply(Intent::Right), Update::unchanged(year));
    }

    #[test]
    fn test_apply_without_focus_is_noop() {
        let picker = halloween().blur();
        for intent in [Intent::Up, Intent::Down, Intent::Left, Intent::Right] {
            assert_eq!(picker.apply(intent), Update::unchanged(picker), "{intent:?}");
        }
    }

    #[test]
    fn test_apply_rejection() {
        let picker = february(date(2023, 2, 2));
        let update = picker.apply(Intent::Left);
        assert_eq!(update.picker, picker);
        assert_eq!(update.previous, None);
        assert_eq!(
            update.rejection,
            Some(Rejection {
                bound: RangeBound::new(Some(date(2023, 2, 2)), Some(date(2023, 2, 10))),
            })
        );
    }

    #[test]
    fn test_header_steps_rejected_outside_range() {
        struct TestCase {
            focus:  Focus,
            intent: Intent,
        }

        let cases = [
            TestCase { focus: Focus::MonthHeader, intent: Intent::Up },
            TestCase { focus: Focus::MonthHeader, intent: Intent::Down },
            TestCase { focus: Focus::YearHeader, intent: Intent::Up },
            TestCase { focus: Focus::YearHeader, intent: Intent::Down },
        ];

        for case in &cases {
            let picker = february(date(2023, 2, 5)).set_focus(case.focus);
            let update = picker.apply(case.intent);
            assert_eq!(update.picker, picker, "{} {:?}", case.focus, case.intent);
            assert_eq!(update.previous, None, "{} {:?}", case.focus, case.intent);
            assert_eq!(
                update.rejection.map(|rejection| rejection.bound),
                Some(picker.range()),
                "{} {:?}",
                case.focus,
                case.intent
            );
        }
    }

    #[test]
    fn test_named_month_and_year_steps_rejected() {
        let picker = february(date(2023, 2, 5));
        let steps: [fn(&DatePicker) -> Result<DatePicker, Rejection>; 4] = [
            DatePicker::last_month,
            DatePicker::next_month,
            DatePicker::last_year,
            DatePicker::next_year,
        ];
        for step in steps {
            assert_eq!(step(&picker).unwrap_err().bound, picker.range());
        }
        assert_eq!(picker.date(), date(2023, 2, 5));
    }

    #[test]
    fn test_month_overflow_past_end_is_rejected() {
        // Jan 31 + 1 month rolls over to Mar 3, beyond Feb 28.
        let picker = DatePicker::new(Options::new(date(2023, 1, 31)).end(date(2023, 2, 28)));
        assert!(picker.next_month().is_err());

        let header = picker.set_focus(Focus::MonthHeader);
        let update = header.apply(Intent::Down);
        assert_eq!(update.picker, header);
        assert!(update.rejection.is_some());
    }

    #[test]
    fn test_calendar_move_selects_date() {
        let picker = halloween();
        assert!(!picker.is_selected());

        let moved = picker.apply(Intent::Right).picker;
        assert!(moved.is_selected());
        let grid = moved.grid();
        let focused: Vec<_> = grid.cells().filter(|cell| cell.is_focused).collect();
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].date, Some(date(2023, 11, 1)));

        // Header moves leave the selection alone.
        let header = picker.set_focus(Focus::MonthHeader).apply(Intent::Down).picker;
        assert_eq!(header.date(), date(2023, 12, 1));
        assert!(!header.is_selected());

        // A rejected calendar move does not select either.
        let rejected = february(date(2023, 2, 2)).apply(Intent::Left).picker;
        assert!(!rejected.is_selected());
    }

    #[test]
    fn test_apply_focus_cycle() {
        let mut picker = halloween().set_focus(Focus::MonthHeader);
        let mut path = vec![picker.focus()];
        for _ in 0..3 {
            picker = picker.apply(Intent::FocusAdvance).picker;
            path.push(picker.focus());
        }
        assert_eq!(path, [
            Focus::MonthHeader,
            Focus::YearHeader,
            Focus::Calendar,
            Focus::Calendar
        ]);

        for _ in 0..3 {
            picker = picker.apply(Intent::FocusRetreat).picker;
        }
        assert_eq!(picker.focus(), Focus::MonthHeader);
    }

    #[test]
    fn test_quit_is_independent_of_focus() {
        for focus in [Focus::None, Focus::MonthHeader, Focus::YearHeader, Focus::Calendar] {
            let picker = halloween().set_focus(focus);
            let update = picker.apply(Intent::Quit);
            assert_eq!(update.effect, Some(Effect::Quit));
            assert_eq!(update.picker, picker);
        }
    }

    #[test]
    fn test_selection_toggles() {
        let picker = halloween().set_focus(Focus::MonthHeader);
        let selected = picker.select_date();
        assert!(selected.is_selected());
        assert_eq!(selected.time(), picker.time());
        assert_eq!(selected.focus(), picker.focus());
        assert!(!selected.unselect_date().is_selected());
    }

    #[test]
    fn test_set_time_ignores_range() {
        let picker = february(date(2023, 2, 5)).set_time(date(2024, 1, 1).into());
        assert_eq!(picker.date(), date(2024, 1, 1));
        // Out of range now, so every step is rejected until the host moves it back.
        assert!(picker.tomorrow().is_err());
        assert!(picker.yesterday().is_err());
    }

    #[test]
    fn test_initial_date_before_start() {
        let picker = february(date(2023, 2, 1));
        assert_eq!(picker.date(), date(2023, 2, 1));
        assert!(picker.yesterday().is_err());
        assert_eq!(picker.tomorrow().unwrap().date(), date(2023, 2, 2));
    }

    #[test]
    fn test_set_focus_and_blur() {
        for focus in [Focus::None, Focus::Calendar, Focus::MonthHeader, Focus::YearHeader] {
            let picker = halloween().set_focus(focus);
            assert_eq!(picker.focus(), focus);
            assert_eq!(picker.blur().focus(), Focus::None);
        }
    }

    #[test]
    fn test_grid_tracks_state() {
        let picker = halloween().select_date();
        let grid = picker.grid();
        let focused: Vec<_> = grid.cells().filter(|cell| cell.is_focused).collect();
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].date, Some(date(2023, 10, 31)));

        let moved = picker.apply(Intent::Right).picker.grid();
        assert_eq!(moved.month().get(), 11);
    }
}
