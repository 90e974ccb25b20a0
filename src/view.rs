//! Text rendering for the picker.
//!
//! The content is fixed (month title, `Su Mo Tu We Th Fr Sa`, two-digit day
//! numbers, blanks for padding); only the SGR styling wrapped around each
//! piece comes from [`Styles`].

use crossterm::style::{Attribute, Color, ContentStyle};
use serde::{Deserialize, Serialize};

use crate::consts::DAYS_PER_WEEK;
use crate::grid::GridCell;
use crate::{DatePicker, Focus};

/// Columns of padding either side of a cell's label.
const CELL_PADDING: usize = 1;
const LABEL_WIDTH: usize = 2;
const CELL_WIDTH: usize = LABEL_WIDTH + 2 * CELL_PADDING;
const GRID_WIDTH: usize = CELL_WIDTH * DAYS_PER_WEEK as usize;

/// Bold and a 256-colour foreground, painted through crossterm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub bold:       bool,
    pub foreground: Option<u8>,
}

impl TextStyle {
    pub const PLAIN: Self = Self {
        bold:       false,
        foreground: None,
    };

    pub const fn bold() -> Self {
        Self {
            bold:       true,
            foreground: None,
        }
    }

    pub const fn fg(color: u8) -> Self {
        Self {
            bold:       false,
            foreground: Some(color),
        }
    }

    #[must_use]
    pub const fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Wraps `text` in the style's escape codes, or returns it untouched for
    /// a plain style.
    pub fn paint(&self, text: &str) -> String {
        ContentStyle::from(*self).apply(text).to_string()
    }
}

impl From<TextStyle> for ContentStyle {
    fn from(style: TextStyle) -> Self {
        let mut content = Self::new();
        content.foreground_color = style.foreground.map(Color::AnsiValue);
        if style.bold {
            content.attributes.set(Attribute::Bold);
        }
        content
    }
}

/// Styles for each kind of text in the picker.
///
/// The defaults are bold headers, grey days (247), a bold selected day, a
/// pink bold focused element (212) and dim grey (240) for days outside the
/// range. [`Styles::plain`] turns all of it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    pub header_text:   TextStyle,
    pub text:          TextStyle,
    pub selected_text: TextStyle,
    pub focused_text:  TextStyle,
    pub disabled_text: TextStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header_text:   TextStyle::bold(),
            text:          TextStyle::fg(247),
            selected_text: TextStyle::bold(),
            focused_text:  TextStyle::fg(212).with_bold(),
            disabled_text: TextStyle::fg(240),
        }
    }
}

impl Styles {
    pub const fn plain() -> Self {
        Self {
            header_text:   TextStyle::PLAIN,
            text:          TextStyle::PLAIN,
            selected_text: TextStyle::PLAIN,
            focused_text:  TextStyle::PLAIN,
            disabled_text: TextStyle::PLAIN,
        }
    }

    const fn for_cell(&self, cell: &GridCell) -> &TextStyle {
        if cell.is_focused {
            &self.focused_text
        } else if cell.is_selected {
            &self.selected_text
        } else if cell.is_disabled {
            &self.disabled_text
        } else {
            &self.text
        }
    }
}

fn pad_cell(painted: &str) -> String {
    let pad = " ".repeat(CELL_PADDING);
    format!("{pad}{painted}{pad}")
}

/// Centers `text` of visible width `width` within the grid width.
fn center(text: &str, width: usize) -> String {
    let spare = GRID_WIDTH.saturating_sub(width);
    let left = spare / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(spare - left))
}

/// Renders the title line, the weekday header and every week row, joined by newlines.
pub fn render(picker: &DatePicker, styles: &Styles) -> String {
    let grid = picker.grid();
    let focus = picker.focus();

    let month = grid.month().name();
    let year = grid.year().to_string();
    let month_style = if focus == Focus::MonthHeader {
        &styles.focused_text
    } else {
        &styles.header_text
    };
    let year_style = if focus == Focus::YearHeader {
        &styles.focused_text
    } else {
        &styles.header_text
    };
    let title = format!("{} {}", month_style.paint(month), year_style.paint(&year));

    let mut out = center(&title, month.len() + 1 + year.len());

    out.push('\n');
    for weekday in grid.header() {
        out.push_str(&pad_cell(&styles.header_text.paint(weekday.label())));
    }

    for row in grid.rows() {
        out.push('\n');
        for cell in row {
            out.push_str(&pad_cell(&styles.for_cell(cell).paint(&cell.label())));
        }
    }
    out
}
