//! Line-driven host for the picker.
//!
//! Type one command per line: `h`/`j`/`k`/`l` (or `left`/`down`/`up`/`right`),
//! `tab`, `shift+tab`, `s` to toggle selection, `q` to quit. Set `RUST_LOG=debug`
//! to see navigation traces on stderr.

use std::io::{self, BufRead, Write};

use month_picker::{DatePicker, Effect, Focus, Intent, Options, Styles};
use tracing_subscriber::EnvFilter;

fn intent_for(line: &str) -> Option<Intent> {
    match line {
        "k" | "up" => Some(Intent::Up),
        "j" | "down" => Some(Intent::Down),
        "h" | "left" => Some(Intent::Left),
        "l" | "right" => Some(Intent::Right),
        "tab" => Some(Intent::FocusAdvance),
        "shift+tab" => Some(Intent::FocusRetreat),
        "q" | "ctrl+c" => Some(Intent::Quit),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options: Options = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str(&json)?,
        None => Options::new("2023-10-31".parse::<month_picker::CivilDate>()?)
            .focus(Focus::MonthHeader)
            .selected(true),
    };
    let styles = Styles::default();
    let mut picker = DatePicker::new(options);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", picker.view(&styles))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        if command == "s" {
            picker = if picker.is_selected() {
                picker.unselect_date()
            } else {
                picker.select_date()
            };
        } else if let Some(intent) = intent_for(command) {
            let update = picker.apply(intent);
            if update.effect == Some(Effect::Quit) {
                break;
            }
            if let Some(rejection) = update.rejection {
                writeln!(stdout, "! {rejection}")?;
            }
            picker = update.picker;
        } else {
            writeln!(stdout, "? unknown command: {command}")?;
            continue;
        }

        writeln!(stdout, "{}", picker.view(&styles))?;
        writeln!(stdout, "focus: {} | date: {}", picker.focus(), picker.time())?;
    }

    Ok(())
}
