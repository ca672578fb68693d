//! Interactive Game of Life in the terminal.
//!
//! The board is sized to the terminal at startup and seeded with the
//! fixed startup pattern. Key bindings are on the status line.

use lifewheel::tui::{App, AppConfig, CELL_COLUMNS};
use lifewheel::Universe;
use std::io;

/// Board dimensions filling the current terminal, with one row
/// reserved for the status line. Falls back to the default board when
/// the terminal size is unavailable.
fn sized_to_terminal() -> (u32, u32) {
    match crossterm::terminal::size() {
        Ok((columns, rows)) => {
            let width = u32::from((columns / CELL_COLUMNS).max(1));
            let height = u32::from(rows.saturating_sub(1).max(1));
            (width, height)
        }
        Err(_) => (Universe::DEFAULT_WIDTH, Universe::DEFAULT_HEIGHT),
    }
}

fn main() -> io::Result<()> {
    let (width, height) = sized_to_terminal();
    let universe = Universe::new(width, height);

    let mut app = App::new(universe, &AppConfig::default())?;
    app.run()
}
