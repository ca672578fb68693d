//! The interactive app: state, key bindings, and the main event loop.
//!
//! `App::run` multiplexes the two actor channels with `select!`. Frame
//! pulses advance the simulation (when playing) and repaint; input
//! events mutate state and are reflected on the next pulse.

use super::events::{InputActor, InputEvent, TickerActor};
use super::fps::FpsCounter;
use super::screen::{Screen, CELL_COLUMNS};
use crate::pattern::{self, Pattern};
use crate::universe::Universe;
use crossbeam_channel::{bounded, select, Receiver};
use crossterm::event::KeyCode;
use std::io;
use std::time::Duration;

/// Fewest generations advanced per frame while playing.
const MIN_TICKS_PER_FRAME: u32 = 1;
/// Most generations advanced per frame while playing.
const MAX_TICKS_PER_FRAME: u32 = 16;
/// Capacity of the input event channel.
const INPUT_CHANNEL_CAPACITY: usize = 64;

/// Configuration for the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interval between frame pulses.
    pub frame_interval: Duration,
    /// How long the input thread waits for an event before re-checking
    /// its shutdown flag.
    pub input_poll_timeout: Duration,
    /// Foreground color for live cells.
    pub alive_color: (u8, u8, u8),
    /// Background color for dead cells.
    pub dead_color: (u8, u8, u8),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // ~30 FPS
            frame_interval: Duration::from_millis(33),
            input_poll_timeout: Duration::from_millis(10),
            alive_color: (0xE6, 0xE6, 0xE6),
            dead_color: (0x10, 0x10, 0x10),
        }
    }
}

/// The interactive simulation app.
///
/// # Key Bindings
///
/// | Key          | Action                                  |
/// |--------------|-----------------------------------------|
/// | Space        | Play / pause                            |
/// | Left click   | Toggle the clicked cell                 |
/// | `1`..`7`     | Stamp a catalog pattern at the center   |
/// | `+` / `-`    | More / fewer generations per frame      |
/// | `c`          | Clear the board                         |
/// | `r`          | Reseed with the startup pattern         |
/// | `q` / Esc    | Quit                                    |
pub struct App {
    universe: Universe,
    screen: Screen,
    ticker: Option<TickerActor>,
    input: Option<InputActor>,
    input_rx: Receiver<InputEvent>,
    fps: FpsCounter,
    /// Whether frame pulses advance the simulation.
    playing: bool,
    /// Set when the user asks to quit.
    quit: bool,
    /// Generations advanced per frame pulse while playing.
    ticks_per_frame: u32,
    /// Generations advanced since the board was last seeded or cleared.
    generation: u64,
}

impl App {
    /// Build the app around a universe and take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new(universe: Universe, config: &AppConfig) -> io::Result<Self> {
        let screen = Screen::new(config.alive_color, config.dead_color)?;

        let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
        let input = InputActor::spawn(input_tx, config.input_poll_timeout);
        let ticker = TickerActor::spawn(config.frame_interval);

        Ok(Self {
            universe,
            screen,
            ticker: Some(ticker),
            input: Some(input),
            input_rx,
            fps: FpsCounter::new(),
            playing: true,
            quit: false,
            ticks_per_frame: MIN_TICKS_PER_FRAME,
            generation: 0,
        })
    }

    /// Run the event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing to the terminal fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.draw()?;

        // Cloned handles so select! does not hold a borrow of self
        let pulse_rx = match &self.ticker {
            Some(ticker) => ticker.receiver().clone(),
            None => return Ok(()),
        };
        let input_rx = self.input_rx.clone();

        while !self.quit {
            select! {
                recv(pulse_rx) -> pulse => match pulse {
                    Ok(_) => self.on_frame()?,
                    Err(_) => self.quit = true,
                },
                recv(input_rx) -> event => match event {
                    Ok(event) => self.on_input(event),
                    Err(_) => self.quit = true,
                },
            }
        }
        Ok(())
    }

    /// Advance and repaint for one frame pulse.
    fn on_frame(&mut self) -> io::Result<()> {
        if self.playing {
            for _ in 0..self.ticks_per_frame {
                self.universe.tick();
            }
            self.generation += u64::from(self.ticks_per_frame);
        }
        self.fps.record_frame();
        self.draw()
    }

    /// Apply a single input event to the app state.
    fn on_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(code) => self.on_key(code),
            InputEvent::Click { column, row } => self.on_click(column, row),
            InputEvent::Resize { width, height } => self.screen.handle_resize(width, height),
            InputEvent::Error(_) => self.quit = true,
        }
    }

    /// Key bindings.
    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => self.playing = !self.playing,
            KeyCode::Char('c') => {
                self.universe.clear_cells();
                self.generation = 0;
            }
            KeyCode::Char('r') => {
                self.universe = Universe::new(self.universe.width(), self.universe.height());
                self.generation = 0;
            }
            KeyCode::Char(digit @ '1'..='7') => self.stamp_for_digit(digit),
            KeyCode::Char('+' | '=') => {
                self.ticks_per_frame = (self.ticks_per_frame + 1).min(MAX_TICKS_PER_FRAME);
            }
            KeyCode::Char('-') => {
                self.ticks_per_frame = self
                    .ticks_per_frame
                    .saturating_sub(1)
                    .max(MIN_TICKS_PER_FRAME);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Stamp the catalog pattern bound to `digit` at the board center.
    fn stamp_for_digit(&mut self, digit: char) {
        if let Some(found) = pattern_for_digit(digit) {
            let (row, column) = centered_origin(&self.universe, found);
            self.universe.stamp(found, row, column);
        }
    }

    /// Toggle the clicked cell, ignoring clicks outside the board.
    fn on_click(&mut self, column: u16, row: u16) {
        let status_row = self.screen.height().saturating_sub(1);
        if let Some((cell_row, cell_column)) = clicked_cell(column, row, status_row) {
            if self.universe.index_of(cell_row, cell_column).is_some() {
                self.universe.toggle_cell(cell_row, cell_column);
            }
        }
    }

    /// Render the current state.
    fn draw(&mut self) -> io::Result<()> {
        let status = format!(
            " {}  gen {}  pop {}  x{}  {:.0} fps  |  space pause  1-7 stamp  c clear  r seed  +/- speed  q quit",
            if self.playing { "RUN" } else { "PAUSE" },
            self.generation,
            self.universe.population(),
            self.ticks_per_frame,
            self.fps.fps(),
        );
        self.screen.draw(&self.universe, &status)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Join the event threads before the screen teardown runs
        if let Some(input) = self.input.take() {
            input.join();
        }
        if let Some(ticker) = self.ticker.take() {
            ticker.join();
        }
    }
}

/// Catalog pattern bound to a digit key, `'1'` through `'7'`.
fn pattern_for_digit(digit: char) -> Option<&'static Pattern> {
    let index = digit.to_digit(10)?.checked_sub(1)?;
    pattern::ALL.get(index as usize).copied()
}

/// Origin that centers `pattern` on the board. A pattern larger than
/// the board gets origin 0 on that axis and wraps when stamped.
fn centered_origin(universe: &Universe, pattern: &Pattern) -> (u32, u32) {
    let row = universe.height().saturating_sub(pattern.height()) / 2;
    let column = universe.width().saturating_sub(pattern.width()) / 2;
    (row, column)
}

/// Board cell covered by a click at screen position (`column`, `row`).
///
/// Returns `None` on the status row at `status_row` or below it. The cell
/// may still lie outside a universe smaller than the visible area, so the
/// caller bounds-checks before toggling.
fn clicked_cell(column: u16, row: u16, status_row: u16) -> Option<(u32, u32)> {
    if row >= status_row {
        return None;
    }
    Some((u32::from(row), u32::from(column / CELL_COLUMNS)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_for_digit_bindings() {
        assert_eq!(pattern_for_digit('1').map(Pattern::name), Some("Glider"));
        assert_eq!(pattern_for_digit('5').map(Pattern::name), Some("Pulsar"));
        assert_eq!(
            pattern_for_digit('7').map(Pattern::name),
            Some("Gosper Glider Gun")
        );
        assert_eq!(pattern_for_digit('0'), None);
        assert_eq!(pattern_for_digit('8'), None);
        assert_eq!(pattern_for_digit('x'), None);
    }

    #[test]
    fn test_centered_origin() {
        let universe = Universe::blank(64, 64);
        assert_eq!(centered_origin(&universe, &pattern::GLIDER), (30, 30));
        assert_eq!(centered_origin(&universe, &pattern::PULSAR), (25, 25));
    }

    #[test]
    fn test_centered_origin_clamps_to_zero() {
        let universe = Universe::blank(20, 10);
        assert_eq!(
            centered_origin(&universe, &pattern::GOSPER_GLIDER_GUN),
            (0, 0)
        );
    }

    #[test]
    fn test_clicked_cell_mapping() {
        // Two screen columns cover one cell
        assert_eq!(clicked_cell(0, 0, 24), Some((0, 0)));
        assert_eq!(clicked_cell(1, 0, 24), Some((0, 0)));
        assert_eq!(clicked_cell(2, 0, 24), Some((0, 1)));
        assert_eq!(clicked_cell(9, 5, 24), Some((5, 4)));
    }

    #[test]
    fn test_clicked_cell_ignores_status_row() {
        assert_eq!(clicked_cell(0, 23, 24), Some((23, 0)));
        assert_eq!(clicked_cell(0, 24, 24), None);
        assert_eq!(clicked_cell(0, 30, 24), None);
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.frame_interval, Duration::from_millis(33));
        assert_eq!(config.input_poll_timeout, Duration::from_millis(10));
    }
}
