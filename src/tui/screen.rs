//! Terminal session and frame painting.
//!
//! [`Screen`] owns the terminal for its lifetime: raw mode, the
//! alternate screen, mouse capture, and a hidden cursor, all restored
//! on drop. Each frame is accumulated into a [`PaintBuffer`] and
//! flushed in a single `write()` syscall to prevent flickering.

use crate::universe::{Cell, Universe};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Terminal columns a single universe cell occupies.
///
/// Two columns per cell keeps the board roughly square, since terminal
/// character cells are about twice as tall as they are wide.
pub const CELL_COLUMNS: u16 = 2;

/// Glyphs for one cell, [`CELL_COLUMNS`] wide.
const ALIVE_GLYPH: &str = "██";
const DEAD_GLYPH: &str = "  ";

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output for a frame is accumulated here, then flushed at once.
pub struct PaintBuffer {
    data: Vec<u8>,
}

impl PaintBuffer {
    /// Create a new paint buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        write!(self.data, "\x1b[{};{}H", y + 1, x + 1).unwrap();
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, (r, g, b): (u8, u8, u8)) {
        write!(self.data, "\x1b[38;2;{r};{g};{b}m").unwrap();
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, (r, g, b): (u8, u8, u8)) {
        write!(self.data, "\x1b[48;2;{r};{g};{b}m").unwrap();
    }

    /// Swap foreground and background until the next reset.
    #[inline]
    pub fn invert(&mut self) {
        self.data.extend_from_slice(b"\x1b[7m");
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Erase from the cursor to the end of the line, filling with the
    /// current background color.
    #[inline]
    pub fn erase_to_eol(&mut self) {
        self.data.extend_from_slice(b"\x1b[K");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for PaintBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// The interactive terminal session.
///
/// Construction puts the terminal into raw mode on the alternate
/// screen with mouse capture enabled and the cursor hidden; dropping
/// the screen restores all of it, panic or not.
pub struct Screen {
    /// Terminal width in character columns.
    columns: u16,
    /// Terminal height in character rows.
    rows: u16,
    /// Reusable per-frame ANSI accumulator.
    paint: PaintBuffer,
    /// Emit a full screen clear on the next draw.
    needs_clear: bool,
    /// Foreground color for live cells.
    alive_color: (u8, u8, u8),
    /// Background color for dead cells.
    dead_color: (u8, u8, u8),
}

impl Screen {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if querying the terminal size or switching
    /// terminal modes fails.
    pub fn new(alive_color: (u8, u8, u8), dead_color: (u8, u8, u8)) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let capacity = usize::from(columns) * usize::from(rows) * 3 + 64;
        Ok(Self {
            columns,
            rows,
            paint: PaintBuffer::with_capacity(capacity),
            needs_clear: true,
            alive_color,
            dead_color,
        })
    }

    /// Get the terminal height in rows, including the status row.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.rows
    }

    /// Adopt a new terminal size. The next draw repaints from scratch.
    pub fn handle_resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.needs_clear = true;
    }

    /// Paint the board and the status row, then flush once.
    ///
    /// The board occupies every row but the last; the last row is the
    /// inverted status line. A universe larger than the visible area is
    /// clipped at the bottom/right edges.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn draw(&mut self, universe: &Universe, status: &str) -> io::Result<()> {
        self.paint.clear();
        if self.needs_clear {
            self.paint.clear_screen();
            self.needs_clear = false;
        }

        let board_rows = self.rows.saturating_sub(1);
        let board_columns = self.columns / CELL_COLUMNS;
        let visible_rows = board_rows.min(u16::try_from(universe.height()).unwrap_or(u16::MAX));
        let visible_columns =
            board_columns.min(u16::try_from(universe.width()).unwrap_or(u16::MAX));

        // Live cells are block glyphs in the foreground color, dead
        // cells are blanks showing the background; neither color
        // changes mid-frame, so one SGR pair covers the whole board.
        self.paint.reset_attrs();
        self.paint.set_fg(self.alive_color);
        self.paint.set_bg(self.dead_color);

        for row in 0..visible_rows {
            self.paint.cursor_move(0, row);
            for column in 0..visible_columns {
                let alive = universe
                    .get(u32::from(row), u32::from(column))
                    .is_some_and(Cell::is_alive);
                self.paint
                    .write_str(if alive { ALIVE_GLYPH } else { DEAD_GLYPH });
            }
            self.paint.erase_to_eol();
        }

        self.draw_status(status);
        self.paint.flush_to(&mut io::stdout())
    }

    /// Paint the inverted status line on the bottom row.
    fn draw_status(&mut self, status: &str) {
        let width = usize::from(self.columns);
        let mut line: String = status.chars().take(width).collect();
        let used = line.chars().count();
        if used < width {
            line.push_str(&" ".repeat(width - used));
        }

        self.paint.cursor_move(0, self.rows.saturating_sub(1));
        self.paint.reset_attrs();
        self.paint.invert();
        self.paint.write_str(&line);
        self.paint.reset_attrs();
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Restore terminal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
