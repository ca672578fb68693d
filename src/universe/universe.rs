//! Universe: The toroidal grid and its generation rule.
//!
//! The universe stores cells in a contiguous `Vec` for cache efficiency.
//! Access is in row-major order: `index = row * width + column`.

use super::cell::Cell;
use crate::pattern::Pattern;

/// The simulation grid: a fixed-size torus advanced one generation per
/// [`tick`](Self::tick).
///
/// Cells are stored in row-major order with the origin at the top-left.
/// The grid wraps in both axes, so every cell has exactly eight
/// neighbors and there is no boundary special-casing anywhere.
/// Dimensions are set at construction and never change for the lifetime
/// of the instance.
///
/// # Double Buffering
///
/// `tick` computes the next generation into a private scratch buffer
/// while reading only the current one, then swaps the two. No cell's
/// update ever observes a neighbor's already-updated state, and a tick
/// performs no allocation.
#[derive(Clone)]
pub struct Universe {
    /// Grid width in cells.
    width: u32,
    /// Grid height in cells.
    height: u32,
    /// Current generation (row-major order).
    cells: Vec<Cell>,
    /// Scratch generation written during a tick, then swapped in.
    next: Vec<Cell>,
}

impl Universe {
    /// Default board width used by [`Default`].
    pub const DEFAULT_WIDTH: u32 = 64;
    /// Default board height used by [`Default`].
    pub const DEFAULT_HEIGHT: u32 = 64;

    /// Create a universe seeded with the fixed startup pattern: the
    /// cell at flat index `i` starts alive iff `i % 2 == 0 || i % 7 == 0`.
    ///
    /// The seed is deterministic, so two universes with the same
    /// dimensions start bit-identical.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Universe dimensions must be non-zero"
        );
        let size = (width as usize) * (height as usize);
        let cells = (0..size)
            .map(|i| Cell::from(i % 2 == 0 || i % 7 == 0))
            .collect();
        Self {
            width,
            height,
            cells,
            next: vec![Cell::Dead; size],
        }
    }

    /// Create an all-dead universe, the starting point for stamping
    /// patterns or toggling cells by hand.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn blank(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Universe dimensions must be non-zero"
        );
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
            next: vec![Cell::Dead; size],
        }
    }

    /// Get the grid width in cells.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in cells.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the universe has no cells (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a zero-copy view of the current generation in row-major order.
    ///
    /// The view always has length `width * height` and borrows the
    /// backing storage directly; it stays valid and unchanged until the
    /// next mutating call.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (row, column) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, row: u32, column: u32) -> Option<usize> {
        if row < self.height && column < self.width {
            Some((row as usize) * (self.width as usize) + (column as usize))
        } else {
            None
        }
    }

    /// Get the cell at (row, column).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: u32, column: u32) -> Option<Cell> {
        self.index_of(row, column).map(|idx| self.cells[idx])
    }

    /// Linear index for (row, column), panicking on out-of-range input.
    fn checked_index(&self, row: u32, column: u32) -> usize {
        self.index_of(row, column).unwrap_or_else(|| {
            panic!(
                "cell ({row}, {column}) is out of bounds for a {}x{} universe",
                self.width, self.height
            )
        })
    }

    /// Count the live neighbors of (row, column) on the torus.
    ///
    /// The deltas `{dim - 1, 0, 1}` added modulo the dimension reach
    /// the wrapped previous, same, and next row/column without any
    /// branching on edges.
    fn live_neighbor_count(&self, row: u32, column: u32) -> u8 {
        let mut count = 0;
        for delta_row in [self.height - 1, 0, 1] {
            for delta_col in [self.width - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }
                let neighbor_row = (row + delta_row) % self.height;
                let neighbor_col = (column + delta_col) % self.width;
                let idx = (neighbor_row as usize) * (self.width as usize)
                    + (neighbor_col as usize);
                count += self.cells[idx] as u8;
            }
        }
        count
    }

    /// Advance the universe exactly one generation.
    ///
    /// Every cell is updated from the same snapshot of the current
    /// generation (simultaneous update), under the standard rule for a
    /// cell with live-neighbor count `n`: a live cell survives with
    /// `n` of 2 or 3, a dead cell is born with `n` of exactly 3, and
    /// everything else is dead in the next generation.
    pub fn tick(&mut self) {
        for row in 0..self.height {
            for column in 0..self.width {
                let idx = (row as usize) * (self.width as usize) + (column as usize);
                let cell = self.cells[idx];
                let live_neighbors = self.live_neighbor_count(row, column);

                self.next[idx] = match (cell, live_neighbors) {
                    // Underpopulation
                    (Cell::Alive, n) if n < 2 => Cell::Dead,
                    // Survival
                    (Cell::Alive, 2 | 3) => Cell::Alive,
                    // Overpopulation
                    (Cell::Alive, n) if n > 3 => Cell::Dead,
                    // Reproduction
                    (Cell::Dead, 3) => Cell::Alive,
                    (otherwise, _) => otherwise,
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Flip the cell at (row, column) between dead and alive.
    ///
    /// No other cell is touched and no generation is advanced.
    ///
    /// # Panics
    /// Panics if `row >= height` or `column >= width`.
    pub fn toggle_cell(&mut self, row: u32, column: u32) {
        let idx = self.checked_index(row, column);
        self.cells[idx].toggle();
    }

    /// Set each listed (row, column) cell alive.
    ///
    /// # Panics
    /// Panics if any coordinate pair is out of bounds.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) {
        for &(row, column) in cells {
            let idx = self.checked_index(row, column);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Kill every cell. Idempotent; dimensions are unchanged.
    pub fn clear_cells(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Stamp a pattern's live cells with its origin at (row, column).
    ///
    /// Placement wraps toroidally, matching the grid, so stamping at an
    /// edge is well-defined. Cells that are already alive stay alive;
    /// the rest of the grid is untouched.
    pub fn stamp(&mut self, pattern: &Pattern, row: u32, column: u32) {
        let cells: Vec<(u32, u32)> = pattern
            .cells()
            .iter()
            .map(|&(r, c)| ((row + r) % self.height, (column + c) % self.width))
            .collect();
        self.set_cells(&cells);
    }

    /// Count the live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Get an iterator over rows of the current generation.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }
}

impl Default for Universe {
    /// A seeded [`DEFAULT_WIDTH`](Self::DEFAULT_WIDTH) by
    /// [`DEFAULT_HEIGHT`](Self::DEFAULT_HEIGHT) universe.
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl std::fmt::Display for Universe {
    /// One text line per grid row, `'1'` for a live cell, `'0'` for a
    /// dead one, each row newline-terminated.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(if cell.is_alive() { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Universe")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_new() {
        let universe = Universe::new(64, 32);
        assert_eq!(universe.width(), 64);
        assert_eq!(universe.height(), 32);
        assert_eq!(universe.len(), 64 * 32);
        assert!(!universe.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_universe_zero_width() {
        Universe::new(0, 24);
    }

    #[test]
    #[should_panic]
    fn test_universe_zero_height() {
        Universe::new(24, 0);
    }

    #[test]
    #[should_panic]
    fn test_universe_blank_zero_dimensions() {
        Universe::blank(0, 0);
    }

    #[test]
    fn test_universe_seed_deterministic() {
        let a = Universe::new(16, 16);
        let b = Universe::new(16, 16);
        assert_eq!(a.cells(), b.cells());

        // Flat index rule: alive iff i % 2 == 0 || i % 7 == 0
        assert_eq!(a.cells()[0], Cell::Alive);
        assert_eq!(a.cells()[1], Cell::Dead);
        assert_eq!(a.cells()[7], Cell::Alive);
        assert_eq!(a.cells()[9], Cell::Dead);
    }

    #[test]
    fn test_universe_blank_is_all_dead() {
        let universe = Universe::blank(12, 9);
        assert_eq!(universe.population(), 0);
        assert_eq!(universe.len(), 108);
    }

    #[test]
    fn test_universe_default_size() {
        let universe = Universe::default();
        assert_eq!(universe.width(), Universe::DEFAULT_WIDTH);
        assert_eq!(universe.height(), Universe::DEFAULT_HEIGHT);
        assert!(universe.population() > 0);
    }

    #[test]
    fn test_universe_index_of() {
        let universe = Universe::blank(80, 24);
        assert_eq!(universe.index_of(10, 5), Some(10 * 80 + 5));
        assert_eq!(universe.index_of(23, 79), Some(23 * 80 + 79));
        assert_eq!(universe.index_of(24, 0), None);
        assert_eq!(universe.index_of(0, 80), None);
    }

    #[test]
    fn test_universe_get_bounds() {
        let universe = Universe::blank(8, 4);
        assert!(universe.get(3, 7).is_some());
        assert!(universe.get(4, 0).is_none());
        assert!(universe.get(0, 8).is_none());
    }

    #[test]
    fn test_universe_dimensions_invariant() {
        let mut universe = Universe::new(9, 5);
        assert_eq!(universe.cells().len(), 45);
        for _ in 0..3 {
            universe.tick();
            assert_eq!(universe.width(), 9);
            assert_eq!(universe.height(), 5);
            assert_eq!(universe.cells().len(), 45);
        }
        universe.toggle_cell(4, 8);
        universe.clear_cells();
        assert_eq!(universe.cells().len(), 45);
    }

    #[test]
    fn test_universe_cells_view_stable() {
        let universe = Universe::new(8, 8);
        let first = universe.cells().as_ptr();
        let _ = universe.population();
        assert_eq!(universe.cells().as_ptr(), first);
    }

    #[test]
    fn test_universe_toggle_touches_one_cell() {
        let mut universe = Universe::blank(6, 4);
        universe.toggle_cell(2, 3);
        assert_eq!(universe.population(), 1);
        assert_eq!(universe.get(2, 3), Some(Cell::Alive));
    }

    #[test]
    fn test_universe_toggle_involution() {
        let mut universe = Universe::new(8, 8);
        let before = universe.cells().to_vec();
        for row in 0..8 {
            for column in 0..8 {
                universe.toggle_cell(row, column);
                universe.toggle_cell(row, column);
                assert_eq!(universe.cells(), before.as_slice());
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_universe_toggle_row_out_of_bounds() {
        let mut universe = Universe::blank(8, 8);
        universe.toggle_cell(8, 0);
    }

    #[test]
    #[should_panic]
    fn test_universe_toggle_column_out_of_bounds() {
        let mut universe = Universe::blank(8, 8);
        universe.toggle_cell(0, 8);
    }

    #[test]
    #[should_panic]
    fn test_universe_set_cells_out_of_bounds() {
        let mut universe = Universe::blank(4, 4);
        universe.set_cells(&[(1, 1), (4, 4)]);
    }

    #[test]
    fn test_universe_clear_cells() {
        let mut universe = Universe::new(16, 16);
        assert!(universe.population() > 0);
        universe.clear_cells();
        assert_eq!(universe.population(), 0);
        assert_eq!(universe.cells().len(), 256);

        universe.clear_cells();
        assert_eq!(universe.population(), 0);
    }

    #[test]
    fn test_universe_population() {
        // 14 cells: 7 even indices plus the odd multiple of 7
        let universe = Universe::new(7, 2);
        assert_eq!(universe.population(), 8);
    }

    #[test]
    fn test_universe_tick_lone_cell_dies() {
        let mut universe = Universe::blank(3, 3);
        universe.toggle_cell(1, 1);
        universe.tick();
        assert_eq!(universe.population(), 0);
    }

    #[test]
    fn test_universe_tick_birth_completes_block() {
        let mut universe = Universe::blank(4, 4);
        universe.set_cells(&[(1, 1), (1, 2), (2, 1)]);
        universe.tick();

        let mut block = Universe::blank(4, 4);
        block.set_cells(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(universe.cells(), block.cells());

        // A block is a still life
        universe.tick();
        assert_eq!(universe.cells(), block.cells());
    }

    #[test]
    fn test_universe_tick_overcrowding() {
        let mut universe = Universe::blank(3, 3);
        let all: Vec<(u32, u32)> = (0..3)
            .flat_map(|row| (0..3).map(move |column| (row, column)))
            .collect();
        universe.set_cells(&all);
        universe.tick();
        assert_eq!(universe.population(), 0);
    }

    #[test]
    fn test_universe_tick_blinker_oscillates() {
        let mut universe = Universe::blank(5, 5);
        universe.set_cells(&[(2, 1), (2, 2), (2, 3)]);
        let horizontal = universe.cells().to_vec();

        universe.tick();
        let mut vertical = Universe::blank(5, 5);
        vertical.set_cells(&[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(universe.cells(), vertical.cells());

        universe.tick();
        assert_eq!(universe.cells(), horizontal.as_slice());
    }

    #[test]
    fn test_universe_tick_wraps_across_edge() {
        let mut universe = Universe::blank(5, 5);
        universe.set_cells(&[(0, 1), (0, 2), (0, 3)]);
        universe.tick();

        let mut expected = Universe::blank(5, 5);
        expected.set_cells(&[(4, 2), (0, 2), (1, 2)]);
        assert_eq!(universe.cells(), expected.cells());
    }

    #[test]
    fn test_universe_diagonal_wrap_neighbors() {
        let mut universe = Universe::blank(4, 4);
        universe.set_cells(&[(0, 0), (3, 3)]);
        assert_eq!(universe.live_neighbor_count(0, 0), 1);
        assert_eq!(universe.live_neighbor_count(3, 3), 1);

        universe.tick();
        assert_eq!(universe.population(), 0);
    }

    #[test]
    fn test_universe_tick_glider_translates() {
        let mut universe = Universe::blank(6, 6);
        universe.set_cells(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        for _ in 0..4 {
            universe.tick();
        }

        let mut expected = Universe::blank(6, 6);
        expected.set_cells(&[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        assert_eq!(universe.cells(), expected.cells());
    }

    #[test]
    fn test_universe_display() {
        let universe = Universe::new(2, 2);
        assert_eq!(universe.to_string(), "10\n10\n");

        let mut blank = Universe::blank(3, 2);
        blank.toggle_cell(0, 1);
        assert_eq!(blank.to_string(), "010\n000\n");
    }
}
