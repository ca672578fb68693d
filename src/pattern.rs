//! Pattern catalog: classic seed shapes for stamping into a universe.
//!
//! Every pattern is stored as (row, column) offsets of its live cells
//! from the pattern's own top-left corner, so the same constant can be
//! stamped anywhere on any grid. The catalog carries the small canon:
//! oscillators, a spaceship, a methuselah, and a gun.

/// A named set of live cells, as (row, column) offsets from the
/// pattern's top-left origin.
///
/// Patterns are plain data; placing one on a grid is
/// [`Universe::stamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    cells: &'static [(u32, u32)],
}

impl Pattern {
    /// Get the pattern's display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the live-cell offsets in (row, column) form.
    #[inline]
    pub const fn cells(&self) -> &'static [(u32, u32)] {
        self.cells
    }

    /// Width of the bounding box, in cells.
    pub fn width(&self) -> u32 {
        self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Height of the bounding box, in cells.
    pub fn height(&self) -> u32 {
        self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0)
    }
}

/// Period-2 oscillator, the smallest one there is.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Period-2 oscillator of two overlapping rows.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

/// Period-2 oscillator: two blocks blinking at each other.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
};

/// Period-3 oscillator, the most common large one.
pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        (0, 2),
        (0, 3),
        (0, 4),
        (0, 8),
        (0, 9),
        (0, 10),
        (2, 0),
        (2, 5),
        (2, 7),
        (2, 12),
        (3, 0),
        (3, 5),
        (3, 7),
        (3, 12),
        (4, 0),
        (4, 5),
        (4, 7),
        (4, 12),
        (5, 2),
        (5, 3),
        (5, 4),
        (5, 8),
        (5, 9),
        (5, 10),
        (7, 2),
        (7, 3),
        (7, 4),
        (7, 8),
        (7, 9),
        (7, 10),
        (8, 0),
        (8, 5),
        (8, 7),
        (8, 12),
        (9, 0),
        (9, 5),
        (9, 7),
        (9, 12),
        (10, 0),
        (10, 5),
        (10, 7),
        (10, 12),
        (12, 2),
        (12, 3),
        (12, 4),
        (12, 8),
        (12, 9),
        (12, 10),
    ],
};

/// The smallest spaceship, gliding one cell down-right every 4 ticks.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Methuselah: five cells that churn for 1103 generations before
/// settling.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// Gosper's glider gun, firing a glider every 30 ticks.
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (0, 24),
        (1, 22),
        (1, 24),
        (2, 12),
        (2, 13),
        (2, 20),
        (2, 21),
        (2, 34),
        (2, 35),
        (3, 11),
        (3, 15),
        (3, 20),
        (3, 21),
        (3, 34),
        (3, 35),
        (4, 0),
        (4, 1),
        (4, 10),
        (4, 16),
        (4, 20),
        (4, 21),
        (5, 0),
        (5, 1),
        (5, 10),
        (5, 14),
        (5, 16),
        (5, 17),
        (5, 22),
        (5, 24),
        (6, 10),
        (6, 16),
        (6, 24),
        (7, 11),
        (7, 15),
        (8, 12),
        (8, 13),
    ],
};

/// Every catalog pattern, in the order the UI binds them to number keys.
pub const ALL: [&Pattern; 7] = [
    &GLIDER,
    &BLINKER,
    &TOAD,
    &BEACON,
    &PULSAR,
    &R_PENTOMINO,
    &GOSPER_GLIDER_GUN,
];
