//! Cell: The atomic unit of the simulation grid.
//!
//! # Memory Layout
//!
//! A `Cell` is a single byte with fixed discriminants:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Cell Layout (1 byte)                        │
//! ├──────────────────────────────────────────────┤
//! │  Dead = 0x00          Alive = 0x01           │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The discriminants are a stable contract, not an implementation
//! detail: the raw byte view handed across the C ABI and the
//! live-neighbor arithmetic (`cell as u8`) both depend on them.

/// State of a single grid cell.
///
/// `Dead = 0`, `Alive = 1`, so a slice of cells doubles as a byte
/// buffer and a neighbor count is a sum of casts.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No live cell here.
    #[default]
    Dead = 0,
    /// A live cell.
    Alive = 1,
}

// Compile-time assertion: Cell must be exactly 1 byte
const _: () = assert!(
    std::mem::size_of::<Cell>() == 1,
    "Cell must be exactly 1 byte for the raw byte view"
);

impl Cell {
    /// Check whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Flip the cell between dead and alive.
    #[inline]
    pub const fn toggle(&mut self) {
        *self = match *self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        };
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        assert_eq!(std::mem::size_of::<Cell>(), 1);
    }

    #[test]
    fn test_cell_discriminants() {
        assert_eq!(Cell::Dead as u8, 0);
        assert_eq!(Cell::Alive as u8, 1);
    }

    #[test]
    fn test_cell_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn test_cell_toggle() {
        let mut cell = Cell::Dead;
        cell.toggle();
        assert_eq!(cell, Cell::Alive);
        cell.toggle();
        assert_eq!(cell, Cell::Dead);
    }

    #[test]
    fn test_cell_from_bool() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
    }
}
