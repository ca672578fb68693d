//! # Lifewheel
//!
//! Conway's Game of Life on a torus, with a terminal frontend and a C ABI.
//!
//! The core is a self-contained simulation, [`Universe`]; around it sit
//! an interactive crossterm TUI driven by message-passing actor threads
//! and a C FFI for embedding the engine elsewhere.
//!
//! ## Core Concepts
//!
//! - **Toroidal grid**: Edges wrap, every cell has exactly eight neighbors
//! - **Double-buffered ticks**: Each generation is computed from a snapshot
//!   of the previous one, with no allocation per tick
//! - **Actor model**: Isolated threads for input polling and frame pacing
//! - **Single-flush painting**: Every frame reaches the terminal in one
//!   `write()` syscall
//!
//! ## Example
//!
//! ```rust
//! use lifewheel::{pattern, Universe};
//!
//! let mut universe = Universe::blank(16, 16);
//! universe.stamp(&pattern::GLIDER, 2, 2);
//!
//! universe.tick();
//! assert_eq!(universe.population(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod universe;
pub mod pattern;
pub mod tui;
pub mod ffi;

// Re-exports for convenience
pub use pattern::Pattern;
pub use universe::{Cell, Universe};
