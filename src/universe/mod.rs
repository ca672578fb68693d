//! Core simulation: cell state and the toroidal universe.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │                Universe                 │
//! │  width × height cells, row-major order  │
//! │                                         │
//! │   tick() ──► next buffer ──► swap       │
//! │                                         │
//! │  ┌──────┐ ┌──────┐ ┌──────┐ ┌──────┐    │
//! │  │ Cell │ │ Cell │ │ Cell │ │ ...  │    │
//! │  └──────┘ └──────┘ └──────┘ └──────┘    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The universe is the single source of truth for the simulation. The
//! frontends (terminal UI, C FFI) only read the cell slice and call the
//! mutating operations; none of them embed any rule logic.

mod cell;
#[allow(clippy::module_inception)]
mod universe;

pub use cell::Cell;
pub use universe::Universe;
