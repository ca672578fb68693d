//! C Foreign Function Interface (FFI) for Lifewheel.
//!
//! This module provides a C-compatible API for driving the simulation
//! from other programming languages. All functions are `extern "C"`
//! with stable ABI. Functions never panic across the boundary:
//! out-of-range coordinates come back as result codes instead.
//!
//! # Safety
//!
//! All functions that accept pointers require valid, non-null pointers.
//! The caller is responsible for proper memory management of handles.
//!
//! # Example (C)
//!
//! ```c
//! #include "lifewheel.h"
//!
//! int main() {
//!     LifewheelUniverse* universe = lifewheel_universe_new(64, 64);
//!     if (!universe) return 1;
//!
//!     for (int i = 0; i < 100; i++) {
//!         lifewheel_universe_tick(universe);
//!     }
//!
//!     printf("population: %zu\n", lifewheel_universe_population(universe));
//!     lifewheel_universe_destroy(universe);
//!     return 0;
//! }
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use crate::universe::{Cell, Universe};
use std::os::raw::{c_char, c_int};
use std::ptr;

// =============================================================================
// Opaque Handle Types
// =============================================================================

/// Opaque handle to a universe.
pub struct LifewheelUniverse(Universe);

// =============================================================================
// Result Codes
// =============================================================================

/// Result codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifewheelResult {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer passed.
    NullPointer = 1,
    /// Coordinates outside the grid.
    OutOfBounds = 2,
    /// Width or height is zero.
    InvalidDimensions = 3,
}

// =============================================================================
// Universe Lifecycle
// =============================================================================

/// Create a universe seeded with the fixed startup pattern.
///
/// Returns NULL if either dimension is zero.
#[unsafe(no_mangle)]
pub extern "C" fn lifewheel_universe_new(width: u32, height: u32) -> *mut LifewheelUniverse {
    if width == 0 || height == 0 {
        return ptr::null_mut();
    }
    Box::into_raw(Box::new(LifewheelUniverse(Universe::new(width, height))))
}

/// Create an all-dead universe.
///
/// Returns NULL if either dimension is zero.
#[unsafe(no_mangle)]
pub extern "C" fn lifewheel_universe_blank(width: u32, height: u32) -> *mut LifewheelUniverse {
    if width == 0 || height == 0 {
        return ptr::null_mut();
    }
    Box::into_raw(Box::new(LifewheelUniverse(Universe::blank(width, height))))
}

/// Check whether (width, height) is a valid universe size.
///
/// Lets callers distinguish a size error from an allocation failure
/// before calling the constructors.
#[unsafe(no_mangle)]
pub extern "C" fn lifewheel_universe_validate_dimensions(width: u32, height: u32) -> LifewheelResult {
    if width == 0 || height == 0 {
        LifewheelResult::InvalidDimensions
    } else {
        LifewheelResult::Ok
    }
}

/// Destroy a universe.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_destroy(universe: *mut LifewheelUniverse) {
    if !universe.is_null() {
        drop(Box::from_raw(universe));
    }
}

// =============================================================================
// Dimensions and Cell Access
// =============================================================================

/// Get the grid width in cells. Returns 0 for a NULL handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_width(universe: *const LifewheelUniverse) -> u32 {
    if universe.is_null() {
        return 0;
    }
    (*universe).0.width()
}

/// Get the grid height in cells. Returns 0 for a NULL handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_height(universe: *const LifewheelUniverse) -> u32 {
    if universe.is_null() {
        return 0;
    }
    (*universe).0.height()
}

/// Get the cell at (row, column): 1 alive, 0 dead, -1 on a NULL handle
/// or out-of-range coordinates.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_get_cell(
    universe: *const LifewheelUniverse,
    row: u32,
    column: u32,
) -> c_int {
    if universe.is_null() {
        return -1;
    }
    match (*universe).0.get(row, column) {
        Some(cell) => c_int::from(cell.is_alive()),
        None => -1,
    }
}

/// Get a pointer to the cell bytes in row-major order, one byte per
/// cell (1 alive, 0 dead). Returns NULL for a NULL handle.
///
/// The pointer stays valid until the next mutating call or
/// `lifewheel_universe_destroy` on the same handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_cells_ptr(
    universe: *const LifewheelUniverse,
) -> *const u8 {
    if universe.is_null() {
        return ptr::null();
    }
    (*universe).0.cells().as_ptr().cast::<u8>()
}

/// Get the number of cells (`width * height`). Returns 0 for a NULL
/// handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_cells_len(universe: *const LifewheelUniverse) -> usize {
    if universe.is_null() {
        return 0;
    }
    (*universe).0.len()
}

/// Count the live cells. Returns 0 for a NULL handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_population(
    universe: *const LifewheelUniverse,
) -> usize {
    if universe.is_null() {
        return 0;
    }
    (*universe).0.population()
}

// =============================================================================
// Mutation
// =============================================================================

/// Advance the universe one generation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_tick(
    universe: *mut LifewheelUniverse,
) -> LifewheelResult {
    if universe.is_null() {
        return LifewheelResult::NullPointer;
    }
    (*universe).0.tick();
    LifewheelResult::Ok
}

/// Advance the universe `count` generations.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_tick_many(
    universe: *mut LifewheelUniverse,
    count: u32,
) -> LifewheelResult {
    if universe.is_null() {
        return LifewheelResult::NullPointer;
    }
    for _ in 0..count {
        (*universe).0.tick();
    }
    LifewheelResult::Ok
}

/// Flip the cell at (row, column).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_toggle_cell(
    universe: *mut LifewheelUniverse,
    row: u32,
    column: u32,
) -> LifewheelResult {
    if universe.is_null() {
        return LifewheelResult::NullPointer;
    }
    if (*universe).0.index_of(row, column).is_none() {
        return LifewheelResult::OutOfBounds;
    }
    (*universe).0.toggle_cell(row, column);
    LifewheelResult::Ok
}

/// Set the cell at (row, column) to alive or dead.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_set_cell(
    universe: *mut LifewheelUniverse,
    row: u32,
    column: u32,
    alive: bool,
) -> LifewheelResult {
    if universe.is_null() {
        return LifewheelResult::NullPointer;
    }
    let desired = Cell::from(alive);
    match (*universe).0.get(row, column) {
        Some(current) => {
            if current != desired {
                (*universe).0.toggle_cell(row, column);
            }
            LifewheelResult::Ok
        }
        None => LifewheelResult::OutOfBounds,
    }
}

/// Kill every cell.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lifewheel_universe_clear_cells(
    universe: *mut LifewheelUniverse,
) -> LifewheelResult {
    if universe.is_null() {
        return LifewheelResult::NullPointer;
    }
    (*universe).0.clear_cells();
    LifewheelResult::Ok
}

// =============================================================================
// Version Information
// =============================================================================

/// Get the Lifewheel version string.
#[unsafe(no_mangle)]
pub extern "C" fn lifewheel_version() -> *const c_char {
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr().cast::<c_char>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_universe_ffi_lifecycle() {
        unsafe {
            let universe = lifewheel_universe_new(32, 16);
            assert!(!universe.is_null());
            assert_eq!(lifewheel_universe_width(universe), 32);
            assert_eq!(lifewheel_universe_height(universe), 16);
            assert_eq!(lifewheel_universe_cells_len(universe), 512);
            assert!(lifewheel_universe_population(universe) > 0);

            assert_eq!(lifewheel_universe_tick(universe), LifewheelResult::Ok);
            assert_eq!(
                lifewheel_universe_tick_many(universe, 10),
                LifewheelResult::Ok
            );

            lifewheel_universe_destroy(universe);
        }
    }

    #[test]
    fn test_universe_ffi_rejects_zero_dimensions() {
        assert!(lifewheel_universe_new(0, 10).is_null());
        assert!(lifewheel_universe_new(10, 0).is_null());
        assert!(lifewheel_universe_blank(0, 0).is_null());

        assert_eq!(
            lifewheel_universe_validate_dimensions(0, 8),
            LifewheelResult::InvalidDimensions
        );
        assert_eq!(
            lifewheel_universe_validate_dimensions(8, 8),
            LifewheelResult::Ok
        );
    }

    #[test]
    fn test_universe_ffi_null_handles() {
        unsafe {
            let null = ptr::null_mut::<LifewheelUniverse>();
            assert_eq!(lifewheel_universe_width(null), 0);
            assert_eq!(lifewheel_universe_height(null), 0);
            assert_eq!(lifewheel_universe_cells_len(null), 0);
            assert_eq!(lifewheel_universe_population(null), 0);
            assert_eq!(lifewheel_universe_get_cell(null, 0, 0), -1);
            assert!(lifewheel_universe_cells_ptr(null).is_null());
            assert_eq!(lifewheel_universe_tick(null), LifewheelResult::NullPointer);
            assert_eq!(
                lifewheel_universe_toggle_cell(null, 0, 0),
                LifewheelResult::NullPointer
            );
            lifewheel_universe_destroy(null);
        }
    }

    #[test]
    fn test_universe_ffi_cell_bytes() {
        unsafe {
            let universe = lifewheel_universe_blank(4, 4);
            assert_eq!(
                lifewheel_universe_set_cell(universe, 1, 2, true),
                LifewheelResult::Ok
            );
            assert_eq!(lifewheel_universe_get_cell(universe, 1, 2), 1);
            assert_eq!(lifewheel_universe_get_cell(universe, 0, 0), 0);
            assert_eq!(lifewheel_universe_population(universe), 1);

            let cells = lifewheel_universe_cells_ptr(universe);
            assert!(!cells.is_null());
            assert_eq!(*cells.add(4 + 2), 1);
            assert_eq!(*cells.add(0), 0);

            // Setting an already-alive cell is a no-op
            assert_eq!(
                lifewheel_universe_set_cell(universe, 1, 2, true),
                LifewheelResult::Ok
            );
            assert_eq!(lifewheel_universe_population(universe), 1);

            lifewheel_universe_destroy(universe);
        }
    }

    #[test]
    fn test_universe_ffi_out_of_bounds() {
        unsafe {
            let universe = lifewheel_universe_blank(4, 4);
            assert_eq!(
                lifewheel_universe_toggle_cell(universe, 4, 0),
                LifewheelResult::OutOfBounds
            );
            assert_eq!(
                lifewheel_universe_set_cell(universe, 0, 4, true),
                LifewheelResult::OutOfBounds
            );
            assert_eq!(lifewheel_universe_get_cell(universe, 4, 4), -1);
            lifewheel_universe_destroy(universe);
        }
    }

    #[test]
    fn test_lifewheel_version() {
        unsafe {
            let version = lifewheel_version();
            let version_str = CStr::from_ptr(version).to_str().unwrap();
            assert_eq!(version_str, "0.1.0");
        }
    }
}
