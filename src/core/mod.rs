//! Low-level, allocation-free primitives.
//!
//! - [`coord`]: signed (row, column) coordinates and the four unit steps.

pub mod coord;
