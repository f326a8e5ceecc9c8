use std::fmt;

/// A grid cell address. Row 0 is the top row, column 0 the leftmost column.
///
/// Components are signed so that a step off the edge of the grid is still a
/// representable coordinate; boundary checks happen in the grid model. Steps
/// that would leave the `i32` range yield `None` and count as off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn checked_add(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.row.checked_add(rhs.row)?,
            self.col.checked_add(rhs.col)?,
        ))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub const UP: Coord = Coord { row: -1, col: 0 };
pub const DOWN: Coord = Coord { row: 1, col: 0 };
pub const LEFT: Coord = Coord { row: 0, col: -1 };
pub const RIGHT: Coord = Coord { row: 0, col: 1 };
