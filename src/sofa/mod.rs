//! Sofa poses and the rules that move them.
//!
//! A [`Pose`] is the canonical search state: the anchor cell (the top or left
//! end of the sofa) plus an [`Orientation`]. Because the anchor is always the
//! top-or-left end, rotating either way around the 2×2 square rooted at the
//! anchor lands on the same pose, so rotation has a single successor.

pub mod moves;

use std::fmt;

use crate::core::coord::{Coord, DOWN, RIGHT};
use crate::grid::Terrain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Occupies the anchor and the cell to its right.
    Horizontal,
    /// Occupies the anchor and the cell below it.
    Vertical,
}

impl Orientation {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Offset from the anchor to the second occupied cell.
    #[inline]
    pub fn tail_offset(self) -> Coord {
        match self {
            Orientation::Horizontal => RIGHT,
            Orientation::Vertical => DOWN,
        }
    }
}

/// A sofa placement: anchor cell and orientation.
///
/// Identity is the triple only; search step counts live outside the pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pose {
    pub anchor: Coord,
    pub orientation: Orientation,
}

impl Pose {
    #[inline]
    pub const fn new(anchor: Coord, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    #[inline]
    pub const fn horizontal(row: i32, col: i32) -> Self {
        Self::new(Coord::new(row, col), Orientation::Horizontal)
    }

    #[inline]
    pub const fn vertical(row: i32, col: i32) -> Self {
        Self::new(Coord::new(row, col), Orientation::Vertical)
    }

    /// The pose covering two orthogonally adjacent cells, in either order.
    pub fn from_cells(a: Coord, b: Coord) -> Option<Self> {
        let (head, tail) = if a <= b { (a, b) } else { (b, a) };
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .map(|o| Self::new(head, o))
            .find(|p| p.tail() == Some(tail))
    }

    /// The second occupied cell, `None` if it falls outside the `i32` range.
    #[inline]
    pub fn tail(self) -> Option<Coord> {
        self.anchor.checked_add(self.orientation.tail_offset())
    }

    /// The two cells the sofa occupies, anchor first.
    #[inline]
    pub fn cells(self) -> Option<[Coord; 2]> {
        Some([self.anchor, self.tail()?])
    }

    #[inline]
    pub fn translated(self, delta: Coord) -> Option<Self> {
        Some(Self::new(self.anchor.checked_add(delta)?, self.orientation))
    }

    #[inline]
    pub fn rotated(self) -> Self {
        Self::new(self.anchor, self.orientation.flipped())
    }

    /// The 2×2 square swept by a rotation about this pose's anchor.
    pub fn rotation_footprint(self) -> Option<[Coord; 4]> {
        let a = self.anchor;
        let right = a.checked_add(RIGHT)?;
        let down = a.checked_add(DOWN)?;
        Some([a, right, down, down.checked_add(RIGHT)?])
    }

    /// Both occupied cells lie inside the grid and are not obstacles.
    pub fn is_valid_on<T: Terrain + ?Sized>(self, terrain: &T) -> bool {
        self.cells()
            .map_or(false, |cells| cells.iter().all(|&c| terrain.is_open(c)))
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "({}, {}, {o})", self.anchor.row, self.anchor.col)
    }
}
