//! Built-in puzzles (compile-time configs).
//!
//! Small enough for tests and fast demos. Each carries the answer the search
//! must produce.

use crate::grid::{Grid, GridError};
use crate::scenario::Puzzle;
use crate::search::SearchOutcome;
use crate::sofa::Pose;

#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub description: &'static str,
    /// Grid rows; marker letters are decorative, poses come from the fields below.
    pub rows: &'static [&'static str],
    pub start: Pose,
    pub destination: Pose,
    pub expected: SearchOutcome,
}

impl Builtin {
    pub fn puzzle(&self) -> Result<Puzzle, GridError> {
        Ok(Puzzle {
            grid: Grid::from_rows(self.rows)?,
            start: self.start,
            destination: self.destination,
        })
    }
}

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "open_descent",
        description: "3x3 open room, slide down two rows and right one column",
        rows: &["s s 0", "0 0 0", "0 S S"],
        start: Pose::horizontal(0, 0),
        destination: Pose::horizontal(2, 1),
        expected: SearchOutcome::Reached { steps: 3 },
    },
    Builtin {
        name: "two_row_shift",
        description: "2x3 open room, one row down and one column right",
        rows: &["s s 0", "0 S S"],
        start: Pose::horizontal(0, 0),
        destination: Pose::horizontal(1, 1),
        expected: SearchOutcome::Reached { steps: 2 },
    },
    Builtin {
        name: "corridor",
        description: "1x4 corridor where rotation is never possible",
        rows: &["s s S S"],
        start: Pose::horizontal(0, 0),
        destination: Pose::horizontal(0, 2),
        expected: SearchOutcome::Reached { steps: 2 },
    },
    Builtin {
        name: "blocked_pivot",
        description: "obstacle under the start forces a slide before rotating",
        rows: &["s s 0", "H S 0", "0 S 0"],
        start: Pose::horizontal(0, 0),
        destination: Pose::vertical(1, 1),
        expected: SearchOutcome::Reached { steps: 3 },
    },
    Builtin {
        name: "rotate_in_place",
        description: "2x2 open room, start and destination share the anchor",
        rows: &["0 0", "0 0"],
        start: Pose::horizontal(0, 0),
        destination: Pose::vertical(0, 0),
        expected: SearchOutcome::Reached { steps: 1 },
    },
    Builtin {
        name: "walled_off",
        description: "destination column sealed by a wall of obstacles",
        rows: &["s s H 0", "0 0 H 0", "0 0 H S", "0 0 H S"],
        start: Pose::horizontal(0, 0),
        destination: Pose::vertical(2, 3),
        expected: SearchOutcome::Unreachable,
    },
];

pub fn builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}
