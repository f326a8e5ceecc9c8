use crate::core::coord::{Coord, DOWN, LEFT, RIGHT, UP};
use crate::grid::Terrain;
use crate::sofa::Pose;

/// One unit-cost sofa move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
    /// Swap orientation about the 2×2 square rooted at the anchor.
    Rotate,
}

impl Move {
    /// Candidate order used by successor generation.
    pub const ALL: [Move; 5] = [Move::Up, Move::Down, Move::Left, Move::Right, Move::Rotate];

    /// Anchor delta for a translation; `None` for [`Move::Rotate`].
    #[inline]
    pub fn delta(self) -> Option<Coord> {
        match self {
            Move::Up => Some(UP),
            Move::Down => Some(DOWN),
            Move::Left => Some(LEFT),
            Move::Right => Some(RIGHT),
            Move::Rotate => None,
        }
    }

    /// Apply the move if it is legal on `terrain`.
    pub fn apply<T: Terrain + ?Sized>(self, terrain: &T, from: Pose) -> Option<Pose> {
        match self.delta() {
            Some(delta) => from.translated(delta).filter(|to| to.is_valid_on(terrain)),
            None => can_rotate(terrain, from).then(|| from.rotated()),
        }
    }
}

/// Rotation needs the whole 2×2 square at the anchor inside the grid and clear.
pub fn can_rotate<T: Terrain + ?Sized>(terrain: &T, from: Pose) -> bool {
    from.rotation_footprint()
        .map_or(false, |square| square.iter().all(|&c| terrain.is_open(c)))
}

/// Every pose reachable from `from` in exactly one move, paired with the move.
pub fn successors_with_moves<T: Terrain + ?Sized>(terrain: &T, from: Pose) -> Vec<(Move, Pose)> {
    let mut out: Vec<(Move, Pose)> = Vec::with_capacity(Move::ALL.len());
    for mv in Move::ALL {
        if let Some(to) = mv.apply(terrain, from) {
            out.push((mv, to));
        }
    }
    out
}

/// Every pose reachable from `from` in exactly one move.
///
/// Order: up, down, left, right, rotate (illegal candidates skipped).
pub fn successors<T: Terrain + ?Sized>(terrain: &T, from: Pose) -> Vec<Pose> {
    successors_with_moves(terrain, from)
        .into_iter()
        .map(|(_, to)| to)
        .collect()
}
