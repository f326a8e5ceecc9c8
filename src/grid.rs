use std::fmt;

use crate::core::coord::Coord;

/// What occupies a single grid cell.
///
/// Marker cells only label where the sofa starts and where it must end up;
/// for movement they are as free as [`CellKind::Free`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Free,
    Obstacle,
    StartMarker,
    DestinationMarker,
}

impl CellKind {
    #[inline]
    pub fn is_obstacle(self) -> bool {
        self == CellKind::Obstacle
    }

    /// Canonical character used when rendering a grid.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Free => '0',
            CellKind::Obstacle => 'H',
            CellKind::StartMarker => 's',
            CellKind::DestinationMarker => 'S',
        }
    }
}

/// Read-only view of the board that move rules and the search need.
///
/// The search never looks at cell kinds directly: a coordinate is either
/// blocked (off the board or an obstacle) or it is not.
pub trait Terrain {
    /// `(rows, columns)`.
    fn dimensions(&self) -> (usize, usize);

    fn is_blocked(&self, at: Coord) -> bool;

    #[inline]
    fn is_open(&self, at: Coord) -> bool {
        !self.is_blocked(at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    Empty { rows: usize, cols: usize },
    #[error("expected {expected} cells for the grid, got {found}")]
    CellCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid of {rows}x{cols} exceeds the addressable size")]
    TooLarge { rows: usize, cols: usize },
}

/// An immutable M×N board stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Build a grid from row-major cells. `cells.len()` must equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, cells: Vec<CellKind>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(GridError::TooLarge { rows, cols });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// An obstacle-free grid.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        let n = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Self::new(rows, cols, vec![CellKind::Free; n])
    }

    /// Build a grid from `'0' / 'H' / 's' / 'S'` rows, ignoring whitespace.
    ///
    /// Any other character is an obstacle. Intended for tests and builtin
    /// scenarios; user input goes through [`crate::scenario::Puzzle::parse`].
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut cols = 0;
        for (i, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.chars().filter(|ch| !ch.is_whitespace()).map(|ch| match ch {
                '0' => CellKind::Free,
                's' => CellKind::StartMarker,
                'S' => CellKind::DestinationMarker,
                _ => CellKind::Obstacle,
            }));
            let width = cells.len() - before;
            if i == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: width,
                });
            }
        }
        Self::new(rows.len(), cols, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell kind at `at`, or `None` off the board.
    pub fn cell(&self, at: Coord) -> Option<CellKind> {
        self.index_of(at).map(|idx| self.cells[idx])
    }

    /// All coordinates holding `kind`, in row-major order.
    pub fn find(&self, kind: CellKind) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter(move |&(_, k)| k == kind).map(|(c, _)| c)
    }

    /// Row-major iteration over `(coord, kind)`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &kind)| (Coord::new((idx / cols) as i32, (idx % cols) as i32), kind))
    }

    fn index_of(&self, at: Coord) -> Option<usize> {
        if at.row < 0 || at.col < 0 {
            return None;
        }
        let (r, c) = (at.row as usize, at.col as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }
}

impl Terrain for Grid {
    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn is_blocked(&self, at: Coord) -> bool {
        self.cell(at).map_or(true, CellKind::is_obstacle)
    }
}

impl fmt::Display for Grid {
    /// Renders the input format: dimensions line, then one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(|k| k.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
