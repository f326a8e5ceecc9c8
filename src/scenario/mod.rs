//! Puzzle layer: glue between the textual input format and the search core.
//!
//! A [`Puzzle`] bundles:
//! - the immutable [`Grid`]
//! - the start pose, located from the two `s` cells
//! - the destination pose, located from the two `S` cells
//!
//! Malformed input (bad dimensions, wrong cell count, missing or broken
//! markers) is rejected here and never reaches the search driver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::grid::{CellKind, Grid, GridError};
use crate::search::{self, ResourceLimits, SearchError, SearchReport};
use crate::sofa::Pose;

pub const FREE_CELL: char = '0';
pub const START_CELL: char = 's';
pub const DESTINATION_CELL: char = 'S';
pub const DEFAULT_OBSTACLE: char = 'H';

/// What to do with a cell character that is neither free, a marker, nor a
/// configured obstacle sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCellPolicy {
    /// Fail the parse with [`ParseError::UnknownCell`].
    #[default]
    Reject,
    /// Treat the cell as an obstacle.
    Obstacle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Characters that denote an obstacle. `0`, `s` and `S` always keep their
    /// meaning even if listed here.
    pub obstacle_sigils: Vec<char>,
    pub unknown_cells: UnknownCellPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            obstacle_sigils: vec![DEFAULT_OBSTACLE],
            unknown_cells: UnknownCellPolicy::Reject,
        }
    }
}

impl ParseOptions {
    fn classify(&self, ch: char) -> Option<CellKind> {
        match ch {
            FREE_CELL => Some(CellKind::Free),
            START_CELL => Some(CellKind::StartMarker),
            DESTINATION_CELL => Some(CellKind::DestinationMarker),
            _ if self.obstacle_sigils.contains(&ch) => Some(CellKind::Obstacle),
            _ => match self.unknown_cells {
                UnknownCellPolicy::Reject => None,
                UnknownCellPolicy::Obstacle => Some(CellKind::Obstacle),
            },
        }
    }
}

/// Which of the two labeled poses a marker denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Start,
    Destination,
}

impl Marker {
    pub fn cell_kind(self) -> CellKind {
        match self {
            Marker::Start => CellKind::StartMarker,
            Marker::Destination => CellKind::DestinationMarker,
        }
    }

    pub fn symbol(self) -> char {
        self.cell_kind().symbol()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => write!(f, "start (`{}`)", self.symbol()),
            Marker::Destination => write!(f, "destination (`{}`)", self.symbol()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing {what}")]
    MissingDimension { what: &'static str },
    #[error("invalid {what} `{token}`: expected a positive integer")]
    InvalidDimension { what: &'static str, token: String },
    #[error("expected {expected} cells, found {found}")]
    TooFewCells { expected: usize, found: usize },
    #[error("unexpected token `{token}` after the {expected} grid cells")]
    TrailingToken { token: String, expected: usize },
    #[error("cell {at} is `{token}`: each cell must be a single character")]
    MultiCharCell { at: Coord, token: String },
    #[error("cell {at} has unknown character `{ch}`")]
    UnknownCell { at: Coord, ch: char },
    #[error("no {marker} marker in the grid")]
    MissingMarker { marker: Marker },
    #[error("{marker} marker must cover exactly 2 cells, found {found}")]
    MarkerCount { marker: Marker, found: usize },
    #[error("{marker} marker cells {a} and {b} are not adjacent")]
    MarkersNotAdjacent { marker: Marker, a: Coord, b: Coord },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A parsed instance: grid plus labeled start and destination poses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub start: Pose,
    pub destination: Pose,
}

impl Puzzle {
    /// Parse `M N` followed by `M·N` whitespace-separated cell tokens, row-major.
    pub fn parse(text: &str, opts: &ParseOptions) -> Result<Self, ParseError> {
        let mut tokens = text.split_whitespace();
        let rows = dimension(tokens.next(), "row count")?;
        let cols = dimension(tokens.next(), "column count")?;
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;

        let mut cells: Vec<CellKind> = Vec::new();
        for idx in 0..expected {
            let Some(token) = tokens.next() else {
                return Err(ParseError::TooFewCells {
                    expected,
                    found: idx,
                });
            };
            let at = Coord::new((idx / cols) as i32, (idx % cols) as i32);
            let mut chars = token.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(ParseError::MultiCharCell {
                        at,
                        token: token.to_string(),
                    })
                }
            };
            let kind = opts
                .classify(ch)
                .ok_or(ParseError::UnknownCell { at, ch })?;
            cells.push(kind);
        }

        if let Some(token) = tokens.next() {
            return Err(ParseError::TrailingToken {
                token: token.to_string(),
                expected,
            });
        }

        let grid = Grid::new(rows, cols, cells)?;
        let puzzle = Self::from_grid(grid)?;
        tracing::debug!(
            rows,
            cols,
            start = %puzzle.start,
            destination = %puzzle.destination,
            "parsed puzzle"
        );
        Ok(puzzle)
    }

    /// Locate both markers on an already-built grid.
    pub fn from_grid(grid: Grid) -> Result<Self, ParseError> {
        let start = locate(&grid, Marker::Start)?;
        let destination = locate(&grid, Marker::Destination)?;
        Ok(Self {
            grid,
            start,
            destination,
        })
    }

    /// Run the search for this puzzle.
    pub fn solve(&self, limits: ResourceLimits) -> Result<SearchReport, SearchError> {
        search::search(&self.grid, self.start, self.destination, limits)
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ParseOptions::default())
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

/// The pose covered by `marker`'s two cells.
pub fn locate(grid: &Grid, marker: Marker) -> Result<Pose, ParseError> {
    let cells: Vec<Coord> = grid.find(marker.cell_kind()).collect();
    match cells.as_slice() {
        [] => Err(ParseError::MissingMarker { marker }),
        &[a, b] => Pose::from_cells(a, b).ok_or(ParseError::MarkersNotAdjacent { marker, a, b }),
        other => Err(ParseError::MarkerCount {
            marker,
            found: other.len(),
        }),
    }
}

fn dimension(token: Option<&str>, what: &'static str) -> Result<usize, ParseError> {
    let token = token.ok_or(ParseError::MissingDimension { what })?;
    match token.parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ParseError::InvalidDimension {
            what,
            token: token.to_string(),
        }),
    }
}
