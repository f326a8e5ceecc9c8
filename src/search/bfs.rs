use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::grid::Terrain;
use crate::search::resources::{ResourceLimits, ResourceTracker};
use crate::search::SearchError;
use crate::sofa::moves::successors;
use crate::sofa::Pose;

const STAGE: &str = "bfs";

/// Upper bound on the up-front reservation for the visited set and frontier.
const INITIAL_RESERVE_CAP: usize = 1 << 16;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The destination is reachable; `steps` is the minimum move count.
    Reached { steps: u64 },
    /// No move sequence reaches the destination.
    Unreachable,
}

impl SearchOutcome {
    #[inline]
    pub fn steps(self) -> Option<u64> {
        match self {
            SearchOutcome::Reached { steps } => Some(steps),
            SearchOutcome::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        self.steps().is_some()
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Reached { steps } => write!(f, "{steps}"),
            SearchOutcome::Unreachable => f.write_str("Impossible"),
        }
    }
}

/// Work counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub expanded: u64,
    /// Legal successor poses produced across all expansions.
    pub generated: u64,
    /// Distinct poses inserted into the visited set, start included.
    pub visited: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    pose: Pose,
    steps: u64,
}

/// Minimum number of moves from `start` to `dest`, with default budgets.
pub fn shortest<T: Terrain + ?Sized>(
    terrain: &T,
    start: Pose,
    dest: Pose,
) -> Result<SearchOutcome, SearchError> {
    shortest_with_limits(terrain, start, dest, ResourceLimits::default())
}

pub fn shortest_with_limits<T: Terrain + ?Sized>(
    terrain: &T,
    start: Pose,
    dest: Pose,
    limits: ResourceLimits,
) -> Result<SearchOutcome, SearchError> {
    search(terrain, start, dest, limits).map(|r| r.outcome)
}

/// Breadth-first search from `start` to `dest`, reporting work counters.
///
/// The visited set is keyed by pose alone. A pose is marked visited when it is
/// first generated, so it enters the frontier at most once and at its minimum
/// distance; the destination is therefore detected on generation.
pub fn search<T: Terrain + ?Sized>(
    terrain: &T,
    start: Pose,
    dest: Pose,
    limits: ResourceLimits,
) -> Result<SearchReport, SearchError> {
    if !start.is_valid_on(terrain) {
        return Err(SearchError::InvalidStart { pose: start });
    }
    if !dest.is_valid_on(terrain) {
        return Err(SearchError::InvalidDestination { pose: dest });
    }

    let mut stats = SearchStats {
        visited: 1,
        ..SearchStats::default()
    };

    if start == dest {
        return Ok(finish(start, dest, SearchOutcome::Reached { steps: 0 }, stats));
    }

    let mut tracker = ResourceTracker::new(limits);
    tracker.bump_states(STAGE, 1)?;

    let (rows, cols) = terrain.dimensions();
    let reserve = rows
        .saturating_mul(cols)
        .saturating_mul(2)
        .min(INITIAL_RESERVE_CAP);

    let mut visited: FxHashSet<Pose> = FxHashSet::default();
    tracker.try_reserve_set(STAGE, "visited", &mut visited, reserve)?;
    let mut frontier: VecDeque<Node> = VecDeque::new();
    tracker.try_reserve_queue(STAGE, "frontier", &mut frontier, reserve)?;

    visited.insert(start);
    frontier.push_back(Node {
        pose: start,
        steps: 0,
    });

    while let Some(node) = frontier.pop_front() {
        stats.expanded += 1;
        let next = successors(terrain, node.pose);
        tracker.bump_edges(STAGE, next.len())?;
        stats.generated += next.len() as u64;

        for pose in next {
            if !visited.insert(pose) {
                continue;
            }
            tracker.bump_states(STAGE, 1)?;
            stats.visited += 1;

            let steps = node.steps + 1;
            if pose == dest {
                return Ok(finish(start, dest, SearchOutcome::Reached { steps }, stats));
            }
            frontier.push_back(Node { pose, steps });
        }
    }

    Ok(finish(start, dest, SearchOutcome::Unreachable, stats))
}

fn finish(start: Pose, dest: Pose, outcome: SearchOutcome, stats: SearchStats) -> SearchReport {
    tracing::debug!(
        %start,
        %dest,
        %outcome,
        reachable = outcome.is_reachable(),
        expanded = stats.expanded,
        generated = stats.generated,
        visited = stats.visited,
        "search finished"
    );
    SearchReport { outcome, stats }
}
