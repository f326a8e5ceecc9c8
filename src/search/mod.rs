//! Breadth-first search over sofa poses.
//!
//! - [`bfs`]: the search driver ([`bfs::shortest`] and friends).
//! - [`resources`]: optional budgets and allocation guards.

pub mod bfs;
pub mod resources;

pub use bfs::{search, shortest, shortest_with_limits, SearchOutcome, SearchReport, SearchStats};
pub use resources::{ResourceLimits, ResourceTracker};

use crate::sofa::Pose;

/// Errors returned by the search driver.
///
/// An unreachable destination is not an error; see [`SearchOutcome::Unreachable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid start pose {pose}: it leaves the grid or overlaps an obstacle")]
    InvalidStart { pose: Pose },
    #[error("invalid destination pose {pose}: it leaves the grid or overlaps an obstacle")]
    InvalidDestination { pose: Pose },
    /// A configured resource limit was exceeded.
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed})")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
    },
    /// A `try_reserve` allocation failed for a search structure.
    #[error("allocation failed at {stage} for {structure}")]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
    },
}
