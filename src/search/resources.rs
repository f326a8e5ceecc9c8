//! Resource tracking and allocation guards for the search.
//!
//! The pose space of an M×N grid is at most `2·M·N`, so a search always
//! terminates; budgets exist so that callers handling very large grids get a
//! structured [`SearchError`] instead of an OOM abort.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::search::SearchError;

/// Search budgets. Not exact byte limits, but they track allocation size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceLimits {
    /// Poses admitted to the visited set.
    pub max_states: usize,
    /// Legal successor poses generated.
    pub max_edges: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 50_000_000,
            max_edges: 250_000_000,
        }
    }
}

/// Running counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ResourceCounts {
    states: u64,
    edges: u64,
}

#[derive(Debug, Clone)]
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "states",
            delta as u64,
            self.limits.max_states as u64,
            |c| &mut c.states,
        )
    }

    #[inline]
    pub fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "edges",
            delta as u64,
            self.limits.max_edges as u64,
            |c| &mut c.edges,
        )
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            tracing::warn!(stage, metric, limit, observed, "search budget exceeded");
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
            });
        }

        Ok(())
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        structure: &'static str,
        set: &mut FxHashSet<K>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: std::hash::Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed { stage, structure })
    }

    pub fn try_reserve_queue<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        queue: &mut std::collections::VecDeque<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        queue
            .try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed { stage, structure })
    }
}
