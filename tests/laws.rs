//! Property-based checks of the search over random small grids.
//!
//! 1. **Reflexive**: a pose is zero moves from itself.
//! 2. **Symmetric**: every move has an inverse, so distances agree both ways.
//! 3. **Bounded**: a finite answer never exceeds `2·M·N − 1`.
//! 4. **Enqueue once**: the visited count never exceeds the number of valid poses,
//!    and an unreachable search visits exactly the start's component.
//! 5. **Consistent**: one move changes the distance to a fixed target by at most one.
//! 6. **Open rooms**: with no obstacles every destination is reachable.
//! 7. **Oracle**: answers match a layered BFS over a plain boolean matrix that
//!    shares no move generation with the crate.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use sofa_mover::core::coord::Coord;
use sofa_mover::grid::{CellKind, Grid};
use sofa_mover::search::{search, shortest, ResourceLimits, SearchOutcome};
use sofa_mover::sofa::moves::successors;
use sofa_mover::sofa::{Orientation, Pose};

// ── Helpers ─────────────────────────────────────────────────────────────

fn grid_strategy(max_side: usize) -> impl Strategy<Value = Grid> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::bool::weighted(0.25), rows * cols).prop_map(move |blocked| {
            let cells = blocked
                .into_iter()
                .map(|b| if b { CellKind::Obstacle } else { CellKind::Free })
                .collect();
            Grid::new(rows, cols, cells).unwrap()
        })
    })
}

fn valid_poses(g: &Grid) -> Vec<Pose> {
    let mut out = Vec::new();
    for r in 0..g.rows() as i32 {
        for c in 0..g.cols() as i32 {
            for o in [Orientation::Horizontal, Orientation::Vertical] {
                let p = Pose::new(Coord::new(r, c), o);
                if p.is_valid_on(g) {
                    out.push(p);
                }
            }
        }
    }
    out
}

fn component(g: &Grid, from: Pose) -> HashSet<Pose> {
    let mut seen = HashSet::from([from]);
    let mut stack = vec![from];
    while let Some(p) = stack.pop() {
        for q in successors(g, p) {
            if seen.insert(q) {
                stack.push(q);
            }
        }
    }
    seen
}

/// Layer-by-layer BFS distances from `from`, keyed by `(row, col, vertical)`.
///
/// Legality is recomputed from the raw cell matrix so the oracle does not
/// depend on `Pose::is_valid_on`, `Move::apply` or `successors`.
fn oracle_distances(g: &Grid, from: Pose) -> HashMap<(usize, usize, bool), u64> {
    let (rows, cols) = (g.rows(), g.cols());
    let free: Vec<Vec<bool>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| matches!(g.cell(Coord::new(r as i32, c as i32)), Some(k) if !k.is_obstacle()))
                .collect()
        })
        .collect();
    let open = |r: usize, c: usize| r < rows && c < cols && free[r][c];
    let fits = |(r, c, v): (usize, usize, bool)| {
        open(r, c) && if v { open(r + 1, c) } else { open(r, c + 1) }
    };

    let start = (
        from.anchor.row as usize,
        from.anchor.col as usize,
        from.orientation == Orientation::Vertical,
    );
    let mut dist = HashMap::from([(start, 0u64)]);
    let mut layer = vec![start];
    let mut depth = 0;
    while !layer.is_empty() {
        depth += 1;
        let mut next = Vec::new();
        for (r, c, v) in layer {
            let mut cand = vec![(r + 1, c, v), (r, c + 1, v)];
            if r > 0 {
                cand.push((r - 1, c, v));
            }
            if c > 0 {
                cand.push((r, c - 1, v));
            }
            if open(r, c) && open(r + 1, c) && open(r, c + 1) && open(r + 1, c + 1) {
                cand.push((r, c, !v));
            }
            for q in cand {
                if fits(q) && !dist.contains_key(&q) {
                    dist.insert(q, depth);
                    next.push(q);
                }
            }
        }
        layer = next;
    }
    dist
}

/// A grid with at least one valid pose, plus two indices into its poses.
fn instance() -> impl Strategy<Value = (Grid, Pose, Pose)> {
    (grid_strategy(6), any::<usize>(), any::<usize>()).prop_filter_map(
        "grid admits no pose",
        |(g, i, j)| {
            let poses = valid_poses(&g);
            if poses.is_empty() {
                return None;
            }
            let a = poses[i % poses.len()];
            let b = poses[j % poses.len()];
            Some((g, a, b))
        },
    )
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reflexive((g, a, _b) in instance()) {
        prop_assert_eq!(shortest(&g, a, a).unwrap(), SearchOutcome::Reached { steps: 0 });
    }

    #[test]
    fn symmetric((g, a, b) in instance()) {
        prop_assert_eq!(shortest(&g, a, b).unwrap(), shortest(&g, b, a).unwrap());
    }

    #[test]
    fn bounded_by_pose_space((g, a, b) in instance()) {
        if let Some(k) = shortest(&g, a, b).unwrap().steps() {
            let cap = 2 * (g.rows() * g.cols()) as u64 - 1;
            prop_assert!(k <= cap);
        }
    }

    #[test]
    fn each_pose_enqueued_once((g, a, b) in instance()) {
        let report = search(&g, a, b, ResourceLimits::default()).unwrap();
        let reachable = component(&g, a);
        prop_assert!(report.stats.visited as usize <= valid_poses(&g).len());
        prop_assert!(report.stats.visited as usize <= reachable.len());
        match report.outcome {
            SearchOutcome::Unreachable => {
                prop_assert!(!reachable.contains(&b));
                prop_assert_eq!(report.stats.visited as usize, reachable.len());
                prop_assert_eq!(report.stats.expanded, report.stats.visited);
            }
            SearchOutcome::Reached { .. } => prop_assert!(reachable.contains(&b)),
        }
    }

    #[test]
    fn one_move_changes_distance_by_at_most_one((g, a, b) in instance()) {
        let base = shortest(&g, a, b).unwrap();
        for q in successors(&g, a) {
            let d = shortest(&g, q, b).unwrap();
            match (base.steps(), d.steps()) {
                (Some(x), Some(y)) => prop_assert!(x.abs_diff(y) <= 1),
                (None, None) => {}
                _ => prop_assert!(false, "neighbouring poses disagree on reachability"),
            }
        }
    }

    #[test]
    fn matches_layered_distance_oracle((g, a, b) in instance()) {
        let dist = oracle_distances(&g, a);
        let key = (
            b.anchor.row as usize,
            b.anchor.col as usize,
            b.orientation == Orientation::Vertical,
        );
        prop_assert_eq!(shortest(&g, a, b).unwrap().steps(), dist.get(&key).copied());
    }

    #[test]
    fn open_rooms_are_always_solvable(rows in 1usize..7, cols in 1usize..7, i in any::<usize>(), j in any::<usize>()) {
        let g = Grid::open(rows, cols).unwrap();
        let poses = valid_poses(&g);
        prop_assume!(!poses.is_empty());
        let a = poses[i % poses.len()];
        let b = poses[j % poses.len()];
        prop_assert!(shortest(&g, a, b).unwrap().is_reachable());
    }
}

#[test]
fn grids_without_a_two_by_two_never_rotate() {
    for (rows, cols) in [(1, 6), (6, 1)] {
        let g = Grid::open(rows, cols).unwrap();
        for p in valid_poses(&g) {
            for q in successors(&g, p) {
                assert_eq!(q.orientation, p.orientation);
            }
        }
    }
}
