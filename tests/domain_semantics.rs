use std::sync::Arc;
use std::thread;

use sofa_mover::config::SolverConfig;
use sofa_mover::grid::{Grid, Terrain};
use sofa_mover::scenario::{ParseError, Puzzle, UnknownCellPolicy};
use sofa_mover::search::{search, shortest, ResourceLimits, SearchError, SearchOutcome};
use sofa_mover::sofa::Pose;

#[test]
fn marker_cells_are_traversable() {
    // Marker cells are ordinary free cells for movement.
    let p: Puzzle = "1 6 s s 0 S S 0".parse().unwrap();
    assert_eq!(
        p.solve(ResourceLimits::default()).unwrap().outcome,
        SearchOutcome::Reached { steps: 3 }
    );

    // Sliding back over the start marker is just as legal.
    let back = shortest(&p.grid, p.destination, p.start).unwrap();
    assert_eq!(back, SearchOutcome::Reached { steps: 3 });
}

#[test]
fn obstacle_sigils_come_from_config() {
    let cfg: SolverConfig = serde_json::from_str(r##"{"obstacle_sigils": ["#"]}"##).unwrap();
    let text = "2 3\ns s #\n0 S S\n";
    let p = Puzzle::parse(text, &cfg.parse_options()).unwrap();
    // (0,2) is blocked, so right-then-down is out: down, right.
    assert_eq!(
        p.solve(cfg.limits).unwrap().outcome,
        SearchOutcome::Reached { steps: 2 }
    );

    // The default parser does not know `#`.
    assert!(matches!(
        text.parse::<Puzzle>(),
        Err(ParseError::UnknownCell { ch: '#', .. })
    ));
}

#[test]
fn lenient_policy_turns_unknown_cells_into_walls() {
    let cfg = SolverConfig {
        unknown_cells: UnknownCellPolicy::Obstacle,
        ..SolverConfig::default()
    };
    let p = Puzzle::parse("1 5 s s ? S S", &cfg.parse_options()).unwrap();
    assert_eq!(
        p.solve(cfg.limits).unwrap().outcome,
        SearchOutcome::Unreachable
    );
}

#[test]
fn invalid_poses_are_errors_not_outcomes() {
    let g = Grid::from_rows(&["0 0 0", "0 H 0"]).unwrap();
    assert!(g.is_blocked(Pose::vertical(0, 1).cells().unwrap()[1]));
    assert_eq!(
        shortest(&g, Pose::vertical(0, 1), Pose::horizontal(0, 0)),
        Err(SearchError::InvalidStart {
            pose: Pose::vertical(0, 1)
        })
    );
    assert_eq!(
        shortest(&g, Pose::horizontal(0, 0), Pose::horizontal(0, 2)),
        Err(SearchError::InvalidDestination {
            pose: Pose::horizontal(0, 2)
        })
    );
}

#[test]
fn searches_can_share_a_grid_across_threads() {
    let g = Arc::new(Grid::open(8, 8).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let g = Arc::clone(&g);
            thread::spawn(move || {
                shortest(g.as_ref(), Pose::horizontal(0, 0), Pose::horizontal(i + 1, 0))
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let got = h.join().unwrap().unwrap();
        assert_eq!(got, SearchOutcome::Reached { steps: i as u64 + 1 });
    }
}

#[test]
fn stats_count_work_done() {
    let g = Grid::open(1, 4).unwrap();
    let report = search(
        &g,
        Pose::horizontal(0, 0),
        Pose::horizontal(0, 2),
        ResourceLimits::default(),
    )
    .unwrap();
    // Expand (0,0) -> (0,1); expand (0,1) -> (0,0) again and (0,2), the target.
    assert_eq!(report.outcome, SearchOutcome::Reached { steps: 2 });
    assert_eq!(report.stats.expanded, 2);
    assert_eq!(report.stats.generated, 3);
    assert_eq!(report.stats.visited, 3);
}
