//! The dimension-10 scenario: hunter (5,5), evader (8,3) heading east.
//!
//! The expected outcome is derived from the opening move set intersected
//! with the evader's catch window at ply 1, never from a hard-coded path.

use lock_tests::{load, CONCRETE_JSON};
use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::knight::legal_moves;
use pursuit_search::{search, PathResult, SearchPolicyV1, Strategy, TerminationReasonV1};

#[test]
fn concrete_scenario_matches_opening_window_intersection() {
    let scenario = load(CONCRETE_JSON).unwrap();
    scenario.validate_placement().unwrap();
    let problem = scenario.problem().unwrap();
    let board = problem.board();
    let evader = problem.evaders()[0];
    assert_eq!(evader.steps_to_exit(board), 1);

    let window = evader.catch_window(board, 1);
    let opening = legal_moves(board, problem.hunter());
    let hits: Vec<Cell> = opening
        .iter()
        .copied()
        .filter(|c| window.contains(*c))
        .collect();

    for strategy in [Strategy::BreadthFirst, Strategy::BestFirst] {
        let result = search(&problem, strategy, &SearchPolicyV1::default()).unwrap();
        if hits.is_empty() {
            assert_eq!(result.path, PathResult::NotFound, "{strategy}");
            assert_eq!(result.termination, TerminationReasonV1::FrontierExhausted);
        } else {
            let cells = result.path.cells();
            assert_eq!(cells.len(), 2, "{strategy}");
            assert_eq!(cells[0], problem.hunter());
            assert!(hits.contains(&cells[1]), "{strategy}: {cells:?}");
        }
    }
}

#[test]
fn concrete_window_is_start_cell_only() {
    let problem = load(CONCRETE_JSON).unwrap().problem().unwrap();
    let window = problem.evaders()[0].catch_window(problem.board(), 1);
    assert_eq!(window.current, None);
    assert_eq!(window.adjacent, Some(Cell::new(8, 3)));
    assert!(!problem.evaders()[0].is_catchable_at(problem.board(), 2));
}
