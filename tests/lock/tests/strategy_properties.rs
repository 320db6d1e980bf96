//! Cross-strategy acceptance properties: interception, escape, idempotence,
//! monotonicity.

use lock_tests::{load, CROSSING_JSON, FIXTURES, INTERCEPT_JSON, TRIO_JSON};
use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::{Direction, EvaderSet};
use pursuit_kernel::motion::knight::legal_moves;
use pursuit_search::{search, EvaderSpec, PathResult, Problem, SearchPolicyV1, Strategy};

fn solve(problem: &Problem, strategy: Strategy) -> pursuit_search::SearchResult {
    search(problem, strategy, &SearchPolicyV1::default()).unwrap()
}

#[test]
fn every_strategy_intercepts_a_single_evader() {
    let problem = load(INTERCEPT_JSON).unwrap().problem().unwrap();
    let evader = problem.evaders()[0];
    for strategy in Strategy::ALL {
        let result = solve(&problem, strategy);
        let PathResult::Found { cells, turns } = &result.path else {
            panic!("{strategy} found nothing: {:?}", result.termination);
        };
        assert_eq!(*turns as usize + 1, cells.len());
        let last = *cells.last().unwrap();
        let window = evader.catch_window(problem.board(), *turns);
        assert!(
            window.contains(last),
            "{strategy}: last cell {last} not in window {window:?} at ply {turns}"
        );
    }
}

#[test]
fn one_step_evaders_out_of_reach_are_not_found() {
    let d = 10;
    let hunter = Cell::new(4, 4);
    let board = pursuit_kernel::geometry::board::Board::new(d).unwrap();
    let opening = legal_moves(&board, hunter);
    let mut checked = 0;
    for start in board.interior_cells() {
        for direction in Direction::ALL {
            if direction.steps_to_exit(&board, start) != 1 || start == hunter {
                continue;
            }
            // Window at ply 1 is just the start cell.
            if opening.contains(start) {
                continue;
            }
            let problem =
                Problem::new(d, hunter, &[EvaderSpec::new(start, direction)]).unwrap();
            for strategy in [Strategy::BreadthFirst, Strategy::BestFirst] {
                assert_eq!(
                    solve(&problem, strategy).path,
                    PathResult::NotFound,
                    "{strategy} {start} {direction}"
                );
            }
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn identical_inputs_give_identical_results() {
    for (name, json) in FIXTURES {
        let problem = load(json).unwrap().problem().unwrap();
        for strategy in Strategy::ALL {
            let a = solve(&problem, strategy);
            let b = solve(&problem, strategy);
            assert_eq!(a.path, b.path, "{name} {strategy}");
            assert_eq!(a.stats, b.stats, "{name} {strategy}");
            assert_eq!(a.nodes, b.nodes, "{name} {strategy}");
        }
    }
}

#[test]
fn remaining_shrinks_monotonically_along_found_paths() {
    for json in [INTERCEPT_JSON, CROSSING_JSON, TRIO_JSON] {
        let problem = load(json).unwrap().problem().unwrap();
        for strategy in Strategy::ALL {
            let result = solve(&problem, strategy);
            let chain = result.goal_chain();
            if chain.is_empty() {
                continue;
            }
            let sizes: Vec<u32> = chain.iter().map(|n| n.remaining.len()).collect();
            assert!(sizes.windows(2).all(|w| w[1] <= w[0]), "{strategy}: {sizes:?}");
            for pair in chain.windows(2) {
                assert_eq!(
                    pair[1].remaining.difference(pair[0].remaining),
                    EvaderSet::empty()
                );
            }
            // The goal node itself completes the last capture.
            let goal = chain.last().unwrap();
            let caught = problem.caught_at(goal.cell, goal.remaining, goal.depth);
            assert_eq!(caught, goal.remaining);
            assert!(!goal.remaining.is_empty() || problem.evaders().is_empty());
        }
    }
}

#[test]
fn found_paths_are_legal_knight_walks() {
    for (name, json) in FIXTURES {
        let problem = load(json).unwrap().problem().unwrap();
        for strategy in Strategy::ALL {
            let result = solve(&problem, strategy);
            for pair in result.path.cells().windows(2) {
                assert!(
                    legal_moves(problem.board(), pair[0]).contains(pair[1]),
                    "{name} {strategy}: {} -> {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn breadth_first_is_never_beaten_on_turns() {
    for (name, json) in FIXTURES {
        let problem = load(json).unwrap().problem().unwrap();
        let Some(bfs) = solve(&problem, Strategy::BreadthFirst).path.turns() else {
            continue;
        };
        for strategy in [Strategy::DepthFirst, Strategy::BestFirst] {
            if let Some(t) = solve(&problem, strategy).path.turns() {
                assert!(t >= bfs, "{name} {strategy}: {t} < {bfs}");
            }
        }
    }
}

#[test]
fn edge_hunters_intercept_under_every_strategy() {
    // Hunter and evader both on the interior ring of an 8-board, where
    // most knight moves leave the evader's quadrant.
    let d = 8;
    let ring: Vec<Cell> = (1..=6)
        .flat_map(|x| (1..=6).map(move |y| Cell::new(x, y)))
        .filter(|c| c.x == 1 || c.x == 6 || c.y == 1 || c.y == 6)
        .collect();
    for &hunter in &ring {
        for &start in ring.iter().filter(|c| **c != hunter) {
            for direction in Direction::ALL {
                let problem =
                    Problem::new(d, hunter, &[EvaderSpec::new(start, direction)]).unwrap();
                if !solve(&problem, Strategy::BreadthFirst).path.is_found() {
                    continue;
                }
                for strategy in [Strategy::DepthFirst, Strategy::BestFirst] {
                    assert!(
                        solve(&problem, strategy).path.is_found(),
                        "{strategy}: hunter {hunter} evader {start} {direction}"
                    );
                }
            }
        }
    }
}
