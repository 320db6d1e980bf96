//! Randomized interception: whenever breadth-first catches a single evader,
//! depth-first and every best-first heuristic catch it too.

use proptest::prelude::*;
use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::evader::Direction;
use pursuit_search::{
    search, EvaderSpec, HeuristicKind, Problem, SearchPolicyV1, Strategy as SearchStrategy,
};

const DIMENSION: i32 = 14;

fn interior_cell() -> impl Strategy<Value = Cell> {
    (1..=DIMENSION - 2, 1..=DIMENSION - 2).prop_map(|(x, y)| Cell::new(x, y))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn interceptable_evader_is_found_by_every_strategy(
        hunter in interior_cell(),
        start in interior_cell(),
        direction in direction()
    ) {
        prop_assume!(hunter != start);
        let problem = Problem::new(DIMENSION, hunter, &[EvaderSpec::new(start, direction)]).unwrap();
        let default = SearchPolicyV1::default();
        let bfs = search(&problem, SearchStrategy::BreadthFirst, &default).unwrap();
        let Some(shortest) = bfs.path.turns() else {
            return Ok(());
        };

        let dfs = search(&problem, SearchStrategy::DepthFirst, &default).unwrap();
        prop_assert!(dfs.path.is_found(), "depth_first missed {hunter} vs {start} {direction}");

        for heuristic in HeuristicKind::ALL {
            let policy = SearchPolicyV1 { heuristic, ..SearchPolicyV1::default() };
            let best = search(&problem, SearchStrategy::BestFirst, &policy).unwrap();
            let turns = best.path.turns();
            prop_assert!(
                turns.is_some_and(|t| t >= shortest),
                "best_first/{heuristic} gave {turns:?} for {hunter} vs {start} {direction}, bfs {shortest}"
            );
        }
    }
}
