use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;
use snake_pro::game::{
    Board, Command, Direction, GameConfig, GameEngine, GameState, Position, SnakeMode, autopilot,
};

fn command_for(code: u8) -> Command {
    match code % 8 {
        0 => Command::SetDirection(Direction::North),
        1 => Command::SetDirection(Direction::South),
        2 => Command::SetDirection(Direction::East),
        3 => Command::SetDirection(Direction::West),
        4 => Command::ToggleAi,
        5 => Command::Reverse,
        6 => Command::Fallback,
        _ => Command::PlayFoodSound,
    }
}

/// Plain BFS distances over non-blocked cells
fn distances(board: &Board, from: Position) -> Vec<(Position, usize)> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([(from, 0)]);
    let mut out = Vec::new();
    while let Some((cur, d)) = queue.pop_front() {
        out.push((cur, d));
        for next in board.neighbors(cur) {
            if !board.cell(next).is_blocked() && seen.insert(next) {
                queue.push_back((next, d + 1));
            }
        }
    }
    out
}

prop_compose! {
    fn arb_interior()(row in 1usize..9, col in 1usize..11) -> Position {
        Position::new(row, col)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_invariants_hold_under_random_play(
        seed in any::<u64>(),
        inputs in prop::collection::vec(prop::option::of(any::<u8>()), 1..250)
    ) {
        let mut engine = GameEngine::with_seed(GameConfig::new(12, 10), seed);
        let mut state = engine.reset().unwrap();

        for input in inputs {
            if let Some(code) = input {
                engine.apply(&mut state, command_for(code), &mut ());
            }
            let was_over = state.game_over;
            let before = state.cycle_num;
            engine.cycle(&mut state, &mut (), &mut ());

            if was_over {
                prop_assert_eq!(state.cycle_num, before);
            } else {
                prop_assert_eq!(state.cycle_num, before + 1);
            }
            if let Err(err) = state.verify_invariants() {
                prop_assert!(false, "invariant broken: {}", err);
            }
            for food in state.food.cells() {
                prop_assert!(!state.snake.contains(food));
            }
        }
    }

    #[test]
    fn test_double_reverse_restores_snake(
        seed in any::<u64>(),
        ticks in 0usize..120,
        ai in any::<bool>()
    ) {
        let mut engine = GameEngine::with_seed(GameConfig::new(12, 10), seed);
        let mut state = engine.reset().unwrap();
        engine.apply(&mut state, Command::ToggleAi, &mut ());
        for _ in 0..ticks {
            engine.cycle(&mut state, &mut (), &mut ());
        }
        if !ai {
            let heading = state.snake.mode().heading();
            state.snake.set_mode(SnakeMode::Going(heading));
        }

        let before = state.clone();
        state.snake.reverse(&mut state.board);
        state.snake.reverse(&mut state.board);

        prop_assert_eq!(
            state.snake.cells().collect::<Vec<_>>(),
            before.snake.cells().collect::<Vec<_>>()
        );
        prop_assert_eq!(&state.board, &before.board);
        prop_assert_eq!(state.snake.mode().is_ai(), ai);
        prop_assert_eq!(state.snake.mode().heading(), state.snake.heading_from_neck());
        if before.snake.mode().heading() == before.snake.heading_from_neck() {
            prop_assert_eq!(state.snake.mode(), before.snake.mode());
        }
    }

    #[test]
    fn test_bfs_path_is_shortest(
        food in prop::collection::vec(arb_interior(), 1..4),
        walls in prop::collection::vec(arb_interior(), 0..25)
    ) {
        let head = Position::new(1, 2);
        let food: Vec<Position> = {
            let mut seen = HashSet::new();
            food.into_iter()
                .filter(|p| *p != head && *p != Position::new(1, 1) && seen.insert(*p))
                .collect()
        };
        prop_assume!(!food.is_empty());

        let mut state = GameState::from_layout(
            10, 12, &[Position::new(1, 1), head], &food, SnakeMode::Ai(Direction::East),
        ).unwrap();
        for wall in walls {
            if state.board.cell(wall).is_open() {
                state.board.cell_mut(wall).become_body();
            }
        }

        let reachable: Vec<usize> = distances(&state.board, head)
            .into_iter()
            .filter(|(p, _)| food.contains(p))
            .map(|(_, d)| d)
            .collect();

        let outcome = autopilot::search(&mut state.board, head);
        match outcome.goal {
            Some(goal) => {
                let path = autopilot::path_from(&state.board, goal);
                prop_assert_eq!(path.last().copied(), Some(head));
                prop_assert_eq!(Some(path.len() - 1), reachable.iter().copied().min());
                for pair in path.windows(2) {
                    prop_assert!(pair[0].is_adjacent(pair[1]));
                }
                prop_assert!(head.is_adjacent(outcome.next));
                prop_assert_eq!(state.board.cell(outcome.next).parent(), Some(head));
            }
            None => prop_assert!(reachable.is_empty()),
        }
    }

    #[test]
    fn test_bfs_parent_grid_is_deterministic(
        food in prop::collection::vec(arb_interior(), 0..4),
    ) {
        let head = Position::new(1, 2);
        let food: Vec<Position> = {
            let mut seen = HashSet::new();
            food.into_iter()
                .filter(|p| *p != head && *p != Position::new(1, 1) && seen.insert(*p))
                .collect()
        };
        let build = || GameState::from_layout(
            10, 12, &[Position::new(1, 1), head], &food, SnakeMode::default(),
        ).unwrap();

        let mut first = build();
        let mut second = build();
        autopilot::search(&mut first.board, head);
        autopilot::search(&mut second.board, head);
        prop_assert_eq!(first.board.parents_to_string(), second.board.parents_to_string());
    }
}
