//! Whole-tree properties of the scoring engine.

use cross_engine::rules::{self, LINES};
use cross_engine::{Engine, EngineConfig, Grid, LineOutcome, Mark, Position, Square, State};
use std::collections::HashSet;

fn holds_line(grid: &Grid, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| grid.get(*pos) == Square::Occupied(mark)))
}

/// Every state reachable from the empty board with X to move.
fn reachable(engine: &Engine) -> Vec<(State, usize)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(State::initial(), 0usize)];
    let mut out = Vec::new();
    while let Some((state, depth)) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        out.push((state, depth));
        for next in engine.successors(state).iter() {
            stack.push((*next, depth + 1));
        }
    }
    out
}

#[test]
fn test_line_outcomes_over_reachable_grids() {
    let engine = Engine::default();
    let states = reachable(&engine);
    assert!(!states.is_empty());

    for (state, _) in &states {
        let grid = state.grid();
        let outcome = engine.evaluate_lines(&grid);
        assert!((-1..=1).contains(&outcome.value()));
        assert!(
            !(holds_line(&grid, Mark::X) && holds_line(&grid, Mark::O)),
            "both players hold a line:\n{}",
            grid.display()
        );
        match outcome {
            LineOutcome::Won(mark) => assert!(holds_line(&grid, mark)),
            LineOutcome::Undecided => {
                assert!(!holds_line(&grid, Mark::X) && !holds_line(&grid, Mark::O))
            }
        }
    }
}

#[test]
fn test_no_moves_iff_decided_or_full() {
    let engine = Engine::default();
    for (state, _) in reachable(&engine) {
        let grid = state.grid();
        let moves = engine.legal_moves(&grid);
        let expect_none = engine.evaluate_lines(&grid).is_decided() || grid.is_full();
        assert_eq!(moves.is_empty(), expect_none);
        assert_eq!(moves.to_vec(), rules::legal_moves(&grid));
        assert_eq!(engine.is_terminal(state), expect_none);
    }
}

#[test]
fn test_games_end_within_nine_plies() {
    let engine = Engine::default();
    let states = reachable(&engine);
    let deepest = states.iter().map(|(_, depth)| *depth).max().unwrap();
    assert_eq!(deepest, 9);
    for (state, depth) in states {
        assert_eq!(state.grid().occupied(), depth);
        if depth == 9 {
            assert!(engine.is_terminal(state));
        }
    }
}

#[test]
fn test_memoization_is_transparent() {
    let cached = Engine::default();
    let uncached = Engine::new(EngineConfig::uncached());

    let openings = [
        State::initial().play(Position::Center),
        State::initial().play(Position::TopLeft).play(Position::Center),
        State::initial().play(Position::TopCenter).play(Position::BottomRight),
        State::new(Grid::from_rows([[1, -1, 0], [0, 1, 0], [0, 0, 0]]), Mark::O),
        State::new(Grid::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]), Mark::X),
    ];

    for state in openings {
        let first = cached.score(state);
        let again = cached.score(state);
        assert_eq!(first, again);
        assert_eq!(first, uncached.score(state));
    }
}

#[test]
fn test_known_scores() {
    let engine = Engine::default();
    let state = State::new(Grid::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]), Mark::X);
    assert_eq!(engine.score(state), -5);

    let scores: Vec<i64> = engine
        .candidates(state)
        .iter()
        .map(|c| c.score())
        .collect();
    assert_eq!(scores, vec![1, 5, -1, -5, -5]);
}

#[test]
fn test_full_draw_scores_zero() {
    let engine = Engine::default();
    let draw = Grid::from_rows([[1, -1, 1], [1, -1, -1], [-1, 1, 1]]);
    assert_eq!(engine.evaluate_lines(&draw), LineOutcome::Undecided);
    for mark in [Mark::X, Mark::O] {
        assert_eq!(engine.score(State::new(draw, mark)), 0);
    }
}
