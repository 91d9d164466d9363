//! Memoized successor derivation and scoring.
//!
//! The score of a state is the value of its own lines plus the sum of the
//! scores of every successor:
//!
//! ```text
//! score(state) = evaluate_lines(grid) + Σ score(successor)
//! ```
//!
//! Non-terminal states always evaluate to zero, so the score adds up the
//! outcome of every terminal grid reachable from the state, one per distinct
//! continuation. It is not a minimax value: a state where X wins along many
//! branches scores high even if O can steer clear of all of them.
//!
//! Each of the four quantities has its own append-only table keyed by value.
//! Tables are owned by the engine, so independent engines never share entries
//! and sessions that share an engine share everything.

use super::config::EngineConfig;
use super::rules::{self, LineOutcome};
use super::{Grid, Position, State};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;
use tracing::{debug, instrument, trace};

/// A successor of a state together with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Candidate {
    /// Square filled to reach the successor.
    #[getter(copy)]
    position: Position,
    /// The successor state.
    #[getter(copy)]
    state: State,
    /// Score of the successor.
    #[getter(copy)]
    score: i64,
}

/// Snapshot of cache occupancy and effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CacheStats {
    /// Grids with a memoized line outcome.
    #[getter(copy)]
    lines: usize,
    /// Grids with memoized legal moves.
    #[getter(copy)]
    moves: usize,
    /// States with memoized successors.
    #[getter(copy)]
    successors: usize,
    /// States with a memoized score.
    #[getter(copy)]
    scores: usize,
    /// Lookups answered from a table.
    #[getter(copy)]
    hits: u64,
    /// Lookups that had to compute.
    #[getter(copy)]
    misses: u64,
}

/// Scoring engine with per-quantity memo tables.
#[derive(Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    lines: RefCell<HashMap<Grid, LineOutcome>>,
    moves: RefCell<HashMap<Grid, Rc<[Position]>>>,
    successors: RefCell<HashMap<State, Rc<[State]>>>,
    scores: RefCell<HashMap<State, i64>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl Engine {
    /// Creates an engine with empty tables.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        debug!(cache_enabled = config.cache_enabled(), "Creating engine");
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates an engine wrapped for sharing between sessions.
    pub fn shared(config: EngineConfig) -> Rc<Self> {
        Rc::new(Self::new(config))
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Line outcome of a grid.
    pub fn evaluate_lines(&self, grid: &Grid) -> LineOutcome {
        self.memoized(&self.lines, *grid, || rules::evaluate_lines(grid))
    }

    /// Legal moves of a grid, row-major. Empty when decided or full.
    pub fn legal_moves(&self, grid: &Grid) -> Rc<[Position]> {
        self.memoized(&self.moves, *grid, || {
            if self.evaluate_lines(grid).is_decided() {
                return Rc::from(Vec::new());
            }
            Rc::from(rules::open_positions(grid))
        })
    }

    /// States reachable by one move of the mover, in the order of
    /// [`legal_moves`](Self::legal_moves).
    pub fn successors(&self, state: State) -> Rc<[State]> {
        self.memoized(&self.successors, state, || {
            let next: Vec<State> = self
                .legal_moves(&state.grid())
                .iter()
                .map(|pos| state.play(*pos))
                .collect();
            Rc::from(next)
        })
    }

    /// Whether the state has no successors.
    pub fn is_terminal(&self, state: State) -> bool {
        self.successors(state).is_empty()
    }

    /// Summed outcome of every continuation from `state`.
    pub fn score(&self, state: State) -> i64 {
        self.memoized(&self.scores, state, || {
            let own = self.evaluate_lines(&state.grid()).value();
            let below: i64 = self
                .successors(state)
                .iter()
                .map(|next| self.score(*next))
                .sum();
            own + below
        })
    }

    /// Every successor of `state` with the square it fills and its score.
    #[instrument(skip(self), fields(to_move = %state.to_move()))]
    pub fn candidates(&self, state: State) -> Vec<Candidate> {
        let grid = state.grid();
        self.successors(state)
            .iter()
            .filter_map(|next| {
                let position = grid.changed_position(&next.grid())?;
                Some(Candidate {
                    position,
                    state: *next,
                    score: self.score(*next),
                })
            })
            .collect()
    }

    /// Current table sizes and hit counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            lines: self.lines.borrow().len(),
            moves: self.moves.borrow().len(),
            successors: self.successors.borrow().len(),
            scores: self.scores.borrow().len(),
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }

    /// Drops every memoized entry and resets the counters.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
        self.moves.borrow_mut().clear();
        self.successors.borrow_mut().clear();
        self.scores.borrow_mut().clear();
        self.hits.set(0);
        self.misses.set(0);
        debug!("Engine caches cleared");
    }

    /// Looks `key` up in `table`, computing and storing it on a miss.
    ///
    /// No borrow of `table` is held while `compute` runs, so computations may
    /// recurse into the same table.
    fn memoized<K, V>(&self, table: &RefCell<HashMap<K, V>>, key: K, compute: impl FnOnce() -> V) -> V
    where
        K: Eq + Hash + std::fmt::Debug,
        V: Clone,
    {
        if !self.config.cache_enabled() {
            return compute();
        }

        let hit = table.borrow().get(&key).cloned();
        if let Some(value) = hit {
            self.hits.set(self.hits.get() + 1);
            return value;
        }

        trace!(?key, "Cache miss");
        self.misses.set(self.misses.get() + 1);
        let value = compute();
        table.borrow_mut().insert(key, value.clone());
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_board_score() {
        let engine = Engine::default();
        assert_eq!(engine.score(State::initial()), 53280);
        assert_eq!(engine.score(State::new(Grid::EMPTY, Mark::O)), -53280);
    }

    #[test]
    fn test_full_draw_scores_zero() {
        let engine = Engine::default();
        let grid = Grid::from_rows([[1, -1, 1], [1, -1, -1], [-1, 1, 1]]);
        assert_eq!(engine.score(State::new(grid, Mark::O)), 0);
        assert!(engine.is_terminal(State::new(grid, Mark::O)));
    }

    #[test]
    fn test_won_grid_scores_its_line() {
        let engine = Engine::default();
        let grid = Grid::from_rows([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]);
        let state = State::new(grid, Mark::O);
        assert!(engine.is_terminal(state));
        assert_eq!(engine.score(state), 1);
    }

    #[test]
    fn test_successors_follow_legal_moves() {
        let engine = Engine::default();
        let state = State::initial().play(Position::Center);
        let successors = engine.successors(state);
        assert_eq!(successors.len(), 8);
        assert!(successors.iter().all(|s| s.to_move() == Mark::X));
        assert!(successors.iter().all(|s| s.grid().occupied() == 2));
    }

    #[test]
    fn test_candidates_after_center() {
        let engine = Engine::default();
        let state = State::initial().play(Position::Center);
        let candidates = engine.candidates(state);
        let scores: Vec<(Position, i64)> = candidates
            .iter()
            .map(|c| (c.position(), c.score()))
            .collect();
        assert_eq!(
            scores,
            vec![
                (Position::TopLeft, 1038),
                (Position::TopCenter, 1470),
                (Position::TopRight, 1038),
                (Position::MiddleLeft, 1470),
                (Position::MiddleRight, 1470),
                (Position::BottomLeft, 1038),
                (Position::BottomCenter, 1470),
                (Position::BottomRight, 1038),
            ]
        );
        assert_eq!(engine.score(state), 10032);
    }

    #[test]
    fn test_repeat_queries_hit_cache() {
        let engine = Engine::default();
        let state = State::initial().play(Position::TopLeft);
        let first = engine.score(state);
        let before = engine.stats();
        let second = engine.score(state);
        let after = engine.stats();
        assert_eq!(first, second);
        assert_eq!(after.misses(), before.misses());
        assert_eq!(after.hits(), before.hits() + 1);
    }

    #[test]
    fn test_uncached_engine_keeps_tables_empty() {
        let engine = Engine::new(EngineConfig::uncached());
        let state = State::new(
            Grid::from_rows([[1, -1, 0], [0, 1, 0], [0, 0, 0]]),
            Mark::O,
        );
        assert_eq!(engine.score(state), 269);
        assert_eq!(engine.stats(), CacheStats::default());
    }

    #[test]
    fn test_clear_resets_tables() {
        let engine = Engine::default();
        engine.score(State::initial().play(Position::Center));
        assert!(engine.stats().scores() > 0);
        engine.clear();
        assert_eq!(engine.stats(), CacheStats::default());
    }
}
