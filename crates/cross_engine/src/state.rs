//! A grid paired with the mark to move next.

use super::rules;
use super::{GameStatus, Grid, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Position in the game tree: a grid and whose turn it is.
///
/// States are plain values. Successors and scores are derived by the
/// [`Engine`](super::Engine), which caches them keyed by the state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Getters, Serialize, Deserialize)]
pub struct State {
    /// The grid.
    #[getter(copy)]
    grid: Grid,
    /// Mark placed by the next move.
    #[getter(copy)]
    to_move: Mark,
}

impl State {
    /// Creates a state.
    pub fn new(grid: Grid, to_move: Mark) -> Self {
        Self { grid, to_move }
    }

    /// Empty grid with X to move.
    pub fn initial() -> Self {
        Self::new(Grid::EMPTY, Mark::X)
    }

    /// The state after the mover fills `pos`.
    ///
    /// Does not check that `pos` is empty; see
    /// [`CrossAi::play`](super::CrossAi::play) for the validated entry point.
    pub fn play(&self, pos: Position) -> Self {
        Self::new(self.grid.with(pos, self.to_move), self.to_move.opponent())
    }

    /// Status of the grid.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.grid)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::initial()
    }
}
