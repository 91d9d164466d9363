//! Response policy for the automated player.

use super::engine::{Candidate, Engine};
use super::{Position, State};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Chooses one of several equally scored candidates.
///
/// This is the only source of non-determinism in the engine. Tests inject a
/// fixed choice; play uses [`RandomTieBreak`].
pub trait TieBreak {
    /// Returns an index in `0..tied`. `tied` is never zero.
    fn choose(&mut self, tied: usize) -> usize;
}

impl<T: TieBreak + ?Sized> TieBreak for &mut T {
    fn choose(&mut self, tied: usize) -> usize {
        (**self).choose(tied)
    }
}

impl<T: TieBreak + ?Sized> TieBreak for Box<T> {
    fn choose(&mut self, tied: usize) -> usize {
        (**self).choose(tied)
    }
}

/// Uniform choice driven by a random number generator.
#[derive(Debug, Clone)]
pub struct RandomTieBreak<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomTieBreak<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTieBreak<StdRng> {
    /// Reproducible choices from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Choices seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> TieBreak for RandomTieBreak<R> {
    fn choose(&mut self, tied: usize) -> usize {
        self.rng.random_range(0..tied)
    }
}

/// Always picks the first tied candidate in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstTie;

impl TieBreak for FirstTie {
    fn choose(&mut self, _tied: usize) -> usize {
        0
    }
}

/// Outcome of asking the policy for a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The state has no successors; nothing to play.
    Terminal,
    /// Fill `position`, reaching `next`.
    Move {
        /// Square to fill.
        position: Position,
        /// State after the move.
        next: State,
    },
}

/// Picks the lowest-scoring successor of `state`, breaking ties with `tie`.
///
/// O minimizes: negative scores favour O under the summation rule.
#[instrument(skip(engine, state, tie), fields(to_move = %state.to_move()))]
pub fn respond<T: TieBreak + ?Sized>(engine: &Engine, state: State, tie: &mut T) -> Response {
    let candidates = engine.candidates(state);
    let Some(best) = candidates.iter().map(Candidate::score).min() else {
        debug!("No successors, state is terminal");
        return Response::Terminal;
    };

    let tied: Vec<&Candidate> = candidates.iter().filter(|c| c.score() == best).collect();
    let index = tie.choose(tied.len());
    debug_assert!(index < tied.len(), "tie-break index {} out of {}", index, tied.len());
    let chosen = tied[index];
    debug!(
        score = best,
        tied = tied.len(),
        index,
        position = %chosen.position(),
        "Selected response"
    );

    Response::Move {
        position: chosen.position(),
        next: chosen.state(),
    }
}
