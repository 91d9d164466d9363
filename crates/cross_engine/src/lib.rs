//! Cross engine - memoized tic-tac-toe responder
//!
//! A human plays X, the engine plays O. After each human move the engine
//! scores every reply and takes the lowest, breaking ties at random.
//!
//! # Architecture
//!
//! - **Grid / State**: immutable board values, a grid paired with the mark to move
//! - **Rules**: line evaluation and move generation
//! - **Engine**: memo tables for line outcomes, moves, successors and scores
//! - **Selector**: the reply policy and its injectable tie-break
//! - **Session**: a game between a human and the engine
//!
//! # Scoring
//!
//! A state's score is the sum of the outcomes (+1 X wins, -1 O wins, 0 draw)
//! of every terminal grid reachable from it, counted once per continuation.
//! This is a summation heuristic, not minimax, and the engine is not an
//! optimal player.
//!
//! # Example
//!
//! ```
//! use cross_engine::{CrossAi, Engine, FirstTie, Reply};
//!
//! # fn example() -> Result<(), cross_engine::MoveError> {
//! let engine = Engine::shared(Default::default());
//! let mut ai = CrossAi::new(engine, FirstTie);
//!
//! let reply = ai.play(1, 1)?;
//! assert!(matches!(reply, Reply::Moved(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod error;
mod position;
pub mod rules;
mod selector;
mod session;
mod state;
mod types;

pub use action::Move;
pub use config::EngineConfig;
pub use engine::{CacheStats, Candidate, Engine};
pub use error::{MoveError, MoveErrorKind};
pub use position::Position;
pub use rules::LineOutcome;
pub use selector::{FirstTie, RandomTieBreak, Response, TieBreak, respond};
pub use session::{CrossAi, Reply, new_game};
pub use state::State;
pub use types::{GameStatus, Grid, Mark, Square};
