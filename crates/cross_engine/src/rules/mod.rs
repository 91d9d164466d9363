//! Game rules for the 3x3 grid.
//!
//! Pure functions over a [`Grid`](super::Grid). The [`Engine`](super::Engine)
//! memoizes them; they are exposed directly for callers that only need a
//! one-off answer.

pub mod lines;
pub mod moves;

pub use lines::{LINES, LineOutcome, evaluate_lines, status};
pub use moves::{legal_moves, open_positions};
