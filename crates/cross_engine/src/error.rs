//! Error types for the cross engine.

use super::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Ways a human move can break the calling contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveErrorKind {
    /// Row or column outside `0..=2`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

/// Rejected human move with caller location tracking.
///
/// The session is left untouched when this is returned.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid move: {} at {}:{}", kind, file, line)]
pub struct MoveError {
    /// What was wrong with the move.
    pub kind: MoveErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MoveError {
    /// Creates a new move error.
    #[track_caller]
    #[instrument]
    pub fn new(kind: MoveErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns what was wrong with the move.
    pub fn kind(&self) -> MoveErrorKind {
        self.kind
    }
}

impl From<MoveErrorKind> for MoveError {
    #[track_caller]
    fn from(kind: MoveErrorKind) -> Self {
        Self::new(kind)
    }
}
