//! Line evaluation.

use super::super::{GameStatus, Grid, Mark, Position};
use tracing::instrument;

/// The 8 lines in evaluation order: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating the lines of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineOutcome {
    /// No line is held by a single player.
    Undecided,
    /// The first decisive line is held by this mark.
    Won(Mark),
}

impl LineOutcome {
    /// Signed value: 0 when undecided, +1 for X, -1 for O.
    pub fn value(self) -> i64 {
        match self {
            LineOutcome::Undecided => 0,
            LineOutcome::Won(mark) => i64::from(mark.value()),
        }
    }

    /// Whether some line decided the game.
    pub fn is_decided(self) -> bool {
        self != LineOutcome::Undecided
    }
}

/// Evaluates the lines of a grid in fixed order.
///
/// Each line's values are summed and divided by 3 with truncation toward
/// zero, so only a line holding three equal marks yields a non-zero result.
/// The first such line decides.
#[instrument(level = "trace", skip(grid))]
pub fn evaluate_lines(grid: &Grid) -> LineOutcome {
    for [a, b, c] in LINES {
        let sum = grid.get(a).value() + grid.get(b).value() + grid.get(c).value();
        match sum / 3 {
            1 => return LineOutcome::Won(Mark::X),
            -1 => return LineOutcome::Won(Mark::O),
            _ => {}
        }
    }
    LineOutcome::Undecided
}

/// Status of a grid: a held line wins, otherwise a full grid is a draw.
pub fn status(grid: &Grid) -> GameStatus {
    match evaluate_lines(grid) {
        LineOutcome::Won(mark) => GameStatus::Won(mark),
        LineOutcome::Undecided if grid.is_full() => GameStatus::Draw,
        LineOutcome::Undecided => GameStatus::InProgress,
    }
}
