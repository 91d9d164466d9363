//! Core domain types for the cross engine.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
///
/// `X` is always the human and moves first; `O` is always the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    /// The human player (+1).
    X,
    /// The automated player (-1).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Signed value of the mark: +1 for X, -1 for O.
    pub fn value(self) -> i8 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    /// Symbol used when rendering a grid.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell value on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    Empty,
    /// Square occupied by a player.
    Occupied(Mark),
}

impl Square {
    /// Signed value of the square: 0 when empty, otherwise the mark's value.
    pub fn value(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(mark) => mark.value(),
        }
    }
}

/// Immutable 3x3 grid.
///
/// Placing a mark produces a new grid; the original is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Grid {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Grid {
    /// The grid with no marks on it.
    pub const EMPTY: Grid = Grid {
        squares: [Square::Empty; 9],
    };

    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a grid from signed rows: 1 for X, -1 for O, anything else empty.
    pub fn from_rows(rows: [[i8; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                squares[row * 3 + col] = match value {
                    1 => Square::Occupied(Mark::X),
                    -1 => Square::Occupied(Mark::O),
                    _ => Square::Empty,
                };
            }
        }
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this grid with `mark` placed at `pos`.
    pub fn with(&self, pos: Position, mark: Mark) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(mark);
        Self { squares }
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// First position (row-major) where the two grids differ.
    pub fn changed_position(&self, other: &Grid) -> Option<Position> {
        Position::ALL
            .iter()
            .copied()
            .find(|pos| self.get(*pos) != other.get(*pos))
    }

    /// Formats the grid as a human-readable string.
    ///
    /// Empty squares show their board index so players can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(mark) => mark.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player holds a full line.
    Won(Mark),
    /// Board is full with no line held.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "Player {} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
