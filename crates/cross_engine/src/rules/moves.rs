//! Move generation.

use super::super::{Grid, Position};
use super::lines::evaluate_lines;
use tracing::instrument;

/// Empty positions a player may fill, row-major.
///
/// A decided grid has no legal moves even if squares remain empty.
#[instrument(level = "trace", skip(grid))]
pub fn legal_moves(grid: &Grid) -> Vec<Position> {
    if evaluate_lines(grid).is_decided() {
        return Vec::new();
    }
    open_positions(grid)
}

/// Empty positions, row-major, whether or not a line is already held.
pub fn open_positions(grid: &Grid) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| grid.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_has_nine_moves() {
        assert_eq!(legal_moves(&Grid::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_filters_occupied() {
        let grid = Grid::from_rows([[1, 0, 0], [0, -1, 0], [0, 0, 0]]);
        let moves = legal_moves(&grid);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::TopLeft));
        assert!(!moves.contains(&Position::Center));
        assert!(moves.contains(&Position::BottomRight));
    }

    #[test]
    fn test_decided_grid_has_no_moves() {
        let grid = Grid::from_rows([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]);
        assert!(legal_moves(&grid).is_empty());
    }

    #[test]
    fn test_open_positions_ignore_decided_lines() {
        let grid = Grid::from_rows([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]);
        assert_eq!(
            open_positions(&grid),
            vec![
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_full_grid_has_no_moves() {
        let grid = Grid::from_rows([[1, -1, 1], [1, -1, -1], [-1, 1, 1]]);
        assert!(legal_moves(&grid).is_empty());
    }
}
