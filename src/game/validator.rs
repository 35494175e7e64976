use crate::models::{Board, Position};
use std::collections::HashSet;

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a valid path on the board
    pub fn is_valid_path(board: &Board, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that all positions are within bounds
        if !positions.iter().all(|pos| board.contains(*pos)) {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Check if two positions are adjacent (including diagonals)
    pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let row_diff = pos1.row.abs_diff(pos2.row);
        let col_diff = pos1.col.abs_diff(pos2.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// Concatenate the tiles under each position
    pub fn resolve(board: &Board, positions: &[Position]) -> String {
        positions.iter().map(|pos| board.tile(*pos)).collect()
    }
}
