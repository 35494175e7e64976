use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a (row, col) offset, returning None if the result leaves a board of `size`
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Position { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board is empty")]
    Empty,
    #[error("read {found} rows, want {expected}")]
    WrongRowCount { expected: usize, found: usize },
    #[error("row {row}: read {found} tiles, want {expected} space-separated tiles")]
    WrongTileCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile at ({row}, {col}) is empty")]
    EmptyTile { row: usize, col: usize },
}

/// A square N x N board of lowercase tiles.
///
/// Tiles are strings rather than chars because a single cell may hold
/// several letters (the "qu" tile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    /// Row-major
    tiles: Vec<String>,
    /// Character count of each tile, parallel to `tiles`
    #[serde(skip)]
    tile_lengths: Vec<usize>,
}

impl Board {
    /// Build a board from already split rows. Tiles are lowercased.
    pub fn from_rows<R, T>(rows: R) -> Result<Self, BoardError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|tile| tile.as_ref().to_lowercase())
                    .collect()
            })
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut tiles = Vec::with_capacity(size * size);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::WrongTileCount {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
            for (col, tile) in cells.into_iter().enumerate() {
                if tile.is_empty() {
                    return Err(BoardError::EmptyTile { row, col });
                }
                tiles.push(tile);
            }
        }

        let tile_lengths = tiles.iter().map(|tile| tile.chars().count()).collect();

        Ok(Self {
            size,
            tiles,
            tile_lengths,
        })
    }

    /// Parse `size` whitespace-separated lines of tiles
    pub fn parse(input: &str, size: usize) -> Result<Self, BoardError> {
        let rows: Vec<Vec<&str>> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().collect())
            .collect();
        Self::check_shape(&rows, size)?;
        Self::from_rows(rows)
    }

    /// Check that `rows` has exactly `size` rows of `size` tiles each
    pub fn check_shape<T>(rows: &[Vec<T>], size: usize) -> Result<(), BoardError> {
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if rows.len() != size {
            return Err(BoardError::WrongRowCount {
                expected: size,
                found: rows.len(),
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::WrongTileCount {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Cell index in row-major order
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn tile(&self, pos: Position) -> &str {
        &self.tiles[self.index(pos)]
    }

    pub fn tile_len(&self, pos: Position) -> usize {
        self.tile_lengths[self.index(pos)]
    }

    /// All coordinates in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.tiles.chunks(self.size)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board = Board::parse("H r s p\ne f u n\ni o r e\ni r o y\n", 4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.tile(Position::new(0, 0)), "h");
        assert_eq!(board.tile(Position::new(3, 3)), "y");
        assert_eq!(board.to_string(), "h r s p\ne f u n\ni o r e\ni r o y");
    }

    #[test]
    fn test_multi_letter_tile() {
        let board = Board::from_rows([["Qu", "a"], ["t", "e"]]).unwrap();
        assert_eq!(board.tile(Position::new(0, 0)), "qu");
        assert_eq!(board.tile_len(Position::new(0, 0)), 2);
        assert_eq!(board.tile_len(Position::new(0, 1)), 1);
    }

    #[test]
    fn test_wrong_tile_count() {
        let err = Board::parse("a b c\nd e f\ng h\n", 3).unwrap_err();
        assert_eq!(
            err,
            BoardError::WrongTileCount {
                row: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_wrong_row_count() {
        let err = Board::parse("a b\n", 2).unwrap_err();
        assert_eq!(
            err,
            BoardError::WrongRowCount {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec!["a", "b"], vec!["c"]];
        assert!(matches!(
            Board::from_rows(rows),
            Err(BoardError::WrongTileCount { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_board_and_tile() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert_eq!(Board::from_rows(rows), Err(BoardError::Empty));
        assert_eq!(
            Board::from_rows([["a", ""], ["b", "c"]]),
            Err(BoardError::EmptyTile { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_offset_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, -1, 4), None);
        assert_eq!(corner.offset(1, 1, 4), Some(Position::new(1, 1)));

        let edge = Position::new(3, 2);
        assert_eq!(edge.offset(1, 0, 4), None);
        assert_eq!(edge.offset(-1, 1, 4), Some(Position::new(2, 3)));
        assert_eq!(edge.offset(0, 2, 4), None);
    }

    #[test]
    fn test_positions_row_major() {
        let board = Board::from_rows([["a", "b"], ["c", "d"]]).unwrap();
        let positions: Vec<Position> = board.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }
}
